use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};
use crate::errors::BondfunError;
use crate::events::MigrationCompleted;
use crate::states::{BondingCurve, GlobalConfig, PoolAccounts};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MigrateParams {
    pub minimum_sol_amount: u64,
    pub minimum_token_amount: u64,
}

#[derive(Accounts)]
pub struct Migrate<'info> {
    #[account(
        mut,
        constraint = global_config.authority == authority.key() @ BondfunError::UnauthorizedAddress
    )]
    pub authority: Signer<'info>,
    #[account(
        seeds = [GlobalConfig::SEED_PREFIX],
        bump = global_config.bump
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,
    #[account(
        mut,
        constraint = global_config.fee_recipient == fee_recipient.key() @ BondfunError::IncorrectFeeRecipient
    )]
    pub fee_recipient: SystemAccount<'info>,
    #[account(
        constraint = bonding_curve.mint == mint.key()
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,
    #[account(
        mut,
        seeds = [BondingCurve::SEED_PREFIX, mint.key().as_ref()],
        bump = bonding_curve.bump
    )]
    pub bonding_curve: Box<Account<'info, BondingCurve>>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = bonding_curve,
        associated_token::token_program = token_program,
    )]
    pub bonding_curve_token_account: Box<InterfaceAccount<'info, TokenAccount>>,
    /// CHECK: Owner and data are checked against the configured pool program
    pub pool_state: UncheckedAccount<'info>,
    /// CHECK: Address is derived from the pool state and owner is checked
    /// against the configured pool program
    #[account(mut)]
    pub pool_sol_vault: UncheckedAccount<'info>,
    #[account(mut)]
    pub pool_token_vault: Box<InterfaceAccount<'info, TokenAccount>>,
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<Migrate>, params: MigrateParams) -> Result<()> {
    let plan = ctx.accounts.bonding_curve.plan_migration(
        ctx.accounts.bonding_curve_token_account.amount,
        ctx.accounts.global_config.migration_fee_bps,
        params.minimum_sol_amount,
        params.minimum_token_amount,
    )?;

    let pool = PoolAccounts {
        pool_state: ctx.accounts.pool_state.key(),
        pool_state_owner: *ctx.accounts.pool_state.owner,
        pool_state_data_len: ctx.accounts.pool_state.data_len(),
        sol_vault: ctx.accounts.pool_sol_vault.key(),
        sol_vault_owner: *ctx.accounts.pool_sol_vault.owner,
        token_vault_mint: ctx.accounts.pool_token_vault.mint,
        token_vault_authority: ctx.accounts.pool_token_vault.owner,
    };
    pool.validate(&ctx.accounts.global_config.pool_program, &ctx.accounts.mint.key())?;

    let mint_key = ctx.accounts.mint.key();
    let seeds: &[&[&[u8]]] = &[&[
        BondingCurve::SEED_PREFIX,
        mint_key.as_ref(),
        &[ctx.accounts.bonding_curve.bump],
    ]];
    let cpi_accounts = TransferChecked {
        mint: ctx.accounts.mint.to_account_info(),
        from: ctx.accounts.bonding_curve_token_account.to_account_info(),
        to: ctx.accounts.pool_token_vault.to_account_info(),
        authority: ctx.accounts.bonding_curve.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_context = CpiContext::new(cpi_program, cpi_accounts).with_signer(seeds);
    token_interface::transfer_checked(cpi_context, plan.pool_token_amount, ctx.accounts.mint.decimals)?;

    // Must follow the CPI: the runtime rejects a CPI from an unbalanced caller
    let sol_out = plan
        .migration_fee
        .checked_add(plan.pool_sol_amount)
        .ok_or(BondfunError::MathOverflow)?;
    ctx.accounts.bonding_curve.sub_lamports(sol_out)?;
    ctx.accounts.fee_recipient.add_lamports(plan.migration_fee)?;
    ctx.accounts.pool_sol_vault.add_lamports(plan.pool_sol_amount)?;

    ctx.accounts.bonding_curve.seal_migrated();

    msg!(
        "Migrated {} lamports and {} tokens to pool {}",
        plan.pool_sol_amount,
        plan.pool_token_amount,
        pool.pool_state
    );
    emit!(MigrationCompleted {
        mint: mint_key,
        pool: pool.pool_state,
        sol_amount: plan.pool_sol_amount,
        token_amount: plan.pool_token_amount,
        migration_fee: plan.migration_fee,
    });

    Ok(())
}
