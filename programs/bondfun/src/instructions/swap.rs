use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};
use crate::errors::BondfunError;
use crate::events::{CurveCompleted, TokenPurchased, TokenSold};
use crate::pricing::{SwapDirection, SwapQuote};
use crate::states::{load_record, store_record, BondingCurve, GlobalConfig, SwapOutcome};

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    /// CHECK: Loaded in the handler so a missing config reports CurveNotInitialized
    #[account(
        seeds = [GlobalConfig::SEED_PREFIX],
        bump
    )]
    pub global_config: UncheckedAccount<'info>,
    /// Checked against the config in the handler
    #[account(mut)]
    pub fee_recipient: SystemAccount<'info>,
    pub mint: Box<InterfaceAccount<'info, Mint>>,
    /// CHECK: Loaded and stored back in the handler so an unlaunched curve
    /// reports CurveNotInitialized
    #[account(
        mut,
        seeds = [BondingCurve::SEED_PREFIX, mint.key().as_ref()],
        bump
    )]
    pub bonding_curve: UncheckedAccount<'info>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = bonding_curve,
        associated_token::token_program = token_program,
    )]
    pub bonding_curve_token_account: Box<InterfaceAccount<'info, TokenAccount>>,
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint,
        associated_token::authority = user,
        associated_token::token_program = token_program,
    )]
    pub user_token_account: Box<InterfaceAccount<'info, TokenAccount>>,
    /// Receives sell fees; only required for sells
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint,
        associated_token::authority = fee_recipient,
        associated_token::token_program = token_program,
    )]
    pub fee_recipient_token_account: Option<Box<InterfaceAccount<'info, TokenAccount>>>,
    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(
    ctx: Context<Swap>,
    amount: u64,
    direction: SwapDirection,
    min_out: u64,
) -> Result<SwapQuote> {
    let config: GlobalConfig = load_record(&ctx.accounts.global_config)?;
    let mut curve: BondingCurve = load_record(&ctx.accounts.bonding_curve)?;
    require_keys_eq!(
        ctx.accounts.fee_recipient.key(),
        config.fee_recipient,
        BondfunError::IncorrectFeeRecipient
    );

    let outcome = curve.simulate_swap(&config, amount, direction, min_out)?;
    match direction {
        SwapDirection::Buy => buy(&ctx, &outcome)?,
        SwapDirection::Sell => sell(&ctx, &outcome)?,
    }

    curve.commit_swap(&outcome);
    store_record(&curve, &ctx.accounts.bonding_curve)?;

    let quote = outcome.quote;
    let mint = ctx.accounts.mint.key();
    match direction {
        SwapDirection::Buy => emit!(TokenPurchased {
            mint,
            buyer: ctx.accounts.user.key(),
            sol_amount: quote.amount_in,
            token_amount: quote.amount_out,
            fee_amount: quote.fee,
            virtual_sol_reserve: curve.virtual_sol_reserve,
            virtual_token_reserve: curve.virtual_token_reserve,
        }),
        SwapDirection::Sell => emit!(TokenSold {
            mint,
            seller: ctx.accounts.user.key(),
            token_amount: quote.amount_in,
            sol_amount: quote.amount_out,
            fee_amount: quote.fee,
            virtual_sol_reserve: curve.virtual_sol_reserve,
            virtual_token_reserve: curve.virtual_token_reserve,
        }),
    }

    if outcome.completes_curve {
        msg!("Bonding curve for {} completed", mint);
        emit!(CurveCompleted {
            mint,
            bonding_curve: ctx.accounts.bonding_curve.key(),
            real_sol_reserve: curve.real_sol_reserve,
            real_token_reserve: curve.real_token_reserve,
        });
    }

    Ok(quote)
}

fn buy(ctx: &Context<Swap>, outcome: &SwapOutcome) -> Result<()> {
    let quote = &outcome.quote;
    require_gte!(
        ctx.accounts.user.lamports(),
        quote.amount_in,
        BondfunError::InsufficientSolBalance
    );

    if quote.fee > 0 {
        let fee_transfer_cpi_context = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.fee_recipient.to_account_info(),
            },
        );
        anchor_lang::system_program::transfer(fee_transfer_cpi_context, quote.fee)?;
    }

    let sol_transfer_cpi_context = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        anchor_lang::system_program::Transfer {
            from: ctx.accounts.user.to_account_info(),
            to: ctx.accounts.bonding_curve.to_account_info(),
        },
    );
    anchor_lang::system_program::transfer(sol_transfer_cpi_context, quote.net_in)?;

    let mint_key = ctx.accounts.mint.key();
    let seeds: &[&[&[u8]]] = &[&[
        BondingCurve::SEED_PREFIX,
        mint_key.as_ref(),
        &[ctx.bumps.bonding_curve],
    ]];
    let cpi_accounts = TransferChecked {
        mint: ctx.accounts.mint.to_account_info(),
        from: ctx.accounts.bonding_curve_token_account.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
        authority: ctx.accounts.bonding_curve.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_context = CpiContext::new(cpi_program, cpi_accounts).with_signer(seeds);
    token_interface::transfer_checked(cpi_context, quote.amount_out, ctx.accounts.mint.decimals)
}

fn sell(ctx: &Context<Swap>, outcome: &SwapOutcome) -> Result<()> {
    let quote = &outcome.quote;
    let fee_recipient_token_account = ctx
        .accounts
        .fee_recipient_token_account
        .as_ref()
        .ok_or(BondfunError::IncorrectFeeRecipient)?;
    require_gte!(
        ctx.accounts.user_token_account.amount,
        quote.amount_in,
        BondfunError::InsufficientTokenBalance
    );
    let decimals = ctx.accounts.mint.decimals;

    if quote.fee > 0 {
        let cpi_accounts = TransferChecked {
            mint: ctx.accounts.mint.to_account_info(),
            from: ctx.accounts.user_token_account.to_account_info(),
            to: fee_recipient_token_account.to_account_info(),
            authority: ctx.accounts.user.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        token_interface::transfer_checked(
            CpiContext::new(cpi_program, cpi_accounts),
            quote.fee,
            decimals,
        )?;
    }

    let cpi_accounts = TransferChecked {
        mint: ctx.accounts.mint.to_account_info(),
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.bonding_curve_token_account.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    token_interface::transfer_checked(
        CpiContext::new(cpi_program, cpi_accounts),
        quote.net_in,
        decimals,
    )?;

    // The curve PDA is owned by this program, so lamports move directly
    ctx.accounts.bonding_curve.sub_lamports(quote.amount_out)?;
    ctx.accounts.user.add_lamports(quote.amount_out)?;
    Ok(())
}
