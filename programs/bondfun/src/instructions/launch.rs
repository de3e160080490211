use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::{
        create_metadata_accounts_v3, mpl_token_metadata::types::DataV2, CreateMetadataAccountsV3,
        Metadata,
    },
    token_2022::spl_token_2022::instruction::AuthorityType,
    token_interface::{self, Mint, MintTo, SetAuthority, TokenAccount, TokenInterface},
};
use crate::consts::{MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH, TOKEN_DECIMALS};
use crate::errors::BondfunError;
use crate::events::TokenLaunched;
use crate::states::{load_record, BondingCurve, GlobalConfig};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LaunchParams {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

impl LaunchParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            !self.name.is_empty() && self.name.len() <= MAX_NAME_LENGTH,
            BondfunError::IncorrectValueRange
        );
        require!(
            !self.symbol.is_empty() && self.symbol.len() <= MAX_SYMBOL_LENGTH,
            BondfunError::IncorrectValueRange
        );
        require!(
            self.uri.len() <= MAX_URI_LENGTH,
            BondfunError::IncorrectValueRange
        );
        Ok(())
    }
}

#[derive(Accounts)]
pub struct Launch<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,
    /// CHECK: Loaded in the handler so a missing config reports CurveNotInitialized
    #[account(
        seeds = [GlobalConfig::SEED_PREFIX],
        bump
    )]
    pub global_config: UncheckedAccount<'info>,
    #[account(
        init,
        payer = creator,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = bonding_curve.key(),
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,
    #[account(
        init,
        payer = creator,
        space = 8 + BondingCurve::INIT_SPACE,
        seeds = [BondingCurve::SEED_PREFIX, mint.key().as_ref()],
        bump
    )]
    pub bonding_curve: Box<Account<'info, BondingCurve>>,
    #[account(
        init,
        payer = creator,
        associated_token::mint = mint,
        associated_token::authority = bonding_curve,
        associated_token::token_program = token_program,
    )]
    pub bonding_curve_token_account: Box<InterfaceAccount<'info, TokenAccount>>,
    /// CHECK: Validate address by deriving pda
    #[account(
        mut,
        seeds = [b"metadata", token_metadata_program.key().as_ref(), mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub metadata_account: UncheckedAccount<'info>,
    pub token_metadata_program: Program<'info, Metadata>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<Launch>, params: LaunchParams) -> Result<()> {
    let config: GlobalConfig = load_record(&ctx.accounts.global_config)?;
    params.validate()?;

    let mint_key = ctx.accounts.mint.key();
    let curve = BondingCurve::launch(
        mint_key,
        ctx.accounts.creator.key(),
        &config,
        ctx.bumps.bonding_curve,
    )?;
    let total_supply = curve.token_total_supply;
    ctx.accounts.bonding_curve.set_inner(curve);

    let signer_seeds: &[&[&[u8]]] = &[&[
        BondingCurve::SEED_PREFIX,
        mint_key.as_ref(),
        &[ctx.bumps.bonding_curve],
    ]];

    msg!("Creating metadata account {}", ctx.accounts.metadata_account.key());
    create_metadata_accounts_v3(
        CpiContext::new(
            ctx.accounts.token_metadata_program.to_account_info(),
            CreateMetadataAccountsV3 {
                metadata: ctx.accounts.metadata_account.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                mint_authority: ctx.accounts.bonding_curve.to_account_info(),
                update_authority: ctx.accounts.creator.to_account_info(),
                payer: ctx.accounts.creator.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                rent: ctx.accounts.rent.to_account_info(),
            },
        )
        .with_signer(signer_seeds),
        DataV2 {
            name: params.name.clone(),
            symbol: params.symbol.clone(),
            uri: params.uri.clone(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        },
        false, // Is mutable
        true,  // Update authority is signer
        None,  // Collection details
    )?;

    // The whole supply lands in curve custody
    let cpi_accounts = MintTo {
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.bonding_curve_token_account.to_account_info(),
        authority: ctx.accounts.bonding_curve.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_context = CpiContext::new(cpi_program, cpi_accounts).with_signer(signer_seeds);
    token_interface::mint_to(cpi_context, total_supply)?;

    // Supply is fixed from here on
    let cpi_accounts = SetAuthority {
        current_authority: ctx.accounts.bonding_curve.to_account_info(),
        account_or_mint: ctx.accounts.mint.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_context = CpiContext::new(cpi_program, cpi_accounts).with_signer(signer_seeds);
    token_interface::set_authority(cpi_context, AuthorityType::MintTokens, None)?;

    msg!("Launched {} with supply {}", params.symbol, total_supply);
    emit!(TokenLaunched {
        mint: mint_key,
        creator: ctx.accounts.creator.key(),
        bonding_curve: ctx.accounts.bonding_curve.key(),
        name: params.name,
        symbol: params.symbol,
        uri: params.uri,
        total_supply,
    });

    Ok(())
}
