use anchor_lang::prelude::*;
use crate::pricing::{SwapDirection, SwapQuote};
use crate::states::{load_record, BondingCurve, GlobalConfig};

/// Read-only view of what `swap` would do right now.
#[derive(Accounts)]
pub struct Quote<'info> {
    /// CHECK: Loaded in the handler so a missing config reports CurveNotInitialized
    #[account(
        seeds = [GlobalConfig::SEED_PREFIX],
        bump
    )]
    pub global_config: UncheckedAccount<'info>,
    /// CHECK: Only the key is used, to derive the curve address
    pub mint: UncheckedAccount<'info>,
    /// CHECK: Loaded in the handler so an unlaunched mint reports CurveNotInitialized
    #[account(
        seeds = [BondingCurve::SEED_PREFIX, mint.key().as_ref()],
        bump
    )]
    pub bonding_curve: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<Quote>, amount: u64, direction: SwapDirection) -> Result<SwapQuote> {
    let config: GlobalConfig = load_record(&ctx.accounts.global_config)?;
    let curve: BondingCurve = load_record(&ctx.accounts.bonding_curve)?;
    let outcome = curve.simulate_swap(&config, amount, direction, 0)?;
    Ok(outcome.quote)
}
