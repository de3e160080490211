//! Constant-product pricing for the bonding curve.
//!
//! Everything here is pure: callers pass in the current virtual reserves and
//! get back a [`SwapQuote`] describing the trade. Nothing is written until the
//! swap orchestrator commits the quote.
//!
//! Fees are taken from the input side before the curve is evaluated, and the
//! invariant `k = virtual_sol * virtual_token` is always computed in `u128`.

use anchor_lang::prelude::*;

use crate::consts::BPS_DENOMINATOR;
use crate::errors::BondfunError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapDirection {
    /// SOL in, tokens out
    Buy,
    /// Tokens in, SOL out
    Sell,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapQuote {
    pub amount_in: u64,
    pub fee: u64,
    pub net_in: u64,
    pub amount_out: u64,
    pub new_virtual_sol_reserve: u64,
    pub new_virtual_token_reserve: u64,
}

#[inline]
fn narrow(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(BondfunError::MathOverflow))
}

/// `floor(amount * fee_bps / 10000)`, i.e. `floor(amount * pct / 100)`.
pub fn fee_amount(amount: u64, fee_bps: u64) -> Result<u64> {
    require!(
        fee_bps <= BPS_DENOMINATOR,
        BondfunError::IncorrectValueRange
    );
    let fee = u128::from(amount)
        .checked_mul(u128::from(fee_bps))
        .and_then(|res| res.checked_div(u128::from(BPS_DENOMINATOR)))
        .ok_or(BondfunError::MathOverflow)?;
    narrow(fee)
}

/// Quote a swap of `amount_in` against the given virtual reserves.
pub fn quote_swap(
    virtual_sol_reserve: u64,
    virtual_token_reserve: u64,
    amount_in: u64,
    direction: SwapDirection,
    fee_bps: u64,
) -> Result<SwapQuote> {
    require!(
        virtual_sol_reserve > 0 && virtual_token_reserve > 0,
        BondfunError::InvalidReserves
    );

    let fee = fee_amount(amount_in, fee_bps)?;
    let net_in = amount_in
        .checked_sub(fee)
        .ok_or(BondfunError::MathOverflow)?;
    require!(net_in > 0, BondfunError::InsufficientFunds);

    let k = u128::from(virtual_sol_reserve)
        .checked_mul(u128::from(virtual_token_reserve))
        .ok_or(BondfunError::MathOverflow)?;

    let (new_virtual_sol_reserve, new_virtual_token_reserve, amount_out) = match direction {
        SwapDirection::Buy => {
            let new_virtual_sol = virtual_sol_reserve
                .checked_add(net_in)
                .ok_or(BondfunError::MathOverflow)?;
            let new_virtual_token = narrow(
                k.checked_div(u128::from(new_virtual_sol))
                    .ok_or(BondfunError::MathOverflow)?,
            )?;
            let tokens_out = virtual_token_reserve
                .checked_sub(new_virtual_token)
                .ok_or(BondfunError::MathOverflow)?;
            (new_virtual_sol, new_virtual_token, tokens_out)
        }
        SwapDirection::Sell => {
            let new_virtual_token = virtual_token_reserve
                .checked_add(net_in)
                .ok_or(BondfunError::MathOverflow)?;
            let new_virtual_sol = narrow(
                k.checked_div(u128::from(new_virtual_token))
                    .ok_or(BondfunError::MathOverflow)?,
            )?;
            let sol_out = virtual_sol_reserve
                .checked_sub(new_virtual_sol)
                .ok_or(BondfunError::MathOverflow)?;
            (new_virtual_sol, new_virtual_token, sol_out)
        }
    };

    // The curve must never be priced at a pole.
    require!(
        new_virtual_sol_reserve > 0 && new_virtual_token_reserve > 0,
        BondfunError::InvalidReserves
    );

    Ok(SwapQuote {
        amount_in,
        fee,
        net_in,
        amount_out,
        new_virtual_sol_reserve,
        new_virtual_token_reserve,
    })
}

/// Shortfall of `quote.amount_out` against what `quote.net_in` would buy at
/// the pre-trade spot price, in basis points.
pub fn price_impact_bps(
    quote: &SwapQuote,
    direction: SwapDirection,
    virtual_sol_reserve: u64,
    virtual_token_reserve: u64,
) -> Result<u64> {
    let (reserve_in, reserve_out) = match direction {
        SwapDirection::Buy => (virtual_sol_reserve, virtual_token_reserve),
        SwapDirection::Sell => (virtual_token_reserve, virtual_sol_reserve),
    };
    require!(reserve_in > 0, BondfunError::InvalidReserves);

    let spot_out = u128::from(quote.net_in)
        .checked_mul(u128::from(reserve_out))
        .and_then(|res| res.checked_div(u128::from(reserve_in)))
        .ok_or(BondfunError::MathOverflow)?;
    if spot_out == 0 {
        return Ok(0);
    }

    let retained_bps = u128::from(quote.amount_out)
        .checked_mul(u128::from(BPS_DENOMINATOR))
        .and_then(|res| res.checked_div(spot_out))
        .ok_or(BondfunError::MathOverflow)?;
    narrow(u128::from(BPS_DENOMINATOR).saturating_sub(retained_bps))
}
