// fixes unexpected `cfg` errors
// check https://solana.stackexchange.com/questions/17777/unexpected-cfg-condition-value-solana
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod consts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pricing;
pub mod states;
#[cfg(test)]
mod test_utils;

use instructions::*;
use pricing::{SwapDirection, SwapQuote};
use states::ConfigureParams;

declare_id!("HqotvpSKcvvctWKRjGBRjyLEkJRzFyZvra9Wybu9dVYs");

#[program]
pub mod bondfun {
    use super::*;

    /// Create or update the global config. The first caller becomes authority.
    pub fn configure(ctx: Context<Configure>, params: ConfigureParams) -> Result<()> {
        instructions::configure::handler(ctx, params)
    }

    pub fn launch(ctx: Context<Launch>, params: LaunchParams) -> Result<()> {
        instructions::launch::handler(ctx, params)
    }

    pub fn swap(
        ctx: Context<Swap>,
        amount: u64,
        direction: SwapDirection,
        min_out: u64,
    ) -> Result<SwapQuote> {
        instructions::swap::handler(ctx, amount, direction, min_out)
    }

    /// Simulate a swap against current reserves without moving funds.
    pub fn quote(ctx: Context<Quote>, amount: u64, direction: SwapDirection) -> Result<SwapQuote> {
        instructions::quote::handler(ctx, amount, direction)
    }

    pub fn migrate(ctx: Context<Migrate>, params: MigrateParams) -> Result<()> {
        instructions::migrate::handler(ctx, params)
    }
}
