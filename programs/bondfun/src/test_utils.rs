use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::errors::BondfunError;
use crate::states::{ConfigureParams, GlobalConfig};

pub const SOL: u64 = 1_000_000_000;

pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: BondfunError) {
    match result {
        Err(Error::AnchorError(e)) => assert_eq!(
            e.error_code_number,
            u32::from(expected),
            "expected {expected:?}, got {}",
            e.error_name
        ),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}

/// 69k SOL limit, 2200 SOL / 800M token virtual depth, 1B supply, 1% fees,
/// 0.001 SOL / 1000 unit swap minimums.
pub fn scenario_params() -> ConfigureParams {
    ConfigureParams {
        fee_recipient: Pubkey::new_unique(),
        pool_program: Pubkey::new_unique(),
        curve_limit: 69_000 * SOL,
        initial_virtual_token_reserve: 800_000_000 * 1_000_000,
        initial_virtual_sol_reserve: 2_200 * SOL,
        initial_real_token_reserve: 0,
        total_token_supply: 1_000_000_000 * 1_000_000,
        buy_fee_bps: 100,
        sell_fee_bps: 100,
        migration_fee_bps: 100,
        max_price_impact_bps: 10_000,
        min_buy_amount: 1_000_000,
        min_sell_amount: 1_000,
        is_paused: false,
    }
}

pub fn scenario_config() -> GlobalConfig {
    GlobalConfig::default()
        .reconfigured(Pubkey::new_unique(), &scenario_params(), 255)
        .unwrap()
}
