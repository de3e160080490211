use anchor_lang::prelude::*;

#[event]
pub struct ConfigurationInitialized {
    pub authority: Pubkey,
    pub fee_recipient: Pubkey,
    pub pool_program: Pubkey,
    pub curve_limit: u64,
    pub initial_virtual_token_reserve: u64,
    pub initial_virtual_sol_reserve: u64,
    pub initial_real_token_reserve: u64,
    pub total_token_supply: u64,
    pub buy_fee_bps: u64,
    pub sell_fee_bps: u64,
    pub migration_fee_bps: u64,
    pub is_paused: bool,
    pub timestamp: i64,
}

#[event]
pub struct ConfigurationUpdated {
    pub authority: Pubkey,
    pub old_fee_recipient: Pubkey,
    pub new_fee_recipient: Pubkey,
    pub old_curve_limit: u64,
    pub new_curve_limit: u64,
    pub old_buy_fee_bps: u64,
    pub new_buy_fee_bps: u64,
    pub old_sell_fee_bps: u64,
    pub new_sell_fee_bps: u64,
    pub old_migration_fee_bps: u64,
    pub new_migration_fee_bps: u64,
    pub old_is_paused: bool,
    pub new_is_paused: bool,
    pub timestamp: i64,
}

#[event]
pub struct TokenLaunched {
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub bonding_curve: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub total_supply: u64,
}

#[event]
pub struct TokenPurchased {
    pub mint: Pubkey,
    pub buyer: Pubkey,
    pub sol_amount: u64,
    pub token_amount: u64,
    pub fee_amount: u64,
    pub virtual_sol_reserve: u64,
    pub virtual_token_reserve: u64,
}

#[event]
pub struct TokenSold {
    pub mint: Pubkey,
    pub seller: Pubkey,
    pub token_amount: u64,
    pub sol_amount: u64,
    pub fee_amount: u64,
    pub virtual_sol_reserve: u64,
    pub virtual_token_reserve: u64,
}

#[event]
pub struct CurveCompleted {
    pub mint: Pubkey,
    pub bonding_curve: Pubkey,
    pub real_sol_reserve: u64,
    pub real_token_reserve: u64,
}

#[event]
pub struct MigrationCompleted {
    pub mint: Pubkey,
    pub pool: Pubkey,
    pub sol_amount: u64,
    pub token_amount: u64,
    pub migration_fee: u64,
}
