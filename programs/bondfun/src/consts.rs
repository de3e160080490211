// Basis points denominator (10000 = 100%)
pub const BPS_DENOMINATOR: u64 = 10000;

// Price impact cap that turns the check off
pub const MAX_PRICE_IMPACT_DISABLED_BPS: u64 = BPS_DENOMINATOR;

pub const TOKEN_DECIMALS: u8 = 6;

// Launch allocation floors
pub const MIN_VIRTUAL_TOKEN_SHARE_PCT: u64 = 80;
pub const MIN_INITIAL_VIRTUAL_SOL: u64 = 1_000_000_000;

pub const GLOBAL_CONFIG_SEED: &[u8] = b"global_config";
pub const BONDING_CURVE_SEED: &[u8] = b"bonding_curve";

// Metaplex metadata field limits
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;

// Seed of the pool program's SOL vault, derived from the pool state
pub const POOL_SOL_VAULT_SEED: &[u8] = b"sol_vault";
