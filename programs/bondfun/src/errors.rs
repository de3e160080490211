use anchor_lang::prelude::*;

#[error_code]
pub enum BondfunError {
    #[msg("Unauthorized address")]
    UnauthorizedAddress,
    #[msg("Curve limit reached")]
    CurveLimitReached,
    #[msg("Value is not in expected range")]
    IncorrectValueRange,
    #[msg("Amount out is zero")]
    InsufficientAmountOut,
    #[msg("Amount is fully consumed by fees")]
    InsufficientFunds,
    #[msg("Incorrect fee recipient")]
    IncorrectFeeRecipient,
    #[msg("Curve reserves are invalid for pricing")]
    InvalidReserves,
    #[msg("Curve is not initialized")]
    CurveNotInitialized,
    #[msg("Curve is not completed")]
    CurveNotCompleted,
    #[msg("Curve is already migrated")]
    AlreadyMigrated,
    #[msg("Mathematical operation overflow")]
    MathOverflow,
    #[msg("Insufficient SOL balance")]
    InsufficientSolBalance,
    #[msg("Insufficient token balance")]
    InsufficientTokenBalance,
    #[msg("Invalid pool owner")]
    InvalidPoolOwner,
    #[msg("Invalid pool state")]
    InvalidPoolState,
    #[msg("Invalid pool tokens")]
    InvalidPoolTokens,
    #[msg("Amount out is below the requested minimum")]
    SlippageExceeded,
    #[msg("Program is paused")]
    ContractPaused,
    #[msg("Price impact exceeds the configured maximum")]
    PriceImpactExceeded,
    #[msg("Amount is below the configured minimum")]
    DustAmount,
    #[msg("Invalid token allocation")]
    InvalidTokenAllocation,
    #[msg("Initial virtual SOL reserve is too small")]
    InsufficientLiquidity,
}
