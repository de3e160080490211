use anchor_lang::prelude::*;

use crate::consts::{
    BPS_DENOMINATOR, GLOBAL_CONFIG_SEED, MIN_INITIAL_VIRTUAL_SOL, MIN_VIRTUAL_TOKEN_SHARE_PCT,
};
use crate::errors::BondfunError;
use crate::pricing::SwapDirection;

/// Protocol-wide parameters. A single PDA per deployment.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct GlobalConfig {
    pub authority: Pubkey,
    pub fee_recipient: Pubkey,
    pub pool_program: Pubkey, // Liquidity pool program that receives migrated reserves
    pub curve_limit: u64,
    pub initial_virtual_token_reserve: u64,
    pub initial_virtual_sol_reserve: u64,
    pub initial_real_token_reserve: u64,
    pub total_token_supply: u64,
    // Fee percentages in basis points (10000 = 100%)
    pub buy_fee_bps: u64,
    pub sell_fee_bps: u64,
    pub migration_fee_bps: u64,
    pub max_price_impact_bps: u64,
    // Smallest accepted swap input: lamports for buys, token base units for sells
    pub min_buy_amount: u64,
    pub min_sell_amount: u64,
    pub is_paused: bool,
    pub bump: u8,
}

/// Everything `configure` writes except the authority, which is fixed by
/// the first caller.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ConfigureParams {
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
    pub max_price_impact_bps: u64,
    pub min_buy_amount: u64,
    pub min_sell_amount: u64,
    pub is_paused: bool,
}

impl ConfigureParams {
    pub fn validate(&self) -> Result<()> {
        for fee_bps in [self.buy_fee_bps, self.sell_fee_bps, self.migration_fee_bps] {
            require!(
                fee_bps <= BPS_DENOMINATOR,
                BondfunError::IncorrectValueRange
            );
        }
        require!(
            self.max_price_impact_bps > 0 && self.max_price_impact_bps <= BPS_DENOMINATOR,
            BondfunError::IncorrectValueRange
        );
        require!(
            self.initial_virtual_token_reserve > 0 && self.initial_virtual_sol_reserve > 0,
            BondfunError::IncorrectValueRange
        );
        // A curve needs room to grow toward completion.
        require_gt!(
            self.curve_limit,
            self.initial_virtual_sol_reserve,
            BondfunError::IncorrectValueRange
        );
        require_gt!(self.total_token_supply, 0, BondfunError::IncorrectValueRange);
        require_gte!(
            self.total_token_supply,
            self.initial_real_token_reserve,
            BondfunError::IncorrectValueRange
        );
        require!(
            self.pool_program != Pubkey::default(),
            BondfunError::IncorrectValueRange
        );
        self.validate_allocation()
    }

    /// Launch economics: deep enough virtual liquidity on both sides, and a
    /// sellable seed that the virtual token side can price.
    fn validate_allocation(&self) -> Result<()> {
        let virtual_token_floor = u128::from(self.total_token_supply)
            .checked_mul(u128::from(MIN_VIRTUAL_TOKEN_SHARE_PCT))
            .ok_or(BondfunError::MathOverflow)?
            / 100;
        require!(
            u128::from(self.initial_virtual_token_reserve) >= virtual_token_floor,
            BondfunError::InvalidTokenAllocation
        );
        require_gte!(
            self.initial_virtual_sol_reserve,
            MIN_INITIAL_VIRTUAL_SOL,
            BondfunError::InsufficientLiquidity
        );
        require_gte!(
            self.initial_virtual_token_reserve,
            self.initial_real_token_reserve,
            BondfunError::InvalidTokenAllocation
        );
        Ok(())
    }
}

impl GlobalConfig {
    pub const SEED_PREFIX: &'static [u8] = GLOBAL_CONFIG_SEED;

    /// A freshly allocated record is all zeroes until the first `configure`.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn is_authorized(&self, signer: &Pubkey) -> bool {
        self.is_initialized() && self.authority == *signer
    }

    /// Launch and swap are only allowed against a configured, running protocol.
    pub fn ensure_active(&self) -> Result<()> {
        require!(self.is_initialized(), BondfunError::CurveNotInitialized);
        require!(!self.is_paused, BondfunError::ContractPaused);
        Ok(())
    }

    pub fn fee_bps(&self, direction: SwapDirection) -> u64 {
        match direction {
            SwapDirection::Buy => self.buy_fee_bps,
            SwapDirection::Sell => self.sell_fee_bps,
        }
    }

    pub fn min_amount(&self, direction: SwapDirection) -> u64 {
        match direction {
            SwapDirection::Buy => self.min_buy_amount,
            SwapDirection::Sell => self.min_sell_amount,
        }
    }

    /// Validate `params` and build the record that replaces `self`.
    ///
    /// The first call records `signer` as authority; every later call must be
    /// made by that authority.
    pub fn reconfigured(&self, signer: Pubkey, params: &ConfigureParams, bump: u8) -> Result<Self> {
        let authority = if self.is_initialized() {
            require!(
                self.is_authorized(&signer),
                BondfunError::UnauthorizedAddress
            );
            self.authority
        } else {
            signer
        };
        params.validate()?;

        Ok(GlobalConfig {
            authority,
            fee_recipient: params.fee_recipient,
            pool_program: params.pool_program,
            curve_limit: params.curve_limit,
            initial_virtual_token_reserve: params.initial_virtual_token_reserve,
            initial_virtual_sol_reserve: params.initial_virtual_sol_reserve,
            initial_real_token_reserve: params.initial_real_token_reserve,
            total_token_supply: params.total_token_supply,
            buy_fee_bps: params.buy_fee_bps,
            sell_fee_bps: params.sell_fee_bps,
            migration_fee_bps: params.migration_fee_bps,
            max_price_impact_bps: params.max_price_impact_bps,
            min_buy_amount: params.min_buy_amount,
            min_sell_amount: params.min_sell_amount,
            is_paused: params.is_paused,
            bump,
        })
    }
}
