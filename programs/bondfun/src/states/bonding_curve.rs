use anchor_lang::prelude::*;

use crate::consts::{BONDING_CURVE_SEED, MAX_PRICE_IMPACT_DISABLED_BPS};
use crate::errors::BondfunError;
use crate::pricing::{fee_amount, price_impact_bps, quote_swap, SwapDirection, SwapQuote};
use crate::states::GlobalConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurvePhase {
    Uninitialized,
    Active,
    Completed,
    Migrated,
}

/// Per-mint reserve ledger. Created by `launch`, never closed.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct BondingCurve {
    pub mint: Pubkey,
    pub creator: Pubkey,
    // Pricing-only liquidity, never withdrawable
    pub virtual_token_reserve: u64,
    pub virtual_sol_reserve: u64,
    // Custodied balances backing sells and migration
    pub real_token_reserve: u64,
    pub real_sol_reserve: u64,
    // Minted into custody at launch but never sellable; goes to the pool on migration
    pub locked_token_reserve: u64,
    pub token_total_supply: u64,
    pub is_completed: bool,
    pub is_migrated: bool,
    pub bump: u8,
}

/// Effects of a validated swap, computed before anything is transferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapOutcome {
    pub direction: SwapDirection,
    pub quote: SwapQuote,
    pub real_sol_reserve: u64,
    pub real_token_reserve: u64,
    pub completes_curve: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MigrationPlan {
    pub migration_fee: u64,
    pub pool_sol_amount: u64,
    pub pool_token_amount: u64,
}

impl BondingCurve {
    pub const SEED_PREFIX: &'static [u8] = BONDING_CURVE_SEED;

    /// Seed a new curve from the global config.
    ///
    /// A zero `initial_real_token_reserve` makes the whole supply sellable;
    /// otherwise the rest of the supply is locked until migration.
    pub fn launch(mint: Pubkey, creator: Pubkey, config: &GlobalConfig, bump: u8) -> Result<Self> {
        config.ensure_active()?;

        let real_token_reserve = if config.initial_real_token_reserve == 0 {
            config.total_token_supply
        } else {
            config.initial_real_token_reserve
        };
        let locked_token_reserve = config
            .total_token_supply
            .checked_sub(real_token_reserve)
            .ok_or(BondfunError::InvalidTokenAllocation)?;

        Ok(BondingCurve {
            mint,
            creator,
            virtual_token_reserve: config.initial_virtual_token_reserve,
            virtual_sol_reserve: config.initial_virtual_sol_reserve,
            real_token_reserve,
            real_sol_reserve: 0,
            locked_token_reserve,
            token_total_supply: config.total_token_supply,
            is_completed: false,
            is_migrated: false,
            bump,
        })
    }

    pub fn phase(&self) -> CurvePhase {
        if self.token_total_supply == 0 {
            CurvePhase::Uninitialized
        } else if self.is_migrated {
            CurvePhase::Migrated
        } else if self.is_completed {
            CurvePhase::Completed
        } else {
            CurvePhase::Active
        }
    }

    pub fn ensure_tradable(&self) -> Result<()> {
        match self.phase() {
            CurvePhase::Active => Ok(()),
            CurvePhase::Uninitialized => err!(BondfunError::CurveNotInitialized),
            CurvePhase::Completed => err!(BondfunError::CurveLimitReached),
            CurvePhase::Migrated => err!(BondfunError::AlreadyMigrated),
        }
    }

    /// Price and validate a swap without touching the curve.
    ///
    /// Caller balances are checked by the instruction, which owns the
    /// accounts; everything that depends only on curve and config state is
    /// checked here.
    pub fn simulate_swap(
        &self,
        config: &GlobalConfig,
        amount: u64,
        direction: SwapDirection,
        min_out: u64,
    ) -> Result<SwapOutcome> {
        config.ensure_active()?;
        self.ensure_tradable()?;
        require_gt!(amount, 0, BondfunError::IncorrectValueRange);
        require_gte!(
            amount,
            config.min_amount(direction),
            BondfunError::DustAmount
        );

        let quote = quote_swap(
            self.virtual_sol_reserve,
            self.virtual_token_reserve,
            amount,
            direction,
            config.fee_bps(direction),
        )?;
        require_gt!(quote.amount_out, 0, BondfunError::InsufficientAmountOut);
        require_gte!(quote.amount_out, min_out, BondfunError::SlippageExceeded);

        if config.max_price_impact_bps < MAX_PRICE_IMPACT_DISABLED_BPS {
            let impact = price_impact_bps(
                &quote,
                direction,
                self.virtual_sol_reserve,
                self.virtual_token_reserve,
            )?;
            require_gte!(
                config.max_price_impact_bps,
                impact,
                BondfunError::PriceImpactExceeded
            );
        }

        let (real_sol_reserve, real_token_reserve) = match direction {
            SwapDirection::Buy => {
                require_gte!(
                    self.real_token_reserve,
                    quote.amount_out,
                    BondfunError::InsufficientTokenBalance
                );
                (
                    self.real_sol_reserve
                        .checked_add(quote.net_in)
                        .ok_or(BondfunError::MathOverflow)?,
                    self.real_token_reserve
                        .checked_sub(quote.amount_out)
                        .ok_or(BondfunError::MathOverflow)?,
                )
            }
            SwapDirection::Sell => {
                require_gte!(
                    self.real_sol_reserve,
                    quote.amount_out,
                    BondfunError::InsufficientSolBalance
                );
                (
                    self.real_sol_reserve
                        .checked_sub(quote.amount_out)
                        .ok_or(BondfunError::MathOverflow)?,
                    self.real_token_reserve
                        .checked_add(quote.net_in)
                        .ok_or(BondfunError::MathOverflow)?,
                )
            }
        };
        let custodied = real_token_reserve
            .checked_add(self.locked_token_reserve)
            .ok_or(BondfunError::MathOverflow)?;
        require_gte!(
            self.token_total_supply,
            custodied,
            BondfunError::InvalidReserves
        );

        Ok(SwapOutcome {
            direction,
            quote,
            real_sol_reserve,
            real_token_reserve,
            completes_curve: real_sol_reserve >= config.curve_limit,
        })
    }

    pub fn commit_swap(&mut self, outcome: &SwapOutcome) {
        self.virtual_sol_reserve = outcome.quote.new_virtual_sol_reserve;
        self.virtual_token_reserve = outcome.quote.new_virtual_token_reserve;
        self.real_sol_reserve = outcome.real_sol_reserve;
        self.real_token_reserve = outcome.real_token_reserve;
        if outcome.completes_curve {
            self.is_completed = true;
        }
    }

    /// Work out what migration moves, rejecting it if the curve is in the
    /// wrong phase or the pool would receive less than the caller's minimums.
    ///
    /// `custody_token_balance` is the curve's token account balance: the
    /// sellable `real_token_reserve` plus `locked_token_reserve`.
    pub fn plan_migration(
        &self,
        custody_token_balance: u64,
        migration_fee_bps: u64,
        minimum_sol_amount: u64,
        minimum_token_amount: u64,
    ) -> Result<MigrationPlan> {
        match self.phase() {
            CurvePhase::Completed => {}
            CurvePhase::Uninitialized => return err!(BondfunError::CurveNotInitialized),
            CurvePhase::Active => return err!(BondfunError::CurveNotCompleted),
            CurvePhase::Migrated => return err!(BondfunError::AlreadyMigrated),
        }
        let custodied = self
            .real_token_reserve
            .checked_add(self.locked_token_reserve)
            .ok_or(BondfunError::MathOverflow)?;
        require_gte!(
            custody_token_balance,
            custodied,
            BondfunError::InvalidReserves
        );

        let migration_fee = fee_amount(self.real_sol_reserve, migration_fee_bps)?;
        let pool_sol_amount = self
            .real_sol_reserve
            .checked_sub(migration_fee)
            .ok_or(BondfunError::MathOverflow)?;

        require_gte!(
            pool_sol_amount,
            minimum_sol_amount,
            BondfunError::InsufficientSolBalance
        );
        require_gte!(
            custody_token_balance,
            minimum_token_amount,
            BondfunError::InsufficientTokenBalance
        );

        Ok(MigrationPlan {
            migration_fee,
            pool_sol_amount,
            pool_token_amount: custody_token_balance,
        })
    }

    pub fn seal_migrated(&mut self) {
        self.is_migrated = true;
        self.real_sol_reserve = 0;
        self.real_token_reserve = 0;
        self.locked_token_reserve = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_error, scenario_config, SOL};

    fn launched() -> (GlobalConfig, BondingCurve) {
        let config = scenario_config();
        let curve =
            BondingCurve::launch(Pubkey::new_unique(), Pubkey::new_unique(), &config, 253).unwrap();
        (config, curve)
    }

    fn swap(
        curve: &mut BondingCurve,
        config: &GlobalConfig,
        amount: u64,
        direction: SwapDirection,
    ) -> SwapOutcome {
        let outcome = curve.simulate_swap(config, amount, direction, 0).unwrap();
        curve.commit_swap(&outcome);
        outcome
    }

    #[test]
    fn launch_seeds_from_config() {
        let (config, curve) = launched();

        assert_eq!(curve.virtual_sol_reserve, 2_200 * SOL);
        assert_eq!(curve.virtual_token_reserve, 800_000_000_000_000);
        assert_eq!(curve.real_sol_reserve, 0);
        assert_eq!(curve.real_token_reserve, config.total_token_supply);
        assert_eq!(curve.locked_token_reserve, 0);
        assert_eq!(curve.token_total_supply, 1_000_000_000_000_000);
        assert!(!curve.is_completed);
        assert!(!curve.is_migrated);
        assert_eq!(curve.phase(), CurvePhase::Active);
    }

    #[test]
    fn launch_uses_a_non_zero_real_token_seed() {
        let mut config = scenario_config();
        config.initial_real_token_reserve = 793_100_000_000_000;
        let curve =
            BondingCurve::launch(Pubkey::new_unique(), Pubkey::new_unique(), &config, 253).unwrap();
        assert_eq!(curve.real_token_reserve, 793_100_000_000_000);
        assert_eq!(curve.locked_token_reserve, 206_900_000_000_000);
        assert_eq!(
            curve.real_token_reserve + curve.locked_token_reserve,
            curve.token_total_supply
        );
    }

    #[test]
    fn locked_supply_is_conserved_through_trading_and_migration() {
        let mut config = scenario_config();
        config.initial_real_token_reserve = 793_100_000_000_000;
        let mut curve =
            BondingCurve::launch(Pubkey::new_unique(), Pubkey::new_unique(), &config, 253).unwrap();

        let bought = swap(&mut curve, &config, 50 * SOL, SwapDirection::Buy).quote.amount_out;
        let sold = swap(&mut curve, &config, bought / 4, SwapDirection::Sell).quote;
        let circulating = bought - sold.amount_in + sold.fee;
        assert_eq!(
            curve.real_token_reserve + curve.locked_token_reserve + circulating,
            curve.token_total_supply
        );

        curve.is_completed = true;
        let custody = curve.real_token_reserve + curve.locked_token_reserve;
        assert_error(
            curve.plan_migration(curve.real_token_reserve, 100, 0, 0),
            BondfunError::InvalidReserves,
        );
        let plan = curve.plan_migration(custody, 100, 0, 0).unwrap();
        assert_eq!(plan.pool_token_amount, custody);

        curve.seal_migrated();
        assert_eq!(curve.locked_token_reserve, 0);
    }

    #[test]
    fn launch_requires_an_active_config() {
        let mut config = scenario_config();
        config.is_paused = true;
        assert_error(
            BondingCurve::launch(Pubkey::new_unique(), Pubkey::new_unique(), &config, 253),
            BondfunError::ContractPaused,
        );
    }

    #[test]
    fn buy_moves_reserves_by_net_amount() {
        let (config, mut curve) = launched();

        let outcome = swap(&mut curve, &config, SOL, SwapDirection::Buy);

        assert_eq!(outcome.quote.fee, 10_000_000);
        assert_eq!(curve.real_sol_reserve, 990_000_000);
        assert_eq!(curve.virtual_sol_reserve, 2_200_990_000_000);
        assert_eq!(curve.virtual_token_reserve, 799_640_161_927_132);
        assert_eq!(
            curve.real_token_reserve,
            config.total_token_supply - outcome.quote.amount_out
        );
        assert!(!outcome.completes_curve);
    }

    #[test]
    fn sell_returns_sol_and_tokens_to_custody() {
        let (config, mut curve) = launched();
        let bought = swap(&mut curve, &config, 10 * SOL, SwapDirection::Buy).quote.amount_out;
        let real_sol_before = curve.real_sol_reserve;

        let sold = swap(&mut curve, &config, bought / 2, SwapDirection::Sell);

        assert_eq!(sold.quote.fee, (bought / 2) / 100);
        assert_eq!(curve.real_sol_reserve, real_sol_before - sold.quote.amount_out);
        assert_eq!(
            curve.real_token_reserve,
            config.total_token_supply - bought + sold.quote.net_in
        );
    }

    #[test]
    fn failed_slippage_check_leaves_curve_untouched() {
        let (config, curve) = launched();
        let expected = curve.simulate_swap(&config, SOL, SwapDirection::Buy, 0).unwrap();
        let before = curve.clone();

        assert_error(
            curve.simulate_swap(&config, SOL, SwapDirection::Buy, expected.quote.amount_out + 1),
            BondfunError::SlippageExceeded,
        );
        assert_eq!(curve, before);
        assert!(curve
            .simulate_swap(&config, SOL, SwapDirection::Buy, expected.quote.amount_out)
            .is_ok());
    }

    #[test]
    fn zero_amount_is_rejected() {
        let (config, curve) = launched();
        assert_error(
            curve.simulate_swap(&config, 0, SwapDirection::Buy, 0),
            BondfunError::IncorrectValueRange,
        );
    }

    #[test]
    fn selling_into_an_unfunded_curve_is_rejected() {
        let (config, curve) = launched();
        assert_error(
            curve.simulate_swap(&config, 1_000, SwapDirection::Sell, 0),
            BondfunError::InsufficientSolBalance,
        );
    }

    #[test]
    fn amounts_below_the_minimums_are_dust() {
        let (config, mut curve) = launched();
        swap(&mut curve, &config, SOL, SwapDirection::Buy);

        // One base unit would be paid a lamport and escape the fee entirely.
        assert_error(
            curve.simulate_swap(&config, 1, SwapDirection::Sell, 0),
            BondfunError::DustAmount,
        );
        assert_error(
            curve.simulate_swap(&config, 999, SwapDirection::Sell, 0),
            BondfunError::DustAmount,
        );
        assert_error(
            curve.simulate_swap(&config, 999_999, SwapDirection::Buy, 0),
            BondfunError::DustAmount,
        );

        let smallest_sell = curve.simulate_swap(&config, 1_000, SwapDirection::Sell, 0).unwrap();
        assert_eq!(smallest_sell.quote.fee, 10);
        assert!(curve.simulate_swap(&config, 1_000_000, SwapDirection::Buy, 0).is_ok());
    }

    #[test]
    fn curve_never_pays_out_more_sol_than_it_holds() {
        let mut config = scenario_config();
        config.buy_fee_bps = 0;
        config.sell_fee_bps = 0;
        let mut curve =
            BondingCurve::launch(Pubkey::new_unique(), Pubkey::new_unique(), &config, 253).unwrap();

        let bought = swap(&mut curve, &config, 5 * SOL, SwapDirection::Buy).quote.amount_out;

        // Flooring the buy leaves the seller one lamport ahead of the custody.
        assert_error(
            curve.simulate_swap(&config, bought, SwapDirection::Sell, 0),
            BondfunError::InsufficientSolBalance,
        );
    }

    #[test]
    fn buys_are_capped_by_sellable_inventory() {
        let mut config = scenario_config();
        config.initial_real_token_reserve = 1_000_000;
        let curve =
            BondingCurve::launch(Pubkey::new_unique(), Pubkey::new_unique(), &config, 253).unwrap();

        assert_error(
            curve.simulate_swap(&config, SOL, SwapDirection::Buy, 0),
            BondfunError::InsufficientTokenBalance,
        );
    }

    #[test]
    fn price_impact_cap_is_enforced() {
        let (mut config, curve) = launched();
        config.max_price_impact_bps = 1_000;

        assert!(curve.simulate_swap(&config, 100 * SOL, SwapDirection::Buy, 0).is_ok());
        assert_error(
            curve.simulate_swap(&config, 1_000 * SOL, SwapDirection::Buy, 0),
            BondfunError::PriceImpactExceeded,
        );
    }

    #[test]
    fn crossing_the_limit_completes_the_curve_once() {
        let (config, mut curve) = launched();

        for _ in 0..6 {
            let outcome = swap(&mut curve, &config, 10_000 * SOL, SwapDirection::Buy);
            assert!(!outcome.completes_curve);
        }
        assert_eq!(curve.real_sol_reserve, 59_400 * SOL);

        let outcome = swap(&mut curve, &config, 10_000 * SOL, SwapDirection::Buy);
        assert!(outcome.completes_curve);
        assert!(curve.is_completed);
        assert_eq!(curve.phase(), CurvePhase::Completed);

        assert_error(
            curve.simulate_swap(&config, SOL, SwapDirection::Buy, 0),
            BondfunError::CurveLimitReached,
        );
        assert_error(
            curve.simulate_swap(&config, 1_000_000, SwapDirection::Sell, 0),
            BondfunError::CurveLimitReached,
        );
    }

    #[test]
    fn completion_survives_a_sell_outcome() {
        let (config, mut curve) = launched();
        let mut outcome = curve.simulate_swap(&config, SOL, SwapDirection::Buy, 0).unwrap();
        outcome.completes_curve = true;
        curve.commit_swap(&outcome);

        let mut later = outcome;
        later.completes_curve = false;
        curve.commit_swap(&later);
        assert!(curve.is_completed);
    }

    #[test]
    fn migration_requires_a_completed_curve() {
        let (_, curve) = launched();
        assert_error(
            curve.plan_migration(curve.real_token_reserve, 100, 0, 0),
            BondfunError::CurveNotCompleted,
        );
    }

    #[test]
    fn migration_takes_the_fee_from_the_sol_side() {
        let (_, mut curve) = launched();
        curve.is_completed = true;
        curve.real_sol_reserve = 69_300 * SOL;
        curve.real_token_reserve = 225_000_000_000_000;

        let plan = curve
            .plan_migration(225_000_000_000_000, 100, 68_000 * SOL, 200_000_000_000_000)
            .unwrap();

        assert_eq!(plan.migration_fee, 693 * SOL);
        assert_eq!(plan.pool_sol_amount, 68_607 * SOL);
        assert_eq!(plan.pool_token_amount, 225_000_000_000_000);
    }

    #[test]
    fn migration_minimums_are_enforced() {
        let (_, mut curve) = launched();
        curve.is_completed = true;
        curve.real_sol_reserve = 100 * SOL;
        curve.real_token_reserve = 5_000;

        assert_error(
            curve.plan_migration(5_000, 100, 100 * SOL, 0),
            BondfunError::InsufficientSolBalance,
        );
        assert_error(
            curve.plan_migration(5_000, 100, 0, 5_001),
            BondfunError::InsufficientTokenBalance,
        );
    }

    #[test]
    fn sealed_curve_rejects_everything() {
        let (config, mut curve) = launched();
        curve.is_completed = true;
        curve.real_sol_reserve = 100 * SOL;

        curve.plan_migration(curve.real_token_reserve, 100, 0, 0).unwrap();
        curve.seal_migrated();

        assert_eq!(curve.real_sol_reserve, 0);
        assert_eq!(curve.real_token_reserve, 0);
        assert_eq!(curve.phase(), CurvePhase::Migrated);
        assert_error(curve.plan_migration(0, 100, 0, 0), BondfunError::AlreadyMigrated);
        assert_error(
            curve.simulate_swap(&config, SOL, SwapDirection::Buy, 0),
            BondfunError::AlreadyMigrated,
        );
    }
}
