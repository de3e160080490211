use anchor_lang::prelude::*;
use crate::states::{ConfigureParams, GlobalConfig};
use crate::events::{ConfigurationInitialized, ConfigurationUpdated};

#[derive(Accounts)]
pub struct Configure<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + GlobalConfig::INIT_SPACE,
        seeds = [GlobalConfig::SEED_PREFIX],
        bump
    )]
    pub global_config: Account<'info, GlobalConfig>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Configure>, params: ConfigureParams) -> Result<()> {
    let global_config = &mut ctx.accounts.global_config;
    let was_initialized = global_config.is_initialized();
    let previous = (**global_config).clone();

    let updated = previous.reconfigured(ctx.accounts.admin.key(), &params, ctx.bumps.global_config)?;
    global_config.set_inner(updated);

    let timestamp = Clock::get()?.unix_timestamp;
    if was_initialized {
        msg!("Global config updated by {}", ctx.accounts.admin.key());
        emit!(ConfigurationUpdated {
            authority: global_config.authority,
            old_fee_recipient: previous.fee_recipient,
            new_fee_recipient: global_config.fee_recipient,
            old_curve_limit: previous.curve_limit,
            new_curve_limit: global_config.curve_limit,
            old_buy_fee_bps: previous.buy_fee_bps,
            new_buy_fee_bps: global_config.buy_fee_bps,
            old_sell_fee_bps: previous.sell_fee_bps,
            new_sell_fee_bps: global_config.sell_fee_bps,
            old_migration_fee_bps: previous.migration_fee_bps,
            new_migration_fee_bps: global_config.migration_fee_bps,
            old_is_paused: previous.is_paused,
            new_is_paused: global_config.is_paused,
            timestamp,
        });
    } else {
        msg!("Global config initialized, authority {}", global_config.authority);
        emit!(ConfigurationInitialized {
            authority: global_config.authority,
            fee_recipient: global_config.fee_recipient,
            pool_program: global_config.pool_program,
            curve_limit: global_config.curve_limit,
            initial_virtual_token_reserve: global_config.initial_virtual_token_reserve,
            initial_virtual_sol_reserve: global_config.initial_virtual_sol_reserve,
            initial_real_token_reserve: global_config.initial_real_token_reserve,
            total_token_supply: global_config.total_token_supply,
            buy_fee_bps: global_config.buy_fee_bps,
            sell_fee_bps: global_config.sell_fee_bps,
            migration_fee_bps: global_config.migration_fee_bps,
            is_paused: global_config.is_paused,
            timestamp,
        });
    }

    Ok(())
}
