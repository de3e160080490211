use anchor_lang::prelude::*;

use crate::consts::POOL_SOL_VAULT_SEED;
use crate::errors::BondfunError;

/// The parts of the external liquidity pool that migration depends on.
///
/// The pool program itself is opaque; we only check that the accounts we
/// deposit into belong to the configured pool program, to this pool and to
/// this mint. The SOL vault is the pool program's PDA
/// `["sol_vault", pool_state]`.
#[derive(Clone, Copy, Debug)]
pub struct PoolAccounts {
    pub pool_state: Pubkey,
    pub pool_state_owner: Pubkey,
    pub pool_state_data_len: usize,
    pub sol_vault: Pubkey,
    pub sol_vault_owner: Pubkey,
    pub token_vault_mint: Pubkey,
    pub token_vault_authority: Pubkey,
}

impl PoolAccounts {
    pub fn validate(&self, pool_program: &Pubkey, mint: &Pubkey) -> Result<()> {
        require_keys_eq!(
            self.pool_state_owner,
            *pool_program,
            BondfunError::InvalidPoolOwner
        );
        require!(
            self.pool_state_data_len > 0,
            BondfunError::InvalidPoolState
        );
        require_keys_eq!(
            self.sol_vault_owner,
            *pool_program,
            BondfunError::InvalidPoolOwner
        );
        require_keys_eq!(
            self.sol_vault,
            Self::sol_vault_address(&self.pool_state, pool_program),
            BondfunError::InvalidPoolOwner
        );
        require_keys_eq!(
            self.token_vault_authority,
            self.pool_state,
            BondfunError::InvalidPoolOwner
        );
        require_keys_eq!(
            self.token_vault_mint,
            *mint,
            BondfunError::InvalidPoolTokens
        );
        Ok(())
    }

    pub fn sol_vault_address(pool_state: &Pubkey, pool_program: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[POOL_SOL_VAULT_SEED, pool_state.as_ref()], pool_program).0
    }
}
