pub mod bonding_curve;
pub mod config;
pub mod pool;

pub use bonding_curve::*;
pub use config::*;
pub use pool::*;

use anchor_lang::prelude::*;

use crate::errors::BondfunError;

/// Deserialize one of this program's records from a raw account.
///
/// An account that was never created (system owned, no data) or belongs to
/// another program reads as `CurveNotInitialized`.
pub fn load_record<T: AccountDeserialize>(info: &AccountInfo) -> Result<T> {
    require!(
        info.owner == &crate::ID && !info.data_is_empty(),
        BondfunError::CurveNotInitialized
    );
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Write a record loaded with [`load_record`] back into its account.
pub fn store_record<T: AccountSerialize>(record: &T, info: &AccountInfo) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)
}
