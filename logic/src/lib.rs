//! Fee arithmetic and the governed treasury / fee configuration of the shielded pool.

pub mod admin;
pub mod errors;
pub mod fees;
#[cfg(test)]
mod tests;

pub use admin::{FeeConfig, PoolLogic, PoolState};
pub use errors::{LogicError, UnknownFeeKind};
pub use fees::{get_fee, get_fee_wide, FeeKind, BASIS_POINTS};
pub use pool_commitment::Address;
