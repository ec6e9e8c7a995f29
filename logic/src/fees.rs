//! Basis-point fee arithmetic.
//!
//! Both modes multiply before dividing, with an arbitrary-precision intermediate, so no product is
//! ever truncated before the final floor division.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::errors::{LogicError, UnknownFeeKind};

/// Fee denominator: one basis point is 1/10000 of the amount.
pub const BASIS_POINTS: u128 = 10_000;

/// The operation a fee is charged on; selects which configured rate applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeKind {
    Deposit,
    Withdraw,
    Nft,
}

impl FromStr for FeeKind {
    type Err = UnknownFeeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(FeeKind::Deposit),
            "withdraw" => Ok(FeeKind::Withdraw),
            "nft" => Ok(FeeKind::Nft),
            other => Err(UnknownFeeKind(other.to_string())),
        }
    }
}

impl Display for FeeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FeeKind::Deposit => write!(f, "deposit"),
            FeeKind::Withdraw => write!(f, "withdraw"),
            FeeKind::Nft => write!(f, "nft"),
        }
    }
}

/// Splits `amount` into `(base, fee)`.
///
/// * exclusive: `base = amount`, `fee = floor(amount * fee_bp / 10000)`;
/// * inclusive: `base = floor(amount * 10000 / (10000 + fee_bp))`, `fee = amount - base`.
///
/// Fails with [`LogicError::Overflow`] only if a result does not fit in `u128`, which needs a
/// rate above 10000 basis points.
pub fn get_fee(amount: u128, inclusive: bool, fee_bp: u128) -> Result<(u128, u128), LogicError> {
    let (base, fee) = get_fee_wide(&BigUint::from(amount), inclusive, &BigUint::from(fee_bp));
    Ok((narrow(&base)?, narrow(&fee)?))
}

/// [`get_fee`] without an upper bound on the amount.
pub fn get_fee_wide(amount: &BigUint, inclusive: bool, fee_bp: &BigUint) -> (BigUint, BigUint) {
    let basis_points = BigUint::from(BASIS_POINTS);

    if inclusive {
        let base = amount * &basis_points / (&basis_points + fee_bp);
        let fee = amount - &base;
        (base, fee)
    } else {
        let fee = amount * fee_bp / &basis_points;
        (amount.clone(), fee)
    }
}

fn narrow(value: &BigUint) -> Result<u128, LogicError> {
    value.to_u128().ok_or(LogicError::Overflow)
}
