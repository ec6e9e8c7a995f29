//! Property tests for the basis-point fee split.

use num_bigint::BigUint;
use num_traits::Zero;
use pool_logic::{get_fee, get_fee_wide, Address, LogicError, PoolLogic, BASIS_POINTS};
use proptest::prelude::*;

/// Amounts of the protocol width (`uint120`).
fn note_value() -> impl Strategy<Value = u128> {
    0..(1u128 << 120)
}

/// Every rate the administrator can configure.
fn valid_rate() -> impl Strategy<Value = u128> {
    0..BASIS_POINTS
}

/// Up to 120 bytes, the widest amounts the reference arithmetic is exercised with.
fn wide_amount() -> impl Strategy<Value = BigUint> {
    prop::collection::vec(any::<u8>(), 1..=120).prop_map(|bytes| BigUint::from_bytes_be(&bytes))
}

proptest! {
    #[test]
    fn exclusive_then_inclusive_recovers_base(base in note_value(), fee_bp in valid_rate()) {
        let (exclusive_base, fee) = get_fee(base, false, fee_bp).unwrap();
        prop_assert_eq!(exclusive_base, base);

        let total = base + fee;
        let (inclusive_base, inclusive_fee) = get_fee(total, true, fee_bp).unwrap();
        prop_assert_eq!(inclusive_base + inclusive_fee, total);

        // Exact unless the exclusive fee was truncated, one unit short otherwise.
        let truncated = (base % BASIS_POINTS) * fee_bp % BASIS_POINTS != 0;
        prop_assert_eq!(inclusive_base, base - u128::from(truncated));
    }

    #[test]
    fn exact_fees_round_trip(multiple in 0..(1u128 << 106), fee_bp in valid_rate()) {
        let base = multiple * BASIS_POINTS;
        let (_, fee) = get_fee(base, false, fee_bp).unwrap();
        prop_assert_eq!(get_fee(base + fee, true, fee_bp), Ok((base, fee)));
    }

    #[test]
    fn wide_exclusive_then_inclusive(base in wide_amount(), fee_bp in valid_rate()) {
        let fee_bp = BigUint::from(fee_bp);
        let basis_points = BigUint::from(BASIS_POINTS);
        let (_, fee) = get_fee_wide(&base, false, &fee_bp);

        let total = &base + &fee;
        let (inclusive_base, inclusive_fee) = get_fee_wide(&total, true, &fee_bp);
        prop_assert_eq!(&inclusive_base + &inclusive_fee, total);

        let expected = if (&base * &fee_bp % &basis_points).is_zero() {
            base
        } else {
            base - 1u32
        };
        prop_assert_eq!(inclusive_base, expected);
    }

    #[test]
    fn inclusive_split_sums_to_amount(amount in any::<u128>(), fee_bp in valid_rate()) {
        let (base, fee) = get_fee(amount, true, fee_bp).unwrap();
        prop_assert_eq!(base + fee, amount);
        prop_assert!(base >= amount / 2);
    }

    #[test]
    fn exclusive_fee_never_exceeds_amount(amount in any::<u128>(), fee_bp in valid_rate()) {
        let (base, fee) = get_fee(amount, false, fee_bp).unwrap();
        prop_assert_eq!(base, amount);
        prop_assert!(fee <= amount);
    }

    #[test]
    fn invalid_rates_leave_config_untouched(rate in BASIS_POINTS..u128::MAX) {
        let admin = Address::new([1; 20]);
        let logic = PoolLogic::new();
        logic.initialize(Address::ZERO, 25, 25, 25, admin).unwrap();

        prop_assert_eq!(logic.change_fee(&admin, 1, rate, 1), Err(LogicError::InvalidRate(rate)));
        prop_assert_eq!(logic.withdraw_fee(), 25);
    }
}
