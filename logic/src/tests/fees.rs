use num_bigint::BigUint;
use num_traits::Zero;
use rand::{thread_rng, Rng, RngCore};

use crate::{
    errors::{LogicError, UnknownFeeKind},
    fees::{get_fee, get_fee_wide, FeeKind},
};

/// Reference formulas, computed the slow way.
fn reference_fee(amount: &BigUint, inclusive: bool, fee_bp: u32) -> (BigUint, BigUint) {
    let basis_points = BigUint::from(10_000u32);
    if inclusive {
        let base = amount * &basis_points / (basis_points + BigUint::from(fee_bp));
        (base.clone(), amount - base)
    } else {
        (amount.clone(), amount * BigUint::from(fee_bp) / basis_points)
    }
}

fn random_amount(rng: &mut impl RngCore, bytes: usize) -> BigUint {
    let mut buf = vec![0u8; bytes];
    rng.fill_bytes(&mut buf);
    BigUint::from_bytes_be(&buf)
}

#[test]
fn test_exclusive_truncates() {
    assert_eq!(get_fee(1000, false, 25), Ok((1000, 2)));
    assert_eq!(get_fee(10_000, false, 25), Ok((10_000, 25)));
    assert_eq!(get_fee(399, false, 25), Ok((399, 0)));
}

#[test]
fn test_inclusive_formula() {
    // 1_000_000 * 10000 / 19999 = 500025.00125..
    assert_eq!(get_fee(1_000_000, true, 9999), Ok((500_025, 499_975)));
    // 1025 * 10000 / 10025 = 1022.44..
    assert_eq!(get_fee(1025, true, 25), Ok((1022, 3)));
    assert_eq!(get_fee(10_025, true, 25), Ok((10_000, 25)));
}

#[test]
fn test_zero_rate_and_zero_amount() {
    assert_eq!(get_fee(12345, false, 0), Ok((12345, 0)));
    assert_eq!(get_fee(12345, true, 0), Ok((12345, 0)));
    assert_eq!(get_fee(0, false, 9999), Ok((0, 0)));
    assert_eq!(get_fee(0, true, 9999), Ok((0, 0)));
}

#[test]
fn test_full_width_amount_does_not_overflow() {
    let (base, fee) = get_fee(u128::MAX, false, 9999).unwrap();
    assert_eq!(base, u128::MAX);
    assert_eq!(fee, u128::MAX / 10_000 * 9999 + (u128::MAX % 10_000) * 9999 / 10_000);

    let (base, fee) = get_fee(u128::MAX, true, 9999).unwrap();
    assert_eq!(base + fee, u128::MAX);
}

#[test]
fn test_oversized_rate_overflows_exclusive_only() {
    assert_eq!(get_fee(u128::MAX, false, 20_000), Err(LogicError::Overflow));
    // Just below 10000 once the rate dwarfs the amount.
    assert_eq!(
        get_fee(u128::MAX, true, u128::MAX),
        Ok((9999, u128::MAX - 9999))
    );
}

#[test]
fn test_calculate_fee() {
    let mut rng = thread_rng();

    for fee_bp in 0..10u32 {
        for bytes in 1..=120 {
            let base_exclusive = random_amount(&mut rng, bytes);
            let (_, fee_exclusive) = reference_fee(&base_exclusive, false, fee_bp);

            let result_exclusive = get_fee_wide(&base_exclusive, false, &fee_bp.into());
            assert_eq!(result_exclusive, (base_exclusive.clone(), fee_exclusive.clone()));

            let total_inclusive = &base_exclusive + &fee_exclusive;
            let result_inclusive = get_fee_wide(&total_inclusive, true, &fee_bp.into());
            assert_eq!(
                result_inclusive,
                reference_fee(&total_inclusive, true, fee_bp)
            );

            // The inclusive base falls one short whenever the exclusive fee was truncated.
            let truncated = !(&base_exclusive * fee_bp % 10_000u32).is_zero();
            let expected_base = if truncated {
                &base_exclusive - 1u32
            } else {
                base_exclusive
            };
            let (base_inclusive, fee_inclusive) = result_inclusive;
            assert_eq!(&base_inclusive + &fee_inclusive, total_inclusive);
            assert_eq!(base_inclusive, expected_base);
        }
    }
}

#[test]
fn test_exclusive_then_inclusive() {
    let mut rng = thread_rng();

    for _ in 0..1000 {
        let fee_bp = rng.gen_range(0..10_000u128);
        let base = rng.gen_range(0..1u128 << 120);

        let (_, fee) = get_fee(base, false, fee_bp).unwrap();
        let total = base + fee;
        let (base_inclusive, fee_inclusive) = get_fee(total, true, fee_bp).unwrap();

        let truncated = (base % 10_000) * fee_bp % 10_000 != 0;
        assert_eq!(base_inclusive, base - u128::from(truncated));
        assert_eq!(base_inclusive + fee_inclusive, total);
    }
}

#[test]
fn test_round_trip_is_exact_without_truncation() {
    assert_eq!(get_fee(12345, true, 0), Ok((12345, 0)));
    // 10000 * 25 is a multiple of 10000, so nothing is lost.
    let (_, fee) = get_fee(10_000, false, 25).unwrap();
    assert_eq!(get_fee(10_000 + fee, true, 25), Ok((10_000, 25)));
    let (_, fee) = get_fee(400, false, 2500).unwrap();
    assert_eq!(get_fee(400 + fee, true, 2500), Ok((400, 100)));
}

#[test]
fn test_round_trip_loses_truncated_remainder() {
    // 1000 * 25 / 10000 = 2.5, truncated to 2.
    assert_eq!(get_fee(1000, false, 25), Ok((1000, 2)));
    assert_eq!(get_fee(1002, true, 25), Ok((999, 3)));
    // 12345 * 1 / 10000 = 1.2345, truncated to 1.
    assert_eq!(get_fee(12345, false, 1), Ok((12345, 1)));
    assert_eq!(get_fee(12346, true, 1), Ok((12344, 2)));
}

#[test]
fn test_narrow_matches_wide() {
    let mut rng = thread_rng();

    for _ in 0..100 {
        let amount: u128 = rng.gen();
        let fee_bp = rng.gen_range(0..10_000u128);
        for inclusive in [false, true] {
            let (base, fee) = get_fee(amount, inclusive, fee_bp).unwrap();
            assert_eq!(
                get_fee_wide(&amount.into(), inclusive, &fee_bp.into()),
                (BigUint::from(base), BigUint::from(fee))
            );
        }
    }
}

#[test]
fn test_fee_kind_parsing() {
    assert_eq!("deposit".parse::<FeeKind>(), Ok(FeeKind::Deposit));
    assert_eq!("withdraw".parse::<FeeKind>(), Ok(FeeKind::Withdraw));
    assert_eq!("nft".parse::<FeeKind>(), Ok(FeeKind::Nft));
    assert_eq!(
        "transfer".parse::<FeeKind>(),
        Err(UnknownFeeKind("transfer".to_string()))
    );
    assert_eq!(FeeKind::Nft.to_string(), "nft");
}
