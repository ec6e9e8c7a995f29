use halo2_base::halo2_proofs::halo2curves::{
    bn256::Fr,
    ff::{Field, PrimeField},
};
use rand::thread_rng;

use crate::{
    errors::DomainError,
    scalar::{
        scalar_from_be_bytes, scalar_from_be_bytes_reduced, scalar_from_hex, scalar_to_be_bytes,
        scalar_to_hex,
    },
};

const MODULUS: &str = "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";

#[test]
fn test_small_values_are_big_endian() {
    let mut word = [0u8; 32];
    word[31] = 1;
    word[30] = 2;
    assert_eq!(scalar_from_be_bytes(word).unwrap(), Fr::from_u128(0x0201));
    assert_eq!(scalar_to_be_bytes(&Fr::from_u128(0x0201)), word);
}

#[test]
fn test_modulus_is_rejected() {
    assert_eq!(
        scalar_from_hex(MODULUS),
        Err(DomainError::NonCanonicalScalar)
    );
    assert_eq!(
        scalar_from_be_bytes([0xff; 32]),
        Err(DomainError::NonCanonicalScalar)
    );
}

#[test]
fn test_modulus_minus_one_is_accepted() {
    let max = scalar_from_hex("0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000000")
        .unwrap();
    assert_eq!(max + Fr::ONE, Fr::ZERO);
}

#[test]
fn test_reduction_wraps_modulus() {
    let mut modulus = [0u8; 32];
    hex::decode_to_slice(&MODULUS[2..], &mut modulus).unwrap();
    assert_eq!(scalar_from_be_bytes_reduced(modulus), Fr::ZERO);

    modulus[31] += 5;
    assert_eq!(scalar_from_be_bytes_reduced(modulus), Fr::from_u128(5));
}

#[test]
fn test_hex_round_trip() {
    let mut rng = thread_rng();
    for _ in 0..10 {
        let scalar = Fr::random(&mut rng);
        let hex = scalar_to_hex(&scalar);
        assert_eq!(hex.len(), 66);
        assert_eq!(scalar_from_hex(&hex).unwrap(), scalar);
    }
}

#[test]
fn test_short_hex_is_left_padded() {
    assert_eq!(scalar_from_hex("0x2a").unwrap(), Fr::from_u128(42));
    assert_eq!(scalar_from_hex("2a").unwrap(), Fr::from_u128(42));
    assert!(scalar_from_hex("0x abc").is_err());
}

#[test]
fn test_malformed_hex() {
    assert!(matches!(
        scalar_from_hex("0x"),
        Err(DomainError::MalformedHex(_))
    ));
    assert!(matches!(
        scalar_from_hex("0xzz"),
        Err(DomainError::MalformedHex(_))
    ));
    assert!(matches!(
        scalar_from_hex(&format!("0x{}", "1".repeat(65))),
        Err(DomainError::MalformedHex(_))
    ));
}
