//! Conversions between scalar field elements and the 32-byte big-endian words used on chain.

use halo2_base::halo2_proofs::halo2curves::ff::{FromUniformBytes, PrimeField};

use crate::{errors::DomainError, Scalar};

/// Interprets `bytes` as a big-endian integer. Words that are not below the field modulus are
/// rejected rather than reduced.
pub fn scalar_from_be_bytes(bytes: [u8; 32]) -> Result<Scalar, DomainError> {
    let mut repr = <Scalar as PrimeField>::Repr::default();
    for (dst, src) in repr.as_mut().iter_mut().zip(bytes.iter().rev()) {
        *dst = *src;
    }
    Option::<Scalar>::from(Scalar::from_repr(repr)).ok_or(DomainError::NonCanonicalScalar)
}

/// Interprets `bytes` as a big-endian integer and reduces it modulo the field prime.
pub fn scalar_from_be_bytes_reduced(bytes: [u8; 32]) -> Scalar {
    let mut wide = [0u8; 64];
    for (dst, src) in wide.iter_mut().zip(bytes.iter().rev()) {
        *dst = *src;
    }
    Scalar::from_uniform_bytes(&wide)
}

pub fn scalar_to_be_bytes(scalar: &Scalar) -> [u8; 32] {
    let repr = scalar.to_repr();
    let mut bytes = [0u8; 32];
    for (dst, src) in bytes.iter_mut().zip(repr.as_ref().iter().rev()) {
        *dst = *src;
    }
    bytes
}

/// Parses a (optionally `0x`-prefixed) hex string of at most 64 digits.
pub fn scalar_from_hex(input: &str) -> Result<Scalar, DomainError> {
    scalar_from_be_bytes(word_from_hex(input)?)
}

pub fn scalar_to_hex(scalar: &Scalar) -> String {
    format!("0x{}", hex::encode(scalar_to_be_bytes(scalar)))
}

/// Left-pads a hex string to a full 32-byte word.
pub(crate) fn word_from_hex(input: &str) -> Result<[u8; 32], DomainError> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    if digits.is_empty() || digits.len() > 64 {
        return Err(DomainError::MalformedHex(input.to_string()));
    }

    let mut word = [0u8; 32];
    hex::decode_to_slice(format!("{digits:0>64}"), &mut word)
        .map_err(|e| DomainError::MalformedHex(format!("{input}: {e}")))?;
    Ok(word)
}
