//! Note commitments of the shielded pool.
//!
//! A commitment binds the public fields of a note (note public key, token, value) into a single
//! element of the BN254 scalar field. The hash is the circom flavour of Poseidon, so every value
//! computed here matches the on-chain `PoseidonT3` / `PoseidonT4` libraries bit for bit.

pub mod address;
pub mod errors;
pub mod note;
pub mod poseidon;
pub mod scalar;
#[cfg(test)]
mod tests;
pub mod token;

pub use address::Address;
pub use errors::DomainError;
pub use halo2_base::halo2_proofs::halo2curves::bn256::Fr;
pub use note::{hash_commitment, note_public_key, CommitmentPreimage};
pub use poseidon::{poseidon_hash, Poseidon};
pub use token::{token_id, TokenData, TokenSubId, TokenType};

pub type Scalar = Fr;

/// Width of a note value in bits (`uint120` on chain).
pub const VALUE_BITS: u32 = 120;

pub const MAX_VALUE: u128 = (1 << VALUE_BITS) - 1;
