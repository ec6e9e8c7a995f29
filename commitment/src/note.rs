use halo2_base::halo2_proofs::halo2curves::ff::PrimeField;

use crate::{
    errors::DomainError,
    poseidon::Poseidon,
    token::{token_id, TokenData},
    Scalar, MAX_VALUE,
};

/// Public fields of a note, i.e. everything that goes into its commitment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommitmentPreimage {
    /// Note public key.
    pub npk: Scalar,
    pub token: TokenData,
    pub value: u128,
}

impl CommitmentPreimage {
    pub fn new(npk: Scalar, token: TokenData, value: u128) -> Self {
        Self { npk, token, value }
    }

    /// Field encoding of the preimage, in hashing order: `[npk, token id, value]`.
    ///
    /// Fails if `value` does not fit in 120 bits.
    pub fn to_array(&self) -> Result<[Scalar; 3], DomainError> {
        if self.value > MAX_VALUE {
            return Err(DomainError::ValueTooLarge(self.value));
        }
        Ok([self.npk, token_id(&self.token), Scalar::from_u128(self.value)])
    }

    pub fn hash(&self) -> Result<Scalar, DomainError> {
        hash_commitment(self)
    }
}

/// `PoseidonT4(npk, tokenID, value)`.
pub fn hash_commitment(preimage: &CommitmentPreimage) -> Result<Scalar, DomainError> {
    Ok(Poseidon::t4().permute(&preimage.to_array()?))
}

/// `PoseidonT3(masterPublicKey, random)`: the note public key a sender derives for a recipient.
pub fn note_public_key(master_public_key: Scalar, random: Scalar) -> Scalar {
    Poseidon::t3().permute(&[master_public_key, random])
}
