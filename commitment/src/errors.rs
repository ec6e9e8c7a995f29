use thiserror::Error;

/// Inputs that cannot be mapped into the scalar field without changing their meaning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("word is not a canonical scalar field element")]
    NonCanonicalScalar,
    #[error("note value {0} does not fit in 120 bits")]
    ValueTooLarge(u128),
    #[error("poseidon instance cannot absorb {0} inputs")]
    UnsupportedArity(usize),
    #[error("malformed hex string: {0}")]
    MalformedHex(String),
    #[error("malformed address: {0}")]
    MalformedAddress(String),
}
