use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LogicError {
    #[error("caller is not the administrator")]
    Unauthorized,
    #[error("fee rate of {0} basis points is not below 10000")]
    InvalidRate(u128),
    #[error("pool logic is already initialized")]
    AlreadyInitialized,
    #[error("uninitialized state must have a zero treasury and zero rates")]
    InconsistentState,
    #[error("fee arithmetic result does not fit in 128 bits")]
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fee kind `{0}`, expected `deposit`, `withdraw` or `nft`")]
pub struct UnknownFeeKind(pub String);
