use thiserror::Error;

/// Infrastructure failures outside the command path.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why a command was rejected.
///
/// Every variant is a recoverable no-op: the command left the bank and the
/// session untouched and the user may simply retry. A rejected transfer never
/// leaves a half-applied debit or credit behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("no account is currently authenticated")]
    NoSession,
    #[error("unknown username or wrong PIN")]
    AuthenticationFailed,
    #[error("amount must be a positive number")]
    InvalidAmount,
    #[error("no account with that username")]
    RecipientNotFound,
    #[error("cannot transfer to the sending account")]
    SelfTransferForbidden,
    #[error("insufficient balance for this transfer")]
    InsufficientBalance,
    #[error("no past movement is large enough to grant this loan")]
    LoanNotEligible,
    #[error("username or PIN does not match the current account")]
    AuthorizationFailed,
}
