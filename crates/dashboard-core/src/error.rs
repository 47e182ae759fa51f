use thiserror::Error;

use crate::forms::FormKind;
use crate::ledger::LedgerError;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// A required form field was left empty. Carries the prompt shown to the user.
    #[error("{0}")]
    MissingInput(&'static str),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero.")]
    NonPositiveAmount,

    #[error("Amount has more than {max} decimal places.")]
    TooManyDecimals { max: u8 },

    #[error("Amount is too large.")]
    AmountOverflow,

    #[error("Connect your wallet to mint to yourself.")]
    WalletNotConnected,

    #[error("A {0} request is already waiting for confirmation.")]
    SubmissionInFlight(FormKind),

    #[error("{}", .0.user_message())]
    Ledger(LedgerError),

    #[error("Could not read ledger state: {0}")]
    Read(String),
}

impl From<LedgerError> for DashboardError {
    fn from(err: LedgerError) -> Self {
        DashboardError::Ledger(err)
    }
}
