//! Error types for the Karat ledger

use crate::amount::Amount;
use thiserror::Error;

/// Every way a ledger operation can fail.
///
/// All failures are precondition violations detected before any state is
/// mutated; an operation that returns an error leaves the ledger exactly as
/// it found it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("caller is not the owner")]
    Unauthorized,

    #[error("insufficient balance: have {available}, need {required}")]
    InsufficientBalance { available: Amount, required: Amount },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("fee percentage must be between 0 and 100, got {0}")]
    InvalidPercentage(u8),

    #[error("sender is blacklisted")]
    SenderBlacklisted,

    #[error("token transfers are paused")]
    TransfersPaused,

    #[error("transfers are already paused")]
    AlreadyPaused,

    #[error("transfers are not paused")]
    NotPaused,

    #[error("amount overflows the representable range")]
    Overflow,
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, LedgerError>;
