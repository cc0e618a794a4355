//! Storefront error types.

use checkout::CheckoutError;
use domain::DomainError;
use thiserror::Error;

use crate::command::CommandError;

/// Application-level error shown to the shopper.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// No transaction matches the requested id.
    #[error("no transaction matches '{0}'")]
    ReceiptNotFound(String),

    /// More than one transaction starts with the requested prefix.
    #[error("'{0}' matches more than one transaction, type more of the id")]
    AmbiguousReceipt(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for storefront results.
pub type Result<T> = std::result::Result<T, AppError>;
