//! Checkout error types.

use domain::{DomainError, IdentityRejected};
use thiserror::Error;

use crate::scanner::UnavailableReason;
use crate::state::CheckoutState;

/// Ways a payment attempt can end without a settlement.
///
/// None of these is fatal to the session; the orchestrator is always ready
/// for another attempt afterwards.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart had no lines, so no identity check was made.
    #[error("Your cart is empty. Add items before paying.")]
    CartEmpty,

    /// The scanned id did not resolve to a student.
    #[error("ID rejected: {0}. Check the card and scan again.")]
    IdentityRejected(#[from] IdentityRejected),

    /// No scanner could be started on this device.
    #[error("Scanner unavailable: {0}")]
    ScanUnavailable(UnavailableReason),

    /// The scanner started but failed before producing an id.
    #[error("Scan failed: {0}. Please scan again.")]
    ScanFailed(String),

    /// The shopper closed the scan before it completed.
    #[error("Scan cancelled")]
    Cancelled,

    /// The orchestrator is not in a state that accepts this call.
    #[error("Invalid checkout state: expected {expected}, actual {actual}")]
    InvalidState {
        expected: &'static str,
        actual: CheckoutState,
    },

    /// Domain error.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl CheckoutError {
    /// Short label used for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CheckoutError::CartEmpty => "cart_empty",
            CheckoutError::IdentityRejected(IdentityRejected::BadFormat { .. }) => "bad_format",
            CheckoutError::IdentityRejected(IdentityRejected::Unknown { .. }) => "unknown_identity",
            CheckoutError::ScanUnavailable(_) => "scan_unavailable",
            CheckoutError::ScanFailed(_) => "scan_failed",
            CheckoutError::Cancelled => "cancelled",
            CheckoutError::InvalidState { .. } => "invalid_state",
            CheckoutError::Domain(_) => "domain",
        }
    }

    /// Returns true if scanning again may succeed without other changes.
    pub fn can_rescan(&self) -> bool {
        matches!(
            self,
            CheckoutError::IdentityRejected(_) | CheckoutError::ScanFailed(_)
        )
    }
}

/// Convenience type alias for checkout results.
pub type Result<T> = std::result::Result<T, CheckoutError>;
