//! Scan-to-pay checkout for the campus storefront.
//!
//! A [`Session`] owns one shopper's cart and transaction log and records every
//! action it applies. The [`CheckoutOrchestrator`] drives a payment attempt:
//! 1. Refuse empty carts before any identity check
//! 2. Await exactly one outcome from a [`Scanner`] (cancellable)
//! 3. Resolve the scanned id to an identity
//! 4. Record the transaction, then clear the cart

pub mod error;
pub mod orchestrator;
pub mod scanner;
pub mod session;
pub mod state;

pub use error::{CheckoutError, Result};
pub use orchestrator::{CheckoutOrchestrator, FALLBACK_VENDOR_LABEL, Settlement};
pub use scanner::{ScanOutcome, ScanSource, Scanner, ScriptedScanner, UnavailableReason};
pub use session::Session;
pub use state::{CheckoutState, RejectionKind};
