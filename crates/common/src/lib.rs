//! Shared identifiers used across the storefront crates.

mod types;

pub use types::{ParseIdError, SessionId, TransactionId};
