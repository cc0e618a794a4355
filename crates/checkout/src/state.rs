//! Checkout state machine.

use serde::{Deserialize, Serialize};

/// Why a scanned id was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionKind {
    /// The raw string broke a format rule.
    BadFormat,

    /// The id is well-formed but no student matches.
    Unknown,
}

impl RejectionKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionKind::BadFormat => "BadFormat",
            RejectionKind::Unknown => "Unknown",
        }
    }
}

/// The state of a payment attempt.
///
/// State transitions:
/// ```text
/// Idle ──► AwaitingIdentity ──┬──► Verifying ──┬──► Settled
///   ▲            │   ▲        │                └──► Rejected ──► AwaitingIdentity
///   │            │   └────────┘ (scanner failed / unavailable)
///   └────────────┤ (cancel)
///                └──► CartEmpty
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutState {
    /// No payment attempt in progress.
    #[default]
    Idle,

    /// Waiting for the scanner to produce an id.
    AwaitingIdentity,

    /// Resolving a scanned id.
    Verifying,

    /// The last id was rejected; passes straight back to AwaitingIdentity.
    Rejected(RejectionKind),

    /// The attempt was refused because the cart had no lines.
    CartEmpty,

    /// The last attempt recorded a transaction.
    Settled,
}

impl CheckoutState {
    /// Returns true if a new payment attempt may start from here.
    pub fn can_begin(&self) -> bool {
        matches!(
            self,
            CheckoutState::Idle | CheckoutState::CartEmpty | CheckoutState::Settled
        )
    }

    /// Returns true if a scanned id is accepted in this state.
    pub fn can_accept_scan(&self) -> bool {
        matches!(self, CheckoutState::AwaitingIdentity)
    }

    /// Returns true if the attempt can be cancelled back to Idle.
    pub fn can_cancel(&self) -> bool {
        matches!(
            self,
            CheckoutState::AwaitingIdentity | CheckoutState::Verifying
        )
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Idle => "Idle",
            CheckoutState::AwaitingIdentity => "AwaitingIdentity",
            CheckoutState::Verifying => "Verifying",
            CheckoutState::Rejected(RejectionKind::BadFormat) => "Rejected(BadFormat)",
            CheckoutState::Rejected(RejectionKind::Unknown) => "Rejected(Unknown)",
            CheckoutState::CartEmpty => "CartEmpty",
            CheckoutState::Settled => "Settled",
        }
    }
}

impl std::fmt::Display for CheckoutState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
