//! Student identity resolution.
//!
//! A raw scanned string goes through a fixed pipeline:
//! 1. Prefix check against the institutional prefix
//! 2. Length check
//! 3. Digits-only check
//! 4. Directory lookup
//! 5. Deterministic placeholder for well-formed ids the directory does not know
//!
//! Only step 4 would reach an external system in a real deployment, so it sits
//! behind the [`Directory`] trait.

mod directory;
mod policy;
mod validator;

pub use directory::{Directory, InMemoryDirectory};
pub use policy::IdentityPolicy;
pub use validator::{IdentityResolver, IdentityValidator};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A resolved student identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// Institution-issued student number.
    pub id: String,
    pub name: String,
    /// Contact email.
    pub contact: String,
}

impl Identity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
        }
    }
}

/// The format rule a raw id broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatViolation {
    #[error("it must start with {expected}")]
    MissingPrefix { expected: String },

    #[error("it must be {expected} characters long, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("it must contain digits only")]
    NonDigit,
}

/// Why a raw id did not resolve to an identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityRejected {
    /// The raw string is not a well-formed student id.
    #[error("'{raw}' is not a valid student ID: {violation}")]
    BadFormat {
        raw: String,
        violation: FormatViolation,
    },

    /// The id is well-formed but the directory has no such student.
    #[error("student ID '{raw}' was not found")]
    Unknown { raw: String },
}

impl IdentityRejected {
    /// Returns the raw input that was rejected.
    pub fn raw(&self) -> &str {
        match self {
            IdentityRejected::BadFormat { raw, .. } | IdentityRejected::Unknown { raw } => raw,
        }
    }

    /// Returns true for a format failure, false for a lookup failure.
    pub fn is_bad_format(&self) -> bool {
        matches!(self, IdentityRejected::BadFormat { .. })
    }
}
