use serde::{Deserialize, Serialize};

/// Format rules and fallback behavior for student ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityPolicy {
    /// Institutional prefix every id starts with.
    pub prefix: String,
    /// Exact id length in characters, prefix included.
    pub length: usize,
    /// Accept well-formed ids missing from the directory with a placeholder identity.
    pub synthesize_unknown: bool,
    /// Mail domain for placeholder contacts.
    pub contact_domain: String,
}

impl Default for IdentityPolicy {
    fn default() -> Self {
        Self {
            prefix: "992200".to_string(),
            length: 11,
            synthesize_unknown: true,
            contact_domain: "university.edu".to_string(),
        }
    }
}
