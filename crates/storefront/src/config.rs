//! Application configuration loaded from environment variables.

use std::net::SocketAddr;

use domain::IdentityPolicy;

/// Storefront configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `STOREFRONT_ID_PREFIX`: institutional student id prefix (default: `"992200"`)
/// - `STOREFRONT_ID_LENGTH`: total student id length (default: `11`)
/// - `STOREFRONT_SYNTHESIZE_UNKNOWN`: accept well-formed ids missing from the
///   directory (default: `true`)
/// - `STOREFRONT_CONTACT_DOMAIN`: email domain for synthesized identities
///   (default: `"university.edu"`)
/// - `STOREFRONT_METRICS_ADDR`: Prometheus listener address (default: unset)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub id_prefix: String,
    pub id_length: usize,
    pub synthesize_unknown: bool,
    pub contact_domain: String,
    pub metrics_addr: Option<SocketAddr>,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from any key-value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            id_prefix: lookup("STOREFRONT_ID_PREFIX")
                .filter(|p| !p.is_empty())
                .unwrap_or(defaults.id_prefix),
            id_length: lookup("STOREFRONT_ID_LENGTH")
                .and_then(|l| l.parse().ok())
                .unwrap_or(defaults.id_length),
            synthesize_unknown: lookup("STOREFRONT_SYNTHESIZE_UNKNOWN")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.synthesize_unknown),
            contact_domain: lookup("STOREFRONT_CONTACT_DOMAIN").unwrap_or(defaults.contact_domain),
            metrics_addr: lookup("STOREFRONT_METRICS_ADDR").and_then(|a| a.parse().ok()),
        }
    }

    /// Returns the identity rules the validator enforces.
    pub fn identity_policy(&self) -> IdentityPolicy {
        IdentityPolicy {
            prefix: self.id_prefix.clone(),
            length: self.id_length,
            synthesize_unknown: self.synthesize_unknown,
            contact_domain: self.contact_domain.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let policy = IdentityPolicy::default();
        Self {
            log_level: "info".to_string(),
            id_prefix: policy.prefix,
            id_length: policy.length,
            synthesize_unknown: policy.synthesize_unknown,
            contact_domain: policy.contact_domain,
            metrics_addr: None,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
