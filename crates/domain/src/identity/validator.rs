use super::{Directory, FormatViolation, Identity, IdentityPolicy, IdentityRejected};

/// Anything that turns a raw scan into an identity.
///
/// Checkout depends on this trait rather than on [`IdentityValidator`] so the
/// whole resolution step can be substituted.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, raw: &str) -> Result<Identity, IdentityRejected>;
}

impl<T: IdentityResolver + ?Sized> IdentityResolver for &T {
    fn resolve(&self, raw: &str) -> Result<Identity, IdentityRejected> {
        (**self).resolve(raw)
    }
}

impl<T: IdentityResolver + ?Sized> IdentityResolver for std::sync::Arc<T> {
    fn resolve(&self, raw: &str) -> Result<Identity, IdentityRejected> {
        (**self).resolve(raw)
    }
}

/// Format checks followed by a directory lookup.
#[derive(Debug, Clone)]
pub struct IdentityValidator<D: Directory> {
    policy: IdentityPolicy,
    directory: D,
}

impl<D: Directory> IdentityValidator<D> {
    pub fn new(policy: IdentityPolicy, directory: D) -> Self {
        Self { policy, directory }
    }

    /// Runs the prefix, length and charset checks in that order.
    pub fn check_format(&self, raw: &str) -> Result<(), FormatViolation> {
        if !raw.starts_with(&self.policy.prefix) {
            return Err(FormatViolation::MissingPrefix {
                expected: self.policy.prefix.clone(),
            });
        }

        let actual = raw.chars().count();
        if actual != self.policy.length {
            return Err(FormatViolation::WrongLength {
                expected: self.policy.length,
                actual,
            });
        }

        if !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(FormatViolation::NonDigit);
        }

        Ok(())
    }

    /// Builds the placeholder identity for a well-formed id.
    ///
    /// Depends on nothing but `raw` and the policy, so repeated calls agree.
    fn synthesize(&self, raw: &str) -> Identity {
        let suffix = raw.strip_prefix(self.policy.prefix.as_str()).unwrap_or(raw);
        Identity {
            id: raw.to_string(),
            name: format!("Student {suffix}"),
            contact: format!("student.{suffix}@{}", self.policy.contact_domain),
        }
    }
}

impl<D: Directory> IdentityResolver for IdentityValidator<D> {
    fn resolve(&self, raw: &str) -> Result<Identity, IdentityRejected> {
        if let Err(violation) = self.check_format(raw) {
            tracing::debug!(%raw, %violation, "student id rejected");
            return Err(IdentityRejected::BadFormat {
                raw: raw.to_string(),
                violation,
            });
        }

        if let Some(identity) = self.directory.lookup(raw) {
            tracing::debug!(%raw, name = %identity.name, "student found in directory");
            return Ok(identity);
        }

        if self.policy.synthesize_unknown {
            tracing::debug!(%raw, "student not in directory, using placeholder identity");
            Ok(self.synthesize(raw))
        } else {
            Err(IdentityRejected::Unknown {
                raw: raw.to_string(),
            })
        }
    }
}
