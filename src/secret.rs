//! Process-local secret value and environment access.
//!
//! The secret is a plain owned value: construct a [`SecretStore`], pass it
//! by reference to whatever needs it. There is no ambient global, no
//! persistence, and no access control — the value lives for as long as the
//! store does.

use std::env;

/// Name of the environment variable read by [`this_value`].
pub const THIS_VALUE_VAR: &str = "THISVALUE";

/// An in-memory secret with one setter and one getter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SecretStore {
    secret: String,
}

impl SecretStore {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            secret: initial.into(),
        }
    }

    /// Replace the stored secret.
    pub fn set_secret(&mut self, value: impl Into<String>) {
        self.secret = value.into();
    }

    /// The current secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

/// Value of the `THISVALUE` environment variable, or `None` if unset.
pub fn this_value() -> Option<String> {
    env::var(THIS_VALUE_VAR).ok()
}
