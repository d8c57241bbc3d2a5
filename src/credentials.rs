//! Login form credentials and the submit-gate validator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form rebuilds `Credentials` on every keystroke and asks `validate`
//! whether the submit action may be enabled. Validation never rejects a
//! submission by itself; the caller wires the result to the UI action.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// Form field addressed by a keystroke update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
}

/// Username/password pair as typed into the login form.
///
/// Never persisted: a login attempt consumes the value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// Replace one field, leaving the other untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Username => self.username = value.into(),
            Field::Password => self.password = value.into(),
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        validate(self)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `true` iff both fields are non-empty and ASCII alphanumeric.
#[must_use]
pub fn validate(credentials: &Credentials) -> bool {
    is_alphanumeric(&credentials.username) && is_alphanumeric(&credentials.password)
}

fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC.is_match(value)
}
