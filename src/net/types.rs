//! Wire types and the authentication error taxonomy.

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

use std::fmt;

use serde::Serialize;

/// Authorization level reported by the backend after login.
///
/// `Failure` is a transient sentinel for "no verdict" (rejected credentials,
/// transport failure, or an unrecognized role string). It is never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    None,
    User,
    Admin,
    Failure,
}

impl Role {
    /// Parse the plain-text body of a successful login response.
    ///
    /// Only the exact identifiers `user` and `admin` grant access. Anything
    /// unrecognized maps to `Failure`, never to an elevated role.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        match body.trim() {
            "user" => Self::User,
            "admin" => Self::Admin,
            "" | "none" => Self::None,
            _ => Self::Failure,
        }
    }

    /// Whether this role may enter a protected area at all.
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, Self::User | Self::Admin)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::User => "user",
            Self::Admin => "admin",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON body of `POST /api/login`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginPayload<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Network unreachable, timeout, or an unreadable response body.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Login or logout answered with a non-success status.
    #[error("authentication rejected: status {status}")]
    Rejected { status: u16 },

    /// The session probe refused the current session.
    #[error("unauthorized access: status {status}")]
    Unauthorized { status: u16 },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}
