//! Client route surface and navigation decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Paths map onto four targets: `/` (login), `/u/:username`, `/a/:username`,
//! and `/404`. Anything else is unmapped and falls back to `/404`. The router
//! answers every user action with a `Decision` over these targets.

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;

use std::fmt;

use crate::net::types::Role;

pub const ANONYMOUS_PATH: &str = "/";
pub const NOT_FOUND_PATH: &str = "/404";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    Anonymous,
    UserArea(String),
    AdminArea(String),
    NotFound,
}

impl RouteTarget {
    /// Match a requested path. `None` means the path is unmapped.
    ///
    /// Query strings, fragments and a single trailing slash are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };

        match path {
            "" | ANONYMOUS_PATH => return Some(Self::Anonymous),
            NOT_FOUND_PATH => return Some(Self::NotFound),
            _ => {}
        }

        let mut segments = path.strip_prefix('/')?.split('/');
        let (Some(area), Some(username), None) = (segments.next(), segments.next(), segments.next()) else {
            return None;
        };
        if username.is_empty() {
            return None;
        }
        match area {
            "u" => Some(Self::UserArea(username.to_owned())),
            "a" => Some(Self::AdminArea(username.to_owned())),
            _ => None,
        }
    }

    /// The area a role is bound to. Only granted roles have one.
    #[must_use]
    pub fn role_area(role: Role, username: &str) -> Option<Self> {
        match role {
            Role::User => Some(Self::UserArea(username.to_owned())),
            Role::Admin => Some(Self::AdminArea(username.to_owned())),
            Role::None | Role::Failure => None,
        }
    }

    #[must_use]
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::UserArea(_) | Self::AdminArea(_))
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::UserArea(name) | Self::AdminArea(name) => Some(name),
            Self::Anonymous | Self::NotFound => None,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Anonymous => ANONYMOUS_PATH.to_owned(),
            Self::UserArea(name) => format!("/u/{name}"),
            Self::AdminArea(name) => format!("/a/{name}"),
            Self::NotFound => NOT_FOUND_PATH.to_owned(),
        }
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Feedback attached to a decision that leaves the caller where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Credentials failed validation; no request was sent.
    InvalidCredentials,
    /// The backend rejected the login or granted no usable role.
    LoginFailed,
    /// A newer action started before this one resolved.
    Superseded,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidCredentials => "invalid credentials",
            Self::LoginFailed => "login failed",
            Self::Superseded => "superseded",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Render the requested target.
    Allow(RouteTarget),
    /// Navigate away to a different target.
    Redirect(RouteTarget),
    /// No navigation.
    Stay(Notice),
}

impl Decision {
    /// Target the caller should end up on, if navigation happens.
    #[must_use]
    pub fn target(&self) -> Option<&RouteTarget> {
        match self {
            Self::Allow(target) | Self::Redirect(target) => Some(target),
            Self::Stay(_) => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow(target) => write!(f, "allow {target}"),
            Self::Redirect(target) => write!(f, "redirect {target}"),
            Self::Stay(notice) => write!(f, "stay ({notice})"),
        }
    }
}
