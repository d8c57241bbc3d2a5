//! Authorization phase machine with generation tickets.
//!
//! Each user-triggered action calls a `begin_*` method, awaits its network
//! result elsewhere, then feeds that result back through the matching
//! `finish_*` method with the ticket it was given. A ticket older than the
//! current generation marks a stale result, which is discarded untouched.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;
use crate::route::{Decision, Notice, RouteTarget};

/// Ticket stamped on one in-flight action.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthPhase {
    #[default]
    Anonymous,
    Authenticating,
    Authorized {
        role: Role,
        username: String,
    },
}

#[derive(Debug, Default)]
pub struct AuthMachine {
    phase: AuthPhase,
    generation: Generation,
}

impl AuthMachine {
    #[must_use]
    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Anonymous (or any phase) → Authenticating.
    #[must_use]
    pub fn begin_login(&mut self) -> Generation {
        self.phase = AuthPhase::Authenticating;
        self.bump()
    }

    /// Apply a login verdict.
    pub fn finish_login(&mut self, ticket: Generation, role: Role, username: &str) -> Decision {
        if self.is_stale(ticket) {
            tracing::debug!(ticket, current = self.generation, "discarding stale login result");
            return Decision::Stay(Notice::Superseded);
        }

        if let Some(target) = RouteTarget::role_area(role, username) {
            tracing::info!(%username, %role, "authorized");
            self.phase = AuthPhase::Authorized { role, username: username.to_owned() };
            Decision::Redirect(target)
        } else {
            tracing::info!(%username, %role, "login did not grant a role");
            self.phase = AuthPhase::Anonymous;
            Decision::Stay(Notice::LoginFailed)
        }
    }

    /// Start a navigation. A pending login is abandoned.
    #[must_use]
    pub fn begin_navigation(&mut self) -> Generation {
        if self.phase == AuthPhase::Authenticating {
            self.phase = AuthPhase::Anonymous;
        }
        self.bump()
    }

    /// Apply the session probe result for a protected `target`.
    pub fn finish_guard(&mut self, ticket: Generation, target: RouteTarget, authenticated: bool) -> Decision {
        if self.is_stale(ticket) {
            tracing::debug!(ticket, current = self.generation, %target, "discarding stale guard result");
            return Decision::Stay(Notice::Superseded);
        }

        if !authenticated {
            tracing::info!(%target, "session probe refused; redirecting to login");
            self.phase = AuthPhase::Anonymous;
            return Decision::Redirect(RouteTarget::Anonymous);
        }

        // A live cookie alone grants no area: without a role there is no binding.
        let AuthPhase::Authorized { role, username } = self.phase.clone() else {
            tracing::info!(%target, "session has no role on this client; redirecting to login");
            self.phase = AuthPhase::Anonymous;
            return Decision::Redirect(RouteTarget::Anonymous);
        };

        match RouteTarget::role_area(role, &username) {
            Some(own) if own == target => Decision::Allow(target),
            Some(own) => {
                tracing::info!(%target, %own, %role, "area not bound to role; redirecting");
                Decision::Redirect(own)
            }
            None => Decision::Redirect(RouteTarget::Anonymous),
        }
    }

    /// Invalidate every in-flight ticket. Logout itself takes none: its
    /// outcome is `Anonymous` whatever else resolves meanwhile.
    pub fn begin_logout(&mut self) {
        self.bump();
    }

    pub fn finish_logout(&mut self) -> Decision {
        self.phase = AuthPhase::Anonymous;
        Decision::Redirect(RouteTarget::Anonymous)
    }

    fn bump(&mut self) -> Generation {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    fn is_stale(&self, ticket: Generation) -> bool {
        ticket != self.generation
    }
}
