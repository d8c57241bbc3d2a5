//! Authorization router: turns user actions into navigation decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits between the UI and an [`AuthApi`]. Every action issues at most one
//! backend call, awaits it, and only then decides where the caller goes.
//! Protected areas are re-checked with the session probe on every entry;
//! nothing about the session is trusted from earlier decisions. A live
//! session only opens the area bound to a role this router itself authorized.
//!
//! The phase machine lives behind a `Mutex` that is only ever locked between
//! awaits, so concurrent actions on one router interleave at the network call
//! and stale results are dropped by generation.

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::credentials::{Credentials, validate};
use crate::net::api::AuthApi;
use crate::route::{Decision, Notice, RouteTarget};
use crate::state::auth::{AuthMachine, AuthPhase};

pub struct AuthorizationRouter<A> {
    api: A,
    machine: Mutex<AuthMachine>,
}

impl<A: AuthApi> AuthorizationRouter<A> {
    pub fn new(api: A) -> Self {
        Self { api, machine: Mutex::new(AuthMachine::default()) }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Snapshot of the current phase.
    pub fn phase(&self) -> AuthPhase {
        self.machine().phase().clone()
    }

    /// Submit the login form. Credentials are consumed by the attempt.
    pub async fn submit_login(&self, credentials: Credentials) -> Decision {
        if !validate(&credentials) {
            tracing::warn!(username = %credentials.username, "login submitted with invalid credentials");
            return Decision::Stay(Notice::InvalidCredentials);
        }

        let ticket = self.machine().begin_login();
        let role = self.api.login(&credentials.username, &credentials.password).await;
        self.machine().finish_login(ticket, role, &credentials.username)
    }

    /// Decide whether `path` may be shown.
    pub async fn navigate(&self, path: &str) -> Decision {
        let ticket = self.machine().begin_navigation();

        let Some(target) = RouteTarget::parse(path) else {
            tracing::debug!(%path, "unmapped path");
            return Decision::Redirect(RouteTarget::NotFound);
        };
        if !target.is_protected() {
            return Decision::Allow(target);
        }

        let authenticated = self.api.is_authenticated().await;
        self.machine().finish_guard(ticket, target, authenticated)
    }

    /// End the session and leave for the anonymous area, whatever the
    /// backend says.
    pub async fn logout(&self) -> Decision {
        self.machine().begin_logout();
        if !self.api.logout().await {
            tracing::warn!("backend logout failed; leaving protected area anyway");
        }
        self.machine().finish_logout()
    }

    fn machine(&self) -> MutexGuard<'_, AuthMachine> {
        self.machine.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
