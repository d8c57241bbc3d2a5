//! Authentication client for the session-cookie backend.
//!
//! Every request goes through one `reqwest::Client` with a cookie store, so
//! the session artifact set by `/api/login` rides along on later calls
//! without the client ever reading it.
//!
//! ERROR HANDLING
//! ==============
//! Each operation runs a fallible `try_*` helper returning `AuthError`, logs
//! the error, and collapses it into the fail-closed value (`Role::Failure` or
//! `false`). Nothing here propagates a transport error to the caller.

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

use std::time::Duration;

use super::types::{AuthError, LoginPayload, Role};
use crate::config::GatewayConfig;

pub const LOGIN_PATH: &str = "/api/login";
pub const LOGOUT_PATH: &str = "/api/logout";
pub const PING_PATH: &str = "/ping";

/// Backend round trips used by the router and the shell.
pub trait AuthApi {
    /// Submit credentials; `Role::Failure` on rejection or transport error.
    fn login(&self, username: &str, password: &str) -> impl Future<Output = Role> + Send;

    /// End the current session; `true` only on a backend success response.
    fn logout(&self) -> impl Future<Output = bool> + Send;

    /// Probe whether the backend still accepts the current session.
    fn is_authenticated(&self) -> impl Future<Output = bool> + Send;

    /// Liveness check; `true` only when the backend answers.
    fn ping(&self) -> impl Future<Output = bool> + Send;
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    probe_path: String,
}

impl AuthClient {
    /// Build a client with its own cookie store.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::HttpClientBuild`] if the TLS backend or client
    /// builder fails to initialize.
    pub fn new(config: &GatewayConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| AuthError::HttpClientBuild(e.to_string()))?;

        Ok(Self { http, base_url: config.base_url.clone(), probe_path: config.probe_path.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn try_login(&self, username: &str, password: &str) -> Result<Role, AuthError> {
        let resp = self
            .http
            .post(endpoint(&self.base_url, LOGIN_PATH))
            .json(&LoginPayload { username, password })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AuthError::Rejected { status: status.as_u16() });
        }

        let body = resp.text().await?;
        Ok(Role::from_body(&body))
    }

    async fn try_logout(&self) -> Result<(), AuthError> {
        let resp = self.http.get(endpoint(&self.base_url, LOGOUT_PATH)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AuthError::Rejected { status: status.as_u16() });
        }
        Ok(())
    }

    async fn try_probe(&self) -> Result<(), AuthError> {
        let resp = self.http.get(endpoint(&self.base_url, &self.probe_path)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AuthError::Unauthorized { status: status.as_u16() });
        }
        Ok(())
    }

    async fn try_ping(&self) -> Result<bool, AuthError> {
        let resp = self.http.get(endpoint(&self.base_url, PING_PATH)).send().await?;
        if !resp.status().is_success() {
            return Ok(false);
        }
        let body = resp.text().await?;
        Ok(body.trim() == "pong")
    }
}

impl AuthApi for AuthClient {
    async fn login(&self, username: &str, password: &str) -> Role {
        match self.try_login(username, password).await {
            Ok(role) => {
                if role == Role::Failure {
                    tracing::warn!(%username, "login returned an unrecognized role");
                } else {
                    tracing::info!(%username, %role, "login succeeded");
                }
                role
            }
            Err(e) => {
                tracing::warn!(%username, error = %e, "login failed");
                Role::Failure
            }
        }
    }

    async fn logout(&self) -> bool {
        match self.try_logout().await {
            Ok(()) => {
                tracing::info!("logout succeeded");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "logout failed");
                false
            }
        }
    }

    async fn is_authenticated(&self) -> bool {
        match self.try_probe().await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(probe = %self.probe_path, error = %e, "session probe refused");
                false
            }
        }
    }

    async fn ping(&self) -> bool {
        match self.try_ping().await {
            Ok(alive) => alive,
            Err(e) => {
                tracing::warn!(error = %e, "ping failed");
                false
            }
        }
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}
