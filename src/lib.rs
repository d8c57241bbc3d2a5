//! Client-side authentication and role-based authorization gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! Input flows leaf-first: `credentials` gates the submit action, `net::api`
//! performs the backend round trip and normalizes the verdict into a `Role`,
//! and `router` turns verdicts plus the requested path into a `Decision`.
//! The session itself is an opaque cookie held by the HTTP client's store.

pub mod config;
pub mod credentials;
pub mod net;
pub mod route;
pub mod router;
pub mod state;

pub use config::{ConfigError, GatewayConfig};
pub use credentials::{Credentials, Field, validate};
pub use net::api::{AuthApi, AuthClient};
pub use net::types::{AuthError, Role};
pub use route::{Decision, Notice, RouteTarget};
pub use router::AuthorizationRouter;
pub use state::auth::AuthPhase;
