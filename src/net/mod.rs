//! Networking against the session-bearing backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the login/logout/probe round trips and folds every failure
//! into a fail-closed result; `types` defines the role vocabulary, the login
//! wire payload, and the internal error taxonomy.

pub mod api;
pub mod types;
