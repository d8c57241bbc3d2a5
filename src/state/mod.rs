//! Client-side authorization state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` holds the pure state machine the router drives; it never performs
//! I/O, so every transition can be exercised without a backend.

pub mod auth;
