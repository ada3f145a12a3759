//! Networking modules for the inventory REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the JSON records the
//! backend returns.

pub mod api;
pub mod types;
