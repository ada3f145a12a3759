//! Service layer behind the HTTP routes.

pub mod inventory;
