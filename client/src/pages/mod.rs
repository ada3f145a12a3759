//! Page modules for the session shell's screens.
//!
//! ARCHITECTURE
//! ============
//! `App` picks a page from the session phase; each page reads the session
//! signal from context and delegates card rendering to `components`.

pub mod dashboard;
pub mod login;
