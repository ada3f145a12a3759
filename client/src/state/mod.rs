//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each card owns one small state struct held in an `RwSignal`. The structs
//! carry every transition the UI performs, so behavior is tested without a
//! browser.

pub mod card;
pub mod product_form;
pub mod profile;
pub mod session;
