//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each card component owns its state signal, starts its one fetch on mount,
//! and renders from the matching `state` module.

pub mod add_product_form;
pub mod cards;
pub mod resource_card;
pub mod spinner;
pub mod user_profile;
