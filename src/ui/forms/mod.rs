//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `onboarding_form`: The onboarding form itself
//! - `summary`: Confirmation shown after a successful submission

mod field_renderer;
mod onboarding_form;
mod summary;

pub use onboarding_form::draw as draw_onboarding_form;
pub use summary::draw as draw_summary;
