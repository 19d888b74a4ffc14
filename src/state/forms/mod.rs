//! Form domain layer
//!
//! Type-safe field state for the onboarding form.

mod field;
mod form_state;

pub use field::{FieldValue, FormField};
pub use form_state::{Form, OnboardingForm};
