//! Validation schema for the onboarding form
//!
//! A submission arrives as an untyped JSON record and leaves as either a
//! normalized [`FormData`] or an ordered list of [`FieldError`]s.

mod errors;
mod types;
mod validator;

pub use errors::{FieldError, ValidationErrors};
pub use types::{Field, FormData, Service};
pub use validator::validate;
