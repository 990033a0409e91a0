//! Form state for the admin screens
//!
//! - `field_value.rs` / `field_set.rs`: the working values of one form
//! - `derivation.rs`: rules that keep a dependent field in sync with a primary one
//! - `controller.rs`: `DerivedFieldController`, the state machine over both
//! - `validation_errors.rs` / `submission.rs`: what comes back from the server

mod controller;
mod derivation;
mod error;
mod field_set;
mod field_value;
mod submission;
mod validation_errors;

pub use controller::{DerivedFieldController, EditState, FormAction};
pub use derivation::{ClearPolicy, DerivationRule, EmptySentinel, Transform};
pub use error::FormError;
pub use field_set::FieldSet;
pub use field_value::FieldValue;
pub use submission::SubmissionState;
pub use validation_errors::{ValidationErrorResponse, ValidationErrors};
