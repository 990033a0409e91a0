//! Declarative field schemas for admin forms and product-type field groups
//!
//! A schema is a `&'static [FieldMetadata]`: one entry per rendered field with
//! its label, input kind, bounds and optionality. Views render from it and
//! `validate_fields` pre-checks a form before it goes to the server.
//!
//! ```rust,ignore
//! use contracts::shared::metadata::{FieldMetadata, validate_fields};
//!
//! const FIELDS: &[FieldMetadata] = &[
//!     FieldMetadata::text("name", "Наименование").required().length(1, 255),
//!     FieldMetadata::number("sort_order", "Порядок").min(0.0),
//! ];
//! let errors = validate_fields(FIELDS, form.fields());
//! ```

mod input_kind;
mod types;
mod validation;

pub use input_kind::InputKind;
pub use types::{FieldMetadata, FieldUiMetadata};
pub use validation::{validate_fields, ValidationRules};
