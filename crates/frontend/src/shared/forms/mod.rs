//! Reactive binding of `DerivedFieldController` for the details screens
//!
//! - `state.rs`: field-level reads/writes over the controller signal
//! - `view_model.rs`: `FormViewModel<T>`, load/validate/save for one DTO
//! - `field.rs`: schema-driven field renderer

pub mod field;
pub mod state;
pub mod view_model;

pub use field::{FormMessages, SchemaField, SchemaFields, SelectOption};
pub use state::FormState;
pub use view_model::FormViewModel;
