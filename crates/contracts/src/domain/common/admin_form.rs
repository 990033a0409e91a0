//! Form wiring shared by the admin CRUD screens

use crate::shared::forms::{DerivationRule, DerivedFieldController, FieldSet, FormError, Transform};
use crate::shared::metadata::FieldMetadata;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// DTO edited by an admin details form.
///
/// The DTO's serialized fields become the form's `FieldSet`; the schema says
/// which of them are rendered and how, the rules and normalizers say how
/// input is shaped.
pub trait AdminForm: Serialize + DeserializeOwned + Default + Clone {
    /// Rendered fields, in display order
    fn schema() -> &'static [FieldMetadata];

    /// Dependent fields derived from other fields (name -> slug)
    fn derivation_rules() -> Vec<DerivationRule> {
        Vec::new()
    }

    /// Per-field shaping applied on every write (uppercase codes, URL prefix)
    fn normalizers() -> Vec<(&'static str, Transform)> {
        Vec::new()
    }

    /// `id` of the record being edited, `None` in the create flow
    fn record_id(&self) -> Option<&str>;

    fn is_new(&self) -> bool {
        self.record_id().is_none()
    }

    /// Build the form controller seeded from this DTO
    fn controller(&self) -> Result<DerivedFieldController, FormError> {
        let fields = FieldSet::from_record(self)?;
        let rules = Self::derivation_rules();
        let mut controller = if self.is_new() {
            DerivedFieldController::new(fields, rules)?
        } else {
            DerivedFieldController::for_existing(fields, rules)?
        };
        for (field, transform) in Self::normalizers() {
            controller = controller.with_normalizer(field, transform)?;
        }
        Ok(controller)
    }
}
