use contracts::shared::forms::{DerivedFieldController, FieldValue, SubmissionState, ValidationErrors};
use contracts::shared::metadata::{validate_fields, FieldMetadata};
use leptos::prelude::*;

/// Controller and submission state of one form, as signals
#[derive(Clone, Copy)]
pub struct FormState {
    pub form: RwSignal<DerivedFieldController>,
    pub submission: RwSignal<SubmissionState>,
}

impl FormState {
    pub fn new(controller: DerivedFieldController) -> Self {
        Self {
            form: RwSignal::new(controller),
            submission: RwSignal::new(SubmissionState::new()),
        }
    }

    /// Swap in a freshly seeded controller, e.g. after loading a record
    pub fn replace(&self, controller: DerivedFieldController) {
        self.form.set(controller);
        self.submission.set(SubmissionState::new());
    }

    pub fn value(&self, field: &str) -> String {
        self.form.with(|f| f.display_value(field))
    }

    pub fn checked(&self, field: &str) -> bool {
        self.form
            .with(|f| f.value(field).and_then(FieldValue::as_bool))
            .unwrap_or(false)
    }

    pub fn is_dependent(&self, field: &str) -> bool {
        self.form.with_untracked(|f| f.is_dependent(field))
    }

    pub fn is_manually_edited(&self, field: &str) -> bool {
        self.form.with(|f| f.is_manually_edited(field))
    }

    /// Raw text from an input, converted by the field's kind
    pub fn set_input(&self, meta: &FieldMetadata, raw: &str) {
        self.set(meta.name, meta.parse_input(raw));
    }

    /// Routed write; the field's server message goes away once it is touched
    pub fn set(&self, field: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        self.form.update(|f| f.set_value(field, value));
        if self.submission.with_untracked(|s| s.errors.has(field)) {
            self.submission.update(|s| s.clear_field_error(field));
        }
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.submission
            .with(|s| s.field_error(field).map(str::to_string))
    }

    pub fn is_processing(&self) -> bool {
        self.submission.with(|s| s.processing)
    }

    pub fn validate(&self, schema: &[FieldMetadata]) -> ValidationErrors {
        self.form.with_untracked(|f| validate_fields(schema, f.fields()))
    }

    /// Reactive variant for enabling the submit button
    pub fn is_valid(&self, schema: &[FieldMetadata]) -> bool {
        self.form.with(|f| validate_fields(schema, f.fields()).is_empty())
    }
}
