//! Core schema types for form fields
//!
//! All types use 'static lifetimes so schemas are compile-time constants.
//! Builder methods are `const fn` for the same reason.

use super::input_kind::InputKind;
use super::validation::ValidationRules;
use crate::shared::forms::FieldValue;

/// Metadata for a single form field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    pub name: &'static str,
    pub input: InputKind,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
    /// Allowed values for `InputKind::Select`
    pub options: Option<&'static [&'static str]>,
}

impl FieldMetadata {
    pub const fn new(name: &'static str, label: &'static str, input: InputKind) -> Self {
        Self {
            name,
            input,
            ui: FieldUiMetadata::labelled(label),
            validation: ValidationRules::none(),
            options: None,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, InputKind::Text)
    }

    pub const fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, InputKind::Textarea)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, InputKind::Number)
    }

    pub const fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, InputKind::Checkbox)
    }

    pub const fn url(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, InputKind::Url)
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        let mut field = Self::new(name, label, InputKind::Select);
        field.options = Some(options);
        field
    }

    pub const fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.validation.min = Some(min);
        self
    }

    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.validation.min = Some(min);
        self.validation.max = Some(max);
        self
    }

    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.validation.min_length = Some(min);
        self.validation.max_length = Some(max);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.validation.max_length = Some(max);
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.ui.placeholder = Some(placeholder);
        self
    }

    pub const fn hint(mut self, hint: &'static str) -> Self {
        self.ui.hint = Some(hint);
        self
    }

    pub const fn unit(mut self, unit: &'static str) -> Self {
        self.ui.unit = Some(unit);
        self
    }

    /// Whole numbers only, for fields backed by integer DTO fields
    pub const fn integer(mut self) -> Self {
        self.validation.integer = true;
        self
    }

    /// Check if field is optional
    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }

    /// Label with unit suffix, e.g. "Частота (ГГц)"
    pub fn label_with_unit(&self) -> String {
        match self.ui.unit {
            Some(unit) => format!("{} ({})", self.ui.label, unit),
            None => self.ui.label.to_string(),
        }
    }

    /// Value of this field in an empty (create-flow) form
    pub fn empty_value(&self) -> FieldValue {
        match self.input {
            InputKind::Checkbox => FieldValue::Bool(false),
            InputKind::Number => FieldValue::Null,
            InputKind::Text | InputKind::Textarea | InputKind::Select | InputKind::Url => {
                FieldValue::text("")
            }
        }
    }

    /// Convert raw input text into the field's value type.
    /// Empty numeric input becomes null; unparsable numbers stay text so the
    /// validator can report them.
    pub fn parse_input(&self, raw: &str) -> FieldValue {
        match self.input {
            InputKind::Number => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return FieldValue::Null;
                }
                trimmed
                    .replace(',', ".")
                    .parse::<f64>()
                    .map(FieldValue::Number)
                    .unwrap_or_else(|_| FieldValue::text(raw))
            }
            InputKind::Checkbox => FieldValue::Bool(raw == "true" || raw == "on"),
            InputKind::Text | InputKind::Textarea | InputKind::Select | InputKind::Url => {
                FieldValue::text(raw)
            }
        }
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub hint: Option<&'static str>,
    pub unit: Option<&'static str>,
}

impl FieldUiMetadata {
    pub const fn labelled(label: &'static str) -> Self {
        Self {
            label,
            placeholder: None,
            hint: None,
            unit: None,
        }
    }
}

/// Default values for FieldUiMetadata
impl Default for FieldUiMetadata {
    fn default() -> Self {
        Self::labelled("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOCK: FieldMetadata = FieldMetadata::number("base_clock", "Базовая частота")
        .required()
        .range(0.1, 10.0)
        .unit("ГГц");

    #[test]
    fn test_const_builders() {
        assert_eq!(CLOCK.name, "base_clock");
        assert!(CLOCK.validation.required);
        assert_eq!(CLOCK.validation.min, Some(0.1));
        assert_eq!(CLOCK.label_with_unit(), "Базовая частота (ГГц)");
        assert!(!CLOCK.is_optional());
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(CLOCK.parse_input("3,6"), FieldValue::Number(3.6));
        assert_eq!(CLOCK.parse_input(" "), FieldValue::Null);
        assert_eq!(CLOCK.parse_input("fast"), FieldValue::text("fast"));

        let ecc = FieldMetadata::checkbox("ecc", "ECC");
        assert_eq!(ecc.parse_input("true"), FieldValue::Bool(true));
        assert_eq!(ecc.empty_value(), FieldValue::Bool(false));
    }
}
