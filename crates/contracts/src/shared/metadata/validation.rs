//! Validation rules for schema fields

use super::input_kind::InputKind;
use super::types::FieldMetadata;
use crate::shared::forms::{FieldSet, FieldValue, ValidationErrors};

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub integer: bool,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            integer: false,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        let mut rules = Self::none();
        rules.required = true;
        rules
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(self.message_or(format!("{} не может быть пустым", field_label)));
        }

        // Length is counted in characters, labels and values are mostly Cyrillic
        let length = value.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                return Err(self.message_or(format!(
                    "{} должен содержать минимум {} символов",
                    field_label, min
                )));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(self.message_or(format!(
                    "{} не должен превышать {} символов",
                    field_label, max
                )));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if !value.is_finite() {
            return Err(self.message_or(format!("{} должно быть числом", field_label)));
        }

        if self.integer && value.fract() != 0.0 {
            return Err(self.message_or(format!("{} должно быть целым числом", field_label)));
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(self.message_or(format!("{} должен быть не менее {}", field_label, min)));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(self.message_or(format!("{} должен быть не более {}", field_label, max)));
            }
        }

        Ok(())
    }

    fn message_or(&self, default: String) -> String {
        self.custom_error.map(str::to_string).unwrap_or(default)
    }
}

/// Pre-check a form against its schema.
///
/// Only fields listed in the schema are checked; a field missing from the set
/// is treated as empty.
pub fn validate_fields(schema: &[FieldMetadata], fields: &FieldSet) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in schema {
        let value = fields.get(field.name).unwrap_or(&FieldValue::Null);
        if let Err(message) = validate_field(field, value) {
            errors.insert(field.name, message);
        }
    }
    errors
}

fn validate_field(field: &FieldMetadata, value: &FieldValue) -> Result<(), String> {
    let label = field.ui.label;
    let rules = &field.validation;

    match (field.input, value) {
        (InputKind::Checkbox, _) => Ok(()),
        // пустое необязательное поле не проверяется на длину и диапазон
        (_, v) if v.is_blank() && !rules.required => Ok(()),
        (_, v) if v.is_blank() => rules.validate_string("", label),
        (InputKind::Number, FieldValue::Number(n)) => rules.validate_number(*n, label),
        (InputKind::Number, _) => Err(format!("{} должно быть числом", label)),
        (InputKind::Select, FieldValue::Text(s)) => match field.options {
            Some(options) if !options.contains(&s.as_str()) => {
                Err(format!("{}: недопустимое значение «{}»", label, s))
            }
            _ => Ok(()),
        },
        (_, v) => rules.validate_string(&v.to_display_string(), label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &[FieldMetadata] = &[
        FieldMetadata::text("name", "Наименование").required().length(2, 10),
        FieldMetadata::number("cores", "Ядра").required().range(1.0, 128.0),
        FieldMetadata::number("tdp", "TDP").min(0.0),
        FieldMetadata::select("memory_type", "Тип памяти", &["DDR4", "DDR5"]),
        FieldMetadata::checkbox("ecc", "ECC"),
        FieldMetadata::text("socket_code", "Код сокета").length(2, 2),
        FieldMetadata::number("threads", "Потоки").min(1.0).integer(),
    ];

    fn valid() -> FieldSet {
        FieldSet::new()
            .with("name", "Ryzen")
            .with("cores", 8)
            .with("tdp", FieldValue::Null)
            .with("memory_type", "DDR5")
            .with("ecc", false)
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate_fields(SCHEMA, &valid()).is_empty());
    }

    #[test]
    fn test_required_and_bounds() {
        let fields = valid().with("name", "").with("cores", 256).with("tdp", -5);
        let errors = validate_fields(SCHEMA, &fields);
        assert_eq!(errors.get("name"), Some("Наименование не может быть пустым"));
        assert_eq!(errors.get("cores"), Some("Ядра должен быть не более 128"));
        assert_eq!(errors.get("tdp"), Some("TDP должен быть не менее 0"));
    }

    #[test]
    fn test_length_counts_characters() {
        let fields = valid().with("name", "Процессоры");
        assert!(validate_fields(SCHEMA, &fields).is_empty());
        let fields = valid().with("name", "Процессоры!");
        assert!(validate_fields(SCHEMA, &fields).has("name"));
    }

    #[test]
    fn test_unparsed_number_and_bad_option() {
        let fields = valid().with("cores", "eight").with("memory_type", "SDRAM");
        let errors = validate_fields(SCHEMA, &fields);
        assert_eq!(errors.get("cores"), Some("Ядра должно быть числом"));
        assert!(errors.has("memory_type"));
    }

    #[test]
    fn test_missing_field_counts_as_empty() {
        let errors = validate_fields(SCHEMA, &FieldSet::new());
        assert!(errors.has("name"));
        assert!(errors.has("cores"));
        assert!(!errors.has("tdp"));
        assert!(!errors.has("ecc"));
    }

    #[test]
    fn test_blank_optional_field_skips_length_and_range() {
        let fields = valid()
            .with("socket_code", "")
            .with("threads", FieldValue::Null);
        assert!(validate_fields(SCHEMA, &fields).is_empty());

        let fields = valid().with("socket_code", "A");
        assert!(validate_fields(SCHEMA, &fields).has("socket_code"));
    }

    #[test]
    fn test_integer_rejects_fraction() {
        let errors = validate_fields(SCHEMA, &valid().with("threads", 1.5));
        assert_eq!(errors.get("threads"), Some("Потоки должно быть целым числом"));
        assert!(validate_fields(SCHEMA, &valid().with("threads", 16)).is_empty());

        let rules = ValidationRules {
            integer: true,
            ..ValidationRules::none()
        };
        assert!(rules.validate_number(2.0, "N").is_ok());
        assert!(rules.validate_number(2.25, "N").is_err());
    }

    #[test]
    fn test_custom_error() {
        let rules = ValidationRules {
            custom_error: Some("Укажите код"),
            ..ValidationRules::required()
        };
        assert_eq!(rules.validate_string(" ", "Код"), Err("Укажите код".to_string()));
    }
}
