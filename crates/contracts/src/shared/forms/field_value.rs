use serde::{Deserialize, Serialize, Serializer};

/// Largest magnitude at which every integral `f64` is exact
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Value of a single form field
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// `Null` or an empty string
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// String shown in a controlled `<input>`; `Null` renders as empty
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::Text(s) => s.clone(),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

// Integral numbers go out as JSON integers so `i32` DTO fields decode.
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_numbers_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&FieldValue::Number(3.0)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&FieldValue::Number(-12.0)).unwrap(), "-12");
        assert_eq!(serde_json::to_string(&FieldValue::Number(0.25)).unwrap(), "0.25");
    }

    #[test]
    fn test_deserialize_json_scalars() {
        let values: Vec<FieldValue> = serde_json::from_str(r#"[null, true, 7, 1.5, "abc"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::Null,
                FieldValue::Bool(true),
                FieldValue::Number(7.0),
                FieldValue::Number(1.5),
                FieldValue::text("abc"),
            ]
        );
    }

    #[test]
    fn test_display_string() {
        assert_eq!(FieldValue::Null.to_display_string(), "");
        assert_eq!(FieldValue::Number(16.0).to_display_string(), "16");
        assert_eq!(FieldValue::Number(3.6).to_display_string(), "3.6");
        assert_eq!(FieldValue::Bool(false).to_display_string(), "false");
    }

    #[test]
    fn test_blank() {
        assert!(FieldValue::Null.is_blank());
        assert!(FieldValue::text("").is_blank());
        assert!(!FieldValue::text(" ").is_blank());
        assert!(!FieldValue::Number(0.0).is_blank());
        assert_eq!(FieldValue::from(None::<String>), FieldValue::Null);
    }
}
