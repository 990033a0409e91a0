use super::{FieldValue, FormError};
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Ordered working state of one form: field name -> current value.
///
/// The key set is decided when the form is built; later writes only touch
/// existing keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldSet {
    entries: Vec<(String, FieldValue)>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used while seeding: adds the field or replaces its value
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Seed from any record that serializes to a flat JSON object (a DTO)
    pub fn from_record<T: Serialize>(record: &T) -> Result<Self, FormError> {
        let json = serde_json::to_value(record).map_err(|e| FormError::Decode(e.to_string()))?;
        let serde_json::Value::Object(map) = json else {
            return Err(FormError::NotAnObject);
        };

        let mut entries = Vec::with_capacity(map.len());
        for (name, value) in map {
            let value: FieldValue =
                serde_json::from_value(value).map_err(|e| FormError::UnsupportedValue {
                    field: name.clone(),
                    reason: e.to_string(),
                })?;
            entries.push((name, value));
        }
        Ok(Self { entries })
    }

    /// Decode the current values back into a typed record for submission
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, FormError> {
        serde_json::from_value(self.to_json()).map_err(|e| FormError::Decode(e.to_string()))
    }

    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|(name, value)| {
                let json = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
                (name.clone(), json)
            })
            .collect();
        serde_json::Value::Object(map)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Overwrite an existing field. Returns `false` for unknown names.
    pub(crate) fn set(&mut self, name: &str, value: FieldValue) -> bool {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FieldSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleDto {
        id: Option<String>,
        name: String,
        sort_order: i32,
        rate: f64,
        is_active: bool,
    }

    fn sample() -> SampleDto {
        SampleDto {
            id: None,
            name: "Процессоры".to_string(),
            sort_order: 3,
            rate: 20.5,
            is_active: true,
        }
    }

    #[test]
    fn test_from_record_keeps_declaration_order() {
        let fields = FieldSet::from_record(&sample()).unwrap();
        let names: Vec<&str> = fields.names().collect();
        assert_eq!(names, vec!["id", "name", "sort_order", "rate", "is_active"]);
        assert_eq!(fields.get("id"), Some(&FieldValue::Null));
        assert_eq!(fields.get("sort_order"), Some(&FieldValue::Number(3.0)));
    }

    #[test]
    fn test_decode_back_into_record() {
        let fields = FieldSet::from_record(&sample()).unwrap();
        let decoded: SampleDto = fields.decode().unwrap();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn test_set_ignores_unknown_fields() {
        let mut fields = FieldSet::new().with("name", "a");
        assert!(fields.set("name", FieldValue::text("b")));
        assert!(!fields.set("slug", FieldValue::text("b")));
        assert_eq!(fields.len(), 1);
        assert!(!fields.contains("slug"));
    }

    #[test]
    fn test_non_object_record_is_rejected() {
        assert_eq!(FieldSet::from_record(&42).unwrap_err(), FormError::NotAnObject);
    }

    #[test]
    fn test_nested_values_are_rejected() {
        let record = serde_json::json!({ "name": "x", "tags": ["a", "b"] });
        let err = FieldSet::from_record(&record).unwrap_err();
        assert!(matches!(err, FormError::UnsupportedValue { ref field, .. } if field == "tags"));
    }

    #[test]
    fn test_serialize_as_object() {
        let fields = FieldSet::new().with("name", "CPU").with("cores", 8).with("ecc", false);
        assert_eq!(
            serde_json::to_string(&fields).unwrap(),
            r#"{"name":"CPU","cores":8,"ecc":false}"#
        );
    }
}
