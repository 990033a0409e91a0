use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Per-field messages returned by the server after a rejected submission
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Messages for fields the form does not render, shown in the general banner
    pub fn unmatched<'a>(&'a self, rendered: &'a [&'a str]) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(field, _)| !rendered.contains(&field.as_str()))
            .map(|(_, message)| message.as_str())
    }
}

impl FromIterator<(String, String)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// Servers send either `"field": "msg"` or `"field": ["msg", ...]`; the first
// message of a list wins.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMessages {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for ValidationErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, RawMessages>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(field, messages)| {
                let message = match messages {
                    RawMessages::One(message) => Some(message),
                    RawMessages::Many(messages) => messages.into_iter().next(),
                };
                message.map(|m| (field, m))
            })
            .collect())
    }
}

/// Body of an HTTP 422 response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: ValidationErrors,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_and_list_messages() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "slug": ["Такой slug уже существует", "second"],
                "name": "Наименование обязательно",
                "code": []
            }
        }"#;
        let response: ValidationErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.message.as_deref(), Some("The given data was invalid."));
        assert_eq!(response.errors.get("slug"), Some("Такой slug уже существует"));
        assert_eq!(response.errors.get("name"), Some("Наименование обязательно"));
        assert!(!response.errors.has("code"));
        assert_eq!(response.errors.len(), 2);
    }

    #[test]
    fn test_missing_sections_default() {
        let response: ValidationErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(response.message.is_none());
        assert!(response.errors.is_empty());
    }

    #[test]
    fn test_unmatched_messages() {
        let mut errors = ValidationErrors::new();
        errors.insert("name", "bad name");
        errors.insert("parent_id", "bad parent");
        let unmatched: Vec<&str> = errors.unmatched(&["name", "slug"]).collect();
        assert_eq!(unmatched, vec!["bad parent"]);
    }
}
