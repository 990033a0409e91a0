use super::FieldValue;
use crate::shared::shaping;
use std::fmt;
use std::sync::Arc;

/// Pure function from one field value to another.
///
/// Stored behind an `Arc` so a controller stays `Clone + Send + Sync` and can
/// live inside a reactive signal.
#[derive(Clone)]
pub struct Transform(Arc<dyn Fn(&FieldValue) -> FieldValue + Send + Sync>);

impl Transform {
    pub fn new(f: impl Fn(&FieldValue) -> FieldValue + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Lift a text function; non-text values are fed in as their display string
    pub fn text(f: fn(&str) -> String) -> Self {
        Self::new(move |value| FieldValue::Text(f(&value.to_display_string())))
    }

    pub fn slug() -> Self {
        Self::text(shaping::slugify)
    }

    pub fn uppercase_code() -> Self {
        Self::text(shaping::uppercase_code)
    }

    pub fn url() -> Self {
        Self::text(shaping::ensure_url_scheme)
    }

    /// Blank text becomes null, e.g. "no parent selected" in an optional reference
    pub fn null_if_blank() -> Self {
        Self::new(|value| {
            if value.is_blank() {
                FieldValue::Null
            } else {
                value.clone()
            }
        })
    }

    pub fn apply(&self, value: &FieldValue) -> FieldValue {
        (self.0)(value)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}

/// Which primary value counts as "cleared" and re-arms derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySentinel {
    /// `""` or null
    #[default]
    EmptyString,
    /// `0` or null
    Zero,
    /// null only
    Null,
}

impl EmptySentinel {
    pub fn matches(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (_, FieldValue::Null) => true,
            (Self::EmptyString, FieldValue::Text(s)) => s.is_empty(),
            (Self::Zero, FieldValue::Number(n)) => *n == 0.0,
            _ => false,
        }
    }
}

/// What happens when the user clears a dependent field directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearPolicy {
    /// The field stays manual; only clearing the primary re-arms it
    #[default]
    StayManual,
    /// Clearing the dependent hands it back to the derivation
    Rearm,
}

/// `dependent` tracks `transform(primary)` until the user edits it
#[derive(Debug, Clone)]
pub struct DerivationRule {
    primary: String,
    dependent: String,
    transform: Transform,
    empty: EmptySentinel,
    on_dependent_cleared: ClearPolicy,
}

impl DerivationRule {
    pub fn new(primary: impl Into<String>, dependent: impl Into<String>, transform: Transform) -> Self {
        Self {
            primary: primary.into(),
            dependent: dependent.into(),
            transform,
            empty: EmptySentinel::default(),
            on_dependent_cleared: ClearPolicy::default(),
        }
    }

    /// name -> slug, the rule behind every slug field in the back office
    pub fn slug(primary: impl Into<String>, dependent: impl Into<String>) -> Self {
        Self::new(primary, dependent, Transform::slug())
    }

    pub fn with_empty(mut self, empty: EmptySentinel) -> Self {
        self.empty = empty;
        self
    }

    pub fn with_clear_policy(mut self, policy: ClearPolicy) -> Self {
        self.on_dependent_cleared = policy;
        self
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn dependent(&self) -> &str {
        &self.dependent
    }

    pub fn empty(&self) -> EmptySentinel {
        self.empty
    }

    pub fn clear_policy(&self) -> ClearPolicy {
        self.on_dependent_cleared
    }

    pub fn derive(&self, primary_value: &FieldValue) -> FieldValue {
        self.transform.apply(primary_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert!(EmptySentinel::EmptyString.matches(&FieldValue::text("")));
        assert!(EmptySentinel::EmptyString.matches(&FieldValue::Null));
        assert!(!EmptySentinel::EmptyString.matches(&FieldValue::text(" ")));
        assert!(!EmptySentinel::EmptyString.matches(&FieldValue::Number(0.0)));

        assert!(EmptySentinel::Zero.matches(&FieldValue::Number(0.0)));
        assert!(!EmptySentinel::Zero.matches(&FieldValue::text("")));

        assert!(EmptySentinel::Null.matches(&FieldValue::Null));
        assert!(!EmptySentinel::Null.matches(&FieldValue::text("")));
    }

    #[test]
    fn test_text_transform_tolerates_any_value() {
        let slug = Transform::slug();
        assert_eq!(slug.apply(&FieldValue::Null), FieldValue::text(""));
        assert_eq!(slug.apply(&FieldValue::Number(42.0)), FieldValue::text("42"));
        assert_eq!(slug.apply(&FieldValue::text("Café Déco")), FieldValue::text("cafe-deco"));
    }

    #[test]
    fn test_custom_transform() {
        let rule = DerivationRule::new(
            "cores",
            "threads",
            Transform::new(|v| FieldValue::Number(v.as_number().unwrap_or(0.0) * 2.0)),
        )
        .with_empty(EmptySentinel::Zero);
        assert_eq!(rule.derive(&FieldValue::Number(8.0)), FieldValue::Number(16.0));
        assert_eq!(rule.empty(), EmptySentinel::Zero);
        assert_eq!(rule.clear_policy(), ClearPolicy::StayManual);
    }
}
