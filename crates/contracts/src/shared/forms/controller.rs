use super::{ClearPolicy, DerivationRule, FieldSet, FieldValue, FormError, Transform};
use serde::de::DeserializeOwned;

/// Sync state of a dependent field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// Tracks `transform(primary)`
    Auto,
    /// Edited by the user, left alone by derivation
    Manual,
}

/// One user-input event, for reducer-style updates
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetPrimary { field: String, value: FieldValue },
    SetDependent { field: String, value: FieldValue },
    /// Routed by role: primary, dependent or plain field
    SetValue { field: String, value: FieldValue },
}

/// Keeps dependent fields in sync with their primary field until the user
/// overrides them.
///
/// Every dependent is either `Auto` or `Manual`:
/// - `Auto -> Manual` on any direct edit of the dependent;
/// - `Manual -> Auto` when its primary is set to the rule's empty sentinel
///   (or, with `ClearPolicy::Rearm`, when the dependent itself is cleared).
///
/// All operations are infallible; writes to names outside the field set are
/// dropped with a warning.
#[derive(Debug, Clone, Default)]
pub struct DerivedFieldController {
    fields: FieldSet,
    rules: Vec<DerivationRule>,
    // parallel to `rules`, one entry per dependent
    states: Vec<EditState>,
    normalizers: Vec<(String, Transform)>,
}

impl DerivedFieldController {
    /// Create flow: every dependent starts `Auto`
    pub fn new(fields: FieldSet, rules: Vec<DerivationRule>) -> Result<Self, FormError> {
        check_rules(&fields, &rules)?;
        let states = vec![EditState::Auto; rules.len()];
        Ok(Self {
            fields,
            rules,
            states,
            normalizers: Vec::new(),
        })
    }

    /// Edit flow: dependents that already hold a value start `Manual`, so a
    /// stored value is never overwritten behind the user's back
    pub fn for_existing(fields: FieldSet, rules: Vec<DerivationRule>) -> Result<Self, FormError> {
        check_rules(&fields, &rules)?;
        let states = rules
            .iter()
            .map(|rule| match fields.get(rule.dependent()) {
                Some(value) if !value.is_blank() => EditState::Manual,
                _ => EditState::Auto,
            })
            .collect();
        Ok(Self {
            fields,
            rules,
            states,
            normalizers: Vec::new(),
        })
    }

    /// Force the initial state of one dependent
    pub fn with_state(mut self, dependent: &str, state: EditState) -> Result<Self, FormError> {
        let index = self
            .rule_index(dependent)
            .ok_or_else(|| FormError::UnknownField(dependent.to_string()))?;
        self.states[index] = state;
        Ok(self)
    }

    /// Shape every value written to `field`, typed or derived
    pub fn with_normalizer(
        mut self,
        field: impl Into<String>,
        transform: Transform,
    ) -> Result<Self, FormError> {
        let field = field.into();
        if !self.fields.contains(&field) {
            return Err(FormError::UnknownField(field));
        }
        self.normalizers.push((field, transform));
        Ok(self)
    }

    /// Write a primary field and re-derive its `Auto` dependents
    pub fn set_primary(&mut self, field: &str, value: impl Into<FieldValue>) {
        let value = normalize(&self.normalizers, field, value.into());
        if !self.write(field, value.clone()) {
            return;
        }

        for (rule, state) in self.rules.iter().zip(self.states.iter_mut()) {
            if rule.primary() != field {
                continue;
            }
            if rule.empty().matches(&value) && *state == EditState::Manual {
                log::debug!("'{}' cleared, '{}' tracks it again", field, rule.dependent());
                *state = EditState::Auto;
            }
            if *state == EditState::Auto {
                let derived = normalize(&self.normalizers, rule.dependent(), rule.derive(&value));
                self.fields.set(rule.dependent(), derived);
            }
        }
    }

    /// Write a dependent field directly; this freezes it
    pub fn set_dependent(&mut self, field: &str, value: impl Into<FieldValue>) {
        let value = normalize(&self.normalizers, field, value.into());
        if !self.write(field, value.clone()) {
            return;
        }

        if let Some(index) = self.rule_index(field) {
            let rule = &self.rules[index];
            let rearm = rule.clear_policy() == ClearPolicy::Rearm && rule.empty().matches(&value);
            self.states[index] = if rearm {
                EditState::Auto
            } else {
                EditState::Manual
            };
        }
    }

    /// Entry point for views: dispatches on the field's role
    pub fn set_value(&mut self, field: &str, value: impl Into<FieldValue>) {
        if self.is_dependent(field) {
            self.set_dependent(field, value);
        } else if self.is_primary(field) {
            self.set_primary(field, value);
        } else {
            let value = normalize(&self.normalizers, field, value.into());
            self.write(field, value);
        }
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetPrimary { field, value } => self.set_primary(&field, value),
            FormAction::SetDependent { field, value } => self.set_dependent(&field, value),
            FormAction::SetValue { field, value } => self.set_value(&field, value),
        }
    }

    pub fn reduce(mut self, action: FormAction) -> Self {
        self.apply(action);
        self
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Current value as shown in an input; unknown fields read as empty
    pub fn display_value(&self, field: &str) -> String {
        self.fields
            .get(field)
            .map(FieldValue::to_display_string)
            .unwrap_or_default()
    }

    pub fn is_manually_edited(&self, field: &str) -> bool {
        self.edit_state(field) == Some(EditState::Manual)
    }

    /// `None` for fields that are not governed by a rule
    pub fn edit_state(&self, field: &str) -> Option<EditState> {
        self.rule_index(field).map(|index| self.states[index])
    }

    pub fn is_primary(&self, field: &str) -> bool {
        self.rules.iter().any(|rule| rule.primary() == field)
    }

    pub fn is_dependent(&self, field: &str) -> bool {
        self.rule_index(field).is_some()
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, FormError> {
        self.fields.decode()
    }

    fn rule_index(&self, dependent: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.dependent() == dependent)
    }

    fn write(&mut self, field: &str, value: FieldValue) -> bool {
        let known = self.fields.set(field, value);
        if !known {
            log::warn!("ignoring write to unknown form field '{}'", field);
        }
        known
    }
}

fn normalize(normalizers: &[(String, Transform)], field: &str, value: FieldValue) -> FieldValue {
    normalizers
        .iter()
        .filter(|(name, _)| name == field)
        .fold(value, |value, (_, transform)| transform.apply(&value))
}

fn check_rules(fields: &FieldSet, rules: &[DerivationRule]) -> Result<(), FormError> {
    for (index, rule) in rules.iter().enumerate() {
        for name in [rule.primary(), rule.dependent()] {
            if !fields.contains(name) {
                return Err(FormError::UnknownField(name.to_string()));
            }
        }
        if rule.primary() == rule.dependent() {
            return Err(FormError::SelfDerivation(rule.primary().to_string()));
        }
        if rules[..index].iter().any(|r| r.dependent() == rule.dependent()) {
            return Err(FormError::DuplicateDependent(rule.dependent().to_string()));
        }
        if rules.iter().any(|r| r.primary() == rule.dependent()) {
            return Err(FormError::ChainedDerivation(rule.dependent().to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::EmptySentinel;

    fn create_form() -> DerivedFieldController {
        let fields = FieldSet::new().with("name", "").with("slug", "").with("description", "");
        DerivedFieldController::new(fields, vec![DerivationRule::slug("name", "slug")]).unwrap()
    }

    fn slug(controller: &DerivedFieldController) -> &str {
        controller.value("slug").and_then(FieldValue::as_text).unwrap()
    }

    #[test]
    fn test_accented_name_becomes_slug() {
        let mut form = create_form();
        form.set_primary("name", "Café Déco");
        assert_eq!(slug(&form), "cafe-deco");
        assert_eq!(form.edit_state("slug"), Some(EditState::Auto));
    }

    #[test]
    fn test_punctuation_collapses_in_slug() {
        let mut form = create_form();
        form.set_primary("name", "  Hello---World!! ");
        assert_eq!(slug(&form), "hello-world");
        assert_eq!(form.display_value("name"), "  Hello---World!! ");
    }

    #[test]
    fn test_tracks_last_primary_value() {
        let mut form = create_form();
        for name in ["G", "Gr", "Graphics", "Graphics Cards", "Graphics Cards & More"] {
            form.set_primary("name", name);
        }
        assert_eq!(slug(&form), "graphics-cards-more");
    }

    #[test]
    fn test_manual_edit_freezes_dependent() {
        let mut form = create_form();
        form.set_primary("name", "Name");
        assert_eq!(slug(&form), "name");

        form.set_dependent("slug", "my-slug");
        assert!(form.is_manually_edited("slug"));

        form.set_primary("name", "Other Name");
        assert_eq!(slug(&form), "my-slug");
    }

    #[test]
    fn test_clearing_primary_rearms() {
        let mut form = create_form();
        form.set_dependent("slug", "custom-value");
        form.set_primary("name", "Anything");
        assert_eq!(slug(&form), "custom-value");

        form.set_primary("name", "");
        assert_eq!(form.edit_state("slug"), Some(EditState::Auto));
        assert_eq!(slug(&form), "");

        form.set_primary("name", "New Name");
        assert_eq!(slug(&form), "new-name");
    }

    #[test]
    fn test_existing_record_keeps_stored_slug() {
        let fields = FieldSet::new().with("name", "Old Name").with("slug", "existing-slug");
        let mut form =
            DerivedFieldController::for_existing(fields, vec![DerivationRule::slug("name", "slug")])
                .unwrap();
        assert!(form.is_manually_edited("slug"));

        form.set_primary("name", "Changed Name");
        assert_eq!(slug(&form), "existing-slug");
    }

    #[test]
    fn test_existing_record_with_empty_slug_tracks_name() {
        let fields = FieldSet::new().with("name", "Old Name").with("slug", "");
        let mut form =
            DerivedFieldController::for_existing(fields, vec![DerivationRule::slug("name", "slug")])
                .unwrap();
        assert_eq!(form.edit_state("slug"), Some(EditState::Auto));

        form.set_primary("name", "Changed Name");
        assert_eq!(slug(&form), "changed-name");
    }

    #[test]
    fn test_with_state_forces_manual() {
        let fields = FieldSet::new().with("name", "").with("slug", "existing-slug");
        let mut form = DerivedFieldController::new(fields, vec![DerivationRule::slug("name", "slug")])
            .unwrap()
            .with_state("slug", EditState::Manual)
            .unwrap();
        form.set_primary("name", "Changed Name");
        assert_eq!(slug(&form), "existing-slug");
    }

    #[test]
    fn test_clearing_dependent_stays_manual_by_default() {
        let mut form = create_form();
        form.set_primary("name", "Name");
        form.set_dependent("slug", "");
        assert!(form.is_manually_edited("slug"));

        form.set_primary("name", "Name Two");
        assert_eq!(slug(&form), "");
    }

    #[test]
    fn test_clearing_dependent_rearms_with_policy() {
        let fields = FieldSet::new().with("name", "").with("slug", "");
        let rule = DerivationRule::slug("name", "slug").with_clear_policy(ClearPolicy::Rearm);
        let mut form = DerivedFieldController::new(fields, vec![rule]).unwrap();

        form.set_dependent("slug", "custom");
        assert!(form.is_manually_edited("slug"));
        form.set_dependent("slug", "");
        assert!(!form.is_manually_edited("slug"));

        form.set_primary("name", "Back Again");
        assert_eq!(slug(&form), "back-again");
    }

    #[test]
    fn test_one_primary_many_dependents() {
        let fields = FieldSet::new()
            .with("name", "")
            .with("slug", "")
            .with("code", "");
        let rules = vec![
            DerivationRule::slug("name", "slug"),
            DerivationRule::new("name", "code", Transform::uppercase_code()),
        ];
        let mut form = DerivedFieldController::new(fields, rules).unwrap();

        form.set_primary("name", "Tax free");
        assert_eq!(form.display_value("slug"), "tax-free");
        assert_eq!(form.display_value("code"), "TAXFREE");

        form.set_dependent("code", "TF");
        form.set_primary("name", "Tax exempt");
        assert_eq!(form.display_value("slug"), "tax-exempt");
        assert_eq!(form.display_value("code"), "TF");
    }

    #[test]
    fn test_zero_sentinel_on_numeric_primary() {
        let fields = FieldSet::new().with("cores", 0).with("threads", 0);
        let rule = DerivationRule::new(
            "cores",
            "threads",
            Transform::new(|v| FieldValue::Number(v.as_number().unwrap_or(0.0) * 2.0)),
        )
        .with_empty(EmptySentinel::Zero);
        let mut form = DerivedFieldController::new(fields, vec![rule]).unwrap();

        form.set_primary("cores", 8);
        assert_eq!(form.value("threads"), Some(&FieldValue::Number(16.0)));

        form.set_dependent("threads", 8);
        form.set_primary("cores", 6);
        assert_eq!(form.value("threads"), Some(&FieldValue::Number(8.0)));

        form.set_primary("cores", 0);
        form.set_primary("cores", 4);
        assert_eq!(form.value("threads"), Some(&FieldValue::Number(8.0)));
        assert_eq!(form.edit_state("threads"), Some(EditState::Auto));
    }

    #[test]
    fn test_set_value_routes_by_role() {
        let mut form = create_form();
        form.set_value("name", "Routed Name");
        assert_eq!(slug(&form), "routed-name");

        form.set_value("slug", "hand-made");
        assert!(form.is_manually_edited("slug"));

        form.set_value("description", "plain field");
        assert_eq!(form.display_value("description"), "plain field");
        assert_eq!(form.edit_state("description"), None);
        assert!(!form.is_manually_edited("description"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut form = create_form();
        form.set_value("nope", "x");
        form.set_dependent("nope", "x");
        assert_eq!(form.value("nope"), None);
        assert_eq!(form.fields().len(), 3);
    }

    #[test]
    fn test_normalizer_shapes_typed_and_derived_values() {
        let fields = FieldSet::new().with("code", "").with("name", "");
        let mut form = DerivedFieldController::new(fields, Vec::new())
            .unwrap()
            .with_normalizer("code", Transform::uppercase_code())
            .unwrap();
        form.set_value("code", "usd");
        assert_eq!(form.display_value("code"), "USD");

        assert_eq!(
            DerivedFieldController::new(FieldSet::new(), Vec::new())
                .unwrap()
                .with_normalizer("code", Transform::uppercase_code())
                .unwrap_err(),
            FormError::UnknownField("code".to_string())
        );
    }

    #[test]
    fn test_reducer_matches_direct_calls() {
        let form = create_form()
            .reduce(FormAction::SetValue {
                field: "name".to_string(),
                value: FieldValue::text("Reduced Name"),
            })
            .reduce(FormAction::SetDependent {
                field: "slug".to_string(),
                value: FieldValue::text("kept"),
            })
            .reduce(FormAction::SetPrimary {
                field: "name".to_string(),
                value: FieldValue::text("Ignored"),
            });
        assert_eq!(slug(&form), "kept");
        assert_eq!(form.display_value("name"), "Ignored");
    }

    #[test]
    fn test_invalid_rule_sets_are_rejected() {
        let fields = FieldSet::new().with("name", "").with("slug", "").with("code", "");

        let err = DerivedFieldController::new(fields.clone(), vec![DerivationRule::slug("name", "missing")])
            .unwrap_err();
        assert_eq!(err, FormError::UnknownField("missing".to_string()));

        let err = DerivedFieldController::new(fields.clone(), vec![DerivationRule::slug("name", "name")])
            .unwrap_err();
        assert_eq!(err, FormError::SelfDerivation("name".to_string()));

        let err = DerivedFieldController::new(
            fields.clone(),
            vec![DerivationRule::slug("name", "slug"), DerivationRule::slug("code", "slug")],
        )
        .unwrap_err();
        assert_eq!(err, FormError::DuplicateDependent("slug".to_string()));

        let err = DerivedFieldController::new(
            fields,
            vec![DerivationRule::slug("name", "slug"), DerivationRule::slug("slug", "code")],
        )
        .unwrap_err();
        assert_eq!(err, FormError::ChainedDerivation("slug".to_string()));
    }
}
