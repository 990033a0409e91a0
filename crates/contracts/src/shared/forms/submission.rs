use super::ValidationErrors;

/// In-flight state of one form's create/update request.
///
/// The form's values are not touched here; this only tracks whether a
/// request is running and what the last response said.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionState {
    pub processing: bool,
    pub errors: ValidationErrors,
    /// General (non-field) message of the last failed attempt
    pub message: Option<String>,
    pub recently_successful: bool,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request. Returns `false` when one is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.processing {
            return false;
        }
        self.processing = true;
        self.message = None;
        self.recently_successful = false;
        true
    }

    pub fn finish_ok(&mut self) {
        self.processing = false;
        self.errors = ValidationErrors::new();
        self.message = None;
        self.recently_successful = true;
    }

    /// Server rejected the data; its errors replace the previous ones wholesale
    pub fn finish_invalid(&mut self, errors: ValidationErrors, message: Option<String>) {
        self.processing = false;
        self.errors = errors;
        self.message = message;
        self.recently_successful = false;
    }

    /// Transport or server failure; field errors of the last attempt are kept
    pub fn finish_failed(&mut self, message: impl Into<String>) {
        self.processing = false;
        self.message = Some(message.into());
        self.recently_successful = false;
    }

    /// The user touched `field`, its stale message goes away
    pub fn clear_field_error(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_submit_is_refused() {
        let mut state = SubmissionState::new();
        assert!(state.try_begin());
        assert!(!state.try_begin());
        state.finish_ok();
        assert!(!state.processing);
        assert!(state.recently_successful);
        assert!(state.try_begin());
    }

    #[test]
    fn test_errors_replaced_wholesale() {
        let mut state = SubmissionState::new();
        let mut first = ValidationErrors::new();
        first.insert("name", "required");
        first.insert("slug", "taken");

        assert!(state.try_begin());
        state.finish_invalid(first, Some("invalid".to_string()));
        assert_eq!(state.field_error("slug"), Some("taken"));

        let mut second = ValidationErrors::new();
        second.insert("slug", "too long");
        assert!(state.try_begin());
        assert!(state.message.is_none());
        state.finish_invalid(second, None);
        assert_eq!(state.field_error("name"), None);
        assert_eq!(state.field_error("slug"), Some("too long"));
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut state = SubmissionState::new();
        let mut errors = ValidationErrors::new();
        errors.insert("name", "required");
        state.finish_invalid(errors, None);

        state.clear_field_error("name");
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_failure_keeps_field_errors() {
        let mut state = SubmissionState::new();
        let mut errors = ValidationErrors::new();
        errors.insert("code", "bad");
        state.finish_invalid(errors, None);

        assert!(state.try_begin());
        state.finish_failed("HTTP 500");
        assert_eq!(state.message.as_deref(), Some("HTTP 500"));
        assert_eq!(state.field_error("code"), Some("bad"));
        assert!(!state.processing);
    }
}
