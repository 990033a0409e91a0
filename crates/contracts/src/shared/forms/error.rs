use thiserror::Error;

/// Errors raised while assembling a form, never while editing one
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field `{0}` is not part of the form")]
    UnknownField(String),

    #[error("field `{0}` cannot be derived from itself")]
    SelfDerivation(String),

    #[error("field `{0}` is governed by more than one derivation rule")]
    DuplicateDependent(String),

    #[error("field `{0}` is both a derived field and a derivation source")]
    ChainedDerivation(String),

    #[error("record must serialize to a JSON object")]
    NotAnObject,

    #[error("field `{field}` holds an unsupported value: {reason}")]
    UnsupportedValue { field: String, reason: String },

    #[error("failed to decode form: {0}")]
    Decode(String),
}
