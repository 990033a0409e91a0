//! Input kind enumeration for field schemas

/// How a field is edited in a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Textarea,
    Number,
    Checkbox,
    Select,
    Url,
}

impl InputKind {
    /// `type` attribute for `<input>` based kinds
    pub fn html_type(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::Url => "url",
            Self::Text | Self::Textarea | Self::Select => "text",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number)
    }
}
