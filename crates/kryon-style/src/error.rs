//! Error types for kryon-style.

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, StyleError>;

/// Errors raised while building or parsing style values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// A numeric argument is outside its legal range.
    #[error("{what} out of range: {value}")]
    Validation { what: &'static str, value: String },

    /// A color string could not be understood.
    #[error("invalid color {input:?}: {reason}")]
    Parse { input: String, reason: String },

    /// A directional value was built from a sequence of unsupported length.
    #[error("expected 1, 2 or 4 values, got {len}")]
    Shape { len: usize },

    /// An enum was looked up by a name it does not define.
    #[error("unknown {kind} {name:?}")]
    Lookup { kind: &'static str, name: String },

    /// A declaration has no property with this name.
    #[error("unknown style property {0:?}")]
    UnknownProperty(String),

    /// A declaration value matched none of the property's choices.
    #[error("invalid value {value:?} for property {property}; valid values are: {choices}")]
    InvalidValue {
        property: String,
        value: String,
        choices: String,
    },

    /// Inline declaration text that is not a list of `name: value` pairs.
    #[error("malformed declaration {0:?}, expected `name: value`")]
    MalformedDeclaration(String),
}

impl StyleError {
    pub(crate) fn validation(what: &'static str, value: impl ToString) -> Self {
        StyleError::Validation {
            what,
            value: value.to_string(),
        }
    }

    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        StyleError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
