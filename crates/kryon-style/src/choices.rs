//! Allowed values for a style property.

use std::fmt;

use crate::color::{parse_color, Color};
use crate::error::{Result, StyleError};

/// A validated style value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicitly unset, for properties that accept a default.
    None,
    /// One of the property's keyword constants.
    Keyword(&'static str),
    Str(String),
    Integer(i64),
    Number(f64),
    Color(Color),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("none"),
            Value::Keyword(keyword) => f.write_str(keyword),
            Value::Str(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Number(n) => write!(f, "{}", n),
            Value::Color(c) => write!(f, "{}", c),
        }
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::Color(color)
    }
}

/// The set of values a property accepts: keyword constants plus any of the
/// open-ended kinds (string, integer, number, color).
///
/// # Example
///
/// ```rust
/// use kryon_style::{Choices, Value};
///
/// let size = Choices::new(["none"]).with_integer();
/// assert_eq!(size.validate("42").unwrap(), Value::Integer(42));
/// assert_eq!(size.validate("none").unwrap(), Value::Keyword("none"));
/// assert!(size.validate("big").is_err());
/// assert_eq!(size.to_string(), "none, <integer>");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Choices {
    constants: Vec<&'static str>,
    default: bool,
    string: bool,
    integer: bool,
    number: bool,
    color: bool,
}

impl Choices {
    /// Choices limited to the given keywords.
    pub fn new<I>(constants: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        Choices {
            constants: constants.into_iter().collect(),
            ..Choices::default()
        }
    }

    /// Also accept an empty value or `none` as [`Value::None`].
    pub fn with_default(mut self) -> Self {
        self.default = true;
        self
    }

    /// Also accept any text.
    pub fn with_string(mut self) -> Self {
        self.string = true;
        self
    }

    pub fn with_integer(mut self) -> Self {
        self.integer = true;
        self
    }

    pub fn with_number(mut self) -> Self {
        self.number = true;
        self
    }

    pub fn with_color(mut self) -> Self {
        self.color = true;
        self
    }

    /// Convert raw text into the first kind of value it satisfies.
    ///
    /// Kinds are tried in a fixed order: default, string, integer, number,
    /// color, then the keyword constants.
    pub fn validate(&self, raw: &str) -> Result<Value> {
        let value = raw.trim();

        if self.default && (value.is_empty() || value == "none") {
            return Ok(Value::None);
        }
        if self.string {
            return Ok(Value::Str(value.to_string()));
        }
        if self.integer {
            if let Ok(i) = value.parse::<i64>() {
                return Ok(Value::Integer(i));
            }
        }
        if self.number {
            if let Some(n) = value.parse::<f64>().ok().filter(|n| n.is_finite()) {
                return Ok(Value::Number(n));
            }
        }
        if self.color {
            if let Ok(color) = parse_color(value) {
                return Ok(Value::Color(color));
            }
        }
        if let Some(constant) = self.constants.iter().copied().find(|c| *c == value) {
            return Ok(Value::Keyword(constant));
        }

        Err(StyleError::validation("style value", raw))
    }
}

impl fmt::Display for Choices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut options: Vec<String> = self
            .constants
            .iter()
            .map(|c| c.to_lowercase().replace('_', "-"))
            .collect();
        options.sort();

        for (enabled, label) in [
            (self.string, "<string>"),
            (self.integer, "<integer>"),
            (self.number, "<number>"),
            (self.color, "<color>"),
        ] {
            if enabled {
                options.push(label.to_string());
            }
        }

        f.write_str(&options.join(", "))
    }
}
