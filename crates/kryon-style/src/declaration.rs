//! Style declarations: a fixed schema of validated properties plus the
//! values explicitly set on them.
//!
//! A [`Declaration`] behaves like a small map keyed by property name. Values
//! arrive as text, are validated against each property's [`Choices`], and
//! every change is reported to an optional applicator so a backend can push
//! it to a native widget.
//!
//! Directional properties (`margin`, `padding`) are defined as four real
//! properties (`margin_top`, `margin_right`, ...) plus a shorthand alias that
//! accepts 1 to 4 whitespace separated values. Whitespace inside parentheses
//! does not separate values, so `rgb(1, 2, 3)` counts as one.

use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::choices::{Choices, Value};
use crate::enums::{Alignment, Direction, DisplayMode, Side, TextAlign, TextDirection, Visibility};
use crate::error::{Result, StyleError};
use crate::sides::expand_shorthand;

static NO_VALUE: Value = Value::None;

/// A single property definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: String,
    choices: Choices,
    initial: Option<Value>,
}

impl Property {
    /// Create a property with no initial value
    pub fn new(name: impl Into<String>, choices: Choices) -> Self {
        Property {
            name: normalize(&name.into()),
            choices,
            initial: None,
        }
    }

    /// Set the value reported while nothing has been set explicitly.
    ///
    /// The initial value must itself satisfy the property's choices.
    pub fn with_initial(self, raw: &str) -> Result<Self> {
        let value = self
            .choices
            .validate(raw)
            .map_err(|_| StyleError::InvalidValue {
                property: self.name.clone(),
                value: raw.to_string(),
                choices: self.choices.to_string(),
            })?;
        Ok(self.preset(value))
    }

    /// Initial value already known to satisfy the choices.
    fn preset(mut self, value: Value) -> Self {
        self.initial = Some(value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn choices(&self) -> &Choices {
        &self.choices
    }

    pub fn initial(&self) -> Option<&Value> {
        self.initial.as_ref()
    }
}

type Applicator = Box<dyn FnMut(&str, &Value)>;

/// A set of style properties and their explicitly assigned values.
///
/// # Example
///
/// ```rust
/// use kryon_style::{Choices, Declaration, Property, Value};
///
/// let mut style = Declaration::new()
///     .define(Property::new("width", Choices::new(["none"]).with_integer()))
///     .define_directional("margin", Choices::default().with_integer(), Some("0"))
///     .unwrap();
///
/// style.set("margin", "10 20").unwrap();
/// style.set("width", "300").unwrap();
///
/// assert_eq!(style.get("margin-left").unwrap(), Some(&Value::Integer(20)));
/// assert_eq!(
///     style.to_string(),
///     "margin-bottom: 10; margin-left: 20; margin-right: 20; margin-top: 10; width: 300"
/// );
/// ```
#[derive(Default)]
pub struct Declaration {
    properties: BTreeMap<String, Property>,
    shorthands: BTreeMap<String, [String; 4]>,
    values: BTreeMap<String, Value>,
    applicator: Option<Applicator>,
}

impl Declaration {
    /// Create an empty declaration with no properties defined.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock schema consumed by Kryon's layout engine.
    pub fn layout() -> Self {
        fn keywords<T: Copy>(all: &[T], as_str: fn(T) -> &'static str) -> Choices {
            Choices::new(all.iter().map(|member| as_str(*member)))
        }
        let size = || Choices::new(["none"]).with_integer();

        // Every preset below is one of its own property's choices.
        Declaration::new()
            .define(
                Property::new("display", keywords(DisplayMode::ALL, DisplayMode::as_str))
                    .preset(Value::Keyword("pack")),
            )
            .define(
                Property::new("visibility", keywords(Visibility::ALL, Visibility::as_str))
                    .preset(Value::Keyword("visible")),
            )
            .define(
                Property::new("direction", keywords(Direction::ALL, Direction::as_str))
                    .preset(Value::Keyword("row")),
            )
            .define(
                Property::new(
                    "text_direction",
                    keywords(TextDirection::ALL, TextDirection::as_str),
                )
                .preset(Value::Keyword("rtl")),
            )
            .define(Property::new(
                "text_align",
                keywords(TextAlign::ALL, TextAlign::as_str).with_default(),
            ))
            .define(Property::new(
                "justify_content",
                keywords(Alignment::ALL, Alignment::as_str).with_default(),
            ))
            .define(Property::new(
                "align_items",
                keywords(Alignment::ALL, Alignment::as_str).with_default(),
            ))
            .define(Property::new("width", size()).preset(Value::Keyword("none")))
            .define(Property::new("height", size()).preset(Value::Keyword("none")))
            .define(Property::new("flex", Choices::default().with_number()).preset(Value::Number(0.0)))
            .define(Property::new("color", Choices::default().with_color().with_default()))
            .define(Property::new(
                "background_color",
                Choices::default().with_color().with_default(),
            ))
            .define(
                Property::new("font_family", Choices::default().with_string())
                    .preset(Value::Str("system".to_string())),
            )
            .define(
                Property::new("font_size", Choices::default().with_integer())
                    .preset(Value::Integer(14)),
            )
            .directional("margin", Choices::default().with_integer(), Some(Value::Integer(0)))
            .directional("padding", Choices::default().with_integer(), Some(Value::Integer(0)))
    }

    /// Add a property to the schema, returning the updated declaration.
    pub fn define(mut self, property: Property) -> Self {
        self.properties.insert(property.name.clone(), property);
        self
    }

    /// Add `{name}_top`, `{name}_right`, `{name}_bottom` and `{name}_left`
    /// sharing the same choices, plus a `name` shorthand covering all four.
    pub fn define_directional(
        self,
        name: &str,
        choices: Choices,
        initial: Option<&str>,
    ) -> Result<Self> {
        let initial = match initial {
            Some(raw) => Property::new(name, choices.clone()).with_initial(raw)?.initial,
            None => None,
        };
        Ok(self.directional(name, choices, initial))
    }

    fn directional(mut self, name: &str, choices: Choices, initial: Option<Value>) -> Self {
        let name = normalize(name);
        let sides = [Side::Top, Side::Right, Side::Bottom, Side::Left]
            .map(|side| format!("{}_{}", name, side));
        for side_name in &sides {
            let property = Property {
                name: side_name.clone(),
                choices: choices.clone(),
                initial: initial.clone(),
            };
            self = self.define(property);
        }
        self.shorthands.insert(name, sides);
        self
    }

    /// Install the callback invoked whenever a property's effective value
    /// changes.
    pub fn with_applicator<F>(mut self, applicator: F) -> Self
    where
        F: FnMut(&str, &Value) + 'static,
    {
        self.applicator = Some(Box::new(applicator));
        self
    }

    pub fn set_applicator<F>(&mut self, applicator: F)
    where
        F: FnMut(&str, &Value) + 'static,
    {
        self.applicator = Some(Box::new(applicator));
    }

    /// Whether `name` is a property or shorthand in this schema.
    pub fn defines(&self, name: &str) -> bool {
        let name = normalize(name);
        self.properties.contains_key(&name) || self.shorthands.contains_key(&name)
    }

    /// Validate `raw` and assign it to a property or shorthand.
    ///
    /// `-` and `_` are interchangeable in names. Assigning the value a
    /// property already holds does not notify the applicator.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<()> {
        let name = normalize(name);

        if let Some(sides) = self.shorthands.get(&name).cloned() {
            let parts = split_values(raw);
            let expanded = expand_directional(&parts)?;
            // Validate every side before touching any of them.
            let mut values = Vec::with_capacity(4);
            for (side_name, part) in sides.iter().zip(expanded) {
                values.push((side_name.clone(), self.validate(side_name, part)?));
            }
            for (side_name, value) in values {
                self.store(side_name, value);
            }
            return Ok(());
        }

        let value = self.validate(&name, raw)?;
        self.store(name, value);
        Ok(())
    }

    fn validate(&self, name: &str, raw: &str) -> Result<Value> {
        let property = self.property(name)?;
        property
            .choices
            .validate(raw)
            .map_err(|_| StyleError::InvalidValue {
                property: name.to_string(),
                value: raw.to_string(),
                choices: property.choices.to_string(),
            })
    }

    fn store(&mut self, name: String, value: Value) {
        if self.values.get(&name) == Some(&value) {
            return;
        }
        debug!(property = %name, %value, "style property changed");
        if let Some(apply) = self.applicator.as_mut() {
            apply(&name, &value);
        }
        self.values.insert(name, value);
    }

    fn property(&self, name: &str) -> Result<&Property> {
        self.properties
            .get(name)
            .ok_or_else(|| StyleError::UnknownProperty(name.to_string()))
    }

    /// Effective value of a property: the explicit value if set, otherwise
    /// its initial value.
    pub fn get(&self, name: &str) -> Result<Option<&Value>> {
        let name = normalize(name);
        let property = self.property(&name)?;
        Ok(self.values.get(&name).or(property.initial.as_ref()))
    }

    /// Effective values of a directional shorthand, clockwise from the top.
    pub fn get_directional(&self, name: &str) -> Result<[Option<&Value>; 4]> {
        let name = normalize(name);
        let sides = self
            .shorthands
            .get(&name)
            .ok_or_else(|| StyleError::UnknownProperty(name.clone()))?;
        let [top, right, bottom, left] = sides;
        Ok([
            self.get(top)?,
            self.get(right)?,
            self.get(bottom)?,
            self.get(left)?,
        ])
    }

    /// Clear an explicit value, falling back to the initial value.
    ///
    /// Removing a shorthand clears all four sides.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let name = normalize(name);

        if let Some(sides) = self.shorthands.get(&name).cloned() {
            for side_name in sides {
                self.clear(&side_name);
            }
            return Ok(());
        }

        self.property(&name)?;
        self.clear(&name);
        Ok(())
    }

    fn clear(&mut self, name: &str) {
        if self.values.remove(name).is_none() {
            return;
        }
        let initial = self
            .properties
            .get(name)
            .and_then(|property| property.initial.as_ref())
            .unwrap_or(&NO_VALUE);
        debug!(property = %name, value = %initial, "style property reset");
        if let Some(apply) = self.applicator.as_mut() {
            apply(name, initial);
        }
    }

    /// Set several properties in order, stopping at the first failure.
    pub fn update<'a, I>(&mut self, styles: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, raw) in styles {
            self.set(name, raw)?;
        }
        Ok(())
    }

    /// Apply CSS-like inline text such as `"margin: 10 20; color: red"`.
    ///
    /// This is the inverse of the declaration's `Display` output.
    pub fn apply_inline(&mut self, text: &str) -> Result<()> {
        for item in text.split(';').map(str::trim).filter(|item| !item.is_empty()) {
            let (name, raw) = item
                .split_once(':')
                .ok_or_else(|| StyleError::MalformedDeclaration(item.to_string()))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(StyleError::MalformedDeclaration(item.to_string()));
            }
            self.set(name, raw)?;
        }
        Ok(())
    }

    /// Duplicate the schema and explicit values, without the applicator.
    pub fn copy(&self) -> Declaration {
        Declaration {
            properties: self.properties.clone(),
            shorthands: self.shorthands.clone(),
            values: self.values.clone(),
            applicator: None,
        }
    }

    /// Explicitly set properties and their values, sorted by name.
    pub fn items(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Names of explicitly set properties, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Push every property's effective value through the applicator.
    pub fn reapply(&mut self) {
        let Some(apply) = self.applicator.as_mut() else {
            return;
        };
        for (name, property) in &self.properties {
            let value = self
                .values
                .get(name)
                .or(property.initial.as_ref())
                .unwrap_or(&NO_VALUE);
            apply(name, value);
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim().replace('-', "_")
}

/// Shorthand expansion for declarations. On top of the 1/2/4 forms, three
/// values are `top, horizontal, bottom`.
fn expand_directional<'a>(values: &[&'a str]) -> Result<[&'a str; 4]> {
    match values {
        [top, right, bottom] => Ok([*top, *right, *bottom, *right]),
        _ => expand_shorthand(values),
    }
}

/// Split shorthand text on whitespace outside parentheses, so
/// `red rgb(1, 2, 3)` is two values.
fn split_values(raw: &str) -> Vec<&str> {
    let mut values = Vec::new();
    let mut depth = 0usize;
    let mut start = None;

    for (i, c) in raw.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(begin) = start.take() {
                    values.push(&raw[begin..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(begin) = start {
        values.push(&raw[begin..]);
    }
    values
}

impl fmt::Debug for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declaration")
            .field("properties", &self.properties.keys().collect::<Vec<_>>())
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut items: Vec<(String, &Value)> = self
            .items()
            .map(|(name, value)| (name.replace('_', "-"), value))
            .collect();
        items.sort_by(|a, b| a.0.cmp(&b.0));

        let rendered: Vec<String> = items
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect();
        f.write_str(&rendered.join("; "))
    }
}
