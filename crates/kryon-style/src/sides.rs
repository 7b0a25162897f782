use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Side;
use crate::error::{Result, StyleError};

/// Which supplied value feeds each side, clockwise from the top, keyed by
/// how many values were given.
const fn shorthand_scheme(len: usize) -> Option<[usize; 4]> {
    match len {
        1 => Some([0, 0, 0, 0]),
        2 => Some([0, 1, 0, 1]),
        4 => Some([0, 1, 2, 3]),
        _ => None,
    }
}

/// Expand 1, 2 or 4 values into `[top, right, bottom, left]`.
///
/// - one value applies to every side
/// - two values are `(vertical, horizontal)`
/// - four values are given clockwise starting at the top
///
/// Any other length is a [`StyleError::Shape`].
pub fn expand_shorthand<T: Clone>(values: &[T]) -> Result<[T; 4]> {
    let scheme = shorthand_scheme(values.len()).ok_or(StyleError::Shape { len: values.len() })?;
    Ok(scheme.map(|index| values[index].clone()))
}

/// A four-sided box value such as a margin or padding.
///
/// Built with CSS shorthand rules, after which each side can be changed on
/// its own.
///
/// # Example
///
/// ```rust
/// use kryon_style::Sides;
///
/// let padding = Sides::symmetric(10.0, 20.0);
/// assert_eq!(padding.top(), 10.0);
/// assert_eq!(padding.left(), 20.0);
/// assert_eq!(padding.to_string(), "10 20");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sides {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Sides {
    pub const ZERO: Sides = Sides::all(0.0);

    /// Explicit values, clockwise from the top.
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Sides {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same value on every side.
    pub const fn all(value: f32) -> Self {
        Sides::new(value, value, value, value)
    }

    /// `vertical` on top and bottom, `horizontal` on left and right.
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Sides::new(vertical, horizontal, vertical, horizontal)
    }

    /// Build from 1, 2 or 4 values using [`expand_shorthand`].
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        let [top, right, bottom, left] = expand_shorthand(values)?;
        Ok(Sides::new(top, right, bottom, left))
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn right(&self) -> f32 {
        self.right
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn set_top(&mut self, value: f32) {
        self.top = value;
    }

    pub fn set_right(&mut self, value: f32) {
        self.right = value;
    }

    pub fn set_bottom(&mut self, value: f32) {
        self.bottom = value;
    }

    pub fn set_left(&mut self, value: f32) {
        self.left = value;
    }

    /// Value of one side.
    pub fn get(&self, side: Side) -> f32 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Change one side, leaving the others alone.
    pub fn set(&mut self, side: Side, value: f32) {
        match side {
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
        }
    }

    /// `[top, right, bottom, left]`
    pub fn to_array(&self) -> [f32; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    /// Combined left and right extent.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Combined top and bottom extent.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl fmt::Display for Sides {
    /// Shortest shorthand that expands back to the same four values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [top, right, bottom, left] = self.to_array();
        if top == bottom && right == left {
            if top == right {
                write!(f, "{}", top)
            } else {
                write!(f, "{} {}", top, right)
            }
        } else {
            write!(f, "{} {} {} {}", top, right, bottom, left)
        }
    }
}

impl From<f32> for Sides {
    fn from(value: f32) -> Self {
        Sides::all(value)
    }
}

impl From<(f32, f32)> for Sides {
    fn from((vertical, horizontal): (f32, f32)) -> Self {
        Sides::symmetric(vertical, horizontal)
    }
}

impl From<(f32, f32, f32, f32)> for Sides {
    fn from((top, right, bottom, left): (f32, f32, f32, f32)) -> Self {
        Sides::new(top, right, bottom, left)
    }
}

impl From<[f32; 4]> for Sides {
    fn from([top, right, bottom, left]: [f32; 4]) -> Self {
        Sides::new(top, right, bottom, left)
    }
}

impl TryFrom<&[f32]> for Sides {
    type Error = StyleError;

    fn try_from(values: &[f32]) -> Result<Self> {
        Sides::from_slice(values)
    }
}

impl TryFrom<Vec<f32>> for Sides {
    type Error = StyleError;

    fn try_from(values: Vec<f32>) -> Result<Self> {
        Sides::from_slice(&values)
    }
}

impl Serialize for Sides {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(4)?;
        for value in self.to_array() {
            tuple.serialize_element(&value)?;
        }
        tuple.end()
    }
}

struct SidesVisitor;

impl<'de> Visitor<'de> for SidesVisitor {
    type Value = Sides;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a list of 1, 2 or 4 numbers")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Sides, E> {
        Ok(Sides::all(value as f32))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Sides, E> {
        Ok(Sides::all(value as f32))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Sides, E> {
        Ok(Sides::all(value as f32))
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Sides, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::with_capacity(4);
        while let Some(value) = seq.next_element::<f32>()? {
            values.push(value);
        }
        Sides::from_slice(&values).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Sides {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SidesVisitor)
    }
}
