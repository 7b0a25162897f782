use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Result, StyleError};

mod named;
mod parse;

pub use named::{named_color, named_colors};
pub use parse::{parse_color, ColorFunction, ColorSyntax};

/// Represents an RGBA color
///
/// Channels are 8-bit, alpha is a float in `0.0..=1.0`. Colors are rendered
/// as `#rrggbb` when opaque and as `rgba(r, g, b, a)` otherwise, and that
/// canonical text is also their serialized form.
///
/// Values are immutable: every constructor validates its input, so an
/// existing `Color` always holds legal channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: f32,
}

impl Color {
    // Common color constants
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0x80, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    /// Create an opaque color from RGB components (0-255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 1.0 }
    }

    /// Create a color, checking every channel.
    ///
    /// `r`, `g` and `b` must be in `0..=255` and `a` in `0.0..=1.0`;
    /// anything else is a [`StyleError::Validation`].
    pub fn new(r: i32, g: i32, b: i32, a: f32) -> Result<Self> {
        Ok(Color {
            r: channel("red channel", r)?,
            g: channel("green channel", g)?,
            b: channel("blue channel", b)?,
            a: alpha(a)?,
        })
    }

    /// Create a color from hue (degrees), saturation and lightness (0.0-1.0).
    ///
    /// The hue wraps around the color wheel, so `-90.0` and `270.0` are the
    /// same hue. The result is stored as RGB; the HSL components are not kept.
    pub fn from_hsl(h: f32, s: f32, l: f32, a: f32) -> Result<Self> {
        if !h.is_finite() {
            return Err(StyleError::validation("hue", h));
        }
        if !(0.0..=1.0).contains(&s) {
            return Err(StyleError::validation("saturation", s));
        }
        if !(0.0..=1.0).contains(&l) {
            return Err(StyleError::validation("lightness", l));
        }
        let a = alpha(a)?;

        let h = f64::from(h).rem_euclid(360.0);
        let (s, l) = (f64::from(s), f64::from(l));

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = h / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match sector as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

        Ok(Color {
            r: to_u8(r1),
            g: to_u8(g1),
            b: to_u8(b1),
            a,
        })
    }

    /// Parse any supported color syntax. See [`parse_color`].
    pub fn parse(input: &str) -> Result<Self> {
        parse_color(input)
    }

    pub(crate) fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color {
            r,
            g,
            b,
            a: f32::from(a) / 255.0,
        }
    }

    /// Get red component (0-255)
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Get green component (0-255)
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Get blue component (0-255)
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Get alpha component (0.0-1.0)
    pub fn a(&self) -> f32 {
        self.a
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 1.0
    }

    /// Copy of this color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Result<Self> {
        Ok(Color { a: alpha(a)?, ..self })
    }

    /// Canonical text form: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn as_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    /// Eight digit hex form, `#rrggbbaa`.
    pub fn to_hex8(&self) -> String {
        let a = (self.a * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, a)
    }
}

fn channel(what: &'static str, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| StyleError::validation(what, value))
}

fn alpha(value: f32) -> Result<f32> {
    if !(0.0..=1.0).contains(&value) {
        return Err(StyleError::validation("alpha", value));
    }
    // -0.0 would otherwise hash differently from 0.0
    Ok(if value == 0.0 { 0.0 } else { value })
}

// Alpha is never NaN, so equality is total.
impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_hex())
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = StyleError;

    fn try_from(value: &str) -> Result<Self> {
        parse_color(value)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_color(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_color_new_valid() {
        let color = Color::new(26, 26, 46, 1.0).unwrap();
        assert_eq!(color.r(), 26);
        assert_eq!(color.g(), 26);
        assert_eq!(color.b(), 46);
        assert_eq!(color.a(), 1.0);
        assert_eq!(color.to_string(), "#1a1a2e");
    }

    #[test]
    fn test_color_new_out_of_range() {
        assert!(matches!(
            Color::new(300, 0, 0, 1.0),
            Err(StyleError::Validation { what: "red channel", .. })
        ));
        assert!(matches!(
            Color::new(0, -1, 0, 1.0),
            Err(StyleError::Validation { what: "green channel", .. })
        ));
        assert!(matches!(
            Color::new(0, 0, 0, 1.5),
            Err(StyleError::Validation { what: "alpha", .. })
        ));
        assert!(Color::new(0, 0, 0, f32::NAN).is_err());
    }

    #[test]
    fn test_as_hex_opaque_is_lowercase() {
        assert_eq!(Color::rgb(0xDE, 0xAD, 0x00).as_hex(), "#dead00");
    }

    #[test]
    fn test_as_hex_translucent_uses_rgba() {
        let color = Color::new(10, 20, 30, 0.5).unwrap();
        assert_eq!(color.as_hex(), "rgba(10, 20, 30, 0.5)");
        assert_eq!(Color::TRANSPARENT.as_hex(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn test_to_hex8() {
        assert_eq!(Color::RED.to_hex8(), "#ff0000ff");
        assert_eq!(Color::TRANSPARENT.to_hex8(), "#00000000");
    }

    #[test]
    fn test_structural_equality_and_hash() {
        let direct = Color::new(255, 0, 0, 1.0).unwrap();
        let parsed: Color = "red".parse().unwrap();
        assert_eq!(direct, parsed);

        let mut set = HashSet::new();
        set.insert(direct);
        set.insert(parsed);
        set.insert(Color::new(0, 0, 0, -0.0).unwrap());
        set.insert(Color::TRANSPARENT);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_with_alpha() {
        let color = Color::BLUE.with_alpha(0.25).unwrap();
        assert_eq!(color.a(), 0.25);
        assert_eq!(color.b(), 255);
        assert!(Color::BLUE.with_alpha(2.0).is_err());
    }

    #[test]
    fn test_from_hsl_primaries() {
        assert_eq!(Color::from_hsl(0.0, 1.0, 0.5, 1.0).unwrap(), Color::RED);
        assert_eq!(Color::from_hsl(120.0, 1.0, 0.25, 1.0).unwrap(), Color::GREEN);
        assert_eq!(Color::from_hsl(240.0, 1.0, 0.5, 1.0).unwrap(), Color::BLUE);
        assert_eq!(
            Color::from_hsl(270.0, 0.5, 0.4, 1.0).unwrap(),
            Color::rgb(102, 51, 153)
        );
    }

    #[test]
    fn test_from_hsl_hue_wraps() {
        let a = Color::from_hsl(-90.0, 0.6, 0.5, 1.0).unwrap();
        let b = Color::from_hsl(270.0, 0.6, 0.5, 1.0).unwrap();
        let c = Color::from_hsl(630.0, 0.6, 0.5, 1.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_from_hsl_gray() {
        assert_eq!(
            Color::from_hsl(200.0, 0.0, 0.5, 1.0).unwrap(),
            Color::rgb(128, 128, 128)
        );
        assert!(Color::from_hsl(0.0, 1.2, 0.5, 1.0).is_err());
    }

    #[test]
    fn test_color_serialization() {
        let json = serde_json::to_string(&Color::rgb(0x1a, 0x1a, 0x2e)).unwrap();
        assert_eq!(json, "\"#1a1a2e\"");

        let color: Color = serde_json::from_str("\"rgba(0, 0, 0, 0.5)\"").unwrap();
        assert_eq!(color, Color::new(0, 0, 0, 0.5).unwrap());

        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn test_color_constants() {
        assert_eq!(Color::BLACK.to_string(), "#000000");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
        assert_eq!(Color::RED.to_string(), "#ff0000");
    }
}
