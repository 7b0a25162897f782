//! Color string parsing.
//!
//! Input is first classified into a [`ColorSyntax`] by looking at its shape
//! alone, then handed to the conversion for that syntax:
//!
//! - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb(r, g, b)`, `rgba(r, g, b, a)` with integer or percentage channels
//! - `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
//! - color keywords such as `rebeccapurple`, matched case-insensitively
//!
//! Invalid input is always an error; nothing is clamped or guessed.

use tracing::trace;

use super::{named_color, Color};
use crate::error::{Result, StyleError};

/// The syntactic family of a color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSyntax<'a> {
    /// Hex digits following `#`.
    Hex(&'a str),
    /// A functional form, split into name and the text between the parens.
    Function { name: &'a str, args: &'a str },
    /// A bare keyword.
    Name(&'a str),
}

impl<'a> ColorSyntax<'a> {
    /// Classify a color string without interpreting its contents.
    ///
    /// Fails only when the text is empty or its parentheses do not form a
    /// single `name(...)` call.
    pub fn classify(input: &'a str) -> Result<Self> {
        let s = input.trim();
        if s.is_empty() {
            return Err(StyleError::parse(input, "empty color string"));
        }

        if let Some(digits) = s.strip_prefix('#') {
            return Ok(ColorSyntax::Hex(digits));
        }

        match s.find('(') {
            Some(open) => {
                let name = s[..open].trim();
                if name.is_empty() {
                    return Err(StyleError::parse(input, "missing function name"));
                }
                let args = s[open + 1..]
                    .strip_suffix(')')
                    .ok_or_else(|| StyleError::parse(input, "missing closing parenthesis"))?;
                if args.contains(['(', ')']) {
                    return Err(StyleError::parse(input, "unbalanced parentheses"));
                }
                Ok(ColorSyntax::Function { name, args })
            }
            None if s.contains(')') => Err(StyleError::parse(input, "unbalanced parentheses")),
            None => Ok(ColorSyntax::Name(s)),
        }
    }
}

/// The color functions the parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFunction {
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

impl ColorFunction {
    /// Match a function name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rgb" => Some(ColorFunction::Rgb),
            "rgba" => Some(ColorFunction::Rgba),
            "hsl" => Some(ColorFunction::Hsl),
            "hsla" => Some(ColorFunction::Hsla),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorFunction::Rgb => "rgb",
            ColorFunction::Rgba => "rgba",
            ColorFunction::Hsl => "hsl",
            ColorFunction::Hsla => "hsla",
        }
    }

    /// Number of comma separated arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            ColorFunction::Rgb | ColorFunction::Hsl => 3,
            ColorFunction::Rgba | ColorFunction::Hsla => 4,
        }
    }
}

/// Parse a color string into a [`Color`].
///
/// # Example
///
/// ```rust
/// use kryon_style::{parse_color, Color};
///
/// assert_eq!(parse_color("#dead00").unwrap(), Color::rgb(0xde, 0xad, 0x00));
/// assert_eq!(parse_color("hsl(0, 100%, 50%)").unwrap(), Color::RED);
/// assert!(parse_color("notacolor").is_err());
/// ```
pub fn parse_color(input: &str) -> Result<Color> {
    let syntax = ColorSyntax::classify(input)?;
    trace!(?syntax, "classified color input");

    match syntax {
        ColorSyntax::Hex(digits) => parse_hex(input, digits),
        ColorSyntax::Function { name, args } => parse_function(input, name, args),
        ColorSyntax::Name(name) => {
            named_color(name).ok_or_else(|| StyleError::parse(input, "unknown color name"))
        }
    }
}

fn parse_hex(input: &str, digits: &str) -> Result<Color> {
    if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(StyleError::parse(input, "invalid hex digit"));
    }

    // All bytes are ASCII hex digits from here on.
    let nibble = |i: usize| -> u8 {
        let c = digits.as_bytes()[i];
        match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            _ => c - b'A' + 10,
        }
    };
    let short = |i: usize| nibble(i) * 17;
    let pair = |i: usize| nibble(i * 2) << 4 | nibble(i * 2 + 1);

    let color = match digits.len() {
        3 => Color::rgb(short(0), short(1), short(2)),
        4 => Color::from_rgba8(short(0), short(1), short(2), short(3)),
        6 => Color::rgb(pair(0), pair(1), pair(2)),
        8 => Color::from_rgba8(pair(0), pair(1), pair(2), pair(3)),
        _ => {
            return Err(StyleError::parse(
                input,
                "hex color must have 3, 4, 6 or 8 digits",
            ))
        }
    };
    Ok(color)
}

fn parse_function(input: &str, name: &str, args: &str) -> Result<Color> {
    let function = ColorFunction::from_name(name)
        .ok_or_else(|| StyleError::parse(input, format!("unknown color function {name:?}")))?;

    let args: Vec<&str> = args.split(',').map(str::trim).collect();
    if args.iter().any(|arg| arg.is_empty()) {
        return Err(StyleError::parse(input, "empty function argument"));
    }
    if args.len() != function.arity() {
        return Err(StyleError::parse(
            input,
            format!(
                "{}() takes {} comma separated values, got {}",
                function.as_str(),
                function.arity(),
                args.len()
            ),
        ));
    }

    match function {
        ColorFunction::Rgb | ColorFunction::Rgba => {
            let a = match args.get(3) {
                Some(token) => alpha(input, token)?,
                None => 1.0,
            };
            Color::new(
                rgb_channel(input, args[0])?,
                rgb_channel(input, args[1])?,
                rgb_channel(input, args[2])?,
                a,
            )
        }
        ColorFunction::Hsl | ColorFunction::Hsla => {
            let a = match args.get(3) {
                Some(token) => alpha(input, token)?,
                None => 1.0,
            };
            Color::from_hsl(
                hue(input, args[0])?,
                percentage(input, args[1], "saturation")?,
                percentage(input, args[2], "lightness")?,
                a,
            )
        }
    }
}

fn number(input: &str, token: &str) -> Result<f32> {
    token
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| StyleError::parse(input, format!("expected a number, found {token:?}")))
}

/// Integer 0-255, or a percentage scaled onto that range.
fn rgb_channel(input: &str, token: &str) -> Result<i32> {
    if let Some(pct) = token.strip_suffix('%') {
        let pct = number(input, pct)?;
        if !(0.0..=100.0).contains(&pct) {
            return Err(StyleError::validation("rgb percentage", token));
        }
        return Ok((pct * 255.0 / 100.0).round() as i32);
    }
    token.parse::<i32>().map_err(|_| {
        let digits = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
        if !digits.is_empty() && digits.bytes().all(|c| c.is_ascii_digit()) {
            // An integer, just too large for any channel.
            StyleError::validation("rgb channel", token)
        } else {
            StyleError::parse(input, format!("expected an integer channel, found {token:?}"))
        }
    })
}

/// Number 0.0-1.0, or a percentage.
fn alpha(input: &str, token: &str) -> Result<f32> {
    match token.strip_suffix('%') {
        Some(pct) => {
            let pct = number(input, pct)?;
            if !(0.0..=100.0).contains(&pct) {
                return Err(StyleError::validation("alpha", token));
            }
            Ok(pct / 100.0)
        }
        None => number(input, token),
    }
}

fn hue(input: &str, token: &str) -> Result<f32> {
    number(input, token)
}

/// A mandatory `N%` with N in 0-100, returned as a fraction.
fn percentage(input: &str, token: &str, what: &'static str) -> Result<f32> {
    let pct = token.strip_suffix('%').ok_or_else(|| {
        StyleError::parse(input, format!("{what} must be a percentage, found {token:?}"))
    })?;
    let pct = number(input, pct)?;
    if !(0.0..=100.0).contains(&pct) {
        return Err(StyleError::validation(what, token));
    }
    Ok(pct / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_parse_error(result: Result<Color>) -> bool {
        matches!(result, Err(StyleError::Parse { .. }))
    }

    #[test]
    fn test_classify() {
        assert_eq!(ColorSyntax::classify(" #abc ").unwrap(), ColorSyntax::Hex("abc"));
        assert_eq!(
            ColorSyntax::classify("rgb (1, 2, 3)").unwrap(),
            ColorSyntax::Function {
                name: "rgb",
                args: "1, 2, 3"
            }
        );
        assert_eq!(ColorSyntax::classify("Navy").unwrap(), ColorSyntax::Name("Navy"));
        assert!(ColorSyntax::classify("   ").is_err());
        assert!(ColorSyntax::classify("rgb(1, 2, 3").is_err());
        assert!(ColorSyntax::classify("rgb((1, 2, 3)").is_err());
        assert!(ColorSyntax::classify("red)").is_err());
        assert!(ColorSyntax::classify("(1, 2, 3)").is_err());
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_color("#ff0000").unwrap(), Color::RED);
        assert_eq!(parse_color("#dead00").unwrap(), Color::rgb(0xde, 0xad, 0x00));
        assert_eq!(parse_color("#DEAD00").unwrap(), Color::rgb(0xde, 0xad, 0x00));
        assert_eq!(parse_color("#abc").unwrap(), parse_color("#aabbcc").unwrap());
        assert_eq!(
            parse_color("#f008").unwrap(),
            Color::new(255, 0, 0, 136.0 / 255.0).unwrap()
        );
        assert_eq!(
            parse_color("#11223380").unwrap(),
            Color::new(0x11, 0x22, 0x33, 128.0 / 255.0).unwrap()
        );
    }

    #[test]
    fn test_parse_hex_errors() {
        assert!(is_parse_error(parse_color("#12")));
        assert!(is_parse_error(parse_color("#12345")));
        assert!(is_parse_error(parse_color("#1234567")));
        assert!(is_parse_error(parse_color("#ggg")));
        assert!(is_parse_error(parse_color("#")));
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_color("rgb(255, 0, 0)").unwrap(), Color::RED);
        assert_eq!(parse_color("  RGB( 255 ,0,   0 ) ").unwrap(), Color::RED);
        assert_eq!(parse_color("rgb(100%, 0%, 50%)").unwrap(), Color::rgb(255, 0, 128));
    }

    #[test]
    fn test_parse_rgba() {
        assert_eq!(
            parse_color("rgba(0,0,0,0.5)").unwrap(),
            Color::new(0, 0, 0, 0.5).unwrap()
        );
        assert_eq!(
            parse_color("rgba(10, 20, 30, 25%)").unwrap(),
            Color::new(10, 20, 30, 0.25).unwrap()
        );
        assert_eq!(parse_color("rgba(1, 2, 3, 1)").unwrap(), Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_parse_rgb_errors() {
        assert!(matches!(
            parse_color("rgb(300, 0, 0)"),
            Err(StyleError::Validation { .. })
        ));
        assert!(matches!(
            parse_color("rgba(0, 0, 0, 1.5)"),
            Err(StyleError::Validation { .. })
        ));
        assert!(matches!(
            parse_color("rgb(120%, 0, 0)"),
            Err(StyleError::Validation { .. })
        ));
        assert!(matches!(
            parse_color("rgb(99999999999, 0, 0)"),
            Err(StyleError::Validation { what: "rgb channel", .. })
        ));
        assert!(matches!(
            parse_color("rgb(0, -99999999999, 0)"),
            Err(StyleError::Validation { .. })
        ));
        assert!(is_parse_error(parse_color("rgb(-, 0, 0)")));
        assert!(is_parse_error(parse_color("rgb(1 2 3)")));
        assert!(is_parse_error(parse_color("rgb(1, 2)")));
        assert!(is_parse_error(parse_color("rgb(1, 2, 3, 0.5)")));
        assert!(is_parse_error(parse_color("rgba(1, 2, 3)")));
        assert!(is_parse_error(parse_color("rgb(1, , 3)")));
        assert!(is_parse_error(parse_color("rgb(1.5, 2, 3)")));
        assert!(is_parse_error(parse_color("rgb(a, b, c)")));
    }

    #[test]
    fn test_parse_hsl() {
        assert_eq!(parse_color("hsl(0, 100%, 50%)").unwrap(), Color::RED);
        assert_eq!(parse_color("hsl(360, 100%, 50%)").unwrap(), Color::RED);
        assert_eq!(parse_color("hsl(-120, 100%, 50%)").unwrap(), Color::BLUE);
        assert_eq!(
            parse_color("hsla(120, 100%, 25%, 0.5)").unwrap(),
            Color::new(0, 128, 0, 0.5).unwrap()
        );
    }

    #[test]
    fn test_parse_hsl_errors() {
        assert!(is_parse_error(parse_color("hsl(0, 100, 50%)")));
        assert!(is_parse_error(parse_color("hsl(red, 100%, 50%)")));
        assert!(matches!(
            parse_color("hsl(0, 100%, 150%)"),
            Err(StyleError::Validation { .. })
        ));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(parse_color("RebeccaPurple").unwrap(), Color::rgb(102, 51, 153));
        assert_eq!(parse_color(" white ").unwrap(), Color::WHITE);
        assert_eq!(parse_color("transparent").unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(is_parse_error(parse_color("notacolor")));
        assert!(is_parse_error(parse_color("cmyk(0, 0, 0, 0)")));
        assert!(is_parse_error(parse_color("")));
    }

    #[test]
    fn test_canonical_round_trip() {
        for color in [
            Color::rgb(0x12, 0x34, 0x56),
            Color::WHITE,
            Color::new(10, 20, 30, 0.3).unwrap(),
            Color::TRANSPARENT,
        ] {
            assert_eq!(parse_color(&color.as_hex()).unwrap(), color);
        }
    }

    #[test]
    fn test_function_arity() {
        assert_eq!(ColorFunction::from_name("HSLA"), Some(ColorFunction::Hsla));
        assert_eq!(ColorFunction::Rgb.arity(), 3);
        assert_eq!(ColorFunction::Hsla.arity(), 4);
        assert_eq!(ColorFunction::from_name("hwb"), None);
    }
}
