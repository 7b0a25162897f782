//! # Kryon Style
//!
//! Style value types for the Kryon UI framework.
//!
//! This crate provides the validated values a Kryon widget can be styled
//! with: colors parsed from CSS-like text, four-sided box values built with
//! shorthand rules, keyword enums, and declarations that tie property names
//! to the values they accept.
//!
//! ```rust
//! use kryon_style::{parse_color, Color, Sides};
//!
//! let color = parse_color("rgba(255, 0, 0, 0.5)").unwrap();
//! assert_eq!(color, Color::RED.with_alpha(0.5).unwrap());
//!
//! let margin = Sides::from_slice(&[4.0, 8.0]).unwrap();
//! assert_eq!(margin.to_array(), [4.0, 8.0, 4.0, 8.0]);
//! ```

pub mod choices;
pub mod color;
pub mod declaration;
pub mod enums;
pub mod error;
pub mod sides;

pub use choices::{Choices, Value};
pub use color::{named_color, named_colors, parse_color, Color, ColorFunction, ColorSyntax};
pub use declaration::{Declaration, Property};
pub use enums::{Alignment, Direction, DisplayMode, Side, TextAlign, TextDirection, Visibility};
pub use error::{Result, StyleError};
pub use sides::{expand_shorthand, Sides};
