//! Keyword enums used as style values.
//!
//! Every enum here is a closed set with a canonical lowercase name per member.
//! Names round-trip through [`as_str`](TextAlign::as_str) and
//! [`from_name`](TextAlign::from_name); unknown names are a
//! [`StyleError::Lookup`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StyleError};

/// Helper macro to declare a keyword enum with its name mapping
macro_rules! style_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $text)] $variant,)+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical name of this member.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Look up a member by its canonical name.
            pub fn from_name(name: &str) -> Result<Self> {
                match name {
                    $($text => Ok($name::$variant),)+
                    _ => Err(StyleError::Lookup {
                        kind: $kind,
                        name: name.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = StyleError;

            fn from_str(s: &str) -> Result<Self> {
                $name::from_name(s)
            }
        }
    };
}

style_enum! {
    /// Horizontal alignment of text within its box
    TextAlign("text alignment") {
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
    }
}

style_enum! {
    /// Main axis of a box's children
    Direction("direction") {
        Row => "row",
        Column => "column",
    }
}

style_enum! {
    /// One edge of a box, in clockwise order from the top
    Side("side") {
        Top => "top",
        Right => "right",
        Bottom => "bottom",
        Left => "left",
    }
}

style_enum! {
    /// Writing direction of text
    TextDirection("text direction") {
        Rtl => "rtl",
        Ltr => "ltr",
    }
}

style_enum! {
    Visibility("visibility") {
        Visible => "visible",
        Hidden => "hidden",
    }
}

style_enum! {
    /// Whether a box takes part in layout
    DisplayMode("display mode") {
        Pack => "pack",
        /// Removed from layout entirely
        None => "none",
    }
}

style_enum! {
    /// Placement of children along an axis
    Alignment("alignment") {
        Start => "start",
        Center => "center",
        End => "end",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
    }
}
