#[cfg(feature = "serde")]
use serde::Serialize;

/// A semantic role bound to one primitive per [`Mode`][crate::Mode].
///
/// The references are primitive names such as `"gray/900"` or
/// `"white"`; they are resolved by [`Primitives`][crate::Primitives].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SemanticBinding {
    pub role: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

/// A named numeric design token (spacing, radius, font size, ...).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NumberToken {
    pub name: &'static str,
    pub value: f64,
}

/// Font weight of a [`TextStyle`], named after the Inter styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum FontWeight {
    Regular,
    Medium,
    SemiBold,
    Bold,
}

impl FontWeight {
    /// The CSS numeric weight.
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
        }
    }

    /// The font style name ("Semi Bold", ...).
    pub fn style_name(self) -> &'static str {
        match self {
            FontWeight::Regular => "Regular",
            FontWeight::Medium => "Medium",
            FontWeight::SemiBold => "Semi Bold",
            FontWeight::Bold => "Bold",
        }
    }
}

/// A named text style.  Sizes are in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TextStyle {
    pub name: &'static str,
    pub size: f64,
    pub weight: FontWeight,
    pub line_height: f64,
}
