//! A snapshot of every token, ready for serialization.

#[cfg(feature = "serde")]
use serde::Serialize;
use crate::{Mode, Primitives, RGBColor, bindings, tokens};
use crate::tables::ty::{NumberToken, TextStyle};

/// A primitive color, as exported.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PrimitiveToken {
    pub name: String,
    pub hex: String,
}

/// A semantic role with its references and resolved colors.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RoleToken {
    pub role: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
    pub light_hex: String,
    pub dark_hex: String,
}

/// All design tokens of a [`Primitives`] collection.
///
/// With the `serde` feature, serializes to a document with the keys
/// `primitives`, `semantic`, `spacing`, `radius`, `font_size`,
/// `line_height`, `letter_spacing` and `text_styles`, in table order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DesignTokens {
    pub primitives: Vec<PrimitiveToken>,
    pub semantic: Vec<RoleToken>,
    pub spacing: Vec<NumberToken>,
    pub radius: Vec<NumberToken>,
    pub font_size: Vec<NumberToken>,
    pub line_height: Vec<NumberToken>,
    pub letter_spacing: Vec<NumberToken>,
    pub text_styles: Vec<TextStyle>,
}

impl DesignTokens {
    /// Roles whose references do not resolve are left out.
    pub fn new(primitives: &Primitives) -> Self {
        let light = primitives.theme(Mode::Light);
        let dark = primitives.theme(Mode::Dark);
        let semantic = bindings().iter().filter_map(|b| {
            match (light.role(b.role), dark.role(b.role)) {
                (Some(l), Some(d)) => Some(RoleToken {
                    role: b.role, light: b.light, dark: b.dark,
                    light_hex: l.to_hex(), dark_hex: d.to_hex() }),
                _ => {
                    tracing::debug!(role = b.role, "skipping unresolved role");
                    None
                }
            }
        }).collect();
        DesignTokens {
            primitives: primitives.iter()
                .map(|(name, c)| PrimitiveToken { name, hex: c.to_hex() })
                .collect(),
            semantic,
            spacing: tokens::spacing().to_vec(),
            radius: tokens::radius().to_vec(),
            font_size: tokens::font_size().to_vec(),
            line_height: tokens::line_height().to_vec(),
            letter_spacing: tokens::letter_spacing().to_vec(),
            text_styles: tokens::text_styles().to_vec(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_contents() {
        let t = DesignTokens::new(&Primitives::from_hex("#2196F3", "#9C27B0"));
        assert_eq!(t.primitives.len(), 62);
        assert_eq!(t.primitives[5], PrimitiveToken { name: "primary/500".into(),
                                                    hex: "#2196F3".into() });
        assert_eq!(t.primitives[15].hex, "#9C27B0");
        assert_eq!(t.semantic.len(), 30);
        let text = t.semantic.iter().find(|r| r.role == "text/primary").unwrap();
        assert_eq!((text.light_hex.as_str(), text.dark_hex.as_str()),
                   ("#121212", "#FFFFFF"));
        assert_eq!(t.spacing.len(), 16);
        assert_eq!(t.text_styles[0].name, "Title / XL");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_to_json() {
        let t = DesignTokens::new(&Primitives::default());
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["primitives"][0]["name"], "primary/50");
        assert_eq!(v["semantic"][0]["role"], "bg/primary");
        assert_eq!(v["semantic"][0]["light_hex"], "#FFFFFF");
        assert_eq!(v["radius"][6]["value"], 9999.0);
        assert_eq!(v["text_styles"][2]["weight"], "SemiBold");
    }
}
