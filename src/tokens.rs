//! Size and typography tokens.
//!
//! ```
//! use design_tokens::tokens;
//! assert_eq!(tokens::number("space/4"), Some(16.));
//! assert_eq!(tokens::number("radius/full"), Some(9999.));
//! ```

use crate::tables::{self, ty::{NumberToken, TextStyle}};

/// Spacing scale, `space/0` (0px) to `space/24` (96px).
pub fn spacing() -> &'static [NumberToken] { &tables::SPACING }

/// Corner radii, `radius/none` to `radius/full`.
pub fn radius() -> &'static [NumberToken] { &tables::RADIUS }

/// Font sizes in pixels, `font-size/xs` to `font-size/6xl`.
pub fn font_size() -> &'static [NumberToken] { &tables::FONT_SIZE }

/// Unitless line height multipliers.
pub fn line_height() -> &'static [NumberToken] { &tables::LINE_HEIGHT }

/// Letter spacing, as a fraction of the font size.
pub fn letter_spacing() -> &'static [NumberToken] { &tables::LETTER_SPACING }

/// Title, Heading and Body text styles, largest first in each family.
pub fn text_styles() -> &'static [TextStyle] { &tables::TEXT_STYLES }

/// Look up any numeric token by its full name.
pub fn number(name: &str) -> Option<f64> {
    tables::NUMBER_BY_NAME.get(name).copied()
}

/// Look up a text style by name, e.g. `"Heading / H2"`.
pub fn text_style(name: &str) -> Option<&'static TextStyle> {
    text_styles().iter().find(|s| s.name == name)
}
