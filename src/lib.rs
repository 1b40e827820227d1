//! Design-system tokens derived from brand seed colors.
//!
//! - [`parse_hex`], [`lighten`], [`darken`]
//! - [`ShadeScale`] and [`generate_shades`]
//! - [`Primitives`], the named colors of a design system
//! - [`Theme`], semantic roles resolved for a [`Mode`]
//!
//! Size and typography tokens live in [`tokens`], component variant
//! tables in [`components`], and [`DesignTokens`] gathers everything
//! into one exportable document.
//!
//! All colors use [`rgb`] pixel types.  The canonical [`Color`] is an
//! `RGB<f64>` with components in \[0, 1\]; any type implementing
//! [`RGBColor`] gets the same operations.
//!
//! ```
//! use design_tokens::{Primitives, Mode};
//! let primitives = Primitives::from_hex("#2196F3", "#9C27B0");
//! let text = primitives.theme(Mode::Dark).role("text/brand");
//! assert_eq!(text, primitives.get("primary/300"));
//! ```

use std::fmt;
use std::ops::Index;
use rgb::{RGB, RGBA, RGB8, RGB16, RGBA8, RGBA16};
use thiserror::Error;

mod tables;
pub mod tokens;
pub mod components;
mod primitives;
mod semantic;
mod export;

pub use primitives::{Group, Primitives, Seeds};
pub use semantic::{bindings, binding, Mode, Paint, Theme};
pub use tables::ty::{NumberToken, SemanticBinding, TextStyle, FontWeight};
pub use export::{DesignTokens, PrimitiveToken, RoleToken};

/// Color with red, green and blue components in \[0, 1\].
pub type Color = RGB<f64>;

/// Pure black, also the result of parsing malformed hex input.
pub const BLACK: Color = RGB { r: 0., g: 0., b: 0. };

/// Pure white.
pub const WHITE: Color = RGB { r: 1., g: 1., b: 1. };

/// Reasons a string is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("empty color string")]
    Empty,
    #[error("expected 6 hexadecimal digits, found {0}")]
    Length(usize),
    #[error("invalid hexadecimal digit {ch:?} at position {index}")]
    Digit { ch: char, index: usize },
}

/// Parse `hex` (optionally prefixed with `#`) into a [`Color`].
///
/// Exactly 6 hexadecimal digits are accepted, in any case.
///
/// # Example
///
/// ```
/// use design_tokens::try_parse_hex;
/// let c = try_parse_hex("#FF8000").unwrap();
/// assert_eq!(c.r, 1.);
/// assert!(try_parse_hex("#FF80").is_err());
/// ```
pub fn try_parse_hex(hex: &str) -> Result<Color, HexError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.is_empty() { return Err(HexError::Empty) }
    let offset = hex.len() - digits.len();
    if let Some((index, ch)) = digits.char_indices()
        .find(|(_, ch)| !ch.is_ascii_hexdigit()) {
        return Err(HexError::Digit { ch, index: index + offset })
    }
    if digits.len() != 6 { return Err(HexError::Length(digits.len())) }
    // All bytes are ASCII hex digits, so slicing and parsing cannot fail.
    let byte = |i: usize| {
        u8::from_str_radix(&digits[i .. i + 2], 16).unwrap_or(0) as f64 / 255.
    };
    Ok(RGB { r: byte(0), g: byte(2), b: byte(4) })
}

/// Parse `hex` into a [`Color`], returning [`BLACK`] on malformed
/// input.  Use [`try_parse_hex`] to learn why the input was rejected.
///
/// ```
/// use design_tokens::{parse_hex, BLACK};
/// let c = parse_hex("#2196F3");
/// assert_eq!(c.g, 150. / 255.);
/// assert_eq!(parse_hex("xyz"), BLACK);
/// ```
pub fn parse_hex(hex: &str) -> Color {
    match try_parse_hex(hex) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(input = hex, error = %e, "malformed hex color, using black");
            BLACK
        }
    }
}

/// Blend `c` toward white by `amount`: each channel becomes
/// `x + (1 - x) * amount`.  `amount` is not clamped.
#[inline]
pub fn lighten(c: Color, amount: f64) -> Color {
    c.lighten(amount)
}

/// Blend `c` toward black by `amount`: each channel becomes
/// `x * (1 - amount)`.  `amount` is not clamped.
#[inline]
pub fn darken(c: Color, amount: f64) -> Color {
    c.darken(amount)
}

/// Return the 10-step shade scale of `base`.  See [`ShadeStep`] for
/// the blend applied at each step.
#[inline]
pub fn generate_shades(base: Color) -> ShadeScale<Color> {
    base.shades()
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 1\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 1\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Parse a `#RRGGBB` string, falling back to opaque black.
    fn from_hex(hex: &str) -> Self {
        let RGB { r, g, b } = parse_hex(hex);
        Self::from_rgba(RGBA { r, g, b, a: 1. })
    }

    /// Format the color as uppercase `#RRGGBB`.  Components outside
    /// \[0, 1\] are clamped.
    fn to_hex(&self) -> String {
        let RGBA { r, g, b, .. } = self.to_rgba();
        format!("#{:02X}{:02X}{:02X}", to_byte(r), to_byte(g), to_byte(b))
    }

    /// Move the color toward white by `amount` (alpha is kept).
    ///
    /// ```
    /// use design_tokens::{Color, RGBColor};
    /// let c = Color::new(0.5, 0.5, 0.5).lighten(0.5);
    /// assert_eq!(c, Color::new(0.75, 0.75, 0.75));
    /// ```
    fn lighten(&self, amount: f64) -> Self {
        let RGBA { r, g, b, a } = self.to_rgba();
        Self::from_rgba(RGBA { r: r + (1. - r) * amount,
                               g: g + (1. - g) * amount,
                               b: b + (1. - b) * amount, a })
    }

    /// Move the color toward black by `amount` (alpha is kept).
    fn darken(&self, amount: f64) -> Self {
        let k = 1. - amount;
        let RGBA { r, g, b, a } = self.to_rgba();
        Self::from_rgba(RGBA { r: r * k, g: g * k, b: b * k, a })
    }

    /// Return the shade scale having `self` as its 500 step.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use design_tokens::{RGBColor, ShadeStep};
    /// let blue = RGB8::new(0x21, 0x96, 0xF3);
    /// let shades = blue.shades();
    /// assert_eq!(shades[ShadeStep::S500], blue);
    /// ```
    fn shades(&self) -> ShadeScale<Self> where Self: Copy {
        let colors = ShadeStep::ALL.map(|step| match step.blend() {
            Blend::Lighten(amount) => self.lighten(amount),
            Blend::Base => *self,
            Blend::Darken(amount) => self.darken(amount),
        });
        tracing::trace!(base = %self.to_hex(), "generated shade scale");
        ShadeScale { colors }
    }
}

#[inline]
fn to_byte(x: f64) -> u8 { (x.clamp(0., 1.) * 255.).round() as u8 }

#[inline]
fn to_word(x: f64) -> u16 { (x.clamp(0., 1.) * 65535.).round() as u16 }

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA { r: self.r, g: self.g, b: self.b, a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { RGB { r: c.r, g: c.g, b: c.b } }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA { r: self.r as f64 / 255., g: self.g as f64 / 255.,
               b: self.b as f64 / 255., a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: to_byte(c.r), g: to_byte(c.g), b: to_byte(c.b) }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA { r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
               b: self.b as f64 / 65535., a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: to_word(c.r), g: to_word(c.g), b: to_word(c.b) }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA { r: self.r as f64 / 255., g: self.g as f64 / 255.,
               b: self.b as f64 / 255., a: self.a as f64 / 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: to_byte(c.r), g: to_byte(c.g), b: to_byte(c.b),
                a: to_byte(c.a) }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA { r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
               b: self.b as f64 / 65535., a: self.a as f64 / 65535. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA16 { r: to_word(c.r), g: to_word(c.g), b: to_word(c.b),
                 a: to_word(c.a) }
    }
}


/// A step of a [`ShadeScale`].
///
/// Steps below [`S500`][ShadeStep::S500] lighten the base color,
/// steps above darken it:
///
/// | step | 50   | 100 | 200 | 300 | 400  | 500  | 600 | 700  | 800 | 900  |
/// |------|------|-----|-----|-----|------|------|-----|------|-----|------|
/// | mix  | 0.95 | 0.9 | 0.7 | 0.5 | 0.25 | base | 0.1 | 0.25 | 0.4 | 0.55 |
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShadeStep {
    S50, S100, S200, S300, S400, S500, S600, S700, S800, S900,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Blend {
    Lighten(f64),
    Base,
    Darken(f64),
}

impl ShadeStep {
    /// All steps, lightest first.
    pub const ALL: [ShadeStep; 10] = {
        use ShadeStep::*;
        [S50, S100, S200, S300, S400, S500, S600, S700, S800, S900]
    };

    /// The numeric name of the step (50, 100, ..., 900).
    pub fn value(self) -> u16 {
        match self {
            ShadeStep::S50 => 50,
            s => 100 * (s as u16),
        }
    }

    /// The step named `value`, if any.
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }

    fn blend(self) -> Blend {
        use ShadeStep::*;
        match self {
            S50 => Blend::Lighten(0.95),
            S100 => Blend::Lighten(0.9),
            S200 => Blend::Lighten(0.7),
            S300 => Blend::Lighten(0.5),
            S400 => Blend::Lighten(0.25),
            S500 => Blend::Base,
            S600 => Blend::Darken(0.1),
            S700 => Blend::Darken(0.25),
            S800 => Blend::Darken(0.4),
            S900 => Blend::Darken(0.55),
        }
    }
}

impl fmt::Display for ShadeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}


/// Ten colors indexed by [`ShadeStep`], lightest first.
///
/// Created by [`RGBColor::shades`] or [`generate_shades`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadeScale<Color> {
    colors: [Color; 10],
}

impl<Color: Copy> ShadeScale<Color> {
    /// Wrap hand-authored colors, ordered from step 50 to step 900.
    pub const fn from_colors(colors: [Color; 10]) -> Self {
        Self { colors }
    }

    /// Number of steps (always 10).
    #[inline]
    pub fn len(&self) -> usize { self.colors.len() }

    /// Always `false`: a scale has every step.
    #[inline]
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Return the color of the step named `step` (50, 100, ..., 900).
    pub fn get(&self, step: u16) -> Option<Color> {
        ShadeStep::from_value(step).map(|s| self[s])
    }

    /// Returns the 500 step.
    #[inline]
    pub fn base(&self) -> Color { self.colors[ShadeStep::S500 as usize] }

    /// Returns the colors, lightest first.
    #[inline]
    pub fn colors(&self) -> [Color; 10] { self.colors }

    /// Iterate over the steps and their colors, lightest first.
    pub fn iter(&self) -> ShadeIter<'_, Color> {
        ShadeIter { scale: self, i: 0, j: self.colors.len() }
    }

    /// Convert every shade into another color encoding.
    pub fn convert<C: RGBColor>(&self) -> ShadeScale<C>
    where Color: RGBColor {
        ShadeScale { colors: self.colors.map(|c| C::from_rgba(c.to_rgba())) }
    }
}

impl<Color> Index<ShadeStep> for ShadeScale<Color> {
    type Output = Color;

    #[inline]
    fn index(&self, step: ShadeStep) -> &Color { &self.colors[step as usize] }
}

impl<'a, Color: Copy> IntoIterator for &'a ShadeScale<Color> {
    type Item = (ShadeStep, Color);
    type IntoIter = ShadeIter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// An exact size iterator over the steps of a [`ShadeScale`].
#[derive(Clone)]
pub struct ShadeIter<'a, Color> {
    scale: &'a ShadeScale<Color>,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // position after the last one to be consumed
}

impl<'a, Color: Copy> Iterator for ShadeIter<'a, Color> {
    type Item = (ShadeStep, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.j { return None }
        let step = ShadeStep::ALL[self.i];
        self.i += 1;
        Some((step, self.scale[step]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.j - self.i;
        (len, Some(len))
    }
}

impl<'a, Color: Copy> ExactSizeIterator for ShadeIter<'a, Color> {}

impl<'a, Color: Copy> DoubleEndedIterator for ShadeIter<'a, Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i >= self.j { return None }
        self.j -= 1;
        let step = ShadeStep::ALL[self.j];
        Some((step, self.scale[step]))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tracing_test::traced_test;

    fn close(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-12 && (a.g - b.g).abs() < 1e-12
            && (a.b - b.b).abs() < 1e-12
    }

    #[test]
    fn parse_material_blue() {
        let c = parse_hex("#2196F3");
        assert_eq!(c, RGB::new(33. / 255., 150. / 255., 243. / 255.));
        assert!((c.g - 0.588).abs() < 1e-3);
        assert_eq!(parse_hex("2196f3"), c);
    }

    #[test]
    fn malformed_hex_is_black() {
        for s in ["xyz", "#12", "", "#", "#2196F", "#2196F3A", "##2196F3",
                  "+2196F3", "#+f96F3", "#21 6F3", "#2196é3"] {
            assert_eq!(parse_hex(s), BLACK, "{s:?}");
        }
    }

    #[test]
    fn hex_errors() {
        assert_eq!(try_parse_hex(""), Err(HexError::Empty));
        assert_eq!(try_parse_hex("#"), Err(HexError::Empty));
        assert_eq!(try_parse_hex("#12"), Err(HexError::Length(2)));
        assert_eq!(try_parse_hex("#12345g"),
                   Err(HexError::Digit { ch: 'g', index: 6 }));
        assert_eq!(try_parse_hex("+0000ff"),
                   Err(HexError::Digit { ch: '+', index: 0 }));
    }

    #[test]
    #[traced_test]
    fn fallback_is_logged() {
        assert_eq!(parse_hex("nope"), BLACK);
        assert!(logs_contain("malformed hex color"));
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(parse_hex("#0d47a1").to_hex(), "#0D47A1");
        assert_eq!(WHITE.to_hex(), "#FFFFFF");
        assert_eq!(RGB::new(1.5, -0.2, 0.5).to_hex(), "#FF0080");
        assert_eq!(RGB8::from_hex("#1E88E5"), RGB8::new(0x1E, 0x88, 0xE5));
        assert_eq!(RGBA8::from_hex("bad"), RGBA8::new(0, 0, 0, 255));
    }

    #[test]
    fn blend_scenarios() {
        assert_eq!(lighten(RGB::new(0.5, 0.5, 0.5), 0.5),
                   RGB::new(0.75, 0.75, 0.75));
        assert!(close(darken(RGB::new(0.8, 0.4, 0.2), 0.25),
                      RGB::new(0.6, 0.3, 0.15)));
    }

    #[test]
    fn blends_extrapolate() {
        let c = RGB::new(0.5, 0.5, 0.5);
        assert_eq!(lighten(c, 2.), RGB::new(1.5, 1.5, 1.5));
        assert_eq!(darken(c, -1.), RGB::new(1., 1., 1.));
    }

    #[test]
    fn blends_keep_alpha() {
        let c = RGBA { r: 0.2, g: 0.4, b: 0.6, a: 0.5 };
        assert_eq!(c.lighten(0.5).a, 0.5);
        assert_eq!(c.darken(0.5).a, 0.5);
    }

    #[test]
    fn shade_steps() {
        let values: Vec<u16> = ShadeStep::ALL.iter().map(|s| s.value()).collect();
        assert_eq!(values, [50, 100, 200, 300, 400, 500, 600, 700, 800, 900]);
        assert_eq!(ShadeStep::from_value(700), Some(ShadeStep::S700));
        assert_eq!(ShadeStep::from_value(750), None);
        assert_eq!(ShadeStep::S50.to_string(), "50");
    }

    #[test]
    fn shade_table() {
        let base = parse_hex("#2196F3");
        let s = generate_shades(base);
        assert_eq!(s.len(), 10);
        assert!(!s.is_empty());
        assert_eq!(s.get(500), Some(base));
        assert_eq!(s.get(50), Some(lighten(base, 0.95)));
        assert_eq!(s.get(400), Some(lighten(base, 0.25)));
        assert_eq!(s.get(600), Some(darken(base, 0.1)));
        assert_eq!(s.get(900), Some(darken(base, 0.55)));
        assert_eq!(s.get(1000), None);
    }

    #[test]
    fn shade_iter() {
        let s = generate_shades(RGB::new(0.2, 0.4, 0.6));
        let mut it = s.iter();
        assert_eq!(it.len(), 10);
        assert_eq!(it.next().map(|(k, _)| k), Some(ShadeStep::S50));
        assert_eq!(it.next_back().map(|(k, _)| k), Some(ShadeStep::S900));
        assert_eq!(it.len(), 8);
        let steps: Vec<_> = it.rev().map(|(k, _)| k.value()).collect();
        assert_eq!(steps, [800, 700, 600, 500, 400, 300, 200, 100]);
    }

    #[test]
    fn shades_convert() {
        let s = generate_shades(parse_hex("#9C27B0")).convert::<RGB8>();
        assert_eq!(s[ShadeStep::S500], RGB8::new(0x9C, 0x27, 0xB0));
        assert_eq!(s[ShadeStep::S50].to_hex(), generate_shades(parse_hex("#9C27B0"))[ShadeStep::S50].to_hex());
    }

    fn color() -> impl Strategy<Value = Color> {
        (0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64)
            .prop_map(|(r, g, b)| RGB::new(r, g, b))
    }

    proptest! {
        #[test]
        fn valid_hex_in_unit_range(h in "#?[0-9a-fA-F]{6}") {
            let c = try_parse_hex(&h).unwrap();
            for x in [c.r, c.g, c.b] {
                prop_assert!((0. ..= 1.).contains(&x));
            }
            prop_assert_eq!(c.to_hex(), format!("#{}", h.trim_start_matches('#').to_uppercase()));
        }

        #[test]
        fn wrong_length_is_black(h in "#?[0-9a-f]{0,5}|#?[0-9a-f]{7,10}") {
            prop_assert_eq!(parse_hex(&h), BLACK);
        }

        #[test]
        fn identity_at_zero(c in color()) {
            prop_assert_eq!(lighten(c, 0.), c);
            prop_assert_eq!(darken(c, 0.), c);
        }

        #[test]
        fn saturate_at_one(c in color()) {
            prop_assert!(close(lighten(c, 1.), WHITE));
            prop_assert_eq!(darken(c, 1.), BLACK);
        }

        #[test]
        fn shades_are_ordered(c in color()) {
            let s = generate_shades(c);
            prop_assert_eq!(s[ShadeStep::S500], c);
            let keys: Vec<u16> = s.iter().map(|(k, _)| k.value()).collect();
            prop_assert_eq!(keys, vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900]);
            for w in s.colors().windows(2) {
                prop_assert!(w[0].r >= w[1].r && w[0].g >= w[1].g
                             && w[0].b >= w[1].b);
            }
        }
    }
}
