//! Semantic color roles and their light/dark resolution.

use std::fmt;
use crate::{Color, Primitives};
use crate::tables::{self, ty::SemanticBinding};

/// Color mode of a [`Theme`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Mode::Light => "Light", Mode::Dark => "Dark" })
    }
}

impl SemanticBinding {
    /// The primitive name the role refers to in `mode`.
    #[inline]
    pub fn reference(&self, mode: Mode) -> &'static str {
        match mode {
            Mode::Light => self.light,
            Mode::Dark => self.dark,
        }
    }
}

/// The built-in semantic table (`bg/*`, `text/*`, `border/*`,
/// `interactive/*`).
pub fn bindings() -> &'static [SemanticBinding] {
    &tables::SEMANTIC
}

/// The binding of `role`, if the role exists.
pub fn binding(role: &str) -> Option<&'static SemanticBinding> {
    tables::SEMANTIC_BY_ROLE.get(role).copied()
}

/// A color reference to a semantic role, with the color to use when
/// the role does not resolve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub role: &'static str,
    pub fallback: Color,
}

impl Paint {
    #[inline]
    pub const fn new(role: &'static str, fallback: Color) -> Self {
        Paint { role, fallback }
    }
}

/// [`Primitives`] seen through a [`Mode`].
///
/// ```
/// use design_tokens::{Primitives, Mode, WHITE};
/// let p = Primitives::default();
/// assert_eq!(p.theme(Mode::Dark).role("text/primary"), Some(WHITE));
/// assert_eq!(p.theme(Mode::Light).role("text/primary"), p.get("gray/900"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Theme<'a> {
    primitives: &'a Primitives,
    mode: Mode,
}

impl<'a> Theme<'a> {
    pub(crate) fn new(primitives: &'a Primitives, mode: Mode) -> Self {
        Theme { primitives, mode }
    }

    /// The mode roles are resolved for.
    #[inline]
    pub fn mode(&self) -> Mode { self.mode }

    /// The collection the theme reads from.
    #[inline]
    pub fn primitives(&self) -> &'a Primitives { self.primitives }

    /// Resolve `role` for the theme's mode.  Returns `None` for unknown
    /// roles.
    pub fn role(&self, role: &str) -> Option<Color> {
        let b = binding(role)?;
        self.primitives.get(b.reference(self.mode))
    }

    /// The color of `paint`: its role if it resolves, its fallback
    /// otherwise.
    pub fn paint(&self, paint: &Paint) -> Color {
        match self.role(paint.role) {
            Some(c) => c,
            None => {
                tracing::debug!(role = paint.role, mode = %self.mode,
                                "role does not resolve, using fallback");
                paint.fallback
            }
        }
    }

    /// All roles of the semantic table that resolve, with their colors.
    pub fn roles(&self) -> impl Iterator<Item = (&'static str, Color)> + '_ {
        bindings().iter()
            .filter_map(move |b| Some((b.role, self.role(b.role)?)))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_hex, WHITE};
    use tracing_test::traced_test;

    #[test]
    fn table_shape() {
        assert_eq!(bindings().len(), 30);
        let b = binding("text/primary").unwrap();
        assert_eq!((b.light, b.dark), ("gray/900", "white"));
        assert_eq!(b.reference(Mode::Dark), "white");
        assert!(binding("bg/brand-subtle").is_none());
    }

    #[test]
    fn roles_are_unique() {
        let mut roles: Vec<_> = bindings().iter().map(|b| b.role).collect();
        roles.sort_unstable();
        roles.dedup();
        assert_eq!(roles.len(), bindings().len());
    }

    #[test]
    fn modes_select_branch() {
        let p = Primitives::from_hex("#2196F3", "#9C27B0");
        let light = p.theme(Mode::Light);
        let dark = p.theme(Mode::Dark);
        assert_eq!((light.mode(), dark.mode()), (Mode::Light, Mode::Dark));
        assert_eq!(dark.primitives(), &p);
        assert_eq!(light.role("bg/primary"), Some(WHITE));
        assert_eq!(dark.role("bg/primary"), p.get("gray/900"));
        assert_eq!(light.role("text/brand"), p.get("primary/700"));
        assert_eq!(dark.role("text/brand"), p.get("primary/300"));
        assert_eq!(light.role("bg/brand-solid"), Some(parse_hex("#2196F3")));
        assert_eq!(light.role("bg/brand-solid"), dark.role("bg/brand-solid"));
        assert_eq!(light.role("nope"), None);
    }

    #[test]
    fn every_role_resolves_in_both_modes() {
        let p = Primitives::default();
        for mode in Mode::ALL {
            assert_eq!(p.theme(mode).roles().count(), 30, "{mode}");
        }
    }

    #[test]
    #[traced_test]
    fn paint_falls_back() {
        let p = Primitives::default();
        let theme = p.theme(Mode::Light);
        let red = Color::new(1., 0., 0.);
        assert_eq!(theme.paint(&Paint::new("text/on-color", red)), WHITE);
        assert_eq!(theme.paint(&Paint::new("bg/tertiary", red)), red);
        assert!(logs_contain("using fallback"));
    }
}
