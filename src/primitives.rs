//! Named primitive colors derived from the brand seeds.

use std::fmt;
use crate::{Color, RGBColor, ShadeScale, ShadeStep, BLACK, WHITE, parse_hex};
use crate::semantic::{Mode, Theme};
use crate::tables::{self, ty::SemanticBinding};

/// The two user-supplied brand colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seeds {
    pub primary: Color,
    pub secondary: Color,
}

impl Seeds {
    /// Parse both seeds; malformed strings give black (see [`parse_hex`]).
    pub fn from_hex(primary: &str, secondary: &str) -> Self {
        Seeds { primary: parse_hex(primary), secondary: parse_hex(secondary) }
    }
}

impl Default for Seeds {
    /// Material blue `#2196F3` and purple `#9C27B0`.
    fn default() -> Self { Seeds::from_hex("#2196F3", "#9C27B0") }
}

/// A family of primitives sharing one shade scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Gray,
}

impl Group {
    /// All groups, in export order.
    pub const ALL: [Group; 6] = [Group::Primary, Group::Secondary,
                                 Group::Success, Group::Warning,
                                 Group::Danger, Group::Gray];

    /// The prefix of the group's primitive names.
    pub fn name(self) -> &'static str {
        match self {
            Group::Primary => "primary",
            Group::Secondary => "secondary",
            Group::Success => "success",
            Group::Warning => "warning",
            Group::Danger => "danger",
            Group::Gray => "gray",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.name() == name)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The primitive collection: a shade scale per [`Group`] plus `white`
/// and `black`.
///
/// Primitive names are `group/step` (e.g. `"danger/700"`), `"white"`
/// or `"black"`.  Only the primary and secondary scales depend on the
/// seeds; the others are fixed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Primitives {
    seeds: Seeds,
    primary: ShadeScale<Color>,
    secondary: ShadeScale<Color>,
}

impl Primitives {
    /// Derive the primary and secondary scales from `seeds`.
    pub fn new(seeds: Seeds) -> Self {
        Primitives { seeds,
                     primary: seeds.primary.shades(),
                     secondary: seeds.secondary.shades() }
    }

    /// Shortcut for `Primitives::new(Seeds::from_hex(primary, secondary))`.
    pub fn from_hex(primary: &str, secondary: &str) -> Self {
        Self::new(Seeds::from_hex(primary, secondary))
    }

    /// The seeds the collection was built from.
    #[inline]
    pub fn seeds(&self) -> Seeds { self.seeds }

    /// The shade scale of `group`.
    pub fn scale(&self, group: Group) -> &ShadeScale<Color> {
        match group {
            Group::Primary => &self.primary,
            Group::Secondary => &self.secondary,
            Group::Success => &tables::SUCCESS_SHADES,
            Group::Warning => &tables::WARNING_SHADES,
            Group::Danger => &tables::DANGER_SHADES,
            Group::Gray => &tables::GRAY,
        }
    }

    /// Look up a primitive by name.
    ///
    /// ```
    /// use design_tokens::{Primitives, WHITE};
    /// let p = Primitives::from_hex("#2196F3", "#9C27B0");
    /// assert_eq!(p.get("white"), Some(WHITE));
    /// assert!(p.get("primary/450").is_none());
    /// ```
    pub fn get(&self, name: &str) -> Option<Color> {
        match name {
            "white" => Some(WHITE),
            "black" => Some(BLACK),
            _ => {
                let (group, step) = name.split_once('/')?;
                let group = Group::from_name(group)?;
                self.scale(group).get(step.parse().ok()?)
            }
        }
    }

    /// Number of primitives (62).
    pub fn len(&self) -> usize {
        Group::ALL.len() * ShadeStep::ALL.len() + 2
    }

    /// Always `false`: `white` and `black` exist whatever the seeds.
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// All primitives with their names: the groups in [`Group::ALL`]
    /// order, lightest first, then `white` and `black`.
    pub fn iter(&self) -> impl Iterator<Item = (String, Color)> + '_ {
        Group::ALL.into_iter()
            .flat_map(move |g| self.scale(g).iter()
                      .map(move |(step, c)| (format!("{g}/{step}"), c)))
            .chain([("white".to_string(), WHITE), ("black".to_string(), BLACK)])
    }

    /// View the collection through `mode` to resolve semantic roles.
    #[inline]
    pub fn theme(&self, mode: Mode) -> Theme<'_> { Theme::new(self, mode) }

    /// Bindings of the semantic table referring to a primitive that
    /// does not exist, in either mode.  Such roles never resolve.
    pub fn unresolved(&self) -> Vec<&'static SemanticBinding> {
        tables::SEMANTIC.iter()
            .filter(|b| self.get(b.light).is_none() || self.get(b.dark).is_none())
            .collect()
    }
}

impl Default for Primitives {
    fn default() -> Self { Primitives::new(Seeds::default()) }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{darken, lighten};

    #[test]
    fn names_resolve() {
        let p = Primitives::from_hex("#2196F3", "#9C27B0");
        let primary = parse_hex("#2196F3");
        assert_eq!(p.get("primary/500"), Some(primary));
        assert_eq!(p.get("primary/900"), Some(darken(primary, 0.55)));
        assert_eq!(p.get("secondary/500"), Some(parse_hex("#9C27B0")));
        assert_eq!(p.get("success/500"), Some(tables::SUCCESS));
        assert_eq!(p.get("danger/50"), Some(lighten(tables::DANGER, 0.95)));
        assert_eq!(p.get("gray/300"), Some(Color::new(0.83, 0.83, 0.83)));
        assert_eq!(p.get("black"), Some(BLACK));
    }

    #[test]
    fn bad_names() {
        let p = Primitives::default();
        for name in ["", "primary", "primary/", "primary/55", "teal/500",
                     "gray/500/1", "White"] {
            assert_eq!(p.get(name), None, "{name:?}");
        }
    }

    #[test]
    fn gray_is_not_derived() {
        let a = Primitives::from_hex("#000000", "#000000");
        let b = Primitives::from_hex("#FFFFFF", "#FF0000");
        assert_eq!(a.scale(Group::Gray), b.scale(Group::Gray));
        assert_eq!(a.scale(Group::Warning), b.scale(Group::Warning));
        assert_ne!(a.scale(Group::Primary), b.scale(Group::Primary));
    }

    #[test]
    fn malformed_seed_is_black() {
        let p = Primitives::from_hex("not a color", "#9C27B0");
        assert_eq!(p.seeds().primary, BLACK);
        assert_eq!(p.get("primary/900"), Some(BLACK));
        assert_eq!(p.get("primary/50"), Some(Color::new(0.95, 0.95, 0.95)));
    }

    #[test]
    fn iteration_order() {
        let p = Primitives::default();
        let all: Vec<_> = p.iter().collect();
        assert_eq!(all.len(), p.len());
        assert_eq!(all.len(), 62);
        assert!(!p.is_empty());
        assert_eq!(all[0].0, "primary/50");
        assert_eq!(all[10].0, "secondary/50");
        assert_eq!(all[59].0, "gray/900");
        assert_eq!(all[60], ("white".to_string(), WHITE));
        for (name, c) in all {
            assert_eq!(p.get(&name), Some(c), "{name}");
        }
    }

    #[test]
    fn builtin_bindings_resolve() {
        assert!(Primitives::default().unresolved().is_empty());
    }
}
