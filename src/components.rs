//! Component variant tables.
//!
//! Each component is a grid of variant axes (type × state × size for
//! [`Button`], type × size for [`Badge`], style × size for [`Card`]).
//! A variant maps to layout metrics and to [`Paint`]s, i.e. semantic
//! roles paired with the color used when a role is missing.  Fallback
//! colors derived from the brand take the primary seed as argument.
//!
//! Some paints name roles that are not part of the semantic table
//! (`bg/brand-subtle`, `bg/tertiary`); they always render with their
//! fallback.
//!
//! ```
//! use design_tokens::{Primitives, Mode};
//! use design_tokens::components::{Button, ButtonType, ButtonState, Size};
//! let p = Primitives::default();
//! let b = Button { typ: ButtonType::Primary, state: ButtonState::Hover, size: Size::Md };
//! assert_eq!(b.name(), "Type=Primary, State=Hover, Size=MD");
//! let colors = b.style(p.seeds().primary).resolve(&p.theme(Mode::Light));
//! assert_eq!(Some(colors.text), p.get("white"));
//! ```

use std::fmt;
use rgb::RGB;
use crate::{Color, RGBColor, Theme, Paint, WHITE};

/// The size axis shared by all components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Size {
    Sm,
    Md,
    Lg,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Sm, Size::Md, Size::Lg];
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Size::Sm => "SM", Size::Md => "MD", Size::Lg => "LG" })
    }
}

macro_rules! axis {
    ($(#[$doc:meta])* $name:ident { $($v:ident),* }) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name { $($v),* }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$v),*];
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self { $($name::$v => f.write_str(stringify!($v))),* }
            }
        }
    };
}

axis!(
    /// Visual emphasis of a [`Button`].
    ButtonType { Primary, Secondary, Ghost });
axis!(
    /// Interaction state of a [`Button`].
    ButtonState { Default, Hover, Pressed, Disabled });
axis!(
    /// Color family of a [`Badge`].
    BadgeType { Primary, Success, Warning, Danger, Gray });
axis!(
    /// Surface treatment of a [`Card`].
    CardStyle { Default, Outlined, Elevated });

const fn srgb(r: f64, g: f64, b: f64) -> Color { RGB { r, g, b } }

const DISABLED_TEXT: Color = srgb(0.64, 0.64, 0.64);

/// Paints of a component variant.  `None` means no fill (or no
/// stroke).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComponentStyle {
    pub background: Option<Paint>,
    pub text: Paint,
    pub border: Option<Paint>,
}

/// [`ComponentStyle`] resolved to colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub background: Option<Color>,
    pub text: Color,
    pub border: Option<Color>,
}

impl ComponentStyle {
    /// Resolve every paint against `theme`.
    pub fn resolve(&self, theme: &Theme<'_>) -> ResolvedStyle {
        ResolvedStyle {
            background: self.background.map(|p| theme.paint(&p)),
            text: theme.paint(&self.text),
            border: self.border.map(|p| theme.paint(&p)),
        }
    }
}

/// Pixel metrics of a button or badge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub height: f64,
    pub padding_x: f64,
    pub font_size: f64,
    pub corner_radius: f64,
}


/// A button variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Button {
    pub typ: ButtonType,
    pub state: ButtonState,
    pub size: Size,
}

impl Button {
    pub const CORNER_RADIUS: f64 = 8.;

    /// All 36 variants, type-major then state then size.
    pub fn variants() -> impl Iterator<Item = Button> {
        ButtonType::ALL.iter().flat_map(|&typ| {
            ButtonState::ALL.iter().flat_map(move |&state| {
                Size::ALL.into_iter().map(move |size| Button { typ, state, size })
            })
        })
    }

    /// Variant name, `Type=…, State=…, Size=…`.
    pub fn name(&self) -> String {
        format!("Type={}, State={}, Size={}", self.typ, self.state, self.size)
    }

    /// Height, horizontal padding and label size of the variant.
    pub fn metrics(&self) -> Metrics {
        let (height, padding_x, font_size) = match self.size {
            Size::Sm => (32., 12., 12.),
            Size::Md => (40., 16., 14.),
            Size::Lg => (48., 20., 16.),
        };
        Metrics { height, padding_x, font_size,
                  corner_radius: Self::CORNER_RADIUS }
    }

    /// Paints of the variant; the size does not affect colors.
    pub fn style(&self, primary: Color) -> ComponentStyle {
        use ButtonState::*;
        let brand_text = Paint::new("text/brand", primary);
        let brand_border = Some(Paint::new("border/brand", primary));
        let subtle = |amount| Some(Paint::new("bg/brand-subtle",
                                              primary.lighten(amount)));
        match (self.typ, self.state) {
            (ButtonType::Primary, state) => {
                let background = match state {
                    Default => Paint::new("interactive/primary", primary),
                    Hover => Paint::new("interactive/primary-hover",
                                        primary.darken(0.1)),
                    Pressed => Paint::new("interactive/primary-pressed",
                                          primary.darken(0.2)),
                    Disabled => Paint::new("interactive/primary-disabled",
                                           primary.lighten(0.5)),
                };
                ComponentStyle { background: Some(background),
                                 text: Paint::new("text/on-color", WHITE),
                                 border: None }
            }
            (ButtonType::Secondary, Default) => ComponentStyle {
                background: Some(Paint::new("bg/primary", WHITE)),
                text: brand_text, border: brand_border },
            (ButtonType::Secondary, Hover) => ComponentStyle {
                background: subtle(0.9), text: brand_text, border: brand_border },
            (ButtonType::Secondary, Pressed) => ComponentStyle {
                background: subtle(0.85), text: brand_text, border: brand_border },
            (ButtonType::Secondary, Disabled) => ComponentStyle {
                background: Some(Paint::new("bg/tertiary", srgb(0.96, 0.96, 0.96))),
                text: Paint::new("text/disabled", DISABLED_TEXT),
                border: Some(Paint::new("border/default", srgb(0.83, 0.83, 0.83))) },
            (ButtonType::Ghost, Default) => ComponentStyle {
                background: None, text: brand_text, border: None },
            (ButtonType::Ghost, Hover) => ComponentStyle {
                background: subtle(0.9), text: brand_text, border: None },
            (ButtonType::Ghost, Pressed) => ComponentStyle {
                background: subtle(0.85), text: brand_text, border: None },
            (ButtonType::Ghost, Disabled) => ComponentStyle {
                background: None,
                text: Paint::new("text/disabled", DISABLED_TEXT),
                border: None },
        }
    }
}


/// A badge variant.  Badges are pill shaped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Badge {
    pub typ: BadgeType,
    pub size: Size,
}

impl Badge {
    /// All 15 variants, type-major.
    pub fn variants() -> impl Iterator<Item = Badge> {
        BadgeType::ALL.iter().flat_map(|&typ| {
            Size::ALL.into_iter().map(move |size| Badge { typ, size })
        })
    }

    /// Variant name, `Type=…, Size=…`.
    pub fn name(&self) -> String {
        format!("Type={}, Size={}", self.typ, self.size)
    }

    /// Metrics of the variant; the corner radius is half the height.
    pub fn metrics(&self) -> Metrics {
        let (height, padding_x, font_size) = match self.size {
            Size::Sm => (20., 8., 11.),
            Size::Md => (24., 10., 12.),
            Size::Lg => (28., 12., 13.),
        };
        Metrics { height, padding_x, font_size, corner_radius: height / 2. }
    }

    /// Background and text paints; badges have no border.
    pub fn style(&self, primary: Color) -> ComponentStyle {
        let (bg, text) = match self.typ {
            BadgeType::Primary =>
                (Paint::new("bg/brand", primary.lighten(0.9)),
                 Paint::new("text/brand", primary)),
            BadgeType::Success =>
                (Paint::new("bg/success", srgb(0.9, 0.95, 0.9)),
                 Paint::new("text/success", srgb(0.13, 0.55, 0.13))),
            BadgeType::Warning =>
                (Paint::new("bg/warning", srgb(1., 0.95, 0.85)),
                 Paint::new("text/warning", srgb(0.7, 0.5, 0.05))),
            BadgeType::Danger =>
                (Paint::new("bg/danger", srgb(1., 0.9, 0.9)),
                 Paint::new("text/danger", srgb(0.7, 0.15, 0.15))),
            BadgeType::Gray =>
                (Paint::new("bg/secondary", srgb(0.95, 0.95, 0.95)),
                 Paint::new("text/secondary", srgb(0.4, 0.4, 0.4))),
        };
        ComponentStyle { background: Some(bg), text, border: None }
    }
}


/// A drop shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub alpha: f64,
    pub offset: (f64, f64),
    pub radius: f64,
    pub spread: f64,
}

/// Layout of a card variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardMetrics {
    pub padding: f64,
    pub gap: f64,
    pub width: f64,
    pub corner_radius: f64,
    pub title_font_size: f64,
    pub body_font_size: f64,
}

/// Paints of a card variant.  The card's own surface uses
/// [`ComponentStyle`]; title and body text are painted separately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardStyleSheet {
    pub surface: ComponentStyle,
    pub title: Paint,
    pub shadow: Option<Shadow>,
}

/// A card variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub style: CardStyle,
    pub size: Size,
}

impl Card {
    pub const CORNER_RADIUS: f64 = 12.;

    /// All 9 variants, style-major.
    pub fn variants() -> impl Iterator<Item = Card> {
        CardStyle::ALL.iter().flat_map(|&style| {
            Size::ALL.into_iter().map(move |size| Card { style, size })
        })
    }

    /// Variant name, `Style=…, Size=…`.
    pub fn name(&self) -> String {
        format!("Style={}, Size={}", self.style, self.size)
    }

    /// Padding, gap, width and text sizes of the variant.
    pub fn metrics(&self) -> CardMetrics {
        let (padding, gap, width, title_font_size, body_font_size) = match self.size {
            Size::Sm => (16., 12., 280., 14., 12.),
            Size::Md => (20., 16., 320., 16., 14.),
            Size::Lg => (24., 20., 380., 18., 14.),
        };
        CardMetrics { padding, gap, width, corner_radius: Self::CORNER_RADIUS,
                      title_font_size, body_font_size }
    }

    /// Card paints do not depend on the brand colors.  The body text
    /// is the surface's `text` paint.
    pub fn style(&self) -> CardStyleSheet {
        let body = Paint::new("text/secondary", srgb(0.4, 0.4, 0.4));
        let (background, border, shadow) = match self.style {
            CardStyle::Default =>
                (Paint::new("bg/secondary", srgb(0.98, 0.98, 0.98)), None, None),
            CardStyle::Outlined =>
                (Paint::new("bg/primary", WHITE),
                 Some(Paint::new("border/default", srgb(0.9, 0.9, 0.9))), None),
            CardStyle::Elevated =>
                (Paint::new("bg/primary", WHITE), None,
                 Some(Shadow { color: crate::BLACK, alpha: 0.1,
                               offset: (0., 4.), radius: 12., spread: 0. })),
        };
        CardStyleSheet {
            surface: ComponentStyle { background: Some(background), text: body, border },
            title: Paint::new("text/primary", srgb(0.07, 0.07, 0.07)),
            shadow,
        }
    }
}
