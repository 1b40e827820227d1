// Fixed data of the design system.

use std::collections::HashMap;
use lazy_static::lazy_static;
use rgb::RGB;
use crate::{Color, RGBColor, ShadeScale};

pub(crate) mod ty;
use ty::*;

const fn gray(x: f64) -> Color { RGB { r: x, g: x, b: x } }

pub(crate) const SUCCESS: Color = RGB { r: 0.13, g: 0.55, b: 0.13 };
pub(crate) const WARNING: Color = RGB { r: 0.95, g: 0.65, b: 0.05 };
pub(crate) const DANGER: Color = RGB { r: 0.86, g: 0.20, b: 0.20 };

/// Hand-tuned, not derived from a seed.
pub(crate) const GRAY: ShadeScale<Color> = ShadeScale::from_colors([
    gray(0.98), gray(0.96), gray(0.90), gray(0.83), gray(0.64),
    gray(0.45), gray(0.32), gray(0.25), gray(0.15), gray(0.07),
]);

lazy_static! {
    pub(crate) static ref SUCCESS_SHADES: ShadeScale<Color> = SUCCESS.shades();
    pub(crate) static ref WARNING_SHADES: ShadeScale<Color> = WARNING.shades();
    pub(crate) static ref DANGER_SHADES: ShadeScale<Color> = DANGER.shades();
}

macro_rules! bindings {
    ($($role:literal => $light:literal, $dark:literal;)*) => {
        vec![$(SemanticBinding { role: $role, light: $light, dark: $dark },)*]
    };
}

lazy_static! {
    // Backgrounds are light, borders mid-tone and text dark in light mode.
    pub(crate) static ref SEMANTIC: Vec<SemanticBinding> = bindings! {
        "bg/primary" => "white", "gray/900";
        "bg/secondary" => "gray/50", "gray/800";
        "bg/brand" => "primary/50", "primary/900";
        "bg/brand-solid" => "primary/500", "primary/500";
        "bg/success" => "success/50", "success/900";
        "bg/success-solid" => "success/500", "success/500";
        "bg/warning" => "warning/50", "warning/900";
        "bg/warning-solid" => "warning/500", "warning/500";
        "bg/danger" => "danger/50", "danger/900";
        "bg/danger-solid" => "danger/500", "danger/500";
        "text/primary" => "gray/900", "white";
        "text/secondary" => "gray/600", "gray/400";
        "text/disabled" => "gray/400", "gray/600";
        "text/on-color" => "white", "white";
        "text/brand" => "primary/700", "primary/300";
        "text/success" => "success/700", "success/300";
        "text/warning" => "warning/700", "warning/300";
        "text/danger" => "danger/700", "danger/300";
        "border/default" => "gray/200", "gray/700";
        "border/strong" => "gray/300", "gray/600";
        "border/brand" => "primary/500", "primary/500";
        "border/success" => "success/500", "success/500";
        "border/warning" => "warning/500", "warning/500";
        "border/danger" => "danger/500", "danger/500";
        "interactive/primary" => "primary/500", "primary/500";
        "interactive/primary-hover" => "primary/600", "primary/400";
        "interactive/primary-pressed" => "primary/700", "primary/300";
        "interactive/primary-disabled" => "primary/300", "primary/700";
        "interactive/secondary" => "gray/100", "gray/800";
        "interactive/secondary-hover" => "gray/200", "gray/700";
    };

    pub(crate) static ref SEMANTIC_BY_ROLE: HashMap<&'static str, &'static SemanticBinding> =
        SEMANTIC.iter().map(|b| (b.role, b)).collect();
}

macro_rules! numbers {
    ($($name:literal = $value:expr),* $(,)?) => {
        vec![$(NumberToken { name: $name, value: $value as f64 },)*]
    };
}

lazy_static! {
    pub(crate) static ref SPACING: Vec<NumberToken> = numbers![
        "space/0" = 0, "space/05" = 2, "space/1" = 4, "space/15" = 6,
        "space/2" = 8, "space/25" = 10, "space/3" = 12, "space/4" = 16,
        "space/5" = 20, "space/6" = 24, "space/8" = 32, "space/10" = 40,
        "space/12" = 48, "space/16" = 64, "space/20" = 80, "space/24" = 96,
    ];

    pub(crate) static ref RADIUS: Vec<NumberToken> = numbers![
        "radius/none" = 0, "radius/sm" = 4, "radius/md" = 8,
        "radius/lg" = 12, "radius/xl" = 16, "radius/2xl" = 24,
        "radius/full" = 9999,
    ];

    pub(crate) static ref FONT_SIZE: Vec<NumberToken> = numbers![
        "font-size/xs" = 12, "font-size/sm" = 14, "font-size/md" = 16,
        "font-size/lg" = 18, "font-size/xl" = 20, "font-size/2xl" = 24,
        "font-size/3xl" = 30, "font-size/4xl" = 36, "font-size/5xl" = 48,
        "font-size/6xl" = 60,
    ];

    pub(crate) static ref LINE_HEIGHT: Vec<NumberToken> = numbers![
        "line-height/none" = 1, "line-height/tight" = 1.25,
        "line-height/snug" = 1.375, "line-height/normal" = 1.5,
        "line-height/relaxed" = 1.625, "line-height/loose" = 2,
    ];

    pub(crate) static ref LETTER_SPACING: Vec<NumberToken> = numbers![
        "letter-spacing/tighter" = -0.05, "letter-spacing/tight" = -0.025,
        "letter-spacing/normal" = 0, "letter-spacing/wide" = 0.025,
        "letter-spacing/wider" = 0.05,
    ];

    pub(crate) static ref NUMBER_BY_NAME: HashMap<&'static str, f64> =
        [&*SPACING, &*RADIUS, &*FONT_SIZE, &*LINE_HEIGHT, &*LETTER_SPACING]
        .into_iter().flatten().map(|t| (t.name, t.value)).collect();
}

macro_rules! text_styles {
    ($($name:literal: $size:literal, $weight:ident, $lh:literal;)*) => {
        vec![$(TextStyle { name: $name, size: $size as f64,
                           weight: FontWeight::$weight,
                           line_height: $lh as f64 },)*]
    };
}

lazy_static! {
    pub(crate) static ref TEXT_STYLES: Vec<TextStyle> = text_styles! {
        "Title / XL": 48, Bold, 56;
        "Title / LG": 40, Bold, 48;
        "Title / MD": 32, SemiBold, 40;
        "Title / SM": 24, SemiBold, 32;
        "Heading / H1": 28, SemiBold, 36;
        "Heading / H2": 24, SemiBold, 32;
        "Heading / H3": 20, Medium, 28;
        "Heading / H4": 18, Medium, 26;
        "Heading / H5": 16, Medium, 24;
        "Heading / H6": 14, Medium, 20;
        "Body / LG": 18, Regular, 28;
        "Body / MD": 16, Regular, 24;
        "Body / SM": 14, Regular, 20;
        "Body / XS": 12, Regular, 16;
    };
}
