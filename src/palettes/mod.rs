//! Curated transition tables.

use lazy_static::lazy_static;
use crate::error::{Error, Result};

pub(crate) mod ty;
use ty::{Preset, PresetKind::*, Transition};

const fn shade(name: &'static str, start: (u8, u8, u8), end: (u8, u8, u8))
               -> Preset {
    Preset { name, kind: Shade, transition: Transition::rgb(start, end) }
}

const fn two_color(name: &'static str,
                   start: (u8, u8, u8), end: (u8, u8, u8)) -> Preset {
    Preset { name, kind: TwoColor, transition: Transition::rgb(start, end) }
}

lazy_static! {
    /// The color wheel: a closed chain of hues starting and ending on
    /// azure (0, 127, 255).
    pub static ref DEFAULT_WHEEL: Vec<Transition> = vec![
        Transition::rgb((0, 127, 255), (0, 0, 255)), // azure → blue
        Transition::rgb((0, 0, 255), (39, 0, 51)), // blue → indigo
        Transition::rgb((39, 0, 51), (139, 0, 139)), // indigo → dark magenta
        Transition::rgb((139, 0, 139), (199, 21, 133)), // → medium violet red
        Transition::rgb((199, 21, 133), (255, 105, 180)), // → hot pink
        Transition::rgb((255, 105, 180), (255, 20, 147)), // → deep pink
        Transition::rgb((255, 20, 147), (255, 69, 0)), // → red-orange
        Transition::rgb((255, 69, 0), (255, 140, 0)), // → dark orange
        Transition::rgb((255, 140, 0), (255, 255, 0)), // → yellow
        Transition::rgb((255, 255, 0), (154, 205, 50)), // → yellow-green
        Transition::rgb((154, 205, 50), (0, 255, 0)), // → green
        Transition::rgb((0, 255, 0), (0, 127, 255)), // green → azure
    ];

    /// Single-color shades, light to dark.
    pub static ref SHADES: Vec<Preset> = vec![
        shade("green", (0, 255, 0), (0, 128, 0)),
        shade("yellow", (255, 255, 0), (255, 215, 0)),
        shade("red", (255, 0, 0), (139, 0, 0)),
        shade("blue", (0, 0, 255), (0, 0, 139)),
        shade("white", (255, 255, 255), (211, 211, 211)),
        shade("grey", (128, 128, 128), (169, 169, 169)),
        shade("orange", (255, 165, 0), (255, 140, 0)),
        shade("purple", (128, 0, 128), (75, 0, 130)),
        shade("pink", (255, 192, 203), (255, 105, 180)),
        shade("brown", (165, 42, 42), (139, 69, 19)),
        shade("cyan", (0, 255, 255), (0, 139, 139)),
        shade("magenta", (255, 0, 255), (139, 0, 139)),
    ];

    /// Blends between two named colors.
    pub static ref TWO_COLORS: Vec<Preset> = vec![
        two_color("green_to_yellow", (0, 255, 0), (255, 255, 0)),
        two_color("red_to_blue", (255, 0, 0), (0, 0, 255)),
        two_color("blue_to_purple", (0, 0, 255), (128, 0, 128)),
        two_color("white_to_grey", (255, 255, 255), (128, 128, 128)),
        two_color("grey_to_black", (128, 128, 128), (0, 0, 0)),
        two_color("orange_to_red", (255, 165, 0), (255, 0, 0)),
        two_color("pink_to_red", (255, 192, 203), (255, 0, 0)),
        two_color("brown_to_yellow", (165, 42, 42), (255, 255, 0)),
        two_color("cyan_to_blue", (0, 255, 255), (0, 0, 255)),
        two_color("magenta_to_red", (255, 0, 255), (255, 0, 0)),
        two_color("purple_to_magenta", (128, 0, 128), (255, 0, 255)),
        two_color("yellow_to_orange", (255, 255, 0), (255, 165, 0)),
    ];
}

/// All presets, shades first then two-color blends.
pub fn presets() -> impl Iterator<Item = &'static Preset> {
    SHADES.iter().chain(TWO_COLORS.iter())
}

/// Names of all presets, in the order of [`presets`].
pub fn preset_names() -> Vec<&'static str> {
    presets().map(|p| p.name).collect()
}

/// Return the transition registered under `name`, searching shades
/// before two-color blends.
pub fn lookup_preset(name: &str) -> Result<Transition> {
    presets().find(|p| p.name == name)
        .map(|p| p.transition)
        .ok_or_else(|| Error::UnknownGradientName(name.to_string()))
}
