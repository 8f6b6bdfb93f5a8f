//! Smoothly color-cycling progress bars for truecolor terminals.
//!
//! - [`build_gradient`] interpolates between two colors;
//! - [`Palette`] chains the gradients of a list of [`Transition`]s
//!   (see [`struct@DEFAULT_WHEEL`] and the [presets](presets));
//! - [`sample_color`] picks the color of a palette for a given
//!   progress through a periodic function ([`sine`]).
//!
//! The [`bar`] module plugs these into a progress bar: a
//! [`RainbowStyle`] is a drop-in replacement for the uncolored
//! [`PlainStyle`].  Whether colors are emitted at all is controlled by
//! a [`ColorSwitch`] shared by the bars that should obey it.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use log::{debug, trace};
pub use rgb::RGB8;

mod error;
pub use error::{Error, Result};

mod sine;
pub use sine::{approximate_sine, sine, DEFAULT_TERMS};

mod palettes;
pub use palettes::ty::{Preset, PresetKind, Transition};
pub use palettes::{lookup_preset, preset_names, presets,
                   DEFAULT_WHEEL, SHADES, TWO_COLORS};

pub mod config;
pub use config::{PhaseSource, RainbowConfig};

pub mod bar;
pub use bar::{BarStyle, PlainStyle, ProgressBar, RainbowStyle, StyleFactory};

/// Escape sequence restoring the terminal default colors.
pub const RESET: &str = "\x1b[0m";

/// Color every gradient collapses to when colors are disabled.
pub const GREY: RGB8 = RGB8 { r: 128, g: 128, b: 128 };

/// A terminal foreground color, or the absence of one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorCode {
    /// 24-bit foreground color `ESC[38;2;R;G;Bm`.
    Rgb(RGB8),
    /// No escape sequence at all: the renderer keeps its default color.
    None,
}

impl ColorCode {
    /// Return the color, if any.
    pub fn rgb(&self) -> Option<RGB8> {
        match self {
            ColorCode::Rgb(c) => Some(*c),
            ColorCode::None => None,
        }
    }
}

impl From<RGB8> for ColorCode {
    fn from(c: RGB8) -> Self { ColorCode::Rgb(c) }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorCode::Rgb(c) => write!(f, "\x1b[38;2;{};{};{}m", c.r, c.g, c.b),
            ColorCode::None => Ok(()),
        }
    }
}

/// Whether color output is produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Enabled,
    /// Gradients are plain grey and sampling yields [`ColorCode::None`].
    Disabled,
}

/// A shared on/off switch for color output.
///
/// Clones refer to the same switch: disabling it is seen by every
/// holder on its next read.  The switch only affects cosmetics, so
/// reads and writes are relaxed.
#[derive(Clone, Debug, Default)]
pub struct ColorSwitch {
    disabled: Arc<AtomicBool>,
}

impl ColorSwitch {
    /// A new switch, initially enabled.
    pub fn new() -> Self { Self::default() }

    pub fn disable(&self) { self.set(ColorMode::Disabled) }

    pub fn enable(&self) { self.set(ColorMode::Enabled) }

    pub fn set(&self, mode: ColorMode) {
        self.disabled.store(mode == ColorMode::Disabled, Ordering::Relaxed)
    }

    /// Current mode.  Never cache the result: the switch may be flipped
    /// by another holder at any time.
    pub fn mode(&self) -> ColorMode {
        if self.disabled.load(Ordering::Relaxed) { ColorMode::Disabled }
        else { ColorMode::Enabled }
    }

    pub fn is_enabled(&self) -> bool { self.mode() == ColorMode::Enabled }
}

/// Return `steps` colors going linearly from `start` to `end` (both
/// included).  Channels are truncated, not rounded, so a blend is
/// biased towards the lower channel value.
///
/// When `mode` is [`ColorMode::Disabled`], no interpolation takes place
/// and `steps` copies of [`GREY`] are returned.
///
/// # Example
///
/// ```
/// use rainbow_bar::{build_gradient, ColorMode, RGB8};
/// let g = build_gradient(RGB8::new(0, 0, 0), RGB8::new(255, 255, 255), 3,
///                        ColorMode::Enabled).unwrap();
/// assert_eq!(g[1], RGB8::new(127, 127, 127));
/// ```
pub fn build_gradient(start: RGB8, end: RGB8, steps: usize, mode: ColorMode)
                      -> Result<Vec<RGB8>> {
    if steps < 2 { return Err(Error::InvalidStepCount(steps)) }
    if mode == ColorMode::Disabled { return Ok(vec![GREY; steps]) }
    let last = (steps - 1) as f64;
    let lerp = |a: u8, b: u8, t: f64| -> u8 {
        // `as` truncates towards zero.  The result lies between `a` and
        // `b`, so it fits in a `u8`.
        (a as f64 + t * (b as f64 - a as f64)) as u8
    };
    Ok((0 .. steps).map(|i| {
        let t = i as f64 / last;
        RGB8 { r: lerp(start.r, end.r, t),
               g: lerp(start.g, end.g, t),
               b: lerp(start.b, end.b, t) }
    }).collect())
}

/// Build the gradient of the preset `name` (see [`lookup_preset`]).
pub fn easy_gradient(name: &str, steps: usize, mode: ColorMode)
                     -> Result<Vec<RGB8>> {
    let t = lookup_preset(name)?;
    build_gradient(t.start, t.end, steps, mode)
}

/// An immutable, cyclic sequence of colors made by chaining the
/// gradients of a table of [`Transition`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<RGB8>, // `steps` colors per transition, in table order
}

impl Palette {
    /// Concatenate the gradients of every transition of `table` in
    /// order, each with `steps` colors.  Adjacent transitions sharing
    /// an endpoint contribute that color twice.
    ///
    /// The length only depends on `table.len()` and `steps`, whatever
    /// the `mode`.
    pub fn build(table: &[Transition], steps: usize, mode: ColorMode)
                 -> Result<Self> {
        if steps < 2 { return Err(Error::InvalidStepCount(steps)) }
        let mut colors = Vec::with_capacity(table.len() * steps);
        for t in table {
            colors.extend(build_gradient(t.start, t.end, steps, mode)?);
        }
        debug!("built palette of {} colors from {} transitions ({:?})",
               colors.len(), table.len(), mode);
        Ok(Palette { colors })
    }

    /// The [`struct@DEFAULT_WHEEL`] palette.
    pub fn wheel(steps: usize, mode: ColorMode) -> Result<Self> {
        Self::build(&DEFAULT_WHEEL, steps, mode)
    }

    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn colors(&self) -> &[RGB8] { &self.colors }

    pub fn get(&self, i: usize) -> Option<RGB8> { self.colors.get(i).copied() }

    /// Index of the color shown at `progress` (see [`sample_color`]).
    /// Always in `0 .. self.len()` for a non-empty palette.
    pub fn index(&self, progress: f64, frequency: f64, phase_shift: f64)
                 -> usize {
        let len = self.colors.len();
        if len == 0 { return 0 }
        let angle = std::f64::consts::TAU * frequency * progress + phase_shift;
        let s = sine(angle).clamp(-1., 1.);
        // NaN casts to 0.
        let i = ((s + 1.) / 2. * (len - 1) as f64).floor() as i64;
        i.rem_euclid(len as i64) as usize
    }
}

/// Return the color of `palette` shown when the bar is at `progress` ∈
/// \[0, 1\].
///
/// The palette is swept back and forth following
/// sin(2π·`frequency`·`progress` + `phase_shift`): −1 maps to the first
/// color, +1 to the last.  `frequency` is the number of oscillations
/// over a full run.  Callers without a known total should pass a
/// `progress` of 0.
///
/// Returns [`ColorCode::None`] when `mode` is [`ColorMode::Disabled`]
/// or the palette is empty.
pub fn sample_color(progress: f64, palette: &Palette, frequency: f64,
                    phase_shift: f64, mode: ColorMode) -> ColorCode {
    if mode == ColorMode::Disabled || palette.is_empty() {
        return ColorCode::None
    }
    let i = palette.index(progress, frequency, phase_shift);
    trace!("progress {progress:.4} → color #{i}");
    ColorCode::Rgb(palette.colors[i])
}
