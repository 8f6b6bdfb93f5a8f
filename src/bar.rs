//! Progress bars whose body color follows the progress.
//!
//! A [`ProgressBar`] asks its [`BarStyle`] for a format template on
//! every update and fills in the placeholders
//! `{l_bar}`, `{bar}`, `{n_fmt}`, `{total_fmt}`, `{elapsed}`,
//! `{remaining}`, `{rate_fmt}` and `{postfix}`.  [`RainbowStyle`]
//! surrounds `{bar}` with a color from its palette and a reset code;
//! [`PlainStyle`] leaves the template alone.

use std::io::Write;
use std::time::{Duration, Instant};
use log::{debug, info};
use crate::{sample_color, ColorCode, ColorSwitch, Palette, RainbowConfig,
            Result, RESET};

/// Template used by uncolored bars.
pub const BAR_FORMAT: &str =
    "{l_bar}{bar}|{n_fmt}/{total_fmt} [{elapsed}<{remaining}, {rate_fmt}{postfix}]";

/// Default number of cells of the bar body.
pub const DEFAULT_WIDTH: usize = 40;

/// Produces the format template of a bar.
pub trait BarStyle {
    /// Template for a bar having done `current` of `total` items.
    fn bar_format(&self, current: u64, total: Option<u64>) -> String;
}

impl<S: BarStyle + ?Sized> BarStyle for Box<S> {
    fn bar_format(&self, current: u64, total: Option<u64>) -> String {
        (**self).bar_format(current, total)
    }
}

/// The baseline, colorless style.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainStyle;

impl BarStyle for PlainStyle {
    fn bar_format(&self, _: u64, _: Option<u64>) -> String {
        BAR_FORMAT.to_string()
    }
}

/// Progress ratio in \[0, 1\]; 0 when the total is unknown or zero.
pub fn progress_ratio(current: u64, total: Option<u64>) -> f64 {
    match total {
        Some(t) if t > 0 => (current as f64 / t as f64).min(1.),
        _ => 0.,
    }
}

/// Colors the bar body with a color cycling through a palette.
///
/// The palette is built once, when the style is created.  The
/// [`ColorSwitch`] is read again on every call so that disabling it
/// takes effect on the next update.
#[derive(Clone, Debug)]
pub struct RainbowStyle {
    palette: Palette,
    frequency: f64,
    phase_shift: f64,
    switch: ColorSwitch,
}

impl RainbowStyle {
    /// Build the palette of `config` and resolve its phase shift.
    pub fn new(config: &RainbowConfig, switch: ColorSwitch) -> Result<Self> {
        let palette = Palette::build(&config.transitions,
                                     config.steps_per_transition,
                                     switch.mode())?;
        let phase_shift = config.phase.angle();
        debug!("rainbow style: frequency {}, phase shift {phase_shift:.4}",
               config.frequency);
        Ok(RainbowStyle { palette, frequency: config.frequency, phase_shift,
                          switch })
    }

    pub fn palette(&self) -> &Palette { &self.palette }

    pub fn frequency(&self) -> f64 { self.frequency }

    pub fn phase_shift(&self) -> f64 { self.phase_shift }

    /// Color of the bar body at `current` of `total`.
    pub fn color(&self, current: u64, total: Option<u64>) -> ColorCode {
        sample_color(progress_ratio(current, total), &self.palette,
                     self.frequency, self.phase_shift, self.switch.mode())
    }
}

impl BarStyle for RainbowStyle {
    fn bar_format(&self, current: u64, total: Option<u64>) -> String {
        match self.color(current, total) {
            ColorCode::None => BAR_FORMAT.to_string(),
            code => format!("{{l_bar}}{code}{{bar}}{RESET}|{{n_fmt}}/{{total_fmt}} \
                             [{{elapsed}}<{{remaining}}, {{rate_fmt}}{{postfix}}]"),
        }
    }
}

/// Chooses the style of the bars it creates.
///
/// This is how the rainbow renderer is "installed": code creating its
/// bars through a factory gets whichever style the factory was set up
/// with.
#[derive(Clone, Debug)]
pub enum StyleFactory {
    Plain,
    Rainbow { config: RainbowConfig, switch: ColorSwitch },
}

impl StyleFactory {
    pub fn rainbow(config: RainbowConfig, switch: ColorSwitch) -> Self {
        info!("rainbow bars enabled");
        StyleFactory::Rainbow { config, switch }
    }

    pub fn plain() -> Self {
        info!("rainbow bars disabled");
        StyleFactory::Plain
    }

    /// A fresh style.  Rainbow styles each get their own palette and,
    /// with a random [`PhaseSource`](crate::PhaseSource), their own
    /// phase shift.
    pub fn style(&self) -> Result<Box<dyn BarStyle + Send + Sync>> {
        Ok(match self {
            StyleFactory::Plain => Box::new(PlainStyle),
            StyleFactory::Rainbow { config, switch } =>
                Box::new(RainbowStyle::new(config, switch.clone())?),
        })
    }

    /// A new bar counting up to `total` items.
    pub fn bar(&self, total: Option<u64>, desc: &str)
               -> Result<ProgressBar<Box<dyn BarStyle + Send + Sync>>> {
        Ok(ProgressBar::new(total, self.style()?).desc(desc))
    }
}

/// A minimal text progress bar.
#[derive(Debug)]
pub struct ProgressBar<S> {
    /// Items done so far.
    pub current: u64,
    /// Items expected, if known.
    pub total: Option<u64>,
    desc: String,
    width: usize,
    format: String,
    started: Instant,
    style: S,
}

impl<S: BarStyle> ProgressBar<S> {
    pub fn new(total: Option<u64>, style: S) -> Self {
        let format = style.bar_format(0, total);
        ProgressBar { current: 0, total, desc: String::new(),
                      width: DEFAULT_WIDTH, format, started: Instant::now(),
                      style }
    }

    pub fn desc(mut self, desc: &str) -> Self {
        self.desc = desc.to_string();
        self
    }

    /// Number of cells of the bar body.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn style(&self) -> &S { &self.style }

    /// Current format template.
    pub fn format(&self) -> &str { &self.format }

    /// Record `n` more items.  The template is chosen from the count
    /// before the increment.
    pub fn update(&mut self, n: u64) {
        self.format = self.style.bar_format(self.current, self.total);
        self.current = self.current.saturating_add(n);
    }

    /// The bar line, as it would be shown now.
    pub fn render(&self) -> String { self.render_at(self.started.elapsed()) }

    /// The bar line after `elapsed` time.
    pub fn render_at(&self, elapsed: Duration) -> String {
        let secs = elapsed.as_secs_f64();
        let rate = if secs > 0. { Some(self.current as f64 / secs) }
                   else { None };
        let l_bar = match (self.desc.is_empty(), self.total) {
            (true, None) => String::new(),
            (false, None) => format!("{}: ", self.desc),
            (true, Some(_)) => format!("{:3.0}%|", self.percent()),
            (false, Some(_)) => format!("{}: {:3.0}%|", self.desc,
                                        self.percent()),
        };
        let bar = match self.total {
            Some(_) => {
                let ratio = progress_ratio(self.current, self.total);
                let filled = ((ratio * self.width as f64) as usize)
                    .min(self.width);
                format!("{}{}", "█".repeat(filled),
                        " ".repeat(self.width - filled))
            }
            None => String::new(),
        };
        let remaining = match (self.total, rate) {
            (Some(t), Some(r)) if r > 0. => {
                let left = t.saturating_sub(self.current) as f64 / r;
                Duration::try_from_secs_f64(left)
                    .map_or("?".to_string(), clock)
            }
            _ => "?".to_string(),
        };
        let rate_fmt = match rate {
            Some(r) => format!("{r:.2}it/s"),
            None => "?it/s".to_string(),
        };
        let total_fmt = self.total.map_or("?".to_string(), |t| t.to_string());
        self.format
            .replace("{l_bar}", &l_bar)
            .replace("{bar}", &bar)
            .replace("{n_fmt}", &self.current.to_string())
            .replace("{total_fmt}", &total_fmt)
            .replace("{elapsed}", &clock(elapsed))
            .replace("{remaining}", &remaining)
            .replace("{rate_fmt}", &rate_fmt)
            .replace("{postfix}", "")
    }

    fn percent(&self) -> f64 { 100. * progress_ratio(self.current, self.total) }

    /// Redraw the bar in place on `out`.
    pub fn draw<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        write!(out, "\r{}", self.render())?;
        out.flush()?;
        Ok(())
    }

    /// Draw the bar one last time and end the line.
    pub fn finish<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        self.draw(out)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Format a duration as `mm:ss` (or `h:mm:ss` past an hour).
fn clock(d: Duration) -> String {
    let s = d.as_secs();
    let (h, m, s) = (s / 3600, s / 60 % 60, s % 60);
    if h > 0 { format!("{h}:{m:02}:{s:02}") } else { format!("{m:02}:{s:02}") }
}
