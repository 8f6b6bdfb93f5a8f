//! Settings of a rainbow bar.

use std::f64::consts::TAU;
use log::warn;
use rand::{Rng, SeedableRng, rngs::StdRng};
use crate::{lookup_preset, Result, Transition, DEFAULT_WHEEL};

/// Where the phase shift of a bar comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PhaseSource {
    /// Exactly this angle (radians).
    Fixed(f64),
    /// A random angle in \[0, 2π) drawn from a generator seeded with
    /// this value, so runs are reproducible.
    Seeded(u64),
    /// A random angle in \[0, 2π) from the thread-local generator.
    Entropy,
}

impl Default for PhaseSource {
    fn default() -> Self { PhaseSource::Fixed(0.) }
}

impl PhaseSource {
    /// Resolve to an angle.
    pub fn angle(&self) -> f64 {
        match *self {
            PhaseSource::Fixed(a) => a,
            PhaseSource::Seeded(seed) =>
                random_phase(&mut StdRng::seed_from_u64(seed)),
            PhaseSource::Entropy => random_phase(&mut rand::rng()),
        }
    }
}

/// Draw a phase shift uniformly in \[0, 2π) from `rng`.
pub fn random_phase<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(0. .. TAU)
}

/// Parameters fixed for the lifetime of a bar.
///
/// # Example
///
/// ```
/// use rainbow_bar::RainbowConfig;
/// let cfg = RainbowConfig::default().frequency(1.5).steps(20);
/// assert_eq!(cfg.steps_per_transition, 20);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RainbowConfig {
    /// Oscillations over a full run (0 → 1).  High values flicker.
    pub frequency: f64,
    pub phase: PhaseSource,
    /// Colors generated per transition; at least 2.
    pub steps_per_transition: usize,
    /// Chain of transitions making up the palette.  Never empty.
    pub transitions: Vec<Transition>,
}

impl Default for RainbowConfig {
    fn default() -> Self {
        RainbowConfig {
            frequency: 0.3,
            phase: PhaseSource::default(),
            steps_per_transition: 15,
            transitions: DEFAULT_WHEEL.clone(),
        }
    }
}

impl RainbowConfig {
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Use a fixed phase shift (radians).
    pub fn phase_shift(mut self, phase_shift: f64) -> Self {
        self.phase = PhaseSource::Fixed(phase_shift);
        self
    }

    pub fn phase(mut self, phase: PhaseSource) -> Self {
        self.phase = phase;
        self
    }

    /// Use a phase shift drawn from `rng`.
    pub fn random_phase<R: Rng>(mut self, rng: &mut R) -> Self {
        self.phase = PhaseSource::Fixed(random_phase(rng));
        self
    }

    /// Set the number of colors per transition.  Checked when the
    /// palette is built.
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps_per_transition = steps;
        self
    }

    /// Use a custom chain of transitions.  An empty chain keeps the
    /// default wheel.
    pub fn transitions(mut self, transitions: Vec<Transition>) -> Self {
        if transitions.is_empty() {
            warn!("empty transition table, using the default wheel");
            self.transitions = DEFAULT_WHEEL.clone();
        } else {
            self.transitions = transitions;
        }
        self
    }

    /// Use the single transition of the preset `name`.
    pub fn preset(self, name: &str) -> Result<Self> {
        let t = lookup_preset(name)?;
        Ok(self.transitions(vec![t]))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn defaults() {
        let cfg = RainbowConfig::default();
        assert_eq!(cfg.frequency, 0.3);
        assert_eq!(cfg.phase.angle(), 0.);
        assert_eq!(cfg.steps_per_transition, 15);
        assert_eq!(cfg.transitions, *DEFAULT_WHEEL);
    }

    #[test]
    fn seeded_phase_is_reproducible() {
        let a = PhaseSource::Seeded(7).angle();
        let b = PhaseSource::Seeded(7).angle();
        assert_eq!(a, b);
        assert!((0. .. TAU).contains(&a));
        let mut rng = StdRng::seed_from_u64(7);
        let cfg = RainbowConfig::default().random_phase(&mut rng);
        assert_eq!(cfg.phase, PhaseSource::Fixed(a));
    }

    #[test]
    fn entropy_phase_in_range() {
        for _ in 0 .. 100 {
            assert!((0. .. TAU).contains(&PhaseSource::Entropy.angle()));
        }
    }

    #[test]
    fn preset_table() {
        let cfg = RainbowConfig::default().preset("cyan").unwrap();
        assert_eq!(cfg.transitions,
                   vec![Transition::rgb((0, 255, 255), (0, 139, 139))]);
        assert!(matches!(RainbowConfig::default().preset("teal"),
                         Err(Error::UnknownGradientName(_))));
    }

    #[test]
    fn empty_table_keeps_wheel() {
        let cfg = RainbowConfig::default().transitions(vec![]);
        assert_eq!(cfg.transitions.len(), DEFAULT_WHEEL.len());
    }
}
