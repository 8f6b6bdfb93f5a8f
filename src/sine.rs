//! Truncated power series for sin(x).

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Number of series terms used by [`sine`].
pub const DEFAULT_TERMS: usize = 10;

/// A term smaller than this ends the summation early.
const CONVERGED: f64 = 1e-15;

/// Approximate sin(`angle`) summing at most `max_terms` terms of the
/// Maclaurin series x − x³/3! + x⁵/5! − ….
///
/// The angle is first reduced into \[0, 2π) and then folded onto
/// \[−π/2, π/2\] (using sin(π − x) = sin(x) and 2π-periodicity), where
/// ten terms are enough to reach ~1e-15 absolute error.  Summation stops
/// as soon as a term drops below 1e-15.  Non-finite input gives NaN.
pub fn approximate_sine(angle: f64, max_terms: usize) -> f64 {
    let x = reduce(angle);
    let x2 = x * x;
    let mut sum = 0.;
    let mut power = x;
    let mut denom = 1.;
    for n in 0 .. max_terms {
        if n > 0 {
            let k = (2 * n) as f64;
            denom *= k * (k + 1.);
            power *= x2;
        }
        let term = if n % 2 == 0 { power / denom } else { -power / denom };
        sum += term;
        if term.abs() < CONVERGED { break }
    }
    sum
}

/// [`approximate_sine`] with [`DEFAULT_TERMS`] terms.
#[inline]
pub fn sine(angle: f64) -> f64 { approximate_sine(angle, DEFAULT_TERMS) }

/// Map `angle` to an angle in \[−π/2, π/2\] with the same sine.
fn reduce(angle: f64) -> f64 {
    let x = angle.rem_euclid(TAU);
    if x <= FRAC_PI_2 { x }
    else if x < 3. * FRAC_PI_2 { PI - x }
    else { x - TAU }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn zero() {
        assert_eq!(sine(0.), 0.);
    }

    #[test]
    fn quarter_turn() {
        assert!((sine(FRAC_PI_2) - 1.).abs() <= 1e-9);
        assert!((sine(3. * FRAC_PI_2) + 1.).abs() <= 1e-9);
    }

    #[test]
    fn close_to_std() {
        for i in -2000 .. 2000 {
            let x = i as f64 * 0.01;
            let s = sine(x);
            assert!((s - x.sin()).abs() <= 1e-12, "sine({x}) = {s} ≉ {}",
                    x.sin());
        }
    }

    #[rstest]
    #[case(0.3)]
    #[case(-1.7)]
    #[case(2.9)]
    #[case(5.5)]
    #[case(1234.5678)]
    #[case(-98.76)]
    fn periodic(#[case] x: f64) {
        assert!((sine(x + TAU) - sine(x)).abs() <= 1e-9);
        assert!((sine(x - TAU) - sine(x)).abs() <= 1e-9);
    }

    #[test]
    fn stays_in_unit_range() {
        for i in 0 .. 10_000 {
            let s = sine(i as f64 * 0.0123 - 50.);
            assert!((-1. - 1e-12 ..= 1. + 1e-12).contains(&s));
        }
    }

    #[test]
    fn fewer_terms_are_coarser() {
        let x = 1.2;
        let one = approximate_sine(x, 1);
        assert_eq!(one, x);
        assert!((approximate_sine(x, 3) - x.sin()).abs()
                > (approximate_sine(x, 10) - x.sin()).abs());
    }

    #[test]
    fn no_terms() {
        assert_eq!(approximate_sine(1., 0), 0.);
    }

    #[test]
    fn not_finite() {
        assert!(sine(f64::NAN).is_nan());
        assert!(sine(f64::INFINITY).is_nan());
    }
}
