use serde::{Deserialize, Serialize};
use std::fmt;

/// A percentage on the 0-100 scale.
///
/// Every win rate, drawdown percent and return figure in the crate is a
/// `Percent`, so a value can never be mistaken for a 0-1 fraction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(f64);

impl Percent {
    pub const ZERO: Percent = Percent(0.0);

    pub fn new(value: f64) -> Self {
        Percent(value)
    }

    /// `numerator / denominator` expressed as a percent, 0 when the denominator is 0.
    pub fn of(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            Percent::ZERO
        } else {
            Percent(numerator / denominator * 100.0)
        }
    }

    /// Count-based variant of [`Percent::of`].
    pub fn of_count(part: usize, total: usize) -> Self {
        Percent::of(part as f64, total as f64)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn as_fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// A ratio that may be unbounded, e.g. a profit factor with no losing trades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ratio {
    Finite(f64),
    Infinite,
}

impl Ratio {
    pub fn is_infinite(&self) -> bool {
        matches!(self, Ratio::Infinite)
    }

    pub fn finite(&self) -> Option<f64> {
        match self {
            Ratio::Finite(v) => Some(*v),
            Ratio::Infinite => None,
        }
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Ratio::Finite(0.0)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Finite(v) => write!(f, "{:.2}", v),
            Ratio::Infinite => write!(f, "∞"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator_is_zero_percent() {
        assert_eq!(Percent::of(5.0, 0.0), Percent::ZERO);
        assert_eq!(Percent::of_count(0, 0), Percent::ZERO);
    }

    #[test]
    fn percent_scale() {
        let p = Percent::of_count(1, 4);
        assert!((p.value() - 25.0).abs() < 1e-9);
        assert!((p.as_fraction() - 0.25).abs() < 1e-9);
        assert_eq!(p.to_string(), "25.00%");
    }

    #[test]
    fn ratio_display() {
        assert_eq!(Ratio::Finite(1.5).to_string(), "1.50");
        assert_eq!(Ratio::Infinite.to_string(), "∞");
        assert_eq!(Ratio::Infinite.finite(), None);
    }
}
