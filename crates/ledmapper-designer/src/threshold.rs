//! Ring tolerance for the circle strategy.

use crate::shape::Step;
use ledmapper_core::{MappingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default ring tolerance, in percent of the shorter grid side.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 3.0;

/// Arrow-key increment of the threshold input.
pub const DEFAULT_THRESHOLD_STEP: f64 = 0.1;

/// Non-negative, finite tolerance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RingThreshold(f64);

impl RingThreshold {
    pub fn new(percent: f64) -> Result<Self> {
        if !percent.is_finite() || percent < 0.0 {
            return Err(MappingError::InvalidThreshold(percent.to_string()));
        }
        Ok(Self(percent))
    }

    /// Parses threshold text as typed by the user.
    pub fn parse(input: &str) -> Result<Self> {
        let percent: f64 = input
            .trim()
            .parse()
            .map_err(|_| MappingError::InvalidThreshold(input.to_string()))?;
        Self::new(percent)
    }

    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Moves the threshold one step, rounded to one decimal, never below 0.
    pub fn nudge(&self, step: Step, amount: f64) -> Self {
        let delta = match step {
            Step::Up => amount,
            Step::Down => -amount,
        };
        let next = ((self.0 + delta) * 10.0).round() / 10.0;
        Self(next.max(0.0))
    }

    /// Allowed distance from the ideal radius for a grid whose shorter side is `size`.
    pub fn tolerance(&self, size: usize) -> f64 {
        size as f64 / 100.0 * self.0
    }
}

impl Default for RingThreshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD_PERCENT)
    }
}

impl TryFrom<f64> for RingThreshold {
    type Error = MappingError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<RingThreshold> for f64 {
    fn from(value: RingThreshold) -> Self {
        value.0
    }
}

impl fmt::Display for RingThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
