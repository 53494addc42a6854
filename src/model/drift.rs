use crate::io::error::{PhonoError, Result};
use std::fmt;

/// Blend weight between anchor A (0) and anchor B (1)
///
/// Always holds a value within `[0, 1]`; out-of-range input is either
/// rejected by [`Drift::new`] or clamped by [`Drift::clamped`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Drift(f64);

impl Drift {
    /// Pure anchor A
    pub const ANCHOR_A: Self = Self(0.0);
    /// Pure anchor B
    pub const ANCHOR_B: Self = Self(1.0);

    /// Validate a drift value
    ///
    /// # Errors
    ///
    /// Returns an error if the value is NaN or outside `[0, 1]`
    pub fn new(value: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(PhonoError::InvalidDrift { value });
        }
        Ok(Self(value))
    }

    /// Clamp any value into `[0, 1]`, mapping NaN to 0
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::ANCHOR_A;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// The blend weight
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for Drift {
    fn default() -> Self {
        Self::ANCHOR_A
    }
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
