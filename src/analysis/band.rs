//! Reference band drawn over the oscillation segment.

use serde::{Deserialize, Serialize};

use crate::analysis::slicing::Segment;

/// Shape of the reference band, following the controller mode under test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BandMode {
    /// Symmetric band of `half_width` around the mean temperature.
    Proportional { half_width: f64 },
    /// One-sided band of `width` below the setpoint (on/off switching region).
    Hysteresis { width: f64 },
}

impl Default for BandMode {
    fn default() -> Self {
        BandMode::Proportional { half_width: 1.0 }
    }
}

/// Mean of the non-NaN values, or `None` if there are none.
pub fn mean_ignoring_nan(values: &[f64]) -> Option<f64> {
    let (sum, n) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandOverlay {
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
    pub setpoint: f64,
    /// Signed distance from setpoint to mean; drawn as a double arrow.
    pub offset: f64,
}

impl BandOverlay {
    pub fn compute(segment: &Segment, setpoint: f64, mode: BandMode) -> Option<Self> {
        let mean = mean_ignoring_nan(&segment.temperature)?;
        let (lower, upper) = match mode {
            BandMode::Proportional { half_width } => (mean - half_width, mean + half_width),
            BandMode::Hysteresis { width } => (setpoint - width, setpoint),
        };
        Some(Self {
            mean,
            lower,
            upper,
            setpoint,
            offset: mean - setpoint,
        })
    }
}
