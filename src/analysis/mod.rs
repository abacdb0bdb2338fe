//! Offline analysis of stored instrument logs.
//!
//! | Sub-module   | Responsibility |
//! | ------------ | -------------- |
//! | [`log_file`] | Reading the tab-separated instrument export |
//! | [`slicing`]  | Minimum / crossing lookups and rebased segments |
//! | [`band`]     | Mean and reference band over the oscillation segment |

pub mod band;
pub mod log_file;
pub mod slicing;

pub use band::{mean_ignoring_nan, BandMode, BandOverlay};
pub use log_file::{LogReader, TemperatureLog};
pub use slicing::{
    extract_heating, extract_oscillation, extract_rise, locate_first_crossing,
    locate_first_crossing_from, locate_minimum_temperature_index, slice_from, Segment,
    DEFAULT_OSCILLATION_WINDOW,
};

use crate::config::AnalysisConfig;
use crate::error::SliceError;

/// Result of the standard rise/oscillation pipeline over one log.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub minimum_index: usize,
    pub crossing_index: usize,
    /// Seconds from the temperature minimum to the first crossing.
    pub rise_time_s: f64,
    pub rise: Segment,
    pub oscillation: Segment,
    pub band: Option<BandOverlay>,
}

/// Locate the heating start and the first crossing after it, then cut both segments.
pub fn analyze(log: &TemperatureLog, cfg: &AnalysisConfig) -> Result<AnalysisReport, SliceError> {
    let minimum_index = locate_minimum_temperature_index(log)?;
    let crossing_index = locate_first_crossing_from(log, cfg.target_temperature, minimum_index)?;
    let rise = extract_rise(log, minimum_index, crossing_index)?;
    let oscillation = extract_oscillation(log, crossing_index, cfg.oscillation_window)?;
    let band = BandOverlay::compute(&oscillation, cfg.effective_setpoint(), cfg.band);
    let time = log.time();
    Ok(AnalysisReport {
        minimum_index,
        crossing_index,
        rise_time_s: time[crossing_index] - time[minimum_index],
        rise,
        oscillation,
        band,
    })
}
