//! Locating characteristic rows in a log and cutting time-rebased segments.
//!
//! Lookups scan rows in ascending order and report the first match, so ties in
//! the minimum temperature or repeated threshold crossings always resolve to
//! the earliest row.

use crate::analysis::log_file::TemperatureLog;
use crate::error::SliceError;

/// Rows kept after the first crossing when cutting the oscillation segment.
pub const DEFAULT_OSCILLATION_WINDOW: usize = 4000;

/// A contiguous run of log rows with time shifted to start at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segment {
    /// Row index in the source log of the first sample.
    pub start: usize,
    pub time: Vec<f64>,
    pub temperature: Vec<f64>,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// One past the last source row covered by this segment.
    pub fn end(&self) -> usize {
        self.start + self.len()
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.time
            .iter()
            .zip(&self.temperature)
            .map(|(&t, &y)| [t, y])
            .collect()
    }
}

/// Index of the lowest temperature, taken as the start of heating.
///
/// NaN cells are skipped. Fails when the log has no comparable temperature.
pub fn locate_minimum_temperature_index(log: &TemperatureLog) -> Result<usize, SliceError> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &t) in log.temperature().iter().enumerate() {
        if t.is_nan() {
            continue;
        }
        match best {
            Some((_, min)) if t >= min => {}
            _ => best = Some((i, t)),
        }
    }
    best.map(|(i, _)| i).ok_or(SliceError::EmptyLog)
}

/// Index of the first row whose temperature is at or above `threshold`.
pub fn locate_first_crossing(log: &TemperatureLog, threshold: f64) -> Result<usize, SliceError> {
    log.temperature()
        .iter()
        .position(|&t| t >= threshold)
        .ok_or(SliceError::NoCrossing { threshold })
}

/// Like [`locate_first_crossing`], but only considers rows at or after `from`.
///
/// Returns an absolute row index.
pub fn locate_first_crossing_from(
    log: &TemperatureLog,
    threshold: f64,
    from: usize,
) -> Result<usize, SliceError> {
    log.temperature()
        .get(from..)
        .unwrap_or_default()
        .iter()
        .position(|&t| t >= threshold)
        .map(|offset| from + offset)
        .ok_or(SliceError::NoCrossing { threshold })
}

/// Rows from `start_index` onward, at most `length` of them, with time rebased so
/// the first sample sits at exactly zero.
pub fn slice_from(
    log: &TemperatureLog,
    start_index: usize,
    length: Option<usize>,
) -> Result<Segment, SliceError> {
    let len = log.row_count();
    if start_index >= len {
        return Err(SliceError::IndexOutOfRange {
            index: start_index,
            len,
        });
    }
    let available = len - start_index;
    let end = start_index + length.map_or(available, |l| l.min(available));
    Ok(rebased(log, start_index, end))
}

/// Segment from the heating start up to (not including) the first crossing.
pub fn extract_rise(
    log: &TemperatureLog,
    start_index: usize,
    crossing_index: usize,
) -> Result<Segment, SliceError> {
    if crossing_index < start_index {
        return Err(SliceError::InvertedRange {
            start: start_index,
            end: crossing_index,
        });
    }
    let len = log.row_count();
    if crossing_index > len {
        return Err(SliceError::IndexOutOfRange {
            index: crossing_index,
            len,
        });
    }
    slice_from(log, start_index, Some(crossing_index - start_index))
}

/// Fixed-length window of steady-state oscillation starting at the first crossing.
pub fn extract_oscillation(
    log: &TemperatureLog,
    crossing_index: usize,
    window: usize,
) -> Result<Segment, SliceError> {
    slice_from(log, crossing_index, Some(window))
}

/// Everything from the temperature minimum to the end of the file.
pub fn extract_heating(log: &TemperatureLog) -> Result<Segment, SliceError> {
    let start = locate_minimum_temperature_index(log)?;
    slice_from(log, start, None)
}

fn rebased(log: &TemperatureLog, start: usize, end: usize) -> Segment {
    let time = &log.time()[start..end];
    let offset = time.first().copied().unwrap_or(0.0);
    Segment {
        start,
        time: time.iter().map(|t| t - offset).collect(),
        temperature: log.temperature()[start..end].to_vec(),
    }
}
