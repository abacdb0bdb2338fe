//! Loader for the tab-separated logs written by the lab instrument.
//!
//! A log starts with a fixed-size preamble of instrument metadata, followed by a
//! tab-separated header line and one row per sample:
//!
//! ```text
//! <11 preamble lines>
//! Time(s)\tTemperature(C)
//! 0.00\t24.81
//! 0.05\t24.80
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use crate::data::sample::Sample;
use crate::error::LogError;

pub const TIME_COLUMN: &str = "Time(s)";
pub const TEMPERATURE_COLUMN: &str = "Temperature(C)";
pub const POWER_COLUMN: &str = "Power";

/// Number of metadata lines preceding the header line in instrument exports.
pub const DEFAULT_PREAMBLE_LINES: usize = 11;

/// Column-oriented time series loaded from a log file.
///
/// All present columns have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperatureLog {
    time: Vec<f64>,
    temperature: Vec<f64>,
    power: Option<Vec<f64>>,
}

impl TemperatureLog {
    /// Build a log from time and temperature columns. Extra values in the longer
    /// column are dropped.
    pub fn from_columns(mut time: Vec<f64>, mut temperature: Vec<f64>) -> Self {
        let n = time.len().min(temperature.len());
        time.truncate(n);
        temperature.truncate(n);
        Self {
            time,
            temperature,
            power: None,
        }
    }

    /// Build a log carrying all three columns.
    pub fn from_samples<I: IntoIterator<Item = Sample>>(samples: I) -> Self {
        let mut log = Self {
            power: Some(Vec::new()),
            ..Default::default()
        };
        for s in samples {
            log.time.push(s.time_s);
            log.temperature.push(s.temperature_c);
            if let Some(p) = log.power.as_mut() {
                p.push(s.power_pct);
            }
        }
        log
    }

    pub fn row_count(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn temperature(&self) -> &[f64] {
        &self.temperature
    }

    pub fn power(&self) -> Option<&[f64]> {
        self.power.as_deref()
    }
}

/// Reads instrument logs, skipping a fixed preamble before the header line.
#[derive(Debug, Clone, Copy)]
pub struct LogReader {
    pub preamble_lines: usize,
}

impl Default for LogReader {
    fn default() -> Self {
        Self {
            preamble_lines: DEFAULT_PREAMBLE_LINES,
        }
    }
}

impl LogReader {
    pub fn new(preamble_lines: usize) -> Self {
        Self { preamble_lines }
    }

    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<TemperatureLog, LogError> {
        let file = File::open(path.as_ref())?;
        debug!("Reading log {:?}", path.as_ref());
        self.read(file)
    }

    pub fn read<R: Read>(&self, reader: R) -> Result<TemperatureLog, LogError> {
        let mut reader = BufReader::new(reader);
        // Preamble lines are not required to be UTF-8.
        let mut skipped = Vec::new();
        for _ in 0..self.preamble_lines {
            skipped.clear();
            if reader.read_until(b'\n', &mut skipped)? == 0 {
                break;
            }
        }

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let position = |name: &str| headers.iter().position(|h| h == name);
        let time_idx =
            position(TIME_COLUMN).ok_or_else(|| LogError::MissingColumn(TIME_COLUMN.into()))?;
        let temp_idx = position(TEMPERATURE_COLUMN)
            .ok_or_else(|| LogError::MissingColumn(TEMPERATURE_COLUMN.into()))?;
        let power_idx = position(POWER_COLUMN);

        let mut log = TemperatureLog {
            power: power_idx.map(|_| Vec::new()),
            ..Default::default()
        };

        for result in csv_reader.records() {
            let record = result?;
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }
            let row = log.time.len();
            let cell = |idx: usize, column: &str| -> Result<f64, LogError> {
                let raw = record.get(idx).unwrap_or("");
                raw.parse::<f64>().map_err(|_| LogError::InvalidValue {
                    row,
                    column: column.to_string(),
                    value: raw.to_string(),
                })
            };
            let t = cell(time_idx, TIME_COLUMN)?;
            let temp = cell(temp_idx, TEMPERATURE_COLUMN)?;
            let power = match power_idx {
                Some(idx) => Some(cell(idx, POWER_COLUMN)?),
                None => None,
            };
            log.time.push(t);
            log.temperature.push(temp);
            if let (Some(col), Some(p)) = (log.power.as_mut(), power) {
                col.push(p);
            }
        }

        if log.is_empty() {
            return Err(LogError::Empty);
        }
        debug!("Loaded {} rows", log.row_count());
        Ok(log)
    }
}
