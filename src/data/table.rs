use crate::data::sample::Sample;

/// Column headers used for the live table and its exports.
pub const LIVE_COLUMNS: [&str; 3] = ["Time (s)", "Temperature (C)", "Power (%)"];

/// Running in-memory table filled by the acquisition loop.
///
/// Rows are only ever appended; the table is cleared explicitly by the user.
#[derive(Debug, Default, Clone)]
pub struct LiveTable {
    rows: Vec<Sample>,
}

impl LiveTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_row(&mut self, sample: Sample) {
        self.rows.push(sample);
    }

    pub fn rows(&self) -> &[Sample] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Most recently appended sample, used for the numeric readout.
    pub fn latest(&self) -> Option<&Sample> {
        self.rows.last()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// `[time, temperature]` pairs ready for plotting.
    pub fn temperature_points(&self) -> Vec<[f64; 2]> {
        self.rows
            .iter()
            .map(|s| [s.time_s, s.temperature_c])
            .collect()
    }

    /// `[time, power]` pairs ready for plotting.
    pub fn power_points(&self) -> Vec<[f64; 2]> {
        self.rows.iter().map(|s| [s.time_s, s.power_pct]).collect()
    }
}
