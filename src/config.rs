//! Configuration for the analysis and live-acquisition tools.
//!
//! Values come from `Default`, optionally overridden by a YAML or JSON file and
//! then by command-line flags. Nothing here is process-global; each tool takes
//! its config struct at startup.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::analysis::band::BandMode;
use crate::analysis::log_file::DEFAULT_PREAMBLE_LINES;
use crate::analysis::slicing::DEFAULT_OSCILLATION_WINDOW;
use crate::error::ConfigError;

/// Full-scale count of the controller's PWM timer; a raw duty of this value is 100 %.
pub const DUTY_MAX_COUNT: f64 = 62499.0;

// ─────────────────────────────────────────────────────────────────────────────
// Offline analysis
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Metadata lines before the header line.
    pub preamble_lines: usize,
    /// Temperature (C) whose first crossing ends the rise segment.
    pub target_temperature: f64,
    /// Rows kept in the oscillation segment.
    pub oscillation_window: usize,
    pub band: BandMode,
    /// Setpoint for the band annotation. Defaults to `target_temperature`.
    pub setpoint: Option<f64>,
}

impl AnalysisConfig {
    pub fn effective_setpoint(&self) -> f64 {
        self.setpoint.unwrap_or(self.target_temperature)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            preamble_lines: DEFAULT_PREAMBLE_LINES,
            target_temperature: 60.0,
            oscillation_window: DEFAULT_OSCILLATION_WINDOW,
            band: BandMode::default(),
            setpoint: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Live acquisition
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcquisitionConfig {
    /// Serial port name, e.g. `COM4` or `/dev/ttyACM0`.
    pub port: String,
    pub baud_rate: u32,
    /// Bound on each packet read.
    pub timeout_ms: u64,
    /// Interval between acquisition ticks.
    pub tick_ms: u64,
    /// Delay after opening the port while the board resets.
    pub settle_ms: u64,
    pub duty_max_count: f64,
    /// Native window title.
    pub title: String,
}

impl AcquisitionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            port: "COM4".to_string(),
            baud_rate: 115_200,
            timeout_ms: 1_000,
            tick_ms: 80,
            settle_ms: 2_000,
            duty_max_count: DUTY_MAX_COUNT,
            title: "PID".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File-level config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PidPlotConfig {
    pub analysis: AnalysisConfig,
    pub acquisition: AcquisitionConfig,
}

impl PidPlotConfig {
    /// Load from a `.yaml`/`.yml` or `.json` file. Missing keys take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&text)?),
            Some("json") => Ok(serde_json::from_str(&text)?),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
