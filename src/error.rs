//! Error types for log loading, slicing, acquisition, configuration and export.

use std::path::PathBuf;

/// Errors raised while reading an instrument log.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed tab-separated record
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required column absent from the header line
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// A cell in a numeric column could not be parsed
    #[error("Invalid value {value:?} in column {column} at data row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    /// Header present but no data rows
    #[error("Log contains no data rows")]
    Empty,
}

/// Errors raised by the slicing operations on a loaded log.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SliceError {
    #[error("Log has no usable temperature rows")]
    EmptyLog,

    #[error("Temperature never reaches {threshold} C")]
    NoCrossing { threshold: f64 },

    #[error("Row index {index} out of range for log with {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Range end {end} precedes start {start}")]
    InvertedRange { start: usize, end: usize },
}

/// Errors raised while setting up live acquisition.
#[derive(Debug, thiserror::Error)]
pub enum AcquisitionError {
    #[error("Failed to open serial port {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),
}

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Errors raised while exporting the live table.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "parquet")]
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow_schema::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}
