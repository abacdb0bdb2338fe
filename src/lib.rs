//! pidplot crate root: re-exports and module wiring.
//!
//! Tooling for a PID temperature-control lab, in two independent parts:
//! - Offline analysis of stored instrument logs (`analysis`)
//! - Live acquisition from the controller's serial link (`acquisition`)
//!
//! Modules:
//! - `data`: the shared sample record, the live table and its exports
//! - `config`: configuration structs and file loading
//! - `error`: error types
//! - `app`: egui windows for both parts

pub mod acquisition;
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod error;

// Public re-exports for a compact external API
pub use acquisition::{parse_packet, Acquirer, IntervalTicker, ManualTicker, PacketSource, TickSource};
pub use analysis::{analyze, AnalysisReport, LogReader, Segment, TemperatureLog};
pub use app::{run_analysis, run_live};
pub use config::{AcquisitionConfig, AnalysisConfig, PidPlotConfig};
pub use data::sample::Sample;
pub use data::table::LiveTable;
