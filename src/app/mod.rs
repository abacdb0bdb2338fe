//! egui/eframe front ends.
//!
//! | Sub-module   | Responsibility |
//! | ------------ | -------------- |
//! | [`live`]     | Live acquisition window driven by a tick source |
//! | [`analysis`] | Rise / oscillation plots for a stored log |
//! | [`run`]      | Native window setup and entry points |

pub mod analysis;
pub mod live;
mod run;

pub use analysis::AnalysisApp;
pub use live::LiveApp;
pub use run::{run_analysis, run_app, run_live};
