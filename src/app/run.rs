//! Entry points for opening the analysis and live windows.

use eframe::egui;

use crate::acquisition::{Acquirer, IntervalTicker, PacketSource};
use crate::analysis::AnalysisReport;
use crate::config::AcquisitionConfig;

use super::analysis::AnalysisApp;
use super::live::LiveApp;

/// Open a native window for `app` and block until it is closed.
pub fn run_app<A: eframe::App + 'static>(title: &str, app: A) -> eframe::Result<()> {
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1000.0, 800.0)),
        ..Default::default()
    };

    eframe::run_native(
        title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Run the live acquisition window, ticking at `cfg.tick_ms`.
pub fn run_live<S: PacketSource + 'static>(
    source: S,
    cfg: &AcquisitionConfig,
    export_on_close: Option<std::path::PathBuf>,
) -> eframe::Result<()> {
    let acquirer = Acquirer::with_duty_max_count(source, cfg.duty_max_count);
    let mut app = LiveApp::new(acquirer, Box::new(IntervalTicker::new(cfg.tick_interval())));
    if let Some(path) = export_on_close {
        app = app.with_export_on_close(path);
    }
    run_app(&cfg.title, app)
}

/// Show the rise and oscillation segments of an analysed log.
pub fn run_analysis(source_name: &str, report: AnalysisReport) -> eframe::Result<()> {
    run_app(source_name, AnalysisApp::new(source_name, report))
}
