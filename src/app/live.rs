//! Live acquisition window: temperature readout plus temperature and power plots.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, RichText};
use egui_plot::{Legend, Line, Plot};
use log::{info, warn};

use crate::acquisition::{Acquirer, PacketSource, TickSource};
use crate::data::export;
use crate::data::table::LIVE_COLUMNS;

/// Medium spring green, used for the temperature readout.
const READOUT_COLOR: Color32 = Color32::from_rgb(0, 250, 154);

pub struct LiveApp<S> {
    acquirer: Acquirer<S>,
    ticker: Box<dyn TickSource>,
    export_on_close: Option<PathBuf>,
    exported: bool,
}

impl<S: PacketSource> LiveApp<S> {
    pub fn new(acquirer: Acquirer<S>, ticker: Box<dyn TickSource>) -> Self {
        Self {
            acquirer,
            ticker,
            export_on_close: None,
            exported: false,
        }
    }

    /// Write the table to `path` as CSV when the window is closed.
    pub fn with_export_on_close(mut self, path: PathBuf) -> Self {
        self.export_on_close = Some(path);
        self
    }

    pub fn acquirer(&self) -> &Acquirer<S> {
        &self.acquirer
    }

    fn export_to(&self, path: &std::path::Path) {
        let result = match path.extension().and_then(|e| e.to_str()) {
            #[cfg(feature = "parquet")]
            Some("parquet") => export::write_table_parquet_path(path, self.acquirer.table()),
            _ => export::write_table_csv_path(path, self.acquirer.table()),
        };
        match result {
            Ok(()) => info!("Exported {} rows to {:?}", self.acquirer.table().len(), path),
            Err(e) => warn!("Failed to export table to {:?}: {e}", path),
        }
    }

    fn readout_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Temperature:").size(26.0).color(READOUT_COLOR));
            let value = match self.acquirer.table().latest() {
                Some(s) => format!("{:.3} °C", s.temperature_c),
                None => "--- °C".to_string(),
            };
            ui.label(RichText::new(value).size(26.0).monospace().color(READOUT_COLOR));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(format!("{} Export CSV…", egui_phosphor::regular::EXPORT))
                    .clicked()
                {
                    if let Some(path) = rfd::FileDialog::new()
                        .set_file_name(export::default_export_name("csv"))
                        .add_filter("CSV", &["csv"])
                        .save_file()
                    {
                        self.export_to(&path);
                    }
                }
                #[cfg(feature = "parquet")]
                {
                    if ui.button("Export Parquet…").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .set_file_name(export::default_export_name("parquet"))
                            .add_filter("Parquet", &["parquet"])
                            .save_file()
                        {
                            self.export_to(&path);
                        }
                    }
                }
                if ui
                    .button(format!("{} Clear", egui_phosphor::regular::TRASH))
                    .clicked()
                {
                    self.acquirer.table_mut().clear();
                }
            });
        });
    }

    fn plots_ui(&self, ui: &mut egui::Ui) {
        let table = self.acquirer.table();
        let height = (ui.available_height() - ui.spacing().item_spacing.y) / 2.0;

        Plot::new("live_temperature")
            .legend(Legend::default())
            .link_axis("live_time", [true, false])
            .height(height)
            .x_axis_label(LIVE_COLUMNS[0])
            .y_axis_label(LIVE_COLUMNS[1])
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(LIVE_COLUMNS[1], table.temperature_points()));
            });

        Plot::new("live_power")
            .legend(Legend::default())
            .link_axis("live_time", [true, false])
            .height(height)
            .x_axis_label(LIVE_COLUMNS[0])
            .y_axis_label(LIVE_COLUMNS[2])
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(LIVE_COLUMNS[2], table.power_points())
                        .color(Color32::from_rgb(255, 140, 0)),
                );
            });
    }
}

impl<S: PacketSource> eframe::App for LiveApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // At most one tick per frame; the tick blocks for up to the read timeout.
        self.acquirer.poll(self.ticker.as_mut(), Instant::now());

        if ctx.input(|i| i.viewport().close_requested()) && !self.exported {
            if let Some(path) = self.export_on_close.clone() {
                self.export_to(&path);
            }
            self.exported = true;
        }

        egui::TopBottomPanel::top("pid_readout").show(ctx, |ui| self.readout_ui(ui));

        egui::TopBottomPanel::bottom("pid_status").show(ctx, |ui| {
            ui.label(format!(
                "{} rows · {} received · {} discarded",
                self.acquirer.table().len(),
                self.acquirer.received(),
                self.acquirer.discarded()
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| self.plots_ui(ui));

        let wait = self
            .ticker
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(16));
        ctx.request_repaint_after(wait);
    }
}
