//! Offline analysis window: rise and oscillation segments side by side.

use eframe::egui;
use egui::Color32;
use egui_plot::{Arrows, HLine, Legend, Line, LineStyle, Plot, PlotPoints, Polygon};

use crate::analysis::{AnalysisReport, BandOverlay, Segment};

const BAND_COLOR: Color32 = Color32::from_rgb(100, 149, 237);

pub struct AnalysisApp {
    source_name: String,
    report: AnalysisReport,
}

impl AnalysisApp {
    pub fn new(source_name: impl Into<String>, report: AnalysisReport) -> Self {
        Self {
            source_name: source_name.into(),
            report,
        }
    }
}

fn segment_plot(ui: &mut egui::Ui, id: &str, name: &str, segment: &Segment, band: Option<&BandOverlay>) {
    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label("Time (s)")
        .y_axis_label("Temperature (C)")
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(name, segment.points()));

            let Some(band) = band else { return };
            let t_end = segment.time.last().copied().unwrap_or(0.0);
            let corners = vec![
                [0.0, band.lower],
                [t_end, band.lower],
                [t_end, band.upper],
                [0.0, band.upper],
            ];
            plot_ui.polygon(
                Polygon::new("Band", PlotPoints::from(corners))
                    .fill_color(BAND_COLOR.gamma_multiply(0.25))
                    .stroke(egui::Stroke::new(1.0, BAND_COLOR)),
            );
            plot_ui.hline(HLine::new(format!("Mean {:.2} C", band.mean), band.mean).color(BAND_COLOR));
            plot_ui.hline(
                HLine::new(format!("Setpoint {:.2} C", band.setpoint), band.setpoint)
                    .color(Color32::RED)
                    .style(LineStyle::Dashed { length: 8.0 }),
            );

            // Double arrow between setpoint and mean showing the steady-state offset.
            let x = t_end * 0.9;
            let mid = (band.mean + band.setpoint) / 2.0;
            plot_ui.arrows(
                Arrows::new(
                    format!("Offset {:+.2} C", band.offset),
                    vec![[x, mid], [x, mid]],
                    vec![[x, band.setpoint], [x, band.mean]],
                )
                .color(Color32::YELLOW),
            );
        });
}

impl eframe::App for AnalysisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let r = &self.report;
        egui::TopBottomPanel::top("analysis_summary").show(ctx, |ui| {
            ui.heading(&self.source_name);
            ui.label(format!(
                "Minimum at row {} · first crossing at row {} · rise time {:.2} s",
                r.minimum_index, r.crossing_index, r.rise_time_s
            ));
            if let Some(band) = &r.band {
                ui.label(format!(
                    "Oscillation mean {:.3} C · offset from setpoint {:+.3} C",
                    band.mean, band.offset
                ));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                segment_plot(&mut cols[0], "rise", "Rise", &r.rise, None);
                segment_plot(
                    &mut cols[1],
                    "oscillation",
                    "Oscillation",
                    &r.oscillation,
                    r.band.as_ref(),
                );
            });
        });
    }
}
