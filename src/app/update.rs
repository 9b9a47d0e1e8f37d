//! Per-frame rendering for [`BreathApp`].

use eframe::egui;
use egui_phosphor::regular as icons;

use crate::data::viewport::ZoomDirection;

use super::BreathApp;

impl eframe::App for BreathApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.render_file_row(ui);
            self.render_zoom_row(ui);
            if let Some(err) = self.last_error() {
                ui.colored_label(egui::Color32::RED, err);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(analysis) = self.state.analysis() {
                ui.vertical_centered(|ui| ui.heading(analysis.summary.to_string()));
            }
            if self.plot_view.show(ui, &mut self.state, &self.config.render) {
                ctx.request_repaint();
            }
        });
    }
}

impl BreathApp {
    fn render_file_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("CSV File Path or URL:");
            let resp =
                ui.add(egui::TextEdit::singleline(&mut self.path_input).desired_width(480.0));
            let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.button(format!("{} Browse…", icons::FOLDER_OPEN)).clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("CSV", &["csv", "txt"])
                    .pick_file()
                {
                    self.path_input = path.display().to_string();
                }
            }

            if ui.button(format!("{} Plot Graph", icons::CHART_LINE)).clicked() || submitted {
                self.load_from_input();
            }
        });
    }

    fn render_zoom_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let active = self.state.viewport().is_some();
            ui.add_enabled_ui(active, |ui| {
                if ui
                    .button(format!("{} Zoom In", icons::MAGNIFYING_GLASS_PLUS))
                    .clicked()
                {
                    self.state.zoom(ZoomDirection::In);
                }
                if ui
                    .button(format!("{} Zoom Out", icons::MAGNIFYING_GLASS_MINUS))
                    .clicked()
                {
                    self.state.zoom(ZoomDirection::Out);
                }
                if ui
                    .button(format!("{} Reset Zoom", icons::ARROW_COUNTER_CLOCKWISE))
                    .clicked()
                {
                    self.state.reset_view();
                }
            });
            let label = match self.state.zoom_percent() {
                Some(p) => format!("Zoom: {}%", p as i64),
                None => "Zoom: -".to_string(),
            };
            ui.strong(label);
        });
    }
}
