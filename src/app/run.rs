//! Top-level entry point for running the viewer as a native window.

use eframe::egui;

use crate::config::ViewerConfig;

use super::BreathApp;

/// Launch the viewer in a native window. Blocks until the window is closed.
///
/// If `cfg.initial_path` is set, that file or URL is loaded before the first frame;
/// a failure is shown in the status line rather than aborting.
pub fn run_viewer(cfg: ViewerConfig) -> eframe::Result<()> {
    let mut app = BreathApp::new(cfg);
    if let Some(path) = app.config.initial_path.clone() {
        let location = path.to_string_lossy();
        if let Err(e) = app.load_location(&location) {
            log::warn!("initial load of {} failed: {}", location, e);
        }
    }

    let title = app.config.window.title.clone();
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size(egui::Vec2::from(app.config.window.inner_size)),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| {
            // Phosphor icons on the toolbar buttons.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
