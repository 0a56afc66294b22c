pub mod app;
pub mod dialogs;
pub mod form;

pub use app::GsearchApp;

/// Entry point: launch the native GUI window
pub fn run() -> crate::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("GSearch — Google Advanced Search Builder")
            .with_inner_size([960.0, 800.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GSearch",
        native_options,
        Box::new(|cc| Ok(Box::new(app::GsearchApp::new(cc)))),
    )
    .map_err(|e| crate::GsearchError::GuiError(e.to_string()))
}
