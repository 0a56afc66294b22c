//! Dialogs and OS integration helpers (clipboard, browser).

use eframe::egui;

// ============================================================================
// About dialog
// ============================================================================

/// Returns true while the dialog should remain open.
pub fn show_about_dialog(ctx: &egui::Context) -> bool {
    let mut open = true;

    egui::Window::new("About GSearch")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("GSearch");
                ui.label(format!("Version {}", crate::VERSION));
                ui.add_space(10.0);
                ui.label("Build advanced Google queries with operators");
                ui.label("and open them in your browser.");
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    open = false;
                }
            });
        });

    open
}

// ============================================================================
// OS helpers (clipboard, browser)
// ============================================================================

/// Copy text to the system clipboard. Returns false when the clipboard is
/// unavailable.
pub fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => clipboard.set_text(text.to_owned()).is_ok(),
        Err(_) => false,
    }
}

/// Hand a URL to the OS default browser.
pub fn open_in_browser(url: &str) -> std::io::Result<()> {
    open::that(url)
}
