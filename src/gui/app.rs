//! Main GSearch application
//!
//! Immediate-mode shell around the pure builders: any widget change sets a
//! single `changed` flag and one `update_preview()` recomputes the preview
//! from the gathered criteria. There are no per-widget change handlers.

use std::time::{Duration, Instant};

use eframe::egui;

use crate::criteria::SearchCriteria;
use crate::error::GsearchError;
use crate::gui::dialogs;
use crate::gui::form::FormState;
use crate::recent::RecentStore;
use crate::url::{build_url_params, SEARCH_ENDPOINT};
use crate::{logging, presets};

/// How long a transient status message stays up.
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Transient status line shown in the bottom bar.
struct StatusLine {
    text: String,
    set_at: Instant,
}

impl StatusLine {
    fn new() -> Self {
        Self {
            text: String::new(),
            set_at: Instant::now(),
        }
    }

    fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.set_at = Instant::now();
    }

    fn is_active(&self) -> bool {
        !self.text.is_empty() && self.set_at.elapsed() < STATUS_TTL
    }

    fn current(&self) -> &str {
        if self.is_active() {
            &self.text
        } else {
            "Ready"
        }
    }
}

/// Main application state
pub struct GsearchApp {
    /// Widget-backed form fields
    form: FormState,
    /// URL parameter preview for the current form state
    preview: String,
    /// Persisted recent searches
    recent: RecentStore,
    /// Selection in the recent list
    selected_recent: Option<usize>,
    /// Show about dialog
    show_about: bool,
    /// Status bar message
    status: StatusLine,
}

impl Default for GsearchApp {
    fn default() -> Self {
        Self {
            form: FormState::new(),
            preview: String::new(),
            recent: RecentStore::new(RecentStore::default_path()),
            selected_recent: None,
            show_about: false,
            status: StatusLine::new(),
        }
    }
}

impl GsearchApp {
    /// Create the app and pull the recent list from disk.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mut app = Self::default();

        if let Err(e) = app.recent.load() {
            logging::warn("RECENT", &format!("could not load recent file: {}", e));
            app.status.set(format!("Could not load recent searches: {}", e));
        } else {
            logging::info(
                "RECENT",
                &format!("loaded {} recent searches", app.recent.len()),
            );
        }

        app.update_preview();
        app
    }

    /// Recompute the preview from the current form state. The only place
    /// criteria are gathered and the builders run.
    fn update_preview(&mut self) {
        self.preview = build_url_params(&self.form.criteria());
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    fn copy_preview(&mut self) {
        if self.preview.is_empty() {
            self.status.set("Nothing to copy");
            return;
        }
        if dialogs::copy_to_clipboard(&self.preview) {
            self.status.set("Query copied to clipboard");
        } else {
            self.status.set("Clipboard unavailable");
        }
    }

    fn open_in_browser(&mut self) {
        if self.preview.is_empty() {
            self.status.set("Nothing to search");
            return;
        }
        let url = format!("{}{}", SEARCH_ENDPOINT, self.preview);
        match dialogs::open_in_browser(&url) {
            Ok(()) => {
                logging::info("BROWSER", &format!("opened {}", url));
                self.status.set("Opened browser");
            }
            Err(e) => {
                logging::error("BROWSER", &format!("could not open browser: {}", e));
                self.status.set(format!("Could not open browser: {}", e));
            }
        }
    }

    fn save_current(&mut self) {
        match self.recent.save(self.form.criteria()) {
            Ok(()) => {
                self.selected_recent = None;
                self.status.set("Saved to recent");
            }
            Err(GsearchError::EmptyQuery) => self.status.set("Nothing to save"),
            Err(e) => {
                logging::error("RECENT", &format!("save failed: {}", e));
                self.status.set(format!("Could not write recent file: {}", e));
            }
        }
    }

    fn clear_all(&mut self) {
        self.form.clear();
        self.update_preview();
        self.status.set("All fields cleared");
    }

    fn load_recent(&mut self, index: usize) {
        let Some(criteria) = self.recent.get(index).map(|entry| entry.criteria.clone()) else {
            self.status.set("Invalid recent selection");
            return;
        };
        self.form.apply(&criteria);
        self.selected_recent = Some(index);
        self.update_preview();
        self.status.set("Loaded recent search");
    }

    fn delete_selected(&mut self) {
        let Some(index) = self.selected_recent else {
            self.status.set("Select an item to delete");
            return;
        };
        match self.recent.delete(index) {
            Ok(()) => {
                self.selected_recent = None;
                self.status.set("Deleted recent item");
            }
            Err(e @ GsearchError::InvalidSelection { .. }) => {
                self.status.set(format!("{}", e));
            }
            Err(e) => {
                // Entry is gone from memory; only the rewrite failed.
                self.selected_recent = None;
                logging::error("RECENT", &format!("delete failed: {}", e));
                self.status.set(format!("Failed to delete: {}", e));
            }
        }
    }

    fn apply_preset(&mut self, criteria: &SearchCriteria) {
        self.form.apply(criteria);
        self.update_preview();
        self.status.set("Example loaded");
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::CTRL, egui::Key::Enter)) {
            self.open_in_browser();
        }
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::CTRL, egui::Key::S)) {
            self.save_current();
        }
    }

    /// Render menu bar
    fn render_menu(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Clear all").clicked() {
                        self.clear_all();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Examples", |ui| {
                    for preset in presets::all() {
                        if ui.button(preset.label).clicked() {
                            self.apply_preset(&preset.criteria());
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About GSearch").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Render status bar
    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status.current());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} recent", self.recent.len()));
                });
            });
        });
    }

    /// Render the recent queries side panel
    fn render_recent_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("recent_panel")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Recent queries");
                ui.separator();

                let mut load_request = None;
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .max_height(ui.available_height() - 40.0)
                    .show(ui, |ui| {
                        for (index, entry) in self.recent.entries().iter().enumerate() {
                            let selected = self.selected_recent == Some(index);
                            let response = ui.selectable_label(selected, &entry.query);
                            if response.clicked() {
                                self.selected_recent = Some(index);
                            }
                            if response.double_clicked() {
                                load_request = Some(index);
                            }
                        }
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Load").clicked() {
                        match self.selected_recent {
                            Some(index) => load_request = Some(index),
                            None => self.status.set("No recent item selected"),
                        }
                    }
                    if ui.button("Delete").clicked() {
                        self.delete_selected();
                    }
                });

                if let Some(index) = load_request {
                    self.load_recent(index);
                }
            });
    }

    /// Render the form, preview and controls
    fn render_central(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let mut changed = false;

                changed |= self.form.show_fields(ui);
                ui.add_space(8.0);
                changed |= self.form.show_image_options(ui);
                ui.add_space(8.0);

                ui.label(egui::RichText::new("Preview URL parameters:").strong());
                let mut preview_text = self.preview.as_str();
                ui.add(
                    egui::TextEdit::multiline(&mut preview_text)
                        .hint_text("<empty - enter search terms>")
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(4.0);

                changed |= self.form.show_search_type(ui);
                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    if ui.button("Copy").clicked() {
                        self.copy_preview();
                    }
                    if ui
                        .button("Search in browser")
                        .on_hover_text("Ctrl+Enter")
                        .clicked()
                    {
                        self.open_in_browser();
                    }
                    if ui
                        .button("Save to Recent")
                        .on_hover_text("Ctrl+S")
                        .clicked()
                    {
                        self.save_current();
                    }
                    if ui.button("Clear all").clicked() {
                        self.clear_all();
                    }
                });

                if changed {
                    self.update_preview();
                }
            });
        });
    }

    /// Render about dialog
    fn render_about_dialog(&mut self, ctx: &egui::Context) {
        if self.show_about {
            self.show_about = dialogs::show_about_dialog(ctx);
        }
    }
}

impl eframe::App for GsearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        self.render_menu(ctx);
        self.render_status_bar(ctx);
        self.render_recent_panel(ctx);
        self.render_central(ctx);
        self.render_about_dialog(ctx);

        // Repaint while a transient status is up so it expires on screen.
        if self.status.is_active() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
