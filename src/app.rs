use std::path::PathBuf;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, preview};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct CsvAnalyzerApp {
    pub state: AppState,
}

impl CsvAnalyzerApp {
    /// Start the app, optionally loading `initial_file` straight away.  A
    /// failed startup load is reported on the status line.
    pub fn new(initial_file: Option<PathBuf>) -> Self {
        let mut state = AppState::default();
        if let Some(path) = initial_file {
            if let Err(e) = state.open_file(&path) {
                log::error!("Failed to load {}: {e}", path.display());
                state.status_message = Some(e.to_string());
            }
        }
        Self { state }
    }
}

impl eframe::App for CsvAnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Left side panel: actions + statistics ----
        egui::SidePanel::left("action_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::action_panel(ui, &mut self.state);
            });

        // ---- Central panel: table preview ----
        egui::CentralPanel::default().show(ctx, |ui| {
            preview::table_preview(ui, &self.state);
        });

        // ---- Floating histogram window ----
        plot::histogram_window(ctx, &mut self.state);
    }
}
