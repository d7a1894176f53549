use eframe::egui::{self, Button, Color32, RichText, Ui};

use crate::error::AnalysisError;
use crate::state::AppState;
use crate::ui::dialogs;

// ---------------------------------------------------------------------------
// Left side panel – the four actions
// ---------------------------------------------------------------------------

/// Render the action panel: file selection, the gated analysis buttons and
/// the last computed statistics.
pub fn action_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Analyseur CSV");
    ui.separator();

    ui.vertical_centered_justified(|ui: &mut Ui| {
        if ui.button("Sélectionner un fichier CSV").clicked() {
            select_file(state);
        }
        ui.label(state.file_label());
        ui.add_space(10.0);

        let can_compute = state.session.can_compute();
        let has_stats = state.session.has_statistics();

        if ui
            .add_enabled(can_compute, Button::new("Calculer Moyenne, Min, Max, Médiane"))
            .clicked()
        {
            calculate_stats(state);
        }
        ui.add_space(10.0);

        if ui
            .add_enabled(has_stats, Button::new("Afficher Graphique"))
            .clicked()
        {
            show_plot(state);
        }
        ui.add_space(10.0);

        if ui
            .add_enabled(has_stats, Button::new("Générer Rapport"))
            .clicked()
        {
            generate_report(state);
        }
    });

    ui.separator();
    statistics_grid(ui, state);

    if let Some(msg) = &state.status_message {
        ui.separator();
        ui.label(RichText::new(msg).color(Color32::RED));
    }
}

fn statistics_grid(ui: &mut Ui, state: &AppState) {
    let Some(analysis) = state.session.analysis() else {
        return;
    };

    ui.strong(format!("Colonne analysée : {}", analysis.loaded().column_name()));
    egui::Grid::new("statistics_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            for (label, value) in analysis.statistics().entries() {
                ui.label(label);
                ui.monospace(format!("{value:.2}"));
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

fn select_file(state: &mut AppState) {
    let Some(path) = dialogs::pick_table_file() else {
        return;
    };
    if let Err(e) = state.open_file(&path) {
        dialogs::show_error(&e);
    }
}

fn calculate_stats(state: &mut AppState) {
    match state.calculate() {
        Ok(_) => {
            if let Some(analysis) = state.session.analysis() {
                log::info!(
                    "Computed statistics for column '{}': {:?}",
                    analysis.loaded().column_name(),
                    analysis.statistics()
                );
                dialogs::show_info("Statistiques", &analysis.summary_text());
            }
        }
        Err(e) => dialogs::show_error(&e),
    }
}

fn show_plot(state: &mut AppState) {
    if let Err(e) = state.show_histogram() {
        dialogs::show_error(&e);
    }
}

fn generate_report(state: &mut AppState) {
    let Some(analysis) = state.session.analysis() else {
        dialogs::show_error(&AnalysisError::StatsNotReady);
        return;
    };
    let Some(dest) = dialogs::pick_report_destination(analysis.loaded().source()) else {
        log::debug!("Report save canceled");
        return;
    };
    match state.session.report(&dest) {
        Ok(written) => {
            dialogs::show_info("Succès", &format!("Rapport sauvegardé dans {}", written.display()));
        }
        Err(e) => dialogs::show_error(&e),
    }
}
