use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Table preview (central panel)
// ---------------------------------------------------------------------------

/// Render the loaded table; the analysis column is highlighted.
pub fn table_preview(ui: &mut Ui, state: &AppState) {
    let Some(table) = state.session.table() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Sélectionnez un fichier CSV pour commencer");
        });
        return;
    };

    let analysed = state.session.loaded().map(|loaded| loaded.column_index());

    ui.label(format!(
        "{} lignes, {} colonnes",
        table.len(),
        table.columns().len()
    ));
    if analysed.is_none() {
        ui.label(
            RichText::new("Aucune colonne numérique : analyse impossible.").color(Color32::RED),
        );
    }
    ui.separator();

    if table.is_empty() {
        ui.label("Aucune ligne.");
        return;
    }

    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(TableColumn::auto().at_least(40.0))
            .columns(TableColumn::auto().at_least(80.0), table.columns().len())
            .header(36.0, |mut header| {
                header.col(|ui: &mut Ui| {
                    ui.strong("#");
                });
                for (idx, col) in table.columns().iter().enumerate() {
                    header.col(|ui: &mut Ui| {
                        let mut title = RichText::new(&col.name).strong();
                        if Some(idx) == analysed {
                            title = title.color(Color32::LIGHT_BLUE);
                        }
                        ui.vertical(|ui: &mut Ui| {
                            ui.label(title);
                            ui.small(col.kind.to_string());
                        });
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, table.len(), |mut row| {
                    let row_idx = row.index();
                    row.col(|ui: &mut Ui| {
                        ui.monospace(row_idx.to_string());
                    });
                    for col in table.columns() {
                        row.col(|ui: &mut Ui| {
                            ui.label(col.cells[row_idx].to_string());
                        });
                    }
                });
            });
    });
}
