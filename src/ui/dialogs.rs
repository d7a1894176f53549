use std::path::{Path, PathBuf};

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

use crate::error::AnalysisError;
use crate::report::{suggested_file_name, REPORT_EXTENSION};

// ---------------------------------------------------------------------------
// File pickers
// ---------------------------------------------------------------------------

pub fn pick_table_file() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Sélectionner un fichier")
        .add_filter("Fichiers CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("Tous les fichiers pris en charge", &["csv", "parquet", "pq", "json"])
        .pick_file()
}

/// `None` when the user cancels.
pub fn pick_report_destination(source: &Path) -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Enregistrer le rapport")
        .add_filter("Fichiers texte", &[REPORT_EXTENSION])
        .set_file_name(suggested_file_name(source))
        .save_file()
}

// ---------------------------------------------------------------------------
// Message boxes
// ---------------------------------------------------------------------------

pub fn show_error(err: &AnalysisError) {
    log::error!("{err}");
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(err.title())
        .set_description(err.to_string())
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn show_info(title: &str, text: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(text)
        .set_buttons(MessageButtons::Ok)
        .show();
}
