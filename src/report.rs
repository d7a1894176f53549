use std::path::{Path, PathBuf};

use crate::data::stats::Statistics;
use crate::error::AnalysisError;

/// Extension given to report files saved without one.
pub const REPORT_EXTENSION: &str = "txt";

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

/// Render the plain-text report.  No trailing newline after the last line.
pub fn render(source_name: &str, column: &str, stats: &Statistics) -> String {
    let mut out = String::new();
    out.push_str(&format!("Rapport d'analyse pour {source_name}\n"));
    out.push_str(&format!("Colonne analysée : {column}\n\n"));
    out.push_str("Statistiques :\n");
    for line in stats.lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("\nRapport généré avec succès.");
    out
}

/// Body of the "Statistiques" dialog.
pub fn summary(column: &str, stats: &Statistics) -> String {
    let mut lines = vec![format!("Colonne analysée : {column}")];
    lines.extend(stats.lines());
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Write `text` to `dest`.
pub fn write(dest: &Path, text: &str) -> Result<(), AnalysisError> {
    std::fs::write(dest, text).map_err(|source| AnalysisError::Write {
        path: dest.to_path_buf(),
        source,
    })
}

/// Append `.txt` when the chosen path has no extension.
pub fn with_default_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension(REPORT_EXTENSION);
    }
    path
}

/// File name suggested in the save dialog.
pub fn suggested_file_name(source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "donnees".to_string());
    format!("rapport_{stem}.{REPORT_EXTENSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> Statistics {
        Statistics::from_series(&[1.0, 2.0, 3.0, 4.0]).unwrap()
    }

    #[test]
    fn report_matches_template() {
        let text = render("mesures.csv", "valeur", &sample_stats());
        assert_eq!(
            text,
            "Rapport d'analyse pour mesures.csv\n\
             Colonne analysée : valeur\n\
             \n\
             Statistiques :\n\
             Moyenne: 2.50\n\
             Min: 1.00\n\
             Max: 4.00\n\
             Médiane: 2.50\n\
             \n\
             Rapport généré avec succès."
        );
    }

    #[test]
    fn summary_starts_with_column() {
        let text = summary("B", &sample_stats());
        assert_eq!(
            text,
            "Colonne analysée : B\nMoyenne: 2.50\nMin: 1.00\nMax: 4.00\nMédiane: 2.50"
        );
    }

    #[test]
    fn default_extension_is_added_only_when_absent() {
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/rapport")),
            PathBuf::from("/tmp/rapport.txt")
        );
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/rapport.log")),
            PathBuf::from("/tmp/rapport.log")
        );
    }

    #[test]
    fn suggested_name_uses_source_stem() {
        assert_eq!(suggested_file_name(Path::new("/data/ventes.csv")), "rapport_ventes.txt");
    }

    #[test]
    fn unwritable_destination_is_a_write_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let dest = dir.path().join("missing").join("rapport.txt");
        let err = write(&dest, "x").unwrap_err();
        assert!(matches!(err, AnalysisError::Write { ref path, .. } if path == &dest));
    }
}
