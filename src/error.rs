use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy surfaced to the user
// ---------------------------------------------------------------------------

/// Every way a user action can fail.  The `Display` text is the message shown
/// in the error dialog.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Erreur lors de la lecture du fichier : {0}")]
    Parse(String),

    #[error("Aucune colonne numérique trouvée dans le fichier.")]
    NoNumericColumn,

    #[error("Veuillez d'abord sélectionner un fichier.")]
    NotLoaded,

    #[error("Aucune valeur numérique dans la colonne.")]
    EmptySeries,

    #[error("Veuillez d'abord calculer les statistiques.")]
    StatsNotReady,

    #[error("Impossible d'écrire le rapport dans {} : {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalysisError {
    /// Short dialog title.
    pub fn title(&self) -> &'static str {
        "Erreur"
    }
}

impl From<anyhow::Error> for AnalysisError {
    fn from(err: anyhow::Error) -> Self {
        AnalysisError::Parse(format!("{err:#}"))
    }
}
