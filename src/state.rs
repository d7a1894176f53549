use std::path::Path;

use crate::data::histogram::Histogram;
use crate::data::stats::Statistics;
use crate::error::AnalysisError;
use crate::session::Session;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded file and statistics.
    pub session: Session,

    /// Histogram shown in the plot window (None when the window is closed).
    pub histogram: Option<Histogram>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load a new file.  Whenever the session is replaced (including a file
    /// without numeric columns) the plot window closes and the status line is
    /// cleared; an unreadable file changes nothing.
    pub fn open_file(&mut self, path: &Path) -> Result<(), AnalysisError> {
        let result = self.session.load(path);
        if !matches!(result, Err(AnalysisError::Parse(_))) {
            self.histogram = None;
            self.status_message = None;
        }
        result
    }

    /// Compute statistics, refreshing an open histogram window.
    pub fn calculate(&mut self) -> Result<Statistics, AnalysisError> {
        let stats = self.session.compute()?;
        if self.histogram.is_some() {
            self.histogram = Some(self.session.visualize()?);
        }
        Ok(stats)
    }

    /// Open (or refresh) the histogram window.
    pub fn show_histogram(&mut self) -> Result<(), AnalysisError> {
        self.histogram = Some(self.session.visualize()?);
        Ok(())
    }

    /// Label describing the loaded file.
    pub fn file_label(&self) -> String {
        match self.session.file_name() {
            Some(name) => format!("Fichier : {name}"),
            None => "Aucun fichier sélectionné".to_string(),
        }
    }
}
