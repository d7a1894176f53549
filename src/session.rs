use std::path::{Path, PathBuf};

use crate::data::histogram::{Histogram, HISTOGRAM_BINS};
use crate::data::loader::load_file;
use crate::data::model::{Column, Table};
use crate::data::stats::Statistics;
use crate::error::AnalysisError;
use crate::report;

// ---------------------------------------------------------------------------
// LoadedTable – a parsed file with its analysis column
// ---------------------------------------------------------------------------

/// Base name of a source file.
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// A table that is known to contain a numeric analysis column.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    source: PathBuf,
    table: Table,
    column: usize,
}

/// A parsed table without any numeric column: viewable, not analysable.
#[derive(Debug, Clone)]
pub struct RejectedTable {
    source: PathBuf,
    table: Table,
}

impl LoadedTable {
    /// Select the first numeric column of `table`, or hand the table back
    /// as rejected when there is none.
    pub fn from_table(source: PathBuf, table: Table) -> Result<Self, RejectedTable> {
        match table.first_numeric_column() {
            Some(column) => Ok(LoadedTable {
                source,
                table,
                column,
            }),
            None => Err(RejectedTable { source, table }),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn file_name(&self) -> String {
        base_name(&self.source)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn column_index(&self) -> usize {
        self.column
    }

    pub fn column(&self) -> &Column {
        &self.table.columns()[self.column]
    }

    pub fn column_name(&self) -> &str {
        &self.column().name
    }

    pub fn value_series(&self) -> Vec<f64> {
        self.column().value_series()
    }

    pub fn statistics(&self) -> Result<Statistics, AnalysisError> {
        Statistics::from_series(&self.value_series()).ok_or(AnalysisError::EmptySeries)
    }
}

// ---------------------------------------------------------------------------
// Analysis – a loaded table plus its statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Analysis {
    loaded: LoadedTable,
    stats: Statistics,
}

impl Analysis {
    pub fn loaded(&self) -> &LoadedTable {
        &self.loaded
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Distribution of the value series, recomputed from the table.
    pub fn histogram(&self) -> Histogram {
        Histogram::from_values(
            &self.loaded.value_series(),
            HISTOGRAM_BINS,
            self.loaded.column_name(),
        )
    }

    pub fn report_text(&self) -> String {
        report::render(
            &self.loaded.file_name(),
            self.loaded.column_name(),
            &self.stats,
        )
    }

    pub fn summary_text(&self) -> String {
        report::summary(self.loaded.column_name(), &self.stats)
    }
}

// ---------------------------------------------------------------------------
// Session – the explicit Unloaded → Loaded → Analyzed state machine (plus Rejected)
// ---------------------------------------------------------------------------

/// `Rejected` holds the last file when it had no numeric column; nothing
/// can be computed from it and no earlier statistics survive.
#[derive(Debug, Clone, Default)]
pub enum Session {
    #[default]
    Unloaded,
    Rejected(RejectedTable),
    Loaded(LoadedTable),
    Analyzed(Analysis),
}

impl Session {
    pub fn loaded(&self) -> Option<&LoadedTable> {
        match self {
            Session::Unloaded | Session::Rejected(_) => None,
            Session::Loaded(loaded) => Some(loaded),
            Session::Analyzed(analysis) => Some(analysis.loaded()),
        }
    }

    /// The most recently loaded table, analysable or not.
    pub fn table(&self) -> Option<&Table> {
        match self {
            Session::Rejected(rejected) => Some(&rejected.table),
            _ => self.loaded().map(LoadedTable::table),
        }
    }

    /// Base name of the most recently loaded file.
    pub fn file_name(&self) -> Option<String> {
        match self {
            Session::Rejected(rejected) => Some(base_name(&rejected.source)),
            _ => self.loaded().map(LoadedTable::file_name),
        }
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        match self {
            Session::Analyzed(analysis) => Some(analysis),
            _ => None,
        }
    }

    pub fn can_compute(&self) -> bool {
        self.loaded().is_some()
    }

    pub fn has_statistics(&self) -> bool {
        self.analysis().is_some()
    }

    /// Replace the session with a freshly loaded file and discard any
    /// previous statistics.  A file that cannot be parsed leaves the session
    /// untouched; a file without a numeric column replaces it as `Rejected`.
    pub fn load(&mut self, path: &Path) -> Result<(), AnalysisError> {
        let table = load_file(path)?;
        log::info!(
            "Loaded {} rows with columns {:?} from {}",
            table.len(),
            table.column_names(),
            path.display()
        );

        match LoadedTable::from_table(path.to_path_buf(), table) {
            Ok(loaded) => {
                *self = Session::Loaded(loaded);
                Ok(())
            }
            Err(rejected) => {
                *self = Session::Rejected(rejected);
                Err(AnalysisError::NoNumericColumn)
            }
        }
    }

    /// Compute statistics for the loaded column and move to `Analyzed`.
    pub fn compute(&mut self) -> Result<Statistics, AnalysisError> {
        let stats = self
            .loaded()
            .ok_or(AnalysisError::NotLoaded)?
            .statistics()?;

        *self = match std::mem::take(self) {
            Session::Loaded(loaded) | Session::Analyzed(Analysis { loaded, .. }) => {
                Session::Analyzed(Analysis { loaded, stats })
            }
            other => {
                *self = other;
                return Err(AnalysisError::NotLoaded);
            }
        };
        Ok(stats)
    }

    pub fn visualize(&self) -> Result<Histogram, AnalysisError> {
        self.analysis()
            .map(Analysis::histogram)
            .ok_or(AnalysisError::StatsNotReady)
    }

    /// Write the report to `dest` (`.txt` appended when it has no
    /// extension) and return the path actually written.
    pub fn report(&self, dest: &Path) -> Result<PathBuf, AnalysisError> {
        let analysis = self.analysis().ok_or(AnalysisError::StatsNotReady)?;
        let dest = report::with_default_extension(dest.to_path_buf());
        report::write(&dest, &analysis.report_text())?;
        log::info!("Report written to {}", dest.display());
        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::data::model::CellValue;

    fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn text_then_numeric_column_scenario() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "data.csv", "A,B\nx,10\ny,20\nz,30\n");

        let mut session = Session::default();
        session.load(&path).unwrap();
        assert_eq!(session.loaded().unwrap().column_name(), "B");

        let stats = session.compute().unwrap();
        assert_eq!(
            stats,
            Statistics { mean: 20.0, min: 10.0, max: 30.0, median: 20.0 }
        );
        assert!(session.has_statistics());
    }

    #[test]
    fn first_numeric_column_wins() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "data.csv", "label,first,second\na,1,100\nb,2,200\n");

        let mut session = Session::default();
        session.load(&path).unwrap();
        assert_eq!(session.loaded().unwrap().column_name(), "first");
        assert_eq!(session.loaded().unwrap().column_index(), 1);
    }

    #[test]
    fn no_numeric_column_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "text.csv", "a,b\nx,y\nz,w\n");

        let mut session = Session::default();
        let err = session.load(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::NoNumericColumn));
        assert_eq!(session.file_name().as_deref(), Some("text.csv"));
        assert_eq!(session.table().unwrap().len(), 2);
        assert!(!session.can_compute());
        assert!(matches!(session.compute(), Err(AnalysisError::NotLoaded)));
        assert!(matches!(session.visualize(), Err(AnalysisError::StatsNotReady)));
    }

    #[test]
    fn unreadable_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::default();
        let err = session.load(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(_)));
        assert!(session.loaded().is_none());
    }

    #[test]
    fn parse_error_keeps_previous_session() {
        let dir = TempDir::new().unwrap();
        let good = write_csv(&dir, "good.csv", "v\n1\n2\n");
        let broken = write_csv(&dir, "broken.csv", "a,b\n1,2,3\n");

        let mut session = Session::default();
        session.load(&good).unwrap();
        session.compute().unwrap();
        assert!(matches!(session.load(&broken), Err(AnalysisError::Parse(_))));
        assert!(session.has_statistics());
        assert_eq!(session.file_name().as_deref(), Some("good.csv"));
    }

    #[test]
    fn no_numeric_column_drops_previous_analysis() {
        let dir = TempDir::new().unwrap();
        let good = write_csv(&dir, "good.csv", "v\n1\n2\n");
        let text = write_csv(&dir, "text.csv", "t\nx\n");
        let dest = dir.path().join("rapport.txt");

        let mut session = Session::default();
        session.load(&good).unwrap();
        session.compute().unwrap();
        assert!(matches!(session.load(&text), Err(AnalysisError::NoNumericColumn)));

        assert!(!session.has_statistics());
        assert!(!session.can_compute());
        assert_eq!(session.file_name().as_deref(), Some("text.csv"));
        assert!(matches!(session.compute(), Err(AnalysisError::NotLoaded)));
        assert!(matches!(session.visualize(), Err(AnalysisError::StatsNotReady)));
        assert!(matches!(session.report(&dest), Err(AnalysisError::StatsNotReady)));
        assert!(!dest.exists());
        // compute on a rejected table must not lose it
        assert_eq!(session.table().unwrap().column_names(), vec!["t"]);
    }

    #[test]
    fn all_missing_column_is_empty_series() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "missing.csv", "name,v\na,\nb,NA\n");

        let mut session = Session::default();
        session.load(&path).unwrap();
        assert!(matches!(session.compute(), Err(AnalysisError::EmptySeries)));
        assert!(!session.has_statistics());
        assert!(session.can_compute());
    }

    #[test]
    fn compute_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "data.csv", "v\n3\n1\n2\n");

        let mut session = Session::default();
        session.load(&path).unwrap();
        let first = session.compute().unwrap();
        let second = session.compute().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn reload_invalidates_statistics() {
        let dir = TempDir::new().unwrap();
        let one = write_csv(&dir, "one.csv", "v\n1\n2\n");
        let two = write_csv(&dir, "two.csv", "w\n5\n6\n");

        let mut session = Session::default();
        session.load(&one).unwrap();
        session.compute().unwrap();
        session.load(&two).unwrap();
        assert!(!session.has_statistics());
        assert!(matches!(session.report(&dir.path().join("r.txt")), Err(AnalysisError::StatsNotReady)));
    }

    #[test]
    fn report_before_compute_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "data.csv", "v\n1\n");
        let dest = dir.path().join("rapport.txt");

        let mut session = Session::default();
        session.load(&path).unwrap();
        assert!(matches!(session.report(&dest), Err(AnalysisError::StatsNotReady)));
        assert!(!dest.exists());
    }

    #[test]
    fn report_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "valeurs.csv", "nom,x\na,1\nb,2\nc,3\nd,4\n");
        let dest = dir.path().join("rapport");

        let mut session = Session::default();
        session.load(&path).unwrap();
        session.compute().unwrap();
        let written = session.report(&dest).unwrap();

        assert_eq!(written, dir.path().join("rapport.txt"));
        let text = fs::read_to_string(&written).unwrap();
        assert_eq!(
            text,
            "Rapport d'analyse pour valeurs.csv\nColonne analysée : x\n\nStatistiques :\n\
             Moyenne: 2.50\nMin: 1.00\nMax: 4.00\nMédiane: 2.50\n\nRapport généré avec succès."
        );
    }

    #[test]
    fn visualize_uses_loaded_column() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "data.csv", "A,B\nx,10\ny,\nz,30\n");

        let mut session = Session::default();
        session.load(&path).unwrap();
        assert!(matches!(session.visualize(), Err(AnalysisError::StatsNotReady)));
        session.compute().unwrap();

        let hist = session.visualize().unwrap();
        assert_eq!(hist.title, "Histogramme de B");
        assert_eq!(hist.counts.len(), HISTOGRAM_BINS);
        assert_eq!(hist.total(), 2);
    }

    #[test]
    fn loaded_table_from_memory() {
        let table = Table::from_columns(vec![
            Column::infer("t", vec![CellValue::Text("a".into()), CellValue::Text("b".into())]),
            Column::infer("v", vec![CellValue::Missing, CellValue::Number(4.0)]),
        ]);
        let loaded = LoadedTable::from_table(PathBuf::from("/data/v.csv"), table).unwrap();
        assert_eq!(loaded.file_name(), "v.csv");
        assert_eq!(loaded.column_name(), "v");
        assert_eq!(loaded.value_series(), vec![4.0]);
        assert_eq!(loaded.statistics().unwrap().median, 4.0);

        let text_only = Table::from_columns(vec![Column::infer("t", vec![CellValue::Text("a".into())])]);
        assert!(LoadedTable::from_table(PathBuf::from("t.csv"), text_only).is_err());
    }
}
