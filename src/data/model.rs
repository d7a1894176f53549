use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single parsed cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value, as inferred from the source file.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Bool(bool),
    Text(String),
    Missing,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Missing => write!(f, "NaN"),
        }
    }
}

impl CellValue {
    /// The numeric payload, skipping NaN which counts as missing.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }

    fn is_missing(&self) -> bool {
        match self {
            CellValue::Missing => true,
            CellValue::Number(v) => v.is_nan(),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Boolean,
    Text,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColumnKind::Numeric => "numérique",
            ColumnKind::Boolean => "booléen",
            ColumnKind::Text => "texte",
        };
        f.write_str(label)
    }
}

/// One named column of the table.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub cells: Vec<CellValue>,
}

impl Column {
    /// Build a column with an explicit kind (typed sources such as Parquet).
    pub fn new(name: impl Into<String>, kind: ColumnKind, cells: Vec<CellValue>) -> Self {
        Column {
            name: name.into(),
            kind,
            cells,
        }
    }

    /// Build a column and infer its kind from the cells.
    ///
    /// A column is numeric when it has at least one row and every
    /// non-missing cell is a number; an all-missing column is numeric too.
    pub fn infer(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        let present: Vec<&CellValue> = cells.iter().filter(|c| !c.is_missing()).collect();
        let kind = if cells.is_empty() {
            ColumnKind::Text
        } else if present.iter().all(|c| matches!(c, CellValue::Number(_))) {
            ColumnKind::Numeric
        } else if present.iter().all(|c| matches!(c, CellValue::Bool(_))) {
            ColumnKind::Boolean
        } else {
            ColumnKind::Text
        };
        Column::new(name, kind, cells)
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == ColumnKind::Numeric
    }

    /// Numeric values with missing entries dropped, in row order.
    pub fn value_series(&self) -> Vec<f64> {
        if !self.is_numeric() {
            return Vec::new();
        }
        self.cells.iter().filter_map(CellValue::as_f64).collect()
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded file
// ---------------------------------------------------------------------------

/// Ordered named columns sharing one row count.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Assemble a table; shorter columns are padded with missing cells.
    pub fn from_columns(mut columns: Vec<Column>) -> Self {
        let row_count = columns.iter().map(|c| c.cells.len()).max().unwrap_or(0);
        for col in &mut columns {
            col.cells.resize(row_count, CellValue::Missing);
        }
        Table { columns, row_count }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.row_count
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Index of the first numeric column in file order.
    pub fn first_numeric_column(&self) -> Option<usize> {
        self.columns.iter().position(Column::is_numeric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_numeric_with_missing_cells() {
        let col = Column::infer(
            "b",
            vec![CellValue::Number(1.0), CellValue::Missing, CellValue::Number(3.0)],
        );
        assert_eq!(col.kind, ColumnKind::Numeric);
        assert_eq!(col.value_series(), vec![1.0, 3.0]);
    }

    #[test]
    fn all_missing_column_is_numeric_but_empty() {
        let col = Column::infer("b", vec![CellValue::Missing, CellValue::Missing]);
        assert!(col.is_numeric());
        assert!(col.value_series().is_empty());
    }

    #[test]
    fn rowless_column_is_not_numeric() {
        assert_eq!(Column::infer("b", Vec::new()).kind, ColumnKind::Text);
    }

    #[test]
    fn mixed_column_is_text() {
        let col = Column::infer(
            "a",
            vec![CellValue::Number(1.0), CellValue::Text("x".into())],
        );
        assert_eq!(col.kind, ColumnKind::Text);
        assert!(col.value_series().is_empty());
    }

    #[test]
    fn nan_numbers_are_dropped_from_series() {
        let col = Column::infer("a", vec![CellValue::Number(f64::NAN), CellValue::Number(2.0)]);
        assert!(col.is_numeric());
        assert_eq!(col.value_series(), vec![2.0]);
    }

    #[test]
    fn table_pads_short_columns_and_finds_first_numeric() {
        let table = Table::from_columns(vec![
            Column::infer("flag", vec![CellValue::Bool(true), CellValue::Bool(false)]),
            Column::infer("x", vec![CellValue::Number(1.0)]),
            Column::infer("y", vec![CellValue::Number(5.0), CellValue::Number(6.0)]),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns()[1].cells[1], CellValue::Missing);
        assert_eq!(table.first_numeric_column(), Some(1));
        assert_eq!(table.column_names(), vec!["flag", "x", "y"]);
        assert!(!table.is_empty());
    }

    #[test]
    fn header_only_table_is_empty() {
        let table = Table::from_columns(vec![Column::infer("a", Vec::new())]);
        assert!(table.is_empty());
        assert_eq!(table.first_numeric_column(), None);
    }
}
