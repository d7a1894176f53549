use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, ArrayRef, AsArray, BooleanArray, Float64Array};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, Column, ColumnKind, Table};

/// Tokens read as a missing value in text formats (compared after trimming).
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` / `.pq` – Parquet file, column types taken from the schema
/// * `.json`            – `[{ "col": value, ... }, ...]`
/// * anything else      – comma-separated text with a header row
pub fn load_file(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        _ => load_csv(path),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Header row, then one record per line.  Short rows are padded with missing
/// cells; rows with extra fields are rejected.
fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("ouverture du fichier CSV")?;

    let raw_headers: Vec<String> = reader
        .headers()
        .context("lecture de l'en-tête CSV")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if raw_headers.is_empty() {
        bail!("aucune colonne à lire dans le fichier");
    }
    let headers = normalize_headers(&raw_headers);
    let mut cells: Vec<Vec<CellValue>> = vec![Vec::new(); headers.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("ligne CSV {}", row_no + 2))?;
        if record.len() > headers.len() {
            bail!(
                "ligne {} : {} champs attendus, {} trouvés",
                row_no + 2,
                headers.len(),
                record.len()
            );
        }
        for (col_idx, column) in cells.iter_mut().enumerate() {
            column.push(record.get(col_idx).map_or(CellValue::Missing, parse_cell));
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::infer(name, cells))
        .collect();
    Ok(Table::from_columns(columns))
}

/// Interpret one text cell.
fn parse_cell(raw: &str) -> CellValue {
    let s = raw.trim();
    if MISSING_TOKENS.contains(&s) {
        return CellValue::Missing;
    }
    if let Ok(v) = s.parse::<f64>() {
        return CellValue::Number(v);
    }
    if s.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }
    CellValue::Text(raw.to_string())
}

/// Name blank headers `Unnamed: <i>` and suffix repeats with `.1`, `.2`, …
fn normalize_headers(raw: &[String]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(raw.len());

    for (i, header) in raw.iter().enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {i}")
        } else {
            header.clone()
        };

        let mut name = base.clone();
        if let Some(&last) = seen.get(&base) {
            let mut n = last;
            loop {
                n += 1;
                name = format!("{base}.{n}");
                if !seen.contains_key(&name) {
                    break;
                }
            }
            seen.insert(base, n);
        }
        seen.insert(name.clone(), 0);
        names.push(name);
    }
    names
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "sample": "A", "value": 1.5 },
///   { "sample": "B", "value": null }
/// ]
/// ```
///
/// Columns appear in order of first occurrence; absent keys are missing.
fn load_json(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path).context("lecture du fichier JSON")?;
    let root: JsonValue = serde_json::from_str(&text).context("analyse du JSON")?;

    let records = root
        .as_array()
        .context("un tableau JSON d'objets est attendu")?;

    let mut names: Vec<String> = Vec::new();
    let mut cells: Vec<Vec<CellValue>> = Vec::new();

    for (row, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("l'enregistrement {row} n'est pas un objet JSON"))?;

        for (key, val) in obj {
            let idx = match names.iter().position(|n| n == key) {
                Some(idx) => idx,
                None => {
                    names.push(key.clone());
                    cells.push(vec![CellValue::Missing; row]);
                    names.len() - 1
                }
            };
            cells[idx].push(json_to_cell(val));
        }
        for column in &mut cells {
            column.resize(row + 1, CellValue::Missing);
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::infer(name, cells))
        .collect();
    Ok(Table::from_columns(columns))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::Number(n) => n
            .as_f64()
            .map_or_else(|| CellValue::Text(n.to_string()), CellValue::Number),
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Missing,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file.  Numeric Arrow types become numeric columns whatever
/// their values; booleans and everything else are kept for display only.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path).context("ouverture du fichier parquet")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("lecture des métadonnées parquet")?;
    let schema = builder.schema().clone();
    let reader = builder.build().context("construction du lecteur parquet")?;

    let mut cells: Vec<Vec<CellValue>> = vec![Vec::new(); schema.fields().len()];

    for batch_result in reader {
        let batch = batch_result.context("lecture d'un lot parquet")?;
        for (col_idx, column) in cells.iter_mut().enumerate() {
            let array = batch.column(col_idx);
            append_arrow_cells(array, column)
                .with_context(|| format!("colonne '{}'", schema.field(col_idx).name()))?;
        }
    }

    let columns = schema
        .fields()
        .iter()
        .zip(cells)
        .map(|(field, cells)| Column::new(field.name().clone(), arrow_kind(field.data_type()), cells))
        .collect();
    Ok(Table::from_columns(columns))
}

// -- Arrow helpers --

fn arrow_kind(data_type: &DataType) -> ColumnKind {
    match data_type {
        dt if dt.is_numeric() => ColumnKind::Numeric,
        DataType::Boolean => ColumnKind::Boolean,
        _ => ColumnKind::Text,
    }
}

/// Convert every row of an Arrow column into cells.
fn append_arrow_cells(col: &ArrayRef, out: &mut Vec<CellValue>) -> Result<()> {
    match col.data_type() {
        dt if dt.is_numeric() => {
            let floats = cast(col, &DataType::Float64).context("conversion en flottants")?;
            let arr = floats
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("tableau Float64 attendu")?;
            out.extend(arr.iter().map(|v| v.map_or(CellValue::Missing, CellValue::Number)));
        }
        DataType::Boolean => {
            let arr = col
                .as_any()
                .downcast_ref::<BooleanArray>()
                .context("tableau booléen attendu")?;
            out.extend(arr.iter().map(|v| v.map_or(CellValue::Missing, CellValue::Bool)));
        }
        other => match cast(col, &DataType::Utf8) {
            Ok(strings) => {
                let arr = strings.as_string::<i32>();
                out.extend(
                    arr.iter()
                        .map(|v| v.map_or(CellValue::Missing, |s| CellValue::Text(s.to_string()))),
                );
            }
            Err(_) => {
                let label = format!("{other:?}");
                out.extend((0..col.len()).map(|row| {
                    if col.is_null(row) {
                        CellValue::Missing
                    } else {
                        CellValue::Text(label.clone())
                    }
                }));
            }
        },
    }
    Ok(())
}
