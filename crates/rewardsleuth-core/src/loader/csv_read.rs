/// CSV parsing — turns the delimited export into redemption records.
///
/// The schema is verified up front against [`columns::EXPECTED`] so a
/// missing column is reported by name rather than surfacing as a cryptic
/// per-row deserialize failure. A header-only file is a valid empty table.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{LoadError, SchemaError};
use crate::model::{columns, RedemptionRecord};

/// Read and validate every record in `path`.
///
/// `progress` is invoked with the running row count as rows are parsed
/// (the load thread forwards it to the UI at a coarser granularity).
/// The file handle lives inside this function and is released on every
/// exit path, success or failure.
pub fn read_records(
    path: &Path,
    mut progress: impl FnMut(u64),
) -> Result<Vec<RedemptionRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    // Schema check before touching any row.
    let headers = reader
        .headers()
        .map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    for name in columns::EXPECTED {
        if !headers.iter().any(|h| h == name) {
            return Err(SchemaError::MissingColumn { name }.into());
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<RedemptionRecord>() {
        let record = row.map_err(|e| classify_row_error(path, &headers, e))?;
        // Line numbers are 1-based and the header occupies line 1.
        let line = records.len() as u64 + 2;
        record.validate(line)?;
        records.push(record);
        progress(records.len() as u64);
    }

    Ok(records)
}

/// Map a per-row csv error onto the load taxonomy.
///
/// A deserialize failure means a cell was mistyped — that is a schema
/// problem, reported with the column name and line. Anything else
/// (ragged rows, encoding) is malformed CSV.
fn classify_row_error(path: &Path, headers: &csv::StringRecord, e: csv::Error) -> LoadError {
    let line = e.position().map_or(0, |p| p.line());
    if let csv::ErrorKind::Deserialize { err, .. } = e.kind() {
        let column = err
            .field()
            .and_then(|i| headers.get(i as usize))
            .unwrap_or("<unknown>")
            .to_owned();
        return SchemaError::InvalidValue {
            column,
            line,
            message: err.to_string(),
        }
        .into();
    }
    LoadError::Malformed {
        path: path.to_path_buf(),
        source: e,
    }
}
