//! Shared helpers for the append-only tabular logs.
//!
//! Reads load the whole file into memory; the logs are small and every view
//! wants the full state at read time anyway. A missing file is reported as
//! `None` so callers can distinguish "nothing recorded yet" from real errors.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StoreError};

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read and validate every row of a headered CSV file.
///
/// Returns `Ok(None)` when the file does not exist. Any unparseable row is a
/// hard `MalformedRow` error carrying the offending line number.
pub fn read_rows<T>(path: &Path, required_columns: &[&str]) -> Result<Option<Vec<T>>>
where
    T: DeserializeOwned,
{
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let name = file_name(path);
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| StoreError::MalformedRow {
            file: name.clone(),
            line: 1,
            reason: e.to_string(),
        })?
        .clone();

    for column in required_columns {
        if !headers.iter().any(|h| h == *column) {
            return Err(StoreError::MalformedRow {
                file: name,
                line: 1,
                reason: format!("missing required column `{column}`"),
            });
        }
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        // Header occupies line 1, so data starts at line 2.
        let fallback_line = (index + 2) as u64;
        let record = record.map_err(|e| StoreError::MalformedRow {
            file: name.clone(),
            line: e
                .position()
                .map(|p| p.line())
                .unwrap_or(fallback_line),
            reason: e.to_string(),
        })?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(fallback_line);
        let row: T = record
            .deserialize(Some(&headers))
            .map_err(|e| StoreError::MalformedRow {
                file: name.clone(),
                line,
                reason: e.to_string(),
            })?;
        rows.push(row);
    }

    Ok(Some(rows))
}

/// Append a batch of rows with a single buffered write.
///
/// The batch is encoded in memory first so a disk failure cannot leave a
/// partial batch behind the caller's back, and the header is written only
/// when the file is created.
pub fn append_rows<T>(path: &Path, rows: &[T]) -> Result<()>
where
    T: Serialize,
{
    let write_header = !path.exists();

    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(&mut buf);
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    file.write_all(&buf)?;
    file.flush()?;

    Ok(())
}
