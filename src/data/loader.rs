//! CSV Data Loader Module
//! Reads and writes course tables as CSV using Polars.

use crate::data::catalog::CourseCatalog;
use crate::data::cleaner::{CleanReport, CleanerError, RecordCleaner};
use crate::data::record::{CourseRecord, RecordError};
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Failed to write CSV: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Cleaner(#[from] CleanerError),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Read a course CSV with every column kept as text.
pub fn read_csv(path: &Path) -> Result<DataFrame, LoaderError> {
    if !path.is_file() {
        return Err(LoaderError::FileNotFound(path.to_path_buf()));
    }

    // Schema inference is off: room numbers and sections stay strings.
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(0))
        .finish()?
        .collect()?;

    tracing::debug!(path = %path.display(), rows = df.height(), "read course CSV");
    Ok(df)
}

/// Write `df` as CSV with a header row; missing values become empty fields.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<(), LoaderError> {
    let mut file = File::create(path)?;
    let mut df = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;

    tracing::debug!(path = %path.display(), rows = df.height(), "wrote course CSV");
    Ok(())
}

/// A loaded course table ready for room lookups.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub catalog: CourseCatalog,
    pub raw_rows: usize,
    /// Present when the table went through the cleaner on load.
    pub report: Option<CleanReport>,
}

/// Read `path`, optionally clean it, and build the catalog.
pub fn load_catalog(path: &Path, clean: bool) -> Result<LoadedCatalog, LoaderError> {
    let raw = read_csv(path)?;
    let raw_rows = raw.height();

    let (df, report) = if clean {
        let (df, report) = RecordCleaner::clean_with_report(&raw)?;
        (df, Some(report))
    } else {
        (raw, None)
    };

    let records = CourseRecord::from_frame(&df)?;
    tracing::info!(
        path = %path.display(),
        raw = raw_rows,
        records = records.len(),
        "loaded course catalog"
    );

    Ok(LoadedCatalog {
        catalog: CourseCatalog::new(records),
        raw_rows,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        match read_csv(&path) {
            Err(LoaderError::FileNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_read_keeps_text_columns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Location,Day,Time,Class,Section,Instructor").unwrap();
        writeln!(file, "0101 Loomis Laboratory,MWF,09:00AM - 09:50AM,CS 101,01,Smith").unwrap();
        file.flush().unwrap();

        let df = read_csv(file.path()).unwrap();
        let records = CourseRecord::from_frame(&df).unwrap();
        assert_eq!(records[0].section.as_deref(), Some("01"));
        assert_eq!(records[0].location.as_deref(), Some("0101 Loomis Laboratory"));
    }

    #[test]
    fn test_write_then_read_preserves_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let df = DataFrame::new(vec![
            Column::new("Location".into(), &["101 Loomis Laboratory", "1404 Siebel Center"]),
            Column::new("Day".into(), &["MWF", "TR"]),
            Column::new("Time".into(), &["09:00AM - 09:50AM", "11:00AM - 12:15PM"]),
        ])
        .unwrap();

        write_csv(&df, &path).unwrap();
        let back = read_csv(&path).unwrap();
        assert_eq!(back.height(), 2);
        assert_eq!(back.get_column_names(), df.get_column_names());
    }

    #[test]
    fn test_ragged_row_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Location,Day,Time").unwrap();
        writeln!(file, "101 Loomis Laboratory,MWF,09:00AM - 09:50AM").unwrap();
        writeln!(file, "141 Loomis Laboratory,TR,10:00AM - 11:15AM,extra,fields").unwrap();
        file.flush().unwrap();

        assert!(matches!(read_csv(file.path()), Err(LoaderError::CsvError(_))));
    }

    #[test]
    fn test_raw_load_without_label_columns_is_record_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Location,Day,Time").unwrap();
        writeln!(file, "101 Loomis Laboratory,MWF,09:00AM - 09:50AM").unwrap();
        file.flush().unwrap();

        match load_catalog(file.path(), false) {
            Err(LoaderError::Record(RecordError::Schema(err))) => assert_eq!(err.column, "Class"),
            other => panic!("expected record schema error, got {other:?}"),
        }
    }
}
