//! Column names and required-column checks shared by the cleaner and the
//! typed record extraction.

use polars::prelude::*;
use thiserror::Error;

pub const LOCATION: &str = "Location";
pub const DAY: &str = "Day";
pub const TIME: &str = "Time";
pub const CLASS: &str = "Class";
pub const SECTION: &str = "Section";
pub const INSTRUCTOR: &str = "Instructor";

/// Columns that must be present and non-missing for a row to survive cleaning.
pub const KEY_COLUMNS: [&str; 3] = [LOCATION, DAY, TIME];

/// Every column a course record is built from.
pub const RECORD_COLUMNS: [&str; 6] = [LOCATION, DAY, TIME, CLASS, SECTION, INSTRUCTOR];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing required column: {column}")]
pub struct SchemaError {
    pub column: String,
}

/// Fail on the first of `required` that is not a column of `df`.
pub fn require_columns(df: &DataFrame, required: &[&str]) -> Result<(), SchemaError> {
    let present = df.get_column_names();
    match required
        .iter()
        .find(|name| !present.iter().any(|p| p.as_str() == **name))
    {
        Some(missing) => Err(SchemaError {
            column: (*missing).to_string(),
        }),
        None => Ok(()),
    }
}

/// Read a column as text, one `Option<String>` per row.
///
/// Non-string columns are cast to `String` first; nulls stay `None`.
pub fn column_as_text(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    let values = series
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect();
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_columns_reports_first_missing() {
        let df = DataFrame::new(vec![
            Column::new("Location".into(), &["101 Loomis Laboratory"]),
            Column::new("Time".into(), &["09:00AM - 09:50AM"]),
        ])
        .unwrap();

        assert!(require_columns(&df, &[LOCATION, TIME]).is_ok());
        let err = require_columns(&df, &KEY_COLUMNS).unwrap_err();
        assert_eq!(err.column, "Day");
    }

    #[test]
    fn test_column_as_text_casts_numbers() {
        let df = DataFrame::new(vec![Column::new("Section".into(), &[Some(1i64), None])]).unwrap();
        let values = column_as_text(&df, "Section").unwrap();
        assert_eq!(values, vec![Some("1".to_string()), None]);
    }
}
