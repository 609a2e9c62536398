//! Record Cleaner Module
//! Normalizes raw course rows and drops online-only or incomplete sections.

use crate::data::schema::{self, SchemaError, KEY_COLUMNS, LOCATION};
use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;
use thiserror::Error;

/// Whole-word "online" anywhere in a Location.
static ONLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bonline\b").unwrap());

/// "n/a", "na", "n.a.", "n./a." and friends, surrounding whitespace allowed.
static NOT_APPLICABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(?:n\.?/?a\.?|na)\s*$").unwrap());

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Row counts from a single cleaning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub raw_rows: usize,
    pub online_removed: usize,
    pub incomplete_removed: usize,
    pub kept_rows: usize,
}

/// Handles the cleaning pre-pass over a raw course table.
pub struct RecordCleaner;

impl RecordCleaner {
    /// Whether `value` is one of the "not applicable" spellings.
    pub fn is_sentinel(value: &str) -> bool {
        NOT_APPLICABLE.is_match(value)
    }

    /// Whether a Location names an online section.
    pub fn is_online(location: &str) -> bool {
        ONLINE.is_match(location)
    }

    /// Clean `df` and return a new frame; `df` itself is left untouched.
    pub fn clean(df: &DataFrame) -> Result<DataFrame, CleanerError> {
        Self::clean_with_report(df).map(|(cleaned, _)| cleaned)
    }

    /// Clean `df`, also returning how many rows each rule removed.
    ///
    /// Every column comes back as `String`, in the original column and row order.
    pub fn clean_with_report(df: &DataFrame) -> Result<(DataFrame, CleanReport), CleanerError> {
        schema::require_columns(df, &KEY_COLUMNS)?;

        let names: Vec<PlSmallStr> = df.get_column_names().into_iter().cloned().collect();
        let mut columns: Vec<Vec<Option<String>>> = Vec::with_capacity(names.len());

        for name in &names {
            let is_key = KEY_COLUMNS.contains(&name.as_str());
            let values = schema::column_as_text(df, name)?
                .into_iter()
                .map(|value| {
                    let value = if is_key {
                        value.map(|v| v.trim().to_string())
                    } else {
                        value
                    };
                    value.filter(|v| !Self::is_sentinel(v))
                })
                .collect();
            columns.push(values);
        }

        let key_indices: Vec<usize> = KEY_COLUMNS
            .iter()
            .filter_map(|key| names.iter().position(|n| n.as_str() == *key))
            .collect();
        let location_idx = names
            .iter()
            .position(|n| n.as_str() == LOCATION)
            .ok_or_else(|| SchemaError {
                column: LOCATION.to_string(),
            })?;

        let mut report = CleanReport {
            raw_rows: df.height(),
            ..CleanReport::default()
        };
        let mut keep = Vec::with_capacity(df.height());

        for row in 0..df.height() {
            let online = columns[location_idx][row]
                .as_deref()
                .is_some_and(Self::is_online);
            let complete = key_indices
                .iter()
                .all(|&idx| columns[idx][row].as_deref().is_some_and(|v| !v.is_empty()));

            if online {
                report.online_removed += 1;
                keep.push(false);
            } else if !complete {
                report.incomplete_removed += 1;
                keep.push(false);
            } else {
                keep.push(true);
            }
        }
        report.kept_rows = keep.iter().filter(|&&k| k).count();

        let cleaned = DataFrame::new(
            names
                .into_iter()
                .zip(columns)
                .map(|(name, values)| {
                    let kept: Vec<Option<String>> = values
                        .into_iter()
                        .zip(&keep)
                        .filter(|(_, &k)| k)
                        .map(|(v, _)| v)
                        .collect();
                    Column::new(name, kept)
                })
                .collect(),
        )?;

        tracing::debug!(
            raw = report.raw_rows,
            online = report.online_removed,
            incomplete = report.incomplete_removed,
            kept = report.kept_rows,
            "cleaned course table"
        );

        Ok((cleaned, report))
    }
}
