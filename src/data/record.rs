//! Typed course rows extracted from a (cleaned or raw) course table.

use crate::data::schema::{
    self, SchemaError, CLASS, DAY, INSTRUCTOR, LOCATION, RECORD_COLUMNS, SECTION, TIME,
};
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// One course meeting. A `None` field is a missing value in the source table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseRecord {
    pub location: Option<String>,
    pub day: Option<String>,
    pub time: Option<String>,
    pub class: Option<String>,
    pub section: Option<String>,
    pub instructor: Option<String>,
}

impl CourseRecord {
    /// `"<Class> <Section> · <Instructor>"`, missing parts rendered empty.
    pub fn label(&self) -> String {
        format!(
            "{} {} · {}",
            self.class.as_deref().unwrap_or_default(),
            self.section.as_deref().unwrap_or_default(),
            self.instructor.as_deref().unwrap_or_default()
        )
    }

    /// Extract every row of `df` as a record, in row order.
    pub fn from_frame(df: &DataFrame) -> Result<Vec<CourseRecord>, RecordError> {
        schema::require_columns(df, &RECORD_COLUMNS)?;

        let location = schema::column_as_text(df, LOCATION)?;
        let day = schema::column_as_text(df, DAY)?;
        let time = schema::column_as_text(df, TIME)?;
        let class = schema::column_as_text(df, CLASS)?;
        let section = schema::column_as_text(df, SECTION)?;
        let instructor = schema::column_as_text(df, INSTRUCTOR)?;

        let records = (0..df.height())
            .map(|i| CourseRecord {
                location: location[i].clone(),
                day: day[i].clone(),
                time: time[i].clone(),
                class: class[i].clone(),
                section: section[i].clone(),
                instructor: instructor[i].clone(),
            })
            .collect();
        Ok(records)
    }
}
