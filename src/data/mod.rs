//! Data module - CSV loading, cleaning and room lookups

pub mod catalog;
pub mod cleaner;
pub mod loader;
pub mod record;
pub mod schema;

pub use catalog::{CourseCatalog, RoomKey};
pub use cleaner::{CleanReport, CleanerError, RecordCleaner};
pub use loader::{load_catalog, read_csv, write_csv, LoadedCatalog, LoaderError};
pub use record::{CourseRecord, RecordError};
pub use schema::SchemaError;
