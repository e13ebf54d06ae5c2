//! Persistence of fetched records: CSV table, filename encoding and the
//! static dashboard page.

mod csv;
mod dashboard;
mod filename;

pub use csv::{write_records, CSV_HEADERS};
pub use dashboard::{write_dashboard, CHART_FILES};
pub use filename::build_filename;

/// Errors that can occur while writing export files
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// CSV serialization failure
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
