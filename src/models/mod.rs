//! Core data models shared across the pipeline.

mod author;
mod record;

pub use author::{AuthorQuery, InvalidPeriod, Period, ResolvedIdentity};
pub use record::{
    PublicationRecord, ID_UNAVAILABLE, TITLE_UNAVAILABLE, UNAVAILABLE, YEAR_UNAVAILABLE,
};
