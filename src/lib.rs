//! # hal-harvest
//!
//! Queries the HAL open archive (api.archives-ouvertes.fr) for an author's
//! publications, resolves the author's stable idHAL, normalizes the results
//! into flat records and exports them as CSV plus a static HTML dashboard.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (AuthorQuery, ResolvedIdentity, PublicationRecord)
//! - [`hal`]: HAL API client (identity resolution and publication fetch)
//! - [`mappings`]: Static domain and document-type lookup tables
//! - [`export`]: CSV writer, filename encoding and dashboard page
//! - [`utils`]: HTTP client and text normalization
//! - [`config`]: Configuration management

pub mod config;
pub mod export;
pub mod hal;
pub mod mappings;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use hal::HalClient;
pub use models::{AuthorQuery, PublicationRecord, ResolvedIdentity};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
