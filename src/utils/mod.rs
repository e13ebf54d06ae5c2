//! Utility modules supporting the HAL pipeline.
//!
//! - [`HttpClient`]: HTTP client with sensible defaults
//! - [`fold_key`]: diacritic-free lowercase key used for name comparison
//! - [`filename_safe`]: the small substitution set applied to filename segments
//! - [`capitalize`]: display form of author names

mod http;
mod text;

pub use http::HttpClient;
pub use text::{capitalize, filename_safe, fold_key};
