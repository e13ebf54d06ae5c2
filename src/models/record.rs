//! Normalized publication record.

use serde::{Deserialize, Serialize};

/// Placeholder for a missing generic value
pub const UNAVAILABLE: &str = "Non disponible";
/// Placeholder for a missing identifier
pub const ID_UNAVAILABLE: &str = "Id non disponible";
/// Placeholder for a missing title
pub const TITLE_UNAVAILABLE: &str = "Titre non disponible";
/// Placeholder for a missing publication year
pub const YEAR_UNAVAILABLE: &str = "Année non disponible";

/// One publication, flattened into the fixed export schema
///
/// Constructed once per API result row and immutable thereafter. Every field
/// is always populated: values missing from the API response are replaced
/// with the fixed placeholder strings above.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Family name of the queried author (display form)
    pub family_name: String,

    /// Given name of the queried author (display form)
    pub given_name: String,

    /// Canonical id of the queried author, resolved before the fetch
    pub author_id: String,

    /// Stable ids of every author on the publication, sorted by the fold
    /// key of the segment after the last '-'
    pub co_author_ids: Vec<String>,

    /// Publication title
    pub title: String,

    /// HAL document id
    pub docid: String,

    /// Publication year, rendered as text
    pub publication_year: String,

    /// Document type, as a mapped display label
    pub doc_type: String,

    /// Scientific domain, as a mapped display label
    pub domain: String,

    /// Author-supplied keywords
    pub keywords: Vec<String>,

    /// Research lab / structure name
    pub lab_name: String,
}

impl PublicationRecord {
    /// Keywords joined for single-cell display
    pub fn keywords_joined(&self) -> String {
        self.keywords.join("; ")
    }

    /// Co-author ids joined for single-cell display
    pub fn co_author_ids_joined(&self) -> String {
        self.co_author_ids.join("; ")
    }
}
