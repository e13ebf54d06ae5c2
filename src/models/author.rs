//! Author query parameters and resolved author identity.

use serde::{Deserialize, Serialize};

use super::record::UNAVAILABLE;

/// Parameters for one author's publication fetch
///
/// The period filter is carried as the raw user string and validated when
/// the fetch runs: a malformed period aborts that author's fetch with an
/// empty result set rather than failing construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorQuery {
    /// Family name, as typed by the user
    pub family_name: String,

    /// Given name, as typed by the user
    pub given_name: String,

    /// Raw publication period filter, "YYYY-YYYY"
    pub period: Option<String>,

    /// Scientific domain filters, by French display name
    pub domains: Vec<String>,

    /// Document type filters, by French display name
    pub doc_types: Vec<String>,
}

impl AuthorQuery {
    /// Create a query for an author with no filters
    pub fn new(family_name: impl Into<String>, given_name: impl Into<String>) -> Self {
        Self {
            family_name: family_name.into(),
            given_name: given_name.into(),
            period: None,
            domains: Vec::new(),
            doc_types: Vec::new(),
        }
    }

    /// Set the publication period filter ("YYYY-YYYY")
    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// Add a domain filter
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domains.push(domain.into());
        self
    }

    /// Add a document type filter
    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_types.push(doc_type.into());
        self
    }

    /// "Given Family" form used in search terms
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

/// Inclusive publication-year range parsed from a "YYYY-YYYY" string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: u16,
    pub end: u16,
}

impl Period {
    /// Parse a "YYYY-YYYY" period string.
    ///
    /// Exactly two 4-digit years around a single dash; anything else is
    /// rejected.
    pub fn parse(raw: &str) -> Result<Self, InvalidPeriod> {
        let parts: Vec<&str> = raw.split('-').collect();
        if parts.len() != 2 {
            return Err(InvalidPeriod(raw.to_string()));
        }
        let year = |s: &str| -> Result<u16, InvalidPeriod> {
            if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
                s.parse().map_err(|_| InvalidPeriod(raw.to_string()))
            } else {
                Err(InvalidPeriod(raw.to_string()))
            }
        };
        Ok(Self {
            start: year(parts[0])?,
            end: year(parts[1])?,
        })
    }
}

/// Malformed period string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid period '{0}': expected YYYY-YYYY")]
pub struct InvalidPeriod(pub String);

/// Outcome of identity resolution for one author
///
/// Exactly one identifier is chosen: a persistent idHAL when the matching
/// heuristic accepts one, otherwise the last per-document id seen, otherwise
/// the unavailable sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedIdentity {
    /// The chosen identifier, or "Non disponible"
    pub canonical_id: String,

    /// True when `canonical_id` is a persistent idHAL rather than a
    /// per-document fallback or the sentinel
    pub is_stable: bool,
}

impl ResolvedIdentity {
    /// Identity backed by a persistent idHAL
    pub fn stable(id: impl Into<String>) -> Self {
        Self {
            canonical_id: id.into(),
            is_stable: true,
        }
    }

    /// Fallback identity tied to a single document
    pub fn document(id: impl Into<String>) -> Self {
        Self {
            canonical_id: id.into(),
            is_stable: false,
        }
    }

    /// Sentinel identity when nothing could be resolved
    pub fn unavailable() -> Self {
        Self {
            canonical_id: UNAVAILABLE.to_string(),
            is_stable: false,
        }
    }

    /// Whether this is the sentinel identity
    pub fn is_unavailable(&self) -> bool {
        self.canonical_id == UNAVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parse_valid() {
        assert_eq!(
            Period::parse("2020-2024"),
            Ok(Period {
                start: 2020,
                end: 2024
            })
        );
    }

    #[test]
    fn test_period_parse_rejects_missing_dash() {
        assert!(Period::parse("2030").is_err());
    }

    #[test]
    fn test_period_parse_rejects_garbage() {
        assert!(Period::parse("20a0-2024").is_err());
        assert!(Period::parse("2020-24").is_err());
        assert!(Period::parse("2020-2021-2022").is_err());
        assert!(Period::parse("").is_err());
        assert!(Period::parse("-2015").is_err());
    }

    #[test]
    fn test_author_query_builder() {
        let query = AuthorQuery::new("Dupont", "Jean")
            .period("2018-2022")
            .domain("Informatique")
            .doc_type("Article de revue");

        assert_eq!(query.full_name(), "Jean Dupont");
        assert_eq!(query.period.as_deref(), Some("2018-2022"));
        assert_eq!(query.domains, vec!["Informatique"]);
        assert_eq!(query.doc_types, vec!["Article de revue"]);
    }

    #[test]
    fn test_resolved_identity_sentinel() {
        let identity = ResolvedIdentity::unavailable();
        assert!(identity.is_unavailable());
        assert!(!identity.is_stable);

        let stable = ResolvedIdentity::stable("jdupont");
        assert!(!stable.is_unavailable());
        assert!(stable.is_stable);
    }
}
