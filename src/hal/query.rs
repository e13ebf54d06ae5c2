//! Deterministic HAL search-URL construction.
//!
//! HAL's search endpoint takes a `q` term, any number of `fq` facet filter
//! clauses, an `fl` field list and `wt=json`. The builder accumulates named
//! clauses and serializes them in a fixed order (year range, then facets in
//! insertion order, then fields) so generated URLs are reproducible.

use urlencoding::encode;

/// Fields requested when resolving an author identity
pub const IDENTITY_FIELDS: &[&str] = &["halId_s", "authIdHal_s"];

/// Fields requested when fetching publications
pub const PUBLICATION_FIELDS: &[&str] = &[
    "authIdHal_s",
    "docid",
    "title_s",
    "publicationDateY_i",
    "docType_s",
    "domain_s",
    "keyword_s",
    "labStructName_s",
];

/// Builder for one HAL search request
#[derive(Debug, Clone)]
pub struct SearchRequest {
    q: String,
    year_range: Option<(u16, u16)>,
    facets: Vec<(String, Vec<String>)>,
    fields: &'static [&'static str],
}

impl SearchRequest {
    /// Start a request with the given `q` search term
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            year_range: None,
            facets: Vec::new(),
            fields: &[],
        }
    }

    /// Filter on an inclusive publication-year range
    pub fn year_range(mut self, start: u16, end: u16) -> Self {
        self.year_range = Some((start, end));
        self
    }

    /// Add a facet clause whose values are OR-joined.
    ///
    /// An empty value set adds no clause.
    pub fn facet_or(mut self, field: impl Into<String>, values: &[&str]) -> Self {
        if !values.is_empty() {
            self.facets
                .push((field.into(), values.iter().map(|v| v.to_string()).collect()));
        }
        self
    }

    /// Restrict the returned fields
    pub fn fields(mut self, fields: &'static [&'static str]) -> Self {
        self.fields = fields;
        self
    }

    /// Serialize against an API base URL
    pub fn into_url(self, base_url: &str) -> String {
        let mut url = format!("{}/search/?q={}", base_url, encode(&self.q));

        if let Some((start, end)) = self.year_range {
            let clause = format!("publicationDateY_i:[{start} TO {end}]");
            url.push_str(&format!("&fq={}", encode(&clause)));
        }

        for (field, values) in &self.facets {
            let clause = format!("{}:({})", field, values.join(" OR "));
            url.push_str(&format!("&fq={}", encode(&clause)));
        }

        if !self.fields.is_empty() {
            url.push_str(&format!("&fl={}", self.fields.join(",")));
        }

        url.push_str("&wt=json");
        url
    }
}
