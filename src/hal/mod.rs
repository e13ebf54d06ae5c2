//! HAL (archives ouvertes) API client.
//!
//! Two sequential calls per author: [`HalClient::resolve_identity`] picks the
//! author's canonical identifier from candidate records, then
//! [`HalClient::fetch_publications`] retrieves and normalizes the matching
//! publications. Both entry points swallow failures: a bad response or a
//! malformed filter is logged and degrades to sentinel values or an empty
//! result set, so one author can never abort a multi-author run.

mod query;

pub use query::{SearchRequest, IDENTITY_FIELDS, PUBLICATION_FIELDS};

use serde::{Deserialize, Deserializer};

use crate::config::ApiConfig;
use crate::mappings;
use crate::models::{
    AuthorQuery, InvalidPeriod, Period, PublicationRecord, ResolvedIdentity, ID_UNAVAILABLE,
    TITLE_UNAVAILABLE, UNAVAILABLE, YEAR_UNAVAILABLE,
};
use crate::utils::{capitalize, fold_key, HttpClient};

/// Production HAL API endpoint
pub const HAL_API_BASE: &str = "https://api.archives-ouvertes.fr";

/// Errors that can occur when talking to HAL
#[derive(Debug, thiserror::Error)]
pub enum HalError {
    /// Network or transport failure
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the API
    #[error("HAL API returned status {0}")]
    Api(reqwest::StatusCode),

    /// Response body did not parse as the expected JSON
    #[error("parse error: {0}")]
    Parse(String),

    /// Malformed publication period filter
    #[error(transparent)]
    InvalidPeriod(#[from] InvalidPeriod),
}

impl From<reqwest::Error> for HalError {
    fn from(err: reqwest::Error) -> Self {
        HalError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for HalError {
    fn from(err: serde_json::Error) -> Self {
        HalError::Parse(err.to_string())
    }
}

/// HAL API client
#[derive(Debug, Clone)]
pub struct HalClient {
    http: HttpClient,
    base_url: String,
}

impl HalClient {
    /// Client against the production HAL endpoint
    pub fn new() -> Self {
        Self::with_base_url(HAL_API_BASE)
    }

    /// Client against an arbitrary endpoint (tests point this at a mock)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into(),
        }
    }

    /// Client configured from the application config
    pub fn from_config(api: &ApiConfig) -> Self {
        Self {
            http: HttpClient::with_timeout(std::time::Duration::from_secs(api.timeout_secs)),
            base_url: api.base_url.clone(),
        }
    }

    /// Resolve the canonical identifier for an author.
    ///
    /// Never fails: any network, API or parse problem is logged and yields
    /// the sentinel identity.
    pub async fn resolve_identity(&self, family_name: &str, given_name: &str) -> ResolvedIdentity {
        match self.try_resolve(family_name, given_name).await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(
                    family = family_name,
                    given = given_name,
                    error = %e,
                    "identity resolution failed, using sentinel"
                );
                ResolvedIdentity::unavailable()
            }
        }
    }

    async fn try_resolve(
        &self,
        family_name: &str,
        given_name: &str,
    ) -> Result<ResolvedIdentity, HalError> {
        let family_key = fold_key(family_name);
        let given_key = fold_key(given_name);

        let url = SearchRequest::new(format!("authFullName_t:{given_key} {family_key}"))
            .fields(IDENTITY_FIELDS)
            .into_url(&self.base_url);
        let docs = self.get_docs(&url).await?;

        Ok(pick_identity(&docs, &family_key, &given_key))
    }

    /// Fetch and normalize an author's publications.
    ///
    /// Never fails: a malformed period filter or a failed API call is logged
    /// and yields an empty result set.
    pub async fn fetch_publications(
        &self,
        query: &AuthorQuery,
        identity: &ResolvedIdentity,
    ) -> Vec<PublicationRecord> {
        match self.try_fetch(query, identity).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    family = query.family_name.as_str(),
                    given = query.given_name.as_str(),
                    error = %e,
                    "publication fetch failed, returning no rows"
                );
                Vec::new()
            }
        }
    }

    async fn try_fetch(
        &self,
        query: &AuthorQuery,
        identity: &ResolvedIdentity,
    ) -> Result<Vec<PublicationRecord>, HalError> {
        // Literal names here, not fold keys: full-text matching is the
        // API's job.
        let mut request = SearchRequest::new(format!("authFullName_t:{}", query.full_name()));

        if let Some(raw) = &query.period {
            let period = Period::parse(raw)?;
            request = request.year_range(period.start, period.end);
        }

        let domain_codes: Vec<&str> = query
            .domains
            .iter()
            .filter_map(|name| mappings::domain_code(name))
            .collect();
        request = request.facet_or("domain_s", &domain_codes);

        let type_codes: Vec<&str> = query
            .doc_types
            .iter()
            .filter_map(|name| mappings::doc_type_code(name))
            .collect();
        request = request.facet_or("docType_s", &type_codes);

        let url = request.fields(PUBLICATION_FIELDS).into_url(&self.base_url);
        let docs = self.get_docs(&url).await?;

        Ok(docs
            .iter()
            .map(|doc| map_record(doc, query, identity))
            .collect())
    }

    async fn get_docs(&self, url: &str) -> Result<Vec<HalDoc>, HalError> {
        tracing::debug!(url, "querying HAL");

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| HalError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(HalError::Api(response.status()));
        }

        let data: HalResponse = response
            .json()
            .await
            .map_err(|e| HalError::Parse(e.to_string()))?;

        Ok(data.response.docs)
    }
}

impl Default for HalClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the canonical identity out of candidate documents.
///
/// A stable id is accepted iff its fold key contains the given-name fold key
/// and a prefix of the family-name fold key of length `max(4, len/2)`. The
/// scan of a document's id list stops at the first acceptance and no later
/// acceptance replaces it. The raw `halId_s` fallback, however, keeps being
/// overwritten on every visited document, even after a stable id was found;
/// consumers may rely on that, so it stays.
fn pick_identity(docs: &[HalDoc], family_key: &str, given_key: &str) -> ResolvedIdentity {
    let prefix_len = family_key.len().min(std::cmp::max(4, family_key.len() / 2));
    let family_prefix = &family_key[..prefix_len];

    let mut stable: Option<String> = None;
    let mut fallback: Option<String> = None;

    for doc in docs {
        if stable.is_none() {
            if let Some(ids) = &doc.auth_id_hal {
                for id in ids {
                    let key = fold_key(id);
                    if key.contains(given_key) && key.contains(family_prefix) {
                        stable = Some(id.clone());
                        break;
                    }
                }
            }
        }
        if let Some(doc_id) = &doc.hal_id {
            fallback = Some(doc_id.clone());
        }
    }

    match (stable, fallback) {
        (Some(id), _) => ResolvedIdentity::stable(id),
        (None, Some(id)) => ResolvedIdentity::document(id),
        (None, None) => ResolvedIdentity::unavailable(),
    }
}

/// Flatten one raw document into the export schema, substituting the fixed
/// placeholders for anything the API left out
fn map_record(doc: &HalDoc, query: &AuthorQuery, identity: &ResolvedIdentity) -> PublicationRecord {
    let co_author_ids = match &doc.auth_id_hal {
        Some(ids) if !ids.is_empty() => sorted_by_id_suffix(ids),
        _ => vec![ID_UNAVAILABLE.to_string()],
    };

    PublicationRecord {
        family_name: capitalize(&query.family_name),
        given_name: capitalize(&query.given_name),
        author_id: identity.canonical_id.clone(),
        co_author_ids,
        title: doc
            .title
            .as_ref()
            .and_then(|titles| titles.first())
            .cloned()
            .unwrap_or_else(|| TITLE_UNAVAILABLE.to_string()),
        docid: doc
            .docid
            .clone()
            .unwrap_or_else(|| ID_UNAVAILABLE.to_string()),
        publication_year: doc
            .publication_year
            .map(|year| year.to_string())
            .unwrap_or_else(|| YEAR_UNAVAILABLE.to_string()),
        doc_type: doc
            .doc_type
            .as_deref()
            .map(mappings::doc_type_label)
            .unwrap_or(mappings::DOC_TYPE_UNDEFINED)
            .to_string(),
        domain: doc
            .domain
            .as_ref()
            .and_then(|domains| domains.first())
            .map(|code| mappings::domain_label(code))
            .unwrap_or(mappings::DOMAIN_UNDEFINED)
            .to_string(),
        keywords: doc.keywords.clone().unwrap_or_default(),
        lab_name: doc
            .lab_names
            .as_ref()
            .map(|labs| labs.join("; "))
            .unwrap_or_else(|| UNAVAILABLE.to_string()),
    }
}

/// Sort ids by the fold key of the segment after the last '-'.
///
/// The sort is stable, so ids with equal suffix keys keep their wire order.
fn sorted_by_id_suffix(ids: &[String]) -> Vec<String> {
    let mut sorted = ids.to_vec();
    sorted.sort_by_key(|id| fold_key(id.rsplit('-').next().unwrap_or(id)));
    sorted
}

// ===== HAL API wire types =====

#[derive(Debug, Deserialize)]
struct HalResponse {
    response: HalResponseInner,
}

#[derive(Debug, Deserialize)]
struct HalResponseInner {
    docs: Vec<HalDoc>,
}

/// One raw document row; every field optional on the wire
#[derive(Debug, Default, Deserialize)]
struct HalDoc {
    #[serde(default, rename = "authIdHal_s")]
    auth_id_hal: Option<Vec<String>>,

    #[serde(default, rename = "halId_s")]
    hal_id: Option<String>,

    #[serde(default, deserialize_with = "docid_string_or_number")]
    docid: Option<String>,

    #[serde(default, rename = "title_s")]
    title: Option<Vec<String>>,

    #[serde(default, rename = "publicationDateY_i")]
    publication_year: Option<i32>,

    #[serde(default, rename = "docType_s")]
    doc_type: Option<String>,

    #[serde(default, rename = "domain_s")]
    domain: Option<Vec<String>>,

    #[serde(default, rename = "keyword_s")]
    keywords: Option<Vec<String>>,

    #[serde(default, rename = "labStructName_s")]
    lab_names: Option<Vec<String>>,
}

/// HAL serves `docid` sometimes as a JSON string, sometimes as a number
fn docid_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}
