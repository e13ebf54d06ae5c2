//! Integration tests for hal-harvest
//!
//! These tests run the client against a local mock of the HAL search API
//! and verify identity resolution, publication normalization and the
//! degraded paths (bad filters, API failures).

use hal_harvest::hal::HalClient;
use hal_harvest::models::{
    AuthorQuery, ResolvedIdentity, ID_UNAVAILABLE, TITLE_UNAVAILABLE, UNAVAILABLE,
};
use mockito::Matcher;

fn json_docs(docs: &str) -> String {
    format!(r#"{{"response":{{"numFound":99,"docs":{docs}}}}}"#)
}

#[tokio::test]
async fn test_resolve_identity_picks_stable_id() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json_docs(
            r#"[{"authIdHal_s":["someone-else","jean-dupont-123"],"halId_s":"hal-000001"}]"#,
        ))
        .create_async()
        .await;

    let client = HalClient::with_base_url(server.url());
    let identity = client.resolve_identity("Dupont", "Jean").await;

    assert_eq!(identity.canonical_id, "jean-dupont-123");
    assert!(identity.is_stable);
}

#[tokio::test]
async fn test_resolve_identity_falls_back_to_last_document_id() {
    // "jdupont-9" does not contain the given name and is rejected; the raw
    // document id of the last visited document wins.
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json_docs(
            r#"[{"authIdHal_s":["jdupont-9"],"halId_s":"hal-000001"},{"halId_s":"hal-000002"}]"#,
        ))
        .create_async()
        .await;

    let client = HalClient::with_base_url(server.url());
    let identity = client.resolve_identity("Dupont", "Jean").await;

    assert_eq!(identity.canonical_id, "hal-000002");
    assert!(!identity.is_stable);
}

#[tokio::test]
async fn test_resolve_identity_server_error_yields_sentinel() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search/")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let client = HalClient::with_base_url(server.url());
    let identity = client.resolve_identity("Dupont", "Jean").await;

    assert_eq!(identity, ResolvedIdentity::unavailable());
    assert_eq!(identity.canonical_id, UNAVAILABLE);
}

#[tokio::test]
async fn test_resolve_identity_garbage_body_yields_sentinel() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let client = HalClient::with_base_url(server.url());
    let identity = client.resolve_identity("Dupont", "Jean").await;
    assert!(identity.is_unavailable());
}

#[tokio::test]
async fn test_fetch_with_malformed_period_returns_empty() {
    // The period is rejected before any request goes out.
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json_docs(r#"[{"docid":"1"}]"#))
        .expect(0)
        .create_async()
        .await;

    let client = HalClient::with_base_url(server.url());
    let query = AuthorQuery::new("Dupont", "Jean").period("2030");
    let records = client
        .fetch_publications(&query, &ResolvedIdentity::unavailable())
        .await;

    assert!(records.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_server_error_returns_empty() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search/")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let client = HalClient::with_base_url(server.url());
    let query = AuthorQuery::new("Dupont", "Jean");
    let records = client
        .fetch_publications(&query, &ResolvedIdentity::stable("jdupont"))
        .await;

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_fetch_normalizes_rows() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json_docs(
            r#"[
                {"authIdHal_s":["b-bob","a-alice"],"docid":123,"title_s":["Sur les graphes"],
                 "publicationDateY_i":2021,"docType_s":"ART","domain_s":["info.ai"],
                 "keyword_s":["graphes"],"labStructName_s":["LIP6"]},
                {"docid":"456","publicationDateY_i":2019,"docType_s":"XXX"}
            ]"#,
        ))
        .create_async()
        .await;

    let client = HalClient::with_base_url(server.url());
    let query = AuthorQuery::new("Dupont", "Jean").period("2018-2022");
    let identity = ResolvedIdentity::stable("jean-dupont-123");
    let records = client.fetch_publications(&query, &identity).await;

    assert_eq!(records.len(), 2);

    // First row: full data, co-authors sorted by id suffix.
    let first = &records[0];
    assert_eq!(first.family_name, "Dupont");
    assert_eq!(first.given_name, "Jean");
    assert_eq!(first.author_id, "jean-dupont-123");
    assert_eq!(first.co_author_ids, vec!["a-alice", "b-bob"]);
    assert_eq!(first.title, "Sur les graphes");
    assert_eq!(first.docid, "123");
    assert_eq!(first.publication_year, "2021");
    assert_eq!(first.doc_type, "Article de revue");
    assert_eq!(first.domain, "Informatique");
    assert_eq!(first.lab_name, "LIP6");

    // Second row: placeholders for everything missing, unknown type code.
    let second = &records[1];
    assert_eq!(second.co_author_ids, vec![ID_UNAVAILABLE]);
    assert_eq!(second.title, TITLE_UNAVAILABLE);
    assert_eq!(second.docid, "456");
    assert_eq!(second.doc_type, "Type non défini");
    assert_eq!(second.domain, "Domaine non défini");
    assert_eq!(second.lab_name, UNAVAILABLE);
}

#[tokio::test]
async fn test_fetch_two_authors_are_not_conflated() {
    let mut server = mockito::Server::new_async().await;

    let _dupont = server
        .mock("GET", "/search/")
        .match_query(Matcher::UrlEncoded(
            "q".into(),
            "authFullName_t:Jean Dupont".into(),
        ))
        .with_status(200)
        .with_body(json_docs(r#"[{"title_s":["Article de Dupont"]}]"#))
        .create_async()
        .await;

    let _curie = server
        .mock("GET", "/search/")
        .match_query(Matcher::UrlEncoded(
            "q".into(),
            "authFullName_t:Marie Curie".into(),
        ))
        .with_status(200)
        .with_body(json_docs(r#"[{"title_s":["Article de Curie"]}]"#))
        .create_async()
        .await;

    let client = HalClient::with_base_url(server.url());

    let dupont = AuthorQuery::new("Dupont", "Jean");
    let curie = AuthorQuery::new("Curie", "Marie");
    let dupont_rows = client
        .fetch_publications(&dupont, &ResolvedIdentity::stable("jean-dupont"))
        .await;
    let curie_rows = client
        .fetch_publications(&curie, &ResolvedIdentity::stable("marie-curie"))
        .await;

    assert_eq!(dupont_rows.len(), 1);
    assert_eq!(curie_rows.len(), 1);
    assert!(dupont_rows.iter().all(|r| r.family_name == "Dupont"));
    assert!(curie_rows.iter().all(|r| r.family_name == "Curie"));
    assert_eq!(dupont_rows[0].title, "Article de Dupont");
    assert_eq!(curie_rows[0].title, "Article de Curie");
}

#[tokio::test]
async fn test_fetch_preserves_api_result_order() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json_docs(
            r#"[{"title_s":["Z dernier"]},{"title_s":["A premier"]}]"#,
        ))
        .create_async()
        .await;

    let client = HalClient::with_base_url(server.url());
    let query = AuthorQuery::new("Dupont", "Jean");
    let records = client
        .fetch_publications(&query, &ResolvedIdentity::unavailable())
        .await;

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Z dernier", "A premier"]);
}

#[tokio::test]
async fn test_fetch_unmapped_filter_names_are_dropped() {
    // An unknown domain name produces no fq clause at all, so the request
    // still succeeds.
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "authFullName_t:Jean Dupont".into()),
            Matcher::UrlEncoded("wt".into(), "json".into()),
        ]))
        .with_status(200)
        .with_body(json_docs(r#"[{"title_s":["Un article"]}]"#))
        .create_async()
        .await;

    let client = HalClient::with_base_url(server.url());
    let query = AuthorQuery::new("Dupont", "Jean").domain("Alchimie");
    let records = client
        .fetch_publications(&query, &ResolvedIdentity::unavailable())
        .await;

    assert_eq!(records.len(), 1);
    mock.assert_async().await;
}
