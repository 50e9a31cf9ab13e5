//! Maven Central search index client.
//!
//! The index speaks a Solr-style JSON API: one GET request with `q`, `rows`
//! and `wt=json` parameters, answered by an envelope carrying the total hit
//! count and an ordered page of documents. Requests are made once, with a
//! bounded timeout, and never retried here.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Default search endpoint of Maven Central.
pub const MAVEN_CENTRAL_SEARCH_URL: &str = "https://search.maven.org/solrsearch/select";

/// Upper bound for a single index request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum IndexError {
    /// The index could not be reached, timed out, or the body could not be read.
    #[error("failed to query artifact index: {0}")]
    Transport(#[source] reqwest::Error),

    /// The index answered, but with a failure status or an unusable payload.
    #[error("artifact index returned an invalid response: {0}")]
    Protocol(String),
}

/// One raw record of the search response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexDoc {
    #[serde(rename = "g")]
    pub group_id: String,
    #[serde(rename = "a")]
    pub artifact_id: String,
    #[serde(rename = "latestVersion")]
    pub latest_version: String,
}

impl IndexDoc {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        latest_version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            latest_version: latest_version.into(),
        }
    }
}

/// A decoded page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    /// Total number of matches the index knows about (not just this page).
    pub total: u64,
    /// Records of this page, in index order.
    pub docs: Vec<IndexDoc>,
}

#[derive(Deserialize)]
struct Envelope {
    response: EnvelopeBody,
}

#[derive(Deserialize)]
struct EnvelopeBody {
    #[serde(rename = "numFound")]
    num_found: u64,
    #[serde(default)]
    docs: Vec<serde_json::Value>,
}

impl SearchResults {
    /// Decode a search response body.
    ///
    /// Records are decoded one by one: a record missing `g`, `a` or
    /// `latestVersion` is skipped. The response only fails as a whole when it
    /// is not valid JSON, lacks the envelope, or lists records of which none
    /// can be decoded.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Protocol`] as described above.
    pub fn from_json(body: &str) -> Result<Self, IndexError> {
        let envelope: Envelope = serde_json::from_str(body)
            .map_err(|e| IndexError::Protocol(format!("malformed JSON: {e}")))?;

        let raw_count = envelope.response.docs.len();
        let mut docs = Vec::with_capacity(raw_count);
        for raw in envelope.response.docs {
            match serde_json::from_value::<IndexDoc>(raw) {
                Ok(doc) => docs.push(doc),
                Err(e) => tracing::warn!("Skipping undecodable index record: {e}"),
            }
        }

        if raw_count > 0 && docs.is_empty() {
            return Err(IndexError::Protocol(format!(
                "none of the {raw_count} returned records could be decoded"
            )));
        }

        Ok(Self {
            total: envelope.response.num_found,
            docs,
        })
    }
}

/// Solr query selecting exactly one `groupId:artifactId`.
pub fn exact_query(group_id: &str, artifact_id: &str) -> String {
    format!("g:\"{group_id}\" AND a:\"{artifact_id}\"")
}

/// A remote index that can be searched for artifacts.
#[async_trait]
pub trait ArtifactIndex: Send + Sync {
    /// Run a free-text query, asking for at most `rows` records.
    async fn search(&self, query: &str, rows: usize) -> Result<SearchResults, IndexError>;

    /// Look up a single artifact by its exact coordinates.
    ///
    /// Returns `None` when the index reports no match.
    async fn search_exact(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Option<IndexDoc>, IndexError> {
        let results = self.search(&exact_query(group_id, artifact_id), 1).await?;
        if results.total == 0 {
            return Ok(None);
        }
        Ok(results.docs.into_iter().next())
    }
}

/// Where and how to reach the index.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            endpoint: MAVEN_CENTRAL_SEARCH_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl IndexConfig {
    /// Default settings pointed at another endpoint (mirrors, tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

/// HTTP client for the Maven Central search API.
#[derive(Debug, Clone)]
pub struct MavenCentral {
    client: reqwest::Client,
    endpoint: String,
}

impl MavenCentral {
    /// Build a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Transport`] if the HTTP client cannot be
    /// initialised (e.g. no TLS backend).
    pub fn new(config: IndexConfig) -> Result<Self, IndexError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(crate::USER_AGENT)
            .build()
            .map_err(IndexError::Transport)?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }
}

#[async_trait]
impl ArtifactIndex for MavenCentral {
    async fn search(&self, query: &str, rows: usize) -> Result<SearchResults, IndexError> {
        tracing::debug!(query, rows, endpoint = %self.endpoint, "Querying artifact index");

        let rows = rows.to_string();
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("rows", rows.as_str()), ("wt", "json")])
            .send()
            .await
            .map_err(IndexError::Transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(IndexError::Transport)?;

        if !status.is_success() {
            return Err(IndexError::Protocol(format!(
                "status {}: {}",
                status.as_u16(),
                body.trim()
            )));
        }

        let results = SearchResults::from_json(&body)?;
        tracing::debug!(
            total = results.total,
            returned = results.docs.len(),
            "Index answered"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const LOMBOK_BODY: &str = r#"{
        "responseHeader": {"status": 0},
        "response": {
            "numFound": 2,
            "start": 0,
            "docs": [
                {"id": "org.projectlombok:lombok", "g": "org.projectlombok", "a": "lombok", "latestVersion": "1.18.30", "p": "jar"},
                {"id": "org.projectlombok:lombok-maven", "g": "org.projectlombok", "a": "lombok-maven", "latestVersion": "1.18.20.0"}
            ]
        }
    }"#;

    fn client_for(server: &Server) -> MavenCentral {
        let endpoint = format!("{}/solrsearch/select", server.url());
        MavenCentral::new(IndexConfig::with_endpoint(endpoint)).unwrap()
    }

    #[tokio::test]
    async fn search_sends_query_parameters_and_decodes_docs() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "lombok".into()),
                Matcher::UrlEncoded("rows".into(), "20".into()),
                Matcher::UrlEncoded("wt".into(), "json".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(LOMBOK_BODY)
            .create_async()
            .await;

        let results = client_for(&server).search("lombok", 20).await.unwrap();

        mock.assert_async().await;
        assert_eq!(results.total, 2);
        assert_eq!(
            results.docs,
            vec![
                IndexDoc::new("org.projectlombok", "lombok", "1.18.30"),
                IndexDoc::new("org.projectlombok", "lombok-maven", "1.18.20.0"),
            ]
        );
    }

    #[tokio::test]
    async fn search_exact_uses_coordinate_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded(
                    "q".into(),
                    r#"g:"org.projectlombok" AND a:"lombok""#.into(),
                ),
                Matcher::UrlEncoded("rows".into(), "1".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"response":{"numFound":1,"docs":[{"g":"org.projectlombok","a":"lombok","latestVersion":"1.18.30"}]}}"#,
            )
            .create_async()
            .await;

        let doc = client_for(&server)
            .search_exact("org.projectlombok", "lombok")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            doc,
            Some(IndexDoc::new("org.projectlombok", "lombok", "1.18.30"))
        );
    }

    #[tokio::test]
    async fn search_exact_without_matches_is_none() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"response":{"numFound":0,"docs":[]}}"#)
            .create_async()
            .await;

        let doc = client_for(&server)
            .search_exact("com.example", "missing")
            .await
            .unwrap();
        assert_eq!(doc, None);
    }

    #[tokio::test]
    async fn error_status_is_a_protocol_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let err = client_for(&server).search("lombok", 20).await.unwrap_err();
        match err {
            IndexError::Protocol(msg) => {
                assert!(msg.contains("503"));
                assert!(msg.contains("upstream unavailable"));
            }
            other => panic!("expected protocol error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_protocol_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let err = client_for(&server).search("lombok", 20).await.unwrap_err();
        assert!(matches!(err, IndexError::Protocol(_)));
    }

    #[tokio::test]
    async fn unreachable_index_is_a_transport_error() {
        let config = IndexConfig {
            endpoint: "http://127.0.0.1:9/solrsearch/select".into(),
            timeout: Duration::from_secs(2),
        };
        let err = MavenCentral::new(config)
            .unwrap()
            .search("lombok", 20)
            .await
            .unwrap_err();
        assert!(matches!(err, IndexError::Transport(_)));
    }

    #[test]
    fn records_missing_fields_are_skipped() {
        let body = r#"{"response":{"numFound":3,"docs":[
            {"g":"a.b","a":"one","latestVersion":"1.0"},
            {"g":"a.b","a":"two"},
            {"g":"a.b","a":"three","latestVersion":"3.0"}
        ]}}"#;
        let results = SearchResults::from_json(body).unwrap();
        assert_eq!(results.total, 3);
        let ids: Vec<_> = results.docs.iter().map(|d| d.artifact_id.as_str()).collect();
        assert_eq!(ids, ["one", "three"]);
    }

    #[test]
    fn response_with_only_bad_records_fails() {
        let body = r#"{"response":{"numFound":1,"docs":[{"g":"a.b"}]}}"#;
        assert!(matches!(
            SearchResults::from_json(body),
            Err(IndexError::Protocol(_))
        ));
    }

    #[test]
    fn missing_envelope_fails() {
        assert!(matches!(
            SearchResults::from_json(r#"{"docs":[]}"#),
            Err(IndexError::Protocol(_))
        ));
    }
}
