//! Document retrieval. Every call site issues its own independent request:
//! no caching, no dedup, no retry, no cancellation. A failed fetch degrades
//! to a static message at the container boundary (see `render::render_error`).

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::logging::{json_log, obj, v_num, v_str, Domain, Level};
use crate::recipe::Recipe;
use crate::source::{self, SourceError};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("cannot read {path}: {err}")]
    Io {
        path: String,
        #[source]
        err: std::io::Error,
    },
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Where the recipes document comes from. One implementation per transport;
/// the projection step is shared.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch_document(&self) -> Result<String, FetchError>;

    /// Fetch, parse, and project the full record set.
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, FetchError> {
        let body = self.fetch_document().await?;
        let records = source::parse_document(&body)?;
        json_log(
            Level::Info,
            Domain::Fetch,
            "document_loaded",
            obj(&[
                ("sha256", v_str(&document_sha256(&body))),
                ("records", v_num(records.len() as u64)),
            ]),
        );
        Ok(records)
    }
}

pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: String, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_else(|_| Client::new()),
            url,
        }
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch_document(&self) -> Result<String, FetchError> {
        let resp = self.client.get(&self.url).send().await?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }
        Ok(resp.text().await?)
    }
}

/// Local-file source: the offline driver mode and the test seam.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    async fn fetch_document(&self) -> Result<String, FetchError> {
        std::fs::read_to_string(&self.path).map_err(|err| FetchError::Io {
            path: self.path.display().to_string(),
            err,
        })
    }
}

/// Pick a source for a resource location: http(s) URLs go over the wire,
/// anything else is treated as a local path.
pub fn source_for(location: &str, timeout_secs: u64) -> Arc<dyn DocumentSource> {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            Arc::new(HttpSource::new(location.to_string(), timeout_secs))
        }
        _ => Arc::new(FileSource::new(location)),
    }
}

pub fn document_sha256(body: &str) -> String {
    hex::encode(Sha256::digest(body.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_document_sha256_stable() {
        let a = document_sha256("<recipes/>");
        let b = document_sha256("<recipes/>");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_ne!(a, document_sha256("<recipes></recipes>"));
    }

    #[tokio::test]
    async fn test_file_source_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.xml");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(
            f,
            r#"<recipes><recipe id="1" category="quick">
                <name>Toast</name><description>d</description>
                <image>i.jpg</image><prepTime>1</prepTime><cookTime>2</cookTime>
                <servings>1</servings><cost currency="KES">10</cost>
                <difficulty>Easy</difficulty>
                <ingredients><ingredient>bread</ingredient></ingredients>
                <steps><step>toast</step></steps>
                <tips><tip>hot</tip></tips>
            </recipe></recipes>"#
        )
        .unwrap();

        let src = source_for(path.to_str().unwrap(), 5);
        let records = src.fetch_recipes().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].total_time(), 3);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let src = FileSource::new("/nonexistent/recipes.xml");
        let err = src.fetch_recipes().await.unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }
}
