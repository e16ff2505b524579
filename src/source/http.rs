//! HTTP schema source.
//!
//! Fetches the schema document of a hosted application over plain HTTP.
//! Not a browser: the document is requested directly from the configured
//! schema path. Retries on network errors, 5xx and 429, and keeps polling
//! while the document does not yet carry the type map.

use super::{SchemaLookup, SchemaSource, SourceError, extract_type_map, resolve_address};
use crate::config::SourceSection;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Result of a single request
enum Attempt {
    Done(SchemaLookup),
    /// Document fetched but the type map is not in it yet
    Pending,
    Retry(String),
}

/// Schema source backed by an HTTP client.
///
/// One client is shared by every request made through this source.
#[derive(Clone)]
pub struct HttpSchemaSource {
    client: reqwest::Client,
    config: SourceSection,
}

impl HttpSchemaSource {
    /// Create a new HTTP source with the given source settings.
    pub fn new(config: SourceSection) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(concat!("app-schema-sdk/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    /// Full URL of the schema document for `address`
    pub fn schema_url(&self, address: &str) -> Result<String, SourceError> {
        let base = resolve_address(address, &self.config.url_template)?;
        let path = self.config.schema_path.trim();
        if path.is_empty() {
            Ok(base)
        } else if path.starts_with('/') {
            Ok(format!("{}{}", base, path))
        } else {
            Ok(format!("{}/{}", base, path))
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<Attempt, SourceError> {
        let resp = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => return Ok(Attempt::Retry(format!("request failed: {}", e))),
        };

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(Attempt::Done(SchemaLookup::NotFound));
        }
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Ok(Attempt::Retry(format!("server responded {}", status)));
        }
        if !status.is_success() {
            return Err(SourceError::Rejected(status.as_u16()));
        }

        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => return Ok(Attempt::Retry(format!("reading body failed: {}", e))),
        };
        let document: Value = serde_json::from_str(&body)
            .map_err(|e| SourceError::Parse(format!("schema document is not JSON: {}", e)))?;

        match extract_type_map(document, self.config.types_key())? {
            Some(lookup) => Ok(Attempt::Done(lookup)),
            None => Ok(Attempt::Pending),
        }
    }
}

#[async_trait]
impl SchemaSource for HttpSchemaSource {
    async fn fetch(&self, address: &str) -> Result<SchemaLookup, SourceError> {
        let url = self.schema_url(address)?;
        let max_attempts = self.config.max_attempts.max(1);
        let mut last_reason = String::new();
        let mut schema_pending = false;

        for attempt in 1..=max_attempts {
            debug!("Fetching {} (attempt {}/{})", url, attempt, max_attempts);

            match self.fetch_once(&url).await? {
                Attempt::Done(lookup) => {
                    if let SchemaLookup::Found(raw) = &lookup {
                        info!("Fetched {} types from {}", raw.types.len(), url);
                    } else {
                        info!("No schema at {}", url);
                    }
                    return Ok(lookup);
                }
                Attempt::Pending => {
                    debug!("Schema at {} not available yet", url);
                    schema_pending = true;
                }
                Attempt::Retry(reason) => {
                    warn!("Attempt {} for {} failed: {}", attempt, url, reason);
                    schema_pending = false;
                    last_reason = reason;
                }
            }

            if attempt < max_attempts {
                tokio::time::sleep(Duration::from_millis(self.config.poll_interval_ms)).await;
            }
        }

        if schema_pending {
            info!("Schema at {} never became available", url);
            Ok(SchemaLookup::NotFound)
        } else {
            Err(SourceError::Transient(format!(
                "{} after {} attempts: {}",
                url, max_attempts, last_reason
            )))
        }
    }
}
