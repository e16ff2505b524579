//! File schema source.
//!
//! Reads a schema document that was previously dumped to disk. The address
//! is the path of the JSON file; a missing file means "no schema", while a
//! path that cannot be checked at all is a failure.

use super::{SchemaLookup, SchemaSource, SourceError, parse_document};
use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

/// Schema source reading JSON documents from the local file system
#[derive(Debug, Clone, Default)]
pub struct FileSchemaSource {
    base_dir: Option<PathBuf>,
    types_key: Option<String>,
}

impl FileSchemaSource {
    /// Source resolving addresses as paths, reading the document as the type map itself
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative addresses against `base_dir`
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Read the type map from `key` inside the document when the key is present
    pub fn with_types_key(mut self, key: impl Into<String>) -> Self {
        self.types_key = Some(key.into()).filter(|k: &String| !k.is_empty());
        self
    }

    fn resolve(&self, address: &str) -> PathBuf {
        let path = Path::new(address);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

async fn read_document(path: &Path) -> anyhow::Result<Value> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))
}

#[async_trait]
impl SchemaSource for FileSchemaSource {
    async fn fetch(&self, address: &str) -> Result<SchemaLookup, SourceError> {
        let path = self.resolve(address);
        let exists = tokio::fs::try_exists(&path).await.map_err(|e| {
            SourceError::Transient(format!("Failed to access {}: {}", path.display(), e))
        })?;
        if !exists {
            info!("No schema document at {}", path.display());
            return Ok(SchemaLookup::NotFound);
        }

        let document = read_document(&path)
            .await
            .map_err(|e| SourceError::Parse(format!("{:#}", e)))?;

        parse_document(document, self.types_key.as_deref())
    }
}
