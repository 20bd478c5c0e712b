//! Content records rendered by the sideline.
//!
//! A `Content` is owned by whoever hosts the sideline. Cards only read it.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SidelineError};

/// One piece of content with its generated summary and labels.
///
/// Every field is required when deserializing. A missing or `null` `summary`
/// or `labels` is rejected instead of defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Content {
    /// Unique within the host's collection. Used as the list key, never rendered.
    pub id: i64,
    pub title: String,
    pub summary: String,
    /// Display order matters; duplicates are kept.
    pub labels: Vec<String>,
}

impl Content {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        summary: impl Into<String>,
        labels: Vec<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            summary: summary.into(),
            labels,
        }
    }

    /// Parse a single content object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parse a JSON document holding one content object or an array of them.
pub fn parse_contents(json: &str) -> Result<Vec<Content>> {
    // Dispatch on the top-level shape so serde reports the real field error.
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}

/// Read and parse a content file.
pub fn load_contents(path: impl AsRef<Path>) -> Result<Vec<Content>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SidelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let contents = parse_contents(&json)?;
    tracing::debug!(path = %path.display(), count = contents.len(), "Loaded content");

    Ok(contents)
}
