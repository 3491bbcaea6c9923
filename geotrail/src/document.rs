//! Document intake.
//!
//! Turns file text into a [`serde_json::Value`] and handles the tagged
//! `{"content": ..., "format": ...}` wrapper, which stores a document
//! together with the format chosen when it was first loaded.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::format::FormatTag;

/// Errors from reading document text.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text is not valid JSON.
    #[error("invalid json format: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parse document text into a JSON value.
pub fn parse_document(text: &str) -> Result<Value, DocumentError> {
    Ok(serde_json::from_str(text)?)
}

/// A document stored with its declared format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedDocument {
    pub content: Value,
    pub format: FormatTag,
}

impl TaggedDocument {
    pub fn new(content: Value, format: FormatTag) -> Self {
        Self { content, format }
    }

    /// Read a wrapper from a JSON value. Returns `None` unless the value is
    /// an object with a `content` field and a known `format` tag.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let content = object.get("content")?;
        let format = object.get("format")?.as_str()?.parse().ok()?;
        Some(Self::new(content.clone(), format))
    }

    pub fn into_parts(self) -> (Value, FormatTag) {
        (self.content, self.format)
    }
}

/// Split a tagged wrapper into its content and tag.
///
/// Anything that is not a wrapper is returned unchanged with no tag.
pub fn unwrap_tagged(value: Value) -> (Value, Option<FormatTag>) {
    let format = value
        .get("format")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<FormatTag>().ok());

    match (value, format) {
        (Value::Object(mut object), Some(format)) if object.contains_key("content") => {
            let content = object.remove("content").unwrap_or(Value::Null);
            (content, Some(format))
        }
        (value, _) => (value, None),
    }
}
