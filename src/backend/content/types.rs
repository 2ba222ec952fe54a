/**
 * Content Types
 *
 * The content type enum and the request/response types for the content
 * endpoints. The wire format mirrors the public API: `type` and `createdAt`
 * keys, tag titles resolved inline so clients never issue follow-up lookups.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of a content record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Document,
    Tweet,
    Youtube,
    Link,
}

impl ContentType {
    /// Database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Tweet => "tweet",
            Self::Youtube => "youtube",
            Self::Link => "link",
        }
    }

    /// Parse from the wire/database representation; exact match only
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "document" => Some(Self::Document),
            "tweet" => Some(Self::Tweet),
            "youtube" => Some(Self::Youtube),
            "link" => Some(Self::Link),
            _ => None,
        }
    }
}

/// Request body for POST /api/v1/content
///
/// `content_type` is carried as a plain string so enum-membership failures
/// surface as field-level validation errors rather than body rejections.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateContentRequest {
    #[serde(rename = "type", default)]
    pub content_type: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A content record as returned by the API: tag titles and owner username
/// resolved eagerly, creation timestamp in RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub content_type: String,
    pub link: String,
    pub title: String,
    /// Tag titles in the order given at creation
    pub tags: Vec<String>,
    /// Owner's username
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Response body for mutating content endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ContentMessage {
    pub message: String,
}
