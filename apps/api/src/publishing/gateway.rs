//! Publish Gateway — pluggable, trait-based publisher for finished drafts.
//!
//! Default: `WordPressClient` (one REST call per publish, no retries).
//!
//! `AppState` holds an `Arc<dyn Publisher>`, swapped in tests for a recording fake.

use std::fmt;

use async_trait::async_trait;
use secrecy::SecretString;
use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Everything needed to publish one draft. The token is never logged.
pub struct PublishRequest {
    pub site_url: String,
    pub token: SecretString,
    pub title: String,
    pub content: String,
}

impl PublishRequest {
    pub fn new(
        site_url: impl Into<String>,
        token: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            site_url: site_url.into(),
            token: SecretString::new(token.into().into_boxed_str()),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Site origin with exactly one trailing slash removed, if present.
    pub fn site_origin(&self) -> &str {
        self.site_url
            .strip_suffix('/')
            .unwrap_or(self.site_url.as_str())
    }
}

impl fmt::Debug for PublishRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishRequest")
            .field("site_url", &self.site_url)
            .field("token", &"[REDACTED]")
            .field("title", &self.title)
            .field("content_len", &self.content.len())
            .finish()
    }
}

/// Normalized publish outcome. `post_url` is only set on success, `error` only on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PublishResult {
    pub fn published(post_url: Option<String>) -> Self {
        Self {
            success: true,
            post_url,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            post_url: None,
            error: Some(error.into()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to publish somewhere else without touching the handler.
///
/// Failures are folded into the returned `PublishResult`; nothing is raised.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, request: &PublishRequest) -> PublishResult;
}
