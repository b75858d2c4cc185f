/// WordPress Client — the single point of entry for all WordPress REST calls.
///
/// One POST per publish: no retries, no backoff. Every failure is folded into
/// a `PublishResult` before it leaves this module.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::publishing::gateway::{PublishRequest, PublishResult, Publisher};

const POSTS_PATH: &str = "/wp-json/wp/v2/posts";
const PUBLISH_STATUS: &str = "publish";
const FALLBACK_API_ERROR: &str = "Failed to publish to WordPress";
const FALLBACK_UNKNOWN_ERROR: &str = "An unknown error occurred.";

#[derive(Debug, Error)]
pub enum WordPressError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl WordPressError {
    /// HTTP status returned by WordPress, if the call got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            WordPressError::Api { status, .. } => Some(*status),
            WordPressError::Http(e) => e.status().map(|s| s.as_u16()),
            WordPressError::Parse(_) => None,
        }
    }

    /// Message shown to the user for this failure.
    fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}

#[derive(Debug, Serialize)]
struct CreatePostRequest<'a> {
    title: &'a str,
    content: &'a str,
    status: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreatedPost {
    link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WordPressErrorBody {
    message: Option<serde_json::Value>,
}

/// Publishes drafts through the WordPress REST API (`/wp-json/wp/v2/posts`).
#[derive(Clone)]
pub struct WordPressClient {
    client: Client,
}

impl WordPressClient {
    pub fn new(timeout: Duration) -> Result<Self, WordPressError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Makes the create-post call and returns the new post's link, if WordPress sent one.
    pub async fn create_post(
        &self,
        request: &PublishRequest,
    ) -> Result<Option<String>, WordPressError> {
        let url = posts_url(request.site_origin());
        let body = CreatePostRequest {
            title: &request.title,
            content: &request.content,
            status: PUBLISH_STATUS,
        };

        debug!(
            url = %url,
            title = %request.title,
            content_len = request.content.len(),
            "Sending WordPress create-post request"
        );

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(request.token.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(WordPressError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        let text = response.text().await?;
        let created: CreatedPost = serde_json::from_str(&text)?;
        Ok(created.link)
    }
}

#[async_trait]
impl Publisher for WordPressClient {
    async fn publish(&self, request: &PublishRequest) -> PublishResult {
        match self.create_post(request).await {
            Ok(post_url) => {
                info!(site = request.site_origin(), "Published \"{}\"", request.title);
                PublishResult::published(post_url)
            }
            Err(e) => {
                warn!(
                    site = request.site_origin(),
                    status = e.status(),
                    "Publishing failed: {e}"
                );
                PublishResult::failed(e.user_message())
            }
        }
    }
}

fn posts_url(site_origin: &str) -> String {
    format!("{site_origin}{POSTS_PATH}")
}

/// Extracts `message` from an error body, falling back when it is absent,
/// empty, or the body is not JSON.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<WordPressErrorBody>(body)
        .unwrap_or_default()
        .message
        .and_then(|m| m.as_str().map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| FALLBACK_API_ERROR.to_string())
}
