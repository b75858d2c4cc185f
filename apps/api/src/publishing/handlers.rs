//! Axum route handlers for the Publish API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::publishing::gateway::{PublishRequest, PublishResult};
use crate::state::AppState;

/// Publish form plus the draft being published. The token is moved into a
/// `SecretString` before anything else sees it.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishBody {
    #[serde(default)]
    pub site_url: String,
    #[serde(default)]
    pub token: String,
    pub title: String,
    pub content: String,
}

/// POST /api/v1/publish/wordpress
///
/// Validates credentials, then makes a single publish attempt. Remote and
/// transport failures come back as `{"success": false, "error": ...}` with 200.
pub async fn handle_publish(
    State(state): State<AppState>,
    Json(body): Json<PublishBody>,
) -> Result<Json<PublishResult>, AppError> {
    if body.site_url.trim().is_empty() || body.token.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter your WordPress URL and access token.".to_string(),
        ));
    }

    let request = PublishRequest::new(body.site_url, body.token, body.title, body.content);
    info!(site = request.site_origin(), "Publishing draft");

    let result = state.publisher.publish(&request).await;
    Ok(Json(result))
}
