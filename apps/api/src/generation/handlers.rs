//! Axum route handlers for the Content API.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::export::attachment_disposition;
use crate::generation::generator::{
    analyze_content, generate_content, parse_keywords, ContentRequest, GeneratedContent,
};
use crate::generation::length::ContentLength;
use crate::generation::seo::{SeoRating, SeoSuggestion};
use crate::generation::tone::Tone;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Form fields as the UI holds them. `keywords` is the raw comma-separated text.
#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    pub topic: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub length: ContentLength,
    #[serde(default)]
    pub keywords: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(flatten)]
    pub generated: GeneratedContent,
    pub seo_rating: SeoRating,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeBody {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub suggestions: Vec<SeoSuggestion>,
}

#[derive(Debug, Deserialize)]
pub struct ExportBody {
    pub title: String,
    pub content: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/content/generate
///
/// Validates the form, splits keywords, and runs the generator.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> Result<Json<GenerateResponse>, AppError> {
    if body.topic.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a topic to generate content.".to_string(),
        ));
    }

    let request = ContentRequest::new(body.topic)
        .with_tone(body.tone)
        .with_length(body.length)
        .with_keywords(parse_keywords(&body.keywords));

    let generated = generate_content(&request, state.config.generate_delay()).await;
    let seo_rating = SeoRating::from_score(generated.seo_score);

    Ok(Json(GenerateResponse {
        generated,
        seo_rating,
    }))
}

/// POST /api/v1/content/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeBody>,
) -> Json<AnalyzeResponse> {
    let suggestions = analyze_content(&body.content, state.config.analyze_delay()).await;
    Json(AnalyzeResponse { suggestions })
}

/// POST /api/v1/content/export
///
/// Returns the draft body as a `.txt` attachment named after the title.
pub async fn handle_export(Json(body): Json<ExportBody>) -> Result<impl IntoResponse, AppError> {
    let disposition = HeaderValue::from_str(&attachment_disposition(&body.title))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid export file name: {e}")))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body.content,
    ))
}
