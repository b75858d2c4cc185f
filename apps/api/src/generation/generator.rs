//! Article Generation — deterministic template expansion of a content request.
//!
//! Flow: tone → adjective set, length → content size, then each section is
//! appended in order: heading, introduction, definition, key points,
//! related keywords, how-to, conclusion.
//!
//! No randomness and no I/O. The only suspension point is the simulated
//! latency awaited before composing.

use std::fmt::Write;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::generation::length::ContentLength;
use crate::generation::seo::{
    analysis_suggestions, generation_suggestions, SeoSuggestion, GENERATED_SEO_SCORE,
};
use crate::generation::tone::{Tone, ToneAdjectives};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Validated input to the generator. The caller guarantees a non-blank topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRequest {
    pub topic: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub length: ContentLength,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ContentRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_length(mut self, length: ContentLength) -> Self {
        self.length = length;
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }
}

/// A generated draft. Owned by the caller once returned; title and body may be edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub title: String,
    pub content: String,
    pub seo_score: u8,
    pub seo_suggestions: Vec<SeoSuggestion>,
}

/// Splits a raw comma-separated keyword string into trimmed, non-empty tokens.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Engine operations
// ────────────────────────────────────────────────────────────────────────────

/// Generates an article after the simulated latency. Never fails.
pub async fn generate_content(request: &ContentRequest, latency: Duration) -> GeneratedContent {
    info!(
        tone = request.tone.label(),
        length = ?request.length,
        keywords = request.keywords.len(),
        "Generating content"
    );
    simulate_latency(latency).await;

    let generated = compose(request);
    debug!(
        chars = generated.content.len(),
        "Generated \"{}\"", generated.title
    );
    generated
}

/// Returns SEO suggestions for a draft after the simulated latency.
///
/// The draft body is not inspected: the same five suggestions come back for any input.
pub async fn analyze_content(content: &str, latency: Duration) -> Vec<SeoSuggestion> {
    info!(chars = content.len(), "Analyzing content for SEO optimization");
    simulate_latency(latency).await;
    analysis_suggestions()
}

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

/// Pure composition step behind [`generate_content`].
pub fn compose(request: &ContentRequest) -> GeneratedContent {
    GeneratedContent {
        title: format!("The Complete Guide to {}", request.topic),
        content: ArticleBuilder::new(request).build(),
        seo_score: GENERATED_SEO_SCORE,
        seo_suggestions: generation_suggestions(&request.topic),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Article sections
// ────────────────────────────────────────────────────────────────────────────

struct ArticleBuilder<'a> {
    topic: &'a str,
    keywords: &'a [String],
    length: ContentLength,
    adjectives: ToneAdjectives,
    out: String,
}

impl<'a> ArticleBuilder<'a> {
    fn new(request: &'a ContentRequest) -> Self {
        Self {
            topic: &request.topic,
            keywords: &request.keywords,
            length: request.length,
            adjectives: request.tone.adjectives(),
            out: String::new(),
        }
    }

    fn build(mut self) -> String {
        self.heading();
        self.introduction();
        self.definition();
        self.key_points();
        self.related_keywords();
        self.how_to_succeed();
        self.conclusion();
        self.out
    }

    fn heading(&mut self) {
        let _ = write!(self.out, "# {}\n\n", self.topic);
    }

    fn introduction(&mut self) {
        let linked = if self.keywords.is_empty() {
            String::new()
        } else {
            format!(
                ", linking to keywords such as: {}",
                self.keywords.join(", ")
            )
        };
        let _ = write!(
            self.out,
            "This {} article discusses {}{}.\n\n",
            self.adjectives.first(),
            self.topic,
            linked
        );
    }

    fn definition(&mut self) {
        let topic = self.topic;
        let _ = write!(
            self.out,
            "## What is {topic}?\n\n{topic} is a {} topic in its field. ",
            self.adjectives.second()
        );
        if self.length.elaborates_definition() {
            let _ = write!(
                self.out,
                "Understanding {topic} helps professionals achieve better results in their work. "
            );
        }
        if self.length.includes_history() {
            let _ = write!(
                self.out,
                "The history of {topic} dates back to when experts first identified the need for \
                 structured approaches to this domain. Many leading organizations now incorporate \
                 {topic} as a core component of their strategy. "
            );
        }
        self.out.push_str("\n\n");
    }

    fn key_points(&mut self) {
        self.out.push_str("## Key Points\n\n");
        for i in 0..self.length.size().points_per_section {
            let outcome = if i % 2 == 0 {
                "can yield superior outcomes"
            } else {
                "are worth exploring"
            };
            let _ = writeln!(
                self.out,
                "- {} approaches to {} {}",
                self.adjectives.cycled_capitalized(i),
                self.topic,
                outcome
            );
        }
    }

    fn related_keywords(&mut self) {
        if self.keywords.is_empty() {
            return;
        }
        self.out.push_str("\n## Related Keywords\n\n");
        for keyword in self.keywords {
            let _ = writeln!(
                self.out,
                "- \"{keyword}\": {} concept related to {}",
                self.adjectives.third(),
                self.topic
            );
        }
    }

    fn how_to_succeed(&mut self) {
        let _ = write!(self.out, "\n## How To Succeed with {}\n\n", self.topic);
        let paragraphs = self.length.size().paragraphs;
        for i in 0..paragraphs {
            let _ = write!(
                self.out,
                "{} implementation of {} requires careful planning and execution. ",
                self.adjectives.cycled_capitalized(i),
                self.topic
            );
            if i + 1 < paragraphs {
                let focus = self.focus_term(i);
                let _ = write!(
                    self.out,
                    "Consider integrating {focus} into your workflow for {} results.\n\n",
                    self.adjectives.cycled(i + 1)
                );
            }
        }
    }

    fn conclusion(&mut self) {
        if !self.length.includes_conclusion() {
            return;
        }
        let _ = write!(
            self.out,
            "\n## Conclusion\n\nTo maximize the benefits of {}, consistently apply these \
             principles and stay updated with the latest developments in the field.",
            self.topic
        );
    }

    /// Keyword cycled by index, or the topic when there are none.
    fn focus_term(&self, index: usize) -> &'a str {
        let keywords = self.keywords;
        if keywords.is_empty() {
            self.topic
        } else {
            &keywords[index % keywords.len()]
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
