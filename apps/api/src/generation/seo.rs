//! SEO assessment — the fixed suggestion lists attached to generated and analyzed content.
//!
//! Neither list inspects the article body. `analyze_suggestions` in particular
//! returns the same five entries for any input.

use serde::{Deserialize, Serialize};

/// Score attached to every generated article.
pub const GENERATED_SEO_SCORE: u8 = 82;

/// Severity of a single suggestion. No other value is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoSuggestion {
    #[serde(rename = "type")]
    pub kind: String,
    pub suggestion: String,
    pub impact: Impact,
}

impl SeoSuggestion {
    fn new(kind: &str, suggestion: impl Into<String>, impact: Impact) -> Self {
        Self {
            kind: kind.to_string(),
            suggestion: suggestion.into(),
            impact,
        }
    }
}

/// Score band used by the UI to colour the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeoRating {
    Good,
    Fair,
    Poor,
}

impl SeoRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => SeoRating::Good,
            60..=79 => SeoRating::Fair,
            _ => SeoRating::Poor,
        }
    }
}

/// Suggestions attached to a freshly generated article, in display order.
pub fn generation_suggestions(topic: &str) -> Vec<SeoSuggestion> {
    vec![
        SeoSuggestion::new(
            "Keyword Usage",
            format!(
                "Use \"{topic}\" and key terms more frequently in the text for higher SEO impact."
            ),
            Impact::Medium,
        ),
        SeoSuggestion::new(
            "Headings",
            "Use more descriptive and hierarchical headings (H2, H3).",
            Impact::Medium,
        ),
        SeoSuggestion::new(
            "Links",
            "Add outbound and internal links to broaden relevance.",
            Impact::Low,
        ),
        SeoSuggestion::new(
            "Meta Description",
            format!("Create a concise meta description using \"{topic}\"."),
            Impact::High,
        ),
    ]
}

/// Suggestions returned by content analysis, in display order.
pub fn analysis_suggestions() -> Vec<SeoSuggestion> {
    vec![
        SeoSuggestion::new(
            "Readability",
            "The content has a Flesch reading ease score of 58. Consider simplifying some sentences for better readability.",
            Impact::Medium,
        ),
        SeoSuggestion::new(
            "Keyword Usage",
            "Primary keyword appears 7 times (1.4%). Consider increasing to 2-3% for optimal density.",
            Impact::Medium,
        ),
        SeoSuggestion::new(
            "Content Structure",
            "Add more subheadings to break up large sections of text.",
            Impact::Low,
        ),
        SeoSuggestion::new(
            "Meta Tags",
            "Ensure your title tag (under 60 characters) and meta description (under 160 characters) include your target keyword.",
            Impact::High,
        ),
        SeoSuggestion::new(
            "Content Length",
            "Current content length is good for SEO. Consider adding more detailed information in key sections.",
            Impact::Low,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impacts(suggestions: &[SeoSuggestion]) -> Vec<Impact> {
        suggestions.iter().map(|s| s.impact).collect()
    }

    #[test]
    fn test_generation_suggestions_order_and_impacts() {
        let suggestions = generation_suggestions("Widgets");
        let kinds: Vec<&str> = suggestions.iter().map(|s| s.kind.as_str()).collect();
        assert_eq!(
            kinds,
            ["Keyword Usage", "Headings", "Links", "Meta Description"]
        );
        assert_eq!(
            impacts(&suggestions),
            [Impact::Medium, Impact::Medium, Impact::Low, Impact::High]
        );
    }

    #[test]
    fn test_generation_suggestions_interpolate_topic() {
        let suggestions = generation_suggestions("Home Brewing");
        assert!(suggestions[0].suggestion.contains("\"Home Brewing\""));
        assert_eq!(
            suggestions[3].suggestion,
            "Create a concise meta description using \"Home Brewing\"."
        );
        assert!(!suggestions[1].suggestion.contains("Home Brewing"));
    }

    #[test]
    fn test_analysis_suggestions_order_and_impacts() {
        let suggestions = analysis_suggestions();
        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[0].kind, "Readability");
        assert_eq!(suggestions[4].kind, "Content Length");
        assert_eq!(
            impacts(&suggestions),
            [
                Impact::Medium,
                Impact::Medium,
                Impact::Low,
                Impact::High,
                Impact::Low
            ]
        );
    }

    #[test]
    fn test_suggestion_serializes_kind_as_type() {
        let value = serde_json::to_value(&generation_suggestions("X")[2]).unwrap();
        assert_eq!(value["type"], "Links");
        assert_eq!(value["impact"], "low");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_rating_bands() {
        assert_eq!(SeoRating::from_score(100), SeoRating::Good);
        assert_eq!(SeoRating::from_score(GENERATED_SEO_SCORE), SeoRating::Good);
        assert_eq!(SeoRating::from_score(80), SeoRating::Good);
        assert_eq!(SeoRating::from_score(79), SeoRating::Fair);
        assert_eq!(SeoRating::from_score(60), SeoRating::Fair);
        assert_eq!(SeoRating::from_score(59), SeoRating::Poor);
        assert_eq!(SeoRating::from_score(0), SeoRating::Poor);
    }
}
