//! Article length presets.

use serde::{Deserialize, Serialize};

/// Requested article length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentLength {
    Short,
    #[default]
    Medium,
    Long,
}

/// How much body text a length produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSize {
    /// Sentences in the "How To Succeed" section.
    pub paragraphs: usize,
    /// Bullets in the "Key Points" section.
    pub points_per_section: usize,
}

impl ContentLength {
    pub fn size(self) -> ContentSize {
        match self {
            ContentLength::Short => ContentSize {
                paragraphs: 2,
                points_per_section: 3,
            },
            ContentLength::Medium => ContentSize {
                paragraphs: 4,
                points_per_section: 5,
            },
            ContentLength::Long => ContentSize {
                paragraphs: 8,
                points_per_section: 7,
            },
        }
    }

    /// Medium and long articles elaborate on the definition.
    pub fn elaborates_definition(self) -> bool {
        matches!(self, ContentLength::Medium | ContentLength::Long)
    }

    /// Only long articles carry the historical-context sentences.
    pub fn includes_history(self) -> bool {
        matches!(self, ContentLength::Long)
    }

    pub fn includes_conclusion(self) -> bool {
        matches!(self, ContentLength::Medium | ContentLength::Long)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_table() {
        assert_eq!(
            ContentLength::Short.size(),
            ContentSize {
                paragraphs: 2,
                points_per_section: 3
            }
        );
        assert_eq!(
            ContentLength::Medium.size(),
            ContentSize {
                paragraphs: 4,
                points_per_section: 5
            }
        );
        assert_eq!(
            ContentLength::Long.size(),
            ContentSize {
                paragraphs: 8,
                points_per_section: 7
            }
        );
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(ContentLength::default(), ContentLength::Medium);
    }

    #[test]
    fn test_section_flags_nest() {
        assert!(!ContentLength::Short.elaborates_definition());
        assert!(!ContentLength::Short.includes_conclusion());
        assert!(ContentLength::Medium.elaborates_definition());
        assert!(!ContentLength::Medium.includes_history());
        assert!(ContentLength::Long.includes_history());
        assert!(ContentLength::Long.includes_conclusion());
    }

    #[test]
    fn test_unknown_length_is_rejected() {
        let result: Result<ContentLength, _> = serde_json::from_str(r#""epic""#);
        assert!(result.is_err());
        let long: ContentLength = serde_json::from_str(r#""long""#).unwrap();
        assert_eq!(long, ContentLength::Long);
    }
}
