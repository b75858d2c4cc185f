//! Tone calibration — maps the requested article tone to its adjective set.
//!
//! Every tone label parses. Labels outside the known set fall back to the
//! generic adjective set rather than failing the request.

use serde::{Deserialize, Serialize};

/// Requested voice of the generated article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Enthusiastic,
    Informative,
    Authoritative,
    /// Any other label. Keeps the raw label so it round-trips unchanged.
    Unrecognized(String),
}

const PROFESSIONAL: &[&str] = &[
    "effective",
    "strategic",
    "proven",
    "industry-standard",
    "data-driven",
];
const CASUAL: &[&str] = &["cool", "awesome", "great", "fun", "handy"];
const ENTHUSIASTIC: &[&str] = &[
    "amazing",
    "game-changing",
    "revolutionary",
    "groundbreaking",
    "exceptional",
];
const INFORMATIVE: &[&str] = &[
    "important",
    "valuable",
    "essential",
    "fundamental",
    "critical",
];
const AUTHORITATIVE: &[&str] = &["definitive", "expert", "authoritative", "leading", "premium"];

/// Used for any label that is not one of the five known tones.
const GENERIC: &[&str] = &["effective", "useful", "helpful"];

impl Tone {
    pub fn label(&self) -> &str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Informative => "informative",
            Tone::Authoritative => "authoritative",
            Tone::Unrecognized(label) => label,
        }
    }

    /// Returns the ordered adjective set for this tone.
    pub fn adjectives(&self) -> ToneAdjectives {
        let words = match self {
            Tone::Professional => PROFESSIONAL,
            Tone::Casual => CASUAL,
            Tone::Enthusiastic => ENTHUSIASTIC,
            Tone::Informative => INFORMATIVE,
            Tone::Authoritative => AUTHORITATIVE,
            Tone::Unrecognized(_) => GENERIC,
        };
        ToneAdjectives { words }
    }
}

impl From<&str> for Tone {
    fn from(label: &str) -> Self {
        match label {
            "professional" => Tone::Professional,
            "casual" => Tone::Casual,
            "enthusiastic" => Tone::Enthusiastic,
            "informative" => Tone::Informative,
            "authoritative" => Tone::Authoritative,
            other => Tone::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for Tone {
    fn from(label: String) -> Self {
        Tone::from(label.as_str())
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Unrecognized(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// Ordered adjectives for one tone. Every set holds at least three words,
/// so the first three slots are always addressable.
#[derive(Debug, Clone, Copy)]
pub struct ToneAdjectives {
    words: &'static [&'static str],
}

impl ToneAdjectives {
    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    /// Opens the introduction.
    pub fn first(&self) -> &'static str {
        self.words[0]
    }

    /// Describes the topic in the definition section.
    pub fn second(&self) -> &'static str {
        self.words[1]
    }

    /// Qualifies each related keyword.
    pub fn third(&self) -> &'static str {
        self.words[2]
    }

    /// Adjective at `index`, wrapping around the set.
    pub fn cycled(&self, index: usize) -> &'static str {
        let words = self.words();
        words[index % words.len()]
    }

    /// Same as [`cycled`](Self::cycled) with the first letter upper-cased.
    pub fn cycled_capitalized(&self, index: usize) -> String {
        capitalize(self.cycled(index))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Enthusiastic,
        Tone::Informative,
        Tone::Authoritative,
    ];

    #[test]
    fn test_known_labels_parse_to_their_variant() {
        for tone in KNOWN {
            assert_eq!(Tone::from(tone.label()), tone);
        }
    }

    #[test]
    fn test_known_tones_have_five_adjectives() {
        for tone in KNOWN {
            assert_eq!(tone.adjectives().words().len(), 5, "tone {:?}", tone);
        }
    }

    #[test]
    fn test_unknown_label_falls_back_to_generic_set() {
        for label in ["sarcastic", "", "Professional", "formal "] {
            let tone = Tone::from(label);
            assert_eq!(tone, Tone::Unrecognized(label.to_string()));
            assert_eq!(tone.adjectives().words(), &["effective", "useful", "helpful"]);
        }
    }

    #[test]
    fn test_professional_is_default() {
        assert_eq!(Tone::default(), Tone::Professional);
        assert_eq!(Tone::default().adjectives().first(), "effective");
    }

    #[test]
    fn test_tone_serde_uses_plain_labels() {
        let tone: Tone = serde_json::from_str(r#""casual""#).unwrap();
        assert_eq!(tone, Tone::Casual);
        assert_eq!(serde_json::to_string(&Tone::Enthusiastic).unwrap(), r#""enthusiastic""#);

        let odd: Tone = serde_json::from_str(r#""whimsical""#).unwrap();
        assert_eq!(serde_json::to_string(&odd).unwrap(), r#""whimsical""#);
    }

    #[test]
    fn test_slots_follow_table_order() {
        let adjectives = Tone::Informative.adjectives();
        assert_eq!(adjectives.first(), "important");
        assert_eq!(adjectives.second(), "valuable");
        assert_eq!(adjectives.third(), "essential");
    }

    #[test]
    fn test_cycled_wraps_around() {
        let generic = Tone::from("unknown").adjectives();
        assert_eq!(generic.cycled(0), "effective");
        assert_eq!(generic.cycled(3), "effective");
        assert_eq!(generic.cycled(4), "useful");

        let casual = Tone::Casual.adjectives();
        assert_eq!(casual.cycled(6), "awesome");
    }

    #[test]
    fn test_capitalization_keeps_hyphenated_words_intact() {
        let professional = Tone::Professional.adjectives();
        assert_eq!(professional.cycled_capitalized(3), "Industry-standard");
        assert_eq!(professional.cycled_capitalized(4), "Data-driven");
        assert_eq!(capitalize(""), "");
    }
}
