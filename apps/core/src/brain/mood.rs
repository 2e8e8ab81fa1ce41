//! Mood scoring from positive and negative word lexicons.
//!
//! The scale is deliberately coarse: three levels, reported as 4, 6 or 8.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Positive words for the default lexicon
const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "happy",
    "wonderful",
    "excellent",
    "fine",
    "okay",
    "well",
];

/// Negative words for the default lexicon
const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "sad",
    "terrible",
    "awful",
    "sick",
    "pain",
    "hurt",
    "worried",
    "lonely",
];

/// Score reported for a mostly negative message
pub const LOW_MOOD_SCORE: u8 = 4;
/// Score reported when positive and negative hits balance out
pub const NEUTRAL_MOOD_SCORE: u8 = 6;
/// Score reported for a mostly positive message
pub const HIGH_MOOD_SCORE: u8 = 8;

/// Coarse mood level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLevel {
    Low,
    Neutral,
    High,
}

impl MoodLevel {
    pub fn score(&self) -> u8 {
        match self {
            MoodLevel::Low => LOW_MOOD_SCORE,
            MoodLevel::Neutral => NEUTRAL_MOOD_SCORE,
            MoodLevel::High => HIGH_MOOD_SCORE,
        }
    }
}

/// Positive and negative word sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MoodLexicon {
    #[validate(length(min = 1))]
    pub positive: Vec<String>,
    #[validate(length(min = 1))]
    pub negative: Vec<String>,
}

impl Default for MoodLexicon {
    fn default() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
            negative: NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl MoodLexicon {
    /// Words present in both sets
    pub fn overlap(&self) -> Vec<&str> {
        self.positive
            .iter()
            .filter(|w| self.negative.contains(w))
            .map(String::as_str)
            .collect()
    }
}

/// Counts lexicon hits and maps them to a mood level
#[derive(Debug, Clone, Default)]
pub struct MoodAnalyzer {
    lexicon: MoodLexicon,
}

impl MoodAnalyzer {
    pub fn new(lexicon: MoodLexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &MoodLexicon {
        &self.lexicon
    }

    /// Number of distinct words from `words` occurring in `text_lower`.
    /// Repeats of the same word count once.
    fn count_hits(words: &[String], text_lower: &str) -> usize {
        words.iter().filter(|w| text_lower.contains(w.as_str())).count()
    }

    pub fn level(&self, text: &str) -> MoodLevel {
        let text_lower = text.to_lowercase();

        let positive_count = Self::count_hits(&self.lexicon.positive, &text_lower);
        let negative_count = Self::count_hits(&self.lexicon.negative, &text_lower);

        if positive_count > negative_count {
            MoodLevel::High
        } else if negative_count > positive_count {
            MoodLevel::Low
        } else {
            MoodLevel::Neutral
        }
    }

    /// Mood score in {4, 6, 8}
    pub fn analyze(&self, text: &str) -> u8 {
        self.level(text).score()
    }
}
