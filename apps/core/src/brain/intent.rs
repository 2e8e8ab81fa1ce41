//! Intent Classification using ordered keyword rules.
//!
//! Each rule owns a set of lowercase substrings. Rules are checked in list
//! order and the first rule with a hit decides the intent, so overlapping
//! keywords always resolve the same way.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reply category assigned to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    Greeting,
    MedicationReminder,
    AppointmentReminder,
    MoodCheck,
    EmergencyResponse,
    /// Append-only material for low mood, never a classification output
    Encouragement,
    Default,
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl IntentCategory {
    /// Returns the wire label for the category
    pub fn label(&self) -> &'static str {
        match self {
            IntentCategory::Greeting => "greeting",
            IntentCategory::MedicationReminder => "medication_reminder",
            IntentCategory::AppointmentReminder => "appointment_reminder",
            IntentCategory::MoodCheck => "mood_check",
            IntentCategory::EmergencyResponse => "emergency_response",
            IntentCategory::Encouragement => "encouragement",
            IntentCategory::Default => "default",
        }
    }
}

/// Key of a keyword rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKey {
    Medication,
    Appointment,
    Mood,
    Emergency,
    Greeting,
    Gratitude,
}

impl IntentKey {
    /// Category used for template lookup.
    ///
    /// Gratitude has no reply set of its own and falls back to `Default`.
    pub fn category(&self) -> IntentCategory {
        match self {
            IntentKey::Medication => IntentCategory::MedicationReminder,
            IntentKey::Appointment => IntentCategory::AppointmentReminder,
            IntentKey::Mood => IntentCategory::MoodCheck,
            IntentKey::Emergency => IntentCategory::EmergencyResponse,
            IntentKey::Greeting => IntentCategory::Greeting,
            IntentKey::Gratitude => IntentCategory::Default,
        }
    }
}

/// One entry of the ordered keyword table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRule {
    pub key: IntentKey,
    pub keywords: Vec<String>,
}

impl IntentRule {
    pub fn new(key: IntentKey, keywords: &[&str]) -> Self {
        Self {
            key,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// First keyword found in already-lowercased text
    fn find_in(&self, text_lower: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| text_lower.contains(keyword))
    }
}

/// Which rule fired, and on what
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentMatch {
    pub key: IntentKey,
    pub keyword: String,
}

/// Built-in keyword table in evaluation order
pub fn default_rules() -> Vec<IntentRule> {
    vec![
        IntentRule::new(
            IntentKey::Medication,
            &["pill", "medication", "medicine", "drug", "dose", "tablet"],
        ),
        IntentRule::new(
            IntentKey::Appointment,
            &["appointment", "doctor", "visit", "clinic", "hospital", "checkup"],
        ),
        IntentRule::new(
            IntentKey::Mood,
            &["feel", "mood", "sad", "happy", "worried", "anxious", "depressed", "lonely"],
        ),
        IntentRule::new(
            IntentKey::Emergency,
            &["help", "emergency", "urgent", "pain", "hurt", "sick", "call"],
        ),
        IntentRule::new(
            IntentKey::Greeting,
            &["hello", "hi", "good morning", "good afternoon", "good evening"],
        ),
        IntentRule::new(
            IntentKey::Gratitude,
            &["thank", "thanks", "appreciate", "grateful"],
        ),
    ]
}

/// Intent classifier over an ordered rule list
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl IntentClassifier {
    /// Create a classifier; `rules` are evaluated in the given order
    pub fn new(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Find the first rule with a keyword occurring in `text`.
    ///
    /// Matching is plain substring containment, so "call" also fires on "recall".
    pub fn classify_match(&self, text: &str) -> Option<IntentMatch> {
        let text_lower = text.to_lowercase();

        self.rules.iter().find_map(|rule| {
            rule.find_in(&text_lower).map(|keyword| IntentMatch {
                key: rule.key,
                keyword: keyword.to_string(),
            })
        })
    }

    /// Classify the intent of a message
    pub fn classify(&self, text: &str) -> IntentCategory {
        self.classify_match(text)
            .map(|m| m.key.category())
            .unwrap_or(IntentCategory::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medication_detection() {
        let classifier = IntentClassifier::default();

        assert_eq!(
            classifier.classify("Did I take my pills?"),
            IntentCategory::MedicationReminder
        );
        assert_eq!(
            classifier.classify("What DOSE should I use"),
            IntentCategory::MedicationReminder
        );
    }

    #[test]
    fn test_first_rule_wins() {
        let classifier = IntentClassifier::default();

        // "doctor" (appointment) is checked before "sad" (mood)
        assert_eq!(
            classifier.classify("The doctor made me sad"),
            IntentCategory::AppointmentReminder
        );
        // "hello" reaches greeting before "thank" reaches gratitude
        assert_eq!(classifier.classify("Hello, thank you"), IntentCategory::Greeting);
    }

    #[test]
    fn test_substring_semantics() {
        let classifier = IntentClassifier::default();

        let m = classifier.classify_match("I can't recall").unwrap();
        assert_eq!(m.key, IntentKey::Emergency);
        assert_eq!(m.keyword, "call");
    }

    #[test]
    fn test_gratitude_falls_back_to_default() {
        let classifier = IntentClassifier::default();

        let m = classifier.classify_match("Thanks so much").unwrap();
        assert_eq!(m.key, IntentKey::Gratitude);
        assert_eq!(classifier.classify("Thanks so much"), IntentCategory::Default);
    }

    #[test]
    fn test_unknown_detection() {
        let classifier = IntentClassifier::default();

        assert_eq!(classifier.classify(""), IntentCategory::Default);
        assert_eq!(classifier.classify("   "), IntentCategory::Default);
        assert!(classifier.classify_match("").is_none());
    }

    #[test]
    fn test_labels() {
        assert_eq!(IntentCategory::MoodCheck.label(), "mood_check");
        assert_eq!(IntentCategory::EmergencyResponse.to_string(), "emergency_response");
        assert_eq!(
            serde_json::to_string(&IntentCategory::AppointmentReminder).unwrap(),
            "\"appointment_reminder\""
        );
    }
}
