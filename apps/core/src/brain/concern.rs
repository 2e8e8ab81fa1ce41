//! Safety and health concern detection.

/// Substrings that flag a potential health or safety risk
const CONCERN_KEYWORDS: &[&str] = &[
    "pain",
    "hurt",
    "sick",
    "emergency",
    "help",
    "can't",
    "unable",
    "forgot",
    "confused",
    "dizzy",
    "chest pain",
    "breathing",
    "fall",
    "fell",
];

/// Words that escalate a concern to an emergency reply
const ESCALATION_KEYWORDS: &[&str] = &["emergency", "help"];

pub fn default_concern_keywords() -> Vec<String> {
    CONCERN_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

/// Existence check over a concern lexicon.
///
/// Substring semantics: "unable" also fires inside longer words.
#[derive(Debug, Clone)]
pub struct ConcernDetector {
    keywords: Vec<String>,
}

impl Default for ConcernDetector {
    fn default() -> Self {
        Self::new(default_concern_keywords())
    }
}

impl ConcernDetector {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// First concern keyword found in `text`, if any
    pub fn find(&self, text: &str) -> Option<&str> {
        let text_lower = text.to_lowercase();
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| text_lower.contains(keyword))
    }

    pub fn detect(&self, text: &str) -> bool {
        self.find(text).is_some()
    }
}

/// True when the raw text asks for emergency help outright
pub fn requests_emergency_help(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    ESCALATION_KEYWORDS
        .iter()
        .any(|keyword| text_lower.contains(keyword))
}
