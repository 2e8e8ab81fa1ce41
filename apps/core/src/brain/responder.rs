//! Care responder - main orchestrator for the brain module.
//!
//! Coordinates intent classification, mood scoring and concern detection,
//! then composes a reply from the template tables.
//!
//! Composition order:
//! 1. Classify intent, score mood, detect concerns
//! 2. Escalate the reply category when a concern is present
//! 3. Pick a template through the selector
//! 4. Personalize greetings with the caller's first name
//! 5. Append encouragement for low mood

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::companion::{self, CheckIn};
use super::concern::{requests_emergency_help, ConcernDetector};
use super::intent::{IntentCategory, IntentClassifier};
use super::mood::{MoodAnalyzer, LOW_MOOD_SCORE};
use super::selector::{RandomSelector, ResponseSelector};
use super::tables::{EngineTables, Persona};
use super::templates::ResponseTemplates;

/// Optional caller details supplied by the identity layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerContext {
    pub display_name: Option<String>,
}

impl CallerContext {
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
        }
    }

    /// First whitespace-separated token of the display name
    pub fn first_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
    }
}

/// Outcome of one chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseResult {
    pub response: String,
    /// Classified intent, before any concern escalation
    pub intent: IntentCategory,
    pub mood_score: u8,
    pub contains_concern: bool,
}

/// Stateless responder over immutable tables.
///
/// `Send + Sync` whenever the selector is; share it behind an `Arc`.
pub struct ElderCareResponder<S = RandomSelector> {
    persona: Persona,
    intent_classifier: IntentClassifier,
    mood_analyzer: MoodAnalyzer,
    concern_detector: ConcernDetector,
    templates: ResponseTemplates,
    selector: S,
}

impl Default for ElderCareResponder<RandomSelector> {
    fn default() -> Self {
        Self::new(EngineTables::default())
    }
}

impl ElderCareResponder<RandomSelector> {
    /// Create a responder with production randomness
    pub fn new(tables: EngineTables) -> Self {
        Self::with_selector(tables, RandomSelector)
    }
}

impl<S: ResponseSelector> ElderCareResponder<S> {
    pub fn with_selector(tables: EngineTables, selector: S) -> Self {
        Self {
            persona: tables.persona,
            intent_classifier: IntentClassifier::new(tables.intent_rules),
            mood_analyzer: MoodAnalyzer::new(tables.mood),
            concern_detector: ConcernDetector::new(tables.concern_keywords),
            templates: tables.templates,
            selector,
        }
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn classify_intent(&self, text: &str) -> IntentCategory {
        self.intent_classifier.classify(text)
    }

    pub fn analyze_mood(&self, text: &str) -> u8 {
        self.mood_analyzer.analyze(text)
    }

    pub fn detect_concerns(&self, text: &str) -> bool {
        self.concern_detector.detect(text)
    }

    /// Category whose templates are used for the reply.
    ///
    /// Safety signals take precedence over the topic.
    fn reply_category(&self, text: &str, intent: IntentCategory, concern: bool) -> IntentCategory {
        if !concern {
            return intent;
        }
        if requests_emergency_help(text) {
            IntentCategory::EmergencyResponse
        } else {
            IntentCategory::MoodCheck
        }
    }

    /// Pick a template for `category`, falling back to the default set
    fn pick_template(&self, category: IntentCategory) -> String {
        if let Some(template) = self.selector.choose(self.templates.for_category(category)) {
            return template.to_string();
        }

        warn!(category = %category, "No templates for category, using default");
        self.selector
            .choose(self.templates.for_category(IntentCategory::Default))
            .unwrap_or_default()
            .to_string()
    }

    /// Compose a reply to one message. Never fails.
    pub fn generate_response(&self, text: &str, context: Option<&CallerContext>) -> ResponseResult {
        // 1. Analysis
        let matched = self.intent_classifier.classify_match(text);
        let intent = matched
            .as_ref()
            .map(|m| m.key.category())
            .unwrap_or(IntentCategory::Default);
        let mood_score = self.mood_analyzer.analyze(text);
        let contains_concern = self.concern_detector.detect(text);

        debug!(
            intent = %intent,
            keyword = matched.as_ref().map(|m| m.keyword.as_str()),
            mood_score,
            contains_concern,
            "Classified message"
        );

        // 2. Escalation
        let category = self.reply_category(text, intent, contains_concern);
        if category != intent {
            info!(from = %intent, to = %category, "Concern escalated reply category");
        }

        // 3. Base template
        let mut response = self.pick_template(category);

        // 4. Personalization
        if category == IntentCategory::Greeting {
            if let Some(name) = context.and_then(CallerContext::first_name) {
                response = format!("Hello {}! {}", name, response);
            }
        }

        // 5. Encouragement for low mood
        // No fallback here: a default reply is not encouragement
        if mood_score <= LOW_MOOD_SCORE {
            match self
                .selector
                .choose(self.templates.for_category(IntentCategory::Encouragement))
            {
                Some(encouragement) => {
                    response.push(' ');
                    response.push_str(encouragement);
                }
                None => warn!("No encouragement templates, low-mood suffix skipped"),
            }
        }

        ResponseResult {
            response,
            intent,
            mood_score,
            contains_concern,
        }
    }

    /// Proactive check-in opener
    pub fn proactive_check_in(&self) -> CheckIn {
        companion::proactive_check_in(&self.templates, &self.selector)
    }
}
