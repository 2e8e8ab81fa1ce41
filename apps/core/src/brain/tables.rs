//! Engine tables: keyword rules, lexicons, templates and persona.
//!
//! Built once at startup, either from the built-in defaults or from a JSON
//! file, then shared read-only by every responder call.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;
use validator::Validate;

use super::concern::default_concern_keywords;
use super::intent::{default_rules, IntentRule};
use super::mood::MoodLexicon;
use super::templates::ResponseTemplates;
use crate::error::AppError;

/// Who the assistant presents itself as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Persona {
    #[validate(length(min = 1))]
    pub name: String,
    pub traits: Vec<String>,
    pub communication_style: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: "Care".to_string(),
            traits: ["warm", "patient", "understanding", "gentle", "encouraging"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            communication_style: "simple, clear, and caring".to_string(),
        }
    }
}

/// Complete immutable configuration of the responder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EngineTables {
    #[validate(nested)]
    pub persona: Persona,
    /// Evaluated in order, first match wins
    #[validate(length(min = 1))]
    pub intent_rules: Vec<IntentRule>,
    #[validate(nested)]
    pub mood: MoodLexicon,
    #[validate(length(min = 1))]
    pub concern_keywords: Vec<String>,
    #[validate(nested)]
    pub templates: ResponseTemplates,
}

impl Default for EngineTables {
    fn default() -> Self {
        Self {
            persona: Persona::default(),
            intent_rules: default_rules(),
            mood: MoodLexicon::default(),
            concern_keywords: default_concern_keywords(),
            templates: ResponseTemplates::default(),
        }
    }
}

fn lowercase_all(words: &mut [String]) {
    for word in words.iter_mut() {
        *word = word.to_lowercase();
    }
}

/// Blank keywords match every message, since `contains("")` is always true
fn reject_blank(list: &str, words: &[String]) -> Result<(), AppError> {
    if words.iter().any(|w| w.trim().is_empty()) {
        return Err(AppError::Config(format!("{} contains a blank keyword", list)));
    }
    Ok(())
}

impl EngineTables {
    /// Load tables from a JSON file. Missing sections fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let tables = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            rules = tables.intent_rules.len(),
            "Loaded engine tables"
        );
        Ok(tables)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        let tables: EngineTables = serde_json::from_str(raw)?;
        tables.normalized().checked()
    }

    /// Lowercase every keyword; matching is done against lowercased text
    fn normalized(mut self) -> Self {
        for rule in self.intent_rules.iter_mut() {
            lowercase_all(&mut rule.keywords);
        }
        lowercase_all(&mut self.mood.positive);
        lowercase_all(&mut self.mood.negative);
        lowercase_all(&mut self.concern_keywords);
        self
    }

    /// Field validation plus the structural rules the derive cannot express
    pub fn checked(self) -> Result<Self, AppError> {
        self.validate()?;

        let mut seen = HashSet::new();
        for rule in &self.intent_rules {
            if !seen.insert(rule.key) {
                return Err(AppError::Config(format!(
                    "intent rule {:?} is declared more than once",
                    rule.key
                )));
            }
            if rule.keywords.is_empty() {
                return Err(AppError::Config(format!(
                    "intent rule {:?} has no keywords",
                    rule.key
                )));
            }
            reject_blank(&format!("intent rule {:?}", rule.key), &rule.keywords)?;
        }

        reject_blank("positive mood lexicon", &self.mood.positive)?;
        reject_blank("negative mood lexicon", &self.mood.negative)?;
        reject_blank("concern keywords", &self.concern_keywords)?;

        let overlap = self.mood.overlap();
        if !overlap.is_empty() {
            return Err(AppError::Config(format!(
                "mood lexicons must be disjoint, shared words: {}",
                overlap.join(", ")
            )));
        }

        Ok(self)
    }
}
