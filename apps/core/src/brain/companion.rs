//! Companion extras: proactive check-ins and simulated transcription.

use serde::{Deserialize, Serialize};

use super::selector::ResponseSelector;
use super::templates::ResponseTemplates;
use crate::error::AppError;

/// Confidence reported by the simulated transcriber
pub const SIMULATED_CONFIDENCE: f32 = 0.95;

/// Duration assumed when the caller sends none
pub const DEFAULT_DURATION_SECS: f64 = 5.0;

const SHORT_UTTERANCE: &str = "Hello";
const MEDIUM_UTTERANCE: &str = "I need help with my medications";
const LONG_UTTERANCE: &str =
    "I'm feeling a bit lonely today and was wondering if we could chat for a while";

/// Assistant-initiated message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

pub fn proactive_check_in<S: ResponseSelector + ?Sized>(
    templates: &ResponseTemplates,
    selector: &S,
) -> CheckIn {
    let message = selector
        .choose(templates.check_ins())
        .unwrap_or_default()
        .to_string();

    CheckIn {
        message,
        kind: "proactive_check".to_string(),
    }
}

/// Output of the transcription stub
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    pub transcription: String,
    pub confidence: f32,
    pub duration: f64,
}

/// Stand-in for speech-to-text: the utterance depends only on its length.
pub fn simulate_transcription(duration_secs: f64) -> Result<Transcription, AppError> {
    if !duration_secs.is_finite() || duration_secs < 0.0 {
        return Err(AppError::Validation(format!(
            "duration must be a non-negative number of seconds, got {}",
            duration_secs
        )));
    }

    let transcription = if duration_secs < 3.0 {
        SHORT_UTTERANCE
    } else if duration_secs < 10.0 {
        MEDIUM_UTTERANCE
    } else {
        LONG_UTTERANCE
    };

    Ok(Transcription {
        transcription: transcription.to_string(),
        confidence: SIMULATED_CONFIDENCE,
        duration: duration_secs,
    })
}
