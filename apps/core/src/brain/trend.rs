//! Conversation records and mood trend analytics.
//!
//! Records are what the conversation store persists for each chat turn; the
//! summaries are computed over records the store hands back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::responder::ResponseResult;

/// Minimum change in average mood between halves to call a trend
pub const TREND_THRESHOLD: f64 = 0.5;

/// Who wrote a conversation record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    User,
    Ai,
}

/// One persisted conversation message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub id: Uuid,
    pub message_text: String,
    pub message_type: MessageType,
    pub mood_score: Option<u8>,
    pub contains_concern: bool,
    pub timestamp: DateTime<Utc>,
}

/// The pair of records written for one chat exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub user: ConversationRecord,
    pub ai: ConversationRecord,
}

impl ChatTurn {
    /// Both records carry the mood score and concern flag of the result
    pub fn record(user_message: &str, result: &ResponseResult, now: DateTime<Utc>) -> Self {
        let make = |text: &str, message_type| ConversationRecord {
            id: Uuid::new_v4(),
            message_text: text.to_string(),
            message_type,
            mood_score: Some(result.mood_score),
            contains_concern: result.contains_concern,
            timestamp: now,
        };

        Self {
            user: make(user_message, MessageType::User),
            ai: make(&result.response, MessageType::Ai),
        }
    }

    /// Id returned to the client for the exchange
    pub fn conversation_id(&self) -> Uuid {
        self.ai.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Improving,
    Declining,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodSummary {
    /// Rounded to one decimal
    pub average_mood: Option<f64>,
    pub mood_trend: MoodTrend,
    pub total_conversations: usize,
    pub concerns_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub total_messages: usize,
    pub ai_messages: usize,
    pub user_messages: usize,
    pub concerns_raised: usize,
    pub average_mood: Option<f64>,
}

fn mean(scores: &[f64]) -> f64 {
    scores.iter().sum::<f64>() / scores.len() as f64
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Trend of scores in chronological order: second half against first half
pub fn mood_trend(scores: &[f64]) -> MoodTrend {
    let mid_point = scores.len() / 2;
    if mid_point == 0 {
        return MoodTrend::Stable;
    }

    let first_half = mean(&scores[..mid_point]);
    let second_half = mean(&scores[mid_point..]);

    if second_half > first_half + TREND_THRESHOLD {
        MoodTrend::Improving
    } else if second_half < first_half - TREND_THRESHOLD {
        MoodTrend::Declining
    } else {
        MoodTrend::Stable
    }
}

/// Mood statistics over records that carry a score
pub fn summarize_mood(records: &[ConversationRecord]) -> MoodSummary {
    let mut scored: Vec<&ConversationRecord> =
        records.iter().filter(|r| r.mood_score.is_some()).collect();
    scored.sort_by_key(|r| r.timestamp);

    let scores: Vec<f64> = scored
        .iter()
        .filter_map(|r| r.mood_score)
        .map(f64::from)
        .collect();

    if scores.is_empty() {
        return MoodSummary {
            average_mood: None,
            mood_trend: MoodTrend::Stable,
            total_conversations: 0,
            concerns_count: 0,
        };
    }

    MoodSummary {
        average_mood: Some(round_one_decimal(mean(&scores))),
        mood_trend: mood_trend(&scores),
        total_conversations: scored.len(),
        concerns_count: scored.iter().filter(|r| r.contains_concern).count(),
    }
}

/// Message counts and unrounded average mood
pub fn summarize_conversations(records: &[ConversationRecord]) -> ConversationSummary {
    let scores: Vec<f64> = records
        .iter()
        .filter_map(|r| r.mood_score)
        .map(f64::from)
        .collect();

    ConversationSummary {
        total_messages: records.len(),
        ai_messages: records
            .iter()
            .filter(|r| r.message_type == MessageType::Ai)
            .count(),
        user_messages: records
            .iter()
            .filter(|r| r.message_type == MessageType::User)
            .count(),
        concerns_raised: records.iter().filter(|r| r.contains_concern).count(),
        average_mood: (!scores.is_empty()).then(|| mean(&scores)),
    }
}
