//! # Brain Module
//!
//! Rule-based conversational engine for the care companion.
//! Classifies each message on its own, with no state carried between turns.
//!
//! ## Components
//! - `intent`: ordered keyword rules, first match wins
//! - `mood`: three-level mood score from word lexicons
//! - `concern`: health and safety signal detection
//! - `templates`: canned replies per category
//! - `selector`: template selection strategies (random in production)
//! - `tables`: the immutable bundle of rules, lexicons, templates and persona
//! - `responder`: main orchestrator producing a `ResponseResult`
//! - `companion`: proactive check-ins and the transcription stub
//! - `trend`: chat-turn records and mood trend summaries

pub mod companion;
pub mod concern;
pub mod intent;
pub mod mood;
pub mod responder;
pub mod selector;
pub mod tables;
pub mod templates;
pub mod trend;

pub use companion::{simulate_transcription, CheckIn, Transcription};
pub use concern::ConcernDetector;
pub use intent::{IntentCategory, IntentClassifier, IntentKey, IntentMatch, IntentRule};
pub use mood::{MoodAnalyzer, MoodLevel, MoodLexicon};
pub use responder::{CallerContext, ElderCareResponder, ResponseResult};
pub use selector::{FirstSelector, FixedSelector, RandomSelector, ResponseSelector};
pub use tables::{EngineTables, Persona};
pub use templates::ResponseTemplates;
pub use trend::{
    summarize_conversations, summarize_mood, ChatTurn, ConversationRecord, ConversationSummary,
    MessageType, MoodSummary, MoodTrend,
};
