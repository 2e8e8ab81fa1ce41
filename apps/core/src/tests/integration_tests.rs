//! Integration Tests
//!
//! End-to-end flows across configuration, the responder and the analytics
//! helpers, including concurrent use of one shared responder.

use crate::brain::{
    summarize_conversations, summarize_mood, CallerContext, ChatTurn, ElderCareResponder,
    EngineTables, FirstSelector, IntentCategory, MessageType, MoodTrend,
};
use crate::config::{EngineConfig, TABLES_PATH_VAR};
use chrono::{Duration, Utc};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_responder_across_tasks() {
    let responder = Arc::new(ElderCareResponder::new(EngineTables::default()));
    let messages = [
        ("Hello", IntentCategory::Greeting, false),
        ("Did I take my pills?", IntentCategory::MedicationReminder, false),
        ("I fell and need help", IntentCategory::EmergencyResponse, true),
        ("", IntentCategory::Default, false),
    ];

    let mut handles = Vec::new();
    for i in 0..64 {
        let responder = Arc::clone(&responder);
        let (text, intent, concern) = messages[i % messages.len()];
        handles.push(tokio::spawn(async move {
            let result = responder.generate_response(text, None);
            assert_eq!(result.intent, intent, "intent for '{}'", text);
            assert_eq!(result.contains_concern, concern);
            assert!(!result.response.is_empty());
        }));
    }

    for handle in handles {
        handle.await.expect("task panicked");
    }
}

#[test]
fn test_responder_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ElderCareResponder>();
    assert_send_sync::<ElderCareResponder<FirstSelector>>();
}

// ============================================================================
// Configuration to reply
// ============================================================================

#[test]
fn test_custom_tables_drive_replies() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "intent_rules": [ {{ "key": "greeting", "keywords": ["HOWDY"] }} ],
            "concern_keywords": ["wobbly"]
        }}"#
    )
    .unwrap();

    temp_env::with_var(TABLES_PATH_VAR, Some(file.path()), || {
        let config = EngineConfig::from_process_env().unwrap();
        let tables = config.load_tables().unwrap();
        let responder = ElderCareResponder::with_selector(tables, FirstSelector);

        let context = CallerContext::named("Walter White");
        let result = responder.generate_response("Howdy partner", Some(&context));
        assert_eq!(result.intent, IntentCategory::Greeting);
        assert!(result.response.starts_with("Hello Walter! "));

        // default keywords are gone, "pills" no longer classifies
        let result = responder.generate_response("Did I take my pills?", None);
        assert_eq!(result.intent, IntentCategory::Default);

        let result = responder.generate_response("I feel wobbly", None);
        assert!(result.contains_concern);
    });
}

#[test]
fn test_invalid_tables_file_fails_to_load() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "intent_rules": [] }}"#).unwrap();

    let config = EngineConfig {
        tables_path: Some(file.path().to_path_buf()),
        ..EngineConfig::default()
    };
    assert!(config.load_tables().is_err());
}

// ============================================================================
// Chat turns to analytics
// ============================================================================

#[test]
fn test_turns_feed_mood_summary() {
    let responder = ElderCareResponder::with_selector(EngineTables::default(), FirstSelector);
    let start = Utc::now();
    let conversation = [
        "Good morning, I feel great",
        "The garden looks wonderful",
        "I feel sad and lonely",
        "My back hurts, it is terrible",
    ];

    let mut records = Vec::new();
    for (i, text) in conversation.iter().enumerate() {
        let result = responder.generate_response(text, None);
        let turn = ChatTurn::record(text, &result, start + Duration::minutes(i as i64));
        records.push(turn.user);
        records.push(turn.ai);
    }

    let mood = summarize_mood(&records);
    assert_eq!(mood.total_conversations, 8);
    assert_eq!(mood.mood_trend, MoodTrend::Declining);
    assert_eq!(mood.average_mood, Some(6.0));
    assert_eq!(mood.concerns_count, 2);

    let summary = summarize_conversations(&records);
    assert_eq!(summary.total_messages, 8);
    assert_eq!(summary.user_messages, 4);
    assert_eq!(summary.ai_messages, 4);
    assert_eq!(summary.concerns_raised, 2);
    assert!(records
        .iter()
        .filter(|r| r.message_type == MessageType::Ai)
        .all(|r| !r.message_text.is_empty()));
}
