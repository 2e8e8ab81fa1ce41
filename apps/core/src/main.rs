// Care companion CLI
// Runs the responder and the companion helpers from the command line, printing JSON

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use carecompanion_core::brain::{
    simulate_transcription, summarize_conversations, summarize_mood, CallerContext, ChatTurn,
    ConversationRecord, ElderCareResponder, ResponseResult,
};
use carecompanion_core::config::EngineConfig;
use carecompanion_core::telemetry;

/// Fallback for `chat --name`
const DISPLAY_NAME_VAR: &str = "CARE_DISPLAY_NAME";

#[derive(Debug, Parser)]
#[command(
    name = "carecompanion",
    about = "Care companion conversational engine",
    after_help = "Examples:\n  carecompanion chat --name \"Mary Johnson\" Hello\n  carecompanion transcribe --duration 4\n  carecompanion trend records.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Reply to one message, or to each stdin line when no message is given")]
    Chat {
        #[arg(
            long,
            env = DISPLAY_NAME_VAR,
            help = "Display name of the caller, used to personalize greetings"
        )]
        name: Option<String>,
        message: Vec<String>,
    },
    #[command(about = "Pick a proactive check-in message")]
    CheckIn,
    #[command(about = "Simulate transcription of an utterance of the given length")]
    Transcribe {
        #[arg(long, default_value_t = 5.0)]
        duration: f64,
    },
    #[command(about = "Summarize mood trend over a JSON array of conversation records")]
    Trend { records: PathBuf },
    #[command(about = "Print the persona the responder is configured with")]
    Persona,
}

#[derive(Debug, Serialize)]
struct ChatReply {
    #[serde(flatten)]
    result: ResponseResult,
    conversation_id: Uuid,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn chat(responder: &ElderCareResponder, context: Option<&CallerContext>, message: &str) -> Result<()> {
    let result = responder.generate_response(message, context);
    let turn = ChatTurn::record(message, &result, Utc::now());
    info!(
        conversation_id = %turn.conversation_id(),
        contains_concern = result.contains_concern,
        "Chat turn completed"
    );

    print_json(&ChatReply {
        conversation_id: turn.conversation_id(),
        result,
    })
}

fn run(cli: Cli, config: EngineConfig) -> Result<()> {
    let tables = config.load_tables().context("Failed to load engine tables")?;
    let responder = ElderCareResponder::new(tables);

    match cli.command {
        Command::Chat { name, message } => {
            let context = name.map(CallerContext::named);
            if message.is_empty() {
                for line in io::stdin().lock().lines() {
                    let line = line.context("Failed to read stdin")?;
                    chat(&responder, context.as_ref(), &line)?;
                }
                Ok(())
            } else {
                chat(&responder, context.as_ref(), &message.join(" "))
            }
        }
        Command::CheckIn => print_json(&responder.proactive_check_in()),
        Command::Transcribe { duration } => print_json(&simulate_transcription(duration)?),
        Command::Trend { records } => {
            let raw = fs::read_to_string(&records)
                .with_context(|| format!("Failed to read {}", records.display()))?;
            let records: Vec<ConversationRecord> =
                serde_json::from_str(&raw).context("Records file is not valid JSON")?;

            print_json(&serde_json::json!({
                "mood_analysis": summarize_mood(&records),
                "summary": summarize_conversations(&records),
            }))
        }
        Command::Persona => print_json(responder.persona()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = EngineConfig::from_env()?;
    telemetry::init(config.log_format, "warn");

    run(cli, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("carecompanion").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_chat_name_flag_beats_env() {
        temp_env::with_var(DISPLAY_NAME_VAR, Some("Walter White"), || {
            match parse(&["chat", "--name", "Mary Johnson", "Hello"]).command {
                Command::Chat { name, message } => {
                    assert_eq!(name.as_deref(), Some("Mary Johnson"));
                    assert_eq!(message, vec!["Hello".to_string()]);
                }
                other => panic!("Expected chat, got {:?}", other),
            }
        });
    }

    #[test]
    fn test_chat_name_from_env() {
        temp_env::with_var(DISPLAY_NAME_VAR, Some("Walter White"), || {
            match parse(&["chat", "Hello"]).command {
                Command::Chat { name, .. } => assert_eq!(name.as_deref(), Some("Walter White")),
                other => panic!("Expected chat, got {:?}", other),
            }
        });
    }

    #[test]
    fn test_chat_without_name() {
        temp_env::with_var_unset(DISPLAY_NAME_VAR, || match parse(&["chat"]).command {
            Command::Chat { name, message } => {
                assert!(name.is_none());
                assert!(message.is_empty());
            }
            other => panic!("Expected chat, got {:?}", other),
        });
    }

    #[test]
    fn test_trend_takes_records_path() {
        match parse(&["trend", "records.json"]).command {
            Command::Trend { records } => assert_eq!(records, PathBuf::from("records.json")),
            other => panic!("Expected trend, got {:?}", other),
        }
        assert!(Cli::try_parse_from(["carecompanion", "trend"]).is_err());
    }

    #[test]
    fn test_transcribe_default_duration() {
        match parse(&["transcribe"]).command {
            Command::Transcribe { duration } => assert_eq!(duration, 5.0),
            other => panic!("Expected transcribe, got {:?}", other),
        }
    }

    #[test]
    fn test_persona_and_check_in_parse() {
        assert!(matches!(parse(&["persona"]).command, Command::Persona));
        assert!(matches!(parse(&["check-in"]).command, Command::CheckIn));
    }
}
