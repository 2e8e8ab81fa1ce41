//! Environment-driven configuration.
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file in the working directory.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::info;

use crate::brain::EngineTables;
use crate::error::AppError;

pub const TABLES_PATH_VAR: &str = "CARE_TABLES_PATH";
pub const PERSONA_NAME_VAR: &str = "CARE_PERSONA_NAME";
pub const LOG_FORMAT_VAR: &str = "CARE_LOG_FORMAT";

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    /// Bunyan-style JSON lines
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(AppError::Config(format!(
                "unsupported log format `{other}` (expected pretty|json)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// JSON file replacing the built-in tables
    pub tables_path: Option<PathBuf>,
    pub persona_name: Option<String>,
    pub log_format: LogFormat,
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl EngineConfig {
    /// Load `.env` (if present) and read the environment
    pub fn from_env() -> Result<Self, AppError> {
        // A missing .env file is fine
        let _ = dotenv::dotenv();
        Self::from_process_env()
    }

    /// Read the environment without touching `.env`
    pub fn from_process_env() -> Result<Self, AppError> {
        let log_format = match non_empty_var(LOG_FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            tables_path: non_empty_var(TABLES_PATH_VAR).map(PathBuf::from),
            persona_name: non_empty_var(PERSONA_NAME_VAR),
            log_format,
        })
    }

    /// Build the engine tables this configuration describes
    pub fn load_tables(&self) -> Result<EngineTables, AppError> {
        let mut tables = match &self.tables_path {
            Some(path) => EngineTables::from_json_file(path)?,
            None => EngineTables::default(),
        };

        if let Some(name) = &self.persona_name {
            info!(persona = %name, "Persona name overridden");
            tables.persona.name = name.clone();
        }

        Ok(tables)
    }
}
