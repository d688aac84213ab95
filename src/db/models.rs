use chrono::{DateTime, Utc};

use crate::{
    config::{DifficultyMode, SessionConfig},
    history::GuessRecord,
    matcher::RawMatchResult,
    session::GameSession,
};

/// A won game ready to be written
#[derive(Debug, Clone)]
pub struct CompletedGame {
    pub timestamp: DateTime<Utc>,
    pub config: SessionConfig,
    pub target: String,
    pub guesses: Vec<GuessRecord>,
}

impl CompletedGame {
    pub fn from_session(session: &GameSession, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            config: *session.config(),
            target: session.target().to_string(),
            guesses: session.history().records().to_vec(),
        }
    }
}

/// Represents a game row in the database
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub digit_count: usize,
    pub allow_repeats: bool,
    pub difficulty: DifficultyMode,
    pub target: String,
    pub guesses_count: usize,
}

/// A stored guess with its raw result
#[derive(Debug, Clone)]
pub struct StoredGuess {
    pub guess_number: i64,
    pub guess: String,
    pub result: RawMatchResult,
}

/// Helper function to serialize a raw result to JSON
pub fn serialize_result(result: &RawMatchResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| "{}".to_string())
}

/// Helper function to deserialize a raw result from JSON
pub fn deserialize_result(json: &str) -> anyhow::Result<RawMatchResult> {
    Ok(serde_json::from_str(json)?)
}
