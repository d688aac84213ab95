pub mod args;
pub mod config;
pub mod db;
pub mod digits;
pub mod engine;
pub mod feedback;
pub mod history;
pub mod matcher;
pub mod scoring;
pub mod session;
pub mod stats;
pub mod target;
pub mod timer;
pub mod ui;

pub use config::{DifficultyMode, MatchPolicy, RenderOptions, SessionConfig, SpeedMode};
pub use digits::{DigitString, ValidationError};
pub use engine::Numble;
pub use matcher::{PositionTag, RawMatchResult};
pub use session::{GameSession, SessionStatus, SubmitError, TimerEvent};
pub use stats::{Stats, StatsTracker};
