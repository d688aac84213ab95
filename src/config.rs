//! Session configuration.
//!
//! Matching behaviour and the speed countdown are tagged variants rather than
//! loose flags so that every consumer dispatches on a single value.

use serde::{Deserialize, Serialize};

pub const MIN_DIGITS: usize = 3;
pub const MAX_DIGITS: usize = 6;
pub const DEFAULT_DIGITS: usize = 4;
pub const DEFAULT_TIMER_SECONDS: u32 = 30;

/// Whether targets and guesses may contain the same digit more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPolicy {
    Unique,
    Multiset,
}

impl MatchPolicy {
    pub fn from_allow_repeats(allow_repeats: bool) -> Self {
        if allow_repeats {
            MatchPolicy::Multiset
        } else {
            MatchPolicy::Unique
        }
    }

    pub fn allows_repeats(self) -> bool {
        self == MatchPolicy::Multiset
    }
}

/// How much of the raw match data is revealed to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DifficultyMode {
    Easy,
    #[default]
    Standard,
    Hard,
}

impl DifficultyMode {
    /// Easy -> Standard -> Hard -> Easy.
    pub fn next(self) -> Self {
        match self {
            DifficultyMode::Easy => DifficultyMode::Standard,
            DifficultyMode::Standard => DifficultyMode::Hard,
            DifficultyMode::Hard => DifficultyMode::Easy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DifficultyMode::Easy => "Easy",
            DifficultyMode::Standard => "Standard",
            DifficultyMode::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for DifficultyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

impl std::str::FromStr for DifficultyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(DifficultyMode::Easy),
            "standard" => Ok(DifficultyMode::Standard),
            "hard" => Ok(DifficultyMode::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

/// Speed-mode countdown setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeedMode {
    #[default]
    Off,
    Timed { seconds: u32 },
}

impl SpeedMode {
    pub fn is_on(self) -> bool {
        matches!(self, SpeedMode::Timed { .. })
    }
}

/// Everything needed to start a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub digit_count: usize,
    pub policy: MatchPolicy,
    pub difficulty: DifficultyMode,
    pub speed: SpeedMode,
}

impl SessionConfig {
    /// Builds a config, clamping `digit_count` into the supported range.
    pub fn new(digit_count: usize, allow_repeats: bool) -> Self {
        Self {
            digit_count: digit_count.clamp(MIN_DIGITS, MAX_DIGITS),
            policy: MatchPolicy::from_allow_repeats(allow_repeats),
            difficulty: DifficultyMode::default(),
            speed: SpeedMode::Off,
        }
    }

    pub fn with_difficulty(mut self, difficulty: DifficultyMode) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_speed(mut self, speed: SpeedMode) -> Self {
        self.speed = speed;
        self
    }

    pub fn allow_repeats(&self) -> bool {
        self.policy.allows_repeats()
    }

    /// True when switching to `other` requires a fresh target.
    pub fn requires_reset(&self, other: &SessionConfig) -> bool {
        self.digit_count != other.digit_count || self.policy != other.policy
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DIGITS, false)
    }
}

/// Display settings used when rendering history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub difficulty: DifficultyMode,
    /// Standard mode only: show index-aligned symbols instead of grouping.
    pub show_positions: bool,
}

impl From<DifficultyMode> for RenderOptions {
    fn from(difficulty: DifficultyMode) -> Self {
        Self {
            difficulty,
            show_positions: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count_is_clamped() {
        assert_eq!(SessionConfig::new(2, false).digit_count, 3);
        assert_eq!(SessionConfig::new(9, false).digit_count, 6);
        assert_eq!(SessionConfig::new(5, true).digit_count, 5);
    }

    #[test]
    fn test_requires_reset() {
        let base = SessionConfig::default();

        assert!(base.requires_reset(&SessionConfig::new(5, false)));
        assert!(base.requires_reset(&SessionConfig::new(4, true)));
        assert!(!base.requires_reset(&base.with_difficulty(DifficultyMode::Hard)));
        assert!(!base.requires_reset(&base.with_speed(SpeedMode::Timed { seconds: 30 })));
    }

    #[test]
    fn test_difficulty_parse_and_cycle() {
        assert_eq!("HARD".parse::<DifficultyMode>(), Ok(DifficultyMode::Hard));
        assert!("medium".parse::<DifficultyMode>().is_err());
        assert_eq!(DifficultyMode::Hard.next(), DifficultyMode::Easy);
        assert_eq!(DifficultyMode::Easy.to_string(), "easy");
    }
}
