use std::path::PathBuf;

use clap::{Parser, builder::TypedValueParser};

use crate::config::{DEFAULT_DIGITS, DEFAULT_TIMER_SECONDS, DifficultyMode, SessionConfig, SpeedMode};
use crate::scoring::DEFAULT_PAR;

#[derive(Parser, Debug)]
#[command(name = "numble", about = "Guess the hidden number")]
pub struct Args {
    /// Number of digits in the target (3-6)
    #[arg(long, default_value_t = DEFAULT_DIGITS, value_parser = clap::value_parser!(u8).range(3..=6).map(usize::from))]
    pub digits: usize,

    /// Allow repeating digits in the target and guesses
    #[arg(long)]
    pub repeats: bool,

    /// Feedback difficulty: easy, standard or hard
    #[arg(long, default_value_t = DifficultyMode::Standard)]
    pub difficulty: DifficultyMode,

    /// Start with the speed-mode countdown running
    #[arg(long)]
    pub speed: bool,

    /// Countdown length in seconds for speed mode
    #[arg(long, default_value_t = DEFAULT_TIMER_SECONDS)]
    pub timer_seconds: u32,

    /// Guess count considered par
    #[arg(long, default_value_t = DEFAULT_PAR)]
    pub par: usize,

    /// Keep statistics in memory only
    #[arg(long)]
    pub no_db: bool,

    /// Database file (defaults to the platform data directory)
    #[arg(long, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

impl Args {
    pub fn session_config(&self) -> SessionConfig {
        let speed = if self.speed {
            SpeedMode::Timed {
                seconds: self.timer_seconds,
            }
        } else {
            SpeedMode::Off
        };

        SessionConfig::new(self.digits, self.repeats)
            .with_difficulty(self.difficulty)
            .with_speed(speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchPolicy;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["numble"]);
        let config = args.session_config();

        assert_eq!(config, SessionConfig::default());
        assert_eq!(args.par, 7);
        assert!(!args.no_db);
    }

    #[test]
    fn test_flags_map_to_config() {
        let args = Args::parse_from([
            "numble",
            "--digits",
            "6",
            "--repeats",
            "--difficulty",
            "hard",
            "--speed",
            "--timer-seconds",
            "15",
        ]);
        let config = args.session_config();

        assert_eq!(config.digit_count, 6);
        assert_eq!(config.policy, MatchPolicy::Multiset);
        assert_eq!(config.difficulty, DifficultyMode::Hard);
        assert_eq!(config.speed, SpeedMode::Timed { seconds: 15 });
    }

    #[test]
    fn test_rejects_out_of_range_digits() {
        assert!(Args::try_parse_from(["numble", "--digits", "7"]).is_err());
        assert!(Args::try_parse_from(["numble", "--digits", "2"]).is_err());
    }
}
