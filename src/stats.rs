//! Cross-session win statistics.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Aggregate counters. Only a win changes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_guesses_on_win: u32,
    /// Fewest guesses in any win; `None` before the first win.
    pub best_score: Option<u32>,
}

impl Stats {
    /// Rounded win rate, 0 when nothing has been played.
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (self.games_won as f64 / self.games_played as f64 * 100.0).round() as u32
    }

    pub fn average_guesses(&self) -> Option<f64> {
        if self.games_won == 0 {
            None
        } else {
            Some(self.total_guesses_on_win as f64 / self.games_won as f64)
        }
    }
}

#[derive(Debug, Default)]
pub struct StatsTracker {
    stats: Stats,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes from previously saved counters.
    pub fn from_stats(stats: Stats) -> Self {
        Self { stats }
    }

    pub fn record_win(&mut self, guess_count: u32) {
        let s = &mut self.stats;

        s.games_played += 1;
        s.games_won += 1;
        s.current_streak += 1;
        s.best_streak = s.best_streak.max(s.current_streak);
        s.total_guesses_on_win += guess_count;
        s.best_score = Some(s.best_score.map_or(guess_count, |best| best.min(guess_count)));

        info!(
            "Win recorded in {} guesses (streak {}, best {})",
            guess_count, s.current_streak, s.best_streak
        );
    }

    pub fn snapshot(&self) -> Stats {
        self.stats
    }
}
