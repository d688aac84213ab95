//! Front door for a presentation layer.
//!
//! [`Numble`] owns the current session, the running statistics and the RNG,
//! and applies the reset rules for settings changes: digit count and repeat
//! policy start a new game, display settings and speed mode never do.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

use crate::{
    config::{DEFAULT_TIMER_SECONDS, DifficultyMode, MAX_DIGITS, MIN_DIGITS, MatchPolicy, RenderOptions, SessionConfig, SpeedMode},
    feedback,
    matcher::RawMatchResult,
    scoring::{DEFAULT_PAR, score_message},
    session::{GameSession, SubmitError, TimerEvent},
    stats::{Stats, StatsTracker},
};

pub struct Numble<R = StdRng> {
    session: GameSession,
    stats: StatsTracker,
    show_positions: bool,
    timer_seconds: u32,
    par: usize,
    rng: R,
}

impl Numble<StdRng> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> Numble<R> {
    pub fn with_rng(config: SessionConfig, mut rng: R) -> Self {
        let timer_seconds = match config.speed {
            SpeedMode::Timed { seconds } => seconds,
            SpeedMode::Off => DEFAULT_TIMER_SECONDS,
        };

        Self {
            session: GameSession::new(config, &mut rng),
            stats: StatsTracker::new(),
            show_positions: false,
            timer_seconds,
            par: DEFAULT_PAR,
            rng,
        }
    }

    pub fn with_par(mut self, par: usize) -> Self {
        self.par = par;
        self
    }

    /// Countdown length used when speed mode is switched on.
    pub fn with_timer_seconds(mut self, seconds: u32) -> Self {
        self.timer_seconds = seconds.max(1);
        if self.session.config().speed.is_on() {
            self.session.set_speed(SpeedMode::Timed {
                seconds: self.timer_seconds,
            });
        }
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.restore_stats(stats);
        self
    }

    /// Continues counting from saved statistics.
    pub fn restore_stats(&mut self, stats: Stats) {
        self.stats = StatsTracker::from_stats(stats);
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &SessionConfig {
        self.session.config()
    }

    pub fn par(&self) -> usize {
        self.par
    }

    /// Throws away the current game and starts another. Stats are untouched.
    pub fn new_session(&mut self, config: SessionConfig) {
        if !self.session.is_won() && !self.session.history().is_empty() {
            info!("Abandoning game after {} guesses", self.session.guess_count());
        }
        self.session = GameSession::new(config, &mut self.rng);
        if config.difficulty == DifficultyMode::Hard {
            self.show_positions = false;
        }
    }

    /// Fresh game with the current settings.
    pub fn reset(&mut self) {
        let config = *self.session.config();
        self.new_session(config);
    }

    pub fn submit_guess(&mut self, text: &str) -> Result<RawMatchResult, SubmitError> {
        self.session.submit_guess(text, &mut self.stats)
    }

    pub fn submit_pending(&mut self) -> Result<RawMatchResult, SubmitError> {
        self.session.submit_pending(&mut self.stats)
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.session.set_pending_input(text);
    }

    pub fn timer_tick(&mut self) -> TimerEvent {
        self.session.tick(&mut self.stats)
    }

    pub fn stats_snapshot(&self) -> Stats {
        self.stats.snapshot()
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            difficulty: self.session.config().difficulty,
            show_positions: self.show_positions,
        }
    }

    /// History display strings under `mode`, keeping the positions flag.
    pub fn render_history(&self, mode: DifficultyMode) -> Vec<String> {
        self.session.history().render(RenderOptions {
            difficulty: mode,
            show_positions: self.show_positions,
        })
    }

    /// Numbered history lines under the current display settings.
    pub fn history_lines(&self) -> Vec<String> {
        self.session.history().render_lines(self.render_options())
    }

    pub fn set_difficulty(&mut self, difficulty: DifficultyMode) {
        self.session.set_difficulty(difficulty);
        if difficulty == DifficultyMode::Hard {
            self.show_positions = false;
        }
    }

    pub fn cycle_difficulty(&mut self) -> DifficultyMode {
        let next = self.session.config().difficulty.next();
        self.set_difficulty(next);
        next
    }

    pub fn show_positions(&self) -> bool {
        self.show_positions
    }

    /// Flips index-aligned display. Unavailable in hard mode.
    pub fn toggle_show_positions(&mut self) -> bool {
        if self.session.config().difficulty != DifficultyMode::Hard {
            self.show_positions = !self.show_positions;
        }
        self.show_positions
    }

    pub fn set_speed_mode(&mut self, enabled: bool) {
        let speed = if enabled {
            SpeedMode::Timed {
                seconds: self.timer_seconds,
            }
        } else {
            SpeedMode::Off
        };
        self.session.set_speed(speed);
    }

    pub fn set_allow_repeats(&mut self, allow_repeats: bool) {
        let mut config = *self.session.config();
        config.policy = MatchPolicy::from_allow_repeats(allow_repeats);
        self.apply_config(config);
    }

    pub fn set_digit_count(&mut self, digit_count: usize) {
        let mut config = *self.session.config();
        config.digit_count = digit_count.clamp(MIN_DIGITS, MAX_DIGITS);
        self.apply_config(config);
    }

    /// Returns false when already at the maximum.
    pub fn increase_digits(&mut self) -> bool {
        let current = self.session.config().digit_count;
        if current >= MAX_DIGITS {
            return false;
        }
        self.set_digit_count(current + 1);
        true
    }

    /// Returns false when already at the minimum.
    pub fn decrease_digits(&mut self) -> bool {
        let current = self.session.config().digit_count;
        if current <= MIN_DIGITS {
            return false;
        }
        self.set_digit_count(current - 1);
        true
    }

    /// Win message for a finished game.
    pub fn score_message(&self) -> Option<String> {
        self.session
            .is_won()
            .then(|| score_message(self.session.guess_count(), self.par))
    }

    pub fn instructions(&self) -> String {
        let config = self.session.config();
        feedback::instructions(config.digit_count, config.allow_repeats(), config.difficulty, self.par)
    }

    fn apply_config(&mut self, config: SessionConfig) {
        if self.session.config().requires_reset(&config) {
            self.new_session(config);
        }
    }
}
