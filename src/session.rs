//! Single-game state machine.
//!
//! A session is `Active` until a guess matches every position, then `Won`
//! for good. Only guess submission and timer events mutate it.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::{
    config::{DifficultyMode, SessionConfig, SpeedMode},
    digits::{DigitString, ValidationError},
    history::GuessHistory,
    matcher::{RawMatchResult, evaluate},
    stats::StatsTracker,
    target,
    timer::{Countdown, SpeedTimer},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Won,
}

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SubmitError {
    #[display("{_0}")]
    Invalid(ValidationError),

    #[display("The game is already won")]
    SessionWon,
}

impl std::error::Error for SubmitError {}

impl From<ValidationError> for SubmitError {
    fn from(err: ValidationError) -> Self {
        SubmitError::Invalid(err)
    }
}

/// What a timer tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Speed mode is off or the game is over.
    Inactive,
    Running { seconds_remaining: u32 },
    /// The pending input was auto-submitted.
    Expired(Result<RawMatchResult, ValidationError>),
}

#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    target: DigitString,
    history: GuessHistory,
    status: SessionStatus,
    timer: Option<SpeedTimer>,
    pending: String,
}

impl GameSession {
    pub fn new<R: Rng + ?Sized>(config: SessionConfig, rng: &mut R) -> Self {
        let target = target::generate(config.digit_count, config.policy, rng);
        Self::with_target(config, target)
    }

    /// Starts a session with a known target, e.g. for replays.
    pub fn with_target(config: SessionConfig, target: DigitString) -> Self {
        info!(
            "New game started: {} digits, {:?}, {} difficulty",
            config.digit_count, config.policy, config.difficulty
        );
        debug!("Target number: {}", target);

        let timer = match config.speed {
            SpeedMode::Timed { seconds } => Some(SpeedTimer::new(seconds)),
            SpeedMode::Off => None,
        };

        Self {
            config,
            target,
            history: GuessHistory::new(),
            status: SessionStatus::Active,
            timer,
            pending: String::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn target(&self) -> &DigitString {
        &self.target
    }

    pub fn history(&self) -> &GuessHistory {
        &self.history
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == SessionStatus::Won
    }

    pub fn guess_count(&self) -> usize {
        self.history.len()
    }

    pub fn pending_input(&self) -> &str {
        &self.pending
    }

    /// Seconds left on the countdown, if one is running.
    pub fn timer_remaining(&self) -> Option<u32> {
        self.timer.map(|t| t.remaining())
    }

    /// Replaces the text that a timer expiry would submit. Restarts the
    /// countdown.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending = text.into();
        self.restart_timer();
    }

    pub fn submit_guess(&mut self, text: &str, stats: &mut StatsTracker) -> Result<RawMatchResult, SubmitError> {
        if self.is_won() {
            return Err(SubmitError::SessionWon);
        }
        Ok(self.apply_guess(text, stats)?)
    }

    /// Submits whatever is pending.
    pub fn submit_pending(&mut self, stats: &mut StatsTracker) -> Result<RawMatchResult, SubmitError> {
        let text = self.pending.clone();
        self.submit_guess(&text, stats)
    }

    /// Advances the countdown one second, auto-submitting on expiry.
    pub fn tick(&mut self, stats: &mut StatsTracker) -> TimerEvent {
        if self.is_won() {
            return TimerEvent::Inactive;
        }

        let Some(timer) = self.timer.as_mut() else {
            return TimerEvent::Inactive;
        };

        match timer.tick() {
            Countdown::Running { seconds_remaining } => TimerEvent::Running { seconds_remaining },
            Countdown::Expired => {
                info!("Timer expired, submitting {:?}", self.pending);
                let text = self.pending.clone();
                TimerEvent::Expired(self.apply_guess(&text, stats))
            }
        }
    }

    /// Starts or cancels the countdown without touching the game.
    pub fn set_speed(&mut self, speed: SpeedMode) {
        self.config.speed = speed;
        self.timer = match speed {
            SpeedMode::Timed { seconds } if !self.is_won() => Some(SpeedTimer::new(seconds)),
            _ => None,
        };
    }

    pub(crate) fn set_difficulty(&mut self, difficulty: DifficultyMode) {
        self.config.difficulty = difficulty;
    }

    fn apply_guess(&mut self, text: &str, stats: &mut StatsTracker) -> Result<RawMatchResult, ValidationError> {
        let guess = match DigitString::parse(text, self.config.digit_count, self.config.policy) {
            Ok(guess) => guess,
            Err(err) => {
                warn!("Guess rejected {:?}: {}", text, err);
                self.restart_timer();
                return Err(err);
            }
        };

        let raw = evaluate(&self.target, &guess, self.config.policy);
        debug!("Guess {} -> {:?}", guess, raw.tags());

        self.history.push(guess, raw.clone());
        self.pending.clear();
        self.restart_timer();

        if raw.is_solved() {
            self.status = SessionStatus::Won;
            self.timer = None;
            info!("Game won in {} guesses", self.history.len());
            stats.record_win(self.history.len() as u32);
        }

        Ok(raw)
    }

    fn restart_timer(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            timer.restart();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::MatchPolicy, matcher::PositionTag};

    fn session(target: &str, allow_repeats: bool) -> GameSession {
        let config = SessionConfig::new(target.len(), allow_repeats);
        let target = DigitString::parse(target, target.len(), MatchPolicy::Multiset).unwrap();
        GameSession::with_target(config, target)
    }

    fn speed_session(target: &str, seconds: u32) -> GameSession {
        let config = SessionConfig::new(target.len(), false).with_speed(SpeedMode::Timed { seconds });
        let target = DigitString::parse(target, target.len(), MatchPolicy::Unique).unwrap();
        GameSession::with_target(config, target)
    }

    #[test]
    fn test_win_on_exact_guess() {
        let mut stats = StatsTracker::new();
        let mut s = session("1234", false);

        let raw = s.submit_guess("1234", &mut stats).unwrap();

        assert_eq!(raw.correct_positions(), 4);
        assert_eq!(s.status(), SessionStatus::Won);
        assert_eq!(stats.snapshot().games_won, 1);
        assert_eq!(stats.snapshot().best_score, Some(1));
    }

    #[test]
    fn test_wrong_guesses_keep_session_active() {
        let mut stats = StatsTracker::new();
        let mut s = session("1234", false);

        s.submit_guess("5678", &mut stats).unwrap();
        s.submit_guess("1243", &mut stats).unwrap();

        assert_eq!(s.status(), SessionStatus::Active);
        assert_eq!(s.guess_count(), 2);
        assert_eq!(stats.snapshot(), Default::default());
    }

    #[test]
    fn test_validation_errors_change_nothing() {
        let mut stats = StatsTracker::new();
        let mut s = session("1234", false);
        s.submit_guess("5678", &mut stats).unwrap();

        for (text, expected) in [
            ("12a4", ValidationError::NonDigitCharacter),
            (
                "123",
                ValidationError::WrongLength {
                    expected: 4,
                    actual: 3,
                },
            ),
            ("1123", ValidationError::RepeatedDigitNotAllowed),
        ] {
            assert_eq!(s.submit_guess(text, &mut stats), Err(SubmitError::Invalid(expected)));
        }

        assert_eq!(s.guess_count(), 1);
        assert_eq!(s.status(), SessionStatus::Active);
    }

    #[test]
    fn test_repeats_accepted_in_multiset_session() {
        let mut stats = StatsTracker::new();
        let mut s = session("112", true);

        let raw = s.submit_guess("211", &mut stats).unwrap();
        assert_eq!(
            raw.tags(),
            &[PositionTag::Unlocked, PositionTag::Locked, PositionTag::Unlocked]
        );
    }

    #[test]
    fn test_no_submissions_after_win() {
        let mut stats = StatsTracker::new();
        let mut s = session("987", false);
        s.submit_guess("987", &mut stats).unwrap();

        assert_eq!(s.submit_guess("123", &mut stats), Err(SubmitError::SessionWon));
        assert_eq!(s.guess_count(), 1);
        assert_eq!(stats.snapshot().games_won, 1);
    }

    #[test]
    fn test_new_session_uses_config() {
        use rand::{SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(1);
        let s = GameSession::new(SessionConfig::new(6, false), &mut rng);

        assert_eq!(s.target().len(), 6);
        assert!(!s.target().has_repeats());
        assert!(s.history().is_empty());
        assert_eq!(s.timer_remaining(), None);
    }

    #[test]
    fn test_tick_without_speed_mode_is_inactive() {
        let mut stats = StatsTracker::new();
        let mut s = session("1234", false);
        assert_eq!(s.tick(&mut stats), TimerEvent::Inactive);
    }

    #[test]
    fn test_expiry_submits_pending_input() {
        let mut stats = StatsTracker::new();
        let mut s = speed_session("1234", 2);
        s.set_pending_input("1243");

        assert_eq!(s.tick(&mut stats), TimerEvent::Running { seconds_remaining: 1 });
        match s.tick(&mut stats) {
            TimerEvent::Expired(Ok(raw)) => assert_eq!(raw.correct_positions(), 2),
            other => panic!("unexpected {:?}", other),
        }

        assert_eq!(s.guess_count(), 1);
        assert_eq!(s.pending_input(), "");
        assert_eq!(s.timer_remaining(), Some(2));
    }

    #[test]
    fn test_expiry_with_invalid_input_only_restarts() {
        let mut stats = StatsTracker::new();
        let mut s = speed_session("1234", 1);
        s.set_pending_input("12");

        assert!(matches!(
            s.tick(&mut stats),
            TimerEvent::Expired(Err(ValidationError::WrongLength { .. }))
        ));
        assert_eq!(s.guess_count(), 0);
        assert_eq!(s.pending_input(), "12");
        assert_eq!(s.timer_remaining(), Some(1));
    }

    #[test]
    fn test_expiry_can_win() {
        let mut stats = StatsTracker::new();
        let mut s = speed_session("456", 1);
        s.set_pending_input("456");

        assert!(matches!(s.tick(&mut stats), TimerEvent::Expired(Ok(_))));
        assert!(s.is_won());
        assert_eq!(s.timer_remaining(), None);
        assert_eq!(s.tick(&mut stats), TimerEvent::Inactive);
        assert_eq!(stats.snapshot().games_won, 1);
    }

    #[test]
    fn test_typing_restarts_countdown() {
        let mut stats = StatsTracker::new();
        let mut s = speed_session("1234", 30);

        for _ in 0..10 {
            s.tick(&mut stats);
        }
        assert_eq!(s.timer_remaining(), Some(20));

        s.set_pending_input("1");
        assert_eq!(s.timer_remaining(), Some(30));
    }

    #[test]
    fn test_invalid_manual_submit_restarts_countdown() {
        let mut stats = StatsTracker::new();
        let mut s = speed_session("1234", 30);
        s.tick(&mut stats);
        s.tick(&mut stats);

        assert!(s.submit_guess("1", &mut stats).is_err());
        assert_eq!(s.timer_remaining(), Some(30));
    }

    #[test]
    fn test_disabling_speed_cancels_immediately() {
        let mut stats = StatsTracker::new();
        let mut s = speed_session("1234", 1);
        s.set_pending_input("1243");

        s.set_speed(SpeedMode::Off);

        assert_eq!(s.tick(&mut stats), TimerEvent::Inactive);
        assert_eq!(s.guess_count(), 0);
    }

    #[test]
    fn test_enabling_speed_after_win_does_not_start_timer() {
        let mut stats = StatsTracker::new();
        let mut s = session("1234", false);
        s.submit_guess("1234", &mut stats).unwrap();

        s.set_speed(SpeedMode::Timed { seconds: 30 });
        assert_eq!(s.timer_remaining(), None);
    }
}
