//! Game state transitions and settings changes.

use std::time::Instant;

use chrono::Utc;

use crate::{
    db::{self, models::CompletedGame},
    session::TimerEvent,
};

use super::super::app::App;

const RECENT_GAMES: i64 = 10;

/// Helper struct for managing game-specific state transitions.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn start_new_game(&mut self) {
        self.app.game.reset();
        self.clear_input();
        self.app.log(format!(
            "New game: {} digits",
            self.app.game.config().digit_count
        ));
    }

    pub fn cycle_difficulty(&mut self) {
        let mode = self.app.game.cycle_difficulty();
        self.app.log(format!("Difficulty: {}", mode.label()));
    }

    pub fn toggle_show_positions(&mut self) {
        let shown = self.app.game.toggle_show_positions();
        self.app
            .log(format!("Symbol positions {}", if shown { "shown" } else { "hidden" }));
    }

    pub fn toggle_speed_mode(&mut self) {
        let enabled = !self.app.game.config().speed.is_on();
        self.app.game.set_speed_mode(enabled);
        self.app.last_tick = Instant::now();
        self.app
            .log(format!("Speed mode {}", if enabled { "on" } else { "off" }));
    }

    pub fn toggle_repeats(&mut self) {
        let allow = !self.app.game.config().allow_repeats();
        self.app.game.set_allow_repeats(allow);
        self.clear_input();
        self.app.log(format!(
            "Repeating digits {}, new game started",
            if allow { "allowed" } else { "disallowed" }
        ));
    }

    pub fn change_digits(&mut self, increase: bool) {
        let changed = if increase {
            self.app.game.increase_digits()
        } else {
            self.app.game.decrease_digits()
        };

        if changed {
            self.clear_input();
            self.app.log(format!(
                "Now guessing {} digits, new game started",
                self.app.game.config().digit_count
            ));
        }
    }

    /// Advances the speed countdown by one tick.
    pub fn on_tick(&mut self) {
        self.app.last_tick = Instant::now();

        match self.app.game.timer_tick() {
            TimerEvent::Expired(Ok(_)) => {
                self.app.log(format!("Time's up! Submitted {}", self.app.input));
                self.app.input.clear();
                self.app.error = None;
                self.check_game_state();
            }
            TimerEvent::Expired(Err(err)) => {
                self.app.log("Time's up! Nothing valid to submit");
                self.app.error = Some(err.to_string());
            }
            TimerEvent::Running { .. } | TimerEvent::Inactive => {}
        }
    }

    /// Records a just-finished game.
    pub fn check_game_state(&mut self) {
        if !self.app.game.session().is_won() {
            return;
        }

        self.app.log(format!(
            "Target number was {}",
            self.app.game.session().target()
        ));
        if let Some(message) = self.app.game.score_message() {
            self.app.log(format!("Game won! {}", message));
        }

        self.persist_win();
    }

    /// Restores saved stats and recent games.
    pub fn load_persisted(&mut self) {
        let Some(pool) = self.app.db_pool.clone() else {
            return;
        };

        match self.app.run_db_operation(db::stats::load_stats(&pool)) {
            Ok(Some(stats)) => {
                self.app.game.restore_stats(stats);
                self.app
                    .log(format!("Loaded stats: {} games won", stats.games_won));
            }
            Ok(None) => {}
            Err(e) => self.app.log(format!("Failed to load stats: {}", e)),
        }

        self.refresh_recent_games();
    }

    fn persist_win(&mut self) {
        let Some(pool) = self.app.db_pool.clone() else {
            return;
        };

        let game = CompletedGame::from_session(self.app.game.session(), Utc::now());
        if let Err(e) = self
            .app
            .run_db_operation(db::games::record_completed_game(&pool, &game))
        {
            self.app.log(format!("Failed to save game: {}", e));
        }

        let stats = self.app.game.stats_snapshot();
        if let Err(e) = self.app.run_db_operation(db::stats::save_stats(&pool, &stats)) {
            self.app.log(format!("Failed to save stats: {}", e));
        }

        self.refresh_recent_games();
    }

    fn refresh_recent_games(&mut self) {
        let Some(pool) = self.app.db_pool.clone() else {
            return;
        };

        match self
            .app
            .run_db_operation(db::games::recent_games(&pool, RECENT_GAMES))
        {
            Ok(games) => self.app.recent_games = games,
            Err(e) => self.app.log(format!("Failed to load recent games: {}", e)),
        }
    }

    fn clear_input(&mut self) {
        self.app.input.clear();
        self.app.error = None;
        self.app.last_tick = Instant::now();
    }
}
