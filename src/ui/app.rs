use std::{
    fmt::Display,
    io::Stdout,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use sqlx::SqlitePool;
use tracing::info;

use crate::{db::models::GameSummary, engine::Numble};

use super::{
    handlers::{GameHandler, InputHandler},
    types::{LogBuffer, ViewMode},
};

/// One timer tick per second of wall time.
pub(in crate::ui) const TICK_RATE: Duration = Duration::from_secs(1);

/// Main application state container.
pub struct App {
    pub(in crate::ui) game: Numble,
    pub(in crate::ui) input: String,
    pub(in crate::ui) error: Option<String>,
    pub(in crate::ui) view: ViewMode,
    pub(in crate::ui) logs: LogBuffer,
    pub(in crate::ui) db_pool: Option<SqlitePool>,
    pub(in crate::ui) recent_games: Vec<GameSummary>,
    pub(in crate::ui) last_tick: Instant,
}

impl App {
    pub fn new(game: Numble, logs: LogBuffer, db_pool: Option<SqlitePool>) -> Self {
        Self {
            game,
            input: String::new(),
            error: None,
            view: ViewMode::Play,
            logs,
            db_pool,
            recent_games: Vec::new(),
            last_tick: Instant::now(),
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");
        GameHandler::new(self).load_persisted();

        loop {
            terminal.draw(|f| self.draw(f))?;

            let timeout = TICK_RATE.saturating_sub(self.last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && InputHandler::new(self).handle_key(key) {
                        return Ok(());
                    }
                }
            }

            if self.last_tick.elapsed() >= TICK_RATE {
                GameHandler::new(self).on_tick();
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }

    /// Execute an async database operation from sync context
    pub(in crate::ui) fn run_db_operation<F, T>(&self, future: F) -> Result<T>
    where
        F: std::future::Future<Output = Result<T>>,
    {
        tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
    }
}
