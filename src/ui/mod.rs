mod app;
mod handlers;
mod rendering;
mod types;

pub use app::App;
pub use types::{InputStatus, LogBuffer, ViewMode};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use sqlx::SqlitePool;
use std::io::stdout;

use crate::engine::Numble;

/// Entry point for running the UI.
pub fn run_ui(game: Numble, db_pool: Option<SqlitePool>) -> Result<()> {
    let logs = LogBuffer::new();
    let mut app = App::new(game, logs, db_pool);

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
