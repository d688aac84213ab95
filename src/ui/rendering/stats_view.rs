//! Statistics dashboard rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::{db::models::GameSummary, stats::Stats, ui::App};

impl App {
    pub(in crate::ui) fn draw_stats_view(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Overall stats
                Constraint::Min(5),    // Recent games
            ])
            .split(area);

        draw_overall_stats(f, chunks[0], &self.game.stats_snapshot());
        draw_recent_games(f, chunks[1], &self.recent_games, self.db_pool.is_some());
    }
}

fn value(text: String, color: Color) -> Span<'static> {
    Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

fn draw_overall_stats(f: &mut Frame, area: Rect, stats: &Stats) {
    let avg_guesses_str = stats
        .average_guesses()
        .map(|avg| format!("{:.1}", avg))
        .unwrap_or_else(|| "-".to_string());
    let best_score_str = stats
        .best_score
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Games Played: "),
            value(stats.games_played.to_string(), Color::Cyan),
            Span::raw("  |  Games Won: "),
            value(stats.games_won.to_string(), Color::Green),
            Span::raw("  |  Win %: "),
            value(format!("{}%", stats.win_percentage()), Color::Green),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Current Streak: "),
            value(stats.current_streak.to_string(), Color::Green),
            Span::raw("  |  Best Streak: "),
            value(stats.best_streak.to_string(), Color::Yellow),
            Span::raw("  |  Avg. Guesses: "),
            value(avg_guesses_str, Color::Cyan),
            Span::raw("  |  Best Score: "),
            value(best_score_str, Color::Yellow),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Your Stats | Ctrl+S: Back | Ctrl+Q: Quit"),
    );

    f.render_widget(paragraph, area);
}

fn draw_recent_games(f: &mut Frame, area: Rect, games: &[GameSummary], persistent: bool) {
    if games.is_empty() {
        let text = if persistent {
            "No saved games yet. Win one first!"
        } else {
            "Running without a database, games are not saved."
        };
        f.render_widget(
            Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Recent Games")),
            area,
        );
        return;
    }

    let rows: Vec<Row> = games
        .iter()
        .map(|game| {
            let date = game.timestamp.format("%Y-%m-%d %H:%M").to_string();
            let rules = format!(
                "{} digits{}",
                game.digit_count,
                if game.allow_repeats { ", repeats" } else { "" }
            );

            Row::new(vec![
                date,
                game.target.clone(),
                rules,
                game.difficulty.label().to_string(),
                game.guesses_count.to_string(),
            ])
            .style(Style::default().fg(Color::Green))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(18),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["Date", "Number", "Rules", "Mode", "Guesses"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Recent Games (Latest 10)"),
    );

    f.render_widget(table, area);
}
