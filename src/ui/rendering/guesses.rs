//! Guess history rendering, recomputed from raw results on every frame.

use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_guesses(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let history = self.game.history_lines();

        let lines: Vec<Line> = if history.is_empty() {
            vec![Line::from(Span::styled(
                "No guesses yet...",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            // Keep the newest guesses visible.
            let height = area.height.saturating_sub(2) as usize;
            let start = history.len().saturating_sub(height);
            history[start..]
                .iter()
                .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(Color::White))))
                .collect()
        };

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Your Guesses")),
            area,
        );
    }
}
