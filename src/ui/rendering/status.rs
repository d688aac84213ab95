use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_game_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let config = self.game.config();
        let session = self.game.session();

        let timer_text = match session.timer_remaining() {
            Some(secs) => format!(" | Time: {}s", secs),
            None if config.speed.is_on() => " | Time: -".to_string(),
            None => String::new(),
        };

        let status_text = format!(
            "{} digits | {} | Repeats: {} | Guesses: {}{}",
            config.digit_count,
            config.difficulty.label(),
            if config.allow_repeats() { "on" } else { "off" },
            session.guess_count(),
            timer_text
        );

        let color = match session.timer_remaining() {
            Some(secs) if secs <= 5 => Color::Red,
            _ if session.is_won() => Color::Green,
            _ => Color::White,
        };

        f.render_widget(
            Paragraph::new(status_text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Numble")),
            area,
        );
    }

    pub(in crate::ui) fn draw_result(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let message = self.game.score_message().unwrap_or_default();

        let lines = vec![
            Line::from(Span::styled(
                "You Win! 🎉",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(message),
        ];

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Result")),
            area,
        );
    }
}
