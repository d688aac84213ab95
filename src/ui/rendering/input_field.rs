//! Input field rendering with validation status.

use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{app::App, handlers::input_status, types::InputStatus};

impl App {
    pub(in crate::ui) fn draw_input(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let status = input_status(self);

        let (border_color, subtitle) = match (&self.error, &status) {
            (Some(err), _) => (Color::Red, err.clone()),
            (None, InputStatus::Incomplete) => (Color::Gray, String::new()),
            (None, InputStatus::Valid) => (Color::Green, String::new()),
            (None, InputStatus::Invalid(msg)) => (Color::Red, msg.clone()),
        };

        let text = format!("{}▌", self.input);

        let help_text = if self.game.session().is_won() {
            "Enter = play again | Ctrl+Q = quit"
        } else {
            "Enter = guess | Ctrl+N = new game | Ctrl+Q = quit"
        };

        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(format!("Input {} | {}", subtitle, help_text)),
            ),
            area,
        );
    }
}
