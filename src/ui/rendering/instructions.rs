use ratatui::{
    Frame,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::app::App;

const CONTROLS: [&str; 4] = [
    "Ctrl+E difficulty | Ctrl+P symbol positions",
    "Ctrl+T speed mode | Ctrl+R repeating digits",
    "Up/Down digit count | Ctrl+S stats",
    "Ctrl+N new game | Ctrl+Q quit",
];

impl App {
    pub(in crate::ui) fn draw_instructions(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let lines: Vec<Line> = self
            .game
            .instructions()
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("Instructions")),
            area,
        );
    }

    pub(in crate::ui) fn draw_controls(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let positions = if self.game.show_positions() { "on" } else { "off" };
        let mut lines: Vec<Line> = CONTROLS.iter().map(|l| Line::from(*l)).collect();
        lines.push(Line::from(format!("Symbol positions: {}", positions)));

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Controls")),
            area,
        );
    }
}
