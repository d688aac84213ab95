mod guesses;
mod input_field;
mod instructions;
mod logs;
mod stats_view;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::{app::App, types::ViewMode};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        if self.view == ViewMode::Stats {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(10),   // Stats content
                    Constraint::Length(6), // Small log panel
                ])
                .split(f.area());

            self.draw_stats_view(f, layout[0]);
            self.draw_logs(f, layout[1]);
            return;
        }

        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(f.area());

        let won = self.game.session().is_won();

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(if won { 4 } else { 0 }),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(main_layout[0]);

        self.draw_game_status(f, left_layout[0]);
        if won {
            self.draw_result(f, left_layout[1]);
        }
        self.draw_guesses(f, left_layout[2]);
        self.draw_input(f, left_layout[3]);

        let right_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9),
                Constraint::Length(6),
                Constraint::Min(6), // logs panel
            ])
            .split(main_layout[1]);

        self.draw_instructions(f, right_layout[0]);
        self.draw_controls(f, right_layout[1]);
        self.draw_logs(f, right_layout[2]);
    }
}
