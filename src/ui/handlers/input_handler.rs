//! Input handling and validation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{digits::DigitString, session::SubmitError};

use super::super::{
    app::App,
    types::{InputStatus, ViewMode},
};
use super::GameHandler;

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char('n' | 'N'), KeyModifiers::CONTROL) => {
                GameHandler::new(self.app).start_new_game();
            }

            (KeyCode::Char('e' | 'E'), KeyModifiers::CONTROL) => {
                GameHandler::new(self.app).cycle_difficulty();
            }

            (KeyCode::Char('p' | 'P'), KeyModifiers::CONTROL) => {
                GameHandler::new(self.app).toggle_show_positions();
            }

            (KeyCode::Char('t' | 'T'), KeyModifiers::CONTROL) => {
                GameHandler::new(self.app).toggle_speed_mode();
            }

            (KeyCode::Char('r' | 'R'), KeyModifiers::CONTROL) => {
                GameHandler::new(self.app).toggle_repeats();
            }

            (KeyCode::Char('s' | 'S'), KeyModifiers::CONTROL) => {
                self.app.view = match self.app.view {
                    ViewMode::Play => ViewMode::Stats,
                    ViewMode::Stats => ViewMode::Play,
                };
            }

            (KeyCode::Up, _) => GameHandler::new(self.app).change_digits(true),
            (KeyCode::Down, _) => GameHandler::new(self.app).change_digits(false),

            (KeyCode::Enter, _) => self.submit_input(),
            (KeyCode::Backspace, _) => {
                self.app.input.pop();
                self.sync_pending();
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.app.input.push(c);
                self.sync_pending();
            }
            _ => {}
        }
        false
    }

    pub fn input_status(&self) -> InputStatus {
        input_status(self.app)
    }

    fn submit_input(&mut self) {
        if self.app.game.session().is_won() {
            GameHandler::new(self.app).start_new_game();
            return;
        }

        let guess = self.app.input.trim().to_string();

        match self.app.game.submit_guess(&guess) {
            Ok(raw) => {
                self.app.log(format!(
                    "Guess {} submitted: {} correct",
                    guess,
                    raw.correct_positions()
                ));
                self.app.input.clear();
                self.app.error = None;
                GameHandler::new(self.app).check_game_state();
            }
            Err(SubmitError::Invalid(err)) => {
                self.app.log(format!("Input rejected: {:?}", self.app.input));
                self.app.error = Some(err.to_string());
            }
            Err(SubmitError::SessionWon) => {}
        }
    }

    // Typing restarts the speed countdown.
    fn sync_pending(&mut self) {
        self.app.error = None;
        let text = self.app.input.clone();
        self.app.game.set_pending_input(text);
    }
}

/// Validation status of the current input without submitting it.
pub(in crate::ui) fn input_status(app: &App) -> InputStatus {
    let guess = app.input.trim();

    if guess.is_empty() {
        return InputStatus::Incomplete;
    }

    let config = app.game.config();
    match DigitString::parse(guess, config.digit_count, config.policy) {
        Ok(_) => InputStatus::Valid,
        Err(crate::digits::ValidationError::WrongLength { actual, expected })
            if actual < expected && guess.chars().all(|c| c.is_ascii_digit()) =>
        {
            InputStatus::Incomplete
        }
        Err(err) => InputStatus::Invalid(err.to_string()),
    }
}
