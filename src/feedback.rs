//! Display strings derived from raw match data.
//!
//! Rendering is a pure function of the raw result and the display settings,
//! so toggling modes can redraw the whole history without loss.

use crate::{
    config::{DifficultyMode, RenderOptions},
    matcher::{PositionTag, RawMatchResult},
};

pub const LOCKED_SYMBOL: &str = "🔒";
pub const UNLOCKED_SYMBOL: &str = "🔓";
pub const NO_MATCHES: &str = "No matches";

const EASY_PLACEHOLDER: &str = "_";
const POSITION_PLACEHOLDER: &str = "·";

/// Renders with the default layout for `mode`.
pub fn render(raw: &RawMatchResult, mode: DifficultyMode) -> String {
    render_with(raw, RenderOptions::from(mode))
}

pub fn render_with(raw: &RawMatchResult, options: RenderOptions) -> String {
    match options.difficulty {
        DifficultyMode::Hard => raw.correct_positions().to_string(),
        DifficultyMode::Easy => positional(raw, EASY_PLACEHOLDER),
        DifficultyMode::Standard if options.show_positions => positional(raw, POSITION_PLACEHOLDER),
        DifficultyMode::Standard => grouped(raw),
    }
}

fn symbol(tag: PositionTag, placeholder: &'static str) -> &'static str {
    match tag {
        PositionTag::Locked => LOCKED_SYMBOL,
        PositionTag::Unlocked => UNLOCKED_SYMBOL,
        PositionTag::None => placeholder,
    }
}

fn positional(raw: &RawMatchResult, placeholder: &'static str) -> String {
    raw.tags()
        .iter()
        .map(|&tag| symbol(tag, placeholder))
        .collect::<Vec<_>>()
        .join(" ")
}

fn grouped(raw: &RawMatchResult) -> String {
    let locked = raw.locked_count();
    let unlocked = raw.unlocked_count();

    if locked + unlocked == 0 {
        return NO_MATCHES.to_string();
    }

    LOCKED_SYMBOL.repeat(locked) + &UNLOCKED_SYMBOL.repeat(unlocked)
}

/// How-to-play text for the presentation layer.
pub fn instructions(digit_count: usize, allow_repeats: bool, mode: DifficultyMode, par: usize) -> String {
    let repeat_text = if allow_repeats { "allowing" } else { "with" };

    let mode_text = match mode {
        DifficultyMode::Easy => "• Position of each symbol is shown directly".to_string(),
        DifficultyMode::Hard => "• Only shows count of correct positions (no symbols)".to_string(),
        DifficultyMode::Standard => format!(
            "• {} = correct digit in correct position\n• {} = correct digit in wrong position",
            LOCKED_SYMBOL, UNLOCKED_SYMBOL
        ),
    };

    format!(
        "How to play:\n• Guess the {}-digit number {} repeating digits\n{}\n• Par score is {} guesses",
        digit_count, repeat_text, mode_text, par
    )
}
