use serde::{Deserialize, Serialize};

use crate::{config::RenderOptions, digits::DigitString, feedback::render_with, matcher::RawMatchResult};

/// One submitted guess and its raw result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: DigitString,
    pub raw: RawMatchResult,
}

/// Append-only record of guesses in submission order.
#[derive(Debug, Clone, Default)]
pub struct GuessHistory {
    records: Vec<GuessRecord>,
}

impl GuessHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, guess: DigitString, raw: RawMatchResult) {
        self.records.push(GuessRecord { guess, raw });
    }

    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &GuessRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&GuessRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display strings for every entry, recomputed from the raw results.
    pub fn render(&self, options: RenderOptions) -> Vec<String> {
        self.records.iter().map(|r| render_with(&r.raw, options)).collect()
    }

    /// `"{n}. {guess}  →  {display}"` lines, numbered from 1.
    pub fn render_lines(&self, options: RenderOptions) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{}. {}  →  {}", i + 1, r.guess, render_with(&r.raw, options)))
            .collect()
    }
}
