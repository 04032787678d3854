//! Name state and win detection.
//!
//! `Names` always holds exactly one string per cell; the length is part of
//! the type, so a short or long persisted array cannot be loaded into it.
//! Win status is never stored: `compute_win` derives it from the names on
//! every render.

use serde::{Deserialize, Serialize};

use crate::bingo::grid::{CELL_COUNT, LINES, Line};

/// One free-text name per cell, in cell order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Names([String; CELL_COUNT]);

impl Names {
    /// Raw text at `index`, untrimmed.
    pub fn get(&self, index: usize) -> &str {
        &self.0[index]
    }

    /// Replace the text at `index` verbatim.
    pub fn set(&mut self, index: usize, text: &str) {
        debug_assert!(index < CELL_COUNT, "cell index {} out of range", index);
        self.0[index] = text.to_string();
    }

    /// A cell counts toward a line only if it has non-whitespace text.
    pub fn is_filled(&self, index: usize) -> bool {
        !self.0[index].trim().is_empty()
    }

    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|n| n.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Serialize as a JSON array of 25 strings.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }

    /// Parse a persisted JSON array. Anything other than exactly 25 strings is an error.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid bingo names JSON: {}", e))
    }
}

/// The two modes a card can be in. There is no locked end state; editing a
/// won card can put it back in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinStatus {
    InProgress,
    Won(&'static Line),
}

impl WinStatus {
    pub fn is_won(&self) -> bool {
        matches!(self, WinStatus::Won(_))
    }

    pub fn line(&self) -> Option<&'static Line> {
        match *self {
            WinStatus::Won(line) => Some(line),
            WinStatus::InProgress => None,
        }
    }
}

/// First line (rows, then columns, then diagonals) whose five cells are all filled.
pub fn compute_win(names: &Names) -> Option<&'static Line> {
    LINES
        .iter()
        .find(|line| line.cells.iter().all(|&idx| names.is_filled(idx)))
}

pub fn win_status(names: &Names) -> WinStatus {
    match compute_win(names) {
        Some(line) => WinStatus::Won(line),
        None => WinStatus::InProgress,
    }
}
