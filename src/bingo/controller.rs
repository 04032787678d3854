//! Card state controller — owns the 25 names and keeps storage in step.
//!
//! Every mutation writes the full card back to storage before returning, so
//! the persisted entry never lags the in-memory state.

use crate::bingo::card::{self, Names, WinStatus};
use crate::bingo::grid::{CELL_COUNT, Line};
use crate::bingo::storage::{STORAGE_KEY, Storage};

/// Text shown when asking the user to confirm a reset.
pub const RESET_PROMPT: &str = "This will reset your card. Are you sure?";

#[derive(Debug, Clone)]
pub struct CardController<S: Storage> {
    names: Names,
    storage: S,
}

impl<S: Storage> CardController<S> {
    /// Load the persisted card, or start blank if it is missing or malformed.
    pub fn initialize(storage: S) -> Self {
        let names = match storage.load(STORAGE_KEY) {
            Some(json) => match Names::from_json(&json) {
                Ok(names) => {
                    log::debug!("restored bingo card from storage");
                    names
                }
                Err(e) => {
                    log::warn!("discarding persisted bingo card: {}", e);
                    Names::default()
                }
            },
            None => Names::default(),
        };
        Self { names, storage }
    }

    pub fn names(&self) -> &Names {
        &self.names
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Replace the text in one cell and persist. Text is stored as typed.
    pub fn update_cell(&mut self, index: usize, text: &str) {
        debug_assert!(index < CELL_COUNT, "cell index {} out of range", index);
        self.names.set(index, text);
        self.persist();
    }

    /// Clear every cell and drop the persisted entry, if `confirm` agrees.
    /// Returns whether the card was reset.
    pub fn reset_card<F>(&mut self, confirm: F) -> bool
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(RESET_PROMPT) {
            log::debug!("card reset cancelled");
            return false;
        }
        self.names = Names::default();
        self.storage.remove(STORAGE_KEY);
        log::debug!("card reset");
        true
    }

    pub fn winning_line(&self) -> Option<&'static Line> {
        card::compute_win(&self.names)
    }

    pub fn status(&self) -> WinStatus {
        card::win_status(&self.names)
    }

    fn persist(&mut self) {
        let json = self.names.to_json();
        self.storage.save(STORAGE_KEY, &json);
    }
}
