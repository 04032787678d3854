//! Global card container.
//!
//! Uses `thread_local!` + `RefCell` for mutable access in single-threaded
//! WASM. The worker keeps the module alive, so the card survives across
//! `handle_request` calls until the page is closed.

use std::cell::RefCell;

use crate::bingo::controller::CardController;
use crate::bingo::storage::{BrowserStorage, STORAGE_KEY};

pub type Card = CardController<BrowserStorage>;

thread_local! {
    static CARD: RefCell<Card> = RefCell::new(CardController::initialize(BrowserStorage::default()));
}

/// Execute a closure with read access to the card.
pub fn with_card<F, R>(f: F) -> R
where
    F: FnOnce(&Card) -> R,
{
    CARD.with(|c| f(&c.borrow()))
}

/// Execute a closure with mutable access to the card.
pub fn with_card_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Card) -> R,
{
    CARD.with(|c| f(&mut c.borrow_mut()))
}

/// Re-initialize from the raw localStorage value the page read on load.
/// An empty string means nothing was stored.
pub fn restore(persisted: &str) {
    let card = CardController::initialize(BrowserStorage::seeded(STORAGE_KEY, persisted));
    CARD.with(|c| {
        *c.borrow_mut() = card;
    });
}

/// Drain pending localStorage writes into a script tag for the response.
pub fn take_flush_script() -> String {
    with_card_mut(|card| card.storage_mut().flush_script())
}

/// Drop the card back to a blank, unpersisted state (tests).
#[cfg(test)]
pub fn reset_for_test() {
    restore("");
}
