//! Bingo card module — the fixed grid, the name state, and the controller
//! that keeps it in step with localStorage. State lives in WASM memory
//! (thread_local) for the lifetime of the worker.

pub mod card;
pub mod controller;
pub mod grid;
pub mod render;
pub mod state;
pub mod storage;
