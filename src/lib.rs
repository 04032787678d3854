//! Social Bingo in-browser WASM server.
//!
//! Exports `handle_request(method, path, query, body)` for the worker bridge
//! to call. HTMX requests under `/api/bingo/*` are routed with `matchit` and
//! answered with HTML fragments for `#bingo-card`.
//!
//! On page load the host reads `localStorage["bingo-names"]`, posts it to
//! `/api/bingo/restore`, then loads `/api/bingo/card`. Mutating routes append
//! a `<script>` that writes the card back to localStorage.

use wasm_bindgen::prelude::*;

pub mod bingo;
pub mod routes;

/// Process an HTTP-like request and return an HTML fragment.
///
/// Called from JavaScript (Web Worker) via wasm-bindgen.
///
/// # Arguments
/// * `method` — HTTP method ("GET" or "POST")
/// * `path`   — URL path (e.g., "/api/bingo/cell")
/// * `query`  — Query string, possibly empty
/// * `body`   — Request body (form data or raw JSON). Empty string for GET requests.
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    let mut router = matchit::Router::new();

    router.insert("/api/bingo/card", "card").ok();
    router.insert("/api/bingo/cell", "cell").ok();
    router.insert("/api/bingo/reset", "reset").ok();
    router.insert("/api/bingo/restore", "restore").ok();
    router.insert("/api/bingo/state", "state").ok();
    router.insert("/api/bingo/win", "win").ok();

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            ("card", "GET") => routes::bingo::handle_card_get(query),
            ("state", "GET") => routes::bingo::handle_state_get(query),
            ("win", "GET") => routes::bingo::handle_win_get(query),

            ("cell", "POST") => routes::bingo::handle_cell_post(body),
            ("reset", "POST") => routes::bingo::handle_reset_post(body),
            ("restore", "POST") => routes::bingo::handle_restore_post(body),

            _ => method_not_allowed(),
        },
        Err(_) => not_found(),
    }
}

fn not_found() -> String {
    r#"<span class="text-red-600">404 — route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-red-600">405 — method not allowed</span>"#.to_string()
}
