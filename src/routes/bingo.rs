//! `/api/bingo/*` routes — card rendering, cell edits, reset, and
//! localStorage restore/export.
//!
//! Mutating routes answer with the re-rendered card followed by the flush
//! script, so the page's localStorage is updated in the same swap.

use crate::bingo::grid::CELL_COUNT;
use crate::bingo::render;
use crate::bingo::state;
use crate::routes::util::{get_param, parse_form_body, percent_decode};

// ── GET /api/bingo/card ────────────────────────────────────────────

/// Handle GET /api/bingo/card
/// Returns the full card HTML.
pub fn handle_card_get(_query: &str) -> String {
    render::render_card()
}

// ── POST /api/bingo/cell ───────────────────────────────────────────

/// Handle POST /api/bingo/cell
/// Body params: index={0..24}&name={text}
///
/// A missing `name` clears the cell. Returns the re-rendered card.
pub fn handle_cell_post(body: &str) -> String {
    let params = parse_form_body(body);
    let index = match get_param(&params, "index").and_then(|s| s.parse::<usize>().ok()) {
        Some(i) if i < CELL_COUNT => i,
        _ => {
            return r#"<span class="text-red-600">Missing or invalid index parameter</span>"#
                .to_string();
        }
    };
    let name = get_param(&params, "name").unwrap_or("");

    state::with_card_mut(|card| card.update_cell(index, name));
    respond_with_card()
}

// ── POST /api/bingo/reset ──────────────────────────────────────────

/// Handle POST /api/bingo/reset
/// Body params: confirm=yes
///
/// The page asks the user first (`hx-confirm`); anything other than
/// `confirm=yes` counts as a cancelled prompt and leaves the card alone.
pub fn handle_reset_post(body: &str) -> String {
    let params = parse_form_body(body);
    let confirmed = get_param(&params, "confirm") == Some("yes");
    state::with_card_mut(|card| card.reset_card(|_prompt| confirmed));
    respond_with_card()
}

// ── POST /api/bingo/restore ────────────────────────────────────────

/// Handle POST /api/bingo/restore
/// Body: the raw `bingo-names` localStorage value, or `state={urlencoded}`.
/// Called once on page load. A malformed value starts a blank card.
pub fn handle_restore_post(body: &str) -> String {
    let persisted = match body.strip_prefix("state=") {
        Some(encoded) => percent_decode(encoded),
        None => body.trim().to_string(),
    };
    state::restore(&persisted);
    "ok".to_string()
}

// ── GET /api/bingo/state ───────────────────────────────────────────

/// Handle GET /api/bingo/state
/// Returns the 25 names as a JSON array.
pub fn handle_state_get(_query: &str) -> String {
    state::with_card(|card| card.names().to_json())
}

// ── GET /api/bingo/win ─────────────────────────────────────────────

/// Handle GET /api/bingo/win
/// Returns just the win banner (empty while in progress).
pub fn handle_win_get(_query: &str) -> String {
    state::with_card(|card| render::render_banner(card.status()))
}

fn respond_with_card() -> String {
    let mut html = render::render_card();
    html.push_str(&state::take_flush_script());
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bingo::card::Names;

    fn reset_state() {
        state::reset_for_test();
    }

    #[test]
    fn cell_post_updates_and_persists() {
        reset_state();
        let html = handle_cell_post("index=6&name=Wei+Ling");
        assert!(html.contains(r#"value="Wei Ling""#));
        assert!(html.contains(r#"localStorage.setItem("bingo-names""#));
        state::with_card(|c| assert_eq!(c.names().get(6), "Wei Ling"));
        reset_state();
    }

    #[test]
    fn cell_post_rejects_bad_index() {
        reset_state();
        assert!(handle_cell_post("index=25&name=x").contains("invalid index"));
        assert!(handle_cell_post("index=-1&name=x").contains("invalid index"));
        assert!(handle_cell_post("name=x").contains("invalid index"));
        state::with_card(|c| assert!(c.names().is_blank()));
        reset_state();
    }

    #[test]
    fn cell_post_without_name_clears() {
        reset_state();
        handle_cell_post("index=2&name=Ana");
        handle_cell_post("index=2");
        state::with_card(|c| assert_eq!(c.names().get(2), ""));
        reset_state();
    }

    #[test]
    fn completing_a_row_shows_banner() {
        reset_state();
        for i in 0..4 {
            let html = handle_cell_post(&format!("index={}&name=p{}", i, i));
            assert!(!html.contains("BINGO!"));
        }
        let html = handle_cell_post("index=4&name=p4");
        assert!(html.contains("BINGO!"));
        assert!(handle_win_get("").contains(r#"data-line="row 1""#));
        reset_state();
    }

    #[test]
    fn whitespace_name_does_not_win() {
        reset_state();
        for i in 0..4 {
            handle_cell_post(&format!("index={}&name=p{}", i, i));
        }
        let html = handle_cell_post("index=4&name=+++");
        assert!(!html.contains("BINGO!"));
        assert_eq!(handle_win_get(""), "");
        reset_state();
    }

    #[test]
    fn reset_without_confirm_is_no_op() {
        reset_state();
        handle_cell_post("index=0&name=Ana");
        let html = handle_reset_post("");
        assert!(html.contains(r#"value="Ana""#));
        assert!(!html.contains("localStorage"));
        reset_state();
    }

    #[test]
    fn reset_with_confirm_clears_and_removes_entry() {
        reset_state();
        handle_cell_post("index=0&name=Ana");
        let html = handle_reset_post("confirm=yes");
        assert!(!html.contains(r#"value="Ana""#));
        assert!(html.contains(r#"localStorage.removeItem("bingo-names")"#));
        state::with_card(|c| assert!(c.names().is_blank()));
        reset_state();
    }

    #[test]
    fn restore_raw_and_form_encoded() {
        reset_state();
        let mut names = Names::default();
        names.set(10, "Aisyah & co");
        let json = names.to_json();

        assert_eq!(handle_restore_post(&json), "ok");
        assert_eq!(handle_state_get(""), json);

        reset_state();
        let encoded = json
            .replace('%', "%25")
            .replace('&', "%26")
            .replace(' ', "+");
        handle_restore_post(&format!("state={}", encoded));
        assert_eq!(handle_state_get(""), json);
        reset_state();
    }

    #[test]
    fn restore_malformed_falls_back() {
        reset_state();
        assert_eq!(handle_restore_post(r#"["a","b","c"]"#), "ok");
        let state_json = handle_state_get("");
        let names = Names::from_json(&state_json).unwrap();
        assert!(names.is_blank());
        reset_state();
    }

    #[test]
    fn card_get_renders_grid() {
        reset_state();
        let html = handle_card_get("");
        assert_eq!(html.matches(r#"hx-post="/api/bingo/cell""#).count(), CELL_COUNT);
        reset_state();
    }
}
