//! HTML rendering for the bingo card.
//!
//! Everything here returns the inner HTML of the page's `#bingo-card`
//! container; HTMX swaps it in with `innerHTML`. Name inputs carry stable
//! ids so HTMX puts focus and caret back after each swap.

use crate::bingo::card::{Names, WinStatus, win_status};
use crate::bingo::controller::RESET_PROMPT;
use crate::bingo::grid::{CELL_COUNT, CENTER_INDEX, Line, TRAITS};
use crate::bingo::state;

pub const BANNER_TEXT: &str = "\u{1F389} BINGO! You've completed a line! \u{1F389}";

/// Render the card from the global state.
pub fn render_card() -> String {
    state::with_card(|card| render_names(card.names()))
}

/// Render a full card for the given names.
pub fn render_names(names: &Names) -> String {
    let status = win_status(names);
    let mut html = String::with_capacity(12 * 1024);

    html.push_str(r#"<div class="max-w-3xl mx-auto py-2">"#);

    // Header: title + New Card
    html.push_str(r#"<div class="flex flex-col gap-4 mb-2">"#);
    html.push_str(r#"<h1 class="text-3xl font-bold text-center mb-4">SOCIAL BINGO</h1>"#);
    html.push_str(&format!(
        r##"<div><button type="button" class="bg-red-600 hover:bg-red-700 text-white font-bold py-2 px-4 rounded shadow uppercase text-sm" hx-post="/api/bingo/reset" hx-vals='{{"confirm": "yes"}}' hx-confirm="{}" hx-target="#bingo-card" hx-swap="innerHTML">New Card</button></div>"##,
        escape_html(RESET_PROMPT)
    ));
    html.push_str(r#"</div>"#);

    html.push_str(
        r#"<p class="text-xs text-center text-slate-500 mt-2">&larr; Swipe to see more &rarr;</p>"#,
    );

    // Scrollable board
    html.push_str(r#"<div class="overflow-x-auto min-w-[600px] min-h-screen mx-auto">"#);
    html.push_str(&render_banner(status));
    html.push_str(r#"<div class="grid grid-cols-5 gap-4 mt-4">"#);
    for idx in 0..CELL_COUNT {
        html.push_str(&render_cell(idx, names.get(idx), status.line()));
    }
    html.push_str(r#"</div>"#); // grid
    html.push_str(r#"</div>"#); // scroll container

    html.push_str(r#"</div>"#);
    html
}

/// The win banner, or an empty string while the card is in progress.
pub fn render_banner(status: WinStatus) -> String {
    match status {
        WinStatus::Won(line) => format!(
            r#"<p id="bingo-banner" class="text-2xl font-bold text-center my-4" data-line="{}">{}</p>"#,
            line.label(),
            BANNER_TEXT
        ),
        WinStatus::InProgress => String::new(),
    }
}

fn render_cell(idx: usize, value: &str, winning: Option<&Line>) -> String {
    let highlighted = winning.map(|l| l.contains(idx)).unwrap_or(false);
    let is_center = idx == CENTER_INDEX;

    let border = if highlighted {
        "border-emerald-600"
    } else if is_center {
        "border-blue-600"
    } else {
        "border-slate-400"
    };
    // Filled styling follows the raw value, so a lone space still tints the cell.
    let background = if is_center {
        "bg-blue-100"
    } else if !value.is_empty() {
        "bg-emerald-100"
    } else {
        "bg-white"
    };

    let mut html = String::with_capacity(768);
    html.push_str(&format!(
        r#"<div id="cell-{}" class="aspect-square border-2 {} {} flex flex-col justify-between p-2 transition-all duration-200">"#,
        idx, border, background
    ));
    html.push_str(&format!(
        r#"<p class="text-sm font-semibold text-center select-none">{}</p>"#,
        escape_html(TRAITS[idx])
    ));
    html.push_str(&format!(
        r##"<input type="text" id="name-{idx}" name="name" value="{value}" placeholder="Name" autocomplete="off" aria-label="{label}" class="w-full text-center text-sm bg-white/70 rounded px-2 outline-none" hx-post="/api/bingo/cell" hx-trigger="input changed" hx-vals='{{"index": "{idx}"}}' hx-target="#bingo-card" hx-swap="innerHTML">"##,
        idx = idx,
        value = escape_html(value),
        label = escape_html(TRAITS[idx]),
    ));
    html.push_str(r#"</div>"#);
    html
}

/// Escape text for use in element content and double- or single-quoted attributes.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
