//! Plain-text rendering of a [`ViewSnapshot`].
//!
//! The engine knows nothing about presentation; this is one consumer of its
//! output, used by the command-line binary.

use crate::catalog::Item;
use crate::query::{ViewMode, ViewSnapshot};

const GRID_COLUMNS: usize = 3;
const CARD_WIDTH: usize = 30;

pub const EMPTY_TITLE: &str = "No products found";
pub const EMPTY_HINT: &str = "Try adjusting your filters or search terms";

/// Render the snapshot in its view mode, header included.
pub fn render_text(snapshot: &ViewSnapshot) -> String {
    let mut out = format!("{} products found\n\n", snapshot.count());

    if snapshot.items.is_empty() {
        out.push_str(&format!("{EMPTY_TITLE}\n{EMPTY_HINT}\n"));
        return out;
    }

    match snapshot.view_mode {
        ViewMode::Grid => render_grid(snapshot, &mut out),
        ViewMode::List => render_list(snapshot, &mut out),
    }
    out
}

/// Render facet lists as two labelled lines.
pub fn render_facets(categories: &[String], brands: &[String]) -> String {
    format!(
        "Categories: {}\nBrands: {}\n",
        categories.join(", "),
        brands.join(", ")
    )
}

fn render_list(snapshot: &ViewSnapshot, out: &mut String) {
    for item in &snapshot.items {
        out.push_str(&format!(
            "{} {} {} [{}] [{}] {} {} ${}\n",
            heart(snapshot.is_favorite(item.id)),
            item.image,
            item.name,
            item.category,
            item.brand,
            stars(item),
            item.rating,
            price(item.price),
        ));
    }
}

fn render_grid(snapshot: &ViewSnapshot, out: &mut String) {
    for row in snapshot.items.chunks(GRID_COLUMNS) {
        let cards: Vec<[String; 4]> = row
            .iter()
            .map(|item| card(item, snapshot.is_favorite(item.id)))
            .collect();

        for line in 0..4 {
            let joined = cards
                .iter()
                .map(|card| pad(&card[line], CARD_WIDTH))
                .collect::<Vec<_>>()
                .join("  ");
            out.push_str(joined.trim_end());
            out.push('\n');
        }
        out.push('\n');
    }
}

fn card(item: &Item, favorite: bool) -> [String; 4] {
    [
        format!("{} {} {}", item.image, item.name, heart(favorite)),
        format!("{} / {}", item.category, item.brand),
        format!("{} {}", stars(item), item.rating),
        format!("${}", price(item.price)),
    ]
}

fn heart(favorite: bool) -> &'static str {
    if favorite {
        "♥"
    } else {
        "♡"
    }
}

fn stars(item: &Item) -> String {
    let filled = item.star_count();
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Whole prices print without decimals, others with two.
fn price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}
