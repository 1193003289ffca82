//! Text formatting rules for price and change cells.

pub const UP_GLYPH: &str = "▲";
pub const DOWN_GLYPH: &str = "▼";
pub const PLACEHOLDER: &str = "--";
pub const INVALID: &str = "INVALID";

/// Prices under $10 get an extra decimal so penny-stock moves stay visible.
pub fn price(price: f64) -> String {
    if price < 10.0 {
        format!("${price:.3}")
    } else {
        format!("${price:.2}")
    }
}

/// Absolute dollar change, 3 decimals under a dollar.
pub fn dollar_change(change: f64) -> String {
    let abs = change.abs();
    if abs < 1.0 {
        format!("${abs:.3}")
    } else {
        format!("${abs:.2}")
    }
}

/// Full change cell: glyph, unsigned percent, unsigned dollar change.
/// A change of exactly zero counts as up.
pub fn change_cell(change: f64, change_pct: f64) -> String {
    let glyph = if change >= 0.0 { UP_GLYPH } else { DOWN_GLYPH };
    format!("{glyph} {:.1}% {}", change_pct.abs(), dollar_change(change))
}

/// Header timestamp, e.g. `03:41:07 PM`.
pub fn last_updated(now: chrono::DateTime<chrono::Local>) -> String {
    now.format("%I:%M:%S %p").to_string()
}
