use super::format;
use egui::Color32;
use std::collections::HashMap;

/// Direction of a rendered change, used for coloring and aggregate counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Row lifecycle: placeholder on creation, then valid or invalid every poll
/// cycle. Only the last rendered values are kept.
#[derive(Debug, Clone, PartialEq)]
pub enum RowState {
    Placeholder,
    Valid { change: f64 },
    Invalid,
}

/// Last-rendered visual state for one tracked symbol.
#[derive(Debug, Clone)]
pub struct RowDisplay {
    pub state: RowState,
    pub price_text: String,
    pub change_text: String,
}

impl RowDisplay {
    fn placeholder() -> Self {
        Self {
            state: RowState::Placeholder,
            price_text: format::PLACEHOLDER.to_string(),
            change_text: format::PLACEHOLDER.to_string(),
        }
    }

    pub fn trend(&self) -> Option<Trend> {
        match self.state {
            RowState::Valid { change } if change >= 0.0 => Some(Trend::Up),
            RowState::Valid { .. } => Some(Trend::Down),
            _ => None,
        }
    }

    pub fn price_color(&self) -> Color32 {
        match self.trend() {
            Some(Trend::Up) => super::theme::ACCENT_GREEN,
            Some(Trend::Down) => super::theme::ACCENT_RED,
            None if self.state == RowState::Invalid => super::theme::ACCENT_RED,
            None => super::theme::TEXT_PRIMARY,
        }
    }

    pub fn change_color(&self) -> Color32 {
        match self.trend() {
            Some(Trend::Up) => super::theme::ACCENT_GREEN,
            Some(Trend::Down) => super::theme::ACCENT_RED,
            None => super::theme::TEXT_SECONDARY,
        }
    }
}

/// Central application state for the UI. Mutated only from the render
/// thread; the poller reaches it exclusively through channel updates.
pub struct AppState {
    rows: HashMap<String, RowDisplay>,
    pub gainers: usize,
    pub losers: usize,
    pub last_updated: Option<String>,
    pub show_add_panel: bool,
    pub symbol_input: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            gainers: 0,
            losers: 0,
            last_updated: None,
            show_add_panel: false,
            symbol_input: String::new(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a placeholder row for a newly tracked symbol.
    pub fn upsert_row(&mut self, symbol: &str) {
        self.rows
            .entry(symbol.to_string())
            .or_insert_with(RowDisplay::placeholder);
    }

    pub fn remove_row(&mut self, symbol: &str) {
        self.rows.remove(symbol);
    }

    pub fn row(&self, symbol: &str) -> Option<&RowDisplay> {
        self.rows.get(symbol)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render a successful quote. Updates for symbols removed mid-cycle are
    /// dropped silently so a stale poller result never resurrects a row.
    pub fn apply_quote(&mut self, symbol: &str, price: f64, change: f64, change_pct: f64) {
        if let Some(row) = self.rows.get_mut(symbol) {
            row.state = RowState::Valid { change };
            row.price_text = format::price(price);
            row.change_text = format::change_cell(change, change_pct);
        }
    }

    /// Render a failed or invalid fetch. Same silent-skip rule as
    /// `apply_quote`.
    pub fn apply_error(&mut self, symbol: &str) {
        if let Some(row) = self.rows.get_mut(symbol) {
            row.state = RowState::Invalid;
            row.price_text = format::INVALID.to_string();
            row.change_text = String::new();
        }
    }

    /// Recount gainers and losers from current row states. Placeholder and
    /// invalid rows count toward neither.
    pub fn recompute_aggregates(&mut self) {
        self.gainers = 0;
        self.losers = 0;
        for row in self.rows.values() {
            match row.trend() {
                Some(Trend::Up) => self.gainers += 1,
                Some(Trend::Down) => self.losers += 1,
                None => {}
            }
        }
    }

    pub fn set_last_updated(&mut self, now: chrono::DateTime<chrono::Local>) {
        self.last_updated = Some(format::last_updated(now));
    }
}
