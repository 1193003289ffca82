mod store;

pub use store::PortfolioStore;

use serde::{Deserialize, Serialize};

/// Watchlist seeded on first run, before the user has added anything.
pub const DEFAULT_SYMBOLS: [&str; 4] = ["AAPL", "MSFT", "AMZN", "GOOGL"];

/// An ordered, de-duplicated list of uppercase ticker symbols.
///
/// Insertion order is display order, and the list is persisted verbatim as a
/// flat JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Portfolio {
    symbols: Vec<String>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Portfolio {
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Build from raw symbols, normalizing and dropping duplicates so a
    /// hand-edited file cannot break the uniqueness invariant.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut portfolio = Self::new();
        for symbol in symbols {
            portfolio.add(symbol.as_ref());
        }
        portfolio
    }

    pub fn normalize(input: &str) -> String {
        input.trim().to_uppercase()
    }

    /// Add a symbol. Returns true if it was newly added; empty input and
    /// duplicates are silent no-ops.
    pub fn add(&mut self, symbol: &str) -> bool {
        let symbol = Self::normalize(symbol);
        if symbol.is_empty() || self.symbols.contains(&symbol) {
            return false;
        }
        self.symbols.push(symbol);
        true
    }

    /// Remove a symbol. Returns true if it was present.
    pub fn remove(&mut self, symbol: &str) -> bool {
        let symbol = Self::normalize(symbol);
        let before = self.symbols.len();
        self.symbols.retain(|s| s != &symbol);
        self.symbols.len() != before
    }

    pub fn contains(&self, symbol: &str) -> bool {
        let symbol = Self::normalize(symbol);
        self.symbols.iter().any(|s| s == &symbol)
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Copy of the symbol list, for iteration outside the portfolio lock.
    pub fn snapshot(&self) -> Vec<String> {
        self.symbols.clone()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
