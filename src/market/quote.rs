/// One snapshot of a symbol's price, fetched per poll cycle and never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub symbol: String,
    pub current: f64,
    pub previous_close: f64,
}

impl Quote {
    pub fn new(symbol: impl Into<String>, current: f64, previous_close: f64) -> Self {
        Self {
            symbol: symbol.into(),
            current,
            previous_close,
        }
    }

    /// Absolute dollar change since the previous close.
    pub fn change(&self) -> f64 {
        self.current - self.previous_close
    }

    /// Percent change since the previous close. Only meaningful for valid
    /// quotes; callers must check `is_valid` first.
    pub fn change_pct(&self) -> f64 {
        self.change() / self.previous_close * 100.0
    }

    /// A zero/zero price pair is the provider's convention for an unknown
    /// symbol, and a zero previous close admits no percent change at all.
    pub fn is_valid(&self) -> bool {
        !(self.current == 0.0 && self.previous_close == 0.0) && self.previous_close != 0.0
    }
}
