mod app;
mod panels;
mod services;
mod state;

pub mod format;
pub mod theme;

pub use app::PiTraderApp;
pub use services::{PollerUpdate, QuotePoller};
pub use state::{AppState, RowDisplay, RowState, Trend};
