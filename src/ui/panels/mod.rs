mod header;
mod watchlist;

pub use header::HeaderPanel;
pub use watchlist::{WatchlistAction, WatchlistPanel};
