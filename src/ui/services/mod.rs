pub mod poller;

pub use poller::{PollerUpdate, QuotePoller};
