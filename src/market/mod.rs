mod client;
mod quote;

pub use client::QuoteClient;
pub use quote::Quote;
