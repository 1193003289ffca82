pub mod config;
pub mod error;
pub mod market;
pub mod portfolio;
pub mod ui;

pub use error::{PitraderError, Result};
