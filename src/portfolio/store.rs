use super::Portfolio;
use crate::error::{PitraderError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Loads and saves the watchlist as a pretty-printed JSON array.
pub struct PortfolioStore {
    path: PathBuf,
}

impl PortfolioStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted watchlist.
    ///
    /// A missing file is seeded with the default list and persisted right
    /// away. A file that exists but cannot be read or parsed falls back to
    /// the default list in memory only; the file is left untouched.
    pub fn load(&self) -> Portfolio {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str::<Vec<String>>(&contents) {
                Ok(symbols) => Portfolio::from_symbols(symbols),
                Err(e) => {
                    log::error!(
                        "Corrupt portfolio file {}: {e}; using defaults without rewriting it",
                        self.path.display()
                    );
                    Portfolio::default()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let portfolio = Portfolio::default();
                if let Err(e) = self.save(&portfolio) {
                    log::error!("Failed to seed default portfolio: {e}");
                }
                portfolio
            }
            Err(e) => {
                log::error!(
                    "Failed to read portfolio file {}: {e}; using defaults",
                    self.path.display()
                );
                Portfolio::default()
            }
        }
    }

    /// Overwrite the persisted file with the current list, order preserved.
    pub fn save(&self, portfolio: &Portfolio) -> Result<()> {
        let json = serde_json::to_string_pretty(portfolio.symbols())?;
        std::fs::write(&self.path, json).map_err(|e| {
            PitraderError::Persistence(format!(
                "Failed to write {}: {e}",
                self.path.display()
            ))
        })
    }
}
