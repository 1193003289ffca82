use thiserror::Error;

#[derive(Error, Debug)]
pub enum PitraderError {
    #[error("API credential not found: set the API_KEY environment variable")]
    MissingCredential,

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Invalid quote for {symbol}: provider returned no data")]
    InvalidQuote { symbol: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PitraderError>;
