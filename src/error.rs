use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{op} failed: {error}")]
    RequestFailed { op: &'static str, error: String },

    #[error("Drawing cards failed: {0}")]
    DrawFailed(String),

    #[error("Deck id is not defined in draw response")]
    MissingDeckId,

    #[error("Expected {expected} cards, but got {actual}")]
    CardCountMismatch { expected: usize, actual: usize },

    #[error("Deck id changed from {expected} to {actual}")]
    DeckIdChanged { expected: String, actual: String },

    #[error("Deck {deck_id} still exhausted after {attempts} reshuffles")]
    Exhausted { deck_id: String, attempts: u32 },

    #[error("No blackjack after {rounds} rounds")]
    NoBlackjack { rounds: u32 },
}

pub type Result<T> = std::result::Result<T, DeckError>;
