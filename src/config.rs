use crate::error::{DeckError, Result};

pub const DEFAULT_MAX_RESHUFFLES: u32 = 3;
pub const DEFAULT_MAX_ROUNDS: u32 = 200;

/// Connection and retry settings for talking to the deck API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    /// Scheme and host of the deck API, e.g. `https://deckofcardsapi.com`
    pub base_url: String,
    pub accept_invalid_certs: bool,
    /// Reshuffles the safe drawer may issue for one draw before giving up
    pub max_reshuffles: u32,
    /// Rounds of the until-blackjack game before giving up
    pub max_rounds: u32,
}

impl DeckConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            accept_invalid_certs: true,
            max_reshuffles: DEFAULT_MAX_RESHUFFLES,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Load from the process environment, reading `.env` first if present.
    ///
    /// `BASE_URL` is required. `ACCEPT_INVALID_CERTS`, `MAX_RESHUFFLES` and
    /// `MAX_ROUNDS` fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup("BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| DeckError::Config("BASE_URL is not set".to_string()))?;

        let mut config = Self::new(base_url);
        if let Some(v) = lookup("ACCEPT_INVALID_CERTS") {
            config.accept_invalid_certs = parse_bool("ACCEPT_INVALID_CERTS", &v)?;
        }
        if let Some(v) = lookup("MAX_RESHUFFLES") {
            config.max_reshuffles = parse_u32("MAX_RESHUFFLES", &v)?;
        }
        if let Some(v) = lookup("MAX_ROUNDS") {
            config.max_rounds = parse_u32("MAX_ROUNDS", &v)?;
        }
        Ok(config)
    }

    /// Join a path onto the base URL without doubling the slash.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(DeckError::Config(format!(
            "{key}: expected a boolean, got '{other}'"
        ))),
    }
}

fn parse_u32(key: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|e| DeckError::Config(format!("{key}: {e}")))
}
