use crate::config::DeckConfig;
use crate::error::{DeckError, Result};
use crate::msg::{DeckResponse, DrawResult, PileResponse};
use serde::de::DeserializeOwned;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMethod {
    #[default]
    Get,
    Post,
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestMethod::Get => f.write_str("GET"),
            RequestMethod::Post => f.write_str("POST"),
        }
    }
}

/// Operations of the remote deck API.
///
/// Logical failures come back as data with `success == false`; an `Err`
/// means the call never produced a decodable response.
#[allow(async_fn_in_trait)]
pub trait DeckApi {
    async fn create_deck(&self, method: RequestMethod, jokers_enabled: bool)
        -> Result<DeckResponse>;

    async fn create_shuffled_deck(
        &self,
        method: RequestMethod,
        deck_count: u32,
    ) -> Result<DeckResponse>;

    /// `remaining == false` puts already-drawn cards back before shuffling.
    async fn reshuffle_deck(&self, deck_id: &str, remaining: bool) -> Result<DeckResponse>;

    async fn draw_cards(&self, deck_id: &str, count: usize) -> Result<DrawResult>;

    async fn add_to_pile(
        &self,
        deck_id: &str,
        pile_name: &str,
        card_codes: &[String],
    ) -> Result<PileResponse>;
}

pub fn new_deck_path(jokers_enabled: bool) -> String {
    if jokers_enabled {
        "/api/deck/new/?jokers_enabled=true".to_string()
    } else {
        "/api/deck/new/".to_string()
    }
}

pub fn shuffled_deck_path(deck_count: u32) -> String {
    format!("/api/deck/new/shuffle/?deck_count={deck_count}")
}

pub fn reshuffle_path(deck_id: &str, remaining: bool) -> String {
    format!("/api/deck/{deck_id}/shuffle/?remaining={remaining}")
}

pub fn draw_path(deck_id: &str, count: usize) -> String {
    format!("/api/deck/{deck_id}/draw/?count={count}")
}

/// Codes are joined with commas and passed through unescaped.
pub fn add_to_pile_path(deck_id: &str, pile_name: &str, card_codes: &[String]) -> String {
    format!(
        "/api/deck/{deck_id}/pile/{pile_name}/add/?cards={}",
        card_codes.join(",")
    )
}

/// `DeckApi` over HTTP. Each request builds its own `reqwest::Client`, so
/// no connections or cookies carry over between calls.
#[derive(Debug, Clone)]
pub struct HttpDeckClient {
    config: DeckConfig,
}

impl HttpDeckClient {
    pub fn new(config: DeckConfig) -> Self {
        Self { config }
    }

    fn fresh_client(&self) -> Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.config.accept_invalid_certs)
            .build()?;
        Ok(client)
    }

    async fn send<T: DeserializeOwned>(&self, method: RequestMethod, path: &str) -> Result<T> {
        let url = self.config.url(path);
        let client = self.fresh_client()?;
        let request = match method {
            RequestMethod::Get => client.get(&url),
            RequestMethod::Post => client.post(&url),
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        log::debug!("{method} {url} -> {status} ({} bytes)", body.len());

        // Error statuses still carry a JSON body with success=false
        serde_json::from_slice(&body).map_err(|source| DeckError::Decode {
            endpoint: url,
            source,
        })
    }

    /// Request the service root and return the HTTP status code.
    pub async fn status(&self) -> Result<u16> {
        let url = self.config.url("/");
        let response = self.fresh_client()?.get(&url).send().await?;
        Ok(response.status().as_u16())
    }
}

impl DeckApi for HttpDeckClient {
    async fn create_deck(
        &self,
        method: RequestMethod,
        jokers_enabled: bool,
    ) -> Result<DeckResponse> {
        self.send(method, &new_deck_path(jokers_enabled)).await
    }

    async fn create_shuffled_deck(
        &self,
        method: RequestMethod,
        deck_count: u32,
    ) -> Result<DeckResponse> {
        self.send(method, &shuffled_deck_path(deck_count)).await
    }

    async fn reshuffle_deck(&self, deck_id: &str, remaining: bool) -> Result<DeckResponse> {
        self.send(RequestMethod::Post, &reshuffle_path(deck_id, remaining))
            .await
    }

    async fn draw_cards(&self, deck_id: &str, count: usize) -> Result<DrawResult> {
        self.send(RequestMethod::Get, &draw_path(deck_id, count)).await
    }

    async fn add_to_pile(
        &self,
        deck_id: &str,
        pile_name: &str,
        card_codes: &[String],
    ) -> Result<PileResponse> {
        self.send(
            RequestMethod::Get,
            &add_to_pile_path(deck_id, pile_name, card_codes),
        )
        .await
    }
}
