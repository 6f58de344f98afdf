use blackjack::{Card, Hand};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response to new-deck and reshuffle calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckResponse {
    pub success: bool,
    #[serde(default)]
    pub deck_id: Option<String>,
    #[serde(default)]
    pub shuffled: Option<bool>,
    #[serde(default)]
    pub remaining: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response to a draw. On failure `cards` is usually empty and `error` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawResult {
    pub success: bool,
    #[serde(default)]
    pub deck_id: Option<String>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub remaining: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DrawResult {
    /// The drawn cards as a hand, in draw order
    pub fn hand(&self) -> Hand {
        Hand::from(self.cards.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PileSummary {
    pub remaining: u32,
}

/// Response to adding cards to a pile: per-pile card counts for the deck.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PileResponse {
    pub success: bool,
    #[serde(default)]
    pub deck_id: Option<String>,
    #[serde(default)]
    pub remaining: Option<u32>,
    #[serde(default)]
    pub piles: BTreeMap<String, PileSummary>,
    #[serde(default)]
    pub error: Option<String>,
}
