//! In-process stand-in for the deck API used by unit tests.
//!
//! Cards come off the top of a fixed order, so tests can lay out exactly
//! which hands each player receives. A full reshuffle only resets the draw
//! position.

use crate::client::{DeckApi, RequestMethod};
use crate::error::Result;
use crate::msg::{DeckResponse, DrawResult, PileResponse, PileSummary};
use blackjack::{Card, CardValue, Suit};
use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

pub const FAKE_DECK_ID: &str = "fakedeck0001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateDeck {
        method: RequestMethod,
        jokers_enabled: bool,
    },
    CreateShuffledDeck {
        method: RequestMethod,
        deck_count: u32,
    },
    Reshuffle {
        deck_id: String,
        remaining: bool,
    },
    Draw {
        deck_id: String,
        count: usize,
    },
    AddToPile {
        deck_id: String,
        pile_name: String,
        card_codes: Vec<String>,
    },
}

const VALUES: [(CardValue, &str); 13] = [
    (CardValue::Ace, "A"),
    (CardValue::Two, "2"),
    (CardValue::Three, "3"),
    (CardValue::Four, "4"),
    (CardValue::Five, "5"),
    (CardValue::Six, "6"),
    (CardValue::Seven, "7"),
    (CardValue::Eight, "8"),
    (CardValue::Nine, "9"),
    (CardValue::Ten, "0"),
    (CardValue::Jack, "J"),
    (CardValue::Queen, "Q"),
    (CardValue::King, "K"),
];

fn suit_letter(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "S",
        Suit::Hearts => "H",
        Suit::Diamonds => "D",
        Suit::Clubs => "C",
        Suit::Black => "1",
        Suit::Red => "2",
    }
}

fn code_for(value: CardValue, suit: Suit) -> String {
    let rank = VALUES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, r)| *r)
        .unwrap_or("X");
    format!("{rank}{}", suit_letter(suit))
}

pub fn card_of(value: CardValue, suit: Suit) -> Card {
    Card::new(code_for(value, suit), value, suit)
}

pub fn card(value: CardValue) -> Card {
    card_of(value, Suit::Spades)
}

pub fn ace() -> Card {
    card(CardValue::Ace)
}

struct FakeState {
    cards: Vec<Card>,
    drawn: usize,
    piles: BTreeMap<String, Vec<String>>,
    scripted_draws: VecDeque<DrawResult>,
    scripted_decks: VecDeque<DeckResponse>,
    calls: Vec<Call>,
}

pub struct FakeDeckApi {
    state: Mutex<FakeState>,
}

impl FakeDeckApi {
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            state: Mutex::new(FakeState {
                cards,
                drawn: 0,
                piles: BTreeMap::new(),
                scripted_draws: VecDeque::new(),
                scripted_decks: VecDeque::new(),
                calls: Vec::new(),
            }),
        }
    }

    /// A 52-card deck ordered by suit then value.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs] {
            for (value, _) in VALUES {
                cards.push(card_of(value, suit));
            }
        }
        Self::with_cards(cards)
    }

    /// Queue a response returned by the next draw instead of dealing.
    pub fn script_draw(&self, draw: DrawResult) {
        self.state.lock().unwrap().scripted_draws.push_back(draw);
    }

    /// Queue a response for the next create or reshuffle call.
    pub fn script_deck(&self, deck: DeckResponse) {
        self.state.lock().unwrap().scripted_decks.push_back(deck);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn reshuffle_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Reshuffle { .. }))
            .count()
    }

    pub fn draw_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Draw { .. }))
            .count()
    }

    pub fn pile(&self, name: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .piles
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    fn new_deck(state: &mut FakeState) -> DeckResponse {
        state.drawn = 0;
        state.piles.clear();
        DeckResponse {
            success: true,
            deck_id: Some(FAKE_DECK_ID.to_string()),
            shuffled: Some(false),
            remaining: Some(state.cards.len() as u32),
            error: None,
        }
    }
}

const UNKNOWN_DECK: &str = "Deck ID does not exist.";

impl DeckApi for FakeDeckApi {
    async fn create_deck(
        &self,
        method: RequestMethod,
        jokers_enabled: bool,
    ) -> Result<DeckResponse> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateDeck {
            method,
            jokers_enabled,
        });
        if let Some(scripted) = state.scripted_decks.pop_front() {
            return Ok(scripted);
        }
        Ok(Self::new_deck(&mut state))
    }

    async fn create_shuffled_deck(
        &self,
        method: RequestMethod,
        deck_count: u32,
    ) -> Result<DeckResponse> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateShuffledDeck { method, deck_count });
        if let Some(scripted) = state.scripted_decks.pop_front() {
            return Ok(scripted);
        }
        let mut response = Self::new_deck(&mut state);
        response.shuffled = Some(true);
        Ok(response)
    }

    async fn reshuffle_deck(&self, deck_id: &str, remaining: bool) -> Result<DeckResponse> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Reshuffle {
            deck_id: deck_id.to_string(),
            remaining,
        });
        if let Some(scripted) = state.scripted_decks.pop_front() {
            return Ok(scripted);
        }
        if deck_id != FAKE_DECK_ID {
            return Ok(DeckResponse {
                error: Some(UNKNOWN_DECK.to_string()),
                ..Default::default()
            });
        }
        if !remaining {
            state.drawn = 0;
            state.piles.clear();
        }
        Ok(DeckResponse {
            success: true,
            deck_id: Some(FAKE_DECK_ID.to_string()),
            shuffled: Some(true),
            remaining: Some((state.cards.len() - state.drawn) as u32),
            error: None,
        })
    }

    async fn draw_cards(&self, deck_id: &str, count: usize) -> Result<DrawResult> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Draw {
            deck_id: deck_id.to_string(),
            count,
        });
        if let Some(scripted) = state.scripted_draws.pop_front() {
            return Ok(scripted);
        }
        if deck_id != FAKE_DECK_ID {
            return Ok(DrawResult {
                error: Some(UNKNOWN_DECK.to_string()),
                ..Default::default()
            });
        }

        let remaining = state.cards.len() - state.drawn;
        if count > remaining {
            return Ok(DrawResult {
                success: false,
                deck_id: Some(FAKE_DECK_ID.to_string()),
                cards: Vec::new(),
                remaining: Some(remaining as u32),
                error: Some(format!(
                    "Not enough cards remaining to draw {count} additional"
                )),
            });
        }

        let start = state.drawn;
        state.drawn += count;
        Ok(DrawResult {
            success: true,
            deck_id: Some(FAKE_DECK_ID.to_string()),
            cards: state.cards[start..start + count].to_vec(),
            remaining: Some((remaining - count) as u32),
            error: None,
        })
    }

    async fn add_to_pile(
        &self,
        deck_id: &str,
        pile_name: &str,
        card_codes: &[String],
    ) -> Result<PileResponse> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::AddToPile {
            deck_id: deck_id.to_string(),
            pile_name: pile_name.to_string(),
            card_codes: card_codes.to_vec(),
        });
        if deck_id != FAKE_DECK_ID {
            return Ok(PileResponse {
                error: Some(UNKNOWN_DECK.to_string()),
                ..Default::default()
            });
        }

        state
            .piles
            .entry(pile_name.to_string())
            .or_default()
            .extend(card_codes.iter().cloned());
        let piles = state
            .piles
            .iter()
            .map(|(name, codes)| {
                (
                    name.clone(),
                    PileSummary {
                        remaining: codes.len() as u32,
                    },
                )
            })
            .collect();
        Ok(PileResponse {
            success: true,
            deck_id: Some(FAKE_DECK_ID.to_string()),
            remaining: Some((state.cards.len() - state.drawn) as u32),
            piles,
            error: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_deck_resets_draw_position() {
        let api = FakeDeckApi::standard();
        let first = api.draw_cards(FAKE_DECK_ID, 2).await.unwrap();
        api.add_to_pile(FAKE_DECK_ID, "player1", &first.hand().codes())
            .await
            .unwrap();

        let deck = api.create_deck(RequestMethod::Post, true).await.unwrap();
        assert!(deck.success);
        assert_eq!(deck.deck_id.as_deref(), Some(FAKE_DECK_ID));
        assert_eq!(deck.remaining, Some(52));
        assert!(api.pile("player1").is_empty());

        let again = api.draw_cards(FAKE_DECK_ID, 2).await.unwrap();
        assert_eq!(again.hand().codes(), first.hand().codes());
        assert!(api.calls().contains(&Call::CreateDeck {
            method: RequestMethod::Post,
            jokers_enabled: true,
        }));
    }

    #[tokio::test]
    async fn test_scripted_deck_is_returned_once() {
        let api = FakeDeckApi::standard();
        api.script_deck(DeckResponse {
            success: false,
            error: Some("boom".to_string()),
            ..Default::default()
        });

        let scripted = api.create_deck(RequestMethod::Get, false).await.unwrap();
        assert!(!scripted.success);
        let real = api.create_deck(RequestMethod::Get, false).await.unwrap();
        assert!(real.success);
    }
}
