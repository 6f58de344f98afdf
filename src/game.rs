//! Two-player flows against a single remote deck.
//!
//! Every call is awaited before the next one is issued, so player 1 always
//! takes the first cards of the current deck state and player 2 the next.

use crate::client::{DeckApi, RequestMethod};
use crate::config::DeckConfig;
use crate::draw::{validate_draw, SafeDrawer};
use crate::error::{DeckError, Result};
use crate::msg::{DrawResult, PileResponse};
use blackjack::BlackjackHolder;

pub use blackjack::check_for_blackjack;

pub const PLAYER_ONE_PILE: &str = "player1";
pub const PLAYER_TWO_PILE: &str = "player2";

/// Cards per player in the fixed deal
pub const FIXED_DEAL_CARDS: usize = 3;
/// Cards per player per round while playing until blackjack
pub const BLACKJACK_DEAL_CARDS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct DealtPiles {
    pub player1_pile: PileResponse,
    pub player2_pile: PileResponse,
}

/// Final hands of a game and who, if anyone, holds blackjack.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub player1: DrawResult,
    pub player2: DrawResult,
    pub player1_blackjack: bool,
    pub player2_blackjack: bool,
    pub rounds: u32,
}

impl RoundReport {
    pub fn holder(&self) -> BlackjackHolder {
        BlackjackHolder::from_flags(self.player1_blackjack, self.player2_blackjack)
    }

    pub fn result(&self) -> &'static str {
        check_for_blackjack(self.player1_blackjack, self.player2_blackjack)
    }
}

pub struct Table<C> {
    api: C,
    max_reshuffles: u32,
    max_rounds: u32,
}

impl<C: DeckApi> Table<C> {
    pub fn new(api: C, max_reshuffles: u32, max_rounds: u32) -> Self {
        Self {
            api,
            max_reshuffles,
            max_rounds,
        }
    }

    pub fn from_config(api: C, config: &DeckConfig) -> Self {
        Self::new(api, config.max_reshuffles, config.max_rounds)
    }

    pub fn api(&self) -> &C {
        &self.api
    }

    pub fn drawer(&self) -> SafeDrawer<'_, C> {
        SafeDrawer::new(&self.api, self.max_reshuffles)
    }

    /// Create a single shuffled deck and reshuffle it, checking the API
    /// hands back the same deck id both times.
    pub async fn prepare_deck(&self) -> Result<String> {
        let deck = self.api.create_shuffled_deck(RequestMethod::Get, 1).await?;
        if !deck.success {
            return Err(DeckError::RequestFailed {
                op: "Creating shuffled deck",
                error: deck.error.unwrap_or_else(|| "no error given".to_string()),
            });
        }
        let deck_id = deck.deck_id.ok_or(DeckError::MissingDeckId)?;
        log::info!("Created shuffled deck {deck_id}");

        let shuffled = self.api.reshuffle_deck(&deck_id, false).await?;
        if !shuffled.success {
            return Err(DeckError::RequestFailed {
                op: "Reshuffling deck",
                error: shuffled
                    .error
                    .unwrap_or_else(|| "no error given".to_string()),
            });
        }
        match shuffled.deck_id {
            Some(id) if id == deck_id => Ok(deck_id),
            Some(id) => Err(DeckError::DeckIdChanged {
                expected: deck_id,
                actual: id,
            }),
            None => Err(DeckError::MissingDeckId),
        }
    }

    async fn draw_checked(&self, deck_id: &str, count: usize) -> Result<DrawResult> {
        let draw = self.api.draw_cards(deck_id, count).await?;
        validate_draw(&draw, count)?;
        Ok(draw)
    }

    /// Draw three cards for each player in turn and put each hand in its
    /// own pile.
    pub async fn deal_cards_to_players(&self, deck_id: &str) -> Result<DealtPiles> {
        let player1 = self.draw_checked(deck_id, FIXED_DEAL_CARDS).await?;
        let player2 = self.draw_checked(deck_id, FIXED_DEAL_CARDS).await?;

        let player1_pile = self
            .api
            .add_to_pile(deck_id, PLAYER_ONE_PILE, &player1.hand().codes())
            .await?;
        let player2_pile = self
            .api
            .add_to_pile(deck_id, PLAYER_TWO_PILE, &player2.hand().codes())
            .await?;

        Ok(DealtPiles {
            player1_pile,
            player2_pile,
        })
    }

    /// One deal of three cards each. Three-card hands never count as
    /// blackjack, so the result is always "none".
    pub async fn play_fixed_deal(&self, deck_id: &str) -> Result<RoundReport> {
        let player1 = self.draw_checked(deck_id, FIXED_DEAL_CARDS).await?;
        let player2 = self.draw_checked(deck_id, FIXED_DEAL_CARDS).await?;

        let player1_blackjack = player1.hand().is_blackjack();
        let player2_blackjack = player2.hand().is_blackjack();

        Ok(RoundReport {
            player1,
            player2,
            player1_blackjack,
            player2_blackjack,
            rounds: 1,
        })
    }

    /// Deal two cards to each player per round until either has blackjack.
    pub async fn play_until_blackjack(&self, deck_id: &str) -> Result<RoundReport> {
        let drawer = self.drawer();
        for round in 1..=self.max_rounds {
            let player1 = drawer
                .draw_cards_and_check_blackjack(deck_id, BLACKJACK_DEAL_CARDS)
                .await?;
            let player2 = drawer
                .draw_cards_and_check_blackjack(deck_id, BLACKJACK_DEAL_CARDS)
                .await?;
            log::debug!(
                "Round {round}: player 1 {}, player 2 {}",
                player1.has_blackjack,
                player2.has_blackjack
            );

            if player1.has_blackjack || player2.has_blackjack {
                return Ok(RoundReport {
                    player1: player1.player,
                    player2: player2.player,
                    player1_blackjack: player1.has_blackjack,
                    player2_blackjack: player2.has_blackjack,
                    rounds: round,
                });
            }
        }
        Err(DeckError::NoBlackjack {
            rounds: self.max_rounds,
        })
    }
}
