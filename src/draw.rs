//! Drawing with recovery from deck exhaustion.

use crate::client::DeckApi;
use crate::error::{DeckError, Result};
use crate::msg::DrawResult;

/// The one draw failure the drawer recovers from.
pub const EXHAUSTED_ERROR: &str = "Not enough cards remaining to draw 2 additional";

pub fn is_exhausted(draw: &DrawResult) -> bool {
    !draw.success && draw.error.as_deref() == Some(EXHAUSTED_ERROR)
}

/// A validated draw for one player and whether it is blackjack.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDraw {
    pub player: DrawResult,
    pub has_blackjack: bool,
}

/// Require a successful draw carrying a deck id and exactly `expected` cards.
pub fn validate_draw(draw: &DrawResult, expected: usize) -> Result<()> {
    if !draw.success {
        return Err(DeckError::DrawFailed(
            draw.error
                .clone()
                .unwrap_or_else(|| "no error given".to_string()),
        ));
    }
    if draw.deck_id.is_none() {
        return Err(DeckError::MissingDeckId);
    }
    if draw.cards.len() != expected {
        return Err(DeckError::CardCountMismatch {
            expected,
            actual: draw.cards.len(),
        });
    }
    Ok(())
}

pub struct SafeDrawer<'a, C> {
    api: &'a C,
    max_reshuffles: u32,
}

impl<'a, C: DeckApi> SafeDrawer<'a, C> {
    pub fn new(api: &'a C, max_reshuffles: u32) -> Self {
        Self {
            api,
            max_reshuffles,
        }
    }

    /// Draw `count` cards. On the exhaustion error the whole deck is
    /// reshuffled (drawn cards included) and the same draw is retried, up to
    /// `max_reshuffles` times. Any other response is returned untouched.
    pub async fn draw_safe(&self, deck_id: &str, count: usize) -> Result<DrawResult> {
        let mut reshuffles = 0;
        loop {
            let draw = self.api.draw_cards(deck_id, count).await?;
            if !is_exhausted(&draw) {
                return Ok(draw);
            }
            if reshuffles >= self.max_reshuffles {
                return Err(DeckError::Exhausted {
                    deck_id: deck_id.to_string(),
                    attempts: reshuffles,
                });
            }

            reshuffles += 1;
            log::warn!(
                "Deck {deck_id} exhausted, reshuffling ({reshuffles}/{})",
                self.max_reshuffles
            );
            let shuffled = self.api.reshuffle_deck(deck_id, false).await?;
            log::debug!("Reshuffle response: {shuffled:?}");
        }
    }

    pub async fn draw_cards_and_check_blackjack(
        &self,
        deck_id: &str,
        number_of_cards: usize,
    ) -> Result<PlayerDraw> {
        let player = self.draw_safe(deck_id, number_of_cards).await?;
        log::debug!("draw_cards_and_check_blackjack: {player:?}");
        validate_draw(&player, number_of_cards)?;

        let has_blackjack = player.hand().is_blackjack();
        Ok(PlayerDraw {
            player,
            has_blackjack,
        })
    }
}
