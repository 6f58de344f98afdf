use crate::Card;
use serde::{Deserialize, Serialize};

/// Check if a hand is blackjack: exactly two cards, an ace and a ten-valued card.
///
/// Any other hand size is never blackjack, so a three-card deal always
/// evaluates to `false`.
pub fn is_blackjack(cards: &[Card]) -> bool {
    if cards.len() != 2 {
        return false;
    }
    let has_ace = cards.iter().any(|c| c.value.is_ace());
    let has_ten = cards.iter().any(|c| c.value.is_ten_valued());
    has_ace && has_ten
}

/// Cards dealt to one player for a single evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Card codes in deal order, as used by the pile endpoints
    pub fn codes(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.code.clone()).collect()
    }

    pub fn to_display(&self) -> String {
        self.cards
            .iter()
            .map(Card::to_display)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
