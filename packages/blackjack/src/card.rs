use serde::{Deserialize, Serialize};
use std::fmt;

/// Face value of a card as the deck API spells it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardValue {
    #[serde(rename = "ACE")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "JACK")]
    Jack,
    #[serde(rename = "QUEEN")]
    Queen,
    #[serde(rename = "KING")]
    King,
    /// Only present in decks created with jokers enabled
    #[serde(rename = "JOKER")]
    Joker,
}

impl CardValue {
    pub fn is_ace(&self) -> bool {
        matches!(self, CardValue::Ace)
    }

    /// 10, Jack, Queen and King all count as ten
    pub fn is_ten_valued(&self) -> bool {
        matches!(
            self,
            CardValue::Ten | CardValue::Jack | CardValue::Queen | CardValue::King
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardValue::Ace => "ACE",
            CardValue::Two => "2",
            CardValue::Three => "3",
            CardValue::Four => "4",
            CardValue::Five => "5",
            CardValue::Six => "6",
            CardValue::Seven => "7",
            CardValue::Eight => "8",
            CardValue::Nine => "9",
            CardValue::Ten => "10",
            CardValue::Jack => "JACK",
            CardValue::Queen => "QUEEN",
            CardValue::King => "KING",
            CardValue::Joker => "JOKER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
    // Joker colours
    Black,
    Red,
}

impl Suit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Black | Suit::Red => "★",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImages {
    pub svg: String,
    pub png: String,
}

/// A card as returned by the deck API. `code` is the two-character id
/// (`"AS"`, `"0H"`, `"X1"`) used when adding cards to piles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub code: String,
    pub value: CardValue,
    pub suit: Suit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<CardImages>,
}

impl Card {
    pub fn new(code: impl Into<String>, value: CardValue, suit: Suit) -> Self {
        Self {
            code: code.into(),
            value,
            suit,
            image: None,
            images: None,
        }
    }

    pub fn to_display(&self) -> String {
        let rank = match self.value {
            CardValue::Ace => "A",
            CardValue::Jack => "J",
            CardValue::Queen => "Q",
            CardValue::King => "K",
            CardValue::Joker => "JOKER",
            other => other.as_str(),
        };
        format!("{}{}", rank, self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display())
    }
}
