mod card;
mod hand;
mod outcome;

pub use card::{Card, CardImages, CardValue, Suit};
pub use hand::{is_blackjack, Hand};
pub use outcome::{check_for_blackjack, BlackjackHolder};
