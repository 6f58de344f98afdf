pub mod client;
pub mod config;
pub mod draw;
pub mod error;
pub mod game;
pub mod msg;

#[cfg(test)]
mod mock;

pub use crate::client::{DeckApi, HttpDeckClient, RequestMethod};
pub use crate::config::DeckConfig;
pub use crate::draw::{PlayerDraw, SafeDrawer, EXHAUSTED_ERROR};
pub use crate::error::{DeckError, Result};
pub use crate::game::{check_for_blackjack, DealtPiles, RoundReport, Table};
pub use crate::msg::{DeckResponse, DrawResult, PileResponse, PileSummary};
