use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two players holds blackjack after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlackjackHolder {
    Both,
    PlayerOne,
    PlayerTwo,
    None,
}

impl BlackjackHolder {
    pub fn from_flags(player1: bool, player2: bool) -> Self {
        match (player1, player2) {
            (true, true) => BlackjackHolder::Both,
            (true, false) => BlackjackHolder::PlayerOne,
            (false, true) => BlackjackHolder::PlayerTwo,
            (false, false) => BlackjackHolder::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlackjackHolder::Both => "both",
            BlackjackHolder::PlayerOne => "player 1",
            BlackjackHolder::PlayerTwo => "player 2",
            BlackjackHolder::None => "none",
        }
    }

    pub fn announcement(&self) -> &'static str {
        match self {
            BlackjackHolder::Both => "Both players have blackjack!",
            BlackjackHolder::PlayerOne => "Player 1 has blackjack!",
            BlackjackHolder::PlayerTwo => "Player 2 has blackjack!",
            BlackjackHolder::None => "None of the players have blackjack!",
        }
    }
}

impl fmt::Display for BlackjackHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report which player(s) hold blackjack: `"both"`, `"player 1"`, `"player 2"` or `"none"`.
pub fn check_for_blackjack(player1: bool, player2: bool) -> &'static str {
    BlackjackHolder::from_flags(player1, player2).as_str()
}
