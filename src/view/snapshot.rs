//! Read-only picture of a session, handed to the View.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Rank, Suit};
use crate::game::Status;
use crate::hint::Hint;

/// What the View may know about a card: its face, nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
}

impl From<&Card> for CardFace {
    fn from(card: &Card) -> Self {
        Self {
            rank: card.rank(),
            suit: card.suit(),
            face_up: card.is_face_up(),
        }
    }
}

impl std::fmt::Display for CardFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank.label(), self.suit.code())
        } else {
            write!(f, "##")
        }
    }
}

/// Full session state after an accepted change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Each stack bottom to top.
    pub stacks: Vec<Vec<CardFace>>,
    pub deck_remaining: usize,
    pub discarded: usize,
    /// Stack index of the selected card.
    pub selection: Option<usize>,
    pub hint: Option<Hint>,
    pub move_count: u32,
    pub elapsed_ms: u64,
    pub status: Status,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "status: {:?}  moves: {}  time: {}s  deck: {}  discarded: {}",
            self.status,
            self.move_count,
            self.elapsed_ms / 1000,
            self.deck_remaining,
            self.discarded
        )?;
        for (i, stack) in self.stacks.iter().enumerate() {
            let marker = if self.selection == Some(i) { '*' } else { ' ' };
            let cards: Vec<String> = stack.iter().map(ToString::to_string).collect();
            let shown = if cards.is_empty() {
                "(empty)".to_string()
            } else {
                cards.join(" ")
            };
            writeln!(f, "{marker}{}: {shown}", i + 1)?;
        }
        if let Some(hint) = self.hint {
            match hint {
                Hint::RemoveCard { stack } => writeln!(f, "hint: remove {}", stack + 1)?,
                Hint::MoveCard { from, to } => writeln!(f, "hint: move {} {}", from + 1, to + 1)?,
                Hint::Deal => writeln!(f, "hint: deal")?,
            }
        }
        Ok(())
    }
}
