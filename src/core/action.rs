//! Player actions.
//!
//! An `Action` is what the player asks for. The rules decide whether it is
//! legal; the controller turns accepted actions into history records.

use serde::{Deserialize, Serialize};

/// A player action, addressed by stack index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Deal up to one card from the deck onto every stack.
    Deal,
    /// Discard the top card of `stack`.
    Remove { stack: usize },
    /// Relocate the top card of `from` onto the empty stack `to`.
    Move { from: usize, to: usize },
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Deal => write!(f, "deal"),
            Action::Remove { stack } => write!(f, "remove {stack}"),
            Action::Move { from, to } => write!(f, "move {from} -> {to}"),
        }
    }
}
