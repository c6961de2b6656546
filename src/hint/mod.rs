//! Hints and the time machinery behind their auto-clear.
//!
//! - `Hint`: the suggested action shown to the player
//! - `Clock`: injectable time source (`SystemClock`, `ManualClock`)
//! - `HintTimer`: single-slot deferred expiry

pub mod clock;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use timer::HintTimer;

use serde::{Deserialize, Serialize};

use crate::core::action::Action;

/// A highlighted suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hint {
    /// The top card of `stack` can be discarded.
    RemoveCard { stack: usize },
    /// The top card of `from` can go onto the empty stack `to`.
    MoveCard { from: usize, to: usize },
    /// Nothing to do on the table; deal.
    Deal,
}

impl From<Action> for Hint {
    fn from(action: Action) -> Self {
        match action {
            Action::Deal => Hint::Deal,
            Action::Remove { stack } => Hint::RemoveCard { stack },
            Action::Move { from, to } => Hint::MoveCard { from, to },
        }
    }
}
