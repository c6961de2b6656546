//! # aces-up
//!
//! Rules engine and move-history state machine for Aces Up solitaire.
//!
//! Four stacks, one deck. Discard a top card when a higher card of the same
//! suit shows on another stack; move a top card onto an empty stack; deal
//! four more when stuck. Win with only the four aces left.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: `RulesEngine` reads the table and never mutates it.
//!
//! 2. **Exact undo**: every history record carries what it needs to invert
//!    itself, and both directions check the cards they touch.
//!
//! 3. **No rendering surface**: the controller talks to a `View` trait;
//!    tests run with `NullView` or `RecordingView` and a `ManualClock`.
//!
//! ## Modules
//!
//! - `core`: Cards, actions, RNG, configuration, errors
//! - `zones`: Deck, tableau stacks, discard pile
//! - `rules`: `RulesEngine` trait and `AcesUpRules`
//! - `history`: Reversible records and the undo/redo log
//! - `hint`: Hint type, clocks, single-slot expiry timer
//! - `view`: Snapshots and the `View` observer
//! - `game`: `GameController`

pub mod core;
pub mod zones;
pub mod rules;
pub mod history;
pub mod hint;
pub mod view;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Action, Card, CardId, Color, EngineError, GameConfig, GameRng, Rank, Suit,
    DECK_SIZE, STACK_COUNT,
};

pub use crate::zones::{Deck, Table, Tableau};

pub use crate::rules::{AcesUpRules, GameResult, RulesEngine};

pub use crate::history::{MoveHistory, MoveRecord};

pub use crate::hint::{Clock, Hint, HintTimer, ManualClock, SystemClock};

pub use crate::view::{CardFace, NullView, RecordingView, Snapshot, View};

pub use crate::game::{Activation, GameController, Selection, Status};
