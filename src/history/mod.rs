//! Move history: reversible records and the undo/redo log.
//!
//! - `MoveRecord`: one transition with enough data to invert itself
//! - `MoveHistory`: linear undo/redo stacks (not a tree)

pub mod record;
pub mod log;

pub use record::{DealtCards, MoveRecord};
pub use log::MoveHistory;
