//! Session orchestration.
//!
//! `GameController` is the only thing a front end talks to. It owns the
//! table and history, consults the rules, and pushes snapshots to a `View`.

mod controller;
mod state;

pub use controller::{Activation, GameController};
pub use state::{Selection, SessionState, Status};
