//! Core types: cards, actions, RNG, configuration and errors.
//!
//! Everything here is independent of how cards are laid out on the table.

pub mod card;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use card::{standard_cards, Card, CardId, Color, Rank, Suit};
pub use rng::GameRng;
pub use config::{GameConfig, DECK_SIZE, STACK_COUNT};
pub use action::Action;
pub use error::EngineError;
