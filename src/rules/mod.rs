//! Rules engine for Aces Up.
//!
//! `RulesEngine` decides:
//! - Whether a remove or move is legal
//! - Which actions are available (for hints and loss detection)
//! - Win/loss conditions
//!
//! The controller calls into `RulesEngine` and never re-implements a rule.

pub mod engine;

pub use engine::{AcesUpRules, GameResult, RulesEngine};
