//! Session-scoped state: status, selection, move count, timing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::card::CardId;

/// Session lifecycle.
///
/// `NotStarted -> Playing -> {Won, Lost}`. Undo may return a terminal
/// session to `Playing`; only a new game returns it to `NotStarted`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Won | Status::Lost)
    }
}

/// The card the player picked up, by identity and location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub card: CardId,
    pub stack: usize,
}

/// Per-game bookkeeping, reset by every new game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub status: Status,
    pub selection: Option<Selection>,
    pub move_count: u32,
    /// Clock reading at the first accepted player action.
    pub started_at: Option<Duration>,
    /// Clock reading when the session became terminal.
    pub finished_at: Option<Duration>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            status: Status::NotStarted,
            selection: None,
            move_count: 0,
            started_at: None,
            finished_at: None,
        }
    }
}

impl SessionState {
    /// Mark the first player action. No-op once started.
    pub fn start(&mut self, now: Duration) {
        if self.status == Status::NotStarted {
            self.status = Status::Playing;
            self.started_at = Some(now);
        }
    }

    /// Play time, frozen while the session is terminal.
    #[must_use]
    pub fn elapsed(&self, now: Duration) -> Duration {
        match self.started_at {
            Some(start) => self.finished_at.unwrap_or(now).saturating_sub(start),
            None => Duration::ZERO,
        }
    }
}
