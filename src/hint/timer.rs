//! Single-slot deferred task for hint expiry.

use std::time::Duration;

/// At most one pending deadline. Arming again supersedes the previous one.
///
/// The timer does not run anything itself: the owner polls `take_due` with
/// the current time and acts when it returns true. A task fires at most once.
#[derive(Clone, Debug, Default)]
pub struct HintTimer {
    deadline: Option<Duration>,
}

impl HintTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule expiry `delay` after `now`, replacing any pending task.
    pub fn arm(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Cancel the pending task, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire the pending task if its deadline has passed.
    pub fn take_due(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
