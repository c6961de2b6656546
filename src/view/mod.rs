//! The passive View the controller notifies.
//!
//! The engine never formats messages for rule rejections; it only hands the
//! View a fresh `Snapshot` after each accepted change. Views cannot mutate
//! engine state.

pub mod snapshot;

pub use snapshot::{CardFace, Snapshot};

/// Observer of session state.
pub trait View {
    fn render(&mut self, snapshot: &Snapshot);
}

/// Discards every snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullView;

impl View for NullView {
    fn render(&mut self, _snapshot: &Snapshot) {}
}

/// Keeps every snapshot it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingView {
    pub snapshots: Vec<Snapshot>,
}

impl RecordingView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.snapshots.len()
    }
}

impl View for RecordingView {
    fn render(&mut self, snapshot: &Snapshot) {
        self.snapshots.push(snapshot.clone());
    }
}
