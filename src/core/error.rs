//! Engine contract violations.
//!
//! Rule rejections (an illegal remove, dealing from an empty deck, undo with
//! nothing to undo) are not errors and never show up here. `EngineError`
//! means a caller or the history log broke an invariant.

use thiserror::Error;

use super::config::STACK_COUNT;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid stack index {0} (expected 0..{max})", max = STACK_COUNT)]
    InvalidStack(usize),
    #[error("stack {0} is empty")]
    EmptyStack(usize),
    #[error("history corruption: {detail}")]
    HistoryCorruption { detail: String },
    #[error("configuration error: {detail}")]
    Config { detail: String },
}

impl EngineError {
    pub(crate) fn corruption(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        tracing::error!(%detail, "move history does not match table state");
        EngineError::HistoryCorruption { detail }
    }
}
