//! Game controller: owns the table, applies and inverts transitions, and
//! notifies the View.
//!
//! ## Outcomes
//!
//! Every action returns `Result`. `Ok(false)` (or `Activation::Rejected`)
//! is an ordinary rule rejection and leaves the state untouched. `Err` is a
//! contract violation: a bad stack index or a history record that no
//! longer matches the table.
//!
//! ## Usage
//!
//! ```
//! use aces_up::core::GameConfig;
//! use aces_up::game::{GameController, Status};
//! use aces_up::hint::ManualClock;
//! use aces_up::view::NullView;
//!
//! let config = GameConfig::default().with_seed(42);
//! let mut game = GameController::new(config, NullView, ManualClock::new()).unwrap();
//!
//! assert_eq!(game.status(), Status::NotStarted);
//! assert!(game.deal().unwrap());
//! assert_eq!(game.move_count(), 1);
//!
//! assert!(game.undo().unwrap());
//! assert_eq!(game.move_count(), 0);
//! assert!(game.redo().unwrap());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::state::{Selection, SessionState, Status};
use crate::core::action::Action;
use crate::core::config::{GameConfig, STACK_COUNT};
use crate::core::error::EngineError;
use crate::core::rng::GameRng;
use crate::hint::{Clock, Hint, HintTimer};
use crate::history::{MoveHistory, MoveRecord};
use crate::rules::{AcesUpRules, GameResult, RulesEngine};
use crate::view::{CardFace, Snapshot, View};
use crate::zones::{Table, Tableau};

/// What a card or stack activation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    Removed,
    Moved,
    Selected,
    Deselected,
    Rejected,
}

/// Orchestrates one Aces Up session.
pub struct GameController<V: View, C: Clock, R: RulesEngine = AcesUpRules> {
    config: GameConfig,
    rules: R,
    rng: GameRng,
    table: Table,
    history: MoveHistory,
    session: SessionState,
    hint: Option<Hint>,
    hint_timer: HintTimer,
    clock: C,
    view: V,
}

impl<V: View, C: Clock> GameController<V, C, AcesUpRules> {
    /// Create a controller with the standard rules and start a game.
    pub fn new(config: GameConfig, view: V, clock: C) -> Result<Self, EngineError> {
        Self::with_rules(config, AcesUpRules, view, clock)
    }
}

impl<V: View, C: Clock, R: RulesEngine> GameController<V, C, R> {
    /// Create a controller with custom rules and start a game.
    pub fn with_rules(config: GameConfig, rules: R, view: V, clock: C) -> Result<Self, EngineError> {
        let mut controller = Self::assemble(config, rules, Table::default(), view, clock);
        controller.new_game()?;
        Ok(controller)
    }

    /// Start a session from a prepared position instead of a shuffle.
    ///
    /// The position must hold all 52 cards. Later `new_game` calls shuffle
    /// as usual.
    pub fn with_position(
        config: GameConfig,
        rules: R,
        table: Table,
        view: V,
        clock: C,
    ) -> Result<Self, EngineError> {
        table.verify_conservation()?;
        let mut controller = Self::assemble(config, rules, table, view, clock);
        controller.notify();
        Ok(controller)
    }

    fn assemble(config: GameConfig, rules: R, table: Table, view: V, clock: C) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self {
            config,
            rules,
            rng,
            table,
            history: MoveHistory::new(),
            session: SessionState::default(),
            hint: None,
            hint_timer: HintTimer::new(),
            clock,
            view,
        }
    }

    // === Session ===

    /// Shuffle a fresh deck, deal the opening row, and reset history and
    /// session state.
    pub fn new_game(&mut self) -> Result<(), EngineError> {
        let mut game_rng = self.rng.fork();
        self.table = Table::shuffled(&mut game_rng);

        if self.config.deal_initial_row {
            for stack in 0..STACK_COUNT {
                if let Some(card) = self.table.deck.draw() {
                    self.table.tableau.push(stack, card)?;
                }
            }
        }

        self.history.clear();
        self.session = SessionState::default();
        self.clear_hint();
        self.table.verify_conservation()?;

        info!(seed = game_rng.seed(), "new game");
        self.notify();
        Ok(())
    }

    // === Actions ===

    /// Deal up to one card onto each stack.
    ///
    /// Returns `Ok(false)` when the deck is empty or the game is over.
    pub fn deal(&mut self) -> Result<bool, EngineError> {
        if self.is_terminal() {
            trace!("deal rejected: game over");
            return Ok(false);
        }
        let Some(record) = MoveRecord::next_deal(&self.table) else {
            trace!("deal rejected: deck empty");
            return Ok(false);
        };
        self.commit(record)?;
        Ok(true)
    }

    /// Discard the top card of `stack` if a higher card of its suit is
    /// showing elsewhere.
    pub fn attempt_remove(&mut self, stack: usize) -> Result<bool, EngineError> {
        Tableau::check_stack(stack)?;
        if self.is_terminal() {
            trace!(stack, "remove rejected: game over");
            return Ok(false);
        }
        let Some(card) = self.table.tableau.top(stack).copied() else {
            trace!(stack, "remove rejected: empty stack");
            return Ok(false);
        };
        if !self.rules.can_remove(&self.table.tableau, &card, stack) {
            trace!(stack, %card, "remove rejected");
            return Ok(false);
        }
        self.commit(MoveRecord::Remove { card, from: stack })?;
        Ok(true)
    }

    /// Relocate the top card of `from` onto the empty stack `to`.
    pub fn attempt_move(&mut self, from: usize, to: usize) -> Result<bool, EngineError> {
        Tableau::check_stack(from)?;
        Tableau::check_stack(to)?;
        if self.is_terminal() {
            trace!(from, to, "move rejected: game over");
            return Ok(false);
        }
        let Some(card) = self.table.tableau.top(from).copied() else {
            trace!(from, to, "move rejected: empty source");
            return Ok(false);
        };
        if !self.rules.can_move(&self.table.tableau, &card, from, to) {
            trace!(from, to, %card, "move rejected");
            return Ok(false);
        }
        self.commit(MoveRecord::Move { card, from, to })?;
        Ok(true)
    }

    /// Undo the most recent transition.
    ///
    /// Allowed from a finished game: undoing the winning or losing move
    /// puts the session back into play.
    pub fn undo(&mut self) -> Result<bool, EngineError> {
        let Some(record) = self.history.pop_undo() else {
            trace!("undo rejected: nothing to undo");
            return Ok(false);
        };
        record.invert(&mut self.table)?;
        debug!(?record, cards = record.card_count(), "undo");
        self.history.push_redo(record);
        self.session.move_count = self.session.move_count.saturating_sub(1);
        self.after_transition()?;
        Ok(true)
    }

    /// Re-apply the most recently undone transition.
    ///
    /// A redone deal draws from the deck again; the drawn cards must be the
    /// recorded ones.
    pub fn redo(&mut self) -> Result<bool, EngineError> {
        if self.is_terminal() {
            trace!("redo rejected: game over");
            return Ok(false);
        }
        let Some(record) = self.history.pop_redo() else {
            trace!("redo rejected: nothing to redo");
            return Ok(false);
        };
        record.apply(&mut self.table)?;
        debug!(?record, cards = record.card_count(), "redo");
        self.history.push_undo(record);
        self.session.move_count += 1;
        self.after_transition()?;
        Ok(true)
    }

    // === Selection protocol ===

    /// The player clicked the top card of `stack`.
    ///
    /// Tries to discard it first; otherwise it becomes (or stops being)
    /// the selection. Clicking an empty stack behaves like
    /// `on_empty_stack_activated`.
    pub fn on_card_activated(&mut self, stack: usize) -> Result<Activation, EngineError> {
        Tableau::check_stack(stack)?;
        if self.is_terminal() {
            return Ok(Activation::Rejected);
        }
        let Some(card) = self.table.tableau.top(stack).copied() else {
            return self.on_empty_stack_activated(stack);
        };

        let reselected = self
            .session
            .selection
            .is_some_and(|sel| sel.stack == stack && sel.card == card.id());
        if reselected {
            self.session.selection = None;
            debug!(stack, "deselected");
            self.notify();
            return Ok(Activation::Deselected);
        }

        if self.attempt_remove(stack)? {
            return Ok(Activation::Removed);
        }

        self.session.start(self.clock.now());
        self.session.selection = Some(Selection {
            card: card.id(),
            stack,
        });
        debug!(stack, %card, "selected");
        self.notify();
        Ok(Activation::Selected)
    }

    /// The player clicked the empty stack `stack`.
    ///
    /// With a selection active, tries to move the selected card here. The
    /// selection survives a failed move. A non-empty stack is treated as a
    /// card activation.
    pub fn on_empty_stack_activated(&mut self, stack: usize) -> Result<Activation, EngineError> {
        Tableau::check_stack(stack)?;
        if self.is_terminal() {
            return Ok(Activation::Rejected);
        }
        if !self.table.tableau.is_empty(stack)? {
            return self.on_card_activated(stack);
        }
        let Some(selection) = self.session.selection else {
            return Ok(Activation::Rejected);
        };
        if self.attempt_move(selection.stack, stack)? {
            Ok(Activation::Moved)
        } else {
            Ok(Activation::Rejected)
        }
    }

    // === Hints ===

    /// Highlight the first legal action: a remove, then a move, then the
    /// deck. Returns `None` when there is nothing to suggest.
    pub fn show_hint(&mut self) -> Option<Hint> {
        if self.is_terminal() {
            return None;
        }
        let hint = self.rules.first_hint(&self.table).map(Hint::from)?;

        self.hint = Some(hint);
        self.hint_timer.arm(self.clock.now(), self.config.hint_duration());
        debug!(?hint, "hint shown");
        self.notify();
        Some(hint)
    }

    /// Expire the hint if its time is up. Returns whether it was cleared.
    pub fn tick(&mut self) -> bool {
        if !self.hint_timer.take_due(self.clock.now()) {
            return false;
        }
        self.hint = None;
        debug!("hint expired");
        self.notify();
        true
    }

    // === Accessors ===

    #[must_use]
    pub fn status(&self) -> Status {
        self.session.status
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.session.status.is_terminal()
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.session.move_count
    }

    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.session.selection
    }

    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        self.hint
    }

    #[must_use]
    pub fn hint_pending(&self) -> bool {
        self.hint_timer.is_pending()
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Legal actions in the current position (empty once the game is over).
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            Vec::new()
        } else {
            self.rules.legal_actions(&self.table)
        }
    }

    /// Current state as the View sees it.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            stacks: self
                .table
                .tableau
                .stacks()
                .map(|stack| stack.iter().map(CardFace::from).collect())
                .collect(),
            deck_remaining: self.table.deck.len(),
            discarded: self.table.tableau.discarded().len(),
            selection: self.session.selection.map(|sel| sel.stack),
            hint: self.hint,
            move_count: self.session.move_count,
            elapsed_ms: self.session.elapsed(self.clock.now()).as_millis() as u64,
            status: self.session.status,
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }

    // === Internals ===

    /// Apply a freshly validated transition and record it.
    fn commit(&mut self, record: MoveRecord) -> Result<(), EngineError> {
        record.apply(&mut self.table)?;
        debug!(?record, cards = record.card_count(), "applied");
        self.history.record(record);
        self.session.move_count += 1;
        self.after_transition()
    }

    /// Shared tail of every accepted mutation.
    fn after_transition(&mut self) -> Result<(), EngineError> {
        self.table.verify_conservation()?;
        self.session.selection = None;
        self.clear_hint();

        let now = self.clock.now();
        self.session.start(now);
        self.session.status = match self.rules.outcome(&self.table) {
            Some(GameResult::Won) => Status::Won,
            Some(GameResult::Lost) => Status::Lost,
            None => Status::Playing,
        };
        if self.session.status.is_terminal() {
            if self.session.finished_at.is_none() {
                self.session.finished_at = Some(now);
                info!(status = ?self.session.status, moves = self.session.move_count, "game over");
            }
        } else {
            self.session.finished_at = None;
        }

        self.notify();
        Ok(())
    }

    fn clear_hint(&mut self) {
        self.hint_timer.cancel();
        self.hint = None;
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        self.view.render(&snapshot);
    }
}
