//! Rules engine trait and the Aces Up rules.
//!
//! Rules are pure: they read a `Tableau`/`Deck` and answer questions. They
//! never mutate. The controller asks, then acts.

use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::card::Card;
use crate::core::config::STACK_COUNT;
use crate::zones::{Deck, Table, Tableau};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Only the four aces remain.
    Won,
    /// Deck empty and no legal remove or move.
    Lost,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `can_remove` / `can_move`: legality of a single card action
/// - `check_win` / `check_loss`: terminal detection, re-derived from the
///   table every time
/// - `legal_actions`: enumeration in hint priority order (removes, then
///   moves, then deal)
pub trait RulesEngine {
    /// Can `card`, lying on `stack`, be discarded?
    fn can_remove(&self, tableau: &Tableau, card: &Card, stack: usize) -> bool;

    /// Can `card` be relocated from `from` onto `to`?
    fn can_move(&self, tableau: &Tableau, card: &Card, from: usize, to: usize) -> bool;

    /// Is the tableau a winning position?
    fn check_win(&self, tableau: &Tableau) -> bool;

    /// Is the game lost: deck empty and no legal card action left?
    fn check_loss(&self, tableau: &Tableau, deck: &Deck) -> bool {
        deck.is_empty() && !self.has_card_action(tableau)
    }

    // === Convenience Methods ===

    /// True if any top card can be removed or relocated.
    fn has_card_action(&self, tableau: &Tableau) -> bool {
        let removable = (0..STACK_COUNT).any(|stack| {
            tableau
                .top(stack)
                .is_some_and(|card| self.can_remove(tableau, card, stack))
        });
        removable || self.legal_moves(tableau).next().is_some()
    }

    /// Legal relocations as `(from, to)`, in ordered-pair order.
    fn legal_moves<'a>(&'a self, tableau: &'a Tableau) -> Box<dyn Iterator<Item = (usize, usize)> + 'a> {
        Box::new((0..STACK_COUNT).flat_map(move |from| {
            (0..STACK_COUNT).filter_map(move |to| {
                let card = tableau.top(from)?;
                self.can_move(tableau, card, from, to).then_some((from, to))
            })
        }))
    }

    /// Enumerate every legal action.
    ///
    /// Order: removes by stack index, then moves by `(from, to)`, then deal.
    fn legal_actions(&self, table: &Table) -> Vec<Action> {
        let tableau = &table.tableau;
        let mut actions: Vec<Action> = (0..STACK_COUNT)
            .filter(|&stack| {
                tableau
                    .top(stack)
                    .is_some_and(|card| self.can_remove(tableau, card, stack))
            })
            .map(|stack| Action::Remove { stack })
            .collect();

        actions.extend(self.legal_moves(tableau).map(|(from, to)| Action::Move { from, to }));

        if !table.deck.is_empty() {
            actions.push(Action::Deal);
        }

        actions
    }

    /// The action a hint should point at: the first legal one.
    fn first_hint(&self, table: &Table) -> Option<Action> {
        self.legal_actions(table).into_iter().next()
    }

    /// Check if the game is over. Win is checked before loss.
    fn outcome(&self, table: &Table) -> Option<GameResult> {
        if self.check_win(&table.tableau) {
            Some(GameResult::Won)
        } else if self.check_loss(&table.tableau, &table.deck) {
            Some(GameResult::Lost)
        } else {
            None
        }
    }
}

/// Standard Aces Up rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcesUpRules;

impl RulesEngine for AcesUpRules {
    fn can_remove(&self, tableau: &Tableau, card: &Card, stack: usize) -> bool {
        if card.is_ace() {
            return false;
        }
        (0..STACK_COUNT)
            .filter(|&other| other != stack)
            .filter_map(|other| tableau.top(other))
            .any(|top| top.suit() == card.suit() && top.value() > card.value())
    }

    fn can_move(&self, tableau: &Tableau, card: &Card, from: usize, to: usize) -> bool {
        if from == to || to >= STACK_COUNT {
            return false;
        }
        let on_top = tableau.top(from).is_some_and(|top| top.same_card(card));
        on_top && tableau.top(to).is_none()
    }

    fn check_win(&self, tableau: &Tableau) -> bool {
        tableau.card_count() == 4 && tableau.all_cards().all(Card::is_ace)
    }
}
