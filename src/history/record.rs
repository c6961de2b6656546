//! History records and their forward/inverse effects.
//!
//! A `MoveRecord` carries everything needed to undo it without looking at
//! how the table got to its current state. Both directions verify the cards
//! they touch against the record before mutating anything; a mismatch is a
//! `HistoryCorruption` error.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;
use crate::core::config::STACK_COUNT;
use crate::core::error::EngineError;
use crate::zones::Table;

/// Cards of one deal, in stack order. Partial deals hold fewer than four.
pub type DealtCards = SmallVec<[Card; STACK_COUNT]>;

/// One applied transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRecord {
    /// `cards[i]` went onto stack `i`.
    Deal { cards: DealtCards },
    /// `card` went from the top of `from` to the discard pile.
    Remove { card: Card, from: usize },
    /// `card` went from the top of `from` onto the empty stack `to`.
    Move { card: Card, from: usize, to: usize },
}

impl MoveRecord {
    /// Record for dealing the next cards off `table`'s deck.
    ///
    /// `None` when the deck is empty.
    #[must_use]
    pub fn next_deal(table: &Table) -> Option<Self> {
        let cards: DealtCards = table.deck.iter().rev().take(STACK_COUNT).copied().collect();
        if cards.is_empty() {
            None
        } else {
            Some(MoveRecord::Deal { cards })
        }
    }

    /// Apply the forward effect. Used for both the original action and redo.
    pub fn apply(&self, table: &mut Table) -> Result<(), EngineError> {
        match self {
            MoveRecord::Deal { cards } => {
                let upcoming = table.deck.iter().rev().take(cards.len());
                let matches = upcoming.len() == cards.len()
                    && upcoming.zip(cards.iter()).all(|(a, b)| a.same_card(b));
                if !matches {
                    return Err(EngineError::corruption(format!(
                        "deck does not hold the {} recorded deal cards on top",
                        cards.len()
                    )));
                }
                for (stack, _) in cards.iter().enumerate() {
                    let card = table
                        .deck
                        .draw()
                        .ok_or_else(|| EngineError::corruption("deck ran out during deal"))?;
                    table.tableau.push(stack, card)?;
                }
            }
            MoveRecord::Remove { card, from } => {
                expect_top(table, *from, card)?;
                table.tableau.discard_top(*from)?;
            }
            MoveRecord::Move { card, from, to } => {
                expect_top(table, *from, card)?;
                if !table.tableau.is_empty(*to)? {
                    return Err(EngineError::corruption(format!(
                        "move target stack {to} is not empty"
                    )));
                }
                let moved = table.tableau.pop_top(*from)?;
                table.tableau.push(*to, moved)?;
            }
        }
        Ok(())
    }

    /// Apply the exact inverse of `apply`.
    pub fn invert(&self, table: &mut Table) -> Result<(), EngineError> {
        match self {
            MoveRecord::Deal { cards } => {
                for (stack, card) in cards.iter().enumerate() {
                    expect_top(table, stack, card)?;
                }
                // Last dealt goes back first so the first dealt ends on top.
                for stack in (0..cards.len()).rev() {
                    let card = table.tableau.pop_top(stack)?;
                    table.deck.return_to_top(card);
                }
            }
            MoveRecord::Remove { card, from } => {
                expect_discard_top(table, card)?;
                let restored = table
                    .tableau
                    .pop_discard()
                    .ok_or_else(|| EngineError::corruption("discard pile is empty"))?;
                table.tableau.push(*from, restored)?;
            }
            MoveRecord::Move { card, from, to } => {
                expect_top(table, *to, card)?;
                let moved = table.tableau.pop_top(*to)?;
                table.tableau.push(*from, moved)?;
            }
        }
        Ok(())
    }

    /// Number of cards this record relocates.
    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            MoveRecord::Deal { cards } => cards.len(),
            MoveRecord::Remove { .. } | MoveRecord::Move { .. } => 1,
        }
    }
}

fn expect_top(table: &Table, stack: usize, card: &Card) -> Result<(), EngineError> {
    match table.tableau.peek_top(stack)? {
        Some(top) if top.same_card(card) => Ok(()),
        Some(top) => Err(EngineError::corruption(format!(
            "stack {stack} shows {top}, history expected {card}"
        ))),
        None => Err(EngineError::corruption(format!(
            "stack {stack} is empty, history expected {card}"
        ))),
    }
}

fn expect_discard_top(table: &Table, card: &Card) -> Result<(), EngineError> {
    match table.tableau.discarded().back() {
        Some(top) if top.same_card(card) => Ok(()),
        Some(top) => Err(EngineError::corruption(format!(
            "discard pile shows {top}, history expected {card}"
        ))),
        None => Err(EngineError::corruption(format!(
            "discard pile is empty, history expected {card}"
        ))),
    }
}
