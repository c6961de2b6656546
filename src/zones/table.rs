//! Deck and tableau together, with the card-conservation check.

use rustc_hash::FxHashSet;

use super::deck::Deck;
use super::tableau::Tableau;
use crate::core::card::{standard_cards, Card, CardId};
use crate::core::config::{DECK_SIZE, STACK_COUNT};
use crate::core::error::EngineError;
use crate::core::rng::GameRng;

/// Every card of one game: the deck, the four stacks and the discard pile.
///
/// Cloning is O(1) (persistent vectors), which tests use to capture and
/// compare whole states.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub deck: Deck,
    pub tableau: Tableau,
}

impl Table {
    /// Shuffled deck, empty tableau.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        Self {
            deck: Deck::shuffled(rng),
            tableau: Tableau::new(),
        }
    }

    /// Build a position from explicit piles and check it holds all 52 cards.
    ///
    /// `deck` is bottom to top, as are the stacks.
    pub fn from_piles(
        stacks: [Vec<Card>; STACK_COUNT],
        deck: Vec<Card>,
        discard: Vec<Card>,
    ) -> Result<Self, EngineError> {
        let table = Self {
            deck: Deck::from_cards(deck),
            tableau: Tableau::from_piles(stacks, discard),
        };
        table.verify_conservation()?;
        Ok(table)
    }

    /// Total cards across deck, stacks and discard pile.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.tableau.card_count() + self.tableau.discarded().len()
    }

    /// Every card on the table, in no particular order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .iter()
            .chain(self.tableau.all_cards())
            .chain(self.tableau.discarded().iter())
    }

    /// Check that the table holds exactly the 52 standard cards once each.
    pub fn verify_conservation(&self) -> Result<(), EngineError> {
        let total = self.total_cards();
        if total != DECK_SIZE {
            return Err(EngineError::corruption(format!(
                "table holds {total} cards, expected {DECK_SIZE}"
            )));
        }

        let mut seen: FxHashSet<CardId> = FxHashSet::default();
        for card in self.cards() {
            if !seen.insert(card.id()) {
                return Err(EngineError::corruption(format!("duplicate card {card}")));
            }
        }

        let standard = standard_cards();
        for card in self.cards() {
            let expected = standard.get(card.id().raw() as usize);
            let matches = expected.is_some_and(|s| s.suit() == card.suit() && s.rank() == card.rank());
            if !matches {
                return Err(EngineError::corruption(format!("unknown card {card} ({})", card.id())));
            }
        }

        Ok(())
    }
}
