//! The stock: undealt cards, face-down, drawn from the back.

use im::Vector;

use crate::core::card::{standard_cards, Card};
use crate::core::rng::GameRng;

/// Ordered sequence of undealt cards. The last element is the top (draw end).
///
/// Backed by `im::Vector` so whole-table clones stay O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// A freshly shuffled 52-card deck.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards = standard_cards();
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Build a deck from explicit cards, last element on top.
    ///
    /// Cards are turned face-down.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards
                .into_iter()
                .map(|mut card| {
                    card.set_face_up(false);
                    card
                })
                .collect(),
        }
    }

    /// Remove and return the top card, or `None` when empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Look at the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.back()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Put a previously drawn card back on top, face-down.
    ///
    /// Only used when a deal is undone. Cards must come back in reverse
    /// order of removal so the next draws repeat the original sequence.
    pub fn return_to_top(&mut self, mut card: Card) {
        card.set_face_up(false);
        self.cards.push_back(card);
    }

    /// Cards bottom to top. Reverse it to walk from the draw end.
    pub fn iter(&self) -> im::vector::Iter<'_, Card> {
        self.cards.iter()
    }
}
