//! The four tableau stacks and the discard pile.
//!
//! Stacks are push/pop at the top (the back of each vector). Every card on a
//! stack is face-up. Removed cards go onto the discard pile so that no card
//! ever leaves the table.

use im::Vector;

use crate::core::card::Card;
use crate::core::config::STACK_COUNT;
use crate::core::error::EngineError;

/// Four stacks of dealt cards plus the discard pile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tableau {
    stacks: [Vector<Card>; STACK_COUNT],
    discard: Vector<Card>,
}

impl Tableau {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tableau from explicit piles, each bottom to top.
    ///
    /// Stack cards are turned face-up.
    #[must_use]
    pub fn from_piles(stacks: [Vec<Card>; STACK_COUNT], discard: Vec<Card>) -> Self {
        let stacks = stacks.map(|pile| {
            pile.into_iter()
                .map(|mut card| {
                    card.set_face_up(true);
                    card
                })
                .collect()
        });
        Self {
            stacks,
            discard: discard.into_iter().collect(),
        }
    }

    /// Validate a stack index.
    pub fn check_stack(stack: usize) -> Result<usize, EngineError> {
        if stack < STACK_COUNT {
            Ok(stack)
        } else {
            Err(EngineError::InvalidStack(stack))
        }
    }

    /// Place a card on top of `stack`, face-up.
    pub fn push(&mut self, stack: usize, mut card: Card) -> Result<(), EngineError> {
        let stack = Self::check_stack(stack)?;
        card.set_face_up(true);
        self.stacks[stack].push_back(card);
        Ok(())
    }

    /// Top card of `stack`.
    pub fn peek_top(&self, stack: usize) -> Result<Option<&Card>, EngineError> {
        Ok(self.stacks[Self::check_stack(stack)?].back())
    }

    /// Top card of `stack`, `None` if empty or out of range.
    #[must_use]
    pub fn top(&self, stack: usize) -> Option<&Card> {
        self.stacks.get(stack)?.back()
    }

    /// Remove the top card of `stack`.
    pub fn pop_top(&mut self, stack: usize) -> Result<Card, EngineError> {
        let stack = Self::check_stack(stack)?;
        self.stacks[stack]
            .pop_back()
            .ok_or(EngineError::EmptyStack(stack))
    }

    pub fn is_empty(&self, stack: usize) -> Result<bool, EngineError> {
        Ok(self.stacks[Self::check_stack(stack)?].is_empty())
    }

    /// Cards of `stack`, bottom to top.
    pub fn stack(&self, stack: usize) -> Result<&Vector<Card>, EngineError> {
        Ok(&self.stacks[Self::check_stack(stack)?])
    }

    pub fn stacks(&self) -> impl Iterator<Item = &Vector<Card>> {
        self.stacks.iter()
    }

    /// Every card on the four stacks (not the discard pile).
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.stacks.iter().flat_map(|s| s.iter())
    }

    /// Number of cards on the four stacks.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stacks.iter().map(Vector::len).sum()
    }

    /// Move the top of `stack` onto the discard pile and return it.
    pub fn discard_top(&mut self, stack: usize) -> Result<Card, EngineError> {
        let card = self.pop_top(stack)?;
        self.discard.push_back(card);
        Ok(card)
    }

    /// Take the most recently discarded card off the discard pile.
    pub fn pop_discard(&mut self) -> Option<Card> {
        self.discard.pop_back()
    }

    /// Discarded cards, oldest first.
    #[must_use]
    pub fn discarded(&self) -> &Vector<Card> {
        &self.discard
    }
}
