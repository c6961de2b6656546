//! Playing cards: suit, rank, and the physical card instance.
//!
//! A `Card` pairs an immutable identity (`CardId`, suit, rank) with a single
//! mutable flag, `face_up`. Two cards with the same suit and rank would still
//! be different cards: selection and history always refer to the `CardId`.
//!
//! ## Values
//!
//! Aces are high. `Rank::value` maps A=14, K=13, Q=12, J=11 and numerals to
//! their face value.
//!
//! ```
//! use aces_up::core::{Card, CardId, Rank, Suit, Color};
//!
//! let card = Card::new(CardId(0), Suit::Hearts, Rank::Ace);
//! assert_eq!(card.value(), 14);
//! assert_eq!(card.color(), Color::Red);
//! assert!(!card.is_face_up());
//! ```

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Spades,
    Clubs,
    Diamonds,
}

impl Suit {
    /// All four suits in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Clubs, Suit::Diamonds];

    /// Red for Hearts and Diamonds, black otherwise.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Single-letter code used in text renderings (H, S, C, D).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
        }
    }
}

/// Card color. Never consulted by the rules; exposed for the View.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All thirteen ranks, Ace first (deck construction order).
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value with aces high.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }

    /// Short label ("A", "2".."10", "J", "Q", "K").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// Identity of one physical card within a deck (0..52).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A physical card.
///
/// Everything except `face_up` is fixed at construction. Face state is only
/// changed by the zone that currently owns the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    suit: Suit,
    rank: Rank,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            suit,
            rank,
            face_up: false,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub(crate) fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// True if this card and `other` are the same physical card.
    #[must_use]
    pub fn same_card(&self, other: &Card) -> bool {
        self.id == other.id
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.code())
    }
}

/// The 52 standard cards in construction order (suit-major), all face-down.
///
/// `CardId`s are assigned 0..52 in this order.
#[must_use]
pub fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let id = CardId(cards.len() as u8);
            cards.push(Card::new(id, suit, rank));
        }
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::Queen.value(), 12);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Two.value(), 2);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Clubs.color(), Color::Black);
    }

    #[test]
    fn test_standard_cards() {
        let cards = standard_cards();
        assert_eq!(cards.len(), 52);

        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.id(), CardId(i as u8));
            assert!(!card.is_face_up());
        }

        let aces = cards.iter().filter(|c| c.is_ace()).count();
        assert_eq!(aces, 4);
    }

    #[test]
    fn test_identity_is_by_id() {
        let a = Card::new(CardId(1), Suit::Clubs, Rank::Seven);
        let b = Card::new(CardId(2), Suit::Clubs, Rank::Seven);
        let mut a_flipped = a;
        a_flipped.set_face_up(true);

        assert!(!a.same_card(&b));
        assert!(a.same_card(&a_flipped));
    }

    #[test]
    fn test_display() {
        let card = Card::new(CardId(9), Suit::Hearts, Rank::Ten);
        assert_eq!(card.to_string(), "10H");
        assert_eq!(CardId(9).to_string(), "Card(9)");
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardId(3), Suit::Spades, Rank::Queen);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
