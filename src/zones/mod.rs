//! Card locations: the deck, the four tableau stacks and the discard pile.
//!
//! ## Key Types
//!
//! - `Deck`: undealt cards, drawn from the top
//! - `Tableau`: the four stacks plus the discard pile
//! - `Table`: both together, with the conservation check

pub mod deck;
pub mod tableau;
pub mod table;

pub use deck::Deck;
pub use tableau::Tableau;
pub use table::Table;
