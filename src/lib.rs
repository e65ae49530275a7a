//! An interactive manager for a standard 52-card deck.
//!
//! The crate provides a [`Deck`] type that can be shuffled, dealt from,
//! sorted, and reset, and a [`Session`] that drives the deck from a text
//! menu over any reader/writer pair.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, SortKey};
//!
//! let mut deck = Deck::with_seed(42);
//! let hand = deck.deal_many(5).unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.len(), 47);
//!
//! deck.sort_by(SortKey::Suit);
//! deck.reset();
//! assert_eq!(deck.len(), 52);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod menu;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, SortKey};
pub use error::{DealError, ParseOptionError, SessionError};
pub use menu::{MenuOption, Session};
pub use options::DeckOptions;
