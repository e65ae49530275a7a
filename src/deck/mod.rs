//! The deck and its operations.

use core::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::options::DeckOptions;

mod sort;

pub use sort::SortKey;

/// An ordered deck of playing cards.
///
/// The first card of [`Deck::cards`] is the top of the deck and is the next
/// one dealt. The deck owns its RNG, so successive shuffles and resets keep
/// drawing from the same stream.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, top first.
    cards: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, shuffled deck seeded from OS entropy.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(DeckOptions::default())
    }

    /// Creates a full deck configured by `options`.
    #[must_use]
    pub fn with_options(options: DeckOptions) -> Self {
        let rng = options
            .seed
            .map_or_else(ChaCha8Rng::from_os_rng, ChaCha8Rng::seed_from_u64);

        let mut deck = Self {
            cards: Self::create(),
            rng,
        };
        if options.shuffle {
            deck.shuffle();
        }
        deck
    }

    /// Creates a full, shuffled deck with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_options(DeckOptions::default().with_seed(seed))
    }

    /// Creates a full, unshuffled deck in creation order.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Deck, Rank, Suit};
    ///
    /// let deck = Deck::ordered();
    /// assert_eq!(deck.cards()[0], Card::new(Rank::Ace, Suit::Spade));
    /// assert_eq!(deck.cards()[1], Card::new(Rank::Ace, Suit::Diamond));
    /// ```
    #[must_use]
    pub fn ordered() -> Self {
        Self::with_options(DeckOptions::default().with_shuffle(false))
    }

    /// Builds all 52 cards, rank-major.
    fn create() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards
    }

    /// Randomly permutes the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Empty`] if no cards remain.
    pub fn deal_one(&mut self) -> Result<Card, DealError> {
        if self.cards.is_empty() {
            return Err(DealError::Empty);
        }

        Ok(self.cards.remove(0))
    }

    /// Removes and returns the top `count` cards, top first.
    ///
    /// Dealing zero cards succeeds and leaves the deck unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if `count` exceeds the number of
    /// remaining cards. The deck is left untouched.
    pub fn deal_many(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.cards.len();
        if count > remaining {
            return Err(DealError::NotEnoughCards {
                requested: count,
                remaining,
            });
        }

        Ok(self.cards.drain(..count).collect())
    }

    /// Sorts the remaining cards by `key`, ascending. The sort is stable.
    pub fn sort_by(&mut self, key: SortKey) {
        self.cards.sort_by(|a, b| key.compare(a, b));
    }

    /// Restores all 52 cards and reshuffles.
    pub fn reset(&mut self) {
        self.cards = Self::create();
        self.shuffle();
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists the remaining cards top to bottom, numbered from 1, one per line.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            writeln!(f, "{}. {card}", index + 1)?;
        }
        Ok(())
    }
}
