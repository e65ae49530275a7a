//! Deck configuration options.

/// Configuration options for a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_seed(7)
///     .with_shuffle(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckOptions {
    /// Seed for the shuffle RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Whether a freshly created deck is shuffled.
    pub shuffle: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            seed: None,
            shuffle: true,
        }
    }
}

impl DeckOptions {
    /// Sets a fixed RNG seed, making shuffles reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_seed(42);
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets whether a freshly created deck is shuffled.
    ///
    /// Reset always reshuffles regardless of this setting.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle(false);
    /// assert!(!options.shuffle);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}
