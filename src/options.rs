//! Dealer configuration options.

/// Configuration options for a [`Dealer`](crate::Dealer).
///
/// Use the builder methods to customize options:
///
/// ```
/// use deckrs::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_decks(2)
///     .with_shuffle(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of full decks in the shoe.
    pub decks: u8,
    /// Whether the shoe is shuffled before dealing.
    pub shuffle: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            shuffle: true,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(3);
    /// assert_eq!(options.decks, 3);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether the shoe is shuffled.
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
