//! Seeded deck source.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::{DECK_SIZE, Deck};
use crate::hand::Hand;
use crate::options::DeckOptions;

/// Deals hands from a shoe shuffled with a seeded random generator.
///
/// Two dealers created with the same options and seed produce the same
/// sequence of shoes and hands.
pub struct Dealer {
    options: DeckOptions,
    rng: ChaCha8Rng,
}

impl Dealer {
    /// Creates a new dealer with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Dealer, DeckOptions};
    ///
    /// let mut dealer = Dealer::new(DeckOptions::default(), 42);
    /// let (hand, rest) = dealer.create_hand(3);
    /// assert_eq!(hand.len() + rest.len(), 20);
    /// ```
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the dealer options.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Builds a new shoe from the configured number of full decks.
    ///
    /// The shoe is shuffled unless shuffling is disabled in the options.
    pub fn shoe(&mut self) -> Deck {
        let decks = self.options.decks as usize;
        let mut cards = Vec::with_capacity(decks * DECK_SIZE);

        for _ in 0..decks {
            cards.extend(Deck::new());
        }

        log::debug!(
            "Built shoe with {} cards from {decks} decks (shuffle: {})",
            cards.len(),
            self.options.shuffle
        );

        let shoe = Deck::from(cards);
        if self.options.shuffle {
            self.shuffle(&shoe)
        } else {
            shoe
        }
    }

    /// Returns a shuffled copy of `deck`.
    pub fn shuffle(&mut self, deck: &Deck) -> Deck {
        deck.shuffle_with(&mut self.rng)
    }

    /// Deals a hand of `hand_size` cards from a new shoe.
    pub fn create_hand(&mut self, hand_size: usize) -> (Hand, Deck) {
        self.shoe().deal(hand_size)
    }
}
