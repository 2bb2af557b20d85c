//! Deck construction, shuffling, and dealing.
//!
//! Every operation returns new values, the input deck is never modified.

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::card::{Card, Suit, Value};
use crate::hand::Hand;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Value::ALL.len();

/// An ordered sequence of cards.
///
/// [`Deck::new`] builds the full deck, any other sequence of cards can be
/// collected into a deck as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in canonical order.
    ///
    /// Cards are ordered by suit (Spades, Clubs, Hearts, Diamonds) and then by
    /// value (Ace through Five).
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, DECK_SIZE, Deck, Suit, Value};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck.cards()[0], Card::new(Value::Ace, Suit::Spades));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for value in Value::ALL {
                cards.push(Card::new(value, suit));
            }
        }

        Self { cards }
    }

    /// Returns an empty deck.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the cards in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns an iterator over the cards.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns whether the deck holds a card equal to `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns a shuffled copy of the deck using the given random generator.
    #[must_use]
    pub fn shuffle_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Returns a shuffled copy of the deck using the thread random generator.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn shuffle(&self) -> Self {
        self.shuffle_with(&mut rand::rng())
    }

    /// Splits the deck into a hand with the first `hand_size` cards and the
    /// remaining cards.
    ///
    /// A `hand_size` larger than the deck deals the whole deck.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let (hand, rest) = Deck::new().deal(5);
    /// assert_eq!(hand.len(), 5);
    /// assert_eq!(rest.len(), 15);
    ///
    /// let (hand, rest) = Deck::new().deal(100);
    /// assert_eq!(hand.len(), 20);
    /// assert!(rest.is_empty());
    /// ```
    #[must_use]
    pub fn deal(&self, hand_size: usize) -> (Hand, Self) {
        let at = hand_size.min(self.cards.len());
        let (hand, rest) = self.cards.split_at(at);

        log::trace!(
            "Dealt {at} cards (requested {hand_size}), {} left",
            rest.len()
        );

        (
            Hand::from_cards(hand.to_vec()),
            Self {
                cards: rest.to_vec(),
            },
        )
    }

    /// Consumes the deck and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Creates a full deck in canonical order.
#[must_use]
pub fn create_deck() -> Deck {
    Deck::new()
}

/// Returns a shuffled copy of `deck` using the thread random generator.
#[cfg(feature = "std")]
#[must_use]
pub fn shuffle(deck: &Deck) -> Deck {
    deck.shuffle()
}

/// Returns a shuffled copy of `deck` using the given random generator.
#[must_use]
pub fn shuffle_with<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Deck {
    deck.shuffle_with(rng)
}

/// Returns whether `deck` holds a card equal to `card`.
#[must_use]
pub fn contains(deck: &Deck, card: &Card) -> bool {
    deck.contains(card)
}

/// Deals the first `hand_size` cards of `deck`, see [`Deck::deal`].
#[must_use]
pub fn deal(deck: &Deck, hand_size: usize) -> (Hand, Deck) {
    deck.deal(hand_size)
}

/// Deals a hand of `hand_size` cards from a freshly shuffled full deck.
///
/// # Example
///
/// ```
/// use deckrs::create_hand;
///
/// let (hand, rest) = create_hand(2);
/// assert_eq!(hand.len(), 2);
/// assert_eq!(rest.len(), 18);
/// ```
#[cfg(feature = "std")]
#[must_use]
pub fn create_hand(hand_size: usize) -> (Hand, Deck) {
    deal(&shuffle(&create_deck()), hand_size)
}
