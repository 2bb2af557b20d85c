//! A playing-card deck library with optional `no_std` support.
//!
//! The crate builds a reduced 20-card deck (four suits, values Ace through
//! Five), shuffles it, deals hands, and saves decks to files.
//!
//! # Example
//!
//! ```
//! use deckrs::{Card, Deck, Suit, Value};
//!
//! let deck = Deck::new();
//! assert!(deck.contains(&Card::new(Value::Ace, Suit::Spades)));
//!
//! let (hand, rest) = deck.deal(5);
//! assert_eq!(hand.len(), 5);
//! assert_eq!(rest.len(), 15);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
#[cfg(feature = "std")]
pub mod store;

// Re-export main types
pub use card::{Card, Suit, Value, create_card, suits, values};
pub use dealer::Dealer;
#[cfg(feature = "std")]
pub use deck::{create_hand, shuffle};
pub use deck::{DECK_SIZE, Deck, contains, create_deck, deal, shuffle_with};
pub use error::CardError;
#[cfg(feature = "std")]
pub use error::StoreError;
pub use hand::Hand;
pub use options::DeckOptions;
#[cfg(feature = "std")]
pub use store::{load, save};
