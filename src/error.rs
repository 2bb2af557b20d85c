//! Error types for card and deck operations.

use alloc::string::String;
use thiserror::Error;

use crate::card::{Joined, Suit, Value};

/// Errors that can occur when creating a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The value is not one of the card values.
    #[error("invalid value `{0}`, expected one of: {values}", values = Joined(&Value::ALL))]
    InvalidValue(String),
    /// The suit is not one of the card suits.
    #[error("invalid suit `{0}`, expected one of: {suits}", suits = Joined(&Suit::ALL))]
    InvalidSuit(String),
    /// Neither the value nor the suit are valid.
    #[error(
        "invalid value `{value}` and suit `{suit}`, expected values: {values}; suits: {suits}",
        values = Joined(&Value::ALL),
        suits = Joined(&Suit::ALL)
    )]
    InvalidCard {
        /// The rejected value.
        value: String,
        /// The rejected suit.
        suit: String,
    },
}

/// Errors that can occur when saving or loading a deck.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum StoreError {
    /// The deck file does not exist.
    #[error("deck file not found: {}", .0.display())]
    NotFound(std::path::PathBuf),
    /// Reading or writing the deck file failed.
    #[error("deck file I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a deck file.
    #[error("not a deck file")]
    InvalidFormat,
    /// The file was written by an unsupported format version.
    #[error("unsupported deck file version {0}")]
    UnsupportedVersion(u8),
    /// The deck could not be encoded or decoded.
    #[error("deck encoding error: {0}")]
    Decode(#[from] bincode::Error),
}
