//! Saving and loading decks.
//!
//! The file layout is private to this crate version: a four byte magic,
//! a format version byte, then the bincode encoding of the deck. The whole
//! file must be consumed by the deck, trailing bytes are rejected.

use std::io;
use std::path::Path;

use bincode::Options;

use crate::deck::Deck;
use crate::error::StoreError;

const MAGIC: [u8; 4] = *b"DECK";
const FORMAT_VERSION: u8 = 1;
const HEADER_LEN: usize = MAGIC.len() + 1;

fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

/// Writes `deck` to the file at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be written or the deck cannot be
/// encoded.
pub fn save(deck: &Deck, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();

    let body = codec().serialize(deck)?;
    let mut bytes = Vec::with_capacity(HEADER_LEN + body.len());
    bytes.extend_from_slice(&MAGIC);
    bytes.push(FORMAT_VERSION);
    bytes.extend_from_slice(&body);

    std::fs::write(path, &bytes)?;

    log::debug!("Saved deck with {} cards to {}", deck.len(), path.display());

    Ok(())
}

/// Reads a deck from the file at `path`.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] if the file does not exist, and other
/// [`StoreError`] variants if it cannot be read or is not a deck file.
///
/// # Example
///
/// ```
/// use deckrs::{StoreError, load};
///
/// let err = load("/nonexistent/deck.bin").unwrap_err();
/// assert!(matches!(err, StoreError::NotFound(_)));
/// ```
pub fn load(path: impl AsRef<Path>) -> Result<Deck, StoreError> {
    let path = path.as_ref();
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };

    let Some((header, body)) = bytes.split_at_checked(HEADER_LEN) else {
        return Err(StoreError::InvalidFormat);
    };
    if header[..MAGIC.len()] != MAGIC {
        return Err(StoreError::InvalidFormat);
    }
    if header[MAGIC.len()] != FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion(header[MAGIC.len()]));
    }

    let deck: Deck = codec().deserialize(body)?;

    log::debug!("Loaded deck with {} cards from {}", deck.len(), path.display());

    Ok(deck)
}

impl Deck {
    /// Writes the deck to the file at `path`, see [`save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        save(self, path)
    }

    /// Reads a deck from the file at `path`, see [`load`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or is not a deck file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        load(path)
    }
}
