//! Deck save and load tests.

#![cfg(feature = "std")]

use std::path::PathBuf;

use deckrs::{Card, Deck, StoreError, Suit, Value, create_deck, load, save, shuffle};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("deckrs-{}-{name}.deck", std::process::id()))
}

#[test]
fn save_then_load_round_trip() {
    let path = temp_path("round-trip");
    let deck = shuffle(&create_deck());

    save(&deck, &path).unwrap();
    let loaded = load(&path).unwrap();
    assert_eq!(loaded, deck);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn deck_methods_round_trip_partial_deck() {
    let path = temp_path("partial");
    let (_, rest) = create_deck().deal(15);
    assert_eq!(rest.len(), 5);

    rest.save(&path).unwrap();
    assert_eq!(Deck::load(&path).unwrap(), rest);

    // Saving again replaces the file.
    Deck::empty().save(&path).unwrap();
    assert!(Deck::load(&path).unwrap().is_empty());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn load_missing_file_is_not_found() {
    let path = temp_path("missing");
    let err = load(&path).unwrap_err();
    match err {
        StoreError::NotFound(missing) => assert_eq!(missing, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_rejects_foreign_files() {
    let path = temp_path("foreign");

    std::fs::write(&path, b"not a deck file").unwrap();
    assert!(matches!(load(&path), Err(StoreError::InvalidFormat)));

    std::fs::write(&path, b"DE").unwrap();
    assert!(matches!(load(&path), Err(StoreError::InvalidFormat)));

    std::fs::write(&path, b"DECK\x09").unwrap();
    assert!(matches!(
        load(&path),
        Err(StoreError::UnsupportedVersion(9))
    ));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn load_rejects_truncated_body() {
    let path = temp_path("truncated");
    let deck: Deck = vec![Card::new(Value::Ace, Suit::Hearts)].into();
    save(&deck, &path).unwrap();

    let mut bytes = std::fs::read(&path).unwrap();
    bytes.truncate(bytes.len() - 1);
    std::fs::write(&path, bytes).unwrap();

    assert!(matches!(load(&path), Err(StoreError::Decode(_))));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn save_into_missing_directory_fails() {
    let path = temp_path("no-such-dir").join("deck.deck");
    assert!(matches!(
        save(&create_deck(), &path),
        Err(StoreError::Io(_))
    ));
}

#[test]
fn load_rejects_trailing_bytes() {
    let path = temp_path("trailing");
    save(&create_deck(), &path).unwrap();

    let mut bytes = std::fs::read(&path).unwrap();
    bytes.extend_from_slice(b"garbage");
    std::fs::write(&path, bytes).unwrap();

    assert!(matches!(load(&path), Err(StoreError::Decode(_))));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn load_rejects_unknown_suit() {
    let path = temp_path("bad-suit");
    let deck: Deck = vec![Card::new(Value::Ace, Suit::Hearts)].into();
    save(&deck, &path).unwrap();

    // Header, u64 length, then the suit variant index.
    let mut bytes = std::fs::read(&path).unwrap();
    bytes[5 + 8] = 9;
    std::fs::write(&path, bytes).unwrap();

    assert!(matches!(load(&path), Err(StoreError::Decode(_))));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn load_directory_is_io_error() {
    assert!(matches!(
        load(std::env::temp_dir()),
        Err(StoreError::Io(_))
    ));
}
