//! Interactive dealing example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Dealer, Deck, DeckOptions, Hand, create_card};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    println!("Deck dealing example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut dealer = Dealer::new(DeckOptions::default(), seed);
    let path = std::env::temp_dir().join("deckrs-demo.deck");

    loop {
        let Some(hand_size) = prompt_usize("Hand size: ") else {
            println!("Goodbye.");
            break;
        };

        let (hand, rest) = dealer.create_hand(hand_size);
        println!("Hand ({} cards): {}", hand.len(), format_hand(&hand));
        println!("Remaining: {} cards", rest.len());

        if let Err(err) = rest.save(&path) {
            log::error!("{err}");
            continue;
        }

        let reloaded = match Deck::load(&path) {
            Ok(deck) => deck,
            Err(err) => {
                log::error!("{err}");
                continue;
            }
        };
        log::info!("Reloaded {} cards from {}", reloaded.len(), path.display());

        let line = prompt_line("Look for a card in the remaining deck (e.g. 'Ace Spades'): ");
        let mut parts = line.split_whitespace();
        let (Some(value), Some(suit)) = (parts.next(), parts.next()) else {
            continue;
        };

        match create_card(value, suit) {
            Ok(card) if reloaded.contains(&card) => println!("{card} is still in the deck."),
            Ok(card) => println!("{card} is not in the deck."),
            Err(err) => println!("Card error: {err}"),
        }
    }

    let _ = std::fs::remove_file(&path);
}

fn format_hand(hand: &Hand) -> String {
    hand.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" || input.is_empty() {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
