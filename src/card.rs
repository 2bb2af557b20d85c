//! Card types and the validating card constructor.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;
use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Hearts, Self::Diamonds];

    /// Returns the suit name, e.g. `"Spades"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| CardError::InvalidSuit(s.to_string()))
    }
}

/// Card value.
///
/// The deck is a reduced one, only the five lowest ranks are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
}

impl Value {
    /// All values in canonical order.
    pub const ALL: [Self; 5] = [Self::Ace, Self::Two, Self::Three, Self::Four, Self::Five];

    /// Returns the value name, e.g. `"Ace"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Value {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.name() == s)
            .ok_or_else(|| CardError::InvalidValue(s.to_string()))
    }
}

/// A playing card.
///
/// Cards compare by suit first and then by value, which is the order used
/// to build a full deck. The description (`"Ace of Spades"`) is the
/// [`Display`](fmt::Display) output and is not part of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    value: Value,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Suit, Value};
    ///
    /// let card = Card::new(Value::Ace, Suit::Spades);
    /// assert_eq!(card.to_string(), "Ace of Spades");
    /// ```
    #[must_use]
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { suit, value }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the value of the card.
    #[must_use]
    pub const fn value(&self) -> Value {
        self.value
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}

/// Creates a card from a value and a suit name.
///
/// Both names must match the canonical names exactly (`"Ace"`, `"Spades"`).
///
/// # Errors
///
/// Returns [`CardError::InvalidValue`] or [`CardError::InvalidSuit`] when one
/// field is not recognized, and [`CardError::InvalidCard`] when neither is.
///
/// # Example
///
/// ```
/// use deckrs::{CardError, Suit, Value, create_card};
///
/// let card = create_card("Ace", "Spades").unwrap();
/// assert_eq!(card.value(), Value::Ace);
/// assert_eq!(card.suit(), Suit::Spades);
///
/// assert_eq!(
///     create_card("Six", "Spades").unwrap_err(),
///     CardError::InvalidValue("Six".into())
/// );
/// ```
pub fn create_card(value: &str, suit: &str) -> Result<Card, CardError> {
    match (value.parse::<Value>(), suit.parse::<Suit>()) {
        (Ok(value), Ok(suit)) => Ok(Card::new(value, suit)),
        (Err(err), Ok(_)) | (Ok(_), Err(err)) => Err(err),
        (Err(_), Err(_)) => Err(CardError::InvalidCard {
            value: value.to_string(),
            suit: suit.to_string(),
        }),
    }
}

/// Returns all suits in canonical order.
#[must_use]
pub const fn suits() -> &'static [Suit] {
    &Suit::ALL
}

/// Returns all values in canonical order.
#[must_use]
pub const fn values() -> &'static [Value] {
    &Value::ALL
}

/// Displays a list of names joined with `", "`.
pub(crate) struct Joined<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Joined<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, item) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
