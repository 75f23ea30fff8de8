//! Hand representation shared by players and the house.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Suit};

/// Highest score a hand may hold without busting.
pub const BUST_SCORE: u8 = 21;

/// Cards dealt to one party, in the order they were dealt.
///
/// A hand never holds more than [`BUST_SCORE`] points: the card that would
/// push it over is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Deals a card into the hand.
    ///
    /// Returns `true` if the card was kept. A card that would take the score
    /// past [`BUST_SCORE`] is not added and `false` is returned.
    pub fn deal(&mut self, card: Card) -> bool {
        if self.score() + card.value() > BUST_SCORE {
            return false;
        }
        self.cards.push(card);
        true
    }

    /// Returns the sum of the card values.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.cards.iter().map(Card::value).sum()
    }

    /// Returns how many cards of `suit` the hand holds.
    #[must_use]
    pub fn suit_count(&self, suit: Suit) -> usize {
        self.cards.iter().filter(|card| card.suit == suit).count()
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn reset(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty Hand");
        }

        write!(f, "Hand of {} cards [", self.len())?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "] Score: {}", self.score())
    }
}
