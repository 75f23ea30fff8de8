//! Game configuration options.

/// How the engine builds each replacement deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DeckOrder {
    /// Shuffled with the engine's seeded RNG.
    #[default]
    Shuffled,
    /// Canonical (suit, rank) order; the King of Spades is drawn first.
    Sorted,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use suitjack::{DeckOrder, Game, GameOptions};
///
/// let options = GameOptions::default().with_deck_order(DeckOrder::Sorted);
/// let game = Game::new(options, 7);
/// assert_eq!(game.options().deck_order, DeckOrder::Sorted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Order of every deck the engine creates.
    pub deck_order: DeckOrder,
}

impl GameOptions {
    /// Sets the deck order.
    ///
    /// # Example
    ///
    /// ```
    /// use suitjack::{DeckOrder, GameOptions};
    ///
    /// let options = GameOptions::default().with_deck_order(DeckOrder::Sorted);
    /// assert_eq!(options.deck_order, DeckOrder::Sorted);
    /// ```
    #[must_use]
    pub const fn with_deck_order(mut self, order: DeckOrder) -> Self {
        self.deck_order = order;
        self
    }
}
