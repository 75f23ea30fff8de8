use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::observer::Observers;
use crate::options::DeckOrder;

/// Owns the shared deck, created lazily on the first deal of a round.
pub(crate) struct Shoe {
    deck: Option<Deck>,
    order: DeckOrder,
    rng: ChaCha8Rng,
}

impl Shoe {
    pub(crate) const fn new(order: DeckOrder, rng: ChaCha8Rng) -> Self {
        Self {
            deck: None,
            order,
            rng,
        }
    }

    pub(crate) fn remaining(&self) -> Option<usize> {
        self.deck.as_ref().map(Deck::remaining)
    }

    /// Drops the current deck so the next deal starts a fresh one.
    pub(crate) fn clear(&mut self) {
        self.deck = None;
    }

    /// Replaces a missing or exhausted deck and announces it.
    pub(crate) fn ensure_ready(&mut self, observers: &mut Observers) {
        if self.deck.as_ref().is_some_and(|deck| !deck.is_empty()) {
            return;
        }

        let deck = match self.order {
            DeckOrder::Shuffled => Deck::shuffled(&mut self.rng),
            DeckOrder::Sorted => Deck::sorted(),
        };
        tracing::debug!(order = ?self.order, cards = deck.remaining(), "new deck");
        observers.notify(|observer| observer.on_new_deck(&deck));
        self.deck = Some(deck);
    }

    pub(crate) fn draw(&mut self, observers: &mut Observers) -> Result<Card, DeckError> {
        self.ensure_ready(observers);
        self.deck.as_mut().ok_or(DeckError::Empty)?.draw()
    }
}
