//! Observer interface for game events.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::player::Player;

/// Receives game events as they happen.
///
/// Every method has an empty default, so implementors only override the
/// events they care about. Observers run inline on the calling thread and
/// must not block indefinitely.
pub trait GameObserver {
    /// A player joined the game.
    fn on_player_added(&mut self, _player: &Player) {}

    /// A player left the game.
    fn on_player_removed(&mut self, _player: &Player) {}

    /// A player's bet was placed, replaced or cleared.
    fn on_bet_updated(&mut self, _player: &Player) {}

    /// A fresh deck replaced the previous one.
    fn on_new_deck(&mut self, _deck: &Deck) {}

    /// A player kept a dealt card.
    fn on_player_card(&mut self, _player: &Player, _card: Card) {}

    /// A player busted on `card`, which was not added to the hand.
    fn on_player_bust(&mut self, _player: &Player, _card: Card) {}

    /// The house kept a dealt card.
    fn on_house_card(&mut self, _house_hand: &Hand, _card: Card) {}

    /// The house busted on `card` and every bet has been resolved.
    ///
    /// `players` is in seating order.
    fn on_house_bust(&mut self, _house_hand: &Hand, _card: Card, _players: &[&Player]) {}
}

/// Handle returned when registering an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// Registered observers, notified in registration order.
#[derive(Default)]
pub(crate) struct Observers {
    entries: Vec<(ObserverId, Box<dyn GameObserver>)>,
    next_id: u64,
}

impl Observers {
    pub(crate) fn register(&mut self, observer: Box<dyn GameObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: ObserverId) -> Option<Box<dyn GameObserver>> {
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(index).1)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, mut event: impl FnMut(&mut dyn GameObserver)) {
        for (_, observer) in &mut self.entries {
            event(observer.as_mut());
        }
    }
}
