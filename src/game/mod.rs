//! Game engine and state management.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::PlayerError;
use crate::hand::Hand;
use crate::observer::{GameObserver, ObserverId, Observers};
use crate::options::GameOptions;
use crate::pacing::Pacer;
use crate::player::Player;

mod bet;
mod dealer;
mod shoe;
pub mod state;

use shoe::Shoe;
pub use state::{DealTarget, GameState};

/// Engine for a single table: players, the shared deck, the house hand and
/// the bet lifecycle.
///
/// All operations run to completion on the calling thread. Observers are
/// notified inline, in registration order, after each state change.
pub struct Game {
    options: GameOptions,
    /// Player IDs in the order they joined.
    seating: Vec<String>,
    /// Registered players (`player_id` -> player).
    players: HashMap<String, Player>,
    house_hand: Hand,
    shoe: Shoe,
    state: GameState,
    observers: Observers,
    pacer: Box<dyn Pacer>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The seed drives every shuffle, so equal seeds deal equal decks.
    ///
    /// # Example
    ///
    /// ```
    /// use suitjack::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.player_count(), 0);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);

        Self {
            options,
            seating: Vec::new(),
            players: HashMap::new(),
            house_hand: Hand::new(),
            shoe: Shoe::new(options.deck_order, rng),
            state: GameState::AwaitingBets,
            observers: Observers::default(),
            pacer: default_pacer(),
        }
    }

    /// Replaces the pacer used between dealt cards.
    #[must_use]
    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Registers an observer and returns a handle for removing it.
    pub fn register_observer(&mut self, observer: impl GameObserver + 'static) -> ObserverId {
        self.observers.register(Box::new(observer))
    }

    /// Removes a previously registered observer.
    ///
    /// Returns `None` if the handle is unknown.
    pub fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn GameObserver>> {
        self.observers.remove(id)
    }

    /// Returns the number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Adds a player to the table.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::AlreadyJoined`] if the ID is taken.
    pub fn add_player(&mut self, player: Player) -> Result<(), PlayerError> {
        if self.players.contains_key(player.id()) {
            return Err(PlayerError::AlreadyJoined);
        }

        tracing::debug!(player_id = player.id(), points = player.points(), "player added");
        let id = String::from(player.id());
        self.seating.push(id.clone());
        let player = &*self.players.entry(id).or_insert(player);
        self.observers.notify(|observer| observer.on_player_added(player));
        Ok(())
    }

    /// Removes a player from the table and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NotFound`] if no player has this ID.
    pub fn remove_player(&mut self, player_id: &str) -> Result<Player, PlayerError> {
        let player = self
            .players
            .remove(player_id)
            .ok_or(PlayerError::NotFound)?;
        self.seating.retain(|id| id != player_id);

        tracing::debug!(player_id, "player removed");
        self.observers
            .notify(|observer| observer.on_player_removed(&player));
        Ok(player)
    }

    /// Returns the player with this ID.
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.get(player_id)
    }

    /// Returns every player in seating order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.seating.iter().filter_map(|id| self.players.get(id))
    }

    /// Returns the number of players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the house hand.
    pub const fn house_hand(&self) -> &Hand {
        &self.house_hand
    }

    /// Returns the cards left in the shared deck, or `None` before the first
    /// deal of a round.
    pub fn cards_remaining(&self) -> Option<usize> {
        self.shoe.remaining()
    }

    /// Clears every bet and hand for a new round.
    ///
    /// Unresolved bets are returned to their players, and the next deal
    /// starts from a fresh deck.
    pub fn reset_all_bets_and_hands(&mut self) {
        self.shoe.clear();
        self.house_hand.reset();

        for id in &self.seating {
            let Some(player) = self.players.get_mut(id) else {
                continue;
            };
            player.hand_mut().reset();
            player.reset_bet();
            let player = &*player;
            self.observers
                .notify(|observer| observer.on_bet_updated(player));
        }

        self.state = GameState::AwaitingBets;
        tracing::debug!(players = self.seating.len(), "round reset");
    }
}

#[cfg(feature = "std")]
fn default_pacer() -> Box<dyn Pacer> {
    Box::new(crate::pacing::ThreadSleep)
}

// Without std there is no clock to sleep on; hosts inject their own pacer.
#[cfg(not(feature = "std"))]
fn default_pacer() -> Box<dyn Pacer> {
    Box::new(|_: core::time::Duration| {})
}
