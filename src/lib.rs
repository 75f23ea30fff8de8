//! A card game engine combining bust-out dealing with score and suit bets,
//! with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the players, the shared deck
//! and the house hand. Each round players bet, every player and then the
//! house is dealt until their hand busts, and bets are resolved against the
//! final house hand. Observers implementing [`GameObserver`] hear about every
//! step.
//!
//! # Example
//!
//! ```
//! use suitjack::{DeckOrder, Game, GameOptions, Player, Suit};
//!
//! let options = GameOptions::default().with_deck_order(DeckOrder::Sorted);
//! let mut game = Game::new(options, 42);
//! game.add_player(Player::new("P1", "Alice", 100)?)?;
//! game.place_bet("P1", 20)?;
//! game.deal_player("P1", 0)?;
//! game.deal_house(0)?;
//!
//! // The 2x win is paid at once; the stake comes back on reset.
//! let player = game.player("P1").unwrap();
//! assert_eq!(player.points(), 120);
//! assert_eq!(player.total_points(), 140);
//!
//! game.reset_all_bets_and_hands();
//! assert_eq!(game.player("P1").unwrap().points(), 140);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bet;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod logger;
pub mod observer;
pub mod options;
pub mod pacing;
pub mod player;

// Re-export main types
pub use bet::{Bet, BetKind, BetResult};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{BetError, DealError, DeckError, ErrorKind, PlayerError};
pub use game::{DealTarget, Game, GameState};
pub use hand::{BUST_SCORE, Hand};
pub use logger::LogObserver;
pub use observer::{GameObserver, ObserverId};
pub use options::{DeckOrder, GameOptions};
#[cfg(feature = "std")]
pub use pacing::ThreadSleep;
pub use pacing::Pacer;
pub use player::Player;
