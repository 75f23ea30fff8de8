//! Human-readable event log.

use core::fmt::Write;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::observer::GameObserver;
use crate::player::Player;

/// Observer that writes one line per game event to a text sink.
///
/// On a house bust it also writes the house hand and a results table with
/// one row per player.
///
/// ```
/// use suitjack::{Game, GameOptions, LogObserver};
///
/// let mut game = Game::new(GameOptions::default(), 1);
/// game.register_observer(LogObserver::new(String::new()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogObserver<W> {
    sink: W,
}

impl<W: Write> LogObserver<W> {
    /// Creates an observer writing to `sink`.
    pub const fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Returns the sink.
    pub const fn sink(&self) -> &W {
        &self.sink
    }

    /// Consumes the observer and returns the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    // The sink is best effort; a failed write must not stop the round.
    fn line(&mut self, args: core::fmt::Arguments<'_>) {
        let _ = self.sink.write_fmt(args);
        let _ = self.sink.write_char('\n');
    }

    fn result_row(&mut self, player: &Player) {
        let _ = write!(self.sink, "{player}\nPlayer: {:<11}{:<20}", player.id(), player.name());
        let _ = match player.bet() {
            Some(bet) => write!(self.sink, "{:<12}{:>8}", bet.result(), bet.outcome()),
            None => self.sink.write_str("No Bet"),
        };
        let _ = self.sink.write_char('\n');
    }
}

impl<W: Write> GameObserver for LogObserver<W> {
    fn on_player_added(&mut self, player: &Player) {
        self.line(format_args!("Added {player}"));
    }

    fn on_player_removed(&mut self, player: &Player) {
        self.line(format_args!("Removed {player}"));
    }

    fn on_bet_updated(&mut self, player: &Player) {
        match player.bet() {
            Some(bet) => self.line(format_args!("Bet updated for {} to {bet}", player.id())),
            None => self.line(format_args!("Bet updated for {} to No Bet", player.id())),
        }
    }

    fn on_new_deck(&mut self, deck: &Deck) {
        self.line(format_args!(
            "A new deck of cards was created with {} cards",
            deck.remaining()
        ));
    }

    fn on_player_card(&mut self, player: &Player, card: Card) {
        self.line(format_args!("Player {} dealt {card}", player.id()));
    }

    fn on_player_bust(&mut self, player: &Player, card: Card) {
        self.line(format_args!("Player {} bust on {card}", player.id()));
    }

    fn on_house_card(&mut self, _house_hand: &Hand, card: Card) {
        self.line(format_args!("House dealt {card}"));
    }

    fn on_house_bust(&mut self, house_hand: &Hand, card: Card, players: &[&Player]) {
        self.line(format_args!("House bust on {card}"));
        self.line(format_args!("House Hand: {house_hand}"));
        self.line(format_args!("Final Results:"));
        for player in players {
            self.result_row(player);
        }
    }
}
