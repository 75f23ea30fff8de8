use crate::bet::Bet;
use crate::card::Suit;
use crate::error::BetError;

use super::{Game, GameState};

impl Game {
    /// Places a score bet for the specified player.
    ///
    /// A replacement bet must be strictly larger than the one already placed;
    /// the previous stake is returned before the new one is held.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is already resolved, the player cannot
    /// be found, the amount does not exceed the current bet, or the player
    /// lacks available points.
    pub fn place_bet(&mut self, player_id: &str, amount: usize) -> Result<(), BetError> {
        self.place(player_id, amount, None)
    }

    /// Places a suit bet on `suit` for the specified player.
    ///
    /// # Errors
    ///
    /// Same as [`Game::place_bet`].
    pub fn place_suit_bet(
        &mut self,
        player_id: &str,
        amount: usize,
        suit: Suit,
    ) -> Result<(), BetError> {
        self.place(player_id, amount, Some(suit))
    }

    fn place(&mut self, player_id: &str, amount: usize, suit: Option<Suit>) -> Result<(), BetError> {
        if self.state == GameState::Resolved {
            return Err(BetError::RoundResolved);
        }

        let player = self
            .players
            .get_mut(player_id)
            .ok_or(BetError::PlayerNotFound)?;

        let current = player.bet_amount();
        if amount <= current {
            return Err(BetError::NotIncreasing {
                current,
                attempted: amount,
            });
        }

        let bet = match suit {
            None => Bet::on_score(player, amount)?,
            Some(suit) => Bet::on_suit(player, amount, suit)?,
        };
        tracing::debug!(player_id, amount, bet = %bet, "bet placed");
        player.assign_bet(bet)?;

        let player = &*player;
        self.observers
            .notify(|observer| observer.on_bet_updated(player));
        Ok(())
    }
}
