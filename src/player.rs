//! Player state: balance, current bet and current hand.

use alloc::string::String;
use core::fmt;

use crate::bet::{Bet, BetResult};
use crate::error::{BetError, PlayerError};
use crate::hand::Hand;

/// A player seated at the table.
///
/// Wagered points are held out of [`Player::points`] from placement until the
/// bet is lost, drawn or cleared, so `total_points() == points() + quarantined()`
/// at all times. A winning stake stays held until the bet is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: String,
    name: String,
    points: usize,
    bet: Option<Bet>,
    hand: Hand,
}

impl Player {
    /// Creates a player with a starting balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID or name is empty, or if `points` is zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        points: usize,
    ) -> Result<Self, PlayerError> {
        let id = id.into();
        let name = name.into();

        if id.is_empty() {
            return Err(PlayerError::EmptyId);
        }
        if name.is_empty() {
            return Err(PlayerError::EmptyName);
        }
        if points == 0 {
            return Err(PlayerError::NoPoints);
        }

        Ok(Self {
            id,
            name,
            points,
            bet: None,
            hand: Hand::new(),
        })
    }

    /// Returns the unique player ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the points available for betting.
    #[must_use]
    pub const fn points(&self) -> usize {
        self.points
    }

    /// Returns the stake still held out of the available balance.
    ///
    /// An open or winning bet holds its amount. A lost stake is forfeited and
    /// a drawn one was already returned, so neither holds anything.
    #[must_use]
    pub fn quarantined(&self) -> usize {
        self.bet.as_ref().map_or(0, |bet| match bet.result() {
            BetResult::Undetermined | BetResult::Win => bet.amount(),
            BetResult::Loss | BetResult::Draw => 0,
        })
    }

    /// Returns available points plus the held stake.
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.points + self.quarantined()
    }

    /// Returns the current bet, if any.
    #[must_use]
    pub const fn bet(&self) -> Option<&Bet> {
        self.bet.as_ref()
    }

    /// Returns the amount of the current bet, or 0 without one.
    #[must_use]
    pub fn bet_amount(&self) -> usize {
        self.bet.as_ref().map_or(0, Bet::amount)
    }

    /// Returns the current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Replaces the current bet.
    ///
    /// Points held by the previous bet are returned before the new amount is
    /// taken out of the available balance.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::WrongPlayer`] if the bet was placed for another
    /// player, or [`BetError::InsufficientPoints`] if the balance no longer
    /// covers it. The current bet is kept on error.
    pub fn assign_bet(&mut self, bet: Bet) -> Result<(), BetError> {
        if bet.player_id() != self.id {
            return Err(BetError::WrongPlayer);
        }
        self.points = (self.points + self.quarantined())
            .checked_sub(bet.amount())
            .ok_or(BetError::InsufficientPoints)?;
        self.bet = Some(bet);
        Ok(())
    }

    /// Clears the current bet, returning any stake it still holds.
    pub fn reset_bet(&mut self) {
        self.points += self.quarantined();
        self.bet = None;
    }

    /// Finalizes the current bet against the house hand and settles points.
    ///
    /// A win adds the bet outcome and keeps the stake held until reset, a draw
    /// returns the stake and a loss forfeits it. Does nothing without a house
    /// hand or a bet, and a bet that is already settled keeps its result.
    pub fn apply_bet_result(&mut self, house_hand: Option<&Hand>) -> Option<BetResult> {
        let house_hand = house_hand?;
        let bet = self.bet.as_mut()?;

        if bet.result() != BetResult::Undetermined {
            return Some(bet.result());
        }

        let result = bet.finalize(&self.hand, house_hand);
        match result {
            BetResult::Win => self.points += bet.outcome().unsigned_abs(),
            BetResult::Draw => self.points += bet.amount(),
            BetResult::Loss | BetResult::Undetermined => {}
        }

        Some(result)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player id={}, name={}, points={}, ",
            self.id, self.name, self.points
        )?;
        match &self.bet {
            Some(bet) => write!(f, "{bet}")?,
            None => f.write_str("No Bet")?,
        }
        write!(f, ", {}", self.hand)
    }
}
