//! Score and suit wagers.

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;

use crate::card::Suit;
use crate::error::BetError;
use crate::hand::Hand;
use crate::player::Player;

/// Payout multiplier for a [`BetKind::Score`] bet.
pub const SCORE_BET_MULTIPLIER: usize = 2;

/// Payout multiplier for a [`BetKind::Suit`] bet.
pub const SUIT_BET_MULTIPLIER: usize = 4;

/// Result of a bet once the house hand is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BetResult {
    /// The bet has not been finalized yet.
    #[default]
    Undetermined,
    /// Player loses the wager.
    Loss,
    /// Wager is returned.
    Draw,
    /// Player wins the wager times the multiplier.
    Win,
}

impl fmt::Display for BetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undetermined => "Undetermined",
            Self::Loss => "Player Lose",
            Self::Draw => "Draw",
            Self::Win => "Player Win",
        };
        f.pad(name)
    }
}

/// What a bet is resolved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetKind {
    /// Player hand score against house hand score.
    Score,
    /// Count of the chosen suit in the player hand against the house hand.
    Suit(Suit),
}

/// A wager placed by one player for the current round.
///
/// The amount is fixed at creation; only the result changes, when the bet is
/// finalized against the house hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bet {
    player_id: String,
    amount: usize,
    kind: BetKind,
    result: BetResult,
}

impl Bet {
    /// Creates a score bet for `player`.
    ///
    /// Points are not deducted here; see [`Player::assign_bet`].
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or exceeds the player's
    /// available points.
    pub fn on_score(player: &Player, amount: usize) -> Result<Self, BetError> {
        Self::new(player, amount, BetKind::Score)
    }

    /// Creates a suit bet on `suit` for `player`.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or exceeds the player's
    /// available points.
    pub fn on_suit(player: &Player, amount: usize, suit: Suit) -> Result<Self, BetError> {
        Self::new(player, amount, BetKind::Suit(suit))
    }

    fn new(player: &Player, amount: usize, kind: BetKind) -> Result<Self, BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if player.points() < amount {
            return Err(BetError::InsufficientPoints);
        }

        Ok(Self {
            player_id: player.id().into(),
            amount,
            kind,
            result: BetResult::Undetermined,
        })
    }

    /// Returns the ID of the player who placed the bet.
    #[must_use]
    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    /// Returns the wagered amount.
    #[must_use]
    pub const fn amount(&self) -> usize {
        self.amount
    }

    /// Returns the kind of bet.
    #[must_use]
    pub const fn kind(&self) -> BetKind {
        self.kind
    }

    /// Returns the suit for a suit bet.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        match self.kind {
            BetKind::Score => None,
            BetKind::Suit(suit) => Some(suit),
        }
    }

    /// Returns the current result.
    #[must_use]
    pub const fn result(&self) -> BetResult {
        self.result
    }

    /// Returns the payout multiplier applied on a win.
    #[must_use]
    pub const fn multiplier(&self) -> usize {
        match self.kind {
            BetKind::Score => SCORE_BET_MULTIPLIER,
            BetKind::Suit(_) => SUIT_BET_MULTIPLIER,
        }
    }

    /// Resolves the bet against the house hand and stores the result.
    ///
    /// Score bets win on a higher score, draw on an equal one and lose
    /// otherwise. Suit bets have no draw: the player must hold strictly more
    /// cards of the chosen suit than the house.
    pub fn finalize(&mut self, player_hand: &Hand, house_hand: &Hand) -> BetResult {
        self.result = match self.kind {
            BetKind::Score => match player_hand.score().cmp(&house_hand.score()) {
                Ordering::Less => BetResult::Loss,
                Ordering::Equal => BetResult::Draw,
                Ordering::Greater => BetResult::Win,
            },
            BetKind::Suit(suit) => {
                if player_hand.suit_count(suit) > house_hand.suit_count(suit) {
                    BetResult::Win
                } else {
                    BetResult::Loss
                }
            }
        };
        self.result
    }

    /// Returns the points gained or lost for the current result.
    #[must_use]
    pub const fn outcome(&self) -> isize {
        self.outcome_for(self.result)
    }

    /// Returns the points gained or lost if the bet ended with `result`.
    ///
    /// A win yields the amount times the multiplier, excluding the stake.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "bet amounts fit in isize")]
    pub const fn outcome_for(&self, result: BetResult) -> isize {
        match result {
            BetResult::Win => (self.amount * self.multiplier()) as isize,
            BetResult::Loss => -(self.amount as isize),
            BetResult::Draw | BetResult::Undetermined => 0,
        }
    }

    /// Orders two bets by their current outcome.
    #[must_use]
    pub fn cmp_outcome(&self, other: &Self) -> Ordering {
        self.outcome().cmp(&other.outcome())
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BetKind::Score => write!(f, "Score Bet for {}", self.amount),
            BetKind::Suit(suit) => write!(f, "Suit Bet for {} on {suit}", self.amount),
        }
    }
}
