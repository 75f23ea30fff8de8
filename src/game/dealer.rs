use alloc::vec::Vec;
use core::time::Duration;

use crate::card::Card;
use crate::error::DealError;
use crate::hand::Hand;
use crate::observer::{GameObserver, Observers};
use crate::pacing::Pacer;
use crate::player::Player;

use super::shoe::Shoe;
use super::{DealTarget, Game, GameState};

/// Converts a caller delay in milliseconds, rejecting negative values.
fn delay_from_millis(delay_ms: i64) -> Result<Duration, DealError> {
    u64::try_from(delay_ms)
        .map(Duration::from_millis)
        .map_err(|_| DealError::NegativeDelay)
}

const fn house(hand: &mut Hand) -> &mut Hand {
    hand
}

/// Draws cards into the target's hand until one would bust it.
///
/// Each draw is followed by the pause and then `on_card` for a kept card.
/// Returns the card that busted the hand; the caller announces the bust.
fn deal_until_bust<T>(
    shoe: &mut Shoe,
    observers: &mut Observers,
    pacer: &mut dyn Pacer,
    target: &mut T,
    delay: Duration,
    hand_of: fn(&mut T) -> &mut Hand,
    on_card: impl Fn(&mut dyn GameObserver, &T, Card),
) -> Result<Card, DealError> {
    loop {
        let card = shoe.draw(observers)?;
        let kept = hand_of(target).deal(card);
        pacer.pause(delay);

        if !kept {
            return Ok(card);
        }

        tracing::trace!(card = %card, score = hand_of(target).score(), "card dealt");
        let target = &*target;
        observers.notify(|observer| on_card(observer, target, card));
    }
}

impl Game {
    /// Deals to `target` until its hand busts.
    ///
    /// `delay_ms` is a blocking pause after every card, before observers
    /// hear about it. Dealing the house also resolves every player's bet
    /// before the house bust is announced.
    ///
    /// # Errors
    ///
    /// Returns an error if the delay is negative, the player cannot be found,
    /// has no bet or was already dealt, or the house was already dealt.
    pub fn deal(&mut self, target: DealTarget<'_>, delay_ms: i64) -> Result<(), DealError> {
        match target {
            DealTarget::Player(player_id) => self.deal_player(player_id, delay_ms),
            DealTarget::House => self.deal_house(delay_ms),
        }
    }

    /// Deals the player's whole hand, one card at a time, until it busts.
    ///
    /// The player's bet is not touched; it is resolved by [`Game::deal_house`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is already resolved, the player cannot
    /// be found, the delay is negative, the player has no bet, or the player
    /// already holds cards.
    pub fn deal_player(&mut self, player_id: &str, delay_ms: i64) -> Result<(), DealError> {
        if self.state == GameState::Resolved {
            return Err(DealError::RoundResolved);
        }

        let player = self
            .players
            .get_mut(player_id)
            .ok_or(DealError::PlayerNotFound)?;
        let delay = delay_from_millis(delay_ms)?;

        if player.bet().is_none() {
            return Err(DealError::NoBet);
        }
        if !player.hand().is_empty() {
            return Err(DealError::AlreadyDealt);
        }

        self.state = GameState::Dealing;
        self.shoe.ensure_ready(&mut self.observers);

        let bust_card = deal_until_bust(
            &mut self.shoe,
            &mut self.observers,
            &mut *self.pacer,
            &mut *player,
            delay,
            Player::hand_mut,
            |observer, player, card| observer.on_player_card(player, card),
        )?;

        tracing::debug!(
            player_id,
            card = %bust_card,
            score = player.hand().score(),
            "player bust"
        );
        let player = &*player;
        self.observers
            .notify(|observer| observer.on_player_bust(player, bust_card));
        Ok(())
    }

    /// Deals the house hand until it busts, then resolves every bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the delay is negative or the house was already
    /// dealt this round.
    pub fn deal_house(&mut self, delay_ms: i64) -> Result<(), DealError> {
        let delay = delay_from_millis(delay_ms)?;
        if !self.house_hand.is_empty() {
            return Err(DealError::HouseAlreadyDealt);
        }

        self.shoe.ensure_ready(&mut self.observers);

        let bust_card = deal_until_bust(
            &mut self.shoe,
            &mut self.observers,
            &mut *self.pacer,
            &mut self.house_hand,
            delay,
            house,
            |observer, hand, card| observer.on_house_card(hand, card),
        )?;

        self.resolve_bets();
        self.state = GameState::Resolved;
        tracing::debug!(
            card = %bust_card,
            score = self.house_hand.score(),
            "house bust"
        );

        let players: Vec<&Player> = self
            .seating
            .iter()
            .filter_map(|id| self.players.get(id))
            .collect();
        let house_hand = &self.house_hand;
        self.observers
            .notify(|observer| observer.on_house_bust(house_hand, bust_card, &players));
        Ok(())
    }

    /// Settles every player's bet against the finished house hand.
    fn resolve_bets(&mut self) {
        for id in &self.seating {
            let Some(player) = self.players.get_mut(id) else {
                continue;
            };
            if let Some(result) = player.apply_bet_result(Some(&self.house_hand)) {
                tracing::debug!(
                    player_id = id.as_str(),
                    result = ?result,
                    points = player.points(),
                    "bet resolved"
                );
            }
        }
    }
}
