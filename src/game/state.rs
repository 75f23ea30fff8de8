//! Game state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Accepting bets; nothing has been dealt this round.
    #[default]
    AwaitingBets,
    /// At least one player has been dealt.
    Dealing,
    /// The house has busted and every bet is resolved.
    Resolved,
}

/// Who receives cards in a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealTarget<'a> {
    /// The player with this ID.
    Player(&'a str),
    /// The shared house hand.
    House,
}
