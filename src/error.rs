//! Error types for game operations.

use thiserror::Error;

/// Broad classification shared by every error in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required identifier or value was absent.
    MissingArgument,
    /// A value was outside its domain.
    InvalidArgument,
    /// The operation is not allowed in the current state.
    IllegalState,
    /// A player with the same ID is already registered.
    DuplicatePlayer,
    /// No player with the given ID is registered.
    UnknownPlayer,
}

/// Errors that can occur when creating or registering players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Player ID is empty.
    #[error("player id is empty")]
    EmptyId,
    /// Player name is empty.
    #[error("player name is empty")]
    EmptyName,
    /// Player starts with no points.
    #[error("player must start with a positive number of points")]
    NoPoints,
    /// A player with the same ID already joined.
    #[error("player already joined")]
    AlreadyJoined,
    /// Player not found.
    #[error("player not found")]
    NotFound,
}

impl PlayerError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyId | Self::EmptyName => ErrorKind::MissingArgument,
            Self::NoPoints => ErrorKind::InvalidArgument,
            Self::AlreadyJoined => ErrorKind::DuplicatePlayer,
            Self::NotFound => ErrorKind::UnknownPlayer,
        }
    }
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Player cannot cover the bet from available points.
    #[error("insufficient points")]
    InsufficientPoints,
    /// A replacement bet must be strictly larger than the current one.
    #[error("bet of {attempted} must be higher than existing bet {current}")]
    NotIncreasing {
        /// Amount of the bet currently placed (0 when none).
        current: usize,
        /// Amount that was attempted.
        attempted: usize,
    },
    /// The bet was placed for a different player.
    #[error("bet belongs to another player")]
    WrongPlayer,
    /// The round is settled; bets reopen after a reset.
    #[error("round already resolved")]
    RoundResolved,
}

impl BetError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::PlayerNotFound => ErrorKind::UnknownPlayer,
            Self::ZeroBet
            | Self::InsufficientPoints
            | Self::NotIncreasing { .. }
            | Self::WrongPlayer => ErrorKind::InvalidArgument,
            Self::RoundResolved => ErrorKind::IllegalState,
        }
    }
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Delay between cards is negative.
    #[error("delay cannot be negative")]
    NegativeDelay,
    /// Player has not placed a bet.
    #[error("player has not placed a bet")]
    NoBet,
    /// Player has already been dealt a hand this round.
    #[error("player has already been dealt to")]
    AlreadyDealt,
    /// The house has already been dealt this round.
    #[error("house has already been dealt to")]
    HouseAlreadyDealt,
    /// The round is settled; dealing reopens after a reset.
    #[error("round already resolved")]
    RoundResolved,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl DealError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::PlayerNotFound => ErrorKind::UnknownPlayer,
            Self::NegativeDelay => ErrorKind::InvalidArgument,
            Self::NoBet
            | Self::AlreadyDealt
            | Self::HouseAlreadyDealt
            | Self::RoundResolved
            | Self::EmptyDeck => ErrorKind::IllegalState,
        }
    }
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

impl DeckError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::IllegalState
    }
}

impl From<DeckError> for DealError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::EmptyDeck,
        }
    }
}
