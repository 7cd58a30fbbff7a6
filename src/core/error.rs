//! Error types.
//!
//! `Rejection` explains why a well-formed action was not applied. The state
//! the caller passed in is untouched whenever a transition returns one.
//! `ConfigError` covers setup parameters that cannot start a game.

use thiserror::Error;

use super::commodity::Commodity;
use super::state::Phase;
use crate::cards::BuildingId;

/// Why an action was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("action requires phase {expected}, game is in {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("the game is over")]
    GameOver,

    #[error("current player has already acted this turn")]
    ActionAlreadyTaken,

    #[error("action not allowed now: {0}")]
    ActionNotAllowed(&'static str),

    #[error("no card at hand index {0}")]
    InvalidCardIndex(usize),

    #[error("no building at offer index {0}")]
    InvalidOfferIndex(usize),

    #[error("no railroad at offer index {0}")]
    InvalidRailroadIndex(usize),

    #[error("player index {0} is not a valid counterparty")]
    InvalidPlayer(u8),

    #[error("insufficient funds: need ${needed}, have ${available}")]
    InsufficientFunds { needed: u32, available: u32 },

    #[error("insufficient {commodity}: need {requested}, have {available}")]
    InsufficientCommodity {
        commodity: Commodity,
        available: u32,
        requested: u32,
    },

    #[error("invalid selection: {0}")]
    InvalidSelection(&'static str),

    #[error("missing building effect: {0}")]
    MissingBuilding(&'static str),

    #[error("building {0} is not owned")]
    NotOwned(BuildingId),

    #[error("building {0} cannot be upgraded")]
    NotUpgradeable(BuildingId),

    #[error("building {0} is not a B/P building")]
    NotBpBuilding(BuildingId),

    #[error("no town is available")]
    NoTownAvailable,

    #[error("bid of ${offered} is too low, minimum is ${minimum}")]
    BidTooLow { minimum: u32, offered: u32 },

    #[error("no {0} to sell")]
    NothingToSell(Commodity),
}

/// Setup parameters that cannot start a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be between 2 and 5, got {0}")]
    PlayerCount(usize),
}
