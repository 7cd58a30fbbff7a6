//! Core value types: players, commodities, state, actions, RNG, configuration.
//!
//! Everything here is plain data. The rules that move a `GameState` from one
//! value to the next live in `rules`.

pub mod action;
pub mod commodity;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{GameAction, TradingFloorPurchase};
pub use commodity::{Commodity, CommodityBundle, Market, COMMODITY_COUNT};
pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ConfigError, Rejection};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{Auction, AuctionResult, GameState, Phase, Player};
