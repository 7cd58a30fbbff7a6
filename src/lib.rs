//! # tycoon-engine
//!
//! A deterministic rules engine for a multi-player railroad and commodity
//! trading board game.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: every action is a function from `&GameState` to
//!    `Result<GameState, Rejection>`. The input is never modified, so the
//!    previous state is always available for undo or comparison.
//!
//! 2. **N-Player First**: 2 to 5 players, addressed by `PlayerId` seat.
//!    No convenience methods that assume 2 players.
//!
//! 3. **Static Catalog**: card and tile data live in a process-wide
//!    `CardRegistry`; game state stores building ids, not copies of tiles.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so a
//!   transition copies only what it changes.
//!
//! - **Seeded Randomness**: decks are shuffled from the game seed at setup
//!   and the RNG position is part of the state, so the same seed and the same
//!   actions always give the same game.
//!
//! ## Modules
//!
//! - `core`: players, commodities, market, state, actions, RNG, config, errors
//! - `cards`: card and tile definitions, the registry, deck generation
//! - `rules`: setup, one module per action family, scoring, dispatch, logging
//!
//! ## Example
//!
//! ```
//! use tycoon_engine::{apply_action, init_game, GameAction, Phase};
//!
//! let state = init_game(3, &["Ada", "Brunel", "Cugnot"], 42).unwrap();
//! let next = apply_action(&state, &GameAction::production(0)).unwrap();
//! let next = apply_action(&next, &GameAction::EndTurn).unwrap();
//!
//! assert_eq!(next.phase, Phase::Playing);
//! assert_eq!(next.current_player.index(), 1);
//! ```

pub mod cards;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Auction, AuctionResult, Commodity, CommodityBundle, ConfigError, GameAction, GameConfig,
    GameRng, GameRngState, GameState, Market, Phase, Player, PlayerId, PlayerMap, Rejection,
    TradingFloorPurchase,
};

pub use crate::cards::{
    registry, BuildingId, BuildingTile, CardId, CardRegistry, ProductionCard, RailroadCard,
    RailroadLine, TownCard,
};

pub use crate::rules::{
    apply_action, apply_or_keep, compute_scores, format_action_message, format_auction_result,
    get_winner, init_game, init_game_with_config, max_hand_size, max_production, max_storage,
    player_vp, PlayerScore,
};
