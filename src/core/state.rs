//! Game state.
//!
//! ## GameState
//!
//! The single root value of a game:
//! - Phase and whose turn (or bid) it is
//! - Players, market and every deck, offer and discard pile
//! - Auction sub-state, present only during the auction phase
//! - Per-turn bookkeeping
//! - RNG position for reshuffling the production discard
//!
//! Every collection is an `im::Vector`, so `clone()` is O(1) and transitions
//! can build a new state without touching the one they were given.
//!
//! ## Player
//!
//! Money, commodities, hand and tableau of one seat.

use im::Vector;
use serde::{Deserialize, Serialize};
use strum::Display;

use super::commodity::{CommodityBundle, Market};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRngState;
use crate::cards::{BuildingId, ProductionCard, RailroadCard, TownCard};

/// Game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Phase {
    /// Normal turns.
    Playing,
    /// A railroad is up for auction; `current_player` is the bidder.
    Auction,
    /// The current player must discard down to storage capacity.
    DiscardDown,
    /// Terminal.
    #[serde(rename = "gameover")]
    #[strum(to_string = "gameover")]
    GameOver,
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub money: u32,
    pub commodities: CommodityBundle,
    pub hand: Vector<ProductionCard>,
    pub railroads: Vector<RailroadCard>,
    pub towns: Vector<TownCard>,
    /// Owned tiles in purchase order.
    pub buildings: Vector<BuildingId>,
    /// Which owned B/P building is live. `None` means the first owned one.
    pub active_bp_building: Option<BuildingId>,
}

impl Player {
    /// Create a player with money and nothing else.
    #[must_use]
    pub fn new(name: impl Into<String>, money: u32) -> Self {
        Self {
            name: name.into(),
            money,
            commodities: CommodityBundle::new(),
            hand: Vector::new(),
            railroads: Vector::new(),
            towns: Vector::new(),
            buildings: Vector::new(),
            active_bp_building: None,
        }
    }

    #[must_use]
    pub fn owns(&self, building: BuildingId) -> bool {
        self.buildings.contains(&building)
    }
}

/// A railroad auction in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    pub railroad: RailroadCard,
    /// Who opened the auction. Turn control returns here when it resolves.
    pub starter: PlayerId,
    /// Current bid per seat; 0 means no bid.
    pub bids: PlayerMap<u32>,
    pub passed: PlayerMap<bool>,
}

impl Auction {
    /// Open an auction with the starter's minimum bid already placed.
    #[must_use]
    pub fn open(railroad: RailroadCard, starter: PlayerId, player_count: usize) -> Self {
        let opening = railroad.min_bid;
        Self {
            railroad,
            starter,
            bids: PlayerMap::new(player_count, |p| if p == starter { opening } else { 0 }),
            passed: PlayerMap::with_value(player_count, false),
        }
    }

    /// Seats that have not passed.
    pub fn live_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.passed.iter().filter(|(_, out)| !**out).map(|(p, _)| p)
    }

    /// Highest bid among live players other than `player`.
    #[must_use]
    pub fn highest_rival_bid(&self, player: PlayerId) -> u32 {
        self.live_players()
            .filter(|&p| p != player)
            .map(|p| self.bids[p])
            .max()
            .unwrap_or(0)
    }
}

/// Outcome of a resolved auction, kept until a log consumer takes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionResult {
    pub railroad: RailroadCard,
    pub winner: PlayerId,
    pub amount: u32,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    // === Progression ===
    pub phase: Phase,
    /// Whose turn it is; during an auction, whose bid it is.
    pub current_player: PlayerId,

    // === Table ===
    pub players: PlayerMap<Player>,
    pub market: Market,
    /// Draws come off the back.
    pub production_deck: Vector<ProductionCard>,
    pub production_discard: Vector<ProductionCard>,
    pub railroad_deck: Vector<RailroadCard>,
    pub railroad_offer: Vector<RailroadCard>,
    pub town_deck: Vector<TownCard>,
    pub current_town: Option<TownCard>,
    pub building_stack: Vector<BuildingId>,
    pub building_offer: Vector<BuildingId>,

    // === Auction ===
    pub auction: Option<Auction>,
    pub last_auction_result: Option<AuctionResult>,

    // === Turn bookkeeping ===
    pub action_taken_this_turn: bool,
    /// Production cards owed to the current player at end of turn.
    pub pending_draw_count: u32,
    pub building_purchases_this_turn: u32,
    pub sell_actions_this_turn: u32,

    /// Stream position for reshuffling the production discard.
    pub rng: GameRngState,
}

impl GameState {
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Get a player, or `None` for a seat that does not exist.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// The player whose turn (or bid) it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    pub fn current_mut(&mut self) -> &mut Player {
        let id = self.current_player;
        &mut self.players[id]
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Hand the last auction result to a log consumer, clearing it.
    pub fn take_auction_result(&mut self) -> Option<AuctionResult> {
        self.last_auction_result.take()
    }
}
