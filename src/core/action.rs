//! Player actions.
//!
//! `GameAction` is the closed set of things a player can submit. It is a
//! tagged union on the wire (`{"type": "sell", "commodity": "wheat", ...}`)
//! so a transport layer can forward it without a manual switch. An unknown
//! tag fails at deserialization; inside the engine every variant is matched
//! exhaustively.
//!
//! ## Example
//!
//! ```
//! use tycoon_engine::core::{Commodity, GameAction};
//!
//! let action: GameAction =
//!     serde_json::from_str(r#"{"type":"sell","commodity":"wheat","quantity":2}"#).unwrap();
//!
//! assert_eq!(action, GameAction::sell(Commodity::Wheat, 2));
//! assert_eq!(action.kind(), "sell");
//! ```

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use super::commodity::{Commodity, CommodityBundle};
use super::player::PlayerId;
use crate::cards::BuildingId;

/// A forced purchase from another player, made alongside a production action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingFloorPurchase {
    pub from_player: PlayerId,
    pub commodity: Commodity,
    pub quantity: u32,
}

/// An action submitted by the current player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum GameAction {
    /// Play a production card from hand.
    Production {
        card_index: usize,
        /// Explicit units to take; `None` takes the first units printed.
        #[serde(default)]
        commodities_to_take: Option<Vec<Commodity>>,
        #[serde(default)]
        trading_floor_purchase: Option<TradingFloorPurchase>,
    },
    /// Sell up to `quantity` units of one commodity.
    Sell {
        commodity: Commodity,
        quantity: u32,
        #[serde(default)]
        use_export_company: bool,
    },
    /// Drop one unit while over storage capacity.
    Discard { commodity: Commodity },
    /// Buy the tile at an offer position.
    BuyBuilding { building_index: usize },
    /// Flip an owned level-1 B/P tile to its level-2 side.
    #[serde(rename = "upgradeBBuilding")]
    #[strum(to_string = "upgradeBBuilding")]
    UpgradeBBuilding { building_id: BuildingId },
    /// Choose which owned B/P building is live.
    SetActiveBpBuilding { building_id: BuildingId },
    /// Buy the current town.
    BuyTown {
        use_specific: bool,
        /// Explicit any-mix payment; `None` lets the engine choose.
        #[serde(default)]
        commodities_to_spend: Option<CommodityBundle>,
    },
    /// Put an offered railroad up for auction.
    StartAuction { railroad_index: usize },
    PlaceBid { amount: u32 },
    PassAuction,
    EndTurn,
}

impl GameAction {
    /// Play a card taking the default units, with no trading floor purchase.
    #[must_use]
    pub fn production(card_index: usize) -> Self {
        GameAction::Production {
            card_index,
            commodities_to_take: None,
            trading_floor_purchase: None,
        }
    }

    /// Sell without the export bonus.
    #[must_use]
    pub fn sell(commodity: Commodity, quantity: u32) -> Self {
        GameAction::Sell {
            commodity,
            quantity,
            use_export_company: false,
        }
    }

    /// Buy the current town with its specific cost.
    #[must_use]
    pub fn buy_town_specific() -> Self {
        GameAction::BuyTown {
            use_specific: true,
            commodities_to_spend: None,
        }
    }

    /// Buy the current town with any commodities, chosen by the engine.
    #[must_use]
    pub fn buy_town_any() -> Self {
        GameAction::BuyTown {
            use_specific: false,
            commodities_to_spend: None,
        }
    }

    /// Wire tag of this action, e.g. `"placeBid"`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}
