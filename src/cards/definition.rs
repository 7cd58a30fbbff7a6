//! Card and tile definitions - static catalog data.
//!
//! Four kinds of physical component:
//!
//! - `ProductionCard`: yields commodities and raises market prices when played.
//! - `RailroadCard`: auctioned; scores on its line's escalating VP schedule.
//! - `TownCard`: bought with an exact commodity cost or any mix of a count.
//! - `BuildingTile`: a flag-rich record of passive effects, owned by ID.
//!
//! Cards are plain values that move between decks, hands and tableaus.
//! Building tiles never move by value: players, the offer and the stack hold
//! `BuildingId`s and look the tile up in the registry.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::{Display, EnumIter};

use crate::core::{Commodity, CommodityBundle};

/// Identifier of one physical card (production, railroad or town).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A price & production card.
///
/// Playing it yields up to the player's production limit of the printed
/// commodities, then raises the price of each commodity in `price_increase`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionCard {
    pub id: CardId,
    pub production: CommodityBundle,
    pub price_increase: SmallVec<[Commodity; 2]>,
}

impl ProductionCard {
    #[must_use]
    pub fn new(id: CardId, production: CommodityBundle, price_increase: &[Commodity]) -> Self {
        Self {
            id,
            production,
            price_increase: SmallVec::from_slice(price_increase),
        }
    }

    /// The printed yield flattened to one entry per unit, in commodity order.
    #[must_use]
    pub fn production_list(&self) -> Vec<Commodity> {
        self.production.to_unit_list()
    }
}

/// A railroad company. Every copy of a line shares its bid and VP schedule.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum RailroadLine {
    #[strum(to_string = "Top Dog")]
    TopDog,
    #[strum(to_string = "Tycoon Railroad")]
    TycoonRailroad,
    #[strum(to_string = "Big Bear")]
    BigBear,
    #[strum(to_string = "Fat Cat")]
    FatCat,
    #[strum(to_string = "Sly Fox")]
    SlyFox,
    #[strum(to_string = "Skunk Works")]
    SkunkWorks,
}

impl RailroadLine {
    /// Lowest opening bid for a card of this line.
    #[must_use]
    pub const fn min_bid(self) -> u32 {
        match self {
            RailroadLine::TopDog => 6,
            RailroadLine::TycoonRailroad => 7,
            RailroadLine::BigBear => 5,
            RailroadLine::FatCat => 4,
            RailroadLine::SlyFox => 3,
            RailroadLine::SkunkWorks => 2,
        }
    }

    /// VP for the 1st, 2nd, 3rd and 4th card of this line owned by one player.
    #[must_use]
    pub const fn vp_schedule(self) -> [u32; 4] {
        match self {
            RailroadLine::TopDog => [4, 5, 6, 8],
            RailroadLine::TycoonRailroad => [4, 5, 7, 9],
            RailroadLine::BigBear => [3, 4, 6, 8],
            RailroadLine::FatCat => [3, 4, 5, 7],
            RailroadLine::SlyFox => [2, 3, 5, 7],
            RailroadLine::SkunkWorks => [2, 3, 4, 6],
        }
    }

    /// Smallest table this line is played at.
    #[must_use]
    pub const fn min_players(self) -> usize {
        match self {
            RailroadLine::SkunkWorks => 5,
            RailroadLine::TycoonRailroad => 4,
            RailroadLine::SlyFox => 3,
            _ => 2,
        }
    }
}

/// One railroad card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RailroadCard {
    pub id: CardId,
    pub line: RailroadLine,
    pub min_bid: u32,
    pub vp_schedule: [u32; 4],
}

impl RailroadCard {
    #[must_use]
    pub fn new(id: CardId, line: RailroadLine) -> Self {
        Self {
            id,
            line,
            min_bid: line.min_bid(),
            vp_schedule: line.vp_schedule(),
        }
    }

    /// Display name of the card's line.
    #[must_use]
    pub fn name(&self) -> String {
        self.line.to_string()
    }
}

/// One town card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TownCard {
    pub id: CardId,
    pub name: String,
    pub vp: u32,
    /// Exact commodities required.
    pub cost_specific: CommodityBundle,
    /// Alternative: this many commodities of any mix.
    pub cost_any: u32,
}

impl TownCard {
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, vp: u32, cost_specific: CommodityBundle, cost_any: u32) -> Self {
        Self {
            id,
            name: name.into(),
            vp,
            cost_specific,
            cost_any,
        }
    }
}

/// Identifier of a building tile.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum BuildingId {
    WheatFieldB,
    GrainFarmB,
    LumberYardB,
    SawMillB,
    CoalDepositB,
    CoalMineB,
    IronDepositB,
    IronMineB,
    ToolDieB,
    LoomB,
    VineyardB,
    GlassWorksB,
    MachineShopB,
    WaterMillB,
    LumberWheatTradingFirm,
    GoodsLuxuryTradingFirm,
    CoalIronTradingFirm,
    WarehouseX2,
    ConstructionCompany,
    FreightCompany,
    GovernorsMansion,
    RailBaron,
    Bank,
    AuctionHouse,
    Smuggler,
    BlackMarket,
    BrickWorks,
    MayorsOffice,
    TradingFloor,
    ExportCompany,
    CottageIndustryP,
    FactoryX2P,
}

impl BuildingId {
    /// Stable string key, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BuildingId::WheatFieldB => "wheat-field-b",
            BuildingId::GrainFarmB => "grain-farm-b",
            BuildingId::LumberYardB => "lumber-yard-b",
            BuildingId::SawMillB => "saw-mill-b",
            BuildingId::CoalDepositB => "coal-deposit-b",
            BuildingId::CoalMineB => "coal-mine-b",
            BuildingId::IronDepositB => "iron-deposit-b",
            BuildingId::IronMineB => "iron-mine-b",
            BuildingId::ToolDieB => "tool-die-b",
            BuildingId::LoomB => "loom-b",
            BuildingId::VineyardB => "vineyard-b",
            BuildingId::GlassWorksB => "glass-works-b",
            BuildingId::MachineShopB => "machine-shop-b",
            BuildingId::WaterMillB => "water-mill-b",
            BuildingId::LumberWheatTradingFirm => "lumber-wheat-trading-firm",
            BuildingId::GoodsLuxuryTradingFirm => "goods-luxury-trading-firm",
            BuildingId::CoalIronTradingFirm => "coal-iron-trading-firm",
            BuildingId::WarehouseX2 => "warehouse-x2",
            BuildingId::ConstructionCompany => "construction-company",
            BuildingId::FreightCompany => "freight-company",
            BuildingId::GovernorsMansion => "governors-mansion",
            BuildingId::RailBaron => "rail-baron",
            BuildingId::Bank => "bank",
            BuildingId::AuctionHouse => "auction-house",
            BuildingId::Smuggler => "smuggler",
            BuildingId::BlackMarket => "black-market",
            BuildingId::BrickWorks => "brick-works",
            BuildingId::MayorsOffice => "mayors-office",
            BuildingId::TradingFloor => "trading-floor",
            BuildingId::ExportCompany => "export-company",
            BuildingId::CottageIndustryP => "cottage-industry-p",
            BuildingId::FactoryX2P => "factory-x2-p",
        }
    }
}

impl std::fmt::Display for BuildingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static data for one building tile.
///
/// Every effect field is optional; a tile usually sets one or two. B/P tiles
/// (`bp_tag`) are mutually exclusive: a player's effects include only one of
/// them at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingTile {
    pub id: BuildingId,
    pub name: &'static str,
    pub cost: u32,
    pub description: &'static str,

    // === Production ===
    /// Extra units of a fixed commodity on every production.
    pub commodity_bonus: Option<(Commodity, u32)>,
    /// Extra units of any commodity on every production.
    pub any_commodity_bonus: Option<u32>,
    /// Raised cap on units taken from a production card.
    pub production_limit: Option<u32>,

    // === Limits ===
    pub hand_size: Option<usize>,
    pub storage_bonus: Option<u32>,

    // === Trade ===
    /// Earn $1 per unit of either commodity sold by another player.
    pub trading_firm: Option<[Commodity; 2]>,
    pub sell_price_bonus: Option<u32>,
    pub auction_commission: Option<u32>,
    pub town_cost_reduce: Option<u32>,
    pub trading_floor: bool,
    pub extra_building_purchase: bool,
    pub extra_sell_action: bool,

    // === End-game VP ===
    pub vp_per_town: Option<u32>,
    pub vp_per_railroad: Option<u32>,
    pub vp_per_20_money: Option<u32>,
    pub vp_per_building: Option<u32>,

    // === B/P ===
    pub bp_tag: bool,
    pub bp_level: Option<u8>,
    pub upgrade_cost: Option<u32>,
    pub bp_upgrade_to: Option<BuildingId>,
    pub bp_upgrade_from: Option<BuildingId>,
}

impl BuildingTile {
    /// Create a tile with no effects.
    #[must_use]
    pub fn new(id: BuildingId, name: &'static str, cost: u32, description: &'static str) -> Self {
        Self {
            id,
            name,
            cost,
            description,
            commodity_bonus: None,
            any_commodity_bonus: None,
            production_limit: None,
            hand_size: None,
            storage_bonus: None,
            trading_firm: None,
            sell_price_bonus: None,
            auction_commission: None,
            town_cost_reduce: None,
            trading_floor: false,
            extra_building_purchase: false,
            extra_sell_action: false,
            vp_per_town: None,
            vp_per_railroad: None,
            vp_per_20_money: None,
            vp_per_building: None,
            bp_tag: false,
            bp_level: None,
            upgrade_cost: None,
            bp_upgrade_to: None,
            bp_upgrade_from: None,
        }
    }

    /// Level-1 B/P side that upgrades to `to` for `upgrade_cost`.
    #[must_use]
    pub fn bp_front(mut self, to: BuildingId, upgrade_cost: u32) -> Self {
        self.bp_tag = true;
        self.bp_level = Some(1);
        self.upgrade_cost = Some(upgrade_cost);
        self.bp_upgrade_to = Some(to);
        self
    }

    /// Level-2 B/P side reached from `from`.
    #[must_use]
    pub fn bp_back(mut self, from: BuildingId) -> Self {
        self.bp_tag = true;
        self.bp_level = Some(2);
        self.bp_upgrade_from = Some(from);
        self
    }

    /// B/P-tagged tile without levels.
    #[must_use]
    pub fn bp_single(mut self) -> Self {
        self.bp_tag = true;
        self
    }

    #[must_use]
    pub fn with_commodity_bonus(mut self, commodity: Commodity, amount: u32) -> Self {
        self.commodity_bonus = Some((commodity, amount));
        self
    }

    #[must_use]
    pub fn with_any_commodity_bonus(mut self, amount: u32) -> Self {
        self.any_commodity_bonus = Some(amount);
        self
    }

    #[must_use]
    pub fn with_production_limit(mut self, limit: u32) -> Self {
        self.production_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_storage_bonus(mut self, bonus: u32) -> Self {
        self.storage_bonus = Some(bonus);
        self
    }

    #[must_use]
    pub fn with_trading_firm(mut self, first: Commodity, second: Commodity) -> Self {
        self.trading_firm = Some([first, second]);
        self
    }

    #[must_use]
    pub fn with_sell_price_bonus(mut self, bonus: u32) -> Self {
        self.sell_price_bonus = Some(bonus);
        self
    }

    #[must_use]
    pub fn with_auction_commission(mut self, commission: u32) -> Self {
        self.auction_commission = Some(commission);
        self
    }

    #[must_use]
    pub fn with_town_cost_reduce(mut self, reduce: u32) -> Self {
        self.town_cost_reduce = Some(reduce);
        self
    }

    #[must_use]
    pub fn with_trading_floor(mut self) -> Self {
        self.trading_floor = true;
        self
    }

    #[must_use]
    pub fn with_extra_building_purchase(mut self) -> Self {
        self.extra_building_purchase = true;
        self
    }

    #[must_use]
    pub fn with_extra_sell_action(mut self) -> Self {
        self.extra_sell_action = true;
        self
    }

    #[must_use]
    pub fn with_vp_per_town(mut self, vp: u32) -> Self {
        self.vp_per_town = Some(vp);
        self
    }

    #[must_use]
    pub fn with_vp_per_railroad(mut self, vp: u32) -> Self {
        self.vp_per_railroad = Some(vp);
        self
    }

    #[must_use]
    pub fn with_vp_per_20_money(mut self, vp: u32) -> Self {
        self.vp_per_20_money = Some(vp);
        self
    }

    #[must_use]
    pub fn with_vp_per_building(mut self, vp: u32) -> Self {
        self.vp_per_building = Some(vp);
        self
    }

    /// Is this a level-1 B/P tile that can be upgraded?
    #[must_use]
    pub fn is_upgradeable(&self) -> bool {
        self.bp_tag && self.bp_level == Some(1) && self.bp_upgrade_to.is_some()
    }

    /// Does this tile count toward a trading firm for `commodity`?
    #[must_use]
    pub fn trades(&self, commodity: Commodity) -> bool {
        self.trading_firm.is_some_and(|pair| pair.contains(&commodity))
    }
}
