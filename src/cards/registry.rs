//! Card registry for catalog lookup.
//!
//! The `CardRegistry` holds every static table the engine consumes: building
//! tiles by ID, the town list, and the production card templates. It is
//! built once per process and never mutated; `registry()` returns it.
//!
//! ```
//! use tycoon_engine::cards::{registry, BuildingId};
//!
//! let bank = registry().building(BuildingId::Bank).unwrap();
//! assert_eq!(bank.cost, 30);
//! ```

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::definition::{BuildingId, BuildingTile, CardId, TownCard};
use crate::core::{Commodity, CommodityBundle};

/// Printed yield and price increases of one production card design.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductionTemplate {
    pub production: CommodityBundle,
    pub price_increase: SmallVec<[Commodity; 2]>,
}

/// Registry of static catalog data.
#[derive(Clone, Debug)]
pub struct CardRegistry {
    buildings: FxHashMap<BuildingId, BuildingTile>,
    building_order: Vec<BuildingId>,
    towns: Vec<TownCard>,
    production_templates: Vec<ProductionTemplate>,
}

static REGISTRY: Lazy<CardRegistry> = Lazy::new(CardRegistry::standard);

/// The process-wide catalog.
#[must_use]
pub fn registry() -> &'static CardRegistry {
    &REGISTRY
}

impl CardRegistry {
    /// Build the standard catalog.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self {
            buildings: FxHashMap::default(),
            building_order: Vec::new(),
            towns: standard_towns(),
            production_templates: standard_production_templates(),
        };
        for tile in standard_buildings() {
            registry.register_building(tile);
        }
        registry
    }

    /// Register a building tile. A later tile with the same ID replaces the earlier one.
    fn register_building(&mut self, tile: BuildingTile) {
        if self.buildings.insert(tile.id, tile.clone()).is_none() {
            self.building_order.push(tile.id);
        }
    }

    /// Look up a building tile.
    #[must_use]
    pub fn building(&self, id: BuildingId) -> Option<&BuildingTile> {
        self.buildings.get(&id)
    }

    /// Iterate over every building tile in catalog order.
    pub fn buildings(&self) -> impl Iterator<Item = &BuildingTile> {
        self.building_order.iter().filter_map(|id| self.buildings.get(id))
    }

    /// Find building tiles matching a predicate, in catalog order.
    pub fn find_buildings<F>(&self, predicate: F) -> impl Iterator<Item = &BuildingTile>
    where
        F: Fn(&BuildingTile) -> bool,
    {
        self.buildings().filter(move |tile| predicate(tile))
    }

    /// Every town in catalog order.
    #[must_use]
    pub fn towns(&self) -> &[TownCard] {
        &self.towns
    }

    /// Every production card design in catalog order.
    #[must_use]
    pub fn production_templates(&self) -> &[ProductionTemplate] {
        &self.production_templates
    }

    #[must_use]
    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }
}

fn standard_buildings() -> Vec<BuildingTile> {
    use BuildingId as B;
    use Commodity::*;

    vec![
        BuildingTile::new(B::WheatFieldB, "Wheat Field (B)", 4, "+1 Wheat")
            .with_commodity_bonus(Wheat, 1)
            .bp_front(B::GrainFarmB, 5),
        BuildingTile::new(B::GrainFarmB, "Grain Farm (B)", 9, "+2 Wheat")
            .with_commodity_bonus(Wheat, 2)
            .bp_back(B::WheatFieldB),
        BuildingTile::new(B::LumberYardB, "Lumber Yard (B)", 4, "+1 Wood")
            .with_commodity_bonus(Wood, 1)
            .bp_front(B::SawMillB, 5),
        BuildingTile::new(B::SawMillB, "Saw Mill (B)", 9, "+2 Wood")
            .with_commodity_bonus(Wood, 2)
            .bp_back(B::LumberYardB),
        BuildingTile::new(B::CoalDepositB, "Coal Deposit (B)", 5, "+1 Coal")
            .with_commodity_bonus(Coal, 1)
            .bp_front(B::CoalMineB, 7),
        BuildingTile::new(B::CoalMineB, "Coal Mine (B)", 12, "+2 Coal")
            .with_commodity_bonus(Coal, 2)
            .bp_back(B::CoalDepositB),
        BuildingTile::new(B::IronDepositB, "Iron Deposit (B)", 5, "+1 Iron")
            .with_commodity_bonus(Iron, 1)
            .bp_front(B::IronMineB, 7),
        BuildingTile::new(B::IronMineB, "Iron Mine (B)", 12, "+2 Iron")
            .with_commodity_bonus(Iron, 2)
            .bp_back(B::IronDepositB),
        BuildingTile::new(B::ToolDieB, "Tool & Die (B)", 6, "+1 Goods")
            .with_commodity_bonus(Goods, 1)
            .bp_front(B::LoomB, 9),
        BuildingTile::new(B::LoomB, "Loom (B)", 15, "+2 Goods")
            .with_commodity_bonus(Goods, 2)
            .bp_back(B::ToolDieB),
        BuildingTile::new(B::VineyardB, "Vineyard (B)", 6, "+1 Luxury")
            .with_commodity_bonus(Luxury, 1)
            .bp_front(B::GlassWorksB, 9),
        BuildingTile::new(B::GlassWorksB, "Glass Works (B)", 15, "+2 Luxury")
            .with_commodity_bonus(Luxury, 2)
            .bp_back(B::VineyardB),
        BuildingTile::new(B::MachineShopB, "Machine Shop (B)", 30, "+1 Commodity of your choice")
            .with_any_commodity_bonus(1)
            .bp_front(B::WaterMillB, 30),
        BuildingTile::new(B::WaterMillB, "Water Mill (B)", 60, "+2 Commodities of your choice")
            .with_any_commodity_bonus(2)
            .bp_back(B::MachineShopB),
        BuildingTile::new(
            B::LumberWheatTradingFirm,
            "Lumber/ Wheat Trading Firm",
            10,
            "You get $1/ unit of Wood or Wheat that is sold by any player.",
        )
        .with_trading_firm(Wood, Wheat),
        BuildingTile::new(
            B::GoodsLuxuryTradingFirm,
            "Goods Luxury Trading Firm",
            10,
            "You get $1/ unit of Goods or Luxury that is sold by any player.",
        )
        .with_trading_firm(Goods, Luxury),
        BuildingTile::new(
            B::CoalIronTradingFirm,
            "Coal / Iron Trading Firm",
            10,
            "You get $1/ unit of Coal or Iron that is sold by any player.",
        )
        .with_trading_firm(Coal, Iron),
        BuildingTile::new(B::WarehouseX2, "Warehouse", 10, "You may store an extra 3 Commodity Tokens.")
            .with_storage_bonus(3),
        BuildingTile::new(
            B::ConstructionCompany,
            "Construction Company",
            20,
            "You may perform two Purchase Building actions in one turn.",
        )
        .with_extra_building_purchase(),
        BuildingTile::new(B::FreightCompany, "Freight Company", 25, "You may sell 2 Commodities in one turn.")
            .with_extra_sell_action(),
        BuildingTile::new(
            B::GovernorsMansion,
            "Governor's Mansion",
            30,
            "Each Town Card you own is worth +1 VP at the end of the game.",
        )
        .with_vp_per_town(1),
        BuildingTile::new(
            B::RailBaron,
            "Rail Baron",
            30,
            "Each of your Railroad Cards is worth +1 VP at the end of the game.",
        )
        .with_vp_per_railroad(1),
        BuildingTile::new(B::Bank, "Bank", 30, "Each $20 that you have at the end of the game is worth +1 VP.")
            .with_vp_per_20_money(1),
        BuildingTile::new(
            B::AuctionHouse,
            "Auction House",
            15,
            "You get $5 commission for each auction that is held. This is paid from the bank, not the player.",
        )
        .with_auction_commission(5),
        BuildingTile::new(
            B::Smuggler,
            "Smuggler",
            20,
            "Your hand limit of Price & Production cards is increased to 4.",
        )
        .with_hand_size(4),
        BuildingTile::new(
            B::BlackMarket,
            "Black Market",
            30,
            "Your hand limit of Price & Production cards is increased to 5.",
        )
        .with_hand_size(5),
        BuildingTile::new(B::BrickWorks, "Brick Works", 25, "You may build Towns with one fewer Commodity.")
            .with_town_cost_reduce(1),
        BuildingTile::new(
            B::MayorsOffice,
            "Mayor's Office",
            30,
            "Each Building you own is worth +1 VP at the end of the game.",
        )
        .with_vp_per_building(1),
        BuildingTile::new(
            B::TradingFloor,
            "Trading Floor",
            15,
            "When using the 'Produce' action, you may also buy any number of one Commodity currently \
             owned by one other player at the current market price (before the price is affected by \
             the Price & Production card). They may not refuse.",
        )
        .with_trading_floor(),
        BuildingTile::new(
            B::ExportCompany,
            "Export Company",
            30,
            "When selling a Commodity, you may increase the price of that Commodity by $3 before \
             selling. Maximum Price is limited to the value shown on the board for that Commodity.",
        )
        .with_sell_price_bonus(3),
        BuildingTile::new(
            B::CottageIndustryP,
            "Cottage Industry (P)",
            30,
            "You may produce up to four (4) of the Commodity Tokens shown in the Production area of a \
             Price/ Production Card.",
        )
        .with_production_limit(4)
        .bp_single(),
        BuildingTile::new(
            B::FactoryX2P,
            "Factory (P)",
            40,
            "You may produce up to five (5) of the Commodity Tokens shown in the Production area of a \
             Price/ Production Card.",
        )
        .with_production_limit(5)
        .bp_single(),
    ]
}

fn standard_towns() -> Vec<TownCard> {
    use Commodity::*;

    let rows: [(&str, u32, Commodity, u32, u32); 16] = [
        ("Beaver Ford", 2, Wood, 2, 4),
        ("Bridgewater", 2, Wheat, 2, 4),
        ("Molehill", 2, Iron, 2, 4),
        ("Black Friar", 2, Coal, 2, 4),
        ("Foxwoods", 3, Wood, 3, 5),
        ("Trinity", 3, Goods, 3, 5),
        ("Newgate", 3, Wheat, 3, 4),
        ("Marketshire", 3, Luxury, 3, 5),
        ("Badger Downs", 4, Wheat, 4, 6),
        ("Wild Grove", 4, Wood, 4, 6),
        ("Dunmoor", 4, Coal, 4, 6),
        ("Bishop's Glen", 4, Iron, 4, 6),
        ("Land's End", 5, Luxury, 5, 8),
        ("Drover Crossing", 5, Goods, 5, 8),
        ("Canterbury Woods", 5, Wood, 5, 8),
        ("River Ridge", 5, Wheat, 5, 8),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, &(name, vp, commodity, count, any))| {
            TownCard::new(
                CardId::new(i as u32 + 1),
                name,
                vp,
                CommodityBundle::single(commodity, count),
                any,
            )
        })
        .collect()
}

fn standard_production_templates() -> Vec<ProductionTemplate> {
    use Commodity::*;

    let rows: [(&[(Commodity, u32)], &[Commodity]); 35] = [
        (&[(Wheat, 2), (Wood, 1)], &[Wheat, Wood]),
        (&[(Wheat, 1), (Coal, 2)], &[Coal]),
        (&[(Wood, 2), (Iron, 1)], &[Wood, Iron]),
        (&[(Iron, 2), (Coal, 1)], &[Iron]),
        (&[(Goods, 2), (Luxury, 1)], &[Goods, Luxury]),
        (&[(Wheat, 1), (Goods, 1), (Luxury, 1)], &[Luxury]),
        (&[(Wood, 1), (Iron, 1), (Coal, 1)], &[Iron, Coal]),
        (&[(Wheat, 1), (Wood, 1), (Goods, 1)], &[Wheat, Goods]),
        (&[(Coal, 2), (Goods, 1)], &[Coal, Goods]),
        (&[(Wheat, 2), (Iron, 1)], &[Wheat]),
        (&[(Wood, 1), (Coal, 1), (Luxury, 1)], &[Wood, Luxury]),
        (&[(Iron, 1), (Goods, 2)], &[Iron, Goods]),
        (&[(Wheat, 1), (Coal, 2)], &[Wheat, Coal]),
        (&[(Wood, 2), (Luxury, 1)], &[Wood]),
        (&[(Iron, 1), (Coal, 1), (Goods, 1)], &[Coal]),
        (&[(Wheat, 1), (Wood, 1), (Iron, 1)], &[Wheat, Wood]),
        (&[(Coal, 1), (Goods, 1), (Luxury, 1)], &[Luxury]),
        (&[(Wheat, 2), (Coal, 1)], &[Wheat, Coal]),
        (&[(Wood, 1), (Iron, 2)], &[Wood, Iron]),
        (&[(Goods, 1), (Luxury, 2)], &[Goods, Luxury]),
        (&[(Wheat, 1), (Wood, 1), (Coal, 1)], &[Wood]),
        (&[(Iron, 1), (Coal, 1), (Luxury, 1)], &[Iron, Luxury]),
        (&[(Wheat, 1), (Goods, 2)], &[Wheat, Goods]),
        (&[(Wood, 2), (Goods, 1)], &[Wood, Goods]),
        (&[(Iron, 2), (Luxury, 1)], &[Iron, Luxury]),
        // Four- and five-unit cards
        (&[(Wood, 3), (Iron, 1), (Wheat, 1)], &[Wood, Iron]),
        (&[(Wheat, 2), (Coal, 2), (Goods, 1)], &[Wheat, Coal]),
        (&[(Iron, 2), (Coal, 1), (Luxury, 1)], &[Iron, Luxury]),
        (&[(Goods, 2), (Luxury, 2), (Wheat, 1)], &[Goods, Luxury]),
        (&[(Coal, 2), (Wood, 2), (Iron, 1)], &[Coal, Wood]),
        (&[(Wheat, 2), (Wood, 1), (Goods, 1), (Luxury, 1)], &[Wheat, Goods]),
        (&[(Iron, 1), (Coal, 1), (Goods, 1), (Luxury, 1)], &[Iron, Coal]),
        (&[(Wood, 2), (Iron, 2), (Coal, 1)], &[Wood, Iron]),
        (&[(Wheat, 3), (Wood, 1), (Coal, 1)], &[Wheat]),
        (&[(Luxury, 2), (Goods, 2), (Coal, 1)], &[Luxury, Goods]),
    ];

    rows.iter()
        .map(|&(production, price_increase)| ProductionTemplate {
            production: CommodityBundle::from_pairs(production),
            price_increase: SmallVec::from_slice(price_increase),
        })
        .collect()
}
