//! Derived values: building effects, limits and totals.
//!
//! Every effect lookup goes through `effective_buildings`, which keeps all
//! non-B/P tiles and exactly one B/P tile: the player's selected one if it is
//! owned, otherwise the first B/P tile they bought. Owning several B/P tiles
//! therefore never stacks their effects.
//!
//! Scoring is the exception: end-game VP counts every owned tile.

use smallvec::SmallVec;

use crate::cards::{registry, BuildingId, BuildingTile, ProductionCard};
use crate::core::{Commodity, CommodityBundle, Player};

/// Units taken from a production card without a production building.
pub const BASE_PRODUCTION: u32 = 3;
/// Hand limit without a hand-size building.
pub const BASE_HAND_SIZE: usize = 3;
/// Storage before buildings.
pub const BASE_STORAGE: u32 = 10;

/// Tiles whose effects currently apply to `player`.
#[must_use]
pub fn effective_buildings(player: &Player) -> SmallVec<[&'static BuildingTile; 8]> {
    let owned = player.buildings.iter().filter_map(|&id| registry().building(id));

    let mut effective: SmallVec<[&'static BuildingTile; 8]> = SmallVec::new();
    let mut first_bp = None;
    let mut active_bp = None;
    for tile in owned {
        if !tile.bp_tag {
            effective.push(tile);
            continue;
        }
        if first_bp.is_none() {
            first_bp = Some(tile);
        }
        if Some(tile.id) == player.active_bp_building {
            active_bp = Some(tile);
        }
    }
    if let Some(tile) = active_bp.or(first_bp) {
        effective.push(tile);
    }
    effective
}

/// The B/P building whose effect is live, if the player owns any.
#[must_use]
pub fn live_bp_building(player: &Player) -> Option<BuildingId> {
    effective_buildings(player)
        .iter()
        .find(|tile| tile.bp_tag)
        .map(|tile| tile.id)
}

/// First effective tile for which `effect` yields a value.
fn find_effect<T>(player: &Player, effect: impl Fn(&BuildingTile) -> Option<T>) -> Option<T> {
    effective_buildings(player).iter().find_map(|tile| effect(tile))
}

fn has_effect(player: &Player, effect: impl Fn(&BuildingTile) -> bool) -> bool {
    effective_buildings(player).iter().any(|tile| effect(tile))
}

/// Units a player takes from one production card: 3, 4 or 5.
#[must_use]
pub fn max_production(player: &Player) -> u32 {
    match find_effect(player, |t| t.production_limit) {
        Some(5) => 5,
        Some(4) => 4,
        _ => BASE_PRODUCTION,
    }
}

/// Hand limit: 3, 4 or 5.
#[must_use]
pub fn max_hand_size(player: &Player) -> usize {
    let effective = effective_buildings(player);
    if effective.iter().any(|t| t.hand_size == Some(5)) {
        5
    } else if effective.iter().any(|t| t.hand_size == Some(4)) {
        4
    } else {
        BASE_HAND_SIZE
    }
}

/// Storage capacity: 10, plus one per owned building, plus a warehouse bonus.
#[must_use]
pub fn max_storage(player: &Player) -> u32 {
    BASE_STORAGE
        + player.buildings.len() as u32
        + find_effect(player, |t| t.storage_bonus).unwrap_or(0)
}

/// Total commodity units in a bundle.
#[must_use]
pub fn total_commodities(commodities: &CommodityBundle) -> u32 {
    commodities.total()
}

/// Is the player holding more than they can store?
#[must_use]
pub fn is_over_capacity(player: &Player) -> bool {
    total_commodities(&player.commodities) > max_storage(player)
}

/// A card's yield, one entry per unit, in commodity order.
#[must_use]
pub fn production_list(card: &ProductionCard) -> Vec<Commodity> {
    card.production_list()
}

#[must_use]
pub fn commodity_bonus(player: &Player) -> Option<(Commodity, u32)> {
    find_effect(player, |t| t.commodity_bonus)
}

#[must_use]
pub fn any_commodity_bonus(player: &Player) -> Option<u32> {
    find_effect(player, |t| t.any_commodity_bonus)
}

#[must_use]
pub fn town_cost_reduce(player: &Player) -> u32 {
    find_effect(player, |t| t.town_cost_reduce).unwrap_or(0)
}

#[must_use]
pub fn sell_price_bonus(player: &Player) -> Option<u32> {
    find_effect(player, |t| t.sell_price_bonus)
}

#[must_use]
pub fn auction_commission(player: &Player) -> Option<u32> {
    find_effect(player, |t| t.auction_commission)
}

#[must_use]
pub fn has_trading_floor(player: &Player) -> bool {
    has_effect(player, |t| t.trading_floor)
}

#[must_use]
pub fn has_trading_firm_for(player: &Player, commodity: Commodity) -> bool {
    has_effect(player, |t| t.trades(commodity))
}

#[must_use]
pub fn allows_extra_sell(player: &Player) -> bool {
    has_effect(player, |t| t.extra_sell_action)
}

#[must_use]
pub fn allows_extra_building_purchase(player: &Player) -> bool {
    has_effect(player, |t| t.extra_building_purchase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with(buildings: &[BuildingId]) -> Player {
        let mut player = Player::new("Test", 0);
        player.buildings = buildings.iter().copied().collect();
        player
    }

    #[test]
    fn test_baselines() {
        let player = player_with(&[]);
        assert_eq!(max_production(&player), 3);
        assert_eq!(max_hand_size(&player), 3);
        assert_eq!(max_storage(&player), 10);
        assert!(effective_buildings(&player).is_empty());
    }

    #[test]
    fn test_first_bp_building_is_live_by_default() {
        let player = player_with(&[BuildingId::WheatFieldB, BuildingId::LumberYardB, BuildingId::Bank]);

        let ids: Vec<_> = effective_buildings(&player).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![BuildingId::Bank, BuildingId::WheatFieldB]);
        assert_eq!(commodity_bonus(&player), Some((Commodity::Wheat, 1)));
    }

    #[test]
    fn test_selected_bp_building_replaces_default() {
        let mut player = player_with(&[BuildingId::WheatFieldB, BuildingId::LumberYardB]);
        player.active_bp_building = Some(BuildingId::LumberYardB);

        assert_eq!(commodity_bonus(&player), Some((Commodity::Wood, 1)));
        assert_eq!(live_bp_building(&player), Some(BuildingId::LumberYardB));
    }

    #[test]
    fn test_unowned_selection_falls_back_to_first() {
        let mut player = player_with(&[BuildingId::VineyardB]);
        player.active_bp_building = Some(BuildingId::LoomB);

        assert_eq!(live_bp_building(&player), Some(BuildingId::VineyardB));
    }

    #[test]
    fn test_factory_only_counts_when_live() {
        let mut player = player_with(&[BuildingId::WheatFieldB, BuildingId::FactoryX2P]);
        assert_eq!(max_production(&player), 3);

        player.active_bp_building = Some(BuildingId::FactoryX2P);
        assert_eq!(max_production(&player), 5);
        assert_eq!(commodity_bonus(&player), None);
    }

    #[test]
    fn test_hand_size_prefers_largest() {
        let player = player_with(&[BuildingId::Smuggler, BuildingId::BlackMarket]);
        assert_eq!(max_hand_size(&player), 5);
    }

    #[test]
    fn test_storage_counts_every_building() {
        let player = player_with(&[BuildingId::Bank, BuildingId::WarehouseX2, BuildingId::WheatFieldB]);
        assert_eq!(max_storage(&player), 10 + 3 + 3);
    }

    #[test]
    fn test_is_over_capacity() {
        let mut player = player_with(&[]);
        player.commodities = CommodityBundle::single(Commodity::Wheat, 10);
        assert!(!is_over_capacity(&player));

        player.commodities.add(Commodity::Coal, 1);
        assert!(is_over_capacity(&player));
    }
}
