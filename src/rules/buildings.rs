//! Buying, upgrading and selecting buildings.

use crate::cards::{registry, BuildingId};
use crate::core::{GameState, Phase, Rejection};

use super::effects::{allows_extra_building_purchase, max_hand_size};
use super::turn::draw_cards;
use super::{require_turn_action, successor, TurnAction};

/// Purchases allowed in one turn with a Construction Company.
const CONSTRUCTION_PURCHASE_LIMIT: u32 = 2;

/// Buy the tile at `building_index` of the offer.
///
/// The first B/P tile a player buys becomes their live one. A hand-size
/// tile draws production cards up to the new limit straight away.
pub fn buy_building(state: &GameState, building_index: usize) -> Result<GameState, Rejection> {
    require_turn_action(state, TurnAction::BuyBuilding)?;
    let tile = state
        .building_offer
        .get(building_index)
        .and_then(|&id| registry().building(id))
        .ok_or(Rejection::InvalidOfferIndex(building_index))?;
    let money = state.current().money;
    if money < tile.cost {
        return Err(Rejection::InsufficientFunds {
            needed: tile.cost,
            available: money,
        });
    }

    let mut next = successor(state);
    let buyer = next.current_player;
    let player = next.current_mut();
    player.money -= tile.cost;
    player.buildings.push_back(tile.id);
    if tile.bp_tag && player.active_bp_building.is_none() {
        player.active_bp_building = Some(tile.id);
    }
    next.building_offer.remove(building_index);

    next.building_purchases_this_turn += 1;
    let construction = allows_extra_building_purchase(next.current());
    next.action_taken_this_turn =
        !(construction && next.building_purchases_this_turn < CONSTRUCTION_PURCHASE_LIMIT);

    if tile.hand_size.is_some() {
        let limit = max_hand_size(next.current());
        let missing = limit.saturating_sub(next.current().hand.len());
        draw_cards(&mut next, buyer, missing);
    }

    tracing::debug!(
        target: "tycoon::buildings",
        player = %buyer,
        building = %tile.id,
        cost = tile.cost,
        "building.bought"
    );
    Ok(next)
}

/// Flip an owned level-1 B/P tile to its level-2 side, in place.
pub fn upgrade_b_building(state: &GameState, building_id: BuildingId) -> Result<GameState, Rejection> {
    require_turn_action(state, TurnAction::UpgradeBuilding)?;
    let player = state.current();
    let position = player
        .buildings
        .iter()
        .position(|&id| id == building_id)
        .ok_or(Rejection::NotOwned(building_id))?;
    let tile = registry()
        .building(building_id)
        .filter(|t| t.is_upgradeable())
        .ok_or(Rejection::NotUpgradeable(building_id))?;
    let upgraded = tile
        .bp_upgrade_to
        .ok_or(Rejection::NotUpgradeable(building_id))?;
    let cost = tile.upgrade_cost.unwrap_or(0);
    if player.money < cost {
        return Err(Rejection::InsufficientFunds {
            needed: cost,
            available: player.money,
        });
    }

    let mut next = successor(state);
    let player = next.current_mut();
    player.money -= cost;
    player.buildings.set(position, upgraded);
    if player.active_bp_building == Some(building_id) {
        player.active_bp_building = Some(upgraded);
    }
    next.action_taken_this_turn = true;

    tracing::debug!(
        target: "tycoon::buildings",
        player = %next.current_player,
        from = %building_id,
        to = %upgraded,
        "building.upgraded"
    );
    Ok(next)
}

/// Choose which owned B/P building is live.
///
/// Free, and allowed in any phase until the game is over.
pub fn set_active_bp_building(state: &GameState, building_id: BuildingId) -> Result<GameState, Rejection> {
    if state.phase == Phase::GameOver {
        return Err(Rejection::GameOver);
    }
    if !state.current().owns(building_id) {
        return Err(Rejection::NotOwned(building_id));
    }
    if !registry().building(building_id).is_some_and(|t| t.bp_tag) {
        return Err(Rejection::NotBpBuilding(building_id));
    }

    let mut next = successor(state);
    next.current_mut().active_bp_building = Some(building_id);
    Ok(next)
}
