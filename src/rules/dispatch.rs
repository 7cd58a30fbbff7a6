//! Routing a `GameAction` to its transition.

use crate::core::{GameAction, GameState, Rejection};

use super::{
    buy_building, buy_town, discard, end_turn, pass_auction, place_bid, produce, sell,
    set_active_bp_building, start_auction, upgrade_b_building,
};

/// Apply one player action.
///
/// The action is taken to come from `state.current_player`; seat checks
/// belong to the transport layer.
pub fn apply_action(state: &GameState, action: &GameAction) -> Result<GameState, Rejection> {
    let result = match action {
        GameAction::Production {
            card_index,
            commodities_to_take,
            trading_floor_purchase,
        } => produce(
            state,
            *card_index,
            commodities_to_take.as_deref(),
            trading_floor_purchase.as_ref(),
        ),
        GameAction::Sell {
            commodity,
            quantity,
            use_export_company,
        } => sell(state, *commodity, *quantity, *use_export_company),
        GameAction::Discard { commodity } => discard(state, *commodity),
        GameAction::BuyBuilding { building_index } => buy_building(state, *building_index),
        GameAction::UpgradeBBuilding { building_id } => upgrade_b_building(state, *building_id),
        GameAction::SetActiveBpBuilding { building_id } => {
            set_active_bp_building(state, *building_id)
        }
        GameAction::BuyTown {
            use_specific,
            commodities_to_spend,
        } => buy_town(state, *use_specific, commodities_to_spend.as_ref()),
        GameAction::StartAuction { railroad_index } => start_auction(state, *railroad_index),
        GameAction::PlaceBid { amount } => place_bid(state, *amount),
        GameAction::PassAuction => pass_auction(state),
        GameAction::EndTurn => end_turn(state),
    };

    match &result {
        Ok(next) => tracing::debug!(
            target: "tycoon::turn",
            action = action.kind(),
            player = %state.current_player,
            phase = %next.phase,
            "action.applied"
        ),
        Err(reason) => tracing::debug!(
            target: "tycoon::turn",
            action = action.kind(),
            player = %state.current_player,
            %reason,
            "action.rejected"
        ),
    }
    result
}

/// Apply `action`, or hand back an unchanged copy of `state` if it is rejected.
#[must_use]
pub fn apply_or_keep(state: &GameState, action: &GameAction) -> GameState {
    apply_action(state, action).unwrap_or_else(|_| state.clone())
}
