//! The state-transition engine.
//!
//! Every transition takes the current `GameState` by reference and returns
//! either the next state or a `Rejection`. The input is never modified, so a
//! caller that keeps the previous value already has one-step undo.
//!
//! ## Modules
//!
//! - `effects`: derived values (effective buildings, limits, totals)
//! - `setup`: `init_game`
//! - `production`, `market`, `buildings`, `towns`: the main turn actions
//! - `auction`: the railroad auction sub-protocol
//! - `turn`: end of turn, drawing, discard-down and game end
//! - `scoring`: VP and winner
//! - `dispatch`: `apply_action` over the closed `GameAction` set
//! - `log`: human-readable action messages

pub mod auction;
pub mod buildings;
pub mod dispatch;
pub mod effects;
pub mod log;
pub mod market;
pub mod production;
pub mod scoring;
pub mod setup;
pub mod towns;
pub mod turn;

pub use auction::{pass_auction, place_bid, start_auction};
pub use buildings::{buy_building, set_active_bp_building, upgrade_b_building};
pub use dispatch::{apply_action, apply_or_keep};
pub use effects::{
    effective_buildings, max_hand_size, max_production, max_storage, production_list,
    total_commodities,
};
pub use log::{format_action_message, format_auction_result};
pub use market::{discard, sell};
pub use production::produce;
pub use scoring::{compute_scores, get_winner, player_vp, PlayerScore};
pub use setup::{init_game, init_game_with_config};
pub use towns::buy_town;
pub use turn::end_turn;

use crate::core::{GameState, Phase, Rejection};

/// Main actions, each limited to one per turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TurnAction {
    Production,
    Sell,
    BuyBuilding,
    UpgradeBuilding,
    BuyTown,
    StartAuction,
}

pub(crate) fn require_phase(state: &GameState, expected: Phase) -> Result<(), Rejection> {
    if state.phase == expected {
        return Ok(());
    }
    if state.phase == Phase::GameOver {
        return Err(Rejection::GameOver);
    }
    Err(Rejection::WrongPhase {
        expected,
        actual: state.phase,
    })
}

/// Can the current player take this main action now?
///
/// A Freight Company allowance leaves room for one more sale only, and a
/// Construction Company allowance for one more building purchase only.
pub(crate) fn require_turn_action(state: &GameState, action: TurnAction) -> Result<(), Rejection> {
    require_phase(state, Phase::Playing)?;
    if state.action_taken_this_turn {
        return Err(Rejection::ActionAlreadyTaken);
    }
    if state.sell_actions_this_turn > 0 && action != TurnAction::Sell {
        return Err(Rejection::ActionNotAllowed("only a second sale may follow a sale"));
    }
    if state.building_purchases_this_turn > 0 && action != TurnAction::BuyBuilding {
        return Err(Rejection::ActionNotAllowed(
            "only a second building purchase may follow a purchase",
        ));
    }
    Ok(())
}

/// Start building the successor of `state`.
pub(crate) fn successor(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.last_auction_result = None;
    next
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::cards::BuildingId;
    use crate::core::{Commodity, CommodityBundle, GameState, PlayerId};

    use super::init_game;

    /// A 3-player game with empty inventories and plenty of money.
    pub fn fresh_game() -> GameState {
        let mut state = init_game(3, &["A", "B", "C"], 1234).unwrap();
        for (_, player) in state.players.iter_mut() {
            player.commodities = CommodityBundle::new();
            player.money = 100;
        }
        state
    }

    pub fn give(state: &mut GameState, seat: u8, commodity: Commodity, count: u32) {
        state.players[PlayerId::new(seat)].commodities.add(commodity, count);
    }

    pub fn own(state: &mut GameState, seat: u8, building: BuildingId) {
        state.players[PlayerId::new(seat)].buildings.push_back(building);
    }
}
