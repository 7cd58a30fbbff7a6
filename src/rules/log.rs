//! One-line, human-readable descriptions of actions for a game log.

use std::fmt::Display;

use crate::cards::registry;
use crate::core::{AuctionResult, GameAction, GameState};

/// Describe `action`.
///
/// `before` is the state the action was applied to and `after` the result.
/// Card and tile names are looked up in `before` when given, since the action
/// may have moved them out of the offer or hand.
#[must_use]
pub fn format_action_message(action: &GameAction, after: &GameState, before: Option<&GameState>) -> String {
    let state = before.unwrap_or(after);
    match action {
        GameAction::Production {
            card_index,
            commodities_to_take,
            trading_floor_purchase,
        } => {
            let Some(card) = state.current().hand.get(*card_index) else {
                return "Played production card".to_string();
            };
            let taken = match commodities_to_take.as_deref() {
                Some(units) if !units.is_empty() => join(units.iter()),
                _ => "commodities".to_string(),
            };
            let raised = if card.price_increase.is_empty() {
                "nothing".to_string()
            } else {
                join(card.price_increase.iter())
            };
            let floor = trading_floor_purchase
                .filter(|p| p.quantity > 0)
                .and_then(|p| state.player(p.from_player).map(|seller| (p, seller)))
                .map(|(p, seller)| {
                    format!(
                        "; bought {} {} from {} (Trading Floor)",
                        p.quantity, p.commodity, seller.name
                    )
                })
                .unwrap_or_default();
            format!("Played production card: took {taken}, raised {raised} by $1{floor}")
        }
        GameAction::Sell {
            commodity, quantity, ..
        } => format!("Sold {quantity} {commodity}"),
        GameAction::Discard { commodity } => format!("Discarded {commodity}"),
        GameAction::BuyBuilding { building_index } => state
            .building_offer
            .get(*building_index)
            .and_then(|&id| registry().building(id))
            .map_or_else(
                || "Bought building".to_string(),
                |tile| format!("Bought {} for ${}", tile.name, tile.cost),
            ),
        GameAction::UpgradeBBuilding { building_id } => registry()
            .building(*building_id)
            .and_then(|tile| tile.bp_upgrade_to)
            .and_then(|id| registry().building(id))
            .map_or_else(
                || "Upgraded B building".to_string(),
                |level2| format!("Upgraded to {}", level2.name),
            ),
        GameAction::SetActiveBpBuilding { building_id } => registry()
            .building(*building_id)
            .map_or_else(
                || "Switched active building".to_string(),
                |tile| format!("Switched to {}", tile.name),
            ),
        GameAction::BuyTown { use_specific, .. } => match &state.current_town {
            Some(town) => {
                let method = if *use_specific {
                    "specific commodities"
                } else {
                    "any commodities"
                };
                format!("Bought {} ({method})", town.name)
            }
            None => "Bought town".to_string(),
        },
        GameAction::StartAuction { railroad_index } => state
            .railroad_offer
            .get(*railroad_index)
            .map_or_else(
                || "Started auction".to_string(),
                |railroad| format!("Started auction for {}", railroad.name()),
            ),
        GameAction::PlaceBid { amount } => format!("Bid ${amount}"),
        GameAction::PassAuction => "Passed on auction".to_string(),
        GameAction::EndTurn => "Ended turn".to_string(),
    }
}

/// "<winner> won <railroad> for $<amount>".
#[must_use]
pub fn format_auction_result(state: &GameState, result: &AuctionResult) -> String {
    let winner = state
        .player(result.winner)
        .map_or_else(|| result.winner.to_string(), |p| p.name.clone());
    format!("{winner} won {} for ${}", result.railroad.name(), result.amount)
}

fn join<T: Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}
