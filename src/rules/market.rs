//! Selling to the market and discarding over capacity.

use crate::core::{Commodity, GameState, Phase, Rejection};

use super::effects::{allows_extra_sell, has_trading_firm_for, is_over_capacity, sell_price_bonus};
use super::{require_phase, require_turn_action, successor, TurnAction};

/// Sales allowed in one turn with a Freight Company.
const FREIGHT_SELL_LIMIT: u32 = 2;

/// Sell up to `quantity` units of `commodity`.
///
/// Sells what the player holds if they ask for more. The price is the
/// market price before the sale, plus the Export Company bonus when
/// `use_export_company` is set (capped at the commodity's maximum). The
/// market then drops by the quantity sold, and every other player with a
/// matching trading firm earns $1 per unit.
pub fn sell(
    state: &GameState,
    commodity: Commodity,
    quantity: u32,
    use_export_company: bool,
) -> Result<GameState, Rejection> {
    require_turn_action(state, TurnAction::Sell)?;
    let seller = state.current_player;
    let held = state.current().commodities.get(commodity);
    let sold = quantity.min(held);
    if sold == 0 {
        return Err(Rejection::NothingToSell(commodity));
    }

    let mut price = state.market.price(commodity);
    if use_export_company {
        let bonus = sell_price_bonus(state.current())
            .ok_or(Rejection::MissingBuilding("export company"))?;
        price = (price + bonus).min(commodity.max_price());
    }

    let mut next = successor(state);
    let player = next.current_mut();
    player.commodities.set(commodity, held - sold);
    player.money += price * sold;
    next.market.lower(commodity, sold);

    for (id, other) in next.players.iter_mut() {
        if id != seller && has_trading_firm_for(other, commodity) {
            other.money += sold;
        }
    }

    next.sell_actions_this_turn += 1;
    let freight = allows_extra_sell(next.current());
    next.action_taken_this_turn = !(freight && next.sell_actions_this_turn < FREIGHT_SELL_LIMIT);

    tracing::debug!(
        target: "tycoon::market",
        player = %seller,
        %commodity,
        sold,
        price,
        "market.sold"
    );
    Ok(next)
}

/// Drop one unit while over storage capacity.
///
/// Play resumes once the player is back within capacity.
pub fn discard(state: &GameState, commodity: Commodity) -> Result<GameState, Rejection> {
    require_phase(state, Phase::DiscardDown)?;

    let mut next = successor(state);
    next.current_mut()
        .commodities
        .remove(commodity, 1)
        .map_err(|available| Rejection::InsufficientCommodity {
            commodity,
            available,
            requested: 1,
        })?;

    if !is_over_capacity(next.current()) {
        next.phase = Phase::Playing;
        tracing::debug!(
            target: "tycoon::turn",
            player = %next.current_player,
            "discard_down.resolved"
        );
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::BuildingId;
    use crate::core::PlayerId;
    use crate::rules::test_support::{fresh_game, give, own};

    #[test]
    fn test_sell_pays_pre_sale_price_and_floors_market() {
        let mut state = fresh_game();
        give(&mut state, 0, Commodity::Goods, 5);

        let next = sell(&state, Commodity::Goods, 5, false).unwrap();

        assert_eq!(next.current().money, 100 + 15);
        assert_eq!(next.market.price(Commodity::Goods), 3);
        assert!(next.action_taken_this_turn);
    }

    #[test]
    fn test_sell_clamps_to_holdings() {
        let mut state = fresh_game();
        give(&mut state, 0, Commodity::Wheat, 2);
        state.market.set_price(Commodity::Wheat, 6);

        let next = sell(&state, Commodity::Wheat, 10, false).unwrap();
        assert_eq!(next.current().commodities.get(Commodity::Wheat), 0);
        assert_eq!(next.current().money, 112);
        assert_eq!(next.market.price(Commodity::Wheat), 4);
    }

    #[test]
    fn test_sell_nothing_is_rejected() {
        let state = fresh_game();
        assert_eq!(
            sell(&state, Commodity::Iron, 1, false),
            Err(Rejection::NothingToSell(Commodity::Iron))
        );
    }

    #[test]
    fn test_export_company() {
        let mut state = fresh_game();
        give(&mut state, 0, Commodity::Wood, 1);
        state.market.set_price(Commodity::Wood, 11);

        assert_eq!(
            sell(&state, Commodity::Wood, 1, true),
            Err(Rejection::MissingBuilding("export company"))
        );

        own(&mut state, 0, BuildingId::ExportCompany);
        let next = sell(&state, Commodity::Wood, 1, true).unwrap();
        assert_eq!(next.current().money, 100 + 12);
    }

    #[test]
    fn test_trading_firms_pay_other_owners() {
        let mut state = fresh_game();
        give(&mut state, 0, Commodity::Wheat, 3);
        own(&mut state, 0, BuildingId::LumberWheatTradingFirm);
        own(&mut state, 1, BuildingId::LumberWheatTradingFirm);
        own(&mut state, 2, BuildingId::CoalIronTradingFirm);

        let next = sell(&state, Commodity::Wheat, 3, false).unwrap();
        assert_eq!(next.players[PlayerId::new(0)].money, 103);
        assert_eq!(next.players[PlayerId::new(1)].money, 103);
        assert_eq!(next.players[PlayerId::new(2)].money, 100);
    }

    #[test]
    fn test_freight_company_allows_second_sale() {
        let mut state = fresh_game();
        own(&mut state, 0, BuildingId::FreightCompany);
        give(&mut state, 0, Commodity::Wheat, 1);
        give(&mut state, 0, Commodity::Wood, 1);

        let once = sell(&state, Commodity::Wheat, 1, false).unwrap();
        assert!(!once.action_taken_this_turn);
        assert!(matches!(
            crate::rules::buy_town(&once, true, None),
            Err(Rejection::ActionNotAllowed(_))
        ));

        let twice = sell(&once, Commodity::Wood, 1, false).unwrap();
        assert!(twice.action_taken_this_turn);
        assert_eq!(twice.sell_actions_this_turn, 2);
    }

    #[test]
    fn test_discard_returns_to_playing_within_capacity() {
        let mut state = fresh_game();
        give(&mut state, 0, Commodity::Coal, 12);
        state.phase = Phase::DiscardDown;

        let once = discard(&state, Commodity::Coal).unwrap();
        assert_eq!(once.phase, Phase::DiscardDown);

        let twice = discard(&once, Commodity::Coal).unwrap();
        assert_eq!(twice.phase, Phase::Playing);
        assert_eq!(twice.current().commodities.total(), 10);
    }

    #[test]
    fn test_discard_requires_phase_and_stock() {
        let mut state = fresh_game();
        assert!(matches!(
            discard(&state, Commodity::Coal),
            Err(Rejection::WrongPhase { .. })
        ));

        state.phase = Phase::DiscardDown;
        assert!(matches!(
            discard(&state, Commodity::Coal),
            Err(Rejection::InsufficientCommodity { available: 0, .. })
        ));
    }
}
