//! The production action.
//!
//! The current player plays a card from hand and:
//!
//! 1. Optionally buys commodities from another player through a Trading
//!    Floor, at the market price before this card raises it.
//! 2. Takes up to their production limit of the card's printed units,
//!    either the first units in commodity order or an explicit selection.
//! 3. Receives the live commodity bonus and any-commodity bonus.
//! 4. Raises the price of every commodity on the card's price strip by 1.
//!
//! The card goes to the discard pile. Its replacement is owed, not drawn:
//! `pending_draw_count` is settled at end of turn.

use crate::core::{Commodity, CommodityBundle, GameState, Rejection, TradingFloorPurchase};

use super::effects::{any_commodity_bonus, commodity_bonus, has_trading_floor, max_production};
use super::{require_turn_action, successor, TurnAction};

/// Commodity credited by the any-commodity bonus.
pub const ANY_BONUS_COMMODITY: Commodity = Commodity::ALL[0];

/// Play the card at `card_index` from the current player's hand.
pub fn produce(
    state: &GameState,
    card_index: usize,
    commodities_to_take: Option<&[Commodity]>,
    trading_floor: Option<&TradingFloorPurchase>,
) -> Result<GameState, Rejection> {
    require_turn_action(state, TurnAction::Production)?;
    let card = state
        .current()
        .hand
        .get(card_index)
        .cloned()
        .ok_or(Rejection::InvalidCardIndex(card_index))?;

    let mut next = successor(state);
    if let Some(purchase) = trading_floor.filter(|p| p.quantity > 0) {
        buy_through_trading_floor(&mut next, purchase)?;
    }

    let limit = max_production(next.current()) as usize;
    let printed = card.production_list();
    let take_count = limit.min(printed.len());
    let taken = match commodities_to_take {
        Some(selection) => {
            validate_selection(selection, &card.production, take_count)?;
            CommodityBundle::from_units(selection)
        }
        None => CommodityBundle::from_units(&printed[..take_count]),
    };

    let bonus = commodity_bonus(next.current());
    let any_bonus = any_commodity_bonus(next.current());
    let player = next.current_mut();
    player.commodities.add_bundle(&taken);
    if let Some((commodity, amount)) = bonus {
        player.commodities.add(commodity, amount);
    }
    if let Some(amount) = any_bonus {
        player.commodities.add(ANY_BONUS_COMMODITY, amount);
    }
    player.hand.remove(card_index);

    for &commodity in &card.price_increase {
        next.market.raise(commodity, 1);
    }

    tracing::debug!(
        target: "tycoon::production",
        player = %next.current_player,
        card = %card.id,
        taken = taken.total(),
        "production.played"
    );

    next.production_discard.push_back(card);
    next.action_taken_this_turn = true;
    next.pending_draw_count += 1;
    Ok(next)
}

/// An explicit selection must take exactly `take_count` units, none of them
/// beyond what the card prints.
fn validate_selection(
    selection: &[Commodity],
    printed: &CommodityBundle,
    take_count: usize,
) -> Result<(), Rejection> {
    if selection.len() != take_count {
        return Err(Rejection::InvalidSelection(
            "selection must match the production limit",
        ));
    }
    if !printed.contains(&CommodityBundle::from_units(selection)) {
        return Err(Rejection::InvalidSelection(
            "selection takes more of a commodity than the card shows",
        ));
    }
    Ok(())
}

/// Forced purchase from another player at the current market price.
fn buy_through_trading_floor(
    state: &mut GameState,
    purchase: &TradingFloorPurchase,
) -> Result<(), Rejection> {
    let buyer = state.current_player;
    let seller = purchase.from_player;
    if !has_trading_floor(state.current()) {
        return Err(Rejection::MissingBuilding("trading floor"));
    }
    if seller == buyer || !state.players.contains(seller) {
        return Err(Rejection::InvalidPlayer(seller.0));
    }

    let commodity = purchase.commodity;
    let quantity = purchase.quantity;
    let stock = state.players[seller].commodities.get(commodity);
    if stock < quantity {
        return Err(Rejection::InsufficientCommodity {
            commodity,
            available: stock,
            requested: quantity,
        });
    }
    let buyer_money = state.players[buyer].money;
    let cost = state
        .market
        .price(commodity)
        .checked_mul(quantity)
        .filter(|&cost| cost <= buyer_money)
        .ok_or(Rejection::InsufficientFunds {
            needed: state.market.price(commodity).saturating_mul(quantity),
            available: buyer_money,
        })?;
    state.players[seller].commodities.set(commodity, stock - quantity);
    state.players[seller].money += cost;

    let player = &mut state.players[buyer];
    player.money -= cost;
    player.commodities.add(commodity, quantity);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{BuildingId, CardId, ProductionCard};
    use crate::core::{Phase, PlayerId};
    use crate::rules::test_support::{fresh_game, give, own};

    fn with_card(state: &mut GameState, production: &[(Commodity, u32)], raises: &[Commodity]) {
        let card = ProductionCard::new(CardId::new(900), CommodityBundle::from_pairs(production), raises);
        state.current_mut().hand.push_front(card);
    }

    #[test]
    fn test_default_take_and_price_increase() {
        let mut state = fresh_game();
        with_card(
            &mut state,
            &[(Commodity::Wheat, 2), (Commodity::Wood, 1), (Commodity::Coal, 2)],
            &[Commodity::Wheat, Commodity::Coal],
        );
        let hand_before = state.current().hand.len();

        let next = produce(&state, 0, None, None).unwrap();
        let player = next.current();

        assert_eq!(player.commodities.get(Commodity::Wheat), 2);
        assert_eq!(player.commodities.get(Commodity::Wood), 1);
        assert_eq!(player.commodities.get(Commodity::Coal), 0);
        assert_eq!(player.hand.len(), hand_before - 1);
        assert_eq!(next.market.price(Commodity::Wheat), 2);
        assert_eq!(next.market.price(Commodity::Coal), 3);
        assert_eq!(next.production_discard.len(), 1);
        assert!(next.action_taken_this_turn);
        assert_eq!(next.pending_draw_count, 1);

        // input untouched
        assert_eq!(state.current().hand.len(), hand_before);
        assert!(state.current().commodities.is_empty());
    }

    #[test]
    fn test_explicit_selection() {
        let mut state = fresh_game();
        with_card(
            &mut state,
            &[(Commodity::Wheat, 2), (Commodity::Wood, 1), (Commodity::Coal, 2)],
            &[Commodity::Wood],
        );

        let pick = [Commodity::Coal, Commodity::Coal, Commodity::Wood];
        let next = produce(&state, 0, Some(&pick), None).unwrap();
        assert_eq!(next.current().commodities.get(Commodity::Coal), 2);
        assert_eq!(next.current().commodities.get(Commodity::Wheat), 0);
    }

    #[test]
    fn test_selection_rejections() {
        let mut state = fresh_game();
        with_card(
            &mut state,
            &[(Commodity::Wheat, 2), (Commodity::Wood, 1), (Commodity::Coal, 2)],
            &[Commodity::Wood],
        );

        let too_few = [Commodity::Coal, Commodity::Coal];
        assert!(matches!(
            produce(&state, 0, Some(&too_few), None),
            Err(Rejection::InvalidSelection(_))
        ));

        let too_many_wood = [Commodity::Wood, Commodity::Wood, Commodity::Coal];
        assert!(matches!(
            produce(&state, 0, Some(&too_many_wood), None),
            Err(Rejection::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_bonuses_apply() {
        let mut state = fresh_game();
        own(&mut state, 0, BuildingId::MachineShopB);
        own(&mut state, 0, BuildingId::CottageIndustryP);
        own(&mut state, 0, BuildingId::Bank);
        state.current_mut().active_bp_building = Some(BuildingId::MachineShopB);
        with_card(&mut state, &[(Commodity::Iron, 2), (Commodity::Coal, 2)], &[Commodity::Iron]);

        let next = produce(&state, 0, None, None).unwrap();
        let held = next.current().commodities;
        // limit stays 3: Cottage Industry is not the live B/P building
        assert_eq!(held.get(Commodity::Iron), 2);
        assert_eq!(held.get(Commodity::Coal), 1);
        assert_eq!(held.get(Commodity::Wheat), 1);
    }

    #[test]
    fn test_production_limit_building() {
        let mut state = fresh_game();
        own(&mut state, 0, BuildingId::FactoryX2P);
        with_card(
            &mut state,
            &[(Commodity::Wood, 3), (Commodity::Iron, 1), (Commodity::Wheat, 1)],
            &[Commodity::Wood],
        );

        let next = produce(&state, 0, None, None).unwrap();
        assert_eq!(next.current().commodities.total(), 5);
    }

    #[test]
    fn test_trading_floor_uses_pre_increase_price() {
        let mut state = fresh_game();
        own(&mut state, 0, BuildingId::TradingFloor);
        give(&mut state, 2, Commodity::Coal, 3);
        with_card(&mut state, &[(Commodity::Coal, 3)], &[Commodity::Coal]);
        state.market.set_price(Commodity::Coal, 4);

        let purchase = TradingFloorPurchase {
            from_player: PlayerId::new(2),
            commodity: Commodity::Coal,
            quantity: 2,
        };
        let next = produce(&state, 0, None, Some(&purchase)).unwrap();

        assert_eq!(next.players[PlayerId::new(0)].money, 100 - 8);
        assert_eq!(next.players[PlayerId::new(2)].money, 100 + 8);
        assert_eq!(next.players[PlayerId::new(2)].commodities.get(Commodity::Coal), 1);
        assert_eq!(next.players[PlayerId::new(0)].commodities.get(Commodity::Coal), 2 + 3);
        assert_eq!(next.market.price(Commodity::Coal), 5);
    }

    #[test]
    fn test_trading_floor_rejections() {
        let mut state = fresh_game();
        give(&mut state, 1, Commodity::Wood, 1);
        let purchase = TradingFloorPurchase {
            from_player: PlayerId::new(1),
            commodity: Commodity::Wood,
            quantity: 1,
        };
        assert_eq!(
            produce(&state, 0, None, Some(&purchase)),
            Err(Rejection::MissingBuilding("trading floor"))
        );

        own(&mut state, 0, BuildingId::TradingFloor);
        let from_self = TradingFloorPurchase {
            from_player: PlayerId::new(0),
            ..purchase
        };
        assert_eq!(
            produce(&state, 0, None, Some(&from_self)),
            Err(Rejection::InvalidPlayer(0))
        );

        let too_many = TradingFloorPurchase { quantity: 2, ..purchase };
        assert!(matches!(
            produce(&state, 0, None, Some(&too_many)),
            Err(Rejection::InsufficientCommodity { available: 1, .. })
        ));

        let nothing = TradingFloorPurchase { quantity: 0, ..purchase };
        assert!(produce(&state, 0, None, Some(&nothing)).is_ok());
    }

    #[test]
    fn test_trading_floor_huge_quantity_is_rejected() {
        let mut state = fresh_game();
        own(&mut state, 0, BuildingId::TradingFloor);
        give(&mut state, 1, Commodity::Goods, 2);
        let purchase = TradingFloorPurchase {
            from_player: PlayerId::new(1),
            commodity: Commodity::Goods,
            quantity: 2_000_000_000,
        };
        assert_eq!(
            produce(&state, 0, None, Some(&purchase)),
            Err(Rejection::InsufficientCommodity {
                commodity: Commodity::Goods,
                available: 2,
                requested: 2_000_000_000,
            })
        );

        // a seller who really holds that much still cannot be paid for
        give(&mut state, 1, Commodity::Goods, 2_000_000_000);
        assert!(matches!(
            produce(&state, 0, None, Some(&purchase)),
            Err(Rejection::InsufficientFunds { needed: u32::MAX, available: 100 })
        ));
    }

    #[test]
    fn test_rejections_leave_state_alone() {
        let mut state = fresh_game();
        assert_eq!(produce(&state, 99, None, None), Err(Rejection::InvalidCardIndex(99)));

        state.action_taken_this_turn = true;
        assert_eq!(produce(&state, 0, None, None), Err(Rejection::ActionAlreadyTaken));

        state.phase = Phase::DiscardDown;
        assert!(matches!(
            produce(&state, 0, None, None),
            Err(Rejection::WrongPhase { .. })
        ));
    }
}
