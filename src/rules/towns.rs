//! Buying the current town.

use crate::core::{Commodity, CommodityBundle, GameState, Rejection};

use super::effects::town_cost_reduce;
use super::{require_turn_action, successor, TurnAction};

/// Buy the face-up town.
///
/// With `use_specific` the player pays the town's exact commodity cost, each
/// entry reduced by their town-cost reduction. Otherwise they pay the
/// any-mix cost less the reduction: `commodities_to_spend` must total exactly
/// that, or, when absent, units are taken in commodity order until paid.
pub fn buy_town(
    state: &GameState,
    use_specific: bool,
    commodities_to_spend: Option<&CommodityBundle>,
) -> Result<GameState, Rejection> {
    require_turn_action(state, TurnAction::BuyTown)?;
    let town = state.current_town.clone().ok_or(Rejection::NoTownAvailable)?;
    let reduce = town_cost_reduce(state.current());

    let payment = if use_specific {
        let mut cost = CommodityBundle::new();
        for (commodity, count) in town.cost_specific.iter() {
            cost.set(commodity, count.saturating_sub(reduce));
        }
        cost
    } else {
        let need = town.cost_any.saturating_sub(reduce);
        let held = &state.current().commodities;
        if let Some(mix) = commodities_to_spend {
            let mut left = *held;
            left.subtract_bundle(mix)
                .map_err(|(commodity, available)| Rejection::InsufficientCommodity {
                    commodity,
                    available,
                    requested: mix.get(commodity),
                })?;
        }
        match commodities_to_spend {
            Some(mix) if mix.total() != need => {
                return Err(Rejection::InvalidSelection("payment must total the town's cost"));
            }
            Some(mix) => *mix,
            None => greedy_payment(held, need)?,
        }
    };

    let mut next = successor(state);
    let player = next.current_mut();
    player
        .commodities
        .subtract_bundle(&payment)
        .map_err(|(commodity, available)| Rejection::InsufficientCommodity {
            commodity,
            available,
            requested: payment.get(commodity),
        })?;
    player.towns.push_back(town.clone());
    next.current_town = next.town_deck.pop_front();
    next.action_taken_this_turn = true;

    tracing::debug!(
        target: "tycoon::turn",
        player = %next.current_player,
        town = %town.name,
        vp = town.vp,
        paid = payment.total(),
        "town.bought"
    );
    Ok(next)
}

/// Take `need` units from `held`, draining commodities in their fixed order.
fn greedy_payment(held: &CommodityBundle, need: u32) -> Result<CommodityBundle, Rejection> {
    let mut payment = CommodityBundle::new();
    let mut left = need;
    for commodity in Commodity::ALL {
        if left == 0 {
            break;
        }
        let take = held.get(commodity).min(left);
        payment.set(commodity, take);
        left -= take;
    }
    if left > 0 {
        return Err(Rejection::InvalidSelection("not enough commodities to pay for the town"));
    }
    Ok(payment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{BuildingId, CardId, TownCard};
    use crate::core::Phase;
    use crate::rules::test_support::{fresh_game, give, own};

    fn with_town(state: &mut GameState, specific: Commodity, count: u32, any: u32) {
        state.current_town = Some(TownCard::new(
            CardId::new(77),
            "Testville",
            3,
            CommodityBundle::single(specific, count),
            any,
        ));
    }

    #[test]
    fn test_specific_payment() {
        let mut state = fresh_game();
        with_town(&mut state, Commodity::Iron, 3, 5);
        give(&mut state, 0, Commodity::Iron, 4);
        let deck_before = state.town_deck.len();

        let next = buy_town(&state, true, None).unwrap();
        let player = next.current();

        assert_eq!(player.commodities.get(Commodity::Iron), 1);
        assert_eq!(player.towns.len(), 1);
        assert_eq!(player.towns[0].name, "Testville");
        assert_eq!(next.town_deck.len(), deck_before - 1);
        assert!(next.current_town.is_some());
        assert!(next.action_taken_this_turn);
    }

    #[test]
    fn test_specific_payment_short() {
        let mut state = fresh_game();
        with_town(&mut state, Commodity::Iron, 3, 5);
        give(&mut state, 0, Commodity::Iron, 2);

        assert_eq!(
            buy_town(&state, true, None),
            Err(Rejection::InsufficientCommodity {
                commodity: Commodity::Iron,
                available: 2,
                requested: 3
            })
        );
    }

    #[test]
    fn test_brick_works_reduces_both_costs() {
        let mut state = fresh_game();
        own(&mut state, 0, BuildingId::BrickWorks);
        with_town(&mut state, Commodity::Coal, 2, 4);
        give(&mut state, 0, Commodity::Coal, 1);

        let specific = buy_town(&state, true, None).unwrap();
        assert_eq!(specific.current().commodities.get(Commodity::Coal), 0);

        give(&mut state, 0, Commodity::Wheat, 2);
        let any = buy_town(&state, false, None).unwrap();
        assert!(any.current().commodities.is_empty());
    }

    #[test]
    fn test_greedy_any_payment_in_commodity_order() {
        let mut state = fresh_game();
        with_town(&mut state, Commodity::Goods, 2, 4);
        give(&mut state, 0, Commodity::Wheat, 2);
        give(&mut state, 0, Commodity::Wood, 3);

        let next = buy_town(&state, false, None).unwrap();
        let held = next.current().commodities;
        assert_eq!(held.get(Commodity::Wheat), 0);
        assert_eq!(held.get(Commodity::Wood), 1);
    }

    #[test]
    fn test_greedy_any_payment_short() {
        let mut state = fresh_game();
        with_town(&mut state, Commodity::Goods, 2, 4);
        give(&mut state, 0, Commodity::Wheat, 3);

        assert!(matches!(
            buy_town(&state, false, None),
            Err(Rejection::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_explicit_mix() {
        let mut state = fresh_game();
        with_town(&mut state, Commodity::Goods, 2, 4);
        give(&mut state, 0, Commodity::Wheat, 2);
        give(&mut state, 0, Commodity::Wood, 3);

        let mix = CommodityBundle::from_pairs(&[(Commodity::Wood, 3), (Commodity::Wheat, 1)]);
        let next = buy_town(&state, false, Some(&mix)).unwrap();
        assert_eq!(next.current().commodities.get(Commodity::Wheat), 1);
        assert_eq!(next.current().commodities.get(Commodity::Wood), 0);

        let wrong_total = CommodityBundle::single(Commodity::Wood, 3);
        assert!(matches!(
            buy_town(&state, false, Some(&wrong_total)),
            Err(Rejection::InvalidSelection(_))
        ));

        let not_held = CommodityBundle::single(Commodity::Coal, 4);
        assert!(matches!(
            buy_town(&state, false, Some(&not_held)),
            Err(Rejection::InsufficientCommodity {
                commodity: Commodity::Coal,
                ..
            })
        ));
    }

    #[test]
    fn test_oversized_mix_is_rejected() {
        let mut state = fresh_game();
        with_town(&mut state, Commodity::Goods, 2, 4);
        give(&mut state, 0, Commodity::Wood, 5);

        let mix = CommodityBundle::from_pairs(&[(Commodity::Wheat, u32::MAX), (Commodity::Wood, 5)]);
        assert_eq!(
            buy_town(&state, false, Some(&mix)),
            Err(Rejection::InsufficientCommodity {
                commodity: Commodity::Wheat,
                available: 0,
                requested: u32::MAX,
            })
        );
        assert_eq!(mix.total(), u32::MAX);
    }

    #[test]
    fn test_no_town_and_wrong_phase() {
        let mut state = fresh_game();
        state.current_town = None;
        assert_eq!(buy_town(&state, true, None), Err(Rejection::NoTownAvailable));

        state.phase = Phase::Auction;
        assert!(matches!(
            buy_town(&state, true, None),
            Err(Rejection::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_last_town_leaves_none_current() {
        let mut state = fresh_game();
        with_town(&mut state, Commodity::Wheat, 1, 1);
        state.town_deck.clear();
        give(&mut state, 0, Commodity::Wheat, 1);

        let next = buy_town(&state, true, None).unwrap();
        assert!(next.current_town.is_none());
    }
}
