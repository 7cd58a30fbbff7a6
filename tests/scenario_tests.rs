//! Worked scenarios from the game rules.
//!
//! Each test sets up a small, concrete situation and checks the exact
//! outcome of one or a few actions through the public API.

use rustc_hash::FxHashSet;
use tycoon_engine::core::CommodityBundle;
use tycoon_engine::{
    apply_action, apply_or_keep, init_game, CardId, Commodity, GameAction, GameState, Phase,
    PlayerId, RailroadCard, RailroadLine, Rejection, TownCard,
};

fn p(seat: u8) -> PlayerId {
    PlayerId::new(seat)
}

fn three_player_game() -> GameState {
    let mut state = init_game(3, &["A", "B", "C"], 99).unwrap();
    for (_, player) in state.players.iter_mut() {
        player.commodities = CommodityBundle::new();
        player.money = 50;
    }
    state
}

/// Starting commodities: 1, 2 and 3 units of distinct commodities.
#[test]
fn test_starting_commodities_are_disjoint() {
    let state = init_game(3, &["A", "B", "C"], 7).unwrap();

    let mut seen = FxHashSet::default();
    for (seat, player) in state.players.iter() {
        let held: Vec<_> = player.commodities.iter().collect();
        assert_eq!(held.len(), seat.index() + 1);
        assert!(held.iter().all(|&(_, n)| n == 1));
        for (commodity, _) in held {
            assert!(seen.insert(commodity), "{commodity} dealt twice");
        }
    }
    assert_eq!(seen.len(), 6);
}

/// Starting an auction without the minimum bid is rejected and changes nothing.
#[test]
fn test_auction_needs_minimum_bid_money() {
    let mut state = three_player_game();
    state.current_mut().money = 10;
    let mut pricey = RailroadCard::new(CardId::new(800), RailroadLine::TopDog);
    pricey.min_bid = 12;
    state.railroad_offer[0] = pricey;

    let action = GameAction::StartAuction { railroad_index: 0 };
    assert_eq!(
        apply_action(&state, &action),
        Err(Rejection::InsufficientFunds {
            needed: 12,
            available: 10
        })
    );

    let kept = apply_or_keep(&state, &action);
    assert_eq!(kept, state);
    assert_eq!(kept.phase, Phase::Playing);
}

/// A rival outbids the starter; control returns to the starter, who may act.
#[test]
fn test_auction_won_by_rival() {
    let mut state = three_player_game();
    state.railroad_offer[0] = RailroadCard::new(CardId::new(801), RailroadLine::BigBear);

    let mut s = apply_action(&state, &GameAction::StartAuction { railroad_index: 0 }).unwrap();
    assert_eq!(s.auction.as_ref().unwrap().bids[p(0)], 5);

    for action in [
        GameAction::PlaceBid { amount: 6 },
        GameAction::PlaceBid { amount: 7 },
        GameAction::PassAuction,
        GameAction::PassAuction,
    ] {
        s = apply_action(&s, &action).unwrap();
    }

    assert_eq!(s.phase, Phase::Playing);
    assert_eq!(s.current_player, p(0));
    assert!(!s.action_taken_this_turn);
    assert_eq!(s.players[p(2)].money, 43);
    assert_eq!(s.players[p(2)].railroads.len(), 1);
    assert_eq!(s.players[p(0)].money, 50);

    let result = s.last_auction_result.clone().unwrap();
    assert_eq!(
        tycoon_engine::format_auction_result(&s, &result),
        "C won Big Bear for $7"
    );

    // the starter still has their main action
    let mut s = s;
    s.current_mut().commodities.add(Commodity::Wheat, 1);
    assert!(apply_action(&s, &GameAction::sell(Commodity::Wheat, 1)).is_ok());
}

/// Selling five units at $3 pays $15 and pins the price to its floor.
#[test]
fn test_sell_drops_price_to_floor() {
    let mut state = three_player_game();
    state.current_mut().commodities.add(Commodity::Wheat, 5);
    state.market.set_price(Commodity::Wheat, 3);

    let next = apply_action(&state, &GameAction::sell(Commodity::Wheat, 5)).unwrap();
    assert_eq!(next.current().money, 50 + 15);
    assert_eq!(next.market.price(Commodity::Wheat), 1);
}

/// Running out of railroads ends the game at the next end of turn.
#[test]
fn test_railroad_exhaustion_ends_game() {
    let mut state = three_player_game();
    state.railroad_deck.clear();
    state.railroad_offer.clear();
    state.pending_draw_count = 3;
    state.current_mut().commodities.add(Commodity::Coal, 40);

    let next = apply_action(&state, &GameAction::EndTurn).unwrap();
    assert_eq!(next.phase, Phase::GameOver);
    assert_eq!(next.current_player, state.current_player);
    assert!(tycoon_engine::get_winner(&next).is_some());

    assert_eq!(
        apply_action(&next, &GameAction::production(0)),
        Err(Rejection::GameOver)
    );
}

/// Paying "any 4" with no explicit mix drains commodities in order.
#[test]
fn test_town_paid_from_any_commodities() {
    let mut state = three_player_game();
    state.current_town = Some(TownCard::new(
        CardId::new(900),
        "Testford",
        2,
        CommodityBundle::single(Commodity::Iron, 2),
        4,
    ));
    let upcoming = state.town_deck[0].clone();
    state.current_mut().commodities = CommodityBundle::from_pairs(&[(Commodity::Wheat, 2), (Commodity::Wood, 3)]);

    let next = apply_action(&state, &GameAction::buy_town_any()).unwrap();
    let player = next.current();

    assert_eq!(player.commodities.get(Commodity::Wheat), 0);
    assert_eq!(player.commodities.get(Commodity::Wood), 1);
    assert_eq!(player.towns.len(), 1);
    assert_eq!(player.towns[0].name, "Testford");
    assert_eq!(next.current_town, Some(upcoming));
    assert!(next.action_taken_this_turn);
}
