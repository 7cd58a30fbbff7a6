//! Railroad auctions.
//!
//! ## Protocol
//!
//! 1. `start_auction`: the current player puts an offered railroad up. Their
//!    opening bid is the card's minimum and bidding passes to the next seat.
//!    The starter never takes the first bidding turn, since they already
//!    hold the opening bid. Auction House owners collect their commission
//!    immediately.
//! 2. `place_bid` / `pass_auction`: the bidder raises above every other live
//!    bid or drops out. Bidding moves to the next seat that has not passed.
//! 3. When one live bidder (or none) remains the auction resolves. The
//!    winner pays and takes the card, and the offer refills from the deck.
//!
//! Turn control always returns to the starter. A starter who won has used
//! their action for the turn; otherwise they may still act.

use crate::core::{Auction, AuctionResult, GameState, Phase, PlayerId, Rejection};

use super::effects::auction_commission;
use super::{require_phase, require_turn_action, successor, TurnAction};

/// Put the railroad at `railroad_index` of the offer up for auction.
pub fn start_auction(state: &GameState, railroad_index: usize) -> Result<GameState, Rejection> {
    require_turn_action(state, TurnAction::StartAuction)?;
    let railroad = state
        .railroad_offer
        .get(railroad_index)
        .cloned()
        .ok_or(Rejection::InvalidRailroadIndex(railroad_index))?;
    let starter = state.current_player;
    let money = state.current().money;
    if money < railroad.min_bid {
        return Err(Rejection::InsufficientFunds {
            needed: railroad.min_bid,
            available: money,
        });
    }

    let mut next = successor(state);
    for (_, player) in next.players.iter_mut() {
        if let Some(commission) = auction_commission(player) {
            player.money += commission;
        }
    }

    tracing::debug!(
        target: "tycoon::auction",
        starter = %starter,
        railroad = %railroad.line,
        min_bid = railroad.min_bid,
        "auction.started"
    );

    let auction = Auction::open(railroad, starter, next.player_count());
    next.current_player = next_live_bidder(&auction, starter, next.player_count());
    next.auction = Some(auction);
    next.phase = Phase::Auction;
    next.action_taken_this_turn = true;
    Ok(next)
}

/// Bid `amount` for the railroad under auction.
pub fn place_bid(state: &GameState, amount: u32) -> Result<GameState, Rejection> {
    require_phase(state, Phase::Auction)?;
    let auction = state
        .auction
        .as_ref()
        .ok_or(Rejection::ActionNotAllowed("no auction in progress"))?;
    let bidder = state.current_player;

    let minimum = auction
        .railroad
        .min_bid
        .max(auction.highest_rival_bid(bidder) + 1);
    if amount < minimum {
        return Err(Rejection::BidTooLow {
            minimum,
            offered: amount,
        });
    }
    let money = state.current().money;
    if money < amount {
        return Err(Rejection::InsufficientFunds {
            needed: amount,
            available: money,
        });
    }

    let mut next = successor(state);
    if let Some(auction) = next.auction.as_mut() {
        auction.bids[bidder] = amount;
    }
    tracing::debug!(target: "tycoon::auction", bidder = %bidder, amount, "auction.bid");
    advance_auction(&mut next);
    Ok(next)
}

/// Drop out of the auction.
pub fn pass_auction(state: &GameState) -> Result<GameState, Rejection> {
    require_phase(state, Phase::Auction)?;
    if state.auction.is_none() {
        return Err(Rejection::ActionNotAllowed("no auction in progress"));
    }

    let mut next = successor(state);
    let bidder = next.current_player;
    if let Some(auction) = next.auction.as_mut() {
        auction.passed[bidder] = true;
    }
    tracing::debug!(target: "tycoon::auction", bidder = %bidder, "auction.passed");
    advance_auction(&mut next);
    Ok(next)
}

/// First seat after `from` that has not passed.
fn next_live_bidder(auction: &Auction, from: PlayerId, player_count: usize) -> PlayerId {
    let mut seat = from.next(player_count);
    for _ in 0..player_count {
        if !auction.passed[seat] {
            break;
        }
        seat = seat.next(player_count);
    }
    seat
}

/// Move bidding on, or resolve when at most one bidder is left.
fn advance_auction(state: &mut GameState) {
    let Some(auction) = state.auction.as_ref() else {
        return;
    };
    let live: Vec<PlayerId> = auction.live_players().collect();
    if live.len() > 1 {
        state.current_player = next_live_bidder(auction, state.current_player, state.player_count());
        return;
    }

    let winner = live
        .first()
        .copied()
        .filter(|&p| auction.bids[p] >= auction.railroad.min_bid);
    let Some(auction) = state.auction.take() else {
        return;
    };
    let starter = auction.starter;

    if let Some(winner) = winner {
        let amount = auction.bids[winner];
        let player = &mut state.players[winner];
        player.money = player.money.saturating_sub(amount);
        player.railroads.push_back(auction.railroad.clone());

        if let Some(pos) = state
            .railroad_offer
            .iter()
            .position(|r| r.id == auction.railroad.id)
        {
            state.railroad_offer.remove(pos);
        }
        if let Some(card) = state.railroad_deck.pop_front() {
            state.railroad_offer.push_back(card);
        }

        tracing::info!(
            target: "tycoon::auction",
            winner = %winner,
            railroad = %auction.railroad.line,
            amount,
            "auction.resolved"
        );
        state.last_auction_result = Some(AuctionResult {
            railroad: auction.railroad,
            winner,
            amount,
        });
    } else {
        tracing::info!(target: "tycoon::auction", starter = %starter, "auction.no_winner");
    }

    state.phase = Phase::Playing;
    state.current_player = starter;
    state.action_taken_this_turn = winner == Some(starter);
}
