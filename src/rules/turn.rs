//! End of turn, card draws and game end.
//!
//! `end_turn` drives the turn cycle:
//!
//! ```text
//! Playing --end_turn--> GameOver         railroads or towns exhausted
//!         --end_turn--> DiscardDown      over storage after drawing
//!         --end_turn--> Playing (next)   otherwise
//! DiscardDown --discard--> Playing       back within storage (same player)
//! ```

use std::mem;

use crate::core::{GameRng, GameState, Phase, PlayerId, Rejection};

use super::effects::{is_over_capacity, max_hand_size};
use super::{require_phase, successor};

/// Buildings face up at once.
pub const BUILDING_OFFER_SIZE: usize = 4;

/// Draw up to `count` production cards into `player`'s hand.
///
/// An empty deck is rebuilt by shuffling the discard pile with the state's
/// own RNG stream. Drawing stops early only when both piles are empty.
pub(crate) fn draw_cards(state: &mut GameState, player: PlayerId, count: usize) {
    for _ in 0..count {
        if state.production_deck.is_empty() {
            if state.production_discard.is_empty() {
                return;
            }
            let mut rng = GameRng::from_state(&state.rng);
            let discard = mem::take(&mut state.production_discard);
            state.production_deck = rng.shuffled(&discard);
            state.rng = rng.state();
            tracing::debug!(
                target: "tycoon::turn",
                cards = state.production_deck.len(),
                "production_deck.reshuffled"
            );
        }
        if let Some(card) = state.production_deck.pop_back() {
            state.players[player].hand.push_back(card);
        }
    }
}

/// Has either end-game supply run out?
#[must_use]
pub fn is_supply_exhausted(state: &GameState) -> bool {
    let railroads_gone = state.railroad_deck.is_empty() && state.railroad_offer.is_empty();
    let towns_gone = state.town_deck.is_empty() && state.current_town.is_none();
    railroads_gone || towns_gone
}

/// End the current player's turn.
pub fn end_turn(state: &GameState) -> Result<GameState, Rejection> {
    require_phase(state, Phase::Playing)?;
    let mut next = successor(state);
    let player = next.current_player;

    if is_supply_exhausted(&next) {
        next.phase = Phase::GameOver;
        tracing::info!(target: "tycoon::turn", last_player = %player, "game.over");
        return Ok(next);
    }

    let owed = mem::take(&mut next.pending_draw_count) as usize;
    let room = max_hand_size(next.current()).saturating_sub(next.current().hand.len());
    draw_cards(&mut next, player, owed.min(room));

    if is_over_capacity(next.current()) {
        next.phase = Phase::DiscardDown;
        tracing::info!(
            target: "tycoon::turn",
            player = %player,
            held = next.current().commodities.total(),
            "discard_down.entered"
        );
        return Ok(next);
    }

    while next.building_offer.len() < BUILDING_OFFER_SIZE {
        match next.building_stack.pop_front() {
            Some(id) => next.building_offer.push_back(id),
            None => break,
        }
    }

    next.current_player = player.next(next.player_count());
    next.action_taken_this_turn = false;
    next.building_purchases_this_turn = 0;
    next.sell_actions_this_turn = 0;

    tracing::debug!(target: "tycoon::turn", from = %player, to = %next.current_player, "turn.ended");
    Ok(next)
}
