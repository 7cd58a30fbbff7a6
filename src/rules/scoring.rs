//! End-game victory points.
//!
//! A player's VP is the sum of:
//!
//! - the printed VP of every town they own
//! - for each railroad line, the first `k` entries of that line's schedule
//!   where `k` is the number of cards of the line they own
//! - 2 per town/railroad pair, `min(towns, railroads)`
//! - 1 per building owned
//! - the end-game modifiers of every owned building (per town, per railroad,
//!   per $20, per building)
//!
//! Modifiers read every owned tile, not only the effective ones.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{registry, RailroadCard, RailroadLine};
use crate::core::{GameState, Phase, Player, PlayerId};

/// VP for each matched town and railroad.
pub const PAIR_BONUS: u32 = 2;
/// VP per building owned, before modifiers.
pub const BUILDING_VP: u32 = 1;

/// One row of the final standings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player: PlayerId,
    pub vp: u32,
    pub money: u32,
}

/// VP from railroads, by line schedule.
fn railroad_vp(railroads: impl Iterator<Item = RailroadCard>) -> u32 {
    let mut by_line: FxHashMap<RailroadLine, (u32, [u32; 4])> = FxHashMap::default();
    for card in railroads {
        by_line.entry(card.line).or_insert((0, card.vp_schedule)).0 += 1;
    }
    by_line
        .values()
        .map(|(count, schedule)| schedule.iter().take(*count as usize).sum::<u32>())
        .sum()
}

/// A player's VP if the game ended now.
#[must_use]
pub fn player_vp(player: &Player) -> u32 {
    let towns = player.towns.len() as u32;
    let railroads = player.railroads.len() as u32;
    let buildings = player.buildings.len() as u32;

    let mut vp = player.towns.iter().map(|t| t.vp).sum::<u32>();
    vp += railroad_vp(player.railroads.iter().cloned());
    vp += PAIR_BONUS * towns.min(railroads);
    vp += BUILDING_VP * buildings;

    for tile in player.buildings.iter().filter_map(|&id| registry().building(id)) {
        vp += tile.vp_per_town.unwrap_or(0) * towns;
        vp += tile.vp_per_railroad.unwrap_or(0) * railroads;
        vp += tile.vp_per_20_money.unwrap_or(0) * (player.money / 20);
        vp += tile.vp_per_building.unwrap_or(0) * buildings;
    }
    vp
}

/// Scores for every player, in seat order.
#[must_use]
pub fn compute_scores(state: &GameState) -> Vec<PlayerScore> {
    state
        .players
        .iter()
        .map(|(player, p)| PlayerScore {
            player,
            vp: player_vp(p),
            money: p.money,
        })
        .collect()
}

/// The winner once the game is over: most VP, then most money, then the
/// lowest seat.
#[must_use]
pub fn get_winner(state: &GameState) -> Option<PlayerId> {
    if state.phase != Phase::GameOver {
        return None;
    }
    compute_scores(state)
        .into_iter()
        .min_by(|a, b| {
            b.vp.cmp(&a.vp)
                .then(b.money.cmp(&a.money))
                .then(a.player.cmp(&b.player))
        })
        .map(|score| score.player)
}
