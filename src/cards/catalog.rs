//! Deck generators.
//!
//! Each generator expands catalog tables into physical cards and shuffles
//! them with the `GameRng` it is handed. Nothing else here is random.

use im::Vector;

use super::definition::{BuildingId, CardId, ProductionCard, RailroadCard, RailroadLine, TownCard};
use super::registry::registry;
use crate::core::GameRng;
use strum::IntoEnumIterator;

/// Physical copies of each production card design.
pub const PRODUCTION_COPIES: usize = 2;
/// Physical copies of each railroad line.
pub const RAILROAD_COPIES: usize = 4;
/// B/P buildings dealt into the opening offer.
pub const OPENING_BP_OFFER: usize = 4;

/// Tiles that appear twice in the building stack.
const DOUBLED_IN_STACK: [BuildingId; 1] = [BuildingId::WarehouseX2];

/// The shuffled production deck: every template twice.
#[must_use]
pub fn create_production_deck(rng: &mut GameRng) -> Vector<ProductionCard> {
    let mut deck = Vec::new();
    let mut next_id = 0;
    for template in registry().production_templates() {
        for _ in 0..PRODUCTION_COPIES {
            deck.push(ProductionCard {
                id: CardId::new(next_id),
                production: template.production,
                price_increase: template.price_increase.clone(),
            });
            next_id += 1;
        }
    }
    rng.shuffle(&mut deck);
    deck.into_iter().collect()
}

/// Railroad lines in play at a table of `player_count`.
#[must_use]
pub fn railroad_lines_for(player_count: usize) -> Vec<RailroadLine> {
    RailroadLine::iter()
        .filter(|line| player_count >= line.min_players())
        .collect()
}

/// The shuffled railroad deck: four copies of every line in play.
#[must_use]
pub fn create_railroad_deck(player_count: usize, rng: &mut GameRng) -> Vector<RailroadCard> {
    let mut deck = Vec::new();
    let mut next_id = 0;
    for line in railroad_lines_for(player_count) {
        for _ in 0..RAILROAD_COPIES {
            deck.push(RailroadCard::new(CardId::new(next_id), line));
            next_id += 1;
        }
    }
    rng.shuffle(&mut deck);
    deck.into_iter().collect()
}

/// The town deck, ascending by VP tier with each tier shuffled.
///
/// A two-player game keeps only every other card.
#[must_use]
pub fn create_town_deck(player_count: usize, rng: &mut GameRng) -> Vector<TownCard> {
    let mut tiers: Vec<u32> = registry().towns().iter().map(|t| t.vp).collect();
    tiers.sort_unstable();
    tiers.dedup();

    let mut deck = Vec::new();
    for vp in tiers {
        let mut tier: Vec<TownCard> = registry()
            .towns()
            .iter()
            .filter(|t| t.vp == vp)
            .cloned()
            .collect();
        rng.shuffle(&mut tier);
        deck.extend(tier);
    }

    if player_count == 2 {
        deck.into_iter().step_by(2).collect()
    } else {
        deck.into_iter().collect()
    }
}

/// Opening building offer and the draw stack behind it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildingDeck {
    pub offer: Vector<BuildingId>,
    pub stack: Vector<BuildingId>,
}

/// Deal four of the upgradeable B/P tiles into the offer and shuffle every
/// non-B/P tile (plus a second Warehouse and two Factories) into the stack.
#[must_use]
pub fn create_building_deck(rng: &mut GameRng) -> BuildingDeck {
    let reg = registry();

    let mut pool: Vec<BuildingId> = reg
        .find_buildings(|t| t.is_upgradeable())
        .map(|t| t.id)
        .collect();
    rng.shuffle(&mut pool);
    let offer: Vector<BuildingId> = pool.into_iter().take(OPENING_BP_OFFER).collect();

    let mut stack = Vec::new();
    for tile in reg.find_buildings(|t| !t.bp_tag) {
        stack.push(tile.id);
        if DOUBLED_IN_STACK.contains(&tile.id) {
            stack.push(tile.id);
        }
    }
    stack.push(BuildingId::FactoryX2P);
    stack.push(BuildingId::FactoryX2P);
    rng.shuffle(&mut stack);

    BuildingDeck {
        offer,
        stack: stack.into_iter().collect(),
    }
}
