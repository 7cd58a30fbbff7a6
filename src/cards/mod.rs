//! Card system: definitions, registry, and deck generators.
//!
//! ## Key Types
//!
//! - `ProductionCard`, `RailroadCard`, `TownCard`: physical cards, moved by value
//! - `BuildingId` / `BuildingTile`: tiles are held by ID, data lives in the registry
//! - `CardRegistry`: immutable process-wide catalog, see `registry()`
//!
//! The `catalog` module turns the registry tables into shuffled decks.

pub mod catalog;
pub mod definition;
pub mod registry;

pub use catalog::{
    create_building_deck, create_production_deck, create_railroad_deck, create_town_deck,
    railroad_lines_for, BuildingDeck,
};
pub use definition::{
    BuildingId, BuildingTile, CardId, ProductionCard, RailroadCard, RailroadLine, TownCard,
};
pub use registry::{registry, CardRegistry, ProductionTemplate};
