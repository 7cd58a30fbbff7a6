//! Commodities, commodity bundles, and the shared market.
//!
//! ## Commodity
//!
//! Six goods in a fixed order: wheat, wood, iron, coal, goods, luxury. The
//! order matters: production lists, greedy town payments and the
//! any-commodity bonus all walk commodities in this order.
//!
//! ## CommodityBundle
//!
//! A count per commodity, stored as a fixed array indexed by the enum.
//! Serialized as a `commodity -> count` map with zero entries omitted.
//!
//! ## Market
//!
//! Current price per commodity, always clamped to `[min_price, max_price]`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString};

/// A tradeable good.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Commodity {
    Wheat,
    Wood,
    Iron,
    Coal,
    Goods,
    Luxury,
}

/// Number of distinct commodities.
pub const COMMODITY_COUNT: usize = 6;

impl Commodity {
    /// All commodities in their fixed enumeration order.
    pub const ALL: [Commodity; COMMODITY_COUNT] = [
        Commodity::Wheat,
        Commodity::Wood,
        Commodity::Iron,
        Commodity::Coal,
        Commodity::Goods,
        Commodity::Luxury,
    ];

    /// Position in the fixed order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowest price the market can fall to.
    #[must_use]
    pub const fn min_price(self) -> u32 {
        match self {
            Commodity::Wheat | Commodity::Wood => 1,
            Commodity::Iron | Commodity::Coal => 2,
            Commodity::Goods | Commodity::Luxury => 3,
        }
    }

    /// Highest price the market can rise to.
    #[must_use]
    pub const fn max_price(self) -> u32 {
        match self {
            Commodity::Wheat | Commodity::Wood => 12,
            Commodity::Iron | Commodity::Coal => 13,
            Commodity::Goods | Commodity::Luxury => 14,
        }
    }
}

/// Counts of each commodity held by a player or printed on a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Commodity, u32>", into = "BTreeMap<Commodity, u32>")]
pub struct CommodityBundle {
    counts: [u32; COMMODITY_COUNT],
}

impl CommodityBundle {
    /// An empty bundle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; COMMODITY_COUNT],
        }
    }

    /// Build a bundle from `(commodity, count)` pairs. Repeated commodities add up.
    #[must_use]
    pub fn from_pairs(pairs: &[(Commodity, u32)]) -> Self {
        let mut bundle = Self::new();
        for &(commodity, count) in pairs {
            bundle.add(commodity, count);
        }
        bundle
    }

    /// A bundle holding `count` units of a single commodity.
    #[must_use]
    pub fn single(commodity: Commodity, count: u32) -> Self {
        let mut bundle = Self::new();
        bundle.add(commodity, count);
        bundle
    }

    #[must_use]
    pub fn get(&self, commodity: Commodity) -> u32 {
        self.counts[commodity.index()]
    }

    pub fn set(&mut self, commodity: Commodity, count: u32) {
        self.counts[commodity.index()] = count;
    }

    /// Add units, saturating at `u32::MAX`.
    pub fn add(&mut self, commodity: Commodity, count: u32) {
        let slot = &mut self.counts[commodity.index()];
        *slot = slot.saturating_add(count);
    }

    /// Remove units of one commodity.
    ///
    /// Returns the amount actually held when it is less than `count`; the
    /// bundle is left untouched in that case.
    pub fn remove(&mut self, commodity: Commodity, count: u32) -> Result<(), u32> {
        let held = self.get(commodity);
        if held < count {
            return Err(held);
        }
        self.counts[commodity.index()] = held - count;
        Ok(())
    }

    /// Add every count of `other` into this bundle.
    pub fn add_bundle(&mut self, other: &CommodityBundle) {
        for (slot, extra) in self.counts.iter_mut().zip(other.counts.iter()) {
            *slot = slot.saturating_add(*extra);
        }
    }

    /// Remove every count of `other`, or nothing if any commodity is short.
    ///
    /// On failure returns the first short commodity and how many are held.
    pub fn subtract_bundle(&mut self, other: &CommodityBundle) -> Result<(), (Commodity, u32)> {
        if let Some(short) = Commodity::ALL
            .iter()
            .copied()
            .find(|&c| self.get(c) < other.get(c))
        {
            return Err((short, self.get(short)));
        }
        for (slot, spent) in self.counts.iter_mut().zip(other.counts.iter()) {
            *slot -= spent;
        }
        Ok(())
    }

    /// Does this bundle hold at least every count in `cost`?
    #[must_use]
    pub fn contains(&self, cost: &CommodityBundle) -> bool {
        Commodity::ALL.iter().all(|&c| self.get(c) >= cost.get(c))
    }

    /// Total units across all commodities, saturating at `u32::MAX`.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().fold(0u32, |sum, &n| sum.saturating_add(n))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate over `(commodity, count)` for every non-zero entry, in order.
    pub fn iter(&self) -> impl Iterator<Item = (Commodity, u32)> + '_ {
        Commodity::ALL
            .iter()
            .map(|&c| (c, self.get(c)))
            .filter(|&(_, n)| n > 0)
    }

    /// One entry per unit, in the fixed commodity order.
    #[must_use]
    pub fn to_unit_list(&self) -> Vec<Commodity> {
        self.iter()
            .flat_map(|(c, n)| std::iter::repeat(c).take(n as usize))
            .collect()
    }

    /// Count a list of units back into a bundle.
    #[must_use]
    pub fn from_units(units: &[Commodity]) -> Self {
        let mut bundle = Self::new();
        for &c in units {
            bundle.add(c, 1);
        }
        bundle
    }
}

impl From<BTreeMap<Commodity, u32>> for CommodityBundle {
    fn from(map: BTreeMap<Commodity, u32>) -> Self {
        let mut bundle = Self::new();
        for (commodity, count) in map {
            bundle.set(commodity, count);
        }
        bundle
    }
}

impl From<CommodityBundle> for BTreeMap<Commodity, u32> {
    fn from(bundle: CommodityBundle) -> Self {
        bundle.iter().collect()
    }
}

/// Current price of every commodity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Commodity, u32>", into = "BTreeMap<Commodity, u32>")]
pub struct Market {
    prices: [u32; COMMODITY_COUNT],
}

impl Market {
    /// Opening market: every commodity at its floor.
    #[must_use]
    pub fn opening() -> Self {
        let mut prices = [0; COMMODITY_COUNT];
        for c in Commodity::ALL {
            prices[c.index()] = c.min_price();
        }
        Self { prices }
    }

    #[must_use]
    pub fn price(&self, commodity: Commodity) -> u32 {
        self.prices[commodity.index()]
    }

    /// Set a price, clamped to the commodity's bounds.
    pub fn set_price(&mut self, commodity: Commodity, price: u32) {
        self.prices[commodity.index()] = price.clamp(commodity.min_price(), commodity.max_price());
    }

    /// Raise a price, capped at the commodity's maximum.
    pub fn raise(&mut self, commodity: Commodity, amount: u32) {
        self.set_price(commodity, self.price(commodity).saturating_add(amount));
    }

    /// Lower a price, floored at the commodity's minimum.
    pub fn lower(&mut self, commodity: Commodity, amount: u32) {
        self.set_price(commodity, self.price(commodity).saturating_sub(amount));
    }

    /// Iterate over `(commodity, price)` in the fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (Commodity, u32)> + '_ {
        Commodity::ALL.iter().map(|&c| (c, self.price(c)))
    }
}

impl Default for Market {
    fn default() -> Self {
        Self::opening()
    }
}

impl From<BTreeMap<Commodity, u32>> for Market {
    fn from(map: BTreeMap<Commodity, u32>) -> Self {
        let mut market = Self::opening();
        for (commodity, price) in map {
            market.set_price(commodity, price);
        }
        market
    }
}

impl From<Market> for BTreeMap<Commodity, u32> {
    fn from(market: Market) -> Self {
        market.iter().collect()
    }
}
