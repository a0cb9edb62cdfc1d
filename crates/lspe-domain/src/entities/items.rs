//! Uniform access to the item collections a rank carries
//!
//! Vehicles and outfits both live in two places: the rank-global list and
//! each station's override list. [`RankItem`] abstracts over the two kinds
//! so bulk and copy operations are written once.

use serde::{Deserialize, Serialize};

use super::{RankHierarchy, StationAssignment, Vehicle};
use crate::error::{Error, Result};

/// An item kind stored per rank and per station
pub trait RankItem: Clone + std::fmt::Debug {
    /// Lowercase singular noun used in messages (`"vehicle"`)
    const KIND: &'static str;

    /// Case-folded identity key
    fn item_key(&self) -> String;

    /// Name shown to the user for this item
    fn item_label(&self) -> &str;

    /// Rank-global collection
    fn global(rank: &RankHierarchy) -> &[Self];

    /// Mutable rank-global collection
    fn global_mut(rank: &mut RankHierarchy) -> &mut Vec<Self>;

    /// Station override collection
    fn station(station: &StationAssignment) -> &[Self];

    /// Mutable station override collection
    fn station_mut(station: &mut StationAssignment) -> &mut Vec<Self>;

    /// Identity comparison, ignoring case
    fn same_item(&self, other: &Self) -> bool {
        self.item_key() == other.item_key()
    }
}

impl RankItem for Vehicle {
    const KIND: &'static str = "vehicle";

    fn item_key(&self) -> String {
        self.model.to_lowercase()
    }

    fn item_label(&self) -> &str {
        &self.model
    }

    fn global(rank: &RankHierarchy) -> &[Self] {
        &rank.vehicles
    }

    fn global_mut(rank: &mut RankHierarchy) -> &mut Vec<Self> {
        &mut rank.vehicles
    }

    fn station(station: &StationAssignment) -> &[Self] {
        &station.vehicle_overrides
    }

    fn station_mut(station: &mut StationAssignment) -> &mut Vec<Self> {
        &mut station.vehicle_overrides
    }
}

impl RankItem for String {
    const KIND: &'static str = "outfit";

    fn item_key(&self) -> String {
        self.to_lowercase()
    }

    fn item_label(&self) -> &str {
        self
    }

    fn global(rank: &RankHierarchy) -> &[Self] {
        &rank.outfits
    }

    fn global_mut(rank: &mut RankHierarchy) -> &mut Vec<Self> {
        &mut rank.outfits
    }

    fn station(station: &StationAssignment) -> &[Self] {
        &station.outfit_overrides
    }

    fn station_mut(station: &mut StationAssignment) -> &mut Vec<Self> {
        &mut station.outfit_overrides
    }
}

/// Which collection of a rank an operation targets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemScope {
    /// The rank-global collection
    Global,
    /// The override collection of the named station
    Station(String),
}

impl ItemScope {
    /// Scope for a named station
    pub fn station(name: impl Into<String>) -> Self {
        Self::Station(name.into())
    }
}

/// Borrow the collection `scope` designates on `rank`
pub fn items_in_scope<'a, T: RankItem>(
    rank: &'a RankHierarchy,
    scope: &ItemScope,
) -> Result<&'a [T]> {
    match scope {
        ItemScope::Global => Ok(T::global(rank)),
        ItemScope::Station(name) => rank
            .station(name)
            .map(T::station)
            .ok_or_else(|| Error::station_not_found(&rank.name, name)),
    }
}

/// Mutably borrow the collection `scope` designates on `rank`
pub fn items_in_scope_mut<'a, T: RankItem>(
    rank: &'a mut RankHierarchy,
    scope: &ItemScope,
) -> Result<&'a mut Vec<T>> {
    match scope {
        ItemScope::Global => Ok(T::global_mut(rank)),
        ItemScope::Station(name) => {
            let rank_name = rank.name.clone();
            rank.station_mut(name)
                .map(T::station_mut)
                .ok_or_else(|| Error::station_not_found(rank_name, name))
        }
    }
}

/// Every item of kind `T` on the rank: global first, then per station
pub fn all_items<T: RankItem>(rank: &RankHierarchy) -> Vec<&T> {
    T::global(rank)
        .iter()
        .chain(rank.stations.iter().flat_map(|s| T::station(s).iter()))
        .collect()
}

/// Distinct items of kind `T` on the rank, first occurrence wins
pub fn distinct_items<T: RankItem>(rank: &RankHierarchy) -> Vec<&T> {
    let mut seen = std::collections::HashSet::new();
    all_items::<T>(rank)
        .into_iter()
        .filter(|item| seen.insert(item.item_key()))
        .collect()
}

/// Whether the rank has any item of kind `T`, globally or at any station
pub fn has_any_items<T: RankItem>(rank: &RankHierarchy) -> bool {
    !T::global(rank).is_empty() || rank.stations.iter().any(|s| !T::station(s).is_empty())
}

/// Whether `items` already holds an item with the same identity
pub fn contains_item<T: RankItem>(items: &[T], item: &T) -> bool {
    items.iter().any(|existing| existing.same_item(item))
}
