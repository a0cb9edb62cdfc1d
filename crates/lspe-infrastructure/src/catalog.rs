//! In-memory game data catalog
//!
//! Holds the agencies, stations, vehicles and outfit variations discovered
//! from the mod's data files and serves them to validation through the
//! [`ReferenceDataProvider`] port. Lookups ignore case.

use lspe_domain::{Agency, OutfitVariation, ReferenceDataProvider, Station, Vehicle};
use std::collections::HashSet;

use crate::snapshot::GameDataSnapshot;

/// Game data the rank configuration refers to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameDataCatalog {
    agencies: Vec<Agency>,
    stations: Vec<Station>,
    vehicles: Vec<Vehicle>,
    outfits: Vec<OutfitVariation>,
}

impl GameDataCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an agency
    #[must_use]
    pub fn with_agency(mut self, agency: Agency) -> Self {
        self.agencies.push(agency);
        self
    }

    /// Add a station
    #[must_use]
    pub fn with_station(mut self, station: Station) -> Self {
        self.stations.push(station);
        self
    }

    /// Add a vehicle
    #[must_use]
    pub fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    /// Add an outfit variation
    #[must_use]
    pub fn with_outfit(mut self, outfit: OutfitVariation) -> Self {
        self.outfits.push(outfit);
        self
    }

    pub fn agencies(&self) -> &[Agency] {
        &self.agencies
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn outfits(&self) -> &[OutfitVariation] {
        &self.outfits
    }

    /// Whether the catalog holds no data at all
    pub fn is_empty(&self) -> bool {
        self.agencies.is_empty()
            && self.stations.is_empty()
            && self.vehicles.is_empty()
            && self.outfits.is_empty()
    }

    /// Agency by short name
    pub fn find_agency(&self, short_name: &str) -> Option<&Agency> {
        self.agencies
            .iter()
            .find(|a| a.short_name.eq_ignore_ascii_case(short_name))
    }

    /// Station by name
    pub fn find_station(&self, name: &str) -> Option<&Station> {
        let name = name.trim();
        self.stations
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Vehicle by model
    pub fn find_vehicle(&self, model: &str) -> Option<&Vehicle> {
        self.vehicles
            .iter()
            .find(|v| v.model.eq_ignore_ascii_case(model))
    }

    /// Vehicles an agency fields
    ///
    /// A vehicle belongs to the agency when it names the agency among its
    /// owners or when the agency lists its model.
    pub fn vehicles_for_agency(&self, short_name: &str) -> Vec<&Vehicle> {
        let listed: HashSet<String> = self
            .find_agency(short_name)
            .map(|a| a.vehicle_models.iter().map(|m| m.to_lowercase()).collect())
            .unwrap_or_default();

        self.vehicles
            .iter()
            .filter(|v| {
                v.agencies.iter().any(|a| a.eq_ignore_ascii_case(short_name))
                    || listed.contains(&v.model.to_lowercase())
            })
            .collect()
    }

    /// Stations owned by an agency
    pub fn stations_for_agency(&self, short_name: &str) -> Vec<&Station> {
        self.stations
            .iter()
            .filter(|s| s.agency.eq_ignore_ascii_case(short_name))
            .collect()
    }
}

/// Names in first-seen order, dropping case-insensitive repeats
fn distinct_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .filter(|name| seen.insert(name.to_lowercase()))
        .map(str::to_string)
        .collect()
}

impl ReferenceDataProvider for GameDataCatalog {
    /// Catalog vehicles, plus models agencies list without a vehicle entry
    fn vehicle_models(&self) -> Vec<String> {
        distinct_names(
            self.vehicles.iter().map(|v| v.model.as_str()).chain(
                self.agencies
                    .iter()
                    .flat_map(|a| a.vehicle_models.iter().map(String::as_str)),
            ),
        )
    }

    fn station_names(&self) -> Vec<String> {
        distinct_names(self.stations.iter().map(|s| s.name.as_str()))
    }

    fn outfit_names(&self) -> Vec<String> {
        let combined: Vec<String> = self.outfits.iter().map(OutfitVariation::combined_name).collect();
        distinct_names(combined.iter().map(String::as_str))
    }
}

impl From<GameDataSnapshot> for GameDataCatalog {
    fn from(snapshot: GameDataSnapshot) -> Self {
        Self {
            agencies: snapshot.agencies,
            stations: snapshot.stations,
            vehicles: snapshot.vehicles,
            outfits: snapshot.outfits,
        }
    }
}

impl From<&GameDataCatalog> for GameDataSnapshot {
    fn from(catalog: &GameDataCatalog) -> Self {
        Self {
            agencies: catalog.agencies.clone(),
            stations: catalog.stations.clone(),
            vehicles: catalog.vehicles.clone(),
            outfits: catalog.outfits.clone(),
        }
    }
}
