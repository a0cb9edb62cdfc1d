//! Station assignment entity

use serde::{Deserialize, Serialize};

use super::Vehicle;

/// A rank's binding to a named station from the game data
///
/// Vehicles and outfits listed here are additive to the rank-global
/// collections and only apply while the player works from this station.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StationAssignment {
    /// Key into the game-data station list
    pub station_name: String,

    /// Patrol zones served from the station
    #[serde(default)]
    pub zones: Vec<String>,

    /// Uniform style identifier
    #[serde(default)]
    pub style_id: i32,

    /// Station-specific vehicles
    #[serde(default)]
    pub vehicle_overrides: Vec<Vehicle>,

    /// Station-specific outfits (`"Outfit.Variation"` combined names)
    #[serde(default)]
    pub outfit_overrides: Vec<String>,

    /// Canonical station name resolved by the linking pass
    ///
    /// Lookup only; never owned and never serialized.
    #[serde(skip)]
    pub station_reference: Option<String>,
}

impl StationAssignment {
    /// Create an assignment with no zones or overrides
    pub fn new(station_name: impl Into<String>) -> Self {
        Self {
            station_name: station_name.into(),
            ..Self::default()
        }
    }

    /// Add a patrol zone
    #[must_use]
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zones.push(zone.into());
        self
    }

    /// Add a station-specific vehicle
    #[must_use]
    pub fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicle_overrides.push(vehicle);
        self
    }

    /// Add a station-specific outfit
    #[must_use]
    pub fn with_outfit(mut self, outfit: impl Into<String>) -> Self {
        self.outfit_overrides.push(outfit.into());
        self
    }

    /// Whether this assignment targets `name`, ignoring case
    pub fn is_named(&self, name: &str) -> bool {
        self.station_name.eq_ignore_ascii_case(name)
    }

    /// Whether the linking pass resolved this station against the game data
    pub fn is_linked(&self) -> bool {
        self.station_reference.is_some()
    }
}
