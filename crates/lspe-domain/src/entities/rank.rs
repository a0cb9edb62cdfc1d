//! Rank hierarchy entity
//!
//! A rank is either standalone (own XP threshold and salary) or a parent
//! container whose pay bands carry the numbers instead.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{StationAssignment, Vehicle};

/// Stable identity of a rank or pay band
///
/// Survives renames, so issues and commands can refer back to a rank after
/// the user edits it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankId(String);

impl RankId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RankId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for RankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RankId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RankId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A node in the rank hierarchy
///
/// # Example
///
/// ```
/// use lspe_domain::RankHierarchy;
///
/// let mut sergeant = RankHierarchy::parent("Sergeant");
/// sergeant.add_pay_band(RankHierarchy::new("Sergeant I", 1000, 3000));
/// sergeant.add_pay_band(RankHierarchy::new("Sergeant II", 1500, 3400));
///
/// assert!(sergeant.has_pay_bands());
/// assert_eq!(sergeant.pay_bands[0].parent.as_ref(), Some(&sergeant.id));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankHierarchy {
    /// Stable identity
    #[serde(default)]
    pub id: RankId,

    /// Display name
    pub name: String,

    /// XP threshold at which the rank is reached
    #[serde(default)]
    pub required_points: i32,

    /// Pay for the rank
    #[serde(default)]
    pub salary: i32,

    /// Whether the rank is a container for pay bands
    #[serde(default)]
    pub is_parent: bool,

    /// Id of the containing parent rank, for pay bands
    ///
    /// Back-reference only. Rebuilt by [`relink_parents`](crate::relink_parents)
    /// after deserialization.
    #[serde(skip)]
    pub parent: Option<RankId>,

    /// Ordered sub-ranks, empty unless `is_parent`
    #[serde(default)]
    pub pay_bands: Vec<RankHierarchy>,

    /// Station bindings in display order
    #[serde(default)]
    pub stations: Vec<StationAssignment>,

    /// Rank-global vehicles
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,

    /// Rank-global outfits (`"Outfit.Variation"` combined names)
    #[serde(default)]
    pub outfits: Vec<String>,
}

impl RankHierarchy {
    /// Create a standalone rank
    pub fn new(name: impl Into<String>, required_points: i32, salary: i32) -> Self {
        Self {
            id: RankId::generate(),
            name: name.into(),
            required_points,
            salary,
            is_parent: false,
            parent: None,
            pay_bands: Vec::new(),
            stations: Vec::new(),
            vehicles: Vec::new(),
            outfits: Vec::new(),
        }
    }

    /// Create an empty parent rank; its numbers come from its pay bands
    pub fn parent(name: impl Into<String>) -> Self {
        Self {
            is_parent: true,
            ..Self::new(name, 0, 0)
        }
    }

    /// Replace the generated id, for fixtures and deserialized data
    #[must_use]
    pub fn with_id(mut self, id: impl Into<RankId>) -> Self {
        self.id = id.into();
        let id = self.id.clone();
        for band in &mut self.pay_bands {
            band.parent = Some(id.clone());
        }
        self
    }

    /// Add a station assignment
    #[must_use]
    pub fn with_station(mut self, station: StationAssignment) -> Self {
        self.stations.push(station);
        self
    }

    /// Add a rank-global vehicle
    #[must_use]
    pub fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    /// Add a rank-global outfit
    #[must_use]
    pub fn with_outfit(mut self, outfit: impl Into<String>) -> Self {
        self.outfits.push(outfit.into());
        self
    }

    /// Append a pay band, turning this rank into a parent
    pub fn add_pay_band(&mut self, mut band: RankHierarchy) {
        band.parent = Some(self.id.clone());
        self.is_parent = true;
        self.pay_bands.push(band);
    }

    /// Builder form of [`add_pay_band`](Self::add_pay_band)
    #[must_use]
    pub fn with_pay_band(mut self, band: RankHierarchy) -> Self {
        self.add_pay_band(band);
        self
    }

    /// Whether this is a parent that actually carries pay bands
    ///
    /// Such ranks take their numbers, vehicles and stations from the
    /// children, so most checks skip them.
    pub fn has_pay_bands(&self) -> bool {
        self.is_parent && !self.pay_bands.is_empty()
    }

    /// Whether this rank is a pay band of some parent
    pub fn is_pay_band(&self) -> bool {
        self.parent.is_some()
    }

    /// Find a station assignment by name, ignoring case
    pub fn station(&self, name: &str) -> Option<&StationAssignment> {
        self.stations.iter().find(|s| s.is_named(name))
    }

    /// Mutable variant of [`station`](Self::station)
    pub fn station_mut(&mut self, name: &str) -> Option<&mut StationAssignment> {
        self.stations.iter_mut().find(|s| s.is_named(name))
    }
}
