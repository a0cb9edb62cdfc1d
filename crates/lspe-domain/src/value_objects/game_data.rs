//! Read-only game data discovered from the mod's data files
//!
//! These value objects describe what exists in the game, as opposed to
//! what a rank configuration assigns.

use serde::{Deserialize, Serialize};

use crate::constants::OUTFIT_NAME_SEPARATOR;

/// A law-enforcement agency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    /// Full agency name
    pub name: String,

    /// Short name used as a key by vehicles and stations (e.g. `LSPD`)
    pub short_name: String,

    /// Vehicle models the agency fields
    #[serde(default)]
    pub vehicle_models: Vec<String>,
}

impl Agency {
    /// Create an agency with no vehicles
    pub fn new(name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            vehicle_models: Vec::new(),
        }
    }
}

/// A station a rank can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Station name, the key used by station assignments
    pub name: String,

    /// Short name of the owning agency
    #[serde(default)]
    pub agency: String,

    /// Map zone the station sits in
    #[serde(default)]
    pub zone: Option<String>,
}

impl Station {
    /// Create a station owned by `agency`
    pub fn new(name: impl Into<String>, agency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            agency: agency.into(),
            zone: None,
        }
    }
}

/// One variation of an outfit in the outfit catalog
///
/// Ranks reference it by [`combined_name`](Self::combined_name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitVariation {
    /// Outfit name
    pub outfit_name: String,

    /// Variation name within the outfit
    pub variation_name: String,
}

impl OutfitVariation {
    /// Create a variation
    pub fn new(outfit_name: impl Into<String>, variation_name: impl Into<String>) -> Self {
        Self {
            outfit_name: outfit_name.into(),
            variation_name: variation_name.into(),
        }
    }

    /// `"OutfitName.VariationName"`
    pub fn combined_name(&self) -> String {
        format!(
            "{}{}{}",
            self.outfit_name, OUTFIT_NAME_SEPARATOR, self.variation_name
        )
    }

    /// Split a combined name back into its parts
    ///
    /// Splits on the first separator; returns `None` when there is none.
    pub fn parse(combined: &str) -> Option<Self> {
        combined
            .split_once(OUTFIT_NAME_SEPARATOR)
            .map(|(outfit, variation)| Self::new(outfit, variation))
    }
}
