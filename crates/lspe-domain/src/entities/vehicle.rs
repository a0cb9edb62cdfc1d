//! Vehicle assignment entity

use serde::{Deserialize, Serialize};

/// A vehicle a rank (or one of its stations) may use in-game
///
/// Identity is the spawn `model`, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Spawn model name (e.g. `police2`)
    pub model: String,

    /// Human readable name shown in the editor
    #[serde(default)]
    pub display_name: String,

    /// Short names of the agencies that own this vehicle
    #[serde(default)]
    pub agencies: Vec<String>,
}

impl Vehicle {
    /// Create a vehicle with a display name and no agency bindings
    pub fn new(model: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            display_name: display_name.into(),
            agencies: Vec::new(),
        }
    }

    /// Attach an owning agency
    #[must_use]
    pub fn with_agency(mut self, agency: impl Into<String>) -> Self {
        self.agencies.push(agency.into());
        self
    }

    /// Whether two vehicles share a model, ignoring case
    pub fn same_model(&self, other: &Vehicle) -> bool {
        self.model.eq_ignore_ascii_case(&other.model)
    }

    /// Display name, falling back to the model when none is set
    pub fn label(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.model
        } else {
            &self.display_name
        }
    }
}
