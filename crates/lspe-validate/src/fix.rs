//! Auto-fix actions attached to validation issues
//!
//! A fix is a small serializable mutation against the rank set, resolved by
//! rank id when applied. Applying one mutates the ranks directly; it does
//! not go through the undo stack.

use lspe_domain::{
    Error, ItemScope, RankHierarchy, RankId, RankItem, Result, Vehicle, find_rank_mut,
    items_in_scope_mut,
};
use serde::{Deserialize, Serialize};

/// A mutation that resolves a validation issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AutoFix {
    /// Overwrite a rank's XP threshold
    SetRequiredPoints {
        /// Target rank
        rank_id: RankId,
        /// New threshold
        value: i32,
    },
    /// Overwrite a rank's salary
    SetSalary {
        /// Target rank
        rank_id: RankId,
        /// New salary
        value: i32,
    },
    /// Drop a vehicle from one of the rank's collections
    RemoveVehicle {
        /// Target rank
        rank_id: RankId,
        /// Collection holding the vehicle
        scope: ItemScope,
        /// Vehicle model, matched case-insensitively
        model: String,
    },
    /// Drop an outfit from one of the rank's collections
    RemoveOutfit {
        /// Target rank
        rank_id: RankId,
        /// Collection holding the outfit
        scope: ItemScope,
        /// Combined outfit name, matched case-insensitively
        outfit: String,
    },
    /// Drop a station assignment from the rank
    RemoveStation {
        /// Target rank
        rank_id: RankId,
        /// Station name, matched case-insensitively
        station_name: String,
    },
}

impl AutoFix {
    /// The rank this fix mutates
    pub fn rank_id(&self) -> &RankId {
        match self {
            Self::SetRequiredPoints { rank_id, .. }
            | Self::SetSalary { rank_id, .. }
            | Self::RemoveVehicle { rank_id, .. }
            | Self::RemoveOutfit { rank_id, .. }
            | Self::RemoveStation { rank_id, .. } => rank_id,
        }
    }

    /// Human readable description of the mutation
    pub fn description(&self) -> String {
        match self {
            Self::SetRequiredPoints { value, .. } => format!("Set Required Points to {value}"),
            Self::SetSalary { value, .. } => format!("Set Salary to {value}"),
            Self::RemoveVehicle { model, scope, .. } => {
                format!("Remove vehicle '{model}'{}", scope_suffix(scope))
            }
            Self::RemoveOutfit { outfit, scope, .. } => {
                format!("Remove outfit '{outfit}'{}", scope_suffix(scope))
            }
            Self::RemoveStation { station_name, .. } => {
                format!("Remove station '{station_name}'")
            }
        }
    }

    /// Apply the fix to the rank set
    ///
    /// Fails when the rank no longer exists. Removing an item from a station
    /// that is already gone is a no-op.
    pub fn apply(&self, ranks: &mut [RankHierarchy]) -> Result<()> {
        let rank = find_rank_mut(ranks, self.rank_id())
            .ok_or_else(|| Error::rank_not_found(self.rank_id().as_str()))?;

        match self {
            Self::SetRequiredPoints { value, .. } => rank.required_points = *value,
            Self::SetSalary { value, .. } => rank.salary = *value,
            Self::RemoveVehicle { scope, model, .. } => {
                let probe = Vehicle::new(model.clone(), "");
                remove_matching(rank, scope, &probe);
            }
            Self::RemoveOutfit { scope, outfit, .. } => {
                remove_matching(rank, scope, outfit);
            }
            Self::RemoveStation { station_name, .. } => {
                rank.stations.retain(|s| !s.is_named(station_name));
            }
        }
        Ok(())
    }
}

// A station removed earlier in the same fix pass took its overrides with it.
fn remove_matching<T: RankItem>(rank: &mut RankHierarchy, scope: &ItemScope, probe: &T) {
    if let Ok(items) = items_in_scope_mut::<T>(rank, scope) {
        items.retain(|item| !item.same_item(probe));
    }
}

fn scope_suffix(scope: &ItemScope) -> String {
    match scope {
        ItemScope::Global => String::new(),
        ItemScope::Station(name) => format!(" from station '{name}'"),
    }
}
