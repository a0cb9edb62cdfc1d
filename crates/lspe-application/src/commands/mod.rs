//! Reversible editing commands
//!
//! A command resolves its target rank by id and captures what it needs to
//! restore the previous state: at construction for the data it copies in,
//! at execution for the data it overwrites. `undo` is the exact inverse of
//! the last `execute`.
//!
//! | Command | Effect |
//! |---------|--------|
//! | [`BulkAddCommand`] | Append items not yet present |
//! | [`BulkRemoveCommand`] | Remove the given items, remembering their positions |
//! | [`RemoveAllCommand`] | Clear a collection |
//! | [`CopyFromRankCommand`] | Merge another rank's items in, skipping duplicates |
//! | [`CopyToRankCommand`] | Overwrite a rank's items with another rank's |
//! | [`PropertyChangeCommand`] | Set a scalar property through a setter |

pub mod bulk;
pub mod copy;
pub mod property;

pub use bulk::{
    BulkAddCommand, BulkAddOutfitsCommand, BulkAddVehiclesCommand, BulkRemoveCommand,
    BulkRemoveOutfitsCommand, BulkRemoveVehiclesCommand, RemoveAllCommand,
    RemoveAllOutfitsCommand, RemoveAllVehiclesCommand,
};
pub use copy::{
    CopyFromRankCommand, CopyOutfitsFromRankCommand, CopyOutfitsToRankCommand,
    CopyToRankCommand, CopyVehiclesFromRankCommand, CopyVehiclesToRankCommand,
};
pub use property::PropertyChangeCommand;

use lspe_domain::{Error, RankHierarchy, RankId, Result, find_rank, find_rank_mut};
use std::fmt;

/// A reversible mutation of the rank set
pub trait UndoRedoCommand {
    /// Human readable description shown in undo/redo menus
    fn description(&self) -> &str;

    /// Apply the mutation
    fn execute(&mut self, ranks: &mut [RankHierarchy]) -> Result<()>;

    /// Revert the last `execute`
    fn undo(&mut self, ranks: &mut [RankHierarchy]) -> Result<()>;
}

/// Caller-supplied hooks fired after `execute` and `undo`
///
/// Typically a list refresh and a "document modified" flag. They are not
/// part of the undo contract and cannot fail.
#[derive(Default)]
pub struct CommandCallbacks {
    callbacks: Vec<Box<dyn Fn()>>,
}

impl CommandCallbacks {
    /// No callbacks
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a callback
    pub fn push(&mut self, callback: impl Fn() + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Fire every callback in registration order
    pub fn notify(&self) {
        for callback in &self.callbacks {
            callback();
        }
    }

    /// Number of registered callbacks
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether no callback is registered
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for CommandCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandCallbacks")
            .field("len", &self.callbacks.len())
            .finish()
    }
}

pub(crate) fn resolve<'a>(ranks: &'a [RankHierarchy], id: &RankId) -> Result<&'a RankHierarchy> {
    find_rank(ranks, id).ok_or_else(|| Error::rank_not_found(id.as_str()))
}

pub(crate) fn resolve_mut<'a>(
    ranks: &'a mut [RankHierarchy],
    id: &RankId,
) -> Result<&'a mut RankHierarchy> {
    find_rank_mut(ranks, id).ok_or_else(|| Error::rank_not_found(id.as_str()))
}

/// Display name of a rank in command descriptions
pub(crate) fn rank_label(rank: &RankHierarchy) -> &str {
    if rank.name.trim().is_empty() {
        "(unnamed)"
    } else {
        &rank.name
    }
}
