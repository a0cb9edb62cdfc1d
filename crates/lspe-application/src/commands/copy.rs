//! Copying vehicles or outfits between ranks
//!
//! Both commands take the source rank's items at construction time, the
//! rank-global list and every station override list. Station lists are
//! matched to the target's stations by name, ignoring case; lists of
//! source stations the target does not have go to the target's global
//! list instead.

use lspe_domain::{
    Error, ItemScope, RankHierarchy, RankId, RankItem, Result, Vehicle, contains_item,
    items_in_scope_mut,
};
use tracing::debug;

use super::{CommandCallbacks, UndoRedoCommand, rank_label, resolve, resolve_mut};

/// Merges vehicles from another rank
pub type CopyVehiclesFromRankCommand = CopyFromRankCommand<Vehicle>;
/// Merges outfits from another rank
pub type CopyOutfitsFromRankCommand = CopyFromRankCommand<String>;
/// Overwrites a rank's vehicles with another rank's
pub type CopyVehiclesToRankCommand = CopyToRankCommand<Vehicle>;
/// Overwrites a rank's outfits with another rank's
pub type CopyOutfitsToRankCommand = CopyToRankCommand<String>;

/// Every item of kind `T` a rank holds
#[derive(Debug, Clone)]
struct ItemSnapshot<T> {
    global: Vec<T>,
    stations: Vec<(String, Vec<T>)>,
}

impl<T: RankItem> ItemSnapshot<T> {
    fn capture(rank: &RankHierarchy) -> Self {
        Self {
            global: T::global(rank).to_vec(),
            stations: rank
                .stations
                .iter()
                .map(|s| (s.station_name.clone(), T::station(s).to_vec()))
                .collect(),
        }
    }
}

/// Append the items of `items` missing from `collection`, recording each
fn push_missing<T: RankItem>(
    collection: &mut Vec<T>,
    items: &[T],
    scope: &ItemScope,
    added: &mut Vec<(ItemScope, T)>,
) {
    for item in items {
        if !contains_item(collection, item) {
            collection.push(item.clone());
            added.push((scope.clone(), item.clone()));
        }
    }
}

fn prepare(
    ranks: &[RankHierarchy],
    source_id: &RankId,
    target_id: &RankId,
) -> Result<(String, String)> {
    if source_id == target_id {
        return Err(Error::invalid_argument(
            "Cannot copy a rank's items onto itself",
        ));
    }
    let source = rank_label(resolve(ranks, source_id)?).to_string();
    let target = rank_label(resolve(ranks, target_id)?).to_string();
    Ok((source, target))
}

/// Additive copy: merges the source's items into the target
///
/// Items the target already has are skipped. Only the items actually added
/// are recorded, so undo leaves pre-existing items alone and running the
/// same copy twice makes the second run a no-op.
#[derive(Debug)]
pub struct CopyFromRankCommand<T: RankItem> {
    target_id: RankId,
    source: ItemSnapshot<T>,
    added: Vec<(ItemScope, T)>,
    description: String,
    callbacks: CommandCallbacks,
}

impl<T: RankItem> CopyFromRankCommand<T> {
    /// Prepare merging the items of `source_id` into `target_id`
    pub fn new(ranks: &[RankHierarchy], source_id: &RankId, target_id: RankId) -> Result<Self> {
        let (source_name, target_name) = prepare(ranks, source_id, &target_id)?;
        let source = ItemSnapshot::capture(resolve(ranks, source_id)?);
        Ok(Self {
            target_id,
            source,
            added: Vec::new(),
            description: format!("Copy {}s from '{source_name}' to '{target_name}'", T::KIND),
            callbacks: CommandCallbacks::new(),
        })
    }

    /// Fire `callback` after every execute and undo
    #[must_use]
    pub fn with_callback(mut self, callback: impl Fn() + 'static) -> Self {
        self.callbacks.push(callback);
        self
    }

    /// Items added by the last execute, with the collection they went to
    pub fn added(&self) -> &[(ItemScope, T)] {
        &self.added
    }
}

impl<T: RankItem> UndoRedoCommand for CopyFromRankCommand<T> {
    fn description(&self) -> &str {
        &self.description
    }

    fn execute(&mut self, ranks: &mut [RankHierarchy]) -> Result<()> {
        let target = resolve_mut(ranks, &self.target_id)?;
        let mut added = Vec::new();

        push_missing(
            T::global_mut(target),
            &self.source.global,
            &ItemScope::Global,
            &mut added,
        );
        for (station_name, items) in &self.source.stations {
            match target.station_mut(station_name) {
                Some(station) => {
                    let scope = ItemScope::station(&station.station_name);
                    push_missing(T::station_mut(station), items, &scope, &mut added);
                }
                None => push_missing(T::global_mut(target), items, &ItemScope::Global, &mut added),
            }
        }

        debug!(added = added.len(), kind = T::KIND, "Copy from rank executed");
        self.added = added;
        self.callbacks.notify();
        Ok(())
    }

    fn undo(&mut self, ranks: &mut [RankHierarchy]) -> Result<()> {
        let target = resolve_mut(ranks, &self.target_id)?;
        for (scope, item) in self.added.iter().rev() {
            // The station may have been removed since; its items went with it.
            if let Ok(collection) = items_in_scope_mut::<T>(target, scope)
                && let Some(position) = collection.iter().rposition(|e| e.same_item(item))
            {
                collection.remove(position);
            }
        }
        self.callbacks.notify();
        Ok(())
    }
}

/// Overwriting copy: replaces the target's items with the source's
///
/// The target's global list and every station override list are cleared
/// first. Undo restores the captured lists, station lists by position so
/// that stations sharing a name each get their own list back.
#[derive(Debug)]
pub struct CopyToRankCommand<T: RankItem> {
    target_id: RankId,
    source: ItemSnapshot<T>,
    previous: Option<ItemSnapshot<T>>,
    description: String,
    callbacks: CommandCallbacks,
}

impl<T: RankItem> CopyToRankCommand<T> {
    /// Prepare overwriting the items of `target_id` with those of `source_id`
    pub fn new(ranks: &[RankHierarchy], source_id: &RankId, target_id: RankId) -> Result<Self> {
        let (source_name, target_name) = prepare(ranks, source_id, &target_id)?;
        let source = ItemSnapshot::capture(resolve(ranks, source_id)?);
        Ok(Self {
            target_id,
            source,
            previous: None,
            description: format!(
                "Replace {}s of '{target_name}' with those of '{source_name}'",
                T::KIND
            ),
            callbacks: CommandCallbacks::new(),
        })
    }

    /// Fire `callback` after every execute and undo
    #[must_use]
    pub fn with_callback(mut self, callback: impl Fn() + 'static) -> Self {
        self.callbacks.push(callback);
        self
    }
}

impl<T: RankItem> UndoRedoCommand for CopyToRankCommand<T> {
    fn description(&self) -> &str {
        &self.description
    }

    fn execute(&mut self, ranks: &mut [RankHierarchy]) -> Result<()> {
        let target = resolve_mut(ranks, &self.target_id)?;
        self.previous = Some(ItemSnapshot::capture(target));

        T::global_mut(target).clear();
        for station in &mut target.stations {
            T::station_mut(station).clear();
        }

        let mut copied = Vec::new();
        push_missing(
            T::global_mut(target),
            &self.source.global,
            &ItemScope::Global,
            &mut copied,
        );
        for (station_name, items) in &self.source.stations {
            match target.station_mut(station_name) {
                Some(station) => {
                    let scope = ItemScope::station(&station.station_name);
                    push_missing(T::station_mut(station), items, &scope, &mut copied);
                }
                None => push_missing(T::global_mut(target), items, &ItemScope::Global, &mut copied),
            }
        }

        debug!(copied = copied.len(), kind = T::KIND, "Copy to rank executed");
        self.callbacks.notify();
        Ok(())
    }

    fn undo(&mut self, ranks: &mut [RankHierarchy]) -> Result<()> {
        let target = resolve_mut(ranks, &self.target_id)?;
        let Some(previous) = self.previous.take() else {
            return Ok(());
        };

        *T::global_mut(target) = previous.global;
        for (station, (station_name, items)) in target.stations.iter_mut().zip(previous.stations) {
            if station.is_named(&station_name) {
                *T::station_mut(station) = items;
            }
        }
        self.callbacks.notify();
        Ok(())
    }
}
