//! Bulk add and remove of vehicles or outfits on one collection

use lspe_domain::{
    Error, ItemScope, RankHierarchy, RankId, RankItem, Result, Vehicle, contains_item,
    items_in_scope, items_in_scope_mut,
};
use tracing::debug;

use super::{CommandCallbacks, UndoRedoCommand, rank_label, resolve, resolve_mut};

/// Adds vehicles to a collection
pub type BulkAddVehiclesCommand = BulkAddCommand<Vehicle>;
/// Adds outfits to a collection
pub type BulkAddOutfitsCommand = BulkAddCommand<String>;
/// Removes vehicles from a collection
pub type BulkRemoveVehiclesCommand = BulkRemoveCommand<Vehicle>;
/// Removes outfits from a collection
pub type BulkRemoveOutfitsCommand = BulkRemoveCommand<String>;
/// Clears the vehicles of a collection
pub type RemoveAllVehiclesCommand = RemoveAllCommand<Vehicle>;
/// Clears the outfits of a collection
pub type RemoveAllOutfitsCommand = RemoveAllCommand<String>;

fn check_target<T: RankItem>(
    ranks: &[RankHierarchy],
    rank_id: &RankId,
    scope: &ItemScope,
) -> Result<String> {
    let rank = resolve(ranks, rank_id)?;
    items_in_scope::<T>(rank, scope)?;
    Ok(rank_label(rank).to_string())
}

fn scope_suffix(scope: &ItemScope) -> String {
    match scope {
        ItemScope::Global => String::new(),
        ItemScope::Station(name) => format!(" at '{name}'"),
    }
}

/// Appends items that are not in the collection yet
///
/// Only the items actually appended are recorded, so undo never touches
/// items that were there before.
#[derive(Debug)]
pub struct BulkAddCommand<T: RankItem> {
    rank_id: RankId,
    scope: ItemScope,
    items: Vec<T>,
    added: Vec<T>,
    description: String,
    callbacks: CommandCallbacks,
}

impl<T: RankItem> BulkAddCommand<T> {
    /// Prepare adding `items` to the collection `scope` of `rank_id`
    ///
    /// Fails when the rank or station does not exist or `items` is empty.
    pub fn new(
        ranks: &[RankHierarchy],
        rank_id: RankId,
        scope: ItemScope,
        items: Vec<T>,
    ) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::invalid_argument(format!("No {}s to add", T::KIND)));
        }
        let rank_name = check_target::<T>(ranks, &rank_id, &scope)?;
        let description = format!(
            "Add {} {}(s) to '{rank_name}'{}",
            items.len(),
            T::KIND,
            scope_suffix(&scope)
        );
        Ok(Self {
            rank_id,
            scope,
            items,
            added: Vec::new(),
            description,
            callbacks: CommandCallbacks::new(),
        })
    }

    /// Fire `callback` after every execute and undo
    #[must_use]
    pub fn with_callback(mut self, callback: impl Fn() + 'static) -> Self {
        self.callbacks.push(callback);
        self
    }

    /// Items appended by the last execute
    pub fn added(&self) -> &[T] {
        &self.added
    }
}

impl<T: RankItem> UndoRedoCommand for BulkAddCommand<T> {
    fn description(&self) -> &str {
        &self.description
    }

    fn execute(&mut self, ranks: &mut [RankHierarchy]) -> Result<()> {
        let rank = resolve_mut(ranks, &self.rank_id)?;
        let collection = items_in_scope_mut::<T>(rank, &self.scope)?;

        self.added.clear();
        for item in &self.items {
            if !contains_item(collection, item) {
                collection.push(item.clone());
                self.added.push(item.clone());
            }
        }
        debug!(added = self.added.len(), kind = T::KIND, "Bulk add executed");
        self.callbacks.notify();
        Ok(())
    }

    fn undo(&mut self, ranks: &mut [RankHierarchy]) -> Result<()> {
        let rank = resolve_mut(ranks, &self.rank_id)?;
        let collection = items_in_scope_mut::<T>(rank, &self.scope)?;
        collection.retain(|item| !contains_item(&self.added, item));
        self.callbacks.notify();
        Ok(())
    }
}

/// Removes the given items, restoring them at their old positions on undo
#[derive(Debug)]
pub struct BulkRemoveCommand<T: RankItem> {
    rank_id: RankId,
    scope: ItemScope,
    items: Vec<T>,
    removed: Vec<(usize, T)>,
    description: String,
    callbacks: CommandCallbacks,
}

impl<T: RankItem> BulkRemoveCommand<T> {
    /// Prepare removing `items` from the collection `scope` of `rank_id`
    pub fn new(
        ranks: &[RankHierarchy],
        rank_id: RankId,
        scope: ItemScope,
        items: Vec<T>,
    ) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::invalid_argument(format!("No {}s to remove", T::KIND)));
        }
        let rank_name = check_target::<T>(ranks, &rank_id, &scope)?;
        let description = format!(
            "Remove {} {}(s) from '{rank_name}'{}",
            items.len(),
            T::KIND,
            scope_suffix(&scope)
        );
        Ok(Self {
            rank_id,
            scope,
            items,
            removed: Vec::new(),
            description,
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

impl<T: RankItem> UndoRedoCommand for BulkRemoveCommand<T> {
    fn description(&self) -> &str {
        &self.description
    }

    fn execute(&mut self, ranks: &mut [RankHierarchy]) -> Result<()> {
        let rank = resolve_mut(ranks, &self.rank_id)?;
        let collection = items_in_scope_mut::<T>(rank, &self.scope)?;

        let positions: Vec<usize> = collection
            .iter()
            .enumerate()
            .filter(|(_, item)| contains_item(&self.items, item))
            .map(|(index, _)| index)
            .collect();

        self.removed.clear();
        for &index in positions.iter().rev() {
            let item = collection.remove(index);
            self.removed.push((index, item));
        }
        self.removed.reverse();

        debug!(removed = self.removed.len(), kind = T::KIND, "Bulk remove executed");
        self.callbacks.notify();
        Ok(())
    }

    fn undo(&mut self, ranks: &mut [RankHierarchy]) -> Result<()> {
        let rank = resolve_mut(ranks, &self.rank_id)?;
        let collection = items_in_scope_mut::<T>(rank, &self.scope)?;
        for (index, item) in &self.removed {
            let index = (*index).min(collection.len());
            collection.insert(index, item.clone());
        }
        self.callbacks.notify();
        Ok(())
    }
}

/// Clears a collection, restoring its full previous content on undo
#[derive(Debug)]
pub struct RemoveAllCommand<T: RankItem> {
    rank_id: RankId,
    scope: ItemScope,
    snapshot: Vec<T>,
    description: String,
    callbacks: CommandCallbacks,
}

impl<T: RankItem> RemoveAllCommand<T> {
    /// Prepare clearing the collection `scope` of `rank_id`
    pub fn new(ranks: &[RankHierarchy], rank_id: RankId, scope: ItemScope) -> Result<Self> {
        let rank_name = check_target::<T>(ranks, &rank_id, &scope)?;
        let description = format!(
            "Remove all {}s from '{rank_name}'{}",
            T::KIND,
            scope_suffix(&scope)
        );
        Ok(Self {
            rank_id,
            scope,
            snapshot: Vec::new(),
            description,
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

impl<T: RankItem> UndoRedoCommand for RemoveAllCommand<T> {
    fn description(&self) -> &str {
        &self.description
    }

    fn execute(&mut self, ranks: &mut [RankHierarchy]) -> Result<()> {
        let rank = resolve_mut(ranks, &self.rank_id)?;
        let collection = items_in_scope_mut::<T>(rank, &self.scope)?;
        self.snapshot = std::mem::take(collection);
        debug!(removed = self.snapshot.len(), kind = T::KIND, "Remove all executed");
        self.callbacks.notify();
        Ok(())
    }

    fn undo(&mut self, ranks: &mut [RankHierarchy]) -> Result<()> {
        let rank = resolve_mut(ranks, &self.rank_id)?;
        let collection = items_in_scope_mut::<T>(rank, &self.scope)?;
        let added_since = std::mem::take(collection);
        *collection = std::mem::take(&mut self.snapshot);
        collection.extend(added_since);
        self.callbacks.notify();
        Ok(())
    }
}
