//! Scalar property edits

use lspe_domain::{RankHierarchy, RankId, Result};
use std::fmt;
use tracing::debug;

use super::{CommandCallbacks, UndoRedoCommand, rank_label, resolve, resolve_mut};

type Setter<V> = Box<dyn Fn(&mut RankHierarchy, V)>;

/// Sets one property of a rank through a setter
///
/// The old value is read at construction; `execute` applies the new value
/// and `undo` applies the old one through the same setter.
pub struct PropertyChangeCommand<V> {
    rank_id: RankId,
    old_value: V,
    new_value: V,
    setter: Setter<V>,
    description: String,
    callbacks: CommandCallbacks,
}

impl<V: Clone + 'static> PropertyChangeCommand<V> {
    /// Prepare setting a property of `rank_id` to `new_value`
    pub fn new(
        ranks: &[RankHierarchy],
        rank_id: RankId,
        description: impl Into<String>,
        getter: impl Fn(&RankHierarchy) -> V,
        setter: impl Fn(&mut RankHierarchy, V) + 'static,
        new_value: V,
    ) -> Result<Self> {
        let old_value = getter(resolve(ranks, &rank_id)?);
        Ok(Self {
            rank_id,
            old_value,
            new_value,
            setter: Box::new(setter),
            description: description.into(),
            callbacks: CommandCallbacks::new(),
        })
    }

    /// Fire `callback` after every execute and undo
    #[must_use]
    pub fn with_callback(mut self, callback: impl Fn() + 'static) -> Self {
        self.callbacks.push(callback);
        self
    }

    /// Value restored by undo
    pub fn old_value(&self) -> &V {
        &self.old_value
    }

    /// Value applied by execute
    pub fn new_value(&self) -> &V {
        &self.new_value
    }

    fn apply(&self, ranks: &mut [RankHierarchy], value: V) -> Result<()> {
        let rank = resolve_mut(ranks, &self.rank_id)?;
        (self.setter)(rank, value);
        self.callbacks.notify();
        Ok(())
    }
}

impl PropertyChangeCommand<String> {
    /// Rename a rank or pay band
    pub fn rename(
        ranks: &[RankHierarchy],
        rank_id: RankId,
        name: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let old = rank_label(resolve(ranks, &rank_id)?).to_string();
        Self::new(
            ranks,
            rank_id,
            format!("Rename '{old}' to '{name}'"),
            |rank| rank.name.clone(),
            |rank, value| rank.name = value,
            name,
        )
    }
}

impl PropertyChangeCommand<i32> {
    /// Change the XP threshold of a rank
    pub fn set_required_points(
        ranks: &[RankHierarchy],
        rank_id: RankId,
        value: i32,
    ) -> Result<Self> {
        let name = rank_label(resolve(ranks, &rank_id)?).to_string();
        Self::new(
            ranks,
            rank_id,
            format!("Set Required Points of '{name}' to {value}"),
            |rank| rank.required_points,
            |rank, value| rank.required_points = value,
            value,
        )
    }

    /// Change the salary of a rank
    pub fn set_salary(ranks: &[RankHierarchy], rank_id: RankId, value: i32) -> Result<Self> {
        let name = rank_label(resolve(ranks, &rank_id)?).to_string();
        Self::new(
            ranks,
            rank_id,
            format!("Set Salary of '{name}' to {value}"),
            |rank| rank.salary,
            |rank, value| rank.salary = value,
            value,
        )
    }
}

impl<V: Clone + 'static> UndoRedoCommand for PropertyChangeCommand<V> {
    fn description(&self) -> &str {
        &self.description
    }

    fn execute(&mut self, ranks: &mut [RankHierarchy]) -> Result<()> {
        debug!(rank = %self.rank_id, change = %self.description, "Property change executed");
        self.apply(ranks, self.new_value.clone())
    }

    fn undo(&mut self, ranks: &mut [RankHierarchy]) -> Result<()> {
        self.apply(ranks, self.old_value.clone())
    }
}

impl<V: fmt::Debug> fmt::Debug for PropertyChangeCommand<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyChangeCommand")
            .field("rank_id", &self.rank_id)
            .field("old_value", &self.old_value)
            .field("new_value", &self.new_value)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
