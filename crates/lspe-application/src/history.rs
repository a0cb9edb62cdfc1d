//! Undo/redo history
//!
//! Two stacks of executed commands. Executing a new command clears the
//! redo stack; the undo stack is bounded and drops its oldest entry when
//! full. Listeners receive a [`HistoryState`] after every change.

use lspe_domain::{RankHierarchy, Result};
use std::collections::VecDeque;
use std::fmt;
use tracing::debug;

use crate::commands::UndoRedoCommand;

/// Commands kept on the undo stack unless configured otherwise
pub const DEFAULT_HISTORY_SIZE: usize = 50;

/// Snapshot of the history for menu and toolbar state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryState {
    /// Commands that can be undone
    pub undo_count: usize,
    /// Commands that can be redone
    pub redo_count: usize,
    /// Description of the next undo
    pub undo_description: Option<String>,
    /// Description of the next redo
    pub redo_description: Option<String>,
}

impl HistoryState {
    /// Whether undo is available
    pub fn can_undo(&self) -> bool {
        self.undo_count > 0
    }

    /// Whether redo is available
    pub fn can_redo(&self) -> bool {
        self.redo_count > 0
    }
}

type Listener = Box<dyn Fn(&HistoryState)>;

/// Bounded undo/redo stacks
pub struct UndoRedoManager {
    undo_stack: VecDeque<Box<dyn UndoRedoCommand>>,
    redo_stack: Vec<Box<dyn UndoRedoCommand>>,
    max_size: usize,
    listeners: Vec<Listener>,
}

impl Default for UndoRedoManager {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoRedoManager {
    /// History holding [`DEFAULT_HISTORY_SIZE`] commands
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_SIZE)
    }

    /// History holding `max_size` commands, at least one
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_size: max_size.max(1),
            listeners: Vec::new(),
        }
    }

    /// Capacity of the undo stack
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Change the capacity, dropping the oldest commands that no longer fit
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size.max(1);
        if self.evict_overflow() {
            self.notify();
        }
    }

    /// Call `listener` after every history change
    pub fn add_listener(&mut self, listener: impl Fn(&HistoryState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Execute `command` and push it onto the undo stack
    ///
    /// A failing command is not recorded and leaves the redo stack intact.
    pub fn execute_command(
        &mut self,
        ranks: &mut [RankHierarchy],
        mut command: Box<dyn UndoRedoCommand>,
    ) -> Result<()> {
        command.execute(ranks)?;
        debug!(command = command.description(), "Executed command");

        self.undo_stack.push_back(command);
        self.evict_overflow();
        self.redo_stack.clear();
        self.notify();
        Ok(())
    }

    /// [`execute_command`](Self::execute_command) for an unboxed command
    pub fn execute<C: UndoRedoCommand + 'static>(
        &mut self,
        ranks: &mut [RankHierarchy],
        command: C,
    ) -> Result<()> {
        self.execute_command(ranks, Box::new(command))
    }

    /// Undo the most recent command
    ///
    /// Returns `false` when there is nothing to undo. A failing undo puts
    /// the command back on the undo stack.
    pub fn undo(&mut self, ranks: &mut [RankHierarchy]) -> Result<bool> {
        let Some(mut command) = self.undo_stack.pop_back() else {
            return Ok(false);
        };
        if let Err(error) = command.undo(ranks) {
            self.undo_stack.push_back(command);
            return Err(error);
        }
        debug!(command = command.description(), "Undid command");

        self.redo_stack.push(command);
        self.notify();
        Ok(true)
    }

    /// Re-execute the most recently undone command
    ///
    /// Returns `false` when there is nothing to redo. A failing redo puts
    /// the command back on the redo stack.
    pub fn redo(&mut self, ranks: &mut [RankHierarchy]) -> Result<bool> {
        let Some(mut command) = self.redo_stack.pop() else {
            return Ok(false);
        };
        if let Err(error) = command.execute(ranks) {
            self.redo_stack.push(command);
            return Err(error);
        }
        debug!(command = command.description(), "Redid command");

        self.undo_stack.push_back(command);
        self.evict_overflow();
        self.notify();
        Ok(true)
    }

    /// Forget every command
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        debug!("Cleared command history");
        self.notify();
    }

    /// Whether undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Commands on the undo stack
    pub fn undo_stack_size(&self) -> usize {
        self.undo_stack.len()
    }

    /// Commands on the redo stack
    pub fn redo_stack_size(&self) -> usize {
        self.redo_stack.len()
    }

    /// Description of the command the next undo reverts
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.back().map(|c| c.description())
    }

    /// Description of the command the next redo re-applies
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.description())
    }

    /// Current state, as passed to listeners
    pub fn state(&self) -> HistoryState {
        HistoryState {
            undo_count: self.undo_stack.len(),
            redo_count: self.redo_stack.len(),
            undo_description: self.undo_description().map(str::to_string),
            redo_description: self.redo_description().map(str::to_string),
        }
    }

    /// Drop the oldest commands beyond capacity; `true` if any were dropped
    fn evict_overflow(&mut self) -> bool {
        let mut evicted = false;
        while self.undo_stack.len() > self.max_size {
            if let Some(oldest) = self.undo_stack.pop_front() {
                debug!(command = oldest.description(), "Evicted oldest command from history");
            }
            evicted = true;
        }
        evicted
    }

    fn notify(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let state = self.state();
        for listener in &self.listeners {
            listener(&state);
        }
    }
}

impl fmt::Debug for UndoRedoManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoRedoManager")
            .field("undo", &self.undo_stack.len())
            .field("redo", &self.redo_stack.len())
            .field("max_size", &self.max_size)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
