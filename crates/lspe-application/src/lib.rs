//! Application Layer - LSPDFR Enhanced rank editor
//!
//! Every editing operation that must be reversible is expressed as an
//! [`UndoRedoCommand`] and run through an [`UndoRedoManager`].
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`commands`] | Command contract, callbacks and the concrete commands |
//! | [`history`] | Bounded undo/redo stacks with change notification |
//!
//! Commands never hold references into the rank set. They address ranks
//! by [`RankId`](lspe_domain::RankId) and receive the set on every
//! `execute`/`undo`, so the editing session keeps sole ownership.
//!
//! ```
//! use lspe_application::{BulkAddOutfitsCommand, UndoRedoManager};
//! use lspe_domain::{ItemScope, RankHierarchy};
//!
//! let mut ranks = vec![RankHierarchy::new("Officer", 0, 1000).with_id("officer")];
//! let mut history = UndoRedoManager::new();
//!
//! let command = BulkAddOutfitsCommand::new(
//!     &ranks,
//!     "officer".into(),
//!     ItemScope::Global,
//!     vec!["LSPD.Class A".to_string()],
//! )?;
//! history.execute(&mut ranks, command)?;
//! assert_eq!(ranks[0].outfits.len(), 1);
//!
//! history.undo(&mut ranks)?;
//! assert!(ranks[0].outfits.is_empty());
//! # Ok::<(), lspe_domain::Error>(())
//! ```

pub mod commands;
pub mod history;

pub use commands::*;
pub use history::{DEFAULT_HISTORY_SIZE, HistoryState, UndoRedoManager};
