//! # LSPDFR Enhanced rank editor core
//!
//! Validation engine and undo/redo framework for LSPDFR Enhanced rank
//! configurations, plus a headless validator.
//!
//! This crate is the public facade: it re-exports each layer under its own
//! module and the most used types at the root.
//!
//! ## Example
//!
//! ```
//! use lspe::{RankHierarchy, StationAssignment, ValidationContext, ValidationService};
//!
//! let ranks = vec![
//!     RankHierarchy::new("Officer", 0, 1000).with_station(StationAssignment::new("Mission Row")),
//! ];
//! let result = ValidationService::new().validate_ranks(&ranks, ValidationContext::Full);
//! assert!(!result.has_errors());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Rank model, game data types, reference data port, errors
//! - `validate` - Rules, severities, results and the validation service
//! - `application` - Reversible commands and the undo/redo manager
//! - `infrastructure` - Configuration, logging, snapshots and game data catalog
//! - `cli` - The `lspe` command line

pub mod cli;

/// Domain layer - rank model and shared types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use lspe_domain::*;
}

/// Validation layer - rules and the validation service
///
/// Re-exports from the validate crate for convenience
pub mod validate {
    pub use lspe_validate::*;
}

/// Application layer - undo/redo commands
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use lspe_application::*;
}

/// Infrastructure layer - config, logging and persistence
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use lspe_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use application::{UndoRedoCommand, UndoRedoManager};
pub use domain::*;
pub use validate::{
    AutoFix, ValidationContext, ValidationIssue, ValidationResult, ValidationService,
    ValidationSeverity,
};
