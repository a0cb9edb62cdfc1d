// Clippy allows for complex patterns in infrastructure code
#![allow(clippy::collapsible_if)]

//! # Infrastructure Layer
//!
//! Technical concerns around the rank editor core: where configuration
//! comes from, how logging is set up, and how rank sets and game data get
//! on and off disk.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, TOML file, `LSPE_` env vars) |
//! | [`constants`] | File names, env prefixes and defaults |
//!
//! ### Game Data & Persistence
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | In-memory game data implementing the reference data port |
//! | [`linking`] | Resolves station assignments against the catalog |
//! | [`snapshot`] | JSON documents for rank sets and game data |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod linking;
pub mod logging;
pub mod snapshot;

// Re-export commonly used types
pub use catalog::GameDataCatalog;
pub use config::{ConfigLoader, EditorConfig};
pub use error_ext::ErrorContext;
pub use linking::link_station_references;
pub use snapshot::{GameDataSnapshot, RankSetDocument};
