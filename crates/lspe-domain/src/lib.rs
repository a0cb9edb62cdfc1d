//! # Domain Layer
//!
//! Core types of the LSPDFR Enhanced rank editor.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Rank hierarchy, stations, vehicles and navigation helpers |
//! | [`value_objects`] | Read-only game data (agencies, stations, outfits) |
//! | [`ports`] | Interfaces implemented by outer layers |
//! | [`constants`] | Property names, issue categories, hierarchy limits |
//! | [`error`] | Domain error type |
//!
//! The rank set is a plain `[RankHierarchy]` owned by the editing session.
//! Pay-band back-references are ids, never owning pointers.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::*;
pub use error::{Error, Result};
pub use ports::ReferenceDataProvider;
pub use value_objects::{Agency, OutfitVariation, Station};
