//! Domain ports
//!
//! Interfaces the domain depends on and outer layers implement.

pub mod reference_data;

pub use reference_data::ReferenceDataProvider;
