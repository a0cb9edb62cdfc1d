//! Value objects

pub mod game_data;

pub use game_data::{Agency, OutfitVariation, Station};
