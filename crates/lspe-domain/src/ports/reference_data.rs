//! Reference data port
//!
//! Read-only view of the game data that rank references are checked
//! against. The catalog that implements it lives in the infrastructure
//! layer.

/// Known names a rank configuration may refer to
///
/// Implementations return the names as they appear in the game data;
/// consumers compare them case-insensitively.
pub trait ReferenceDataProvider: Send + Sync {
    /// Every known vehicle model
    fn vehicle_models(&self) -> Vec<String>;

    /// Every known station name
    fn station_names(&self) -> Vec<String>;

    /// Every known outfit as `"OutfitName.VariationName"`
    fn outfit_names(&self) -> Vec<String>;
}
