//! Domain layer constants
//!
//! Names shared between the rank model, the validation rules and the
//! editing surfaces. Infrastructure constants live in
//! `lspe_infrastructure::constants`.

// ============================================================================
// RANK PROPERTY NAMES
// ============================================================================

/// Property name of a rank's display name
pub const PROPERTY_NAME: &str = "Name";

/// Property name of a rank's XP threshold
pub const PROPERTY_REQUIRED_POINTS: &str = "RequiredPoints";

/// Property name of a rank's salary
pub const PROPERTY_SALARY: &str = "Salary";

// ============================================================================
// ISSUE CATEGORIES
// ============================================================================

/// Category for issues about rank fields and progression
pub const CATEGORY_RANK: &str = "Rank";

/// Category for issues about vehicle assignments
pub const CATEGORY_VEHICLE: &str = "Vehicle";

/// Category for issues about station assignments
pub const CATEGORY_STATION: &str = "Station";

/// Category for issues about outfit assignments
pub const CATEGORY_OUTFIT: &str = "Outfit";

/// Category for issues about the shape of the hierarchy
pub const CATEGORY_STRUCTURE: &str = "Structure";

// ============================================================================
// HIERARCHY LIMITS
// ============================================================================

/// Minimum number of pay bands a parent rank must carry
pub const MIN_PAY_BANDS: usize = 2;

/// Separator between outfit and variation in a combined outfit name
pub const OUTFIT_NAME_SEPARATOR: char = '.';
