//! Rank set validation for LSPDFR Enhanced
//!
//! Pluggable rules check a rank hierarchy for structural correctness,
//! progression consistency, dangling game-data references and advisory
//! quality issues. Each rule opts into the [`ValidationContext`]s it runs in.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`severity`] | Severity levels and validation contexts |
//! | [`issue`] | A single finding |
//! | [`fix`] | Serializable auto-fix actions |
//! | [`result`] | Aggregated findings, filters and summaries |
//! | [`rule`] | Rule traits and property values |
//! | [`rules`] | The default rules |
//! | [`service`] | Rule registry and dispatch |
//!
//! ```
//! use lspe_domain::{RankHierarchy, StationAssignment};
//! use lspe_validate::{ValidationContext, ValidationService};
//!
//! let ranks = vec![
//!     RankHierarchy::new("Officer", 0, 1000).with_station(StationAssignment::new("Mission Row")),
//!     RankHierarchy::new("Detective", 0, 2000).with_station(StationAssignment::new("Mission Row")),
//! ];
//! let result = ValidationService::new().validate_ranks(&ranks, ValidationContext::Full);
//! assert!(!result.is_valid());
//! ```

pub mod fix;
pub mod issue;
pub mod result;
pub mod rule;
pub mod rules;
pub mod service;
pub mod severity;

pub use fix::AutoFix;
pub use issue::ValidationIssue;
pub use result::ValidationResult;
pub use rule::{PropertyValidationRule, PropertyValue, SingleRankValidationRule, ValidationRule};
pub use rules::{
    AdvisoryRule, RankProgressionRule, RankStructureRule, ReferenceValidationRule, default_rules,
};
pub use service::ValidationService;
pub use severity::{ValidationContext, ValidationSeverity};
