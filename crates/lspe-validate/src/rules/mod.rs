//! Default validation rules
//!
//! | Rule | Id | Contexts |
//! |------|----|----------|
//! | [`RankStructureRule`] | `RANK_STRUCTURE` | full, startup, pre-generate, real-time |
//! | [`RankProgressionRule`] | `RANK_PROGRESSION` | full, startup, pre-generate, real-time |
//! | [`ReferenceValidationRule`] | `REFERENCE_VALIDATION` | full, startup, pre-generate |
//! | [`AdvisoryRule`] | `ADVISORY` | full, real-time, advisory-only |

pub mod advisory;
pub mod progression;
pub mod reference;
pub mod structure;

pub use advisory::AdvisoryRule;
pub use progression::RankProgressionRule;
pub use reference::ReferenceValidationRule;
pub use structure::RankStructureRule;

use lspe_domain::RankHierarchy;

use crate::issue::UNNAMED_RANK;
use crate::rule::ValidationRule;

/// The rules a fresh service is seeded with, in dispatch order
pub fn default_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(RankStructureRule),
        Box::new(RankProgressionRule),
        Box::new(ReferenceValidationRule),
        Box::new(AdvisoryRule),
    ]
}

/// Rank name for messages, with a placeholder for blank names
pub(crate) fn label(rank: &RankHierarchy) -> &str {
    if rank.name.trim().is_empty() {
        UNNAMED_RANK
    } else {
        &rank.name
    }
}

/// Case-folded, trimmed name used for duplicate detection
pub(crate) fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
