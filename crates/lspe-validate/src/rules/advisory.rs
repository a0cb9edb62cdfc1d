//! Advisory rule
//!
//! Soft quality hints over the flattened progression. A promotion that
//! takes stations, vehicles or outfits away from the player is legal but
//! usually unintended, and so is a rank with nothing to drive or wear.

use lspe_domain::constants::{CATEGORY_OUTFIT, CATEGORY_STATION, CATEGORY_VEHICLE};
use lspe_domain::{
    RankHierarchy, RankItem, ReferenceDataProvider, Vehicle, distinct_items, flatten,
    has_any_items,
};
use std::collections::HashSet;

use super::label;
use crate::issue::ValidationIssue;
use crate::result::ValidationResult;
use crate::rule::{SingleRankValidationRule, ValidationRule};
use crate::severity::ValidationContext;

/// Rule id of [`AdvisoryRule`]
pub const ADVISORY_RULE_ID: &str = "ADVISORY";

/// Names listed in a lost-items message before the rest is counted
const MAX_LISTED_ITEMS: usize = 3;

const CONTEXTS: &[ValidationContext] = &[
    ValidationContext::Full,
    ValidationContext::RealTime,
    ValidationContext::AdvisoryOnly,
];

/// Non-blocking hints about rank content
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvisoryRule;

impl AdvisoryRule {
    fn check_rank(
        rank: &RankHierarchy,
        previous: Option<&RankHierarchy>,
        result: &mut ValidationResult,
    ) {
        Self::check_has_items::<Vehicle>(rank, CATEGORY_VEHICLE, result);
        Self::check_has_items::<String>(rank, CATEGORY_OUTFIT, result);

        let Some(previous) = previous else {
            return;
        };

        if rank.stations.len() < previous.stations.len() {
            result.add(
                ValidationIssue::advisory(
                    ADVISORY_RULE_ID,
                    CATEGORY_STATION,
                    format!(
                        "Rank '{}' has fewer stations ({}) than the previous rank '{}' ({})",
                        label(rank),
                        rank.stations.len(),
                        label(previous),
                        previous.stations.len()
                    ),
                )
                .for_rank(rank),
            );
        }

        Self::check_lost_items::<Vehicle>(rank, previous, CATEGORY_VEHICLE, result);
        Self::check_lost_items::<String>(rank, previous, CATEGORY_OUTFIT, result);
    }

    fn check_has_items<T: RankItem>(
        rank: &RankHierarchy,
        category: &str,
        result: &mut ValidationResult,
    ) {
        if !has_any_items::<T>(rank) {
            result.add(
                ValidationIssue::advisory(
                    ADVISORY_RULE_ID,
                    category,
                    format!("Rank '{}' has no {}s assigned", label(rank), T::KIND),
                )
                .for_rank(rank)
                .with_suggested_fix(format!("Assign at least one {}", T::KIND)),
            );
        }
    }

    fn check_lost_items<T: RankItem>(
        rank: &RankHierarchy,
        previous: &RankHierarchy,
        category: &str,
        result: &mut ValidationResult,
    ) {
        let current: HashSet<String> = distinct_items::<T>(rank)
            .into_iter()
            .map(T::item_key)
            .collect();
        let lost: Vec<&str> = distinct_items::<T>(previous)
            .into_iter()
            .filter(|item| !current.contains(&item.item_key()))
            .map(T::item_label)
            .collect();

        if lost.is_empty() {
            return;
        }

        result.add(
            ValidationIssue::advisory(
                ADVISORY_RULE_ID,
                category,
                format!(
                    "Rank '{}' loses {} {}(s) available at '{}': {}",
                    label(rank),
                    lost.len(),
                    T::KIND,
                    label(previous),
                    list_names(&lost)
                ),
            )
            .for_rank(rank),
        );
    }
}

/// `a, b, c and N more`
fn list_names(names: &[&str]) -> String {
    let listed = names
        .iter()
        .take(MAX_LISTED_ITEMS)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    let rest = names.len().saturating_sub(MAX_LISTED_ITEMS);
    if rest > 0 {
        format!("{listed} and {rest} more")
    } else {
        listed
    }
}

impl ValidationRule for AdvisoryRule {
    fn rule_id(&self) -> &str {
        ADVISORY_RULE_ID
    }

    fn rule_name(&self) -> &str {
        "Advisory Checks"
    }

    fn applicable_contexts(&self) -> &[ValidationContext] {
        CONTEXTS
    }

    fn validate(
        &self,
        ranks: &[RankHierarchy],
        result: &mut ValidationResult,
        _context: ValidationContext,
        _data: Option<&dyn ReferenceDataProvider>,
    ) {
        let flattened = flatten(ranks);
        for (index, rank) in flattened.iter().enumerate() {
            let previous = index.checked_sub(1).map(|i| flattened[i]);
            Self::check_rank(rank, previous, result);
        }
    }

    fn as_single_rank(&self) -> Option<&dyn SingleRankValidationRule> {
        Some(self)
    }
}

impl SingleRankValidationRule for AdvisoryRule {
    fn validate_single_rank(
        &self,
        rank: &RankHierarchy,
        ranks: &[RankHierarchy],
        result: &mut ValidationResult,
        _context: ValidationContext,
        _data: Option<&dyn ReferenceDataProvider>,
    ) {
        // Pay bands are checked on their own.
        if rank.has_pay_bands() {
            return;
        }

        let flattened = flatten(ranks);
        let previous = flattened
            .iter()
            .position(|r| r.id == rank.id)
            .and_then(|i| i.checked_sub(1))
            .map(|i| flattened[i]);
        Self::check_rank(rank, previous, result);
    }
}
