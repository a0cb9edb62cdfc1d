//! Rank structure rule
//!
//! Names must be present and should be unique across the flattened
//! progression: among the top-level ranks, among the pay bands of one
//! parent, and between standalone ranks and pay bands. Pay bands of
//! different parents may share names.

use lspe_domain::constants::{CATEGORY_RANK, CATEGORY_STRUCTURE, PROPERTY_NAME};
use lspe_domain::{RankHierarchy, RankId, ReferenceDataProvider, find_parent, flatten, siblings};
use std::collections::HashSet;

use super::{label, name_key};
use crate::issue::ValidationIssue;
use crate::result::ValidationResult;
use crate::rule::{
    PropertyValidationRule, PropertyValue, SingleRankValidationRule, ValidationRule,
};
use crate::severity::ValidationContext;

/// Rule id of [`RankStructureRule`]
pub const RANK_STRUCTURE_RULE_ID: &str = "RANK_STRUCTURE";

const CONTEXTS: &[ValidationContext] = &[
    ValidationContext::Full,
    ValidationContext::Startup,
    ValidationContext::PreGenerate,
    ValidationContext::RealTime,
];

/// Checks rank and pay band naming
#[derive(Debug, Clone, Copy, Default)]
pub struct RankStructureRule;

impl RankStructureRule {
    fn check_name(rank: &RankHierarchy, description: &str, result: &mut ValidationResult) {
        if rank.name.trim().is_empty() {
            result.add(
                ValidationIssue::error(
                    RANK_STRUCTURE_RULE_ID,
                    CATEGORY_RANK,
                    format!("{description} has no name"),
                )
                .for_rank(rank)
                .with_property(PROPERTY_NAME)
                .with_suggested_fix("Enter a name for the rank"),
            );
        }
    }

    fn check_pay_band_names(parent: &RankHierarchy, result: &mut ValidationResult) {
        for (index, band) in parent.pay_bands.iter().enumerate() {
            Self::check_name(
                band,
                &format!("Pay band {} of '{}'", index + 1, label(parent)),
                result,
            );
        }
        Self::check_duplicates(&parent.pay_bands, Some(parent), result);
    }

    /// Warn on every repeated name after its first occurrence
    fn check_duplicates(
        list: &[RankHierarchy],
        parent: Option<&RankHierarchy>,
        result: &mut ValidationResult,
    ) {
        let mut seen = HashSet::new();
        for rank in list {
            if rank.name.trim().is_empty() {
                continue;
            }
            if !seen.insert(name_key(&rank.name)) {
                result.add(Self::duplicate_issue(rank, &rank.name, parent));
            }
        }
    }

    fn duplicate_issue(
        rank: &RankHierarchy,
        name: &str,
        parent: Option<&RankHierarchy>,
    ) -> ValidationIssue {
        let message = match parent {
            Some(parent) => format!(
                "Duplicate pay band name '{}' within '{}'",
                name.trim(),
                label(parent)
            ),
            None => format!("Duplicate rank name '{}'", name.trim()),
        };
        ValidationIssue::warning(RANK_STRUCTURE_RULE_ID, CATEGORY_STRUCTURE, message)
            .for_rank(rank)
            .with_property(PROPERTY_NAME)
            .with_suggested_fix("Give each rank a unique name")
    }

    /// Warn when a standalone rank and a pay band share a name, on whichever
    /// comes later in the flattened progression
    fn check_cross_level_duplicates(ranks: &[RankHierarchy], result: &mut ValidationResult) {
        let mut standalone = HashSet::new();
        let mut bands = HashSet::new();
        for rank in flatten(ranks) {
            if rank.name.trim().is_empty() {
                continue;
            }
            let key = name_key(&rank.name);
            let (own, other) = if rank.is_pay_band() {
                (&mut bands, &standalone)
            } else {
                (&mut standalone, &bands)
            };
            if other.contains(&key) {
                result.add(Self::cross_level_issue(rank, &rank.name));
            }
            own.insert(key);
        }
    }

    fn cross_level_issue(rank: &RankHierarchy, name: &str) -> ValidationIssue {
        ValidationIssue::warning(
            RANK_STRUCTURE_RULE_ID,
            CATEGORY_STRUCTURE,
            format!(
                "Rank name '{}' is used by both a standalone rank and a pay band",
                name.trim()
            ),
        )
        .for_rank(rank)
        .with_property(PROPERTY_NAME)
        .with_suggested_fix("Give each rank a unique name")
    }

    /// Whether a flattened rank on the other level than `id` already uses
    /// `name`: a pay band for a standalone rank, a standalone rank for a pay
    /// band. Parents with pay bands are not part of the progression.
    fn other_level_uses_name(ranks: &[RankHierarchy], rank: &RankHierarchy, name: &str) -> bool {
        if rank.is_parent {
            return false;
        }
        let key = name_key(name);
        let is_band = find_parent(ranks, &rank.id).is_some() || rank.is_pay_band();
        flatten(ranks).into_iter().any(|other| {
            other.id != rank.id && other.is_pay_band() != is_band && name_key(&other.name) == key
        })
    }

    /// Whether a sibling other than `exclude` already uses `name`
    fn sibling_uses_name(list: &[RankHierarchy], exclude: &RankId, name: &str) -> bool {
        let key = name_key(name);
        list.iter()
            .any(|other| &other.id != exclude && name_key(&other.name) == key)
    }
}

impl ValidationRule for RankStructureRule {
    fn rule_id(&self) -> &str {
        RANK_STRUCTURE_RULE_ID
    }

    fn rule_name(&self) -> &str {
        "Rank Structure"
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
        for (index, rank) in ranks.iter().enumerate() {
            Self::check_name(rank, &format!("Rank at position {}", index + 1), result);
            if rank.is_parent {
                Self::check_pay_band_names(rank, result);
            }
        }
        Self::check_duplicates(ranks, None, result);
        Self::check_cross_level_duplicates(ranks, result);
    }

    fn as_single_rank(&self) -> Option<&dyn SingleRankValidationRule> {
        Some(self)
    }

    fn as_property(&self) -> Option<&dyn PropertyValidationRule> {
        Some(self)
    }
}

impl SingleRankValidationRule for RankStructureRule {
    fn validate_single_rank(
        &self,
        rank: &RankHierarchy,
        ranks: &[RankHierarchy],
        result: &mut ValidationResult,
        _context: ValidationContext,
        _data: Option<&dyn ReferenceDataProvider>,
    ) {
        Self::check_name(rank, "Rank", result);

        if !rank.name.trim().is_empty() {
            if Self::sibling_uses_name(siblings(ranks, &rank.id), &rank.id, &rank.name) {
                let parent = find_parent(ranks, &rank.id);
                result.add(Self::duplicate_issue(rank, &rank.name, parent));
            } else if Self::other_level_uses_name(ranks, rank, &rank.name) {
                result.add(Self::cross_level_issue(rank, &rank.name));
            }
        }

        if rank.is_parent {
            Self::check_pay_band_names(rank, result);
        }
    }
}

impl PropertyValidationRule for RankStructureRule {
    fn validate_property(
        &self,
        rank: &RankHierarchy,
        property_name: &str,
        value: &PropertyValue,
        ranks: &[RankHierarchy],
        result: &mut ValidationResult,
        _data: Option<&dyn ReferenceDataProvider>,
    ) {
        if property_name != PROPERTY_NAME {
            return;
        }

        let name = value.as_text();
        if name.trim().is_empty() {
            result.add(
                ValidationIssue::error(
                    RANK_STRUCTURE_RULE_ID,
                    CATEGORY_RANK,
                    "Rank name cannot be empty",
                )
                .for_rank(rank)
                .with_property(PROPERTY_NAME),
            );
            return;
        }

        if Self::sibling_uses_name(siblings(ranks, &rank.id), &rank.id, &name) {
            let parent = find_parent(ranks, &rank.id);
            result.add(Self::duplicate_issue(rank, &name, parent));
        } else if Self::other_level_uses_name(ranks, rank, &name) {
            result.add(Self::cross_level_issue(rank, &name));
        }
    }
}
