//! Rank progression rule
//!
//! Works on the flattened progression (parents replaced by their pay
//! bands): the first entry starts at 0 XP, every following entry needs
//! strictly more XP than its predecessor, numbers are never negative, and
//! salary should not go down. Parent ranks need at least two pay bands.

use lspe_domain::constants::{
    CATEGORY_RANK, CATEGORY_STRUCTURE, MIN_PAY_BANDS, PROPERTY_REQUIRED_POINTS, PROPERTY_SALARY,
};
use lspe_domain::{RankHierarchy, ReferenceDataProvider, find_parent, flatten};

use super::label;
use crate::fix::AutoFix;
use crate::issue::ValidationIssue;
use crate::result::ValidationResult;
use crate::rule::{
    PropertyValidationRule, PropertyValue, SingleRankValidationRule, ValidationRule,
};
use crate::severity::{ValidationContext, ValidationSeverity};

/// Rule id of [`RankProgressionRule`]
pub const RANK_PROGRESSION_RULE_ID: &str = "RANK_PROGRESSION";

const CONTEXTS: &[ValidationContext] = &[
    ValidationContext::Full,
    ValidationContext::Startup,
    ValidationContext::PreGenerate,
    ValidationContext::RealTime,
];

/// Checks XP thresholds, salaries and pay band counts
#[derive(Debug, Clone, Copy, Default)]
pub struct RankProgressionRule;

impl RankProgressionRule {
    /// Salary regressions are warnings, but only hints while typing
    fn salary_severity(context: ValidationContext) -> ValidationSeverity {
        if context == ValidationContext::RealTime {
            ValidationSeverity::Advisory
        } else {
            ValidationSeverity::Warning
        }
    }

    fn check_pay_band_count(rank: &RankHierarchy, result: &mut ValidationResult) {
        if rank.is_parent && rank.pay_bands.len() < MIN_PAY_BANDS {
            result.add(
                ValidationIssue::error(
                    RANK_PROGRESSION_RULE_ID,
                    CATEGORY_STRUCTURE,
                    format!(
                        "Parent rank '{}' must have at least {MIN_PAY_BANDS} pay bands (has {})",
                        label(rank),
                        rank.pay_bands.len()
                    ),
                )
                .for_rank(rank)
                .with_suggested_fix("Add pay bands or convert it to a standalone rank"),
            );
        }
    }

    fn check_non_negative(rank: &RankHierarchy, result: &mut ValidationResult) {
        if rank.required_points < 0 {
            result.add(
                ValidationIssue::error(
                    RANK_PROGRESSION_RULE_ID,
                    CATEGORY_RANK,
                    format!(
                        "Rank '{}' has negative Required Points ({})",
                        label(rank),
                        rank.required_points
                    ),
                )
                .for_rank(rank)
                .with_property(PROPERTY_REQUIRED_POINTS)
                .with_suggested_fix("Set Required Points to 0")
                .with_auto_fix(AutoFix::SetRequiredPoints {
                    rank_id: rank.id.clone(),
                    value: 0,
                }),
            );
        }
        if rank.salary < 0 {
            result.add(
                ValidationIssue::error(
                    RANK_PROGRESSION_RULE_ID,
                    CATEGORY_RANK,
                    format!("Rank '{}' has negative Salary ({})", label(rank), rank.salary),
                )
                .for_rank(rank)
                .with_property(PROPERTY_SALARY)
                .with_suggested_fix("Set Salary to 0")
                .with_auto_fix(AutoFix::SetSalary {
                    rank_id: rank.id.clone(),
                    value: 0,
                }),
            );
        }
    }

    fn check_first(rank: &RankHierarchy, result: &mut ValidationResult) {
        if rank.required_points != 0 {
            result.add(
                ValidationIssue::error(
                    RANK_PROGRESSION_RULE_ID,
                    CATEGORY_RANK,
                    format!(
                        "First rank '{}' must have Required Points of 0 (currently {})",
                        label(rank),
                        rank.required_points
                    ),
                )
                .for_rank(rank)
                .with_property(PROPERTY_REQUIRED_POINTS)
                .with_suggested_fix("Set Required Points to 0")
                .with_auto_fix(AutoFix::SetRequiredPoints {
                    rank_id: rank.id.clone(),
                    value: 0,
                }),
            );
        }
    }

    fn check_against_previous(
        previous: &RankHierarchy,
        rank: &RankHierarchy,
        ranks: &[RankHierarchy],
        result: &mut ValidationResult,
        context: ValidationContext,
    ) {
        if rank.required_points <= previous.required_points {
            let noun = if Self::share_parent(ranks, previous, rank) {
                "Pay band"
            } else {
                "Rank"
            };
            result.add(
                ValidationIssue::error(
                    RANK_PROGRESSION_RULE_ID,
                    CATEGORY_RANK,
                    format!(
                        "{noun} '{}' must have Required Points greater than '{}' ({}), currently {}",
                        label(rank),
                        label(previous),
                        previous.required_points,
                        rank.required_points
                    ),
                )
                .for_rank(rank)
                .with_property(PROPERTY_REQUIRED_POINTS)
                .with_suggested_fix(format!(
                    "Set Required Points above {}",
                    previous.required_points
                )),
            );
        }

        if rank.salary < previous.salary {
            result.add(
                ValidationIssue::new(
                    Self::salary_severity(context),
                    RANK_PROGRESSION_RULE_ID,
                    CATEGORY_RANK,
                    format!(
                        "Rank '{}' pays less ({}) than the previous rank '{}' ({})",
                        label(rank),
                        rank.salary,
                        label(previous),
                        previous.salary
                    ),
                )
                .for_rank(rank)
                .with_property(PROPERTY_SALARY),
            );
        }
    }

    fn check_against_next(next: &RankHierarchy, rank: &RankHierarchy, result: &mut ValidationResult) {
        if next.required_points <= rank.required_points {
            result.add(
                ValidationIssue::error(
                    RANK_PROGRESSION_RULE_ID,
                    CATEGORY_RANK,
                    format!(
                        "Rank '{}' must have Required Points less than the next rank '{}' ({}), currently {}",
                        label(rank),
                        label(next),
                        next.required_points,
                        rank.required_points
                    ),
                )
                .for_rank(rank)
                .with_property(PROPERTY_REQUIRED_POINTS),
            );
        }
    }

    fn share_parent(ranks: &[RankHierarchy], a: &RankHierarchy, b: &RankHierarchy) -> bool {
        match (find_parent(ranks, &a.id), find_parent(ranks, &b.id)) {
            (Some(left), Some(right)) => left.id == right.id,
            _ => false,
        }
    }

    fn property_error(
        rank: &RankHierarchy,
        property_name: &str,
        message: String,
        result: &mut ValidationResult,
    ) {
        result.add(
            ValidationIssue::error(RANK_PROGRESSION_RULE_ID, CATEGORY_RANK, message)
                .for_rank(rank)
                .with_property(property_name),
        );
    }

    fn validate_required_points(
        rank: &RankHierarchy,
        value: &PropertyValue,
        ranks: &[RankHierarchy],
        result: &mut ValidationResult,
    ) {
        let Some(points) = value.as_integer() else {
            Self::property_error(
                rank,
                PROPERTY_REQUIRED_POINTS,
                format!("Required Points must be a whole number, got '{value}'"),
                result,
            );
            return;
        };

        if points < 0 {
            Self::property_error(
                rank,
                PROPERTY_REQUIRED_POINTS,
                "Required Points cannot be negative".to_string(),
                result,
            );
        }

        let flattened = flatten(ranks);
        let Some(position) = flattened.iter().position(|r| r.id == rank.id) else {
            return;
        };

        if position == 0 && points != 0 {
            Self::property_error(
                rank,
                PROPERTY_REQUIRED_POINTS,
                "The first rank must have Required Points of 0".to_string(),
                result,
            );
        }
        if let Some(previous) = position.checked_sub(1).map(|i| flattened[i]) {
            if points <= i64::from(previous.required_points) {
                Self::property_error(
                    rank,
                    PROPERTY_REQUIRED_POINTS,
                    format!(
                        "Required Points must be greater than '{}' ({})",
                        label(previous),
                        previous.required_points
                    ),
                    result,
                );
            }
        }
        if let Some(next) = flattened.get(position + 1) {
            if i64::from(next.required_points) <= points {
                Self::property_error(
                    rank,
                    PROPERTY_REQUIRED_POINTS,
                    format!(
                        "Required Points must be less than '{}' ({})",
                        label(next),
                        next.required_points
                    ),
                    result,
                );
            }
        }
    }

    fn validate_salary(
        rank: &RankHierarchy,
        value: &PropertyValue,
        ranks: &[RankHierarchy],
        result: &mut ValidationResult,
    ) {
        let Some(salary) = value.as_integer() else {
            Self::property_error(
                rank,
                PROPERTY_SALARY,
                format!("Salary must be a whole number, got '{value}'"),
                result,
            );
            return;
        };

        if salary < 0 {
            Self::property_error(
                rank,
                PROPERTY_SALARY,
                "Salary cannot be negative".to_string(),
                result,
            );
        }

        let flattened = flatten(ranks);
        let Some(position) = flattened.iter().position(|r| r.id == rank.id) else {
            return;
        };
        let severity = Self::salary_severity(ValidationContext::RealTime);

        if let Some(previous) = position.checked_sub(1).map(|i| flattened[i]) {
            if salary < i64::from(previous.salary) {
                result.add(
                    ValidationIssue::new(
                        severity,
                        RANK_PROGRESSION_RULE_ID,
                        CATEGORY_RANK,
                        format!(
                            "Salary is lower than the previous rank '{}' ({})",
                            label(previous),
                            previous.salary
                        ),
                    )
                    .for_rank(rank)
                    .with_property(PROPERTY_SALARY),
                );
            }
        }
        if let Some(next) = flattened.get(position + 1) {
            if i64::from(next.salary) < salary {
                result.add(
                    ValidationIssue::new(
                        severity,
                        RANK_PROGRESSION_RULE_ID,
                        CATEGORY_RANK,
                        format!(
                            "Salary is higher than the next rank '{}' ({})",
                            label(next),
                            next.salary
                        ),
                    )
                    .for_rank(rank)
                    .with_property(PROPERTY_SALARY),
                );
            }
        }
    }
}

impl ValidationRule for RankProgressionRule {
    fn rule_id(&self) -> &str {
        RANK_PROGRESSION_RULE_ID
    }

    fn rule_name(&self) -> &str {
        "Rank Progression"
    }

    fn applicable_contexts(&self) -> &[ValidationContext] {
        CONTEXTS
    }

    fn validate(
        &self,
        ranks: &[RankHierarchy],
        result: &mut ValidationResult,
        context: ValidationContext,
        _data: Option<&dyn ReferenceDataProvider>,
    ) {
        if ranks.is_empty() {
            result.add(
                ValidationIssue::error(
                    RANK_PROGRESSION_RULE_ID,
                    CATEGORY_STRUCTURE,
                    "No ranks defined",
                )
                .with_suggested_fix("Add at least one rank"),
            );
            return;
        }

        for rank in ranks.iter().filter(|r| r.is_parent) {
            Self::check_pay_band_count(rank, result);
        }

        let flattened = flatten(ranks);
        for (index, rank) in flattened.iter().enumerate() {
            Self::check_non_negative(rank, result);
            match index.checked_sub(1) {
                None => Self::check_first(rank, result),
                Some(previous) => Self::check_against_previous(
                    flattened[previous],
                    rank,
                    ranks,
                    result,
                    context,
                ),
            }
        }
    }

    fn as_single_rank(&self) -> Option<&dyn SingleRankValidationRule> {
        Some(self)
    }

    fn as_property(&self) -> Option<&dyn PropertyValidationRule> {
        Some(self)
    }
}

impl SingleRankValidationRule for RankProgressionRule {
    fn validate_single_rank(
        &self,
        rank: &RankHierarchy,
        ranks: &[RankHierarchy],
        result: &mut ValidationResult,
        context: ValidationContext,
        _data: Option<&dyn ReferenceDataProvider>,
    ) {
        // A parent's numbers are ignored; only its shape matters.
        if rank.is_parent {
            Self::check_pay_band_count(rank, result);
            return;
        }

        Self::check_non_negative(rank, result);

        let flattened = flatten(ranks);
        let Some(position) = flattened.iter().position(|r| r.id == rank.id) else {
            return;
        };
        match position.checked_sub(1) {
            None => Self::check_first(rank, result),
            Some(previous) => {
                Self::check_against_previous(flattened[previous], rank, ranks, result, context);
            }
        }
        if let Some(next) = flattened.get(position + 1) {
            Self::check_against_next(next, rank, result);
        }
    }
}

impl PropertyValidationRule for RankProgressionRule {
    fn validate_property(
        &self,
        rank: &RankHierarchy,
        property_name: &str,
        value: &PropertyValue,
        ranks: &[RankHierarchy],
        result: &mut ValidationResult,
        _data: Option<&dyn ReferenceDataProvider>,
    ) {
        if rank.is_parent {
            return;
        }
        match property_name {
            PROPERTY_REQUIRED_POINTS => {
                Self::validate_required_points(rank, value, ranks, result);
            }
            PROPERTY_SALARY => Self::validate_salary(rank, value, ranks, result),
            _ => {}
        }
    }
}
