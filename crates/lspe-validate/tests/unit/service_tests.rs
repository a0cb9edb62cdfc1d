//! Unit tests for the validation service

use lspe_domain::{RankHierarchy, ReferenceDataProvider};
use lspe_validate::{
    PropertyValue, ValidationContext, ValidationIssue, ValidationResult, ValidationRule,
    ValidationService,
};
use std::sync::Arc;

use crate::test_utils::{StaticData, complete_rank, valid_ranks};

/// Bulk-only rule that reports one advisory per run
struct CountingRule {
    id: &'static str,
}

impl ValidationRule for CountingRule {
    fn rule_id(&self) -> &str {
        self.id
    }

    fn rule_name(&self) -> &str {
        "Counting"
    }

    fn applicable_contexts(&self) -> &[ValidationContext] {
        &[ValidationContext::Full, ValidationContext::RealTime]
    }

    fn validate(
        &self,
        ranks: &[RankHierarchy],
        result: &mut ValidationResult,
        _context: ValidationContext,
        _data: Option<&dyn ReferenceDataProvider>,
    ) {
        result.add(ValidationIssue::advisory(
            self.id,
            "Rank",
            format!("{} rank(s) seen", ranks.len()),
        ));
    }
}

fn rule_ids(service: &ValidationService, context: ValidationContext) -> Vec<String> {
    service
        .rules_for_context(context)
        .iter()
        .map(|r| r.rule_id().to_string())
        .collect()
}

#[test]
fn test_seeded_with_default_rules() {
    let service = ValidationService::new();
    let ids: Vec<&str> = service.registered_rules().iter().map(|r| r.rule_id()).collect();
    assert_eq!(
        ids,
        vec!["RANK_STRUCTURE", "RANK_PROGRESSION", "REFERENCE_VALIDATION", "ADVISORY"]
    );
}

#[test]
fn test_rules_for_context() {
    let service = ValidationService::new();
    assert_eq!(
        rule_ids(&service, ValidationContext::RealTime),
        vec!["RANK_STRUCTURE", "RANK_PROGRESSION", "ADVISORY"]
    );
    assert_eq!(rule_ids(&service, ValidationContext::AdvisoryOnly), vec!["ADVISORY"]);
    assert_eq!(rule_ids(&service, ValidationContext::Startup).len(), 3);
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let mut service = ValidationService::new();
    assert!(service.register_rule(Box::new(CountingRule { id: "COUNTING" })));
    assert!(!service.register_rule(Box::new(CountingRule { id: "COUNTING" })));
    assert!(!service.register_rule(Box::new(CountingRule { id: "ADVISORY" })));

    assert_eq!(service.registered_rules().len(), 5);
    assert_eq!(service.registered_rules()[3].rule_name(), "Advisory Checks");
}

#[test]
fn test_unregister() {
    let mut service = ValidationService::new();
    assert!(!service.unregister_rule(""));
    assert!(!service.unregister_rule("   "));
    assert!(!service.unregister_rule("advisory"));
    assert!(service.unregister_rule("ADVISORY"));
    assert_eq!(service.registered_rules().len(), 3);
}

#[test]
fn test_empty_rank_set_yields_empty_result() {
    let result = ValidationService::new().validate_ranks(&[], ValidationContext::Full);
    assert!(result.is_empty());
}

#[test]
fn test_valid_ranks_with_game_data() {
    let service = ValidationService::with_data_provider(Arc::new(StaticData::sample()));
    assert!(service.validate_ranks(&valid_ranks(), ValidationContext::Full).is_empty());
}

#[test]
fn test_lonely_officer_scenario() {
    let ranks = vec![RankHierarchy::new("Officer", 0, 1000)];
    let result = ValidationService::new().validate_ranks(&ranks, ValidationContext::Full);

    assert_eq!(result.issues_by_rule("ADVISORY").len(), 2);
    assert_eq!(result.advisory_count(), 2);
    let reference = result.issues_by_rule("REFERENCE_VALIDATION");
    assert_eq!(reference.len(), 1);
    assert!(reference[0].message.contains("no station assignments"));
    assert_eq!(result.error_count(), 1);
}

#[test]
fn test_context_controls_dispatch() {
    let ranks = vec![RankHierarchy::new("Officer", 0, 1000)];
    let service = ValidationService::new();

    let live = service.validate_ranks(&ranks, ValidationContext::RealTime);
    assert!(live.issues_by_rule("REFERENCE_VALIDATION").is_empty());

    let advisories = service.validate_ranks(&ranks, ValidationContext::AdvisoryOnly);
    assert_eq!(advisories.len(), advisories.advisory_count());
}

#[test]
fn test_custom_rule_runs_after_defaults() {
    let mut service = ValidationService::new();
    service.register_rule(Box::new(CountingRule { id: "COUNTING" }));

    let result = service.validate_ranks(&valid_ranks(), ValidationContext::Full);
    let last = result.issues().last().expect("counting rule reported");
    assert_eq!(last.message, "3 rank(s) seen");
}

#[test]
fn test_single_rank_skips_bulk_only_rules() {
    let mut service = ValidationService::new();
    service.register_rule(Box::new(CountingRule { id: "COUNTING" }));

    let ranks = valid_ranks();
    let result = service.validate_single_rank(&ranks[1], &ranks, ValidationContext::Full);
    assert!(result.issues_by_rule("COUNTING").is_empty());
}

#[test]
fn test_validate_rank_by_id() {
    let ranks = vec![
        complete_rank("Officer", 0, 1000),
        complete_rank("Detective", 0, 2000),
    ];
    let service = ValidationService::new();

    let result = service.validate_rank_by_id(&"detective".into(), &ranks, ValidationContext::Full);
    assert_eq!(result.error_count(), 1);

    let unknown = service.validate_rank_by_id(&"ghost".into(), &ranks, ValidationContext::Full);
    assert!(unknown.is_empty());
}

#[test]
fn test_validate_property() {
    let ranks = valid_ranks();
    let service = ValidationService::new();

    assert!(
        service
            .validate_property(&ranks[1], "  ", &PropertyValue::from(-1), &ranks)
            .is_empty()
    );

    let renamed = service.validate_property(&ranks[1], "Name", &"Officer".into(), &ranks);
    assert_eq!(renamed.warning_count(), 1);

    let points = service.validate_property(&ranks[1], "RequiredPoints", &0.into(), &ranks);
    assert_eq!(points.error_count(), 1);
}

#[test]
fn test_disabling_all_rules() {
    let mut service = ValidationService::new();
    for id in ["RANK_STRUCTURE", "RANK_PROGRESSION", "REFERENCE_VALIDATION", "ADVISORY"] {
        assert!(service.unregister_rule(id));
    }
    let ranks = vec![RankHierarchy::new("", -1, -1)];
    assert!(service.validate_ranks(&ranks, ValidationContext::Full).is_empty());
    assert!(ValidationService::empty().registered_rules().is_empty());
}
