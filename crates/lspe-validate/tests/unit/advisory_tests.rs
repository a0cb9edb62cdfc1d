//! Unit tests for the advisory rule

use lspe_domain::{RankHierarchy, StationAssignment, Vehicle};
use lspe_validate::{
    AdvisoryRule, SingleRankValidationRule, ValidationContext, ValidationResult, ValidationRule,
    ValidationSeverity,
};

use crate::test_utils::{STATION, complete_rank, valid_ranks};

fn validate(ranks: &[RankHierarchy]) -> ValidationResult {
    let mut result = ValidationResult::new();
    AdvisoryRule.validate(ranks, &mut result, ValidationContext::Full, None);
    result
}

fn validate_single(rank: &RankHierarchy, ranks: &[RankHierarchy]) -> ValidationResult {
    let mut result = ValidationResult::new();
    AdvisoryRule.validate_single_rank(rank, ranks, &mut result, ValidationContext::RealTime, None);
    result
}

#[test]
fn test_valid_ranks_pass() {
    assert!(validate(&valid_ranks()).is_empty());
}

#[test]
fn test_contexts() {
    assert!(AdvisoryRule.applies_to(ValidationContext::AdvisoryOnly));
    assert!(AdvisoryRule.applies_to(ValidationContext::RealTime));
    assert!(!AdvisoryRule.applies_to(ValidationContext::PreGenerate));
}

#[test]
fn test_empty_first_rank_is_flagged() {
    let ranks = vec![RankHierarchy::new("Officer", 0, 0)];
    let result = validate(&ranks);

    assert_eq!(result.len(), 2);
    assert!(result.issues().iter().all(|i| i.severity == ValidationSeverity::Advisory));
    assert_eq!(result.issues_by_category("Vehicle").len(), 1);
    assert_eq!(result.issues_by_category("Outfit").len(), 1);
    assert_eq!(
        result.issues_by_category("Vehicle")[0].message,
        "Rank 'Officer' has no vehicles assigned"
    );
}

#[test]
fn test_station_only_vehicle_counts() {
    let rank = RankHierarchy::new("Officer", 0, 1000)
        .with_outfit("LSPD.Class A")
        .with_station(StationAssignment::new(STATION).with_vehicle(Vehicle::new("police", "")));
    let ranks = vec![rank.clone()];

    let result = validate_single(&rank, &ranks);
    assert!(result.issues_by_category("Vehicle").is_empty());
    assert!(result.is_empty());
}

#[test]
fn test_lost_vehicles_are_itemized() {
    let previous = ["a", "b", "c", "d", "e"]
        .into_iter()
        .fold(complete_rank("Officer", 0, 1000), |rank, model| {
            rank.with_vehicle(Vehicle::new(model, ""))
        });
    let ranks = vec![previous, complete_rank("Detective", 100, 2000)];
    let result = validate(&ranks);

    assert_eq!(result.len(), 1);
    let message = &result.issues()[0].message;
    assert!(message.contains("loses 5 vehicle(s)"));
    assert!(message.ends_with("a, b, c and 2 more"));
}

#[test]
fn test_lost_outfits_list_all_when_few() {
    let ranks = vec![
        complete_rank("Officer", 0, 1000).with_outfit("LSPD.Class B"),
        complete_rank("Detective", 100, 2000),
    ];
    let result = validate(&ranks);

    assert_eq!(result.len(), 1);
    assert!(result.issues()[0].message.ends_with(": LSPD.Class B"));
}

#[test]
fn test_station_items_are_not_lost_when_moved_to_global() {
    let ranks = vec![
        complete_rank("Officer", 0, 1000)
            .with_station(StationAssignment::new("Vespucci").with_vehicle(Vehicle::new("boat", ""))),
        complete_rank("Detective", 100, 2000)
            .with_station(StationAssignment::new("Sandy Shores"))
            .with_vehicle(Vehicle::new("BOAT", "")),
    ];
    assert!(validate(&ranks).is_empty());
}

#[test]
fn test_fewer_stations() {
    let ranks = vec![
        complete_rank("Officer", 0, 1000).with_station(StationAssignment::new("Vespucci")),
        complete_rank("Detective", 100, 2000),
    ];
    let result = validate(&ranks);

    assert_eq!(result.len(), 1);
    assert_eq!(result.issues()[0].category, "Station");
    assert!(result.issues()[0].message.contains("fewer stations (1)"));
}

#[test]
fn test_parent_with_pay_bands_is_skipped() {
    let parent = RankHierarchy::parent("Officer")
        .with_pay_band(complete_rank("Officer I", 0, 1000))
        .with_pay_band(complete_rank("Officer II", 100, 1100));
    let ranks = vec![parent.clone()];

    assert!(validate_single(&parent, &ranks).is_empty());
    assert!(validate(&ranks).is_empty());
}
