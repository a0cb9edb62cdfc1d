//! Unit tests for rank item collections

use lspe_domain::{
    ItemScope, RankHierarchy, RankItem, StationAssignment, Vehicle, Error, all_items,
    contains_item, distinct_items, has_any_items, items_in_scope, items_in_scope_mut,
};

fn patrol_rank() -> RankHierarchy {
    RankHierarchy::new("Officer", 0, 1000)
        .with_vehicle(Vehicle::new("police", "Cruiser"))
        .with_outfit("Patrol.Summer")
        .with_station(
            StationAssignment::new("Mission Row")
                .with_vehicle(Vehicle::new("POLICE", "Cruiser (upper)"))
                .with_vehicle(Vehicle::new("police2", "Buffalo"))
                .with_outfit("Patrol.Winter"),
        )
}

#[test]
fn test_vehicle_identity_ignores_case() {
    let a = Vehicle::new("Police", "");
    let b = Vehicle::new("POLICE", "Cruiser");
    assert!(a.same_item(&b));
    assert!(a.same_model(&b));
    assert_eq!(a.label(), "Police");
    assert_eq!(b.label(), "Cruiser");
}

#[test]
fn test_all_items_includes_station_overrides() {
    let rank = patrol_rank();
    assert_eq!(all_items::<Vehicle>(&rank).len(), 3);
    assert_eq!(all_items::<String>(&rank).len(), 2);
}

#[test]
fn test_distinct_items_deduplicates_case_insensitively() {
    let rank = patrol_rank();
    let models: Vec<&str> = distinct_items::<Vehicle>(&rank)
        .iter()
        .map(|v| v.model.as_str())
        .collect();
    assert_eq!(models, vec!["police", "police2"]);
}

#[test]
fn test_has_any_items_sees_station_only_items() {
    let rank = RankHierarchy::new("Officer", 0, 1000)
        .with_station(StationAssignment::new("Davis").with_vehicle(Vehicle::new("police", "")));
    assert!(has_any_items::<Vehicle>(&rank));
    assert!(!has_any_items::<String>(&rank));
}

#[test]
fn test_items_in_scope_resolves_station_by_name() {
    let rank = patrol_rank();
    let items = items_in_scope::<String>(&rank, &ItemScope::station("mission row"))
        .expect("station exists");
    assert_eq!(items, ["Patrol.Winter".to_string()]);
}

#[test]
fn test_items_in_scope_mut_unknown_station() {
    let mut rank = patrol_rank();
    let result = items_in_scope_mut::<Vehicle>(&mut rank, &ItemScope::station("Sandy Shores"));
    assert!(matches!(result, Err(Error::StationNotFound { .. })));
}

#[test]
fn test_contains_item_for_outfits() {
    let outfits = vec!["Patrol.Summer".to_string()];
    assert!(contains_item(&outfits, &"patrol.summer".to_string()));
    assert!(!contains_item(&outfits, &"Patrol.Winter".to_string()));
}
