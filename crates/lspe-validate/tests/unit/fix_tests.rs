//! Unit tests for auto-fix actions

use lspe_domain::{Error, ItemScope, RankHierarchy, StationAssignment, Vehicle};
use lspe_validate::AutoFix;

fn ranks() -> Vec<RankHierarchy> {
    vec![
        RankHierarchy::new("Officer", 5, -10)
            .with_id("officer")
            .with_vehicle(Vehicle::new("POLICE", "Cruiser"))
            .with_vehicle(Vehicle::new("police2", "Buffalo"))
            .with_station(
                StationAssignment::new("Mission Row")
                    .with_outfit("LSPD.Class A")
                    .with_outfit("LSPD.Class B"),
            ),
        RankHierarchy::parent("Sergeant")
            .with_id("sergeant")
            .with_pay_band(RankHierarchy::new("Sergeant I", 100, 1000).with_id("sgt-1"))
            .with_pay_band(RankHierarchy::new("Sergeant II", 200, 1100).with_id("sgt-2")),
    ]
}

#[test]
fn test_set_numbers() {
    let mut ranks = ranks();
    AutoFix::SetRequiredPoints {
        rank_id: "officer".into(),
        value: 0,
    }
    .apply(&mut ranks)
    .expect("apply");
    AutoFix::SetSalary {
        rank_id: "officer".into(),
        value: 0,
    }
    .apply(&mut ranks)
    .expect("apply");

    assert_eq!(ranks[0].required_points, 0);
    assert_eq!(ranks[0].salary, 0);
}

#[test]
fn test_fix_reaches_pay_bands() {
    let mut ranks = ranks();
    AutoFix::SetSalary {
        rank_id: "sgt-2".into(),
        value: 1500,
    }
    .apply(&mut ranks)
    .expect("apply");
    assert_eq!(ranks[1].pay_bands[1].salary, 1500);
}

#[test]
fn test_unknown_rank_fails() {
    let mut ranks = ranks();
    let outcome = AutoFix::SetSalary {
        rank_id: "ghost".into(),
        value: 0,
    }
    .apply(&mut ranks);
    assert!(matches!(outcome, Err(Error::RankNotFound { .. })));
}

#[test]
fn test_remove_global_vehicle_ignores_case() {
    let mut ranks = ranks();
    AutoFix::RemoveVehicle {
        rank_id: "officer".into(),
        scope: ItemScope::Global,
        model: "police".to_string(),
    }
    .apply(&mut ranks)
    .expect("apply");

    let models: Vec<&str> = ranks[0].vehicles.iter().map(|v| v.model.as_str()).collect();
    assert_eq!(models, vec!["police2"]);
}

#[test]
fn test_remove_station_outfit() {
    let mut ranks = ranks();
    AutoFix::RemoveOutfit {
        rank_id: "officer".into(),
        scope: ItemScope::station("mission row"),
        outfit: "lspd.class a".to_string(),
    }
    .apply(&mut ranks)
    .expect("apply");
    assert_eq!(ranks[0].stations[0].outfit_overrides, vec!["LSPD.Class B"]);
}

#[test]
fn test_remove_from_missing_station_is_noop() {
    let mut ranks = ranks();
    AutoFix::RemoveStation {
        rank_id: "officer".into(),
        station_name: "MISSION ROW".to_string(),
    }
    .apply(&mut ranks)
    .expect("apply");
    assert!(ranks[0].stations.is_empty());

    let outcome = AutoFix::RemoveOutfit {
        rank_id: "officer".into(),
        scope: ItemScope::station("Mission Row"),
        outfit: "LSPD.Class A".to_string(),
    }
    .apply(&mut ranks);
    assert!(outcome.is_ok());
}

#[test]
fn test_description_names_the_scope() {
    let fix = AutoFix::RemoveVehicle {
        rank_id: "officer".into(),
        scope: ItemScope::station("Vespucci"),
        model: "police".to_string(),
    };
    assert_eq!(
        fix.description(),
        "Remove vehicle 'police' from station 'Vespucci'"
    );
    assert_eq!(fix.rank_id().as_str(), "officer");
}

#[test]
fn test_fix_serializes_with_action_tag() {
    let fix = AutoFix::SetSalary {
        rank_id: "officer".into(),
        value: 0,
    };
    let value = serde_json::to_value(&fix).expect("serialize");
    assert_eq!(value["action"], "set_salary");
    assert_eq!(value["rank_id"], "officer");
}
