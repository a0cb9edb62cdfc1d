//! Unit tests for bulk add/remove commands

use lspe_application::{
    BulkAddOutfitsCommand, BulkAddVehiclesCommand, BulkRemoveOutfitsCommand,
    BulkRemoveVehiclesCommand, RemoveAllOutfitsCommand, RemoveAllVehiclesCommand,
    UndoRedoCommand,
};
use lspe_domain::{Error, ItemScope, Vehicle};

use crate::test_utils::{counter, models, sample_ranks};

#[test]
fn test_add_then_undo_restores_collection() {
    let mut ranks = sample_ranks();
    let before = ranks[1].outfits.clone();

    let mut command = BulkAddOutfitsCommand::new(
        &ranks,
        "detective".into(),
        ItemScope::Global,
        vec!["a".to_string(), "b".to_string()],
    )
    .expect("command");
    command.execute(&mut ranks).expect("execute");
    assert_eq!(ranks[1].outfits, vec!["a", "b"]);

    command.undo(&mut ranks).expect("undo");
    assert_eq!(ranks[1].outfits, before);
}

#[test]
fn test_add_skips_present_items_and_undo_keeps_them() {
    let mut ranks = sample_ranks();
    let mut command = BulkAddVehiclesCommand::new(
        &ranks,
        "officer".into(),
        ItemScope::Global,
        vec![Vehicle::new("POLICE", ""), Vehicle::new("sheriff", "")],
    )
    .expect("command");

    command.execute(&mut ranks).expect("execute");
    assert_eq!(command.added().len(), 1);
    assert_eq!(models(&ranks[0].vehicles), vec!["police", "police2", "sheriff"]);

    command.undo(&mut ranks).expect("undo");
    assert_eq!(models(&ranks[0].vehicles), vec!["police", "police2"]);
}

#[test]
fn test_add_to_station_scope() {
    let mut ranks = sample_ranks();
    let mut command = BulkAddOutfitsCommand::new(
        &ranks,
        "officer".into(),
        ItemScope::station("VESPUCCI"),
        vec!["LSPD.Boat".to_string()],
    )
    .expect("command");
    command.execute(&mut ranks).expect("execute");

    assert_eq!(ranks[0].stations[1].outfit_overrides, vec!["LSPD.Beach", "LSPD.Boat"]);
    assert!(command.description().contains("at 'VESPUCCI'"));
}

#[test]
fn test_construction_fails_fast() {
    let ranks = sample_ranks();

    let empty = BulkAddOutfitsCommand::new(&ranks, "officer".into(), ItemScope::Global, vec![]);
    assert!(matches!(empty, Err(Error::InvalidArgument { .. })));

    let ghost = BulkAddOutfitsCommand::new(
        &ranks,
        "ghost".into(),
        ItemScope::Global,
        vec!["a".to_string()],
    );
    assert!(matches!(ghost, Err(Error::RankNotFound { .. })));

    let station = BulkRemoveOutfitsCommand::new(
        &ranks,
        "officer".into(),
        ItemScope::station("Sandy Shores"),
        vec!["a".to_string()],
    );
    assert!(matches!(station, Err(Error::StationNotFound { .. })));
}

#[test]
fn test_remove_restores_original_positions() {
    let mut ranks = sample_ranks();
    ranks[0].vehicles.push(Vehicle::new("sheriff", ""));

    let mut command = BulkRemoveVehiclesCommand::new(
        &ranks,
        "officer".into(),
        ItemScope::Global,
        vec![Vehicle::new("police", ""), Vehicle::new("SHERIFF", "")],
    )
    .expect("command");

    command.execute(&mut ranks).expect("execute");
    assert_eq!(models(&ranks[0].vehicles), vec!["police2"]);

    command.undo(&mut ranks).expect("undo");
    assert_eq!(models(&ranks[0].vehicles), vec!["police", "police2", "sheriff"]);
}

#[test]
fn test_remove_all_and_undo() {
    let mut ranks = sample_ranks();
    let before = ranks[0].outfits.clone();
    let (calls, callback) = counter();

    let mut command = RemoveAllOutfitsCommand::new(&ranks, "officer".into(), ItemScope::Global)
        .expect("command")
        .with_callback(callback);

    command.execute(&mut ranks).expect("execute");
    assert!(ranks[0].outfits.is_empty());
    assert_eq!(ranks[0].stations[0].outfit_overrides.len(), 1);

    command.undo(&mut ranks).expect("undo");
    assert_eq!(ranks[0].outfits, before);
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_remove_all_station_vehicles() {
    let mut ranks = sample_ranks();
    let mut command = RemoveAllVehiclesCommand::new(
        &ranks,
        "officer".into(),
        ItemScope::station("Mission Row"),
    )
    .expect("command");

    command.execute(&mut ranks).expect("execute");
    assert!(ranks[0].stations[0].vehicle_overrides.is_empty());
    assert_eq!(ranks[0].vehicles.len(), 2);

    command.undo(&mut ranks).expect("undo");
    assert_eq!(models(&ranks[0].stations[0].vehicle_overrides), vec!["fbi"]);
}

#[test]
fn test_execute_fails_when_rank_disappeared() {
    let mut ranks = sample_ranks();
    let mut command = BulkAddOutfitsCommand::new(
        &ranks,
        "detective".into(),
        ItemScope::Global,
        vec!["a".to_string()],
    )
    .expect("command");

    ranks.pop();
    assert!(matches!(
        command.execute(&mut ranks),
        Err(Error::RankNotFound { .. })
    ));
}
