//! Shared rank fixtures

use lspe_domain::{RankHierarchy, StationAssignment, Vehicle};
use std::cell::Cell;
use std::rc::Rc;

/// Officer (global and Mission Row items) and an empty Detective
pub fn sample_ranks() -> Vec<RankHierarchy> {
    vec![
        RankHierarchy::new("Officer", 0, 1000)
            .with_id("officer")
            .with_vehicle(Vehicle::new("police", "Cruiser"))
            .with_vehicle(Vehicle::new("police2", "Buffalo"))
            .with_outfit("LSPD.Class A")
            .with_outfit("LSPD.Class B")
            .with_station(
                StationAssignment::new("Mission Row")
                    .with_vehicle(Vehicle::new("fbi", "Unmarked"))
                    .with_outfit("LSPD.Tactical"),
            )
            .with_station(StationAssignment::new("Vespucci").with_outfit("LSPD.Beach")),
        RankHierarchy::new("Detective", 100, 2000)
            .with_id("detective")
            .with_station(StationAssignment::new("mission row")),
    ]
}

/// A callback counter and a closure bumping it
pub fn counter() -> (Rc<Cell<usize>>, impl Fn() + 'static) {
    let count = Rc::new(Cell::new(0));
    let handle = Rc::clone(&count);
    (count, move || handle.set(handle.get() + 1))
}

pub fn models(vehicles: &[Vehicle]) -> Vec<&str> {
    vehicles.iter().map(|v| v.model.as_str()).collect()
}
