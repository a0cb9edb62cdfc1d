//! Shared fixtures for infrastructure tests

use lspe_domain::{Agency, OutfitVariation, RankHierarchy, Station, StationAssignment, Vehicle};
use lspe_infrastructure::GameDataCatalog;

/// Two agencies, three stations, a handful of vehicles and outfits
pub fn sample_catalog() -> GameDataCatalog {
    let mut lspd = Agency::new("Los Santos Police Department", "LSPD");
    lspd.vehicle_models.push("police3".to_string());
    let mut lssd = Agency::new("Los Santos County Sheriff", "LSSD");
    lssd.vehicle_models.push("sheriff".to_string());

    GameDataCatalog::new()
        .with_agency(lspd)
        .with_agency(lssd)
        .with_station(Station::new("Mission Row", "LSPD"))
        .with_station(Station::new("Vespucci", "LSPD"))
        .with_station(Station::new("Sandy Shores", "LSSD"))
        .with_vehicle(Vehicle::new("police", "Police Cruiser").with_agency("LSPD"))
        .with_vehicle(Vehicle::new("police2", "Police Buffalo").with_agency("lspd"))
        .with_vehicle(Vehicle::new("police3", "Police Interceptor"))
        .with_vehicle(Vehicle::new("sheriff", "Sheriff Cruiser").with_agency("LSSD"))
        .with_outfit(OutfitVariation::new("LSPD", "Class A"))
        .with_outfit(OutfitVariation::new("LSPD", "Class B"))
        .with_outfit(OutfitVariation::new("LSSD", "Patrol"))
}

/// Officer at Mission Row, and a Sergeant with two pay bands
pub fn sample_ranks() -> Vec<RankHierarchy> {
    let officer = RankHierarchy::new("Officer", 0, 1000)
        .with_id("officer")
        .with_station(StationAssignment::new("mission row"))
        .with_vehicle(Vehicle::new("police", "Police Cruiser"))
        .with_outfit("LSPD.Class A");

    let sergeant = RankHierarchy::parent("Sergeant")
        .with_id("sergeant")
        .with_pay_band(
            RankHierarchy::new("Sergeant I", 500, 2000)
                .with_id("sergeant-1")
                .with_station(StationAssignment::new("Vespucci")),
        )
        .with_pay_band(
            RankHierarchy::new("Sergeant II", 800, 2400)
                .with_id("sergeant-2")
                .with_station(StationAssignment::new("Paleto Bay")),
        );

    vec![officer, sergeant]
}
