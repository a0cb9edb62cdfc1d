//! Station reference linking
//!
//! Station assignments name a station by string. After a rank set or the
//! game data is (re)loaded, this pass resolves each name against the
//! catalog and stores the canonical station name as a lookup reference.

use lspe_domain::RankHierarchy;
use tracing::{debug, warn};

use crate::catalog::GameDataCatalog;

/// Resolve every station assignment of `ranks` against `catalog`
///
/// Pay bands are visited too. Resolved assignments get the catalog's
/// spelling of the name as `station_reference`; unresolved ones are
/// cleared. Returns the number of unresolved assignments.
pub fn link_station_references(ranks: &mut [RankHierarchy], catalog: &GameDataCatalog) -> usize {
    let mut unresolved = 0;
    for rank in ranks.iter_mut() {
        unresolved += link_rank(rank, catalog);
        for band in &mut rank.pay_bands {
            unresolved += link_rank(band, catalog);
        }
    }
    debug!(unresolved, "Linked station references");
    unresolved
}

fn link_rank(rank: &mut RankHierarchy, catalog: &GameDataCatalog) -> usize {
    let mut unresolved = 0;
    for assignment in &mut rank.stations {
        assignment.station_reference = catalog
            .find_station(&assignment.station_name)
            .map(|station| station.name.clone());
        if assignment.station_reference.is_none() {
            warn!(
                rank = rank.name.as_str(),
                station = assignment.station_name.as_str(),
                "Station not found in game data"
            );
            unresolved += 1;
        }
    }
    unresolved
}
