//! JSON snapshots of rank sets and game data
//!
//! Rank sets are stored as a [`RankSetDocument`]; a bare JSON array of
//! ranks is accepted on load as well. Back-references are not stored and
//! are rebuilt on every load.

use lspe_domain::{Agency, OutfitVariation, RankHierarchy, Result, Station, Vehicle, relink_parents};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::catalog::GameDataCatalog;
use crate::constants::RANK_SET_FORMAT_VERSION;
use crate::error_ext::ErrorContext;

/// A persisted rank set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankSetDocument {
    /// Document format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Top-level ranks in progression order
    pub ranks: Vec<RankHierarchy>,
}

fn default_version() -> u32 {
    RANK_SET_FORMAT_VERSION
}

impl RankSetDocument {
    /// Wrap `ranks` in a document of the current version
    pub fn new(ranks: Vec<RankHierarchy>) -> Self {
        Self {
            version: RANK_SET_FORMAT_VERSION,
            ranks,
        }
    }

    /// The ranks with pay-band back-references rebuilt
    pub fn into_ranks(self) -> Vec<RankHierarchy> {
        let mut ranks = self.ranks;
        relink_parents(&mut ranks);
        ranks
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RankSetInput {
    Document(RankSetDocument),
    Bare(Vec<RankHierarchy>),
}

/// Persisted game data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameDataSnapshot {
    pub agencies: Vec<Agency>,
    pub stations: Vec<Station>,
    pub vehicles: Vec<Vehicle>,
    pub outfits: Vec<OutfitVariation>,
}

/// Parse a rank set from JSON text
pub fn parse_rank_set(json: &str) -> Result<Vec<RankHierarchy>> {
    let document = match serde_json::from_str(json)? {
        RankSetInput::Document(document) => document,
        RankSetInput::Bare(ranks) => RankSetDocument::new(ranks),
    };
    Ok(document.into_ranks())
}

/// Load a rank set from a JSON file
pub fn load_rank_set<P: AsRef<Path>>(path: P) -> Result<Vec<RankHierarchy>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .io_context(format!("Failed to read rank set {}", path.display()))?;
    let ranks = parse_rank_set(&json)?;
    info!(path = %path.display(), ranks = ranks.len(), "Loaded rank set");
    Ok(ranks)
}

/// Write a rank set as a pretty-printed JSON document
pub fn save_rank_set<P: AsRef<Path>>(path: P, ranks: &[RankHierarchy]) -> Result<()> {
    let path = path.as_ref();
    let document = RankSetDocument::new(ranks.to_vec());
    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(path, json)
        .io_context(format!("Failed to write rank set {}", path.display()))?;
    debug!(path = %path.display(), ranks = ranks.len(), "Saved rank set");
    Ok(())
}

/// Load a game data snapshot into a catalog
pub fn load_game_data<P: AsRef<Path>>(path: P) -> Result<GameDataCatalog> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .io_context(format!("Failed to read game data {}", path.display()))?;
    let snapshot: GameDataSnapshot = serde_json::from_str(&json)?;
    info!(
        path = %path.display(),
        agencies = snapshot.agencies.len(),
        stations = snapshot.stations.len(),
        vehicles = snapshot.vehicles.len(),
        outfits = snapshot.outfits.len(),
        "Loaded game data"
    );
    Ok(GameDataCatalog::from(snapshot))
}

/// Write a catalog as a pretty-printed game data snapshot
pub fn save_game_data<P: AsRef<Path>>(path: P, catalog: &GameDataCatalog) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(&GameDataSnapshot::from(catalog))?;
    std::fs::write(path, json)
        .io_context(format!("Failed to write game data {}", path.display()))
}
