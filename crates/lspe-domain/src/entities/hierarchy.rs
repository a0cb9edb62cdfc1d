//! Navigation over an ordered rank set
//!
//! The flattened sequence is the order in which the player progresses:
//! standalone ranks in place, parent ranks replaced by their pay bands.

use super::{RankHierarchy, RankId};

/// Ranks in progression order, parents replaced in place by their pay bands
pub fn flatten(ranks: &[RankHierarchy]) -> Vec<&RankHierarchy> {
    let mut flattened = Vec::with_capacity(ranks.len());
    for rank in ranks {
        if rank.is_parent {
            flattened.extend(rank.pay_bands.iter());
        } else {
            flattened.push(rank);
        }
    }
    flattened
}

/// Every node in the set: each top-level rank followed by its pay bands
pub fn walk(ranks: &[RankHierarchy]) -> Vec<&RankHierarchy> {
    let mut nodes = Vec::with_capacity(ranks.len());
    for rank in ranks {
        nodes.push(rank);
        nodes.extend(rank.pay_bands.iter());
    }
    nodes
}

/// Find a rank or pay band by id
pub fn find_rank<'a>(ranks: &'a [RankHierarchy], id: &RankId) -> Option<&'a RankHierarchy> {
    walk(ranks).into_iter().find(|r| &r.id == id)
}

/// Mutable variant of [`find_rank`]
pub fn find_rank_mut<'a>(
    ranks: &'a mut [RankHierarchy],
    id: &RankId,
) -> Option<&'a mut RankHierarchy> {
    for rank in ranks.iter_mut() {
        if &rank.id == id {
            return Some(rank);
        }
        if let Some(band) = rank.pay_bands.iter_mut().find(|b| &b.id == id) {
            return Some(band);
        }
    }
    None
}

/// The top-level rank whose pay bands contain `id`
///
/// Scans the tree instead of trusting the `parent` back-reference, which
/// may not be linked yet.
pub fn find_parent<'a>(ranks: &'a [RankHierarchy], id: &RankId) -> Option<&'a RankHierarchy> {
    ranks
        .iter()
        .find(|r| r.pay_bands.iter().any(|b| &b.id == id))
}

/// The list `id` lives in: its parent's pay bands, or the top level
pub fn siblings<'a>(ranks: &'a [RankHierarchy], id: &RankId) -> &'a [RankHierarchy] {
    match find_parent(ranks, id) {
        Some(parent) => &parent.pay_bands,
        None => ranks,
    }
}

/// Position of `id` in the flattened progression, if it is part of it
pub fn flattened_position(ranks: &[RankHierarchy], id: &RankId) -> Option<usize> {
    flatten(ranks).iter().position(|r| &r.id == id)
}

/// Rebuild the `parent` back-references of every pay band
pub fn relink_parents(ranks: &mut [RankHierarchy]) {
    for rank in ranks.iter_mut() {
        rank.parent = None;
        let id = rank.id.clone();
        for band in &mut rank.pay_bands {
            band.parent = Some(id.clone());
        }
    }
}
