//! Rank editing entities
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`rank`] | [`RankHierarchy`] and its [`RankId`] |
//! | [`station`] | [`StationAssignment`] |
//! | [`vehicle`] | [`Vehicle`] |
//! | [`items`] | [`RankItem`] access to vehicle/outfit collections |
//! | [`hierarchy`] | Flattening and lookup over a rank set |

pub mod hierarchy;
pub mod items;
pub mod rank;
pub mod station;
pub mod vehicle;

pub use hierarchy::{
    find_parent, find_rank, find_rank_mut, flatten, flattened_position, relink_parents, siblings,
    walk,
};
pub use items::{
    ItemScope, RankItem, all_items, contains_item, distinct_items, has_any_items,
    items_in_scope, items_in_scope_mut,
};
pub use rank::{RankHierarchy, RankId};
pub use station::StationAssignment;
pub use vehicle::Vehicle;
