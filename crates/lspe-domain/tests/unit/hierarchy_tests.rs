//! Unit tests for rank set navigation

use lspe_domain::{
    RankHierarchy, RankId, find_parent, find_rank, find_rank_mut, flatten, flattened_position,
    relink_parents, siblings, walk,
};

fn sample_ranks() -> Vec<RankHierarchy> {
    vec![
        RankHierarchy::new("Cadet", 0, 500).with_id("cadet"),
        RankHierarchy::parent("Officer")
            .with_pay_band(RankHierarchy::new("Officer I", 100, 1000).with_id("o1"))
            .with_pay_band(RankHierarchy::new("Officer II", 200, 1100).with_id("o2"))
            .with_id("officer"),
        RankHierarchy::new("Detective", 500, 2000).with_id("detective"),
    ]
}

#[test]
fn test_flatten_replaces_parents_with_pay_bands() {
    let ranks = sample_ranks();
    let names: Vec<&str> = flatten(&ranks).iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Cadet", "Officer I", "Officer II", "Detective"]);
}

#[test]
fn test_flatten_drops_parent_without_pay_bands() {
    let ranks = vec![
        RankHierarchy::new("Cadet", 0, 500),
        RankHierarchy::parent("Empty"),
    ];
    assert_eq!(flatten(&ranks).len(), 1);
}

#[test]
fn test_walk_includes_parents_and_bands() {
    let ranks = sample_ranks();
    let names: Vec<&str> = walk(&ranks).iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Cadet", "Officer", "Officer I", "Officer II", "Detective"]
    );
}

#[test]
fn test_find_rank_reaches_pay_bands() {
    let ranks = sample_ranks();
    let band = find_rank(&ranks, &RankId::from("o2")).expect("pay band exists");
    assert_eq!(band.name, "Officer II");
    assert!(find_rank(&ranks, &RankId::from("nope")).is_none());
}

#[test]
fn test_find_rank_mut_edits_in_place() {
    let mut ranks = sample_ranks();
    find_rank_mut(&mut ranks, &RankId::from("o1"))
        .expect("pay band exists")
        .salary = 1234;
    assert_eq!(ranks[1].pay_bands[0].salary, 1234);
}

#[test]
fn test_siblings_of_pay_band_and_top_level() {
    let ranks = sample_ranks();
    assert_eq!(siblings(&ranks, &RankId::from("o1")).len(), 2);
    assert_eq!(siblings(&ranks, &RankId::from("cadet")).len(), 3);
    assert_eq!(
        find_parent(&ranks, &RankId::from("o2")).map(|p| p.name.as_str()),
        Some("Officer")
    );
}

#[test]
fn test_flattened_position_skips_parents() {
    let ranks = sample_ranks();
    assert_eq!(flattened_position(&ranks, &RankId::from("detective")), Some(3));
    assert_eq!(flattened_position(&ranks, &RankId::from("officer")), None);
}

#[test]
fn test_relink_parents_after_deserialization() {
    let ranks = sample_ranks();
    let json = serde_json::to_string(&ranks).expect("serializes");
    let mut restored: Vec<RankHierarchy> = serde_json::from_str(&json).expect("deserializes");
    assert!(restored[1].pay_bands[0].parent.is_none());

    relink_parents(&mut restored);
    assert_eq!(
        restored[1].pay_bands[0].parent,
        Some(RankId::from("officer"))
    );
    assert!(restored[1].pay_bands[1].is_pay_band());
}

#[test]
fn test_has_pay_bands_requires_children() {
    assert!(!RankHierarchy::parent("Empty").has_pay_bands());
    assert!(sample_ranks()[1].has_pay_bands());
}
