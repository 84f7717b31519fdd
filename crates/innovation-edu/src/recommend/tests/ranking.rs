use super::common::*;
use crate::recommend::{rank, ScoringPolicy};

#[test]
fn rank_drops_records_without_overlap() {
    let catalog = fixture_catalog();
    let records = refs(&catalog);

    let ranking = rank(
        &records,
        &tag_set(&["software"]),
        ScoringPolicy::AbsoluteOverlap,
        5,
    );

    assert!(!ranking.fallback);
    assert_eq!(ranking.entries.len(), 2);
    assert!(ranking.entries.iter().all(|entry| entry.score > 0.0));
}

#[test]
fn rank_orders_by_score_then_difficulty_then_name() {
    let catalog = fixture_catalog();
    let records = refs(&catalog);

    // Both SaaS (difficulty 2) and Data Products (difficulty 4) share
    // exactly one tag with the target; the easier model wins the tie.
    let ranking = rank(
        &records,
        &tag_set(&["software", "ai"]),
        ScoringPolicy::AbsoluteOverlap,
        5,
    );

    let ids: Vec<&str> = ranking
        .entries
        .iter()
        .map(|entry| entry.record.id.0.as_str())
        .collect();
    assert_eq!(ids, vec!["bm-saas", "bm-data"]);
}

#[test]
fn rank_breaks_remaining_ties_by_name() {
    let catalog = crate::catalog::Catalog::from_records(vec![
        record("bm-b", "Beta Model", &["software"], 2),
        record("bm-a", "Alpha Model", &["software"], 2),
    ])
    .expect("catalog builds");
    let records = refs(&catalog);

    let ranking = rank(
        &records,
        &tag_set(&["software"]),
        ScoringPolicy::AbsoluteOverlap,
        5,
    );

    let names: Vec<&str> = ranking
        .entries
        .iter()
        .map(|entry| entry.record.name.as_str())
        .collect();
    assert_eq!(names, vec!["Alpha Model", "Beta Model"]);
}

#[test]
fn rank_falls_back_to_catalog_order_when_nothing_matches() {
    let catalog = fixture_catalog();
    let records = refs(&catalog);

    let ranking = rank(
        &records,
        &tag_set(&["quantum"]),
        ScoringPolicy::AbsoluteOverlap,
        3,
    );

    assert!(ranking.fallback);
    let ids: Vec<&str> = ranking
        .entries
        .iter()
        .map(|entry| entry.record.id.0.as_str())
        .collect();
    assert_eq!(ids, vec!["bm-saas", "bm-data", "bm-coop"]);
    assert!(ranking.entries.iter().all(|entry| entry.score == 0.0));
}

#[test]
fn rank_truncates_to_top_n() {
    let catalog = fixture_catalog();
    let records = refs(&catalog);

    let ranking = rank(
        &records,
        &tag_set(&["software", "community", "services"]),
        ScoringPolicy::AbsoluteOverlap,
        2,
    );

    assert_eq!(ranking.entries.len(), 2);
}

#[test]
fn top_n_beyond_catalog_size_returns_all_matches() {
    let catalog = fixture_catalog();
    let records = refs(&catalog);

    let ranking = rank(
        &records,
        &tag_set(&["software", "community", "services", "knowledge", "local"]),
        ScoringPolicy::AbsoluteOverlap,
        100,
    );

    assert_eq!(ranking.entries.len(), 4);
}

#[test]
fn rank_is_deterministic_for_identical_inputs() {
    let catalog = fixture_catalog();
    let records = refs(&catalog);
    let tags = tag_set(&["software", "data", "community"]);

    let first = rank(&records, &tags, ScoringPolicy::NormalizedOverlap, 5);
    let second = rank(&records, &tags, ScoringPolicy::NormalizedOverlap, 5);

    assert_eq!(first, second);
}
