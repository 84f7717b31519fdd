use super::common::*;
use crate::recommend::{
    filter_by_tags, filter_by_text, rank, ScoringPolicy, TagFilterMode,
};

#[test]
fn empty_query_is_identity() {
    let catalog = fixture_catalog();
    let records = refs(&catalog);

    assert_eq!(filter_by_text(&records, ""), records);
    assert_eq!(filter_by_text(&records, "   "), records);
}

#[test]
fn text_filter_is_case_insensitive() {
    let catalog = crate::catalog::Catalog::from_records(vec![record(
        "bm-saas",
        "SaaS Platform",
        &["software"],
        2,
    )])
    .expect("catalog builds");
    let records = refs(&catalog);

    let matched = filter_by_text(&records, "saas");

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "SaaS Platform");
}

#[test]
fn text_filter_searches_description_and_tags() {
    let catalog = fixture_catalog();
    let records = refs(&catalog);

    let by_tag = filter_by_text(&records, "knowledge");
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].id.0, "bm-consult");

    let by_description = filter_by_text(&records, "co-op description");
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].id.0, "bm-coop");
}

#[test]
fn tag_filter_any_keeps_partial_matches() {
    let catalog = fixture_catalog();
    let records = refs(&catalog);

    let matched = filter_by_tags(
        &records,
        &tag_set(&["community", "services"]),
        TagFilterMode::Any,
    );

    let ids: Vec<&str> = matched.iter().map(|r| r.id.0.as_str()).collect();
    assert_eq!(ids, vec!["bm-coop", "bm-consult"]);
}

#[test]
fn tag_filter_all_requires_every_tag() {
    let catalog = fixture_catalog();
    let records = refs(&catalog);

    let matched = filter_by_tags(
        &records,
        &tag_set(&["software", "cloud"]),
        TagFilterMode::All,
    );

    let ids: Vec<&str> = matched.iter().map(|r| r.id.0.as_str()).collect();
    assert_eq!(ids, vec!["bm-saas"]);
}

#[test]
fn empty_required_set_is_identity_in_both_modes() {
    let catalog = fixture_catalog();
    let records = refs(&catalog);
    let empty = tag_set(&[]);

    assert_eq!(filter_by_tags(&records, &empty, TagFilterMode::Any), records);
    assert_eq!(filter_by_tags(&records, &empty, TagFilterMode::All), records);
}

#[test]
fn filter_stages_commute() {
    let catalog = fixture_catalog();
    let records = refs(&catalog);
    let required = tag_set(&["software", "community"]);

    let text_then_tags = filter_by_tags(
        &filter_by_text(&records, "description"),
        &required,
        TagFilterMode::Any,
    );
    let tags_then_text = filter_by_text(
        &filter_by_tags(&records, &required, TagFilterMode::Any),
        "description",
    );

    assert_eq!(text_then_tags, tags_then_text);
}

#[test]
fn ranking_over_filtered_subset_matches_filtering_before_rank() {
    let catalog = fixture_catalog();
    let records = refs(&catalog);
    let archetype = tag_set(&["software", "data"]);

    let filtered = filter_by_text(&records, "data");
    let ranking = rank(&filtered, &archetype, ScoringPolicy::AbsoluteOverlap, 5);

    assert_eq!(ranking.entries.len(), 1);
    assert_eq!(ranking.entries[0].record.id.0, "bm-data");
}
