use std::collections::BTreeSet;

use crate::catalog::{BusinessModel, Catalog, Difficulty, MaturityLevel, ModelId};

/// Build a minimal record with the fields the engine consumes.
pub(super) fn record(id: &str, name: &str, tags: &[&str], difficulty: u8) -> BusinessModel {
    BusinessModel {
        id: ModelId(id.to_string()),
        name: name.to_string(),
        description: format!("{name} description"),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        difficulty: Difficulty::new(difficulty).expect("test difficulty in range"),
        capital_requirement: None,
        time_to_revenue: None,
        maturity_level: MaturityLevel::Unspecified,
        base_success_rate: None,
        revenue_streams: Vec::new(),
        use_cases: Vec::new(),
        examples: Vec::new(),
        risks: Vec::new(),
    }
}

/// A small fixed catalog exercising overlap counts 0..=2 and tie-break
/// paths.
pub(super) fn fixture_catalog() -> Catalog {
    Catalog::from_records(vec![
        record("bm-saas", "SaaS Platform", &["software", "cloud", "platform"], 2),
        record("bm-data", "Data Products", &["data", "software"], 4),
        record("bm-coop", "Community Co-op", &["community", "local"], 2),
        record("bm-consult", "Consulting", &["services", "knowledge"], 1),
        record("bm-untagged", "Untagged Concept", &[], 3),
    ])
    .expect("fixture catalog is well formed")
}

pub(super) fn tag_set(tags: &[&str]) -> BTreeSet<String> {
    tags.iter().map(|tag| tag.to_string()).collect()
}

pub(super) fn refs(catalog: &Catalog) -> Vec<&BusinessModel> {
    catalog.records().iter().collect()
}
