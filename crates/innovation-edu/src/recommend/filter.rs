use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::BusinessModel;

/// How a required-tag filter treats multiple tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagFilterMode {
    /// Keep records sharing at least one required tag.
    #[default]
    Any,
    /// Keep records carrying every required tag.
    All,
}

/// Case-insensitive substring filter over id, name, description, and
/// tags. An empty or whitespace-only query is the identity. Literal
/// containment only, no tokenization.
pub fn filter_by_text<'a>(records: &[&'a BusinessModel], query: &str) -> Vec<&'a BusinessModel> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .copied()
        .filter(|record| haystack(record).contains(&needle))
        .collect()
}

fn haystack(record: &BusinessModel) -> String {
    let mut parts = vec![
        record.id.0.clone(),
        record.name.clone(),
        record.description.clone(),
    ];
    parts.extend(record.tags.iter().cloned());
    parts.join(" ").to_lowercase()
}

/// Keep records matching `required_tags` under the given mode. An empty
/// required set is the identity in both modes.
pub fn filter_by_tags<'a>(
    records: &[&'a BusinessModel],
    required_tags: &BTreeSet<String>,
    mode: TagFilterMode,
) -> Vec<&'a BusinessModel> {
    let required: BTreeSet<String> = required_tags
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();
    if required.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .copied()
        .filter(|record| match mode {
            TagFilterMode::Any => required.iter().any(|tag| record.tags.contains(tag)),
            TagFilterMode::All => required.iter().all(|tag| record.tags.contains(tag)),
        })
        .collect()
}
