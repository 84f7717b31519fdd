use std::collections::BTreeSet;

use crate::catalog::BusinessModel;

use super::policy::ScoringPolicy;

/// A record paired with the relevance score the active policy gave it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredModel<'a> {
    pub record: &'a BusinessModel,
    pub score: f64,
}

/// Result of ranking a record set against an archetype.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<'a> {
    pub entries: Vec<ScoredModel<'a>>,
    /// True when no record scored above zero and the first `top_n`
    /// records were returned unscored in catalog order instead of an
    /// empty result.
    pub fallback: bool,
}

/// Rank `records` by relevance to `archetype_tags` and keep the top
/// `top_n`.
///
/// Records scoring zero are dropped even when that leaves fewer than
/// `top_n` results. Ties resolve toward easier difficulty, then name,
/// so identical inputs always produce identical output order.
pub fn rank<'a>(
    records: &[&'a BusinessModel],
    archetype_tags: &BTreeSet<String>,
    policy: ScoringPolicy,
    top_n: usize,
) -> Ranking<'a> {
    let mut scored: Vec<ScoredModel<'a>> = records
        .iter()
        .copied()
        .map(|record| ScoredModel {
            record,
            score: policy.score(record, archetype_tags),
        })
        .filter(|entry| entry.score > 0.0)
        .collect();

    if scored.is_empty() {
        let entries = records
            .iter()
            .copied()
            .take(top_n)
            .map(|record| ScoredModel { record, score: 0.0 })
            .collect();
        return Ranking {
            entries,
            fallback: true,
        };
    }

    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.record.difficulty.cmp(&b.record.difficulty))
            .then_with(|| a.record.name.cmp(&b.record.name))
    });
    scored.truncate(top_n);

    Ranking {
        entries: scored,
        fallback: false,
    }
}
