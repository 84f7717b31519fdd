use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::BusinessModel;

/// Quality prior applied when a record carries no `base_success_rate`.
const DEFAULT_BASE_SUCCESS_RATE: f64 = 0.6;

/// Relevance scoring strategy for ranking records against an archetype
/// tag set.
///
/// The catalog pages shipped with several slightly different formulas;
/// they are all instantiations of this one configurable contract. Every
/// policy is a pure function and scores 0 against an empty archetype
/// tag set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// `|record.tags ∩ archetype.tags|` as an integer count.
    #[default]
    AbsoluteOverlap,
    /// Overlap divided by the record's own tag count, so a tightly
    /// tagged record outranks a broadly tagged one with the same
    /// overlap. An untagged record scores 0.
    NormalizedOverlap,
    /// Weighted blend of normalized overlap, the record's success
    /// prior, and its maturity weight.
    Composite(CompositeWeights),
}

impl ScoringPolicy {
    pub fn score(&self, record: &BusinessModel, archetype_tags: &BTreeSet<String>) -> f64 {
        if archetype_tags.is_empty() {
            return 0.0;
        }

        let overlap = record.tags.intersection(archetype_tags).count();
        match self {
            ScoringPolicy::AbsoluteOverlap => overlap as f64,
            ScoringPolicy::NormalizedOverlap => normalized_overlap(record, overlap),
            ScoringPolicy::Composite(weights) => {
                weights.overlap * normalized_overlap(record, overlap)
                    + weights.base_success
                        * record.base_success_rate.unwrap_or(DEFAULT_BASE_SUCCESS_RATE)
                    + weights.maturity * record.maturity_level.weight()
            }
        }
    }
}

fn normalized_overlap(record: &BusinessModel, overlap: usize) -> f64 {
    if record.tags.is_empty() {
        0.0
    } else {
        overlap as f64 / record.tags.len() as f64
    }
}

/// Term weights for the composite policy. Weights are configuration:
/// deployments tune them rather than editing scoring code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    pub overlap: f64,
    pub base_success: f64,
    pub maturity: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            overlap: 0.5,
            base_success: 0.3,
            maturity: 0.2,
        }
    }
}

impl CompositeWeights {
    /// The two-term overlap/success variant without a maturity term.
    pub fn two_term() -> Self {
        Self {
            overlap: 0.7,
            base_success: 0.3,
            maturity: 0.0,
        }
    }
}
