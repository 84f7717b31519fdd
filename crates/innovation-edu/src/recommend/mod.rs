//! Archetype-based recommendation engine.
//!
//! Ranks the business-model catalog against an innovator archetype's
//! tag vocabulary, optionally narrowed by free-text search and explicit
//! tag filters. Every stage is a pure function over record references,
//! so filters and ranking compose in any order with identical results.

mod filter;
mod policy;
mod rank;
pub mod router;

#[cfg(test)]
mod tests;

pub use filter::{filter_by_tags, filter_by_text, TagFilterMode};
pub use policy::{CompositeWeights, ScoringPolicy};
pub use rank::{rank, Ranking, ScoredModel};
pub use router::recommendation_router;

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{ArchetypeRegistry, BusinessModel, Catalog};

pub const DEFAULT_TOP_N: usize = 5;

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

/// A ranking query as submitted by the presentation layer.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub archetype: ArchetypeSelector,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub required_tags: BTreeSet<String>,
    #[serde(default)]
    pub tag_mode: TagFilterMode,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default)]
    pub policy: ScoringPolicy,
}

impl RecommendationRequest {
    pub fn for_archetype(name: impl Into<String>) -> Self {
        Self {
            archetype: ArchetypeSelector::Name(name.into()),
            search: None,
            required_tags: BTreeSet::new(),
            tag_mode: TagFilterMode::default(),
            top_n: DEFAULT_TOP_N,
            policy: ScoringPolicy::default(),
        }
    }
}

/// Archetype selection: either a registered name or a raw tag set.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ArchetypeSelector {
    Name(String),
    Tags(Vec<String>),
}

/// Error raised while resolving a recommendation request.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("unknown archetype '{0}'")]
    UnknownArchetype(String),
}

/// Presentation-ready projection of a catalog record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub difficulty: u8,
    pub maturity_level: String,
    pub capital_requirement: Option<String>,
    pub time_to_revenue: Option<String>,
}

impl ModelView {
    fn from_record(record: &BusinessModel) -> Self {
        Self {
            id: record.id.0.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            tags: record.tags.iter().cloned().collect(),
            difficulty: record.difficulty.level(),
            maturity_level: record.maturity_level.label().to_string(),
            capital_requirement: record.capital_requirement.clone(),
            time_to_revenue: record.time_to_revenue.clone(),
        }
    }
}

/// One ranked entry in a recommendation response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedModelView {
    pub score: f64,
    #[serde(flatten)]
    pub model: ModelView,
}

/// Ranked recommendation set for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
    pub archetype_tags: Vec<String>,
    pub fallback: bool,
    pub models: Vec<RankedModelView>,
}

/// Stateless query front end over the load-once catalog and archetype
/// registry. Safe to share across requests; it only reads its inputs.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    archetypes: Arc<ArchetypeRegistry>,
}

impl RecommendationService {
    pub fn new(catalog: Arc<Catalog>, archetypes: Arc<ArchetypeRegistry>) -> Self {
        Self {
            catalog,
            archetypes,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn archetypes(&self) -> &ArchetypeRegistry {
        &self.archetypes
    }

    /// Resolve a request into a ranked recommendation set.
    ///
    /// Tag and text filters narrow the record set first; scoring runs
    /// only over the surviving subset, so the ranking fallback applies
    /// to the filtered view rather than the whole catalog.
    pub fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendation, RecommendationError> {
        let (archetype_name, archetype_tags) = self.resolve_archetype(&request.archetype)?;

        let all: Vec<&BusinessModel> = self.catalog.records().iter().collect();
        let by_tags = filter_by_tags(&all, &request.required_tags, request.tag_mode);
        let narrowed = match request.search.as_deref() {
            Some(query) => filter_by_text(&by_tags, query),
            None => by_tags,
        };

        let ranking = rank(&narrowed, &archetype_tags, request.policy, request.top_n);

        Ok(Recommendation {
            archetype: archetype_name,
            archetype_tags: archetype_tags.into_iter().collect(),
            fallback: ranking.fallback,
            models: ranking
                .entries
                .iter()
                .map(|entry| RankedModelView {
                    score: entry.score,
                    model: ModelView::from_record(entry.record),
                })
                .collect(),
        })
    }

    /// Catalog listing for browse/search pages, optionally narrowed by
    /// a free-text query.
    pub fn list_models(&self, query: Option<&str>) -> Vec<ModelView> {
        let all: Vec<&BusinessModel> = self.catalog.records().iter().collect();
        let filtered = match query {
            Some(text) => filter_by_text(&all, text),
            None => all,
        };
        filtered.into_iter().map(ModelView::from_record).collect()
    }

    fn resolve_archetype(
        &self,
        selector: &ArchetypeSelector,
    ) -> Result<(Option<String>, BTreeSet<String>), RecommendationError> {
        match selector {
            ArchetypeSelector::Name(name) => {
                let archetype = self
                    .archetypes
                    .get(name)
                    .ok_or_else(|| RecommendationError::UnknownArchetype(name.clone()))?;
                Ok((Some(archetype.name.clone()), archetype.tags.clone()))
            }
            ArchetypeSelector::Tags(tags) => {
                let normalized = tags
                    .iter()
                    .map(|tag| tag.trim().to_lowercase())
                    .filter(|tag| !tag.is_empty())
                    .collect();
                Ok((None, normalized))
            }
        }
    }
}
