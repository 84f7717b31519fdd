use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModelId(pub String);

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single business-model pattern as authored in the catalog data.
///
/// Only `id`, `name`, `tags`, `difficulty`, `maturity_level`, and
/// `base_success_rate` participate in scoring; the remaining fields are
/// teaching content rendered verbatim by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessModel {
    pub id: ModelId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub capital_requirement: Option<String>,
    #[serde(default)]
    pub time_to_revenue: Option<String>,
    #[serde(default)]
    pub maturity_level: MaturityLevel,
    #[serde(default)]
    pub base_success_rate: Option<f64>,
    #[serde(default)]
    pub revenue_streams: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
}

impl BusinessModel {
    /// Lowercase and trim the tag set. Tag matching everywhere in the
    /// engine is case-insensitive, so normalization happens once here.
    pub(crate) fn normalized(mut self) -> Self {
        self.tags = self
            .tags
            .iter()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();
        self
    }
}

/// Ordinal difficulty on a 1..=5 scale.
///
/// Catalog data is inconsistent about representation: older exports use
/// the integer scale, newer ones a `low`/`medium`/`high` label. Both
/// deserialize here; labels map onto the ordinal scale as 1 / 3 / 5.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "DifficultyRepr", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub fn new(level: u8) -> Result<Self, String> {
        if (1..=5).contains(&level) {
            Ok(Self(level))
        } else {
            Err(format!("difficulty level {level} is outside 1..=5"))
        }
    }

    pub fn level(self) -> u8 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(3)
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        value.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DifficultyRepr {
    Level(u8),
    Label(String),
}

impl TryFrom<DifficultyRepr> for Difficulty {
    type Error = String;

    fn try_from(value: DifficultyRepr) -> Result<Self, Self::Error> {
        match value {
            DifficultyRepr::Level(level) => Difficulty::new(level),
            DifficultyRepr::Label(label) => match label.trim().to_lowercase().as_str() {
                "low" => Ok(Difficulty(1)),
                "medium" => Ok(Difficulty(3)),
                "high" => Ok(Difficulty(5)),
                other => Err(format!("unknown difficulty label '{other}'")),
            },
        }
    }
}

/// How established a business-model pattern is in the market.
///
/// The weight feeds the composite scoring policy. Values the data does
/// not recognize collapse to `Unspecified` rather than failing the
/// load, matching the loose authored schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MaturityLevel {
    Emerging,
    Established,
    Dominant,
    #[default]
    Unspecified,
}

impl MaturityLevel {
    pub fn weight(self) -> f64 {
        match self {
            MaturityLevel::Emerging => 0.3,
            MaturityLevel::Established => 0.6,
            MaturityLevel::Dominant => 1.0,
            MaturityLevel::Unspecified => 0.5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MaturityLevel::Emerging => "emerging",
            MaturityLevel::Established => "established",
            MaturityLevel::Dominant => "dominant",
            MaturityLevel::Unspecified => "unspecified",
        }
    }
}

impl From<String> for MaturityLevel {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "emerging" => MaturityLevel::Emerging,
            "established" => MaturityLevel::Established,
            "dominant" => MaturityLevel::Dominant,
            _ => MaturityLevel::Unspecified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_accepts_both_representations() {
        let numeric: Difficulty = serde_json::from_str("2").expect("numeric difficulty");
        assert_eq!(numeric.level(), 2);

        let label: Difficulty = serde_json::from_str("\"high\"").expect("label difficulty");
        assert_eq!(label.level(), 5);
    }

    #[test]
    fn difficulty_rejects_out_of_scale_values() {
        assert!(serde_json::from_str::<Difficulty>("0").is_err());
        assert!(serde_json::from_str::<Difficulty>("6").is_err());
        assert!(serde_json::from_str::<Difficulty>("\"impossible\"").is_err());
    }

    #[test]
    fn maturity_weights_follow_market_presence() {
        assert_eq!(MaturityLevel::Emerging.weight(), 0.3);
        assert_eq!(MaturityLevel::Established.weight(), 0.6);
        assert_eq!(MaturityLevel::Dominant.weight(), 1.0);
    }

    #[test]
    fn unknown_maturity_defaults_to_middle_weight() {
        let level: MaturityLevel =
            serde_json::from_str("\"frontier\"").expect("unknown label tolerated");
        assert_eq!(level, MaturityLevel::Unspecified);
        assert_eq!(level.weight(), 0.5);
    }

    #[test]
    fn missing_optional_fields_default() {
        let record: BusinessModel = serde_json::from_str(
            r#"{ "id": "bm-001", "name": "SaaS Platform" }"#,
        )
        .expect("minimal record parses");
        assert_eq!(record.difficulty.level(), 3);
        assert_eq!(record.maturity_level, MaturityLevel::Unspecified);
        assert!(record.tags.is_empty());
        assert!(record.base_success_rate.is_none());
    }
}
