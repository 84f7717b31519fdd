use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::loader::CatalogError;

/// A named innovator profile expressed as a target tag vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    pub name: String,
    pub tags: BTreeSet<String>,
}

impl Archetype {
    pub fn new(name: impl Into<String>, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            tags: tags
                .into_iter()
                .map(|tag| tag.into().trim().to_lowercase())
                .filter(|tag| !tag.is_empty())
                .collect(),
        }
    }
}

/// Load-once registry of archetypes, looked up case-insensitively by
/// name. Archetype definitions are data, not logic: the registry
/// carries whatever taxonomy the deployment supplies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchetypeRegistry {
    archetypes: Vec<Archetype>,
}

impl ArchetypeRegistry {
    pub fn new(archetypes: Vec<Archetype>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for (index, archetype) in archetypes.iter().enumerate() {
            if archetype.name.trim().is_empty() {
                return Err(CatalogError::EmptyArchetypeName { index });
            }
            if !seen.insert(archetype.name.to_lowercase()) {
                return Err(CatalogError::DuplicateArchetype(archetype.name.clone()));
            }
        }
        Ok(Self { archetypes })
    }

    /// The archetype taxonomy shipped with the education platform.
    pub fn builtin() -> Self {
        let archetypes = vec![
            Archetype::new(
                "Digital & SaaS",
                ["software", "data", "AI", "cloud", "digital", "platform", "developer"],
            ),
            Archetype::new(
                "Hardware & Infrastructure",
                ["hardware", "infrastructure", "IoT", "manufacturing", "high_capex"],
            ),
            Archetype::new(
                "Finance & Funding",
                ["finance", "fund", "loan", "equity", "blended", "royalties"],
            ),
            Archetype::new(
                "Impact & Community",
                ["impact", "green", "sustainability", "community", "local", "cooperative"],
            ),
            Archetype::new(
                "IP, Knowledge & Services",
                ["IP", "research", "knowledge", "education", "services", "consulting"],
            ),
        ];
        Self::new(archetypes).expect("built-in archetypes are well formed")
    }

    /// Load archetypes from a JSON object mapping name to tag list.
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        let archetypes = raw
            .into_iter()
            .map(|(name, tags)| Archetype::new(name, tags))
            .collect();
        Self::new(archetypes)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    pub fn get(&self, name: &str) -> Option<&Archetype> {
        self.archetypes
            .iter()
            .find(|archetype| archetype.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.archetypes.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.archetypes
            .iter()
            .map(|archetype| archetype.name.as_str())
            .collect()
    }
}
