use std::collections::BTreeSet;
use std::io::Read;

use serde::Deserialize;

use super::domain::{BusinessModel, Difficulty, MaturityLevel, ModelId};

/// Failure raised while loading or validating catalog data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("record at index {index} has an empty id")]
    MissingId { index: usize },
    #[error("record '{id}' has an empty name")]
    MissingName { id: String },
    #[error("duplicate record id '{0}'")]
    DuplicateId(String),
    #[error("archetype at index {index} has an empty name")]
    EmptyArchetypeName { index: usize },
    #[error("duplicate archetype name '{0}'")]
    DuplicateArchetype(String),
    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to read catalog data: {0}")]
    Io(#[from] std::io::Error),
}

/// One spreadsheet row of the CSV catalog export. List-valued cells use
/// `;` separators; `difficulty` accepts the numeric scale or a
/// low/medium/high label.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: String,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    capital_requirement: Option<String>,
    #[serde(default)]
    time_to_revenue: Option<String>,
    #[serde(default)]
    maturity_level: Option<String>,
    #[serde(default)]
    base_success_rate: Option<f64>,
    #[serde(default)]
    revenue_streams: String,
    #[serde(default)]
    use_cases: String,
    #[serde(default)]
    examples: String,
    #[serde(default)]
    risks: String,
}

pub(super) fn records_from_csv<R: Read>(reader: R) -> Result<Vec<BusinessModel>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<CsvRecord>().enumerate() {
        // Row numbering is 1-based and skips the header, matching what
        // a spreadsheet author sees.
        let row_number = index + 2;
        let raw = row?;
        records.push(record_from_row(raw, row_number)?);
    }

    Ok(records)
}

fn record_from_row(raw: CsvRecord, row: usize) -> Result<BusinessModel, CatalogError> {
    let difficulty = match raw.difficulty.as_deref().map(str::trim) {
        None | Some("") => Difficulty::default(),
        Some(value) => parse_difficulty(value)
            .map_err(|message| CatalogError::InvalidRow { row, message })?,
    };

    let maturity_level = raw
        .maturity_level
        .map(MaturityLevel::from)
        .unwrap_or_default();

    Ok(BusinessModel {
        id: ModelId(raw.id),
        name: raw.name,
        description: raw.description,
        tags: split_list(&raw.tags).into_iter().collect::<BTreeSet<_>>(),
        difficulty,
        capital_requirement: non_empty(raw.capital_requirement),
        time_to_revenue: non_empty(raw.time_to_revenue),
        maturity_level,
        base_success_rate: raw.base_success_rate,
        revenue_streams: split_list(&raw.revenue_streams),
        use_cases: split_list(&raw.use_cases),
        examples: split_list(&raw.examples),
        risks: split_list(&raw.risks),
    })
}

fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    if let Ok(level) = value.parse::<u8>() {
        return Difficulty::new(level);
    }
    match value.to_lowercase().as_str() {
        "low" => Difficulty::new(1),
        "medium" => Difficulty::new(3),
        "high" => Difficulty::new(5),
        other => Err(format!("unknown difficulty value '{other}'")),
    }
}

fn split_list(cell: &str) -> Vec<String> {
    cell.split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, CatalogError, MaturityLevel};
    use std::io::Cursor;

    const SAMPLE_CSV: &str = "\
id,name,description,tags,difficulty,capital_requirement,time_to_revenue,maturity_level,base_success_rate,revenue_streams,use_cases,examples,risks
bm-001,SaaS Subscription,Recurring software revenue,software;cloud;SaaS,2,Low,Fast,dominant,0.7,Monthly subscriptions,Developer tooling,Salesforce,Churn
bm-002,Licensing,License IP to manufacturers,IP;royalties,high,Low,Slow,established,,Royalty income,Patented designs,ARM,Enforcement costs
";

    #[test]
    fn imports_rows_with_both_difficulty_representations() {
        let catalog = Catalog::from_csv_reader(Cursor::new(SAMPLE_CSV)).expect("csv imports");
        assert_eq!(catalog.len(), 2);

        let saas = &catalog.records()[0];
        assert_eq!(saas.difficulty.level(), 2);
        assert_eq!(saas.maturity_level, MaturityLevel::Dominant);
        assert!(saas.tags.contains("saas"), "tags are lowercased on load");

        let licensing = &catalog.records()[1];
        assert_eq!(licensing.difficulty.level(), 5);
        assert!(licensing.base_success_rate.is_none());
        assert_eq!(licensing.revenue_streams, vec!["Royalty income"]);
    }

    #[test]
    fn rejects_unknown_difficulty_label() {
        let csv = "\
id,name,description,tags,difficulty
bm-001,SaaS Subscription,,software,impossible
";
        let result = Catalog::from_csv_reader(Cursor::new(csv));
        match result {
            Err(CatalogError::InvalidRow { row, message }) => {
                assert_eq!(row, 2);
                assert!(message.contains("impossible"));
            }
            other => panic!("expected invalid row error, got {other:?}"),
        }
    }
}
