use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use innovation_edu::catalog::{ArchetypeRegistry, Catalog, CatalogError};
use innovation_edu::config::ContentConfig;
use innovation_edu::finance::CashFlow;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the catalog from the configured path, falling back to the
/// built-in teaching catalog when none is configured. JSON is the
/// authored format; `.csv` paths go through the spreadsheet importer.
pub(crate) fn load_catalog(content: &ContentConfig) -> Result<Catalog, CatalogError> {
    match &content.catalog_path {
        Some(path) if is_csv(path) => Catalog::from_csv_path(path),
        Some(path) => Catalog::from_json_path(path),
        None => Ok(Catalog::sample()),
    }
}

pub(crate) fn load_archetypes(content: &ContentConfig) -> Result<ArchetypeRegistry, CatalogError> {
    match &content.archetypes_path {
        Some(path) => ArchetypeRegistry::from_json_path(path),
        None => Ok(ArchetypeRegistry::builtin()),
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Parse a `period:amount` CLI argument, e.g. `0:-1000` or `2:700.50`.
pub(crate) fn parse_cash_flow(raw: &str) -> Result<CashFlow, String> {
    let (period, amount) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected PERIOD:AMOUNT, got '{raw}'"))?;

    let period = period
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid period in '{raw}' ({err})"))?;
    let amount = amount
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid amount in '{raw}' ({err})"))?;

    Ok(CashFlow::new(period, amount))
}
