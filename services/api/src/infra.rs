use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use wws_rent_check::config::ScheduleConfig;
use wws_rent_check::workflows::wws::{ConfigurationError, ScheduleCatalog};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the schedule catalog, preferring an explicit file over the configured one.
pub(crate) fn load_catalog(
    config: &ScheduleConfig,
    override_path: Option<PathBuf>,
) -> Result<ScheduleCatalog, ConfigurationError> {
    let config = match override_path {
        Some(path) => ScheduleConfig { path: Some(path) },
        None => config.clone(),
    };

    let catalog = config.catalog()?;
    let source = config
        .path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    info!(
        %source,
        versions = catalog.versions().len(),
        "rent schedule catalog loaded"
    );
    Ok(catalog)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
