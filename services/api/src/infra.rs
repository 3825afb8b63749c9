use internship_match::config::AppConfig;
use internship_match::error::AppError;
use internship_match::{Catalog, SharedCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<SharedCatalog>,
}

/// An explicit `--catalog` flag wins over `APP_CATALOG_PATH` and the default.
pub(crate) fn resolve_catalog_path(flag: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match flag {
        Some(path) => Ok(path),
        None => Ok(AppConfig::load()?.catalog.source),
    }
}

pub(crate) fn load_shared_catalog(flag: Option<PathBuf>) -> Result<Arc<Catalog>, AppError> {
    let shared = SharedCatalog::new(resolve_catalog_path(flag)?);
    Ok(shared.get()?)
}
