use super::{load_catalog, Catalog, CatalogError};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

/// Process-lifetime catalog cache populated on first successful load.
///
/// A failed load is returned to the caller and not cached, so the next call
/// retries the source. Once populated the catalog is never reloaded.
#[derive(Debug)]
pub struct SharedCatalog {
    source: PathBuf,
    cell: OnceLock<Arc<Catalog>>,
}

impl SharedCatalog {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            cell: OnceLock::new(),
        }
    }

    /// Wraps an already loaded catalog.
    pub fn preloaded(catalog: Catalog) -> Self {
        Self {
            source: PathBuf::new(),
            cell: OnceLock::from(Arc::new(catalog)),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get(&self) -> Result<Arc<Catalog>, CatalogError> {
        if let Some(catalog) = self.cell.get() {
            return Ok(Arc::clone(catalog));
        }

        let loaded = Arc::new(load_catalog(&self.source)?);
        Ok(Arc::clone(self.cell.get_or_init(|| loaded)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "Internship_Title,Location,Sector,Required_Skills\nData Intern,Delhi,Tech,\"Python, SQL\"\n";

    #[test]
    fn caches_after_first_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("internships.csv");
        std::fs::write(&path, CSV).expect("write catalog");

        let shared = SharedCatalog::new(&path);
        assert!(!shared.is_loaded());

        let first = shared.get().expect("first load");
        std::fs::remove_file(&path).expect("remove source");
        let second = shared.get().expect("served from cache");

        assert!(shared.is_loaded());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn failed_load_is_not_cached() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("internships.csv");
        let shared = SharedCatalog::new(&path);

        let error = shared.get().expect_err("source missing");
        assert!(matches!(error, CatalogError::NotFound { .. }));
        assert!(!shared.is_loaded());

        std::fs::write(&path, CSV).expect("write catalog");
        let catalog = shared.get().expect("retry succeeds");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn preloaded_catalog_is_ready() {
        let catalog = Catalog::from_listings(Vec::new());
        let shared = SharedCatalog::preloaded(catalog);
        assert!(shared.is_loaded());
        assert!(shared.get().expect("cached").is_empty());

        // The empty source path is never opened once preloaded.
        let first = shared.get().expect("cached");
        assert!(Arc::ptr_eq(&first, &shared.get().expect("cached")));
    }
}
