pub(crate) mod normalizer;
mod parser;
mod shared;

pub use shared::SharedCatalog;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// One normalized row of the internship dataset.
///
/// `location`, `sector`, and every `required_skills` token are lowercased at
/// load time; `title` keeps its original case for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipListing {
    pub title: String,
    pub location: String,
    pub sector: String,
    pub required_skills: Vec<String>,
}

impl InternshipListing {
    /// Builds a listing from raw cell values, applying the same normalization
    /// as the CSV loader.
    pub fn new(title: &str, location: &str, sector: &str, required_skills: &str) -> Self {
        let skills = Some(required_skills).filter(|value| !value.trim().is_empty());
        Self {
            title: title.to_string(),
            location: normalizer::fold_case(location),
            sector: normalizer::fold_case(sector),
            required_skills: normalizer::split_required_skills(skills),
        }
    }
}

/// Immutable, ordered set of listings shared read-only across queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    listings: Vec<InternshipListing>,
}

impl Catalog {
    pub fn from_listings(listings: Vec<InternshipListing>) -> Self {
        Self { listings }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let listings = parser::parse_listings(reader)?;
        Ok(Self { listings })
    }

    pub fn listings(&self) -> &[InternshipListing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Distinct non-empty locations in sorted order.
    pub fn locations(&self) -> Vec<String> {
        distinct(self.listings.iter().map(|listing| listing.location.as_str()))
    }

    /// Distinct non-empty sectors in sorted order.
    pub fn sectors(&self) -> Vec<String> {
        distinct(self.listings.iter().map(|listing| listing.sector.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Reads and normalizes the catalog stored at `path`.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CatalogError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let catalog = Catalog::from_reader(file)?;
    info!(path = %path.display(), listings = catalog.len(), "internship catalog loaded");
    Ok(catalog)
}

/// Failure to produce a catalog. Callers must treat this as "no data available".
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("internship catalog not found at {}", path.display())]
    NotFound { path: PathBuf },
    #[error("unable to read internship catalog at {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("internship catalog is missing required column '{column}'")]
    MissingColumn { column: &'static str },
    #[error("invalid internship catalog data: {0}")]
    Malformed(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    const SAMPLE: &str = "Internship_Title,Location,Sector,Required_Skills\n\
Data Intern,Delhi,Tech,\"Python, SQL\"\n\
Marketing Intern,DELHI,Marketing,Communication\n\
Remote Analyst,Remote,Finance,\"Excel,  Statistics\"\n";

    #[test]
    fn from_reader_normalizes_fields() {
        let catalog = Catalog::from_reader(Cursor::new(SAMPLE)).expect("catalog parses");

        assert_eq!(catalog.len(), 3);
        let data = &catalog.listings()[0];
        assert_eq!(data.title, "Data Intern");
        assert_eq!(data.location, "delhi");
        assert_eq!(data.sector, "tech");
        assert_eq!(data.required_skills, vec!["python", "sql"]);

        let marketing = &catalog.listings()[1];
        assert_eq!(marketing.location, "delhi");
        assert_eq!(marketing.required_skills, vec!["communication"]);

        let remote = &catalog.listings()[2];
        assert_eq!(remote.required_skills, vec!["excel", "statistics"]);
    }

    #[test]
    fn empty_skills_cell_yields_empty_sequence() {
        let csv = "Internship_Title,Location,Sector,Required_Skills\nOps Intern,Pune,Operations,\n";
        let catalog = Catalog::from_reader(Cursor::new(csv)).expect("catalog parses");
        assert!(catalog.listings()[0].required_skills.is_empty());
    }

    #[test]
    fn short_rows_degrade_instead_of_failing() {
        let csv = "Internship_Title,Location,Sector,Required_Skills\nOps Intern,Pune\n";
        let catalog = Catalog::from_reader(Cursor::new(csv)).expect("catalog parses");
        let listing = &catalog.listings()[0];
        assert_eq!(listing.location, "pune");
        assert!(listing.sector.is_empty());
        assert!(listing.required_skills.is_empty());
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "ID,Internship_Title,Location,Sector,Required_Skills,Stipend\n\
7,Design Intern,Bangalore,Design,Figma,15000\n";
        let catalog = Catalog::from_reader(Cursor::new(csv)).expect("catalog parses");
        assert_eq!(catalog.listings()[0].title, "Design Intern");
        assert_eq!(catalog.listings()[0].required_skills, vec!["figma"]);
    }

    #[test]
    fn byte_order_mark_is_ignored_in_header() {
        let csv = "\u{feff}Internship_Title,Location,Sector,Required_Skills\nData Intern,Delhi,Tech,Python\n";
        let catalog = Catalog::from_reader(Cursor::new(csv)).expect("catalog parses");
        assert_eq!(catalog.listings()[0].title, "Data Intern");
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "Internship_Title,Location,Required_Skills\nData Intern,Delhi,Python\n";
        let error = Catalog::from_reader(Cursor::new(csv)).expect_err("sector column missing");
        match error {
            CatalogError::MissingColumn { column } => assert_eq!(column, "Sector"),
            other => panic!("expected missing column, got {other:?}"),
        }
    }

    #[test]
    fn locations_and_sectors_are_distinct_and_sorted() {
        let catalog = Catalog::from_reader(Cursor::new(SAMPLE)).expect("catalog parses");
        assert_eq!(catalog.locations(), vec!["delhi", "remote"]);
        assert_eq!(catalog.sectors(), vec!["finance", "marketing", "tech"]);
    }

    #[test]
    fn load_catalog_reports_missing_source() {
        let error = load_catalog("./does-not-exist/internships.csv").expect_err("missing file");
        match error {
            CatalogError::NotFound { path } => {
                assert!(path.ends_with("internships.csv"));
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn load_catalog_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write sample");

        let catalog = load_catalog(file.path()).expect("catalog loads");
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn listing_constructor_matches_loader_normalization() {
        let listing = InternshipListing::new("Data Intern", "Delhi", "Tech", "Python,  SQL");
        let catalog = Catalog::from_reader(Cursor::new(SAMPLE)).expect("catalog parses");
        assert_eq!(listing, catalog.listings()[0]);

        let empty = InternshipListing::new("Ops Intern", "Pune", "Operations", "  ");
        assert!(empty.required_skills.is_empty());
    }
}
