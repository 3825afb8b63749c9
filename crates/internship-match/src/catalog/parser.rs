use super::normalizer::{fold_case, split_required_skills};
use super::{CatalogError, InternshipListing};
use csv::StringRecord;
use std::io::Read;
use tracing::warn;

pub(crate) const TITLE_COLUMN: &str = "Internship_Title";
pub(crate) const LOCATION_COLUMN: &str = "Location";
pub(crate) const SECTOR_COLUMN: &str = "Sector";
pub(crate) const SKILLS_COLUMN: &str = "Required_Skills";

pub(crate) fn parse_listings<R: Read>(reader: R) -> Result<Vec<InternshipListing>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers: StringRecord = csv_reader
        .headers()?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}'))
        .collect();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut listings = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        match record {
            Ok(record) => listings.push(CatalogRow::from_record(&record, &columns).into_listing()),
            Err(err) => {
                // Row numbers are 1-based and skip the header line.
                warn!(row = index + 1, error = %err, "skipping unreadable catalog row");
            }
        }
    }

    Ok(listings)
}

/// Positions of the required columns within the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    title: usize,
    location: usize,
    sector: usize,
    skills: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, CatalogError> {
        let position = |column: &'static str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or(CatalogError::MissingColumn { column })
        };

        Ok(Self {
            title: position(TITLE_COLUMN)?,
            location: position(LOCATION_COLUMN)?,
            sector: position(SECTOR_COLUMN)?,
            skills: position(SKILLS_COLUMN)?,
        })
    }
}

/// Raw cell values of one record. Cells past the end of a short record read
/// as empty.
#[derive(Debug)]
struct CatalogRow<'r> {
    title: &'r str,
    location: &'r str,
    sector: &'r str,
    required_skills: Option<&'r str>,
}

impl<'r> CatalogRow<'r> {
    fn from_record(record: &'r StringRecord, columns: &ColumnIndex) -> Self {
        let cell = |index: usize| record.get(index).unwrap_or_default();
        Self {
            title: cell(columns.title),
            location: cell(columns.location),
            sector: cell(columns.sector),
            required_skills: Some(cell(columns.skills)).filter(|value| !value.trim().is_empty()),
        }
    }

    fn into_listing(self) -> InternshipListing {
        InternshipListing {
            title: self.title.to_string(),
            location: fold_case(self.location),
            sector: fold_case(self.sector),
            required_skills: split_required_skills(self.required_skills),
        }
    }
}
