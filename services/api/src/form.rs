use internship_match::{CandidateQuery, RankedListing};
use serde::{Deserialize, Serialize};

/// Selection value meaning "do not filter on this field".
pub(crate) const ALL_SENTINEL: &str = "All";

/// Raw values submitted through the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct FormSelection {
    pub(crate) skills: String,
    #[serde(default)]
    pub(crate) location: Option<String>,
    #[serde(default)]
    pub(crate) sector: Option<String>,
}

impl FormSelection {
    pub(crate) fn new(skills: String, location: Option<String>, sector: Option<String>) -> Self {
        Self {
            skills,
            location,
            sector,
        }
    }

    pub(crate) fn location_filter(&self) -> Option<&str> {
        selected(self.location.as_deref())
    }

    pub(crate) fn sector_filter(&self) -> Option<&str> {
        selected(self.sector.as_deref())
    }

    /// Rejects blank skill input before anything reaches the engine.
    pub(crate) fn to_query(&self) -> Result<CandidateQuery, FormError> {
        if self.skills.trim().is_empty() {
            return Err(FormError::MissingSkills);
        }

        Ok(CandidateQuery::new(
            &self.skills,
            self.location_filter(),
            self.sector_filter(),
        ))
    }
}

fn selected(value: Option<&str>) -> Option<&str> {
    value.filter(|value| *value != ALL_SENTINEL)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum FormError {
    #[error("Please enter at least one skill")]
    MissingSkills,
}

/// Highlight shown next to a result when it matches the form's own selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Indicator {
    PerfectLocation,
    IdealSector,
}

impl Indicator {
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::PerfectLocation => "Perfect Location",
            Self::IdealSector => "Ideal Sector",
        }
    }
}

pub(crate) fn indicators(form: &FormSelection, result: &RankedListing) -> Vec<Indicator> {
    let mut tags = Vec::new();
    if form
        .location_filter()
        .is_some_and(|location| location.to_lowercase() == result.location.to_lowercase())
    {
        tags.push(Indicator::PerfectLocation);
    }
    if form
        .sector_filter()
        .is_some_and(|sector| sector.to_lowercase() == result.sector.to_lowercase())
    {
        tags.push(Indicator::IdealSector);
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use internship_match::{recommend, Catalog, InternshipListing};

    fn form(skills: &str, location: &str, sector: &str) -> FormSelection {
        FormSelection::new(
            skills.to_string(),
            Some(location.to_string()),
            Some(sector.to_string()),
        )
    }

    #[test]
    fn blank_skills_are_rejected() {
        assert_eq!(
            form("   ", "All", "All").to_query(),
            Err(FormError::MissingSkills)
        );
        assert_eq!(form("", "Delhi", "All").to_query(), Err(FormError::MissingSkills));
        assert_eq!(
            FormError::MissingSkills.to_string(),
            "Please enter at least one skill"
        );
    }

    #[test]
    fn all_sentinel_disables_filters() {
        let query = form("Python", "All", "All").to_query().expect("valid form");
        assert!(query.location.is_none());
        assert!(query.sector.is_none());

        let query = form("Python", "delhi", "All").to_query().expect("valid form");
        assert_eq!(query.location.as_deref(), Some("delhi"));
    }

    #[test]
    fn indicators_follow_form_selections() {
        let catalog = Catalog::from_listings(vec![InternshipListing::new(
            "Data Intern",
            "Delhi",
            "Tech",
            "Python",
        )]);
        let selection = form("python", "DELHI", "tech");
        let query = selection.to_query().expect("valid form");
        let results = recommend(&query, &catalog);

        assert_eq!(
            indicators(&selection, &results[0]),
            vec![Indicator::PerfectLocation, Indicator::IdealSector]
        );

        let unfiltered = form("python", "All", "All");
        assert!(indicators(&unfiltered, &results[0]).is_empty());
    }
}
