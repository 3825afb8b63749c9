use crate::catalog::normalizer::fold_case;
use crate::catalog::InternshipListing;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Normalized candidate input: skill tokens plus optional hard filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateQuery {
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub sector: Option<String>,
}

impl CandidateQuery {
    /// Parses raw form input. Skills are split on commas, trimmed, and
    /// lowercased without deduplication; an empty filter value means no filter.
    pub fn new(skills: &str, location: Option<&str>, sector: Option<&str>) -> Self {
        Self {
            skills: parse_skills(skills),
            location: normalize_filter(location),
            sector: normalize_filter(sector),
        }
    }

    pub(crate) fn skill_set(&self) -> HashSet<&str> {
        self.skills.iter().map(String::as_str).collect()
    }

    /// Hard filter: every active filter must equal the listing's field.
    pub(crate) fn admits(&self, listing: &InternshipListing) -> bool {
        let location_ok = self
            .location
            .as_deref()
            .map_or(true, |location| listing.location == location);
        let sector_ok = self
            .sector
            .as_deref()
            .map_or(true, |sector| listing.sector == sector);
        location_ok && sector_ok
    }
}

fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',').map(|token| fold_case(token.trim())).collect()
}

fn normalize_filter(value: Option<&str>) -> Option<String> {
    value.filter(|value| !value.is_empty()).map(fold_case)
}
