//! Filtering, scoring, and ranking of catalog listings for a candidate query.

mod query;
mod scoring;

#[cfg(test)]
mod tests;

pub use query::CandidateQuery;

use crate::catalog::{Catalog, InternshipListing};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Upper bound on the shortlist returned by [`recommend`].
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Signal that contributed points to a listing's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    Location,
    Sector,
    Skills,
}

/// Discrete contribution to a listing's score, kept for match explanations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: MatchFactor,
    pub points: u32,
    pub notes: String,
}

/// A catalog listing scored against one query. Freshly allocated per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedListing {
    pub title: String,
    pub location: String,
    pub sector: String,
    pub required_skills: Vec<String>,
    pub score: u32,
    pub final_score: f64,
    pub matched_skills: BTreeSet<String>,
    pub breakdown: Vec<ScoreComponent>,
}

impl RankedListing {
    pub fn skill_match_count(&self) -> usize {
        self.matched_skills.len()
    }
}

/// Ranks the catalog for `query`, returning at most [`MAX_RECOMMENDATIONS`]
/// listings. An empty vector means nothing survived the filters.
///
/// Listings with equal `final_score` keep their catalog order.
pub fn recommend(query: &CandidateQuery, catalog: &Catalog) -> Vec<RankedListing> {
    let survivors: Vec<&InternshipListing> = catalog
        .listings()
        .iter()
        .filter(|listing| query.admits(listing))
        .collect();

    if survivors.is_empty() {
        debug!(
            location = ?query.location,
            sector = ?query.sector,
            "no listings survived the filters"
        );
        return Vec::new();
    }

    let candidate_skills = query.skill_set();
    let mut ranked: Vec<RankedListing> = survivors
        .into_iter()
        .map(|listing| scoring::score_listing(listing, query, &candidate_skills))
        .collect();

    ranked.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    let survivor_count = ranked.len();
    ranked.truncate(MAX_RECOMMENDATIONS);

    debug!(
        survivors = survivor_count,
        returned = ranked.len(),
        "ranked internship listings"
    );
    ranked
}

/// Entry point taking raw form values; see [`CandidateQuery::new`].
pub fn recommend_raw(
    skills: &str,
    location: Option<&str>,
    sector: Option<&str>,
    catalog: &Catalog,
) -> Vec<RankedListing> {
    recommend(&CandidateQuery::new(skills, location, sector), catalog)
}
