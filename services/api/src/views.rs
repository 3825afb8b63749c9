use crate::form::{indicators, FormSelection};
use crate::session::Submission;
use internship_match::{RankedListing, ScoreComponent};
use serde::Serialize;
use std::fmt::Write;

pub(crate) const NO_MATCHES_MESSAGE: &str =
    "No internships found with the specified criteria. Try broadening your search!";
const NO_DIRECT_MATCH_NOTE: &str = "This internship matches your profile but doesn't have a direct skills or location/sector match listed.";

/// Client-facing shape of one ranked result.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RecommendationView {
    pub(crate) title: String,
    pub(crate) location: String,
    pub(crate) sector: String,
    pub(crate) required_skills: Vec<String>,
    pub(crate) score: u32,
    pub(crate) matched_skills: Vec<String>,
    pub(crate) indicators: Vec<&'static str>,
    pub(crate) breakdown: Vec<ScoreComponent>,
}

impl RecommendationView {
    pub(crate) fn from_result(form: &FormSelection, result: &RankedListing) -> Self {
        Self {
            title: result.title.clone(),
            location: result.location.clone(),
            sector: result.sector.clone(),
            required_skills: result.required_skills.clone(),
            score: result.score,
            matched_skills: result.matched_skills.iter().cloned().collect(),
            indicators: indicators(form, result)
                .into_iter()
                .map(|indicator| indicator.label())
                .collect(),
            breakdown: result.breakdown.clone(),
        }
    }

    fn has_direct_match(&self) -> bool {
        !self.indicators.is_empty() || !self.matched_skills.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RecommendationResponse {
    pub(crate) count: usize,
    pub(crate) message: String,
    pub(crate) results: Vec<RecommendationView>,
}

impl RecommendationResponse {
    pub(crate) fn new(form: &FormSelection, results: &[RankedListing]) -> Self {
        Self {
            count: results.len(),
            message: summary_message(results.len()),
            results: results
                .iter()
                .map(|result| RecommendationView::from_result(form, result))
                .collect(),
        }
    }
}

pub(crate) fn summary_message(count: usize) -> String {
    if count == 0 {
        NO_MATCHES_MESSAGE.to_string()
    } else {
        format!("Found {count} matches for you!")
    }
}

/// Plain-text result cards for terminal output.
pub(crate) fn render_submission(submission: &Submission) -> String {
    let response = RecommendationResponse::new(&submission.form, &submission.results);
    let mut out = String::new();

    let _ = writeln!(out, "{}", response.message);
    for card in &response.results {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}  [score {}]", card.title, card.score);
        let _ = writeln!(out, "  {} | {}", card.location, card.sector);
        if card.has_direct_match() {
            let tags: Vec<&str> = card
                .indicators
                .iter()
                .copied()
                .chain(card.matched_skills.iter().map(String::as_str))
                .collect();
            let _ = writeln!(out, "  Why this match? {}", tags.join(", "));
        } else {
            let _ = writeln!(out, "  {NO_DIRECT_MATCH_NOTE}");
        }
    }

    out
}
