use super::query::CandidateQuery;
use super::{MatchFactor, RankedListing, ScoreComponent};
use crate::catalog::InternshipListing;
use std::collections::{BTreeSet, HashSet};

pub(crate) const LOCATION_BONUS: u32 = 10;
pub(crate) const SECTOR_BONUS: u32 = 5;
pub(crate) const POINTS_PER_SKILL: u32 = 3;
/// Sub-point weight per matched skill used only for ordering.
pub(crate) const TIE_BREAK_WEIGHT: f64 = 0.1;

pub(crate) fn score_listing(
    listing: &InternshipListing,
    query: &CandidateQuery,
    candidate_skills: &HashSet<&str>,
) -> RankedListing {
    let mut breakdown = Vec::new();
    let mut score: u32 = 0;

    // Survivors already passed the hard filters, so these bonuses are flat.
    if let Some(location) = &query.location {
        breakdown.push(ScoreComponent {
            factor: MatchFactor::Location,
            points: LOCATION_BONUS,
            notes: format!("located in {location}"),
        });
        score += LOCATION_BONUS;
    }

    if let Some(sector) = &query.sector {
        breakdown.push(ScoreComponent {
            factor: MatchFactor::Sector,
            points: SECTOR_BONUS,
            notes: format!("in the {sector} sector"),
        });
        score += SECTOR_BONUS;
    }

    let matched_skills: BTreeSet<String> = listing
        .required_skills
        .iter()
        .filter(|skill| candidate_skills.contains(skill.as_str()))
        .cloned()
        .collect();
    let match_count = matched_skills.len() as u32;
    let skill_points = match_count * POINTS_PER_SKILL;

    breakdown.push(ScoreComponent {
        factor: MatchFactor::Skills,
        points: skill_points,
        notes: format!(
            "{match_count} of {} required skill(s) matched",
            distinct_count(&listing.required_skills)
        ),
    });
    score += skill_points;

    let final_score = f64::from(score) + f64::from(match_count) * TIE_BREAK_WEIGHT;

    RankedListing {
        title: listing.title.clone(),
        location: listing.location.clone(),
        sector: listing.sector.clone(),
        required_skills: listing.required_skills.clone(),
        score,
        final_score,
        matched_skills,
        breakdown,
    }
}

fn distinct_count(skills: &[String]) -> usize {
    skills.iter().collect::<HashSet<_>>().len()
}
