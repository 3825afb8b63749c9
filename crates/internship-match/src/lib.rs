//! Internship recommendation engine.
//!
//! The [`catalog`] module loads and normalizes the listing dataset once; the
//! [`recommend`] module filters, scores, and ranks that catalog for each
//! candidate query without mutating it.

pub mod catalog;
pub mod config;
pub mod error;
pub mod recommend;
pub mod telemetry;

pub use catalog::{load_catalog, Catalog, CatalogError, InternshipListing, SharedCatalog};
pub use recommend::{
    recommend, recommend_raw, CandidateQuery, MatchFactor, RankedListing, ScoreComponent,
    MAX_RECOMMENDATIONS,
};
