use crate::catalog::{Catalog, InternshipListing};

pub(super) fn delhi_catalog() -> Catalog {
    Catalog::from_listings(vec![
        InternshipListing::new("Data Intern", "Delhi", "Tech", "python, sql"),
        InternshipListing::new("Marketing Intern", "Delhi", "Marketing", "communication"),
    ])
}

pub(super) fn mixed_catalog() -> Catalog {
    Catalog::from_listings(vec![
        InternshipListing::new("Data Intern", "Delhi", "Tech", "Python, SQL"),
        InternshipListing::new("Marketing Intern", "Delhi", "Marketing", "Communication"),
        InternshipListing::new("Remote Analyst", "remote", "Finance", "Excel, Statistics"),
        InternshipListing::new("Backend Intern", "Bangalore", "Tech", "Rust, SQL, Docker"),
        InternshipListing::new("ML Intern", "Bangalore", "Tech", "Python, Machine Learning"),
        InternshipListing::new("Content Intern", "Remote", "Media", "Writing, Communication"),
        InternshipListing::new("Finance Intern", "Mumbai", "Finance", "Excel, Accounting"),
        InternshipListing::new("Ops Intern", "Pune", "Operations", ""),
    ])
}

pub(super) fn titles(results: &[crate::recommend::RankedListing]) -> Vec<&str> {
    results.iter().map(|result| result.title.as_str()).collect()
}
