use crate::form::{FormError, FormSelection};
use internship_match::{recommend, Catalog, RankedListing};

/// Last accepted form and the results it produced.
#[derive(Debug, Clone)]
pub(crate) struct Submission {
    pub(crate) form: FormSelection,
    pub(crate) results: Vec<RankedListing>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SubmitOutcome {
    Accepted { count: usize },
    Rejected(FormError),
}

/// Per-user state carried between form submissions. The engine never sees it.
#[derive(Debug, Default)]
pub(crate) struct SearchSession {
    submitted: bool,
    last: Option<Submission>,
}

impl SearchSession {
    /// A rejected form leaves the previously shown results in place.
    pub(crate) fn submit(&mut self, form: FormSelection, catalog: &Catalog) -> SubmitOutcome {
        let query = match form.to_query() {
            Ok(query) => query,
            Err(err) => return SubmitOutcome::Rejected(err),
        };

        let results = recommend(&query, catalog);
        let count = results.len();
        self.submitted = true;
        self.last = Some(Submission { form, results });
        SubmitOutcome::Accepted { count }
    }

    pub(crate) fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub(crate) fn last(&self) -> Option<&Submission> {
        self.last.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use internship_match::InternshipListing;

    fn catalog() -> Catalog {
        Catalog::from_listings(vec![
            InternshipListing::new("Data Intern", "Delhi", "Tech", "Python, SQL"),
            InternshipListing::new("Finance Intern", "Mumbai", "Finance", "Excel"),
        ])
    }

    fn form(skills: &str) -> FormSelection {
        FormSelection::new(skills.to_string(), Some("All".to_string()), None)
    }

    #[test]
    fn fresh_session_has_nothing_to_show() {
        let session = SearchSession::default();
        assert!(!session.is_submitted());
        assert!(session.last().is_none());
    }

    #[test]
    fn accepted_submission_is_remembered() {
        let mut session = SearchSession::default();

        let outcome = session.submit(form("excel"), &catalog());

        assert_eq!(outcome, SubmitOutcome::Accepted { count: 2 });
        assert!(session.is_submitted());
        let last = session.last().expect("results remembered");
        assert_eq!(last.results[0].title, "Finance Intern");
    }

    #[test]
    fn blank_submission_keeps_previous_results() {
        let mut session = SearchSession::default();
        let catalog = catalog();
        session.submit(form("python"), &catalog);

        let outcome = session.submit(form("  "), &catalog);

        assert_eq!(outcome, SubmitOutcome::Rejected(FormError::MissingSkills));
        let last = session.last().expect("previous results kept");
        assert_eq!(last.form.skills, "python");
        assert_eq!(last.results[0].title, "Data Intern");
    }

    #[test]
    fn blank_first_submission_does_not_mark_session_submitted() {
        let mut session = SearchSession::default();
        session.submit(form(""), &catalog());
        assert!(!session.is_submitted());
    }
}
