use regex::Regex;
use std::sync::OnceLock;

fn skill_separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r",\s*").expect("skill separator pattern compiles"))
}

/// Lowercases a comparison key (location, sector, skill token).
pub(crate) fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Splits a catalog skills cell on a comma plus any following whitespace.
///
/// Tokens are lowercased but not otherwise trimmed, so `"Python ,SQL"` keeps
/// the space before the comma.
pub(crate) fn split_required_skills(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(value) => skill_separator()
            .split(&fold_case(value))
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_consumes_spaces_after_commas() {
        assert_eq!(
            split_required_skills(Some("Python,  SQL")),
            vec!["python".to_string(), "sql".to_string()]
        );
        assert_eq!(
            split_required_skills(Some("Python, Communication, Excel")),
            vec!["python", "communication", "excel"]
        );
    }

    #[test]
    fn split_keeps_whitespace_before_commas() {
        assert_eq!(
            split_required_skills(Some("Python ,SQL")),
            vec!["python ".to_string(), "sql".to_string()]
        );
    }

    #[test]
    fn absent_cell_yields_no_skills() {
        assert!(split_required_skills(None).is_empty());
    }

    #[test]
    fn fold_case_handles_non_ascii() {
        assert_eq!(fold_case("ÉTUDES"), "études");
    }
}
