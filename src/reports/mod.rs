// src/reports/mod.rs
//! Report registry.
//!
//! Each report is a named literal SQL statement plus its section title.
//! The registry order here is the emission order; `--reports` selects a
//! subset but never reorders.

pub mod teams;
pub mod shooters;
pub mod team_shooting;

/// One report: slug for the CLI, title for the `<h1>`, the SQL itself.
#[derive(Debug)]
pub struct Report {
    pub slug: &'static str,
    pub title: &'static str,
    pub sql: &'static str,
}

/// All reports, in emission order.
pub const ALL: [&Report; 3] = [
    &teams::REPORT,
    &shooters::REPORT,
    &team_shooting::REPORT,
];

/// Look up a report by slug (case-insensitive).
pub fn find(slug: &str) -> Option<&'static Report> {
    ALL.iter().copied().find(|r| r.slug.eq_ignore_ascii_case(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_slugs_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        assert!(find("TEAMS").is_some());
        assert!(find("nope").is_none());
    }

    #[test]
    fn report_is_debug_printable() {
        // Assertion failures in callers format Vec<&Report> with {:?}
        let dump = format!("{:?}", ALL);
        assert!(dump.contains("best-3pt-shooters"));
    }
}
