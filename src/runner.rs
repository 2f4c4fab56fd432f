// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    db, file, html,
    params::{Params, PAGE_TITLE},
    reports::{self, Report},
};

/// Summary of what was produced.
pub struct RunSummary {
    pub reports_run: usize,
    pub out: Option<PathBuf>,
}

/// Top-level runner: open the database once, then execute and render each
/// selected report in registry order, and write the document in one go.
pub fn run(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    let selected = select_reports(params.reports.as_deref())?;

    let conn = db::open(&params.db)?;

    let mut body = s!();
    for report in &selected {
        logf!("Running report '{}'", report.slug);
        let rs = db::query(&conn, report.sql)?;
        logd!("Report '{}': {} row(s)", report.slug, rs.len());

        body.push_str(&html::heading(report.title));
        body.push_str(&html::render_table(&rs));
    }

    let doc = if params.page {
        html::page(PAGE_TITLE, &body)
    } else {
        body
    };

    let written = file::write_output(params.out.as_deref(), &doc)?;
    if let Some(p) = &written {
        logf!("Wrote {}", p.display());
    }

    Ok(RunSummary { reports_run: selected.len(), out: written })
}

/// Resolve the slug filter against the registry. Emission order is always
/// registry order; the filter only selects.
fn select_reports(filter: Option<&[String]>) -> Result<Vec<&'static Report>, Box<dyn Error>> {
    let Some(slugs) = filter else {
        return Ok(reports::ALL.to_vec());
    };

    // Reject unknown slugs up front, before touching the database.
    for slug in slugs {
        if reports::find(slug).is_none() {
            let known: Vec<&str> = reports::ALL.iter().map(|r| r.slug).collect();
            return Err(format!(
                "Unknown report: {} (available: {})",
                slug,
                known.join(", ")
            ).into());
        }
    }

    Ok(reports::ALL
        .iter()
        .copied()
        .filter(|r| slugs.iter().any(|s| s.eq_ignore_ascii_case(r.slug)))
        .collect())
}

/* ---------------- Report-list helper (CLI calls this) ---------------- */

/// All `(slug, title)` pairs, in emission order.
pub fn list_reports() -> Vec<(&'static str, &'static str)> {
    reports::ALL.iter().map(|r| (r.slug, r.title)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_selects_but_never_reorders() {
        let filter = vec![s!("best-3pt-teams"), s!("teams")];
        let picked = select_reports(Some(&filter)).unwrap();
        let slugs: Vec<&str> = picked.iter().map(|r| r.slug).collect();
        assert_eq!(slugs, vec!["teams", "best-3pt-teams"]);
    }

    #[test]
    fn unknown_slug_is_an_error() {
        let filter = vec![s!("bogus")];
        let err = select_reports(Some(&filter)).unwrap_err();
        assert!(err.to_string().contains("bogus"));
        assert!(err.to_string().contains("best-3pt-shooters"));
    }

    #[test]
    fn no_filter_runs_everything() {
        assert_eq!(select_reports(None).unwrap().len(), reports::ALL.len());
    }
}
