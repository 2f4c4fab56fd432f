// src/reports/teams.rs
//! Example query: all team codes & names.

use super::Report;

pub const REPORT: Report = Report {
    slug: "teams",
    title: "Example Query",
    sql: "SELECT * FROM team",
};
