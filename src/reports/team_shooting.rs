// src/reports/team_shooting.rs
//! Report 2: best 3pt shooting teams.
//!
//! One row per team: accuracy as a two-decimal percentage, total
//! 3-pointers made, # of contributing players (at least one make), # of
//! attempting players (at least one attempt), and the total attempts by
//! players who never made one. Single query, no subqueries; conditional
//! aggregates stand in for per-condition self-joins. Most accurate first.
//!
//! Accuracy is only formatted when the team attempted at least one shot
//! (printf would render a NULL ratio as "0.00%"); a team with zero
//! attempts shows an empty accuracy cell and sorts last rather than
//! failing on the division.

use super::Report;

pub const REPORT: Report = Report {
    slug: "best-3pt-teams",
    title: "Report 2 - Best 3pt Shooting Teams",
    sql: r#"
SELECT
    t.name,
    CASE WHEN SUM(p."3pt_attempted") > 0
         THEN printf('%.2f%%', SUM(p."3pt") * 100.0 / SUM(p."3pt_attempted"))
    END AS accuracy_3pt,
    SUM(p."3pt") AS total_3pt,
    COUNT(DISTINCT CASE WHEN p."3pt" > 0 THEN p.player_id END) AS no_contributing_players,
    COUNT(DISTINCT CASE WHEN p."3pt_attempted" > 0 THEN p.player_id END) AS no_attempting_players,
    SUM(CASE WHEN p."3pt" = 0 THEN p."3pt_attempted" ELSE 0 END) AS total_3pt_attempts_0_3pt
FROM
    team t
    JOIN roster r ON r.team_code = t.code
    JOIN player_totals p ON p.player_id = r.id
GROUP BY
    t.name
ORDER BY
    SUM(p."3pt") * 1.0 / NULLIF(SUM(p."3pt_attempted"), 0) DESC
"#,
};
