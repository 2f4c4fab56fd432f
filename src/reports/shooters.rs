// src/reports/shooters.rs
//! Report 1: best 3pt shooters.
//!
//! Players older than 30 who shot 3-pointers at better than 35% accuracy:
//! name, full team name, age, number, position, accuracy as a two-decimal
//! percentage, and 3-pointers made. Best accuracy first.
//!
//! `NULLIF` guards the attempt count: a player with zero attempts gets a
//! NULL accuracy, which never satisfies `> 0.35`, so zero-attempt players
//! drop out instead of raising a division error.

use super::Report;

pub const REPORT: Report = Report {
    slug: "best-3pt-shooters",
    title: "Report 1 - Best 3pt Shooters",
    sql: r#"
SELECT
    r.name,
    t.name AS team_name,
    p.age,
    r.number,
    r.pos,
    printf('%.2f%%', CAST(p."3pt" AS REAL) * 100.0 / NULLIF(p."3pt_attempted", 0)) AS accuracy,
    p."3pt" AS "3pt"
FROM
    roster r
    JOIN player_totals p ON p.player_id = r.id
    JOIN team t ON t.code = r.team_code
WHERE
    p.age > 30
    AND CAST(p."3pt" AS REAL) / NULLIF(p."3pt_attempted", 0) > 0.35
ORDER BY
    CAST(p."3pt" AS REAL) / NULLIF(p."3pt_attempted", 0) DESC
"#,
};
