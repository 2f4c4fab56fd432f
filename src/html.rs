// src/html.rs
//
// Result set → HTML. Header row from the column names, one body row per
// record, everything escaped. Deterministic: same input, same bytes.

use crate::db::ResultSet;

/* ---------------- Escaping ---------------- */

/// Escape text for use in HTML element content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/* ---------------- Rendering ---------------- */

/// Render a result set as a `<table>`.
/// Empty result set → bare `<table></table>`, no header row.
pub fn render_table(rs: &ResultSet) -> String {
    if rs.is_empty() {
        return s!("<table></table>\n");
    }

    let mut out = String::with_capacity(64 + rs.len() * 64);

    out.push_str("<table>\n<thead>\n<tr>");
    for col in &rs.columns {
        out.push_str("<th>");
        out.push_str(&escape(col));
        out.push_str("</th>");
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &rs.rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str("<td>");
            out.push_str(&escape(&cell.to_string()));
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n");
    out
}

/// Section heading emitted before each report table.
pub fn heading(title: &str) -> String {
    join!("<h1>", &escape(title), "</h1>\n")
}

/// Wrap a fragment in a minimal standalone page with table styling.
pub fn page(title: &str, body: &str) -> String {
    join!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>",
        &escape(title),
        "</title>\n<style>\n",
        STYLE,
        "</style>\n</head>\n<body>\n",
        body,
        "</body>\n</html>\n",
    )
}

const STYLE: &str = "\
table { border-collapse: collapse; margin-bottom: 1em; }
th, td { border: 1px solid #999; padding: 4px 8px; text-align: left; }
th { background: #eee; }
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ResultSet, Value};

    #[test]
    fn escape_covers_html_metacharacters() {
        assert_eq!(escape(r#"<b>"A&B"</b>'"#), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn empty_result_set_renders_bare_table() {
        let rs = ResultSet { columns: vec![s!("a"), s!("b")], rows: vec![] };
        assert_eq!(render_table(&rs), "<table></table>\n");
    }

    #[test]
    fn null_cell_renders_empty_td() {
        let rs = ResultSet {
            columns: vec![s!("x")],
            rows: vec![vec![Value::Null]],
        };
        assert!(render_table(&rs).contains("<td></td>"));
    }

    #[test]
    fn heading_escapes_title() {
        assert_eq!(heading("A & B"), "<h1>A &amp; B</h1>\n");
    }
}
