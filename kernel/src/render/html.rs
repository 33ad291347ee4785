//! Standalone HTML report.

use std::fmt::Write;

use tandem_engine::{EditOp, EditScript};

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
table.diff{border-collapse:collapse;font-family:monospace;width:100%}\
td{padding:0 .5em;white-space:pre}\
td.num{color:#888;text-align:right;width:3em}\
tr.del{background:#fdd}\
tr.ins{background:#dfd}";

/// Escapes text for use in HTML content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders `script` as a complete HTML page with one table row per operation.
///
/// Rows carry the class `equal`, `del` or `ins` and the 1-based line number
/// of each side they belong to.
#[must_use]
pub fn format_html(script: &EditScript<String>, title: &str) -> String {
    let title = escape(title);
    let stats = script.stats();
    let mut html = String::new();

    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html>");
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "<meta charset=\"utf-8\">");
    let _ = writeln!(html, "<title>{title}</title>");
    let _ = writeln!(html, "<style>{STYLE}</style>");
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, "<h1>{title}</h1>");
    let _ = writeln!(
        html,
        "<p class=\"summary\">{} unchanged, {} deleted, {} inserted</p>",
        stats.equal, stats.deleted, stats.inserted
    );
    let _ = writeln!(html, "<table class=\"diff\">");

    let (mut left, mut right) = (0usize, 0usize);
    for op in script {
        let (class, left_cell, right_cell) = match op {
            EditOp::Equal(_) => {
                left += 1;
                right += 1;
                ("equal", left.to_string(), right.to_string())
            }
            EditOp::Delete(_) => {
                left += 1;
                ("del", left.to_string(), String::new())
            }
            EditOp::Insert(_) => {
                right += 1;
                ("ins", String::new(), right.to_string())
            }
        };
        let _ = writeln!(
            html,
            "<tr class=\"{class}\"><td class=\"num\">{left_cell}</td><td class=\"num\">{right_cell}</td>\
             <td class=\"tag\">{}</td><td class=\"line\">{}</td></tr>",
            op.tag(),
            escape(op.value())
        );
    }

    let _ = writeln!(html, "</table>");
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");
    html
}
