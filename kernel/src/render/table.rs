//! Tagged row report.

use std::fmt::Write;

use tandem_engine::EditScript;

/// Renders one row per operation as `"{tag} {line}"`.
#[must_use]
pub fn format_table(script: &EditScript<String>) -> String {
    let mut output = String::new();
    for op in script {
        let _ = writeln!(output, "{} {}", op.tag(), op.value());
    }
    output
}
