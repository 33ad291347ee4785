//! Side-by-side alignment.
//!
//! Equal lines occupy both columns; a deleted line leaves the right column
//! blank and an inserted line leaves the left column blank.

use std::fmt::Write;

use serde::Serialize;
use tandem_engine::{EditOp, EditScript};

/// A numbered line in one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// 1-based line number in its input.
    pub number: usize,
    /// Line content.
    pub text: String,
}

/// One aligned row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideBySideRow {
    /// Left column, blank for insertions.
    pub left: Option<Cell>,
    /// Right column, blank for deletions.
    pub right: Option<Cell>,
}

impl SideBySideRow {
    /// Gutter marker: `' '` for equal rows, `'<'` for deletions, `'>'` for
    /// insertions.
    #[must_use]
    pub const fn marker(&self) -> char {
        match (&self.left, &self.right) {
            (Some(_), None) => '<',
            (None, Some(_)) => '>',
            _ => ' ',
        }
    }
}

/// Aligns the operations of `script` into rows.
#[must_use]
pub fn side_by_side(script: &EditScript<String>) -> Vec<SideBySideRow> {
    let (mut left_number, mut right_number) = (0, 0);
    let cell = |counter: &mut usize, text: &String| {
        *counter += 1;
        Some(Cell {
            number: *counter,
            text: text.clone(),
        })
    };

    script
        .iter()
        .map(|op| match op {
            EditOp::Equal(text) => SideBySideRow {
                left: cell(&mut left_number, text),
                right: cell(&mut right_number, text),
            },
            EditOp::Delete(text) => SideBySideRow {
                left: cell(&mut left_number, text),
                right: None,
            },
            EditOp::Insert(text) => SideBySideRow {
                left: None,
                right: cell(&mut right_number, text),
            },
        })
        .collect()
}

fn truncate(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Formats rows for a terminal, truncating each column to `width` characters.
#[must_use]
pub fn format_side_by_side(rows: &[SideBySideRow], width: usize) -> String {
    let mut output = String::new();
    for row in rows {
        let (left_number, left_text) = row
            .left
            .as_ref()
            .map_or((String::new(), ""), |c| (c.number.to_string(), c.text.as_str()));
        let (right_number, right_text) = row
            .right
            .as_ref()
            .map_or((String::new(), ""), |c| (c.number.to_string(), c.text.as_str()));

        let line = format!(
            "{left_number:>5} {:<width$} {}| {right_number:>5} {}",
            truncate(left_text, width),
            row.marker(),
            truncate(right_text, width),
        );
        let _ = writeln!(output, "{}", line.trim_end());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> EditScript<String> {
        EditScript::from_ops(vec![
            EditOp::Equal("a".to_string()),
            EditOp::Delete("b".to_string()),
            EditOp::Insert("x".to_string()),
            EditOp::Equal("c".to_string()),
        ])
    }

    #[test]
    fn test_rows_align_and_number() {
        let rows = side_by_side(&script());
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0].marker(), ' ');
        assert_eq!(rows[1].left.as_ref().map(|c| c.number), Some(2));
        assert!(rows[1].right.is_none());
        assert_eq!(rows[1].marker(), '<');
        assert!(rows[2].left.is_none());
        assert_eq!(rows[2].right.as_ref().map(|c| c.number), Some(2));
        assert_eq!(rows[2].marker(), '>');

        let last = &rows[3];
        assert_eq!(last.left.as_ref().map(|c| c.number), Some(3));
        assert_eq!(last.right.as_ref().map(|c| c.number), Some(3));
    }

    #[test]
    fn test_format_columns() {
        let text = format_side_by_side(&side_by_side(&script()), 4);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    1 a     |     1 a");
        assert_eq!(lines[1], "    2 b    <|");
        assert_eq!(lines[2], "           >|     2 x");
    }

    #[test]
    fn test_truncates_long_lines() {
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("ab", 3), "ab");
        assert_eq!(truncate("ééé", 2), "éé");
    }
}
