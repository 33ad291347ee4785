//! Integration tests for loading, diffing and rendering files.

use anyhow::Result;
use tandem_engine::{DiffOp, EditOp};
use tandem_kernel::commands::{DiffCommand, Outcome, ReportCommand};
use tandem_kernel::compare::Comparator;
use tandem_kernel::infrastructure::config::Settings;
use tandem_kernel::render::{OutputFormat, format_side_by_side, format_table, side_by_side};
use tandem_kernel::text::{InputError, InputLimits};

mod common;

/// A one-line replacement round-trips through load, diff and render.
#[test]
fn test_replace_middle_line() -> Result<()> {
    let ws = common::TestWorkspace::new()?;
    let left = ws.write("left.txt", "a\nb\nc\n")?;
    let right = ws.write("right.txt", "a\nx\nc\n")?;

    let diff = Comparator::new(InputLimits::default()).diff_files(&left, &right)?;

    assert_eq!(
        diff.script.ops(),
        &[
            EditOp::Equal("a".to_string()),
            EditOp::Delete("b".to_string()),
            EditOp::Insert("x".to_string()),
            EditOp::Equal("c".to_string()),
        ]
    );
    assert_eq!(format_table(&diff.script), "  a\n- b\n+ x\n  c\n");
    assert!(matches!(
        diff.script.hunks()[1],
        DiffOp::Replace {
            old_start: 1,
            old_end: 2,
            new_start: 1,
            new_end: 2
        }
    ));
    Ok(())
}

/// Line-ending differences alone do not count as changes.
#[test]
fn test_line_endings_are_normalized() -> Result<()> {
    let ws = common::TestWorkspace::new()?;
    let left = ws.write("unix.txt", "one\ntwo\n")?;
    let right = ws.write("dos.txt", "one\r\ntwo\r\n")?;

    let diff = Comparator::new(InputLimits::default()).diff_files(&left, &right)?;

    assert!(diff.script.is_identical());
    Ok(())
}

/// Empty left input yields pure insertions, aligned on the right column.
#[test]
fn test_insert_into_empty_side_by_side() -> Result<()> {
    let ws = common::TestWorkspace::new()?;
    let left = ws.write("empty.txt", "")?;
    let right = ws.write("new.txt", "p\nq\n")?;

    let diff = Comparator::new(InputLimits::default()).diff_files(&left, &right)?;
    let rows = side_by_side(&diff.script);

    assert!(rows.iter().all(|row| row.left.is_none() && row.marker() == '>'));
    let text = format_side_by_side(&rows, 10);
    assert!(text.lines().all(|line| line.contains(">|")));
    Ok(())
}

/// Binary and oversize inputs are rejected before the engine runs.
#[test]
fn test_guards_reject_inputs() -> Result<()> {
    let ws = common::TestWorkspace::new()?;
    let text = ws.write("text.txt", "hello\n")?;
    let binary = ws.write("image.png", b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR")?;
    let big = ws.write("big.txt", "x".repeat(64))?;

    let comparator = Comparator::new(InputLimits {
        max_bytes: 32,
        max_lines: 100,
    });

    assert!(matches!(
        comparator.diff_files(&text, &binary),
        Err(InputError::Binary(_))
    ));
    assert!(matches!(
        comparator.diff_files(&big, &text),
        Err(InputError::TooLarge { .. })
    ));
    Ok(())
}

/// Settings from a config file drive the diff command.
#[test]
fn test_diff_command_uses_config_file() -> Result<()> {
    let ws = common::TestWorkspace::new()?;
    let settings = ws.settings("[report]\ndefault_format = \"json\"\n")?;
    assert_eq!(settings.report.default_format, OutputFormat::Json);

    let cmd = DiffCommand {
        left: ws.write("left.txt", "a\n")?,
        right: ws.write("right.txt", "a\nb\n")?,
        format: None,
        width: None,
        out: None,
    };
    let mut stdout = Vec::new();
    let outcome = cmd.execute(&settings, &mut stdout)?;

    assert_eq!(outcome, Outcome::Changed);
    let json: serde_json::Value = serde_json::from_slice(&stdout)?;
    assert_eq!(json["identical"], false);
    assert_eq!(json["ops"][1]["op"], "insert");
    assert_eq!(json["ops"][1]["value"], "b");
    Ok(())
}

/// The HTML report escapes content and uses the configured title.
#[test]
fn test_report_command_writes_page() -> Result<()> {
    let ws = common::TestWorkspace::new()?;
    let mut settings = Settings::default();
    settings.report.title = "Nightly & Weekly".to_string();

    let cmd = ReportCommand {
        left: ws.write("left.html", "<p>old</p>\n")?,
        right: ws.write("right.html", "<p>new</p>\n")?,
        out: ws.path().join("report.html"),
        title: None,
    };
    cmd.execute(&settings, &mut Vec::new())?;

    let html = ws.read("report.html")?;
    assert!(html.contains("<title>Nightly &amp; Weekly</title>"));
    assert!(html.contains("&lt;p&gt;old&lt;/p&gt;"));
    assert!(html.contains("class=\"del\""));
    assert!(html.contains("class=\"ins\""));
    Ok(())
}
