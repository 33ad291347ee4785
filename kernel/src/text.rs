//! Text acquisition for line-based comparison.
//!
//! Inputs are read as bytes, screened for size and binary content, decoded
//! in their detected encoding and split into lines with their terminators
//! removed. The encoding and dominant line ending are remembered so merged
//! output can be written back byte for byte in the same style.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::infrastructure::config::LimitSettings;

/// Number of leading bytes inspected for NUL when sniffing binary content.
pub const BINARY_SNIFF_LEN: usize = 8192;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Errors that can occur while acquiring an input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Binary files cannot be compared line by line.
    #[error("Cannot compare binary file: {0}")]
    Binary(PathBuf),

    /// The content is not valid in its detected encoding.
    #[error("Cannot decode {path} as {encoding}")]
    Encoding {
        /// Path to the file.
        path: PathBuf,
        /// Name of the detected encoding.
        encoding: &'static str,
    },

    /// Maximum file size exceeded.
    #[error("File too large: {path} (max {max_bytes} bytes, got {actual_bytes})")]
    TooLarge {
        /// Path to the file.
        path: PathBuf,
        /// Maximum allowed size in bytes.
        max_bytes: u64,
        /// Actual file size in bytes.
        actual_bytes: u64,
    },

    /// Maximum line count exceeded.
    #[error("Too many lines: {path} (max {max_lines}, got {actual_lines})")]
    TooManyLines {
        /// Path to the file.
        path: PathBuf,
        /// Maximum allowed line count.
        max_lines: usize,
        /// Actual line count.
        actual_lines: usize,
    },
}

impl InputError {
    /// Path of the rejected input.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. }
            | Self::Binary(path)
            | Self::Encoding { path, .. }
            | Self::TooLarge { path, .. }
            | Self::TooManyLines { path, .. } => path,
        }
    }
}

/// Guards applied before an input reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    /// Maximum size in bytes.
    pub max_bytes: u64,
    /// Maximum number of lines.
    pub max_lines: usize,
}

impl From<&LimitSettings> for InputLimits {
    fn from(settings: &LimitSettings) -> Self {
        Self {
            max_bytes: settings.max_bytes,
            max_lines: settings.max_lines,
        }
    }
}

impl Default for InputLimits {
    fn default() -> Self {
        Self::from(&LimitSettings::default())
    }
}

/// Line terminator style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
    /// `\r`
    Cr,
}

impl LineEnding {
    /// The terminator as text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

/// Character encoding of an input, and whether it opened with a byte order
/// mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding {
    encoding: &'static Encoding,
    bom: bool,
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self {
            encoding: UTF_8,
            bom: false,
        }
    }
}

impl TextEncoding {
    /// Wraps an `encoding_rs` encoding.
    #[must_use]
    pub const fn new(encoding: &'static Encoding, bom: bool) -> Self {
        Self { encoding, bom }
    }

    /// Detects the encoding of `bytes`, returning it with the length of any
    /// byte order mark.
    ///
    /// Valid UTF-8 is taken as UTF-8; anything else is guessed by `chardetng`.
    #[must_use]
    pub fn detect(bytes: &[u8]) -> (Self, usize) {
        if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
            return (Self::new(encoding, true), bom_len);
        }
        if std::str::from_utf8(bytes).is_ok() {
            return (Self::default(), 0);
        }
        let mut detector = EncodingDetector::new();
        detector.feed(bytes, true);
        (Self::new(detector.guess(None, true), false), 0)
    }

    /// Encoding name as registered with WHATWG, e.g. `windows-1252`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.encoding.name()
    }

    /// Whether the input opened with a byte order mark.
    #[must_use]
    pub const fn has_bom(self) -> bool {
        self.bom
    }

    /// Decodes `bytes` (without the byte order mark), or `None` when they
    /// are malformed for this encoding.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
    }

    /// Encodes `text`, restoring the byte order mark.
    ///
    /// Returns `None` when `text` has characters this encoding cannot
    /// represent, or when the encoding cannot be written (UTF-16).
    #[must_use]
    pub fn encode(self, text: &str) -> Option<Vec<u8>> {
        let (bytes, used, unmappable) = self.encoding.encode(text);
        if unmappable || used != self.encoding {
            return None;
        }
        let mut out = Vec::with_capacity(bytes.len() + UTF8_BOM.len());
        if self.bom {
            out.extend_from_slice(UTF8_BOM);
        }
        out.extend_from_slice(&bytes);
        Some(out)
    }
}

/// A text split into lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    /// Lines without their terminators.
    pub lines: Vec<String>,
    /// Whether the text ended with a terminator.
    pub trailing_newline: bool,
    /// Most frequent terminator; `Lf` when there is none.
    pub line_ending: LineEnding,
    /// Encoding the text was decoded from.
    pub encoding: TextEncoding,
}

impl LineBuffer {
    /// Joins `lines` back into text using this buffer's terminator style.
    #[must_use]
    pub fn join(&self, lines: &[String]) -> String {
        join_lines(lines, self.line_ending, self.trailing_newline)
    }
}

/// Joins lines with `ending`, appending a final terminator when requested.
#[must_use]
pub fn join_lines(lines: &[String], ending: LineEnding, trailing_newline: bool) -> String {
    let mut text = lines.join(ending.as_str());
    if trailing_newline && !lines.is_empty() {
        text.push_str(ending.as_str());
    }
    text
}

/// Splits text on `\n`, `\r\n` and `\r`.
///
/// A final terminator does not produce an empty trailing line; it is recorded
/// in [`LineBuffer::trailing_newline`] instead.
#[must_use]
pub fn split_lines(text: &str) -> LineBuffer {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let (mut lf, mut crlf, mut cr) = (0usize, 0usize, 0usize);
    let (mut start, mut i) = (0, 0);

    while i < bytes.len() {
        let width = match bytes[i] {
            b'\n' => {
                lf += 1;
                1
            }
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                crlf += 1;
                2
            }
            b'\r' => {
                cr += 1;
                1
            }
            _ => {
                i += 1;
                continue;
            }
        };
        lines.push(text[start..i].to_string());
        i += width;
        start = i;
    }

    let trailing_newline = !bytes.is_empty() && start == bytes.len();
    if start < bytes.len() {
        lines.push(text[start..].to_string());
    }

    let line_ending = if crlf > lf && crlf >= cr {
        LineEnding::CrLf
    } else if cr > lf && cr > crlf {
        LineEnding::Cr
    } else {
        LineEnding::Lf
    };

    LineBuffer {
        lines,
        trailing_newline,
        line_ending,
        encoding: TextEncoding::default(),
    }
}

/// Returns true if `bytes` look binary (a NUL byte near the start).
#[must_use]
pub fn is_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(BINARY_SNIFF_LEN).any(|&b| b == 0)
}

/// Screens and decodes in-memory content attributed to `path`.
///
/// # Errors
///
/// Returns an error if the content exceeds `limits`, looks binary, or is
/// malformed in its detected encoding.
pub fn decode(path: &Path, bytes: &[u8], limits: &InputLimits) -> Result<LineBuffer, InputError> {
    let actual_bytes = bytes.len() as u64;
    if actual_bytes > limits.max_bytes {
        return Err(InputError::TooLarge {
            path: path.to_path_buf(),
            max_bytes: limits.max_bytes,
            actual_bytes,
        });
    }

    if is_binary(bytes) {
        return Err(InputError::Binary(path.to_path_buf()));
    }

    let (encoding, bom_len) = TextEncoding::detect(bytes);
    let text = encoding
        .decode(&bytes[bom_len..])
        .ok_or_else(|| InputError::Encoding {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        })?;
    let mut buffer = split_lines(&text);
    buffer.encoding = encoding;

    if buffer.lines.len() > limits.max_lines {
        return Err(InputError::TooManyLines {
            path: path.to_path_buf(),
            max_lines: limits.max_lines,
            actual_lines: buffer.lines.len(),
        });
    }

    debug!(
        path = %path.display(),
        lines = buffer.lines.len(),
        line_ending = ?buffer.line_ending,
        encoding = encoding.name(),
        "input decoded"
    );
    Ok(buffer)
}

/// Reads and decodes the file at `path`.
///
/// The size limit is checked against file metadata before reading.
///
/// # Errors
///
/// Returns an error if the file cannot be read, exceeds `limits`, looks
/// binary or cannot be decoded.
pub fn load(path: &Path, limits: &InputLimits) -> Result<LineBuffer, InputError> {
    let io_error = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(io_error)?;
    if metadata.len() > limits.max_bytes {
        return Err(InputError::TooLarge {
            path: path.to_path_buf(),
            max_bytes: limits.max_bytes,
            actual_bytes: metadata.len(),
        });
    }

    let bytes = fs::read(path).map_err(io_error)?;
    decode(path, &bytes, limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(buffer: &LineBuffer) -> Vec<&str> {
        buffer.lines.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_split_lf() {
        let buffer = split_lines("a\nb\nc\n");
        assert_eq!(lines(&buffer), vec!["a", "b", "c"]);
        assert!(buffer.trailing_newline);
        assert_eq!(buffer.line_ending, LineEnding::Lf);
    }

    #[test]
    fn test_split_without_trailing_newline() {
        let buffer = split_lines("a\nb");
        assert_eq!(lines(&buffer), vec!["a", "b"]);
        assert!(!buffer.trailing_newline);
    }

    #[test]
    fn test_split_crlf_and_cr() {
        let buffer = split_lines("a\r\nb\r\nc");
        assert_eq!(lines(&buffer), vec!["a", "b", "c"]);
        assert_eq!(buffer.line_ending, LineEnding::CrLf);

        let buffer = split_lines("a\rb\r");
        assert_eq!(lines(&buffer), vec!["a", "b"]);
        assert_eq!(buffer.line_ending, LineEnding::Cr);
    }

    #[test]
    fn test_split_mixed_endings_normalizes() {
        let buffer = split_lines("a\r\nb\nc\rd");
        assert_eq!(lines(&buffer), vec!["a", "b", "c", "d"]);
        assert_eq!(buffer.line_ending, LineEnding::Lf);
    }

    #[test]
    fn test_split_keeps_blank_lines() {
        let buffer = split_lines("a\n\n\nb\n");
        assert_eq!(lines(&buffer), vec!["a", "", "", "b"]);
    }

    #[test]
    fn test_split_empty() {
        let buffer = split_lines("");
        assert!(buffer.lines.is_empty());
        assert!(!buffer.trailing_newline);
    }

    #[test]
    fn test_join_round_trips_terminators() {
        let buffer = split_lines("x\r\ny\r\n");
        assert_eq!(buffer.join(&buffer.lines), "x\r\ny\r\n");
    }

    #[test]
    fn test_decode_rejects_binary() {
        let result = decode(Path::new("blob.bin"), b"PK\x03\x04\0\0data", &InputLimits::default());
        assert!(matches!(result, Err(InputError::Binary(_))));
    }

    #[test]
    fn test_decode_rejects_oversize() {
        let limits = InputLimits {
            max_bytes: 4,
            max_lines: 100,
        };
        let result = decode(Path::new("big.txt"), b"12345", &limits);
        assert!(matches!(
            result,
            Err(InputError::TooLarge {
                max_bytes: 4,
                actual_bytes: 5,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_rejects_too_many_lines() {
        let limits = InputLimits {
            max_bytes: 1024,
            max_lines: 2,
        };
        let result = decode(Path::new("long.txt"), b"a\nb\nc\n", &limits);
        assert!(matches!(result, Err(InputError::TooManyLines { actual_lines: 3, .. })));
    }

    #[test]
    fn test_decode_strips_bom() {
        let buffer = decode(
            Path::new("text.txt"),
            b"\xef\xbb\xbfhello\nworld\n",
            &InputLimits::default(),
        )
        .unwrap();
        assert_eq!(lines(&buffer), vec!["hello", "world"]);
        assert_eq!(buffer.encoding.name(), "UTF-8");
        assert!(buffer.encoding.has_bom());
    }

    #[test]
    fn test_decode_single_byte_encoding() {
        let buffer = decode(
            Path::new("latin.txt"),
            b"caf\xe9 cr\xe8me br\xfbl\xe9e\nla fa\xe7ade du ch\xe2teau\n",
            &InputLimits::default(),
        )
        .unwrap();
        assert_eq!(buffer.encoding.name(), "windows-1252");
        assert_eq!(buffer.lines[0], "caf\u{e9} cr\u{e8}me br\u{fb}l\u{e9}e");
    }

    #[test]
    fn test_encode_restores_original_bytes() {
        let bytes = b"caf\xe9\nna\xefve\n";
        let buffer = decode(Path::new("latin.txt"), bytes, &InputLimits::default()).unwrap();

        let text = buffer.join(&buffer.lines);
        assert_eq!(buffer.encoding.encode(&text).unwrap(), bytes);
    }

    #[test]
    fn test_encode_restores_bom() {
        let encoding = TextEncoding::new(UTF_8, true);
        assert_eq!(encoding.encode("x").unwrap(), b"\xef\xbb\xbfx");
    }

    #[test]
    fn test_encode_rejects_unmappable_text() {
        let encoding = TextEncoding::new(encoding_rs::WINDOWS_1252, false);
        assert!(encoding.encode("snow \u{2603}").is_none());
    }

    #[test]
    fn test_decode_rejects_malformed_text() {
        // Unpaired surrogate after a UTF-16LE byte order mark
        let result = decode(Path::new("wide.txt"), b"\xff\xfe\x3d\xd8", &InputLimits::default());
        assert!(matches!(
            result,
            Err(InputError::Encoding {
                encoding: "UTF-16LE",
                ..
            })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("/nonexistent/tandem/input.txt"), &InputLimits::default());
        let err = result.unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
        assert_eq!(err.path(), Path::new("/nonexistent/tandem/input.txt"));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "one\ntwo\n").unwrap();

        let buffer = load(&path, &InputLimits::default()).unwrap();
        assert_eq!(lines(&buffer), vec!["one", "two"]);
    }
}
