use std::sync::LazyLock;

use regex::{Captures, Regex};
use thiserror::Error;

use crate::{Count, InstanceCounts, MathCounts, WordCounts};

static ERROR_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(errors:[0-9]+\)").expect("error annotation regex"));

// Anchored at the start of the line; anything after the closing paren is ignored.
static DATA_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<words_body>[0-9]+)\+(?P<words_headers>[0-9]+)\+(?P<words_captions>[0-9]+) \((?P<instances_headers>[0-9]+)/(?P<instances_floats>[0-9]+)/(?P<math_inline>[0-9]+)/(?P<math_displayed>[0-9]+)\)",
    )
    .expect("data line regex")
});

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("texcount produced no output")]
    Empty,
    #[error("not valid texcount output: {line:?}")]
    Malformed { line: String },
    #[error("field {field} out of range in texcount output: {line:?}")]
    OutOfRange { field: &'static str, line: String },
}

impl ParseError {
    /// The data line that failed to parse (empty when there was none).
    pub fn line(&self) -> &str {
        match self {
            ParseError::Empty => "",
            ParseError::Malformed { line } | ParseError::OutOfRange { line, .. } => line,
        }
    }
}

/// Parse the captured stdout of `texcount -brief` into a [`Count`].
///
/// Diagnostic lines may precede the data; the last non-empty line is used.
/// The first `(errors:N)` annotation is removed before lines are split.
pub fn parse(raw: &str) -> Result<Count, ParseError> {
    let cleaned = ERROR_ANNOTATION.replace(raw, "");
    let line = cleaned
        .lines()
        .map(trim_line)
        .filter(|line| !line.is_empty())
        .last()
        .ok_or(ParseError::Empty)?;

    let caps = DATA_LINE
        .captures(line)
        .ok_or_else(|| ParseError::Malformed {
            line: line.to_string(),
        })?;

    let field = |name: &'static str| capture_u64(&caps, name, line);
    Ok(Count {
        words: WordCounts {
            body: field("words_body")?,
            headers: field("words_headers")?,
            captions: field("words_captions")?,
        },
        instances: InstanceCounts {
            headers: field("instances_headers")?,
            floats: field("instances_floats")?,
            math: MathCounts {
                inline: field("math_inline")?,
                displayed: field("math_displayed")?,
            },
        },
    })
}

// Byte order marks are trimmed like whitespace.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn capture_u64(caps: &Captures<'_>, name: &'static str, line: &str) -> Result<u64, ParseError> {
    caps.name(name)
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .ok_or_else(|| ParseError::OutOfRange {
            field: name,
            line: line.to_string(),
        })
}
