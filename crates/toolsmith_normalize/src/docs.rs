//! Documentation extraction.
//!
//! The normalizer never parses documentation itself. It asks a
//! [`DocExtractor`] for a summary and a per-parameter description list, so
//! any comment syntax can be supported by adding an extractor.

use derive_getters::Getters;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::trace;

/// Summary text and parameter descriptions pulled from a documentation block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct DocSummary {
    /// Leading prose, before any section
    summary: String,
    /// Parameter name to description
    params: HashMap<String, String>,
}

impl DocSummary {
    /// Creates a summary.
    pub fn new(summary: impl Into<String>, params: HashMap<String, String>) -> Self {
        Self {
            summary: summary.into(),
            params,
        }
    }

    /// Description documented for `name`, if any.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Pulls a [`DocSummary`] out of a documentation block.
pub trait DocExtractor: Send + Sync {
    /// Extracts the summary and parameter descriptions from `doc`.
    fn extract(&self, doc: &str) -> DocSummary;
}

/// Built-in documentation styles.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DocStyle {
    /// `Args:` / `Attributes:` sections with `name: text` entries
    #[default]
    Google,
    /// `# Arguments` heading with `` * `name` - text `` bullets
    Rustdoc,
    /// Whole text is the summary
    Plain,
}

impl DocStyle {
    /// Extractor implementing this style.
    pub fn extractor(self) -> Box<dyn DocExtractor> {
        match self {
            Self::Google => Box::new(GoogleDocs),
            Self::Rustdoc => Box::new(RustDocs),
            Self::Plain => Box::new(PlainDocs),
        }
    }
}

/// Google-style docstrings.
///
/// # Examples
///
/// ```
/// use toolsmith_normalize::{DocExtractor, GoogleDocs};
///
/// let docs = GoogleDocs.extract(
///     "Multiply two integers together.\n\n    Args:\n        a: First integer\n        b (int): Second integer\n",
/// );
/// assert_eq!(docs.summary(), "Multiply two integers together.");
/// assert_eq!(docs.param("b"), Some("Second integer"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleDocs;

const PARAM_SECTIONS: &[&str] = &[
    "args",
    "arguments",
    "parameters",
    "params",
    "attributes",
    "fields",
    "keyword args",
    "keyword arguments",
    "kwargs",
];

const OTHER_SECTIONS: &[&str] = &[
    "returns",
    "return",
    "yields",
    "yield",
    "raises",
    "examples",
    "example",
    "note",
    "notes",
    "see also",
    "todo",
    "warning",
    "warnings",
    "references",
];

static GOOGLE_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*{0,2}([A-Za-z_][A-Za-z0-9_]*)\s*(?:\([^)]*\))?\s*:\s*(.*)$")
        .expect("valid google entry pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Summary,
    Params,
    Other,
}

fn section_for(trimmed: &str) -> Option<Section> {
    let title = trimmed.strip_suffix(':')?.trim().to_ascii_lowercase();
    if PARAM_SECTIONS.contains(&title.as_str()) {
        Some(Section::Params)
    } else if OTHER_SECTIONS.contains(&title.as_str()) {
        Some(Section::Other)
    } else {
        None
    }
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

impl DocExtractor for GoogleDocs {
    fn extract(&self, doc: &str) -> DocSummary {
        let mut section = Section::Summary;
        let mut summary_lines = Vec::new();
        let mut params = HashMap::new();
        let mut header_indent = 0;
        let mut entry_indent: Option<usize> = None;
        let mut current: Option<(String, String)> = None;

        for line in doc.lines() {
            let trimmed = line.trim();

            // Inside a parameter block, deeper lines are entries even when
            // a parameter shares its name with a section title.
            let may_open_section =
                section != Section::Params || indent_of(line) <= header_indent;
            if let Some(next) = section_for(trimmed).filter(|_| may_open_section) {
                flush(&mut current, &mut params);
                section = next;
                header_indent = indent_of(line);
                entry_indent = None;
                continue;
            }

            match section {
                Section::Summary => summary_lines.push(trimmed),
                Section::Other => {}
                Section::Params => {
                    if trimmed.is_empty() {
                        continue;
                    }
                    let indent = indent_of(line);
                    let starts_entry = entry_indent.is_none_or(|base| indent <= base);

                    if starts_entry {
                        flush(&mut current, &mut params);
                        if let Some(caps) = GOOGLE_ENTRY.captures(trimmed) {
                            entry_indent = Some(indent);
                            current = Some((caps[1].to_string(), caps[2].trim().to_string()));
                        }
                    } else if let Some((_, text)) = current.as_mut() {
                        append_continuation(text, trimmed);
                    }
                }
            }
        }
        flush(&mut current, &mut params);

        trace!(params = params.len(), "Extracted google-style docs");
        DocSummary::new(join_paragraphs(&summary_lines), params)
    }
}

/// Rustdoc-style comments.
///
/// Parameters are read from a `# Arguments` (or `# Parameters`, `# Fields`)
/// heading followed by `` * `name` - text `` bullets.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustDocs;

static RUSTDOC_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[*-]\s+`([^`]+)`\s*(?:[-:]\s*)?(.*)$").expect("valid rustdoc entry pattern")
});

impl DocExtractor for RustDocs {
    fn extract(&self, doc: &str) -> DocSummary {
        let mut section = Section::Summary;
        let mut summary_lines = Vec::new();
        let mut params = HashMap::new();
        let mut current: Option<(String, String)> = None;

        for line in doc.lines() {
            let trimmed = line.trim();

            if let Some(heading) = trimmed.strip_prefix('#') {
                flush(&mut current, &mut params);
                let heading = heading.trim_start_matches('#').trim().to_ascii_lowercase();
                section = match heading.as_str() {
                    "arguments" | "parameters" | "fields" => Section::Params,
                    _ => Section::Other,
                };
                continue;
            }

            match section {
                Section::Summary => summary_lines.push(trimmed),
                Section::Other => {}
                Section::Params => {
                    if trimmed.is_empty() {
                        flush(&mut current, &mut params);
                    } else if let Some(caps) = RUSTDOC_ENTRY.captures(trimmed) {
                        flush(&mut current, &mut params);
                        current = Some((caps[1].to_string(), caps[2].trim().to_string()));
                    } else if let Some((_, text)) = current.as_mut() {
                        append_continuation(text, trimmed);
                    }
                }
            }
        }
        flush(&mut current, &mut params);

        trace!(params = params.len(), "Extracted rustdoc-style docs");
        DocSummary::new(join_paragraphs(&summary_lines), params)
    }
}

/// Treats the whole text as the summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDocs;

impl DocExtractor for PlainDocs {
    fn extract(&self, doc: &str) -> DocSummary {
        let lines: Vec<&str> = doc.lines().map(str::trim).collect();
        DocSummary::new(join_paragraphs(&lines), HashMap::new())
    }
}

fn flush(current: &mut Option<(String, String)>, params: &mut HashMap<String, String>) {
    if let Some((name, text)) = current.take() {
        if !text.is_empty() {
            params.insert(name, text);
        }
    }
}

fn append_continuation(text: &mut String, line: &str) {
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(line);
}

/// Joins wrapped lines with spaces and separates paragraphs with a blank line.
fn join_paragraphs(lines: &[&str]) -> String {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in lines {
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            append_continuation(&mut current, line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs.join("\n\n")
}
