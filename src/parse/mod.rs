//! @acp:module "Parser"
//! @acp:summary "Documentation annotation extraction from line comments"
//! @acp:domain docs
//! @acp:layer service
//!
//! Extracts `@title`, `@description`, `@chapter`, `@example` and `@pitfall`
//! tags from `//` and `///` comments. Any other line is ignored, so parsing
//! never fails on content.
//!
//! The scan is a fold over annotated lines. Each tag carries its own
//! [`Accumulation`] policy: single-valued tags replace (last wins within a
//! file), multi-valued tags append in order of appearance.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ScaffoldError};

/// Line-comment marker recognized by the parser
pub const COMMENT_MARKER: &str = "//";

/// Byte-order mark some editors write at the start of a file
const BOM: char = '\u{FEFF}';

/// Matches a tag at the start of comment text.
/// Groups: 1=tag name, 2=remainder
/// Alternatives follow [`Tag::ALL`]; none is a prefix of another.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let names: Vec<&str> = Tag::ALL
        .iter()
        .map(|tag| tag.token().trim_start_matches('@'))
        .collect();
    Regex::new(&format!(r"^@({})(.*)$", names.join("|"))).unwrap()
});

/// How repeated occurrences of a tag combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accumulation {
    /// Later occurrence overwrites the earlier one
    Replace,
    /// Every occurrence is kept, in order
    Append,
}

/// @acp:summary "Recognized documentation tags"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Title,
    Description,
    Chapter,
    Example,
    Pitfall,
}

impl Tag {
    /// All tags in matching order
    pub const ALL: [Tag; 5] = [
        Tag::Title,
        Tag::Description,
        Tag::Chapter,
        Tag::Example,
        Tag::Pitfall,
    ];

    /// Literal token as written in source, including `@`
    pub fn token(&self) -> &'static str {
        match self {
            Tag::Title => "@title",
            Tag::Description => "@description",
            Tag::Chapter => "@chapter",
            Tag::Example => "@example",
            Tag::Pitfall => "@pitfall",
        }
    }

    pub fn policy(&self) -> Accumulation {
        match self {
            Tag::Title | Tag::Chapter | Tag::Example => Accumulation::Replace,
            Tag::Description | Tag::Pitfall => Accumulation::Append,
        }
    }
}

impl std::str::FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "title" => Ok(Tag::Title),
            "description" => Ok(Tag::Description),
            "chapter" => Ok(Tag::Chapter),
            "example" => Ok(Tag::Example),
            "pitfall" => Ok(Tag::Pitfall),
            _ => Err(format!("Unknown annotation tag: {}", s)),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// @acp:summary "One tagged comment line"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub tag: Tag,
    /// Text after the tag, trimmed
    pub text: String,
    /// 1-indexed source line
    pub line: usize,
}

/// @acp:summary "Per-file extraction result"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationRecord {
    pub title: Option<String>,
    pub description: Vec<String>,
    pub chapter: Option<String>,
    /// Extracted for completeness; the README does not render it
    pub example: Option<String>,
    pub pitfalls: Vec<String>,
}

impl AnnotationRecord {
    /// Fold one annotation into the record according to its tag's policy
    pub fn with(mut self, annotation: Annotation) -> Self {
        let Annotation { tag, text, .. } = annotation;
        match tag.policy() {
            Accumulation::Replace => {
                if let Some(value) = self.single_mut(tag) {
                    *value = Some(text);
                }
            }
            Accumulation::Append => {
                if let Some(values) = self.multi_mut(tag) {
                    values.push(text);
                }
            }
        }
        self
    }

    fn single_mut(&mut self, tag: Tag) -> Option<&mut Option<String>> {
        match tag {
            Tag::Title => Some(&mut self.title),
            Tag::Chapter => Some(&mut self.chapter),
            Tag::Example => Some(&mut self.example),
            Tag::Description | Tag::Pitfall => None,
        }
    }

    fn multi_mut(&mut self, tag: Tag) -> Option<&mut Vec<String>> {
        match tag {
            Tag::Description => Some(&mut self.description),
            Tag::Pitfall => Some(&mut self.pitfalls),
            Tag::Title | Tag::Chapter | Tag::Example => None,
        }
    }

    /// True when no tag was recognized
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_empty()
            && self.chapter.is_none()
            && self.example.is_none()
            && self.pitfalls.is_empty()
    }
}

/// @acp:summary "Parser for documentation annotations"
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    /// @acp:summary "Read a file and extract its annotation record"
    /// Invalid UTF-8 is replaced rather than rejected; only I/O failures error.
    pub async fn parse<P: AsRef<Path>>(&self, path: P) -> Result<AnnotationRecord> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ScaffoldError::io("read", path, e))?;
        let content = String::from_utf8_lossy(&bytes);

        let annotations = self.parse_annotations(&content);
        for annotation in &annotations {
            tracing::trace!(
                file = %path.display(),
                line = annotation.line,
                tag = %annotation.tag,
                "Found annotation"
            );
        }

        let record = annotations
            .into_iter()
            .fold(AnnotationRecord::default(), AnnotationRecord::with);
        tracing::debug!(
            file = %path.display(),
            title = record.title.as_deref().unwrap_or(""),
            descriptions = record.description.len(),
            pitfalls = record.pitfalls.len(),
            "Parsed annotations"
        );
        Ok(record)
    }

    /// @acp:summary "Extract the annotation record from file content"
    pub fn parse_content(&self, content: &str) -> AnnotationRecord {
        self.parse_annotations(content)
            .into_iter()
            .fold(AnnotationRecord::default(), AnnotationRecord::with)
    }

    /// @acp:summary "List every tagged comment line in source order"
    /// A leading byte-order mark is ignored.
    pub fn parse_annotations(&self, content: &str) -> Vec<Annotation> {
        content
            .strip_prefix(BOM)
            .unwrap_or(content)
            .split('\n')
            .enumerate()
            .filter_map(|(i, line)| {
                parse_line(line).map(|(tag, text)| Annotation {
                    tag,
                    text,
                    line: i + 1,
                })
            })
            .collect()
    }
}

/// Recognize a single line. Returns `None` for anything that is not a
/// `//` or `///` comment starting with a known tag.
pub fn parse_line(line: &str) -> Option<(Tag, String)> {
    let comment = line.trim().strip_prefix(COMMENT_MARKER)?.trim();
    let comment = match comment.strip_prefix('/') {
        Some(rest) => rest.trim(),
        None => comment,
    };

    let cap = TAG_PATTERN.captures(comment)?;
    let tag = cap.get(1)?.as_str().parse::<Tag>().ok()?;
    let text = cap.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
    Some((tag, text.to_string()))
}
