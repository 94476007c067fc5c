//! Line-preserving dotenv documents
//!
//! An environment file is parsed into a sequence of typed lines so that
//! comments, blank lines, quoting, and ordering survive a merge-write.
//! Only the values of updated keys change; everything else round-trips
//! byte-for-byte.

use std::collections::{BTreeMap, BTreeSet};

/// One line of a dotenv file.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// Comment, blank, or unparseable line kept verbatim.
    Raw(String),
    /// A `KEY=value` assignment.
    Pair {
        key: String,
        value: String,
        quote: Option<char>,
        comment: Option<String>,
    },
}

/// A parsed dotenv file that preserves formatting across edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotenvDocument {
    lines: Vec<Line>,
}

impl DotenvDocument {
    /// Parse dotenv source. Never fails: lines that do not scan as
    /// assignments are kept verbatim.
    pub fn parse(source: &str) -> Self {
        let normalized = source.replace("\r\n", "\n").replace('\r', "\n");
        let mut lines: Vec<Line> = normalized
            .split('\n')
            .map(|line| match parse_pair(line) {
                Some(pair) => pair,
                None => Line::Raw(line.to_string()),
            })
            .collect();
        // The final newline of a well-formed file splits into one empty
        // tail line; drop it so appended keys land directly after the
        // last assignment. serialize() restores the trailing newline.
        if lines.last() == Some(&Line::Raw(String::new())) {
            lines.pop();
        }
        Self { lines }
    }

    /// Flat view of the assignments. Later duplicates win.
    pub fn values(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for line in &self.lines {
            if let Line::Pair { key, value, .. } = line {
                map.insert(key.clone(), value.clone());
            }
        }
        map
    }

    /// Look up one key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().rev().find_map(|line| match line {
            Line::Pair {
                key: k, value: v, ..
            } if k == key => Some(v.as_str()),
            _ => None,
        })
    }

    /// Merge updates over the document: existing assignment lines are
    /// updated in place (keeping their quoting and inline comments), new
    /// keys are appended at the end.
    pub fn merge(&mut self, updates: &BTreeMap<String, String>) {
        let mut seen: BTreeSet<String> = BTreeSet::new();
        for line in &mut self.lines {
            if let Line::Pair { key, value, .. } = line
                && let Some(new_value) = updates.get(key.as_str())
            {
                value.clone_from(new_value);
                seen.insert(key.clone());
            }
        }
        for (key, value) in updates {
            if !seen.contains(key.as_str()) {
                self.lines.push(Line::Pair {
                    key: key.clone(),
                    value: value.clone(),
                    quote: None,
                    comment: None,
                });
            }
        }
    }

    /// Set a single key.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut updates = BTreeMap::new();
        updates.insert(key.to_string(), value.to_string());
        self.merge(&updates);
    }

    /// Render the document back to dotenv text.
    pub fn serialize(&self) -> String {
        let rendered: Vec<String> = self
            .lines
            .iter()
            .map(|line| match line {
                Line::Raw(raw) => raw.clone(),
                Line::Pair {
                    key,
                    value,
                    quote,
                    comment,
                } => {
                    let quote = match quote {
                        Some(q) => Some(*q),
                        None if needs_quoting(value) => Some('"'),
                        None => None,
                    };
                    let rendered_value = match quote {
                        Some('"') => format!(
                            "\"{}\"",
                            value.replace('\n', "\\n").replace('\r', "\\r")
                        ),
                        Some(q) => format!("{q}{value}{q}"),
                        None => value.clone(),
                    };
                    match comment {
                        Some(comment) => format!("{key}={rendered_value} {comment}"),
                        None => format!("{key}={rendered_value}"),
                    }
                }
            })
            .collect();

        let joined = rendered.join("\n");
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("{trimmed}\n")
        }
    }
}

/// A value that would not survive an unquoted round-trip.
fn needs_quoting(value: &str) -> bool {
    value.contains('#') || value.contains('\n') || value.contains('\r')
}

fn parse_pair(line: &str) -> Option<Line> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let rest = match trimmed.strip_prefix("export ") {
        Some(after_export) => after_export.trim_start(),
        None => trimmed,
    };

    let key_end = rest
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
        .map(|(i, _)| i)?;
    if key_end == 0 {
        return None;
    }
    let key = rest[..key_end].to_string();

    // Separator: '=' with optional padding, or ':' followed by whitespace.
    let after_key = rest[key_end..].trim_start();
    let value_part = if let Some(after_eq) = after_key.strip_prefix('=') {
        after_eq.trim_start()
    } else if let Some(after_colon) = after_key.strip_prefix(':') {
        if !after_colon.starts_with([' ', '\t']) {
            return None;
        }
        after_colon.trim_start()
    } else {
        return None;
    };

    if value_part.is_empty() {
        return Some(Line::Pair {
            key,
            value: String::new(),
            quote: None,
            comment: None,
        });
    }

    for q in ['\'', '"', '`'] {
        if let Some(inner) = value_part.strip_prefix(q)
            && let Some(close) = find_unescaped(inner, q)
        {
            let raw_value = &inner[..close];
            let value = if q == '"' {
                raw_value.replace("\\n", "\n").replace("\\r", "\r")
            } else {
                raw_value.to_string()
            };
            let remainder = inner[close + 1..].trim();
            let comment = remainder.starts_with('#').then(|| remainder.to_string());
            return Some(Line::Pair {
                key,
                value,
                quote: Some(q),
                comment,
            });
        }
    }

    let (value, comment) = match value_part.find('#') {
        Some(hash) => (
            value_part[..hash].trim_end().to_string(),
            Some(value_part[hash..].to_string()),
        ),
        None => (value_part.trim_end().to_string(), None),
    };
    Some(Line::Pair {
        key,
        value,
        quote: None,
        comment,
    })
}

/// Byte offset of the first `quote` in `s` not preceded by a backslash.
fn find_unescaped(s: &str, quote: char) -> Option<usize> {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == quote as u8 && (i == 0 || bytes[i - 1] != b'\\') {
            return Some(i);
        }
    }
    None
}
