//! Placeholder grammar for template leaf strings
//!
//! A template leaf is a run of literal text and `${{NAME}}` tokens. Names
//! start with a letter or underscore and continue with letters, digits, or
//! underscores; optional spaces are allowed inside the braces. Anything
//! that does not scan as a well-formed token (unterminated braces, empty
//! or ill-formed names) is literal text, never an error.

use std::collections::BTreeMap;

use crate::tree::Node;

/// One segment of a parsed template leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A run of literal characters.
    Literal(String),
    /// A `${{NAME}}` token, holding the placeholder name.
    Placeholder(String),
}

/// A template leaf string decomposed into literal and placeholder segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateString {
    segments: Vec<Segment>,
}

impl TemplateString {
    /// Decompose a raw leaf string. Infallible: malformed tokens are kept
    /// as literal text.
    pub fn parse(raw: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = raw;

        loop {
            match rest.find("${{") {
                None => {
                    literal.push_str(rest);
                    break;
                }
                Some(at) => match scan_token(&rest[at..]) {
                    Some((name, token_len)) => {
                        literal.push_str(&rest[..at]);
                        if !literal.is_empty() {
                            segments.push(Segment::Literal(std::mem::take(&mut literal)));
                        }
                        segments.push(Segment::Placeholder(name));
                        rest = &rest[at + token_len..];
                    }
                    None => {
                        // Opens like a token but never closes properly.
                        // Consume the '$' as literal and rescan from the
                        // next character.
                        literal.push_str(&rest[..at + 1]);
                        rest = &rest[at + 1..];
                    }
                },
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// The parsed segments, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the leaf contains no placeholder tokens.
    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| matches!(segment, Segment::Literal(_)))
    }

    /// The concatenated literal text. Only meaningful for literal leaves.
    pub fn literal_text(&self) -> String {
        let mut text = String::new();
        for segment in &self.segments {
            if let Segment::Literal(literal) = segment {
                text.push_str(literal);
            }
        }
        text
    }

    /// Distinct placeholder names, in first-occurrence order.
    pub fn placeholder_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment
                && !names.contains(&name.as_str())
            {
                names.push(name);
            }
        }
        names
    }

    /// Substitute placeholder values into the leaf.
    ///
    /// Names missing from `values` are re-emitted verbatim as `${{NAME}}`
    /// so that an unresolved template stays a template.
    pub fn render(&self, values: &BTreeMap<String, String>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => out.push_str(literal),
                Segment::Placeholder(name) => match values.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("${{");
                        out.push_str(name);
                        out.push_str("}}");
                    }
                },
            }
        }
        out
    }
}

/// Scan one token at the start of `s` (which begins with `${{`).
///
/// Returns the placeholder name and the total token length in bytes, or
/// `None` if the text does not form a well-formed token.
fn scan_token(s: &str) -> Option<(String, usize)> {
    let body = s.strip_prefix("${{")?;
    let bytes = body.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t') {
        pos += 1;
    }

    let name_start = pos;
    while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_') {
        pos += 1;
    }
    if pos == name_start {
        return None;
    }
    if !(bytes[name_start].is_ascii_alphabetic() || bytes[name_start] == b'_') {
        return None;
    }
    let name = body[name_start..pos].to_string();

    while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t') {
        pos += 1;
    }

    if body[pos..].starts_with("}}") {
        Some((name, 3 + pos + 2))
    } else {
        None
    }
}

/// Render a whole tree against a value map.
///
/// Returns the rendered tree and the sorted, deduplicated names of
/// placeholders that had no value and were left verbatim.
pub fn render_node(node: &Node, values: &BTreeMap<String, String>) -> (Node, Vec<String>) {
    let mut unresolved = Vec::new();
    let rendered = render_inner(node, values, &mut unresolved);
    unresolved.sort();
    unresolved.dedup();
    (rendered, unresolved)
}

fn render_inner(
    node: &Node,
    values: &BTreeMap<String, String>,
    unresolved: &mut Vec<String>,
) -> Node {
    match node {
        Node::Leaf(raw) => {
            let template = TemplateString::parse(raw);
            for name in template.placeholder_names() {
                if !values.contains_key(name) {
                    unresolved.push(name.to_string());
                }
            }
            Node::Leaf(template.render(values))
        }
        Node::Object(fields) => Node::Object(
            fields
                .iter()
                .map(|(key, child)| (key.clone(), render_inner(child, values, unresolved)))
                .collect(),
        ),
        Node::List(items) => Node::List(
            items
                .iter()
                .map(|item| render_inner(item, values, unresolved))
                .collect(),
        ),
        Node::Scalar(value) => Node::Scalar(value.clone()),
    }
}
