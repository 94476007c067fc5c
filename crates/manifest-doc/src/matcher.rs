//! Leaf matching between a template string and deployed text
//!
//! The matcher compiles a template leaf into an anchored regular
//! expression: literal segments are escaped and matched verbatim,
//! placeholder segments become greedy capture groups. The whole deployed
//! string must be consumed; there are no partial matches.

use regex::Regex;

use crate::template::{Segment, TemplateString};

/// Result of matching one template leaf against one deployed leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The deployed text already equals the (literal) template text.
    Equal,
    /// The deployed text cannot be explained by this template leaf.
    /// Never an error; the field is simply outside this engine's authority.
    Unresolvable,
    /// Placeholder values recovered from the deployed text, one entry per
    /// distinct placeholder name, in first-occurrence order.
    Resolved(Vec<(String, String)>),
}

/// Match a deployed leaf string against a parsed template leaf.
pub fn match_leaf(template: &TemplateString, deployed: &str) -> MatchOutcome {
    if template.is_literal() {
        return if template.literal_text() == deployed {
            MatchOutcome::Equal
        } else {
            MatchOutcome::Unresolvable
        };
    }

    let pattern = compile_pattern(template);
    let Ok(regex) = Regex::new(&pattern) else {
        // Escaped literals always compile; a failure here means the
        // pattern blew the regex size limit. Treat the leaf as out of
        // reach rather than failing the sync.
        tracing::debug!(pattern_len = pattern.len(), "leaf pattern failed to compile");
        return MatchOutcome::Unresolvable;
    };

    let Some(captures) = regex.captures(deployed) else {
        return MatchOutcome::Unresolvable;
    };

    let mut candidates: Vec<(String, String)> = Vec::new();
    let mut group = 0;
    for segment in template.segments() {
        let Segment::Placeholder(name) = segment else {
            continue;
        };
        group += 1;
        let Some(capture) = captures.get(group) else {
            return MatchOutcome::Unresolvable;
        };
        let value = capture.as_str();
        match candidates.iter().find(|(existing, _)| existing == name) {
            // A placeholder repeated within one leaf must capture the
            // same text everywhere, or the leaf tells us nothing.
            Some((_, existing_value)) if existing_value != value => {
                return MatchOutcome::Unresolvable;
            }
            Some(_) => {}
            None => candidates.push((name.clone(), value.to_string())),
        }
    }

    MatchOutcome::Resolved(candidates)
}

/// Build the anchored pattern for a parameterized leaf.
///
/// `(?s)` lets `.` cross newlines, since deployed leaf text (descriptions,
/// notes) may be multi-line.
fn compile_pattern(template: &TemplateString) -> String {
    let mut pattern = String::from("(?s)^");
    for segment in template.segments() {
        match segment {
            Segment::Literal(literal) => pattern.push_str(&regex::escape(literal)),
            Segment::Placeholder(_) => pattern.push_str("(.*)"),
        }
    }
    pattern.push('$');
    pattern
}
