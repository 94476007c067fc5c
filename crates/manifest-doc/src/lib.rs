//! Manifest document model, placeholder grammar, and field matching
//!
//! Provides the shared document tree for manifest templates and deployed
//! manifests, the `${{NAME}}` placeholder grammar, and the leaf matcher
//! that recovers placeholder values from deployed text.

pub mod error;
pub mod matcher;
pub mod template;
pub mod tree;

pub use error::{Error, Result};
pub use matcher::{MatchOutcome, match_leaf};
pub use template::{Segment, TemplateString, render_node};
pub use tree::{FieldPath, Node, PathSegment};
