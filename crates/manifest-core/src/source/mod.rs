//! Collaborator seams for the sync engine
//!
//! The engine never performs I/O itself; it consumes a deployed manifest,
//! a template manifest, and an environment snapshot through these traits.
//! File-backed implementations live in this module; a network-backed
//! deployed source can slot in behind the same seam.

mod file;

pub use file::{DotenvEnvironment, FileDeployedSource, FileTemplateSource};

use std::collections::BTreeMap;

use manifest_doc::Node;

use crate::Result;

/// Provides the manifest as currently deployed in the target system.
pub trait DeployedSource {
    /// Retrieve the deployed manifest tree. Leaves are concrete strings;
    /// any placeholders that ever existed are already substituted.
    fn fetch_deployed(&self) -> Result<Node>;
}

/// Provides the manifest template with its placeholder tokens intact.
pub trait TemplateSource {
    /// Load the template manifest tree, preserving `${{NAME}}` tokens
    /// verbatim in leaf strings.
    fn load_template(&self) -> Result<Node>;
}

/// Read/merge-write access to one named environment's snapshot.
pub trait EnvironmentStore {
    /// Read the current snapshot.
    fn read_snapshot(&self) -> Result<BTreeMap<String, String>>;

    /// Merge the given updates over the persisted snapshot and write it
    /// back atomically. Keys not named in `updates` must survive.
    fn write_snapshot(&self, updates: &BTreeMap<String, String>) -> Result<()>;
}
