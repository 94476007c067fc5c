//! Sync engine and reconciliation pipeline for Manifest Manager
//!
//! This crate coordinates the reconciliation of a deployed manifest
//! against its template:
//!
//! - **Tree walker**: pairs the template and deployed trees field by field
//! - **Aggregator**: collects placeholder candidates, dropping conflicts
//! - **Reconciler**: computes the changed-only update set
//! - **SyncEngine**: drives one sync run end to end
//!
//! # Architecture
//!
//! `manifest-core` sits above the leaf crates and below the CLI:
//!
//! ```text
//!          CLI
//!           |
//!     manifest-core
//!       |        |
//! manifest-doc manifest-env
//! ```
//!
//! The engine talks to its surroundings through three narrow seams
//! ([`DeployedSource`], [`TemplateSource`], [`EnvironmentStore`]); the
//! reconciliation itself is pure computation over in-memory trees.

pub mod error;
pub mod layout;
pub mod source;
pub mod sync;

pub use error::{Error, Result};
pub use layout::ProjectLayout;
pub use source::{
    DeployedSource, DotenvEnvironment, EnvironmentStore, FileDeployedSource, FileTemplateSource,
    TemplateSource,
};
pub use sync::{Aggregator, SyncEngine, SyncOptions, SyncOutcome, update_set, walk};
