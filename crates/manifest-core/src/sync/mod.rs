//! The reconciliation pipeline
//!
//! - **walker**: pair up template and deployed trees, match leaves
//! - **aggregate**: fold leaf candidates into one conflict-free mapping
//! - **reconcile**: diff the mapping against the stored snapshot
//! - **engine**: drive one sync run across the collaborator seams

mod aggregate;
mod engine;
mod reconcile;
mod walker;

pub use aggregate::Aggregator;
pub use engine::{SyncEngine, SyncOptions, SyncOutcome};
pub use reconcile::update_set;
pub use walker::walk;
