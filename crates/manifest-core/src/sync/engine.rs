//! SyncEngine implementation
//!
//! One sync run is a linear pipeline: fetch the deployed manifest, load
//! the template, read the environment snapshot, walk and aggregate, then
//! persist the update set. Any collaborator failure aborts the run with
//! the originating error; the walk and aggregation themselves cannot
//! fail, they only ever drop unreconcilable fields.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::Result;
use crate::source::{DeployedSource, EnvironmentStore, TemplateSource};
use crate::sync::{Aggregator, update_set, walk};

/// Options for a sync run
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// If true, compute the update set but do not write it.
    pub dry_run: bool,
}

/// Result of a completed sync run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncOutcome {
    /// The update set that was persisted (or, under `dry_run`, would
    /// have been). Empty when the environment already matches.
    pub updated: BTreeMap<String, String>,
}

impl SyncOutcome {
    /// True when the run changed nothing.
    pub fn is_noop(&self) -> bool {
        self.updated.is_empty()
    }
}

/// Drives one manifest reconciliation across the collaborator seams.
pub struct SyncEngine<'a> {
    deployed: &'a dyn DeployedSource,
    template: &'a dyn TemplateSource,
    environment: &'a dyn EnvironmentStore,
}

impl<'a> SyncEngine<'a> {
    /// Create an engine over the three collaborators.
    pub fn new(
        deployed: &'a dyn DeployedSource,
        template: &'a dyn TemplateSource,
        environment: &'a dyn EnvironmentStore,
    ) -> Self {
        Self {
            deployed,
            template,
            environment,
        }
    }

    /// Run one reconciliation.
    ///
    /// Succeeds whether or not anything changed; the outcome carries the
    /// update set actually written. Hard failures (fetch, load, read,
    /// write) propagate unchanged.
    pub fn sync(&self, options: &SyncOptions) -> Result<SyncOutcome> {
        let deployed = self.deployed.fetch_deployed()?;
        let template = self.template.load_template()?;
        let snapshot = self.environment.read_snapshot()?;

        let mut aggregator = Aggregator::new();
        walk(&template, &deployed, &mut aggregator);
        let assignments = aggregator.into_assignments();
        tracing::debug!(resolved = assignments.len(), "aggregation complete");

        let updates = update_set(&assignments, &snapshot);
        if updates.is_empty() {
            tracing::debug!("environment already matches deployed manifest");
            return Ok(SyncOutcome { updated: updates });
        }

        if options.dry_run {
            tracing::debug!(keys = updates.len(), "dry run, skipping write");
        } else {
            self.environment.write_snapshot(&updates)?;
        }

        Ok(SyncOutcome { updated: updates })
    }
}
