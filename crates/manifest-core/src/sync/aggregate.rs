//! Cross-leaf candidate aggregation

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use manifest_doc::FieldPath;

/// Folds every leaf's candidate assignments into one global mapping.
///
/// The first observed value of a name sticks; a later disagreeing
/// observation marks the name conflicted, and conflicted names are
/// dropped from the output entirely. A genuine conflict means the engine
/// cannot know which deployed value is authoritative, so it stays silent.
#[derive(Debug, Default)]
pub struct Aggregator {
    entries: BTreeMap<String, Observation>,
}

#[derive(Debug)]
struct Observation {
    value: String,
    conflicted: bool,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record all candidates extracted from one leaf.
    pub fn observe_leaf(&mut self, path: &FieldPath, candidates: Vec<(String, String)>) {
        for (name, value) in candidates {
            self.observe(path, name, value);
        }
    }

    fn observe(&mut self, path: &FieldPath, name: String, value: String) {
        match self.entries.entry(name) {
            Entry::Vacant(vacant) => {
                vacant.insert(Observation {
                    value,
                    conflicted: false,
                });
            }
            Entry::Occupied(mut occupied) => {
                if !occupied.get().conflicted && occupied.get().value != value {
                    tracing::debug!(
                        name = %occupied.key(),
                        field = %path,
                        "conflicting values observed, dropping placeholder"
                    );
                    occupied.get_mut().conflicted = true;
                }
            }
        }
    }

    /// The conflict-free assignments observed across the whole walk.
    pub fn into_assignments(self) -> BTreeMap<String, String> {
        self.entries
            .into_iter()
            .filter(|(_, observation)| !observation.conflicted)
            .map(|(name, observation)| (name, observation.value))
            .collect()
    }
}
