//! Update-set computation against the stored snapshot

use std::collections::BTreeMap;

/// The changed-only subset of `assignments`: names the snapshot does not
/// contain, or contains with a different value. Names whose resolved
/// value already matches the snapshot are excluded, so an unchanged
/// environment never triggers a write.
pub fn update_set(
    assignments: &BTreeMap<String, String>,
    snapshot: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    assignments
        .iter()
        .filter(|(name, value)| snapshot.get(*name) != Some(*value))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
