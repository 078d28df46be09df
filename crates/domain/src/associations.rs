//! Hero ↔ superpower association reconciliation.
//!
//! Moving a hero from its current set of links to a requested target list
//! is a set difference in both directions:
//!
//! - `removed = current − target`
//! - `added = target − current`
//!
//! Links present on both sides are never touched, so any data attached to
//! them survives the update. Duplicates in the target collapse to their
//! first occurrence.

use std::collections::HashSet;

use crate::SuperPowerId;

/// Minimal set of link changes needed to reach a target association set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationDelta {
    /// Superpowers to link, in target order.
    pub added: Vec<SuperPowerId>,
    /// Superpowers to unlink, in current order.
    pub removed: Vec<SuperPowerId>,
}

impl AssociationDelta {
    /// True when the current set already equals the target set.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Collapses duplicate ids, keeping the first occurrence of each.
pub fn distinct_ids(ids: &[SuperPowerId]) -> Vec<SuperPowerId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Computes the add/remove delta that moves `current` to `target`.
pub fn reconcile(current: &[SuperPowerId], target: &[SuperPowerId]) -> AssociationDelta {
    let target = distinct_ids(target);
    let target_set: HashSet<SuperPowerId> = target.iter().copied().collect();
    let current_set: HashSet<SuperPowerId> = current.iter().copied().collect();

    let removed = distinct_ids(current)
        .into_iter()
        .filter(|id| !target_set.contains(id))
        .collect();
    let added = target
        .into_iter()
        .filter(|id| !current_set.contains(id))
        .collect();

    AssociationDelta { added, removed }
}
