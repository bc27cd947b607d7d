//! A bidirectional many-to-many index.

use std::collections::{BTreeMap, BTreeSet};

/// Forward and reverse adjacency kept in lock-step.
///
/// Every mutation updates both directions, and empty sets are removed, so linking and
/// then unlinking a pair restores the table to an equal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTable<L, R> {
    forward: BTreeMap<L, BTreeSet<R>>,
    reverse: BTreeMap<R, BTreeSet<L>>,
}

impl<L, R> Default for LinkTable<L, R> {
    fn default() -> Self {
        Self {
            forward: BTreeMap::new(),
            reverse: BTreeMap::new(),
        }
    }
}

fn remove_from<K: Ord, V: Ord>(map: &mut BTreeMap<K, BTreeSet<V>>, key: &K, value: &V) -> bool {
    let Some(set) = map.get_mut(key) else {
        return false;
    };
    let removed = set.remove(value);
    if set.is_empty() {
        map.remove(key);
    }
    removed
}

impl<L: Ord + Copy, R: Ord + Copy> LinkTable<L, R> {
    /// Returns `true` when the pair was not linked before.
    pub fn link(&mut self, left: L, right: R) -> bool {
        let added = self.forward.entry(left).or_default().insert(right);
        self.reverse.entry(right).or_default().insert(left);
        added
    }

    /// Returns `true` when the pair was linked.
    pub fn unlink(&mut self, left: L, right: R) -> bool {
        let removed = remove_from(&mut self.forward, &left, &right);
        remove_from(&mut self.reverse, &right, &left);
        removed
    }

    /// Removes every link of `left` and returns the rights it was linked to.
    pub fn detach_left(&mut self, left: L) -> BTreeSet<R> {
        let rights = self.forward.remove(&left).unwrap_or_default();
        for right in &rights {
            remove_from(&mut self.reverse, right, &left);
        }
        rights
    }

    /// Removes every link of `right` and returns the lefts it was linked to.
    pub fn detach_right(&mut self, right: R) -> BTreeSet<L> {
        let lefts = self.reverse.remove(&right).unwrap_or_default();
        for left in &lefts {
            remove_from(&mut self.forward, left, &right);
        }
        lefts
    }

    pub fn rights(&self, left: L) -> BTreeSet<R> {
        self.forward.get(&left).cloned().unwrap_or_default()
    }

    pub fn lefts(&self, right: R) -> BTreeSet<L> {
        self.reverse.get(&right).cloned().unwrap_or_default()
    }

    pub fn right_count(&self, left: L) -> usize {
        self.forward.get(&left).map_or(0, BTreeSet::len)
    }

    pub fn left_count(&self, right: R) -> usize {
        self.reverse.get(&right).map_or(0, BTreeSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
