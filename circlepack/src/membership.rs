//! Membership tracking across layout passes.
//!
//! Each pass diffs the host's current collection against the snapshot taken
//! at the end of the previous pass. Items still finishing their exit
//! animation ("reintroduced") are excluded from both sides of the diff, so
//! toggling one of them never re-classifies it.

use indexmap::IndexSet;

use crate::host::ItemHandle;

/// Where an item stands relative to the current pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipState {
    /// Entered since the last pass.
    Added,
    /// Present and already laid out.
    Stable,
    /// Left since the last pass.
    Removed,
    /// Logically removed, kept present until its exit animation completes.
    Reintroduced,
}

/// Added and removed items taken from the tracker at the end of a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipChanges<I> {
    pub added: Vec<I>,
    pub removed: Vec<I>,
}

#[derive(Debug, Clone)]
pub struct MembershipTracker<I: ItemHandle> {
    /// Host collection as of the end of the last pass.
    snapshot: IndexSet<I>,
    recently_added: IndexSet<I>,
    recently_removed: IndexSet<I>,
    reintroduced: IndexSet<I>,
}

impl<I: ItemHandle> MembershipTracker<I> {
    pub fn new() -> Self {
        Self {
            snapshot: IndexSet::new(),
            recently_added: IndexSet::new(),
            recently_removed: IndexSet::new(),
            reintroduced: IndexSet::new(),
        }
    }

    /// Diff `current` against the snapshot and accumulate the delta.
    pub fn observe(&mut self, current: &[I]) {
        let current: IndexSet<I> = current.iter().copied().collect();

        for &item in current.difference(&self.snapshot) {
            self.recently_removed.shift_remove(&item);
            self.recently_added.insert(item);
        }
        for &item in self.snapshot.difference(&current) {
            if !self.recently_added.shift_remove(&item) {
                self.recently_removed.insert(item);
            }
        }

        let reintroduced = &self.reintroduced;
        self.recently_added.retain(|item| !reintroduced.contains(item));
        self.recently_removed.retain(|item| !reintroduced.contains(item));

        self.snapshot = current;
    }

    /// Whether a structural change awaits a layout pass.
    pub fn has_pending(&self) -> bool {
        !self.recently_added.is_empty() || !self.recently_removed.is_empty()
    }

    pub fn is_recently_added(&self, item: I) -> bool {
        self.recently_added.contains(&item)
    }

    pub fn is_reintroduced(&self, item: I) -> bool {
        self.reintroduced.contains(&item)
    }

    pub fn state(&self, item: I) -> Option<MembershipState> {
        if self.reintroduced.contains(&item) {
            Some(MembershipState::Reintroduced)
        } else if self.recently_added.contains(&item) {
            Some(MembershipState::Added)
        } else if self.recently_removed.contains(&item) {
            Some(MembershipState::Removed)
        } else if self.snapshot.contains(&item) {
            Some(MembershipState::Stable)
        } else {
            None
        }
    }

    /// Take and clear the accumulated delta.
    pub fn take_changes(&mut self) -> MembershipChanges<I> {
        MembershipChanges {
            added: self.recently_added.drain(..).collect(),
            removed: self.recently_removed.drain(..).collect(),
        }
    }

    /// Keep `items` present until their exit animation completes. The host
    /// is expected to hold them again, so they join the snapshot.
    pub fn reintroduce(&mut self, items: &[I]) {
        for &item in items {
            self.snapshot.insert(item);
            self.reintroduced.insert(item);
        }
    }

    /// Release every reintroduced item for detachment.
    pub fn drain_reintroduced(&mut self) -> Vec<I> {
        let items: Vec<I> = self.reintroduced.drain(..).collect();
        for item in &items {
            self.snapshot.shift_remove(item);
        }
        items
    }

    pub fn reintroduced(&self) -> impl Iterator<Item = I> + '_ {
        self.reintroduced.iter().copied()
    }
}

impl<I: ItemHandle> Default for MembershipTracker<I> {
    fn default() -> Self {
        Self::new()
    }
}
