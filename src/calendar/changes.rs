//! Change notifications
//!
//! Attribute, child-list and view changes are queued here instead of
//! triggering a rebuild each. The calendar drains the queue once per
//! task turn, so a burst of mutations costs a single rebuild.

use serde::{Deserialize, Serialize};

/// What changed since the last flush
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Change {
    /// Child items were added, removed, or their date attributes changed
    Children,
    /// The displayed month (and therefore the visible range) changed
    View,
    /// Layout configuration changed
    Config,
    /// The selected date changed
    Selected,
    /// The enabled controls changed
    Controls,
}

/// Coalesced set of pending changes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub children: bool,
    pub view: bool,
    pub config: bool,
    pub selected: bool,
    pub controls: bool,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        *self == ChangeSet::default()
    }

    /// Events must be rebuilt from the raw items
    pub fn needs_event_rebuild(&self) -> bool {
        self.children
    }

    /// Placements must be recomputed
    pub fn needs_layout(&self) -> bool {
        self.children || self.view || self.config
    }
}

/// Queue of notifications received since the last flush
#[derive(Clone, Debug, Default)]
pub struct ChangeQueue {
    pending: ChangeSet,
    received: usize,
}

impl ChangeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a notification
    pub fn push(&mut self, change: Change) {
        self.received += 1;
        match change {
            Change::Children => self.pending.children = true,
            Change::View => self.pending.view = true,
            Change::Config => self.pending.config = true,
            Change::Selected => self.pending.selected = true,
            Change::Controls => self.pending.controls = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Notifications received since the last drain (before coalescing)
    pub fn received(&self) -> usize {
        self.received
    }

    /// Take the coalesced changes, leaving the queue empty
    pub fn drain(&mut self) -> ChangeSet {
        if self.received > 1 {
            log::debug!("Coalesced {} change notifications", self.received);
        }
        self.received = 0;
        std::mem::take(&mut self.pending)
    }
}
