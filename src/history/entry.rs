//! History entries and the undo stack.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::action::Action;
use crate::zones::{Layout, Pile, PileId};

/// A reversible record of one mutating action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The action that was applied.
    pub action: Action,

    /// Piles touched by the action, as they were before it.
    /// Every action touches exactly two piles.
    pub before: SmallVec<[(PileId, Pile); 2]>,

    /// Whether the action recycled the waste (undo gives the recycle back).
    pub recycled: bool,

    /// Whether the action turned a tableau card face-up.
    pub revealed: bool,
}

impl HistoryEntry {
    /// Capture the current contents of `piles` before applying `action`.
    #[must_use]
    pub fn capture(action: Action, layout: &Layout, piles: [PileId; 2]) -> Self {
        Self {
            action,
            before: piles
                .into_iter()
                .map(|id| (id, layout.pile(id).clone()))
                .collect(),
            recycled: false,
            revealed: false,
        }
    }

    /// Put every captured pile back.
    pub fn restore(self, layout: &mut Layout) {
        for (id, pile) in self.before {
            *layout.pile_mut(id) = pile;
        }
    }
}

/// The undo stack, most recent entry last.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    /// Applied actions, oldest first.
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.entries.iter().map(|entry| entry.action)
    }
}
