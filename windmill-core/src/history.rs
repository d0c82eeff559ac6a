//! Cross-round pairing history for anchor slots

use serde::{Deserialize, Serialize};

use crate::assignment::RoundAssignment;
use crate::layout::SlotLayout;

/// Per-anchor count of earlier rounds spent at a table with a rotating slot.
///
/// Lives for one scenario. Counts only ever grow; a new scenario starts from
/// a fresh tracker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingHistory {
    layout: SlotLayout,
    counts: Vec<u32>,
}

impl PairingHistory {
    /// All-zero history for a scenario
    pub fn new(layout: SlotLayout) -> Self {
        Self {
            counts: vec![0; layout.anchors().len()],
            layout,
        }
    }

    pub fn layout(&self) -> &SlotLayout {
        &self.layout
    }

    /// Prior rotating pairings of an anchor slot (0 for rotating slots)
    pub fn count(&self, slot: usize) -> u32 {
        self.counts.get(slot).copied().unwrap_or(0)
    }

    /// Counts for all anchor slots, by slot index
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Fold a finalized round into the history.
    ///
    /// An anchor sharing a table with several rotating slots gains one per
    /// rotating slot.
    pub fn record(&mut self, assignment: &RoundAssignment) {
        for anchor in self.layout.anchors() {
            let table = assignment.table_of(anchor);
            let matches = self
                .layout
                .rotating()
                .filter(|&r| assignment.table_of(r) == table)
                .count() as u32;
            self.counts[anchor] += matches;
        }
    }
}
