//! RFI-to-drawing-set linkage index.
//!
//! Resolving linked RFIs per set with a scan is O(sets x rfis); the index
//! is built once per enrichment pass and turns each lookup into O(1)
//! average, O(sets + rfis) overall.

use std::collections::HashMap;

use planforge_models::{DrawingSetId, Rfi};

/// Index from drawing set id to the open RFIs that reference it.
///
/// Closed-family RFIs (answered, closed) are excluded at build time, so
/// every RFI the index hands back counts against its set.
#[derive(Debug, Clone, Default)]
pub struct RfiIndex {
    by_set: HashMap<DrawingSetId, Vec<Rfi>>,
    open_count: usize,
}

impl RfiIndex {
    /// Builds the index from an RFI snapshot.
    pub fn build(rfis: &[Rfi]) -> Self {
        let mut by_set: HashMap<DrawingSetId, Vec<Rfi>> = HashMap::new();
        let mut open_count = 0;

        for rfi in rfis {
            if !rfi.is_open() {
                continue;
            }
            open_count += 1;

            for set_id in &rfi.linked_drawing_set_ids {
                by_set.entry(set_id.clone()).or_default().push(rfi.clone());
            }
        }

        Self { by_set, open_count }
    }

    /// Open RFIs referencing the given drawing set, in snapshot order.
    pub fn linked(&self, set_id: &DrawingSetId) -> &[Rfi] {
        self.by_set.get(set_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of open RFIs in the snapshot, linked or not.
    pub fn open_count(&self) -> usize {
        self.open_count
    }
}
