//! The enrichment pipeline.
//!
//! One pass takes the raw drawing set and RFI snapshots plus a single
//! `today` value and produces the sorted triage list. The pass is a pure
//! function of its inputs: it never mutates the snapshots, allocates fresh
//! output every call, and reads the clock exactly once (the caller supplies
//! it), so every derived flag in one pass is mutually consistent.

use chrono::NaiveDate;
use planforge_models::{DrawingSet, DrawingSetId, ReviewZone, Rfi};
use serde::Serialize;
use tracing::warn;

use crate::linkage::RfiIndex;
use crate::score::{is_due_soon, is_overdue, priority_score, ScoreInput};
use crate::staleness::days_since_movement;

/// A drawing set enriched with derived triage fields.
///
/// Ephemeral view record: rebuilt from scratch on every pass, never mutated
/// in place, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedDrawingSet {
    /// The underlying drawing set record.
    #[serde(flatten)]
    pub set: DrawingSet,

    /// Workflow zone derived from the status code.
    pub zone: ReviewZone,

    /// Whole days since the last status movement.
    pub days_since_movement: i64,

    /// Open RFIs referencing this set.
    pub linked_rfis: Vec<Rfi>,

    /// Whether the review due date is strictly in the past.
    pub is_overdue: bool,

    /// Whether the due date falls within the due-soon window.
    pub is_due_soon: bool,

    /// Composite urgency score; sort key for the board.
    pub priority_score: u32,
}

impl EnrichedDrawingSet {
    /// The underlying set's id.
    pub fn id(&self) -> &DrawingSetId {
        &self.set.id
    }
}

/// Enriches and ranks a drawing set snapshot.
///
/// Each set is classified, measured for staleness, joined against the open
/// RFIs that reference it, and scored; the result is sorted descending by
/// priority score. The sort is stable, so sets with equal scores keep their
/// snapshot order.
///
/// A record with an empty id cannot be triaged or linked; it is skipped
/// with a warning rather than aborting the pass, so one malformed record
/// never hides the rest of the portfolio.
pub fn enrich(sets: &[DrawingSet], rfis: &[Rfi], today: NaiveDate) -> Vec<EnrichedDrawingSet> {
    let index = RfiIndex::build(rfis);

    let mut enriched: Vec<EnrichedDrawingSet> = sets
        .iter()
        .filter(|set| {
            if set.id.is_empty() {
                warn!(title = %set.title, "skipping drawing set with no id");
                return false;
            }
            true
        })
        .map(|set| enrich_one(set, &index, today))
        .collect();

    enriched.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
    enriched
}

fn enrich_one(set: &DrawingSet, index: &RfiIndex, today: NaiveDate) -> EnrichedDrawingSet {
    let zone = set.zone();
    let days = days_since_movement(set, today);
    let linked_rfis = index.linked(&set.id).to_vec();
    let overdue = is_overdue(set, zone, today);
    let due_soon = is_due_soon(set, today, overdue);

    let score = priority_score(&ScoreInput {
        zone,
        is_overdue: overdue,
        linked_open_rfis: linked_rfis.len(),
        days_since_movement: days,
    });

    EnrichedDrawingSet {
        set: set.clone(),
        zone,
        days_since_movement: days,
        linked_rfis,
        is_overdue: overdue,
        is_due_soon: due_soon,
        priority_score: score,
    }
}
