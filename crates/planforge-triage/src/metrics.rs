//! Portfolio-level KPI aggregation.

use std::collections::BTreeMap;

use planforge_models::{ReviewZone, Rfi};
use serde::Serialize;

use crate::pipeline::EnrichedDrawingSet;
use crate::staleness::turnaround_days;

/// Roll-up KPIs over one enrichment pass.
///
/// Ephemeral like the enriched list: rebuilt on every pass, never persisted.
/// All ratios are safe on an empty portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioMetrics {
    /// Total drawing sets on the board.
    pub total: usize,
    /// Sets in the Released zone.
    pub released: usize,
    /// Released share of the portfolio, rounded to a whole percent.
    pub released_percent: u32,
    /// Sets needing action today: Returned or overdue.
    pub action_today: usize,
    /// Open RFIs across the snapshot, linked or not.
    pub open_rfis: usize,
    /// Mean review turnaround (IFA to BFA) in whole days, rounded.
    pub avg_turnaround_days: u32,
    /// Set count per zone, zero-filled for zones with no sets.
    pub by_zone: BTreeMap<ReviewZone, usize>,
}

impl PortfolioMetrics {
    /// Computes the KPIs from the enriched list and the RFI snapshot.
    pub fn compute(enriched: &[EnrichedDrawingSet], rfis: &[Rfi]) -> Self {
        let mut by_zone: BTreeMap<ReviewZone, usize> =
            ReviewZone::ALL.iter().map(|z| (*z, 0)).collect();
        for item in enriched {
            *by_zone.entry(item.zone).or_insert(0) += 1;
        }

        let total = enriched.len();
        let released = by_zone[&ReviewZone::Released];
        let released_percent = if total == 0 {
            0
        } else {
            ((released as f64 / total as f64) * 100.0).round() as u32
        };

        let action_today = enriched
            .iter()
            .filter(|item| item.zone == ReviewZone::Returned || item.is_overdue)
            .count();

        let open_rfis = rfis.iter().filter(|rfi| rfi.is_open()).count();

        let turnarounds: Vec<i64> = enriched
            .iter()
            .filter_map(|item| turnaround_days(&item.set))
            .collect();
        let avg_turnaround_days = if turnarounds.is_empty() {
            0
        } else {
            let sum: i64 = turnarounds.iter().sum();
            (sum as f64 / turnarounds.len() as f64).round() as u32
        };

        Self {
            total,
            released,
            released_percent,
            action_today,
            open_rfis,
            avg_turnaround_days,
            by_zone,
        }
    }
}
