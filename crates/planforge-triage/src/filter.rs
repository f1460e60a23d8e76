//! Display filtering for the enriched triage list.

use planforge_models::ReviewZone;

use crate::pipeline::EnrichedDrawingSet;

/// Filter criteria the presentation layer applies to the enriched list.
///
/// An empty filter matches everything; criteria combine with AND.
#[derive(Debug, Clone, Default)]
pub struct TriageFilter {
    /// Keep only sets in this zone (exact equality).
    pub zone: Option<ReviewZone>,
    /// Keep only sets assigned to this reviewer.
    pub reviewer: Option<String>,
    /// Keep only overdue sets.
    pub overdue_only: bool,
}

impl TriageFilter {
    /// Creates a new empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the zone filter.
    pub fn with_zone(mut self, zone: ReviewZone) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Sets the reviewer filter.
    pub fn with_reviewer(mut self, reviewer: impl Into<String>) -> Self {
        self.reviewer = Some(reviewer.into());
        self
    }

    /// Restricts to overdue sets.
    pub fn overdue_only(mut self) -> Self {
        self.overdue_only = true;
        self
    }

    /// Returns true if the enriched set matches this filter.
    pub fn matches(&self, item: &EnrichedDrawingSet) -> bool {
        if let Some(zone) = self.zone {
            if item.zone != zone {
                return false;
            }
        }

        if let Some(ref reviewer) = self.reviewer {
            if item.set.reviewer.as_deref() != Some(reviewer.as_str()) {
                return false;
            }
        }

        if self.overdue_only && !item.is_overdue {
            return false;
        }

        true
    }

    /// Applies the filter, preserving order.
    pub fn apply<'a>(&self, items: &'a [EnrichedDrawingSet]) -> Vec<&'a EnrichedDrawingSet> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::enrich;
    use chrono::NaiveDate;
    use planforge_models::{DrawingSetBuilder, DrawingStatus};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 10).unwrap()
    }

    fn board() -> Vec<EnrichedDrawingSet> {
        let sets = vec![
            DrawingSetBuilder::new("p1", "Released")
                .id("dwg-released")
                .status(DrawingStatus::Fff)
                .created(today())
                .build(),
            DrawingSetBuilder::new("p1", "Returned")
                .id("dwg-returned")
                .status(DrawingStatus::Bfa)
                .bfa(today())
                .reviewer("EOR")
                .created(today())
                .build(),
            DrawingSetBuilder::new("p1", "Overdue")
                .id("dwg-overdue")
                .status(DrawingStatus::Ifa)
                .ifa(today())
                .due(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap())
                .created(today())
                .build(),
        ];
        enrich(&sets, &[], today())
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let items = board();
        let filter = TriageFilter::new();

        assert_eq!(filter.apply(&items).len(), items.len());
    }

    #[test]
    fn test_filter_by_zone() {
        let items = board();
        let filter = TriageFilter::new().with_zone(ReviewZone::Returned);

        let kept = filter.apply(&items);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id().as_str(), "dwg-returned");
    }

    #[test]
    fn test_filter_by_reviewer() {
        let items = board();
        let filter = TriageFilter::new().with_reviewer("EOR");

        let kept = filter.apply(&items);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id().as_str(), "dwg-returned");
    }

    #[test]
    fn test_filter_overdue_only() {
        let items = board();
        let filter = TriageFilter::new().overdue_only();

        let kept = filter.apply(&items);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id().as_str(), "dwg-overdue");
    }

    #[test]
    fn test_combined_criteria() {
        let items = board();
        let filter = TriageFilter::new()
            .with_zone(ReviewZone::Returned)
            .overdue_only();

        assert!(filter.apply(&items).is_empty());
    }
}
