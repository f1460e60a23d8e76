//! Builder patterns for complex types.

use chrono::NaiveDate;

use crate::drawing_set::{DrawingSet, DrawingStatus};
use crate::ids::{DrawingSetId, ProjectId, RfiId};
use crate::rfi::{Rfi, RfiStatus};

/// Builder for creating DrawingSet instances with a fluent API.
///
/// Primarily used by tests and import tooling that need deterministic ids
/// and dates instead of the generated defaults.
#[derive(Debug, Clone)]
pub struct DrawingSetBuilder {
    set: DrawingSet,
}

impl DrawingSetBuilder {
    /// Creates a new builder with required fields.
    pub fn new(project_id: impl Into<ProjectId>, title: impl Into<String>) -> Self {
        Self {
            set: DrawingSet::new(project_id, title),
        }
    }

    /// Pins the id instead of using a generated one.
    pub fn id(mut self, id: impl Into<DrawingSetId>) -> Self {
        self.set.id = id.into();
        self
    }

    /// Sets the review status.
    pub fn status(mut self, status: DrawingStatus) -> Self {
        self.set.status = status;
        self
    }

    /// Sets the current revision label.
    pub fn revision(mut self, revision: impl Into<String>) -> Self {
        self.set.current_revision = revision.into();
        self
    }

    /// Sets the sheet count.
    pub fn sheets(mut self, count: u32) -> Self {
        self.set.sheet_count = count;
        self
    }

    /// Sets the review due date.
    pub fn due(mut self, date: NaiveDate) -> Self {
        self.set.due_date = Some(date);
        self
    }

    /// Sets the assigned reviewer.
    pub fn reviewer(mut self, reviewer: impl Into<String>) -> Self {
        self.set.reviewer = Some(reviewer.into());
        self
    }

    /// Sets the issued-for-approval date.
    pub fn ifa(mut self, date: NaiveDate) -> Self {
        self.set.ifa_date = Some(date);
        self
    }

    /// Sets the back-from-approval date.
    pub fn bfa(mut self, date: NaiveDate) -> Self {
        self.set.bfa_date = Some(date);
        self
    }

    /// Sets the back-for-shop date.
    pub fn bfs(mut self, date: NaiveDate) -> Self {
        self.set.bfs_date = Some(date);
        self
    }

    /// Pins the creation date.
    pub fn created(mut self, date: NaiveDate) -> Self {
        self.set.created_date = date;
        self
    }

    /// Builds the DrawingSet.
    pub fn build(self) -> DrawingSet {
        self.set
    }
}

/// Builder for creating Rfi instances with a fluent API.
#[derive(Debug, Clone)]
pub struct RfiBuilder {
    rfi: Rfi,
}

impl RfiBuilder {
    /// Creates a new builder with required fields.
    pub fn new(project_id: impl Into<ProjectId>, subject: impl Into<String>) -> Self {
        Self {
            rfi: Rfi::new(project_id, subject),
        }
    }

    /// Pins the id instead of using a generated one.
    pub fn id(mut self, id: impl Into<RfiId>) -> Self {
        self.rfi.id = id.into();
        self
    }

    /// Sets the status.
    pub fn status(mut self, status: RfiStatus) -> Self {
        self.rfi.status = status;
        self
    }

    /// Links a drawing set.
    pub fn link(mut self, set_id: impl Into<DrawingSetId>) -> Self {
        self.rfi.linked_drawing_set_ids.push(set_id.into());
        self
    }

    /// Pins the creation date.
    pub fn created(mut self, date: NaiveDate) -> Self {
        self.rfi.created_date = date;
        self
    }

    /// Builds the Rfi.
    pub fn build(self) -> Rfi {
        self.rfi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing_set::ReviewZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_drawing_set_builder() {
        let set = DrawingSetBuilder::new("proj-1", "Stair Stringers")
            .id("dwg-7")
            .status(DrawingStatus::Bfa)
            .revision("2")
            .sheets(14)
            .due(date(2026, 5, 1))
            .reviewer("EOR")
            .ifa(date(2026, 4, 1))
            .bfa(date(2026, 4, 20))
            .created(date(2026, 3, 1))
            .build();

        assert_eq!(set.id.as_str(), "dwg-7");
        assert_eq!(set.zone(), ReviewZone::Returned);
        assert_eq!(set.current_revision, "2");
        assert_eq!(set.sheet_count, 14);
        assert_eq!(set.reviewer.as_deref(), Some("EOR"));
        assert_eq!(set.ifa_date, Some(date(2026, 4, 1)));
        assert_eq!(set.bfa_date, Some(date(2026, 4, 20)));
        assert_eq!(set.bfs_date, None);
        assert_eq!(set.created_date, date(2026, 3, 1));
    }

    #[test]
    fn test_rfi_builder() {
        let rfi = RfiBuilder::new("proj-1", "Base plate grout thickness")
            .id("rfi-3")
            .status(RfiStatus::Closed)
            .link("dwg-7")
            .created(date(2026, 4, 5))
            .build();

        assert_eq!(rfi.id.as_str(), "rfi-3");
        assert!(!rfi.is_open());
        assert!(rfi.references(&"dwg-7".into()));
    }
}
