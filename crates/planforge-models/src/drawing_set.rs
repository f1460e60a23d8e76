//! Drawing set entities and review-zone classification.
//!
//! A drawing set moves through a submittal review loop: issued for approval,
//! bounced back for corrections, reworked, resubmitted, and eventually
//! released for fabrication. The status codes are the industry shorthand the
//! field teams already use; the zone is the coarse bucket the triage board
//! groups them by.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::dates::lenient_date;
use crate::ids::{DrawingSetId, ProjectId};

/// Review status codes for a drawing set.
///
/// The code set is closed; anything else coming off the wire lands on
/// `Unknown` and is treated as not yet submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DrawingStatus {
    /// Issued For Approval - out for external review.
    #[serde(rename = "IFA")]
    Ifa,
    /// Back From Approval - returned with comments, unresolved.
    #[serde(rename = "BFA")]
    Bfa,
    /// Back For Shop - in rework by the detailing team.
    #[serde(rename = "BFS")]
    Bfs,
    /// Rejected outright; must be revised and resubmitted.
    #[serde(rename = "Revise & Resubmit")]
    ReviseResubmit,
    /// Released for fabrication (final).
    #[serde(rename = "FFF")]
    Fff,
    /// As-built record set (final).
    #[serde(rename = "As-Built")]
    AsBuilt,
    /// Unrecognized or unset status.
    #[default]
    #[serde(other)]
    Unknown,
}

impl DrawingStatus {
    /// Returns the wire code for this status.
    pub fn as_code(&self) -> &'static str {
        match self {
            DrawingStatus::Ifa => "IFA",
            DrawingStatus::Bfa => "BFA",
            DrawingStatus::Bfs => "BFS",
            DrawingStatus::ReviseResubmit => "Revise & Resubmit",
            DrawingStatus::Fff => "FFF",
            DrawingStatus::AsBuilt => "As-Built",
            DrawingStatus::Unknown => "Unknown",
        }
    }

    /// Parses a wire code. Total: unrecognized codes map to `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "IFA" => DrawingStatus::Ifa,
            "BFA" => DrawingStatus::Bfa,
            "BFS" => DrawingStatus::Bfs,
            "Revise & Resubmit" => DrawingStatus::ReviseResubmit,
            "FFF" => DrawingStatus::Fff,
            "As-Built" => DrawingStatus::AsBuilt,
            _ => DrawingStatus::Unknown,
        }
    }

    /// Classifies this status into its workflow zone.
    ///
    /// The mapping is a closed table with an explicit default; every status
    /// value lands in exactly one zone.
    pub fn zone(&self) -> ReviewZone {
        match self {
            DrawingStatus::Ifa => ReviewZone::ExternalReview,
            DrawingStatus::Bfa => ReviewZone::Returned,
            DrawingStatus::Bfs => ReviewZone::ActiveDetailing,
            DrawingStatus::ReviseResubmit => ReviewZone::Returned,
            DrawingStatus::Fff => ReviewZone::Released,
            DrawingStatus::AsBuilt => ReviewZone::Released,
            DrawingStatus::Unknown => ReviewZone::Intake,
        }
    }
}

/// Workflow zones a drawing set can occupy.
///
/// Typical progression: Intake -> ExternalReview -> (Returned ->
/// ActiveDetailing -> ExternalReview)* -> Released. The engine only
/// classifies the current state; it does not enforce transitions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ReviewZone {
    /// Not yet submitted for review.
    Intake,
    /// In rework by the detailing team.
    ActiveDetailing,
    /// Out with the external reviewer.
    ExternalReview,
    /// Bounced back; ball in the originator's court.
    Returned,
    /// Released for fabrication (terminal).
    Released,
}

impl ReviewZone {
    /// All zones, in board display order. Used to zero-fill aggregates.
    pub const ALL: [ReviewZone; 5] = [
        ReviewZone::Intake,
        ReviewZone::ActiveDetailing,
        ReviewZone::ExternalReview,
        ReviewZone::Returned,
        ReviewZone::Released,
    ];

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ReviewZone::Intake => "Intake",
            ReviewZone::ActiveDetailing => "Active Detailing",
            ReviewZone::ExternalReview => "External Review",
            ReviewZone::Returned => "Returned",
            ReviewZone::Released => "Released",
        }
    }
}

/// A drawing set record from the entity store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingSet {
    /// Unique identifier for the drawing set.
    pub id: DrawingSetId,

    /// ID of the project this set belongs to.
    pub project_id: ProjectId,

    /// Short title (e.g., "Level 3 Stair Stringers").
    pub title: String,

    /// Current review status code.
    #[serde(default)]
    pub status: DrawingStatus,

    /// Current revision label.
    #[serde(default)]
    pub current_revision: String,

    /// Number of sheets in the set.
    #[serde(default)]
    pub sheet_count: u32,

    /// Date the review is due back, if one was set.
    #[serde(default, with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Assigned reviewer, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,

    /// Date the set was last issued for approval.
    #[serde(default, with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub ifa_date: Option<NaiveDate>,

    /// Date the set last came back from approval.
    #[serde(default, with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub bfa_date: Option<NaiveDate>,

    /// Date the set last went back to the shop for rework.
    #[serde(default, with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub bfs_date: Option<NaiveDate>,

    /// When the record was created. Always present.
    pub created_date: NaiveDate,
}

impl DrawingSet {
    /// Creates a new drawing set in the default (Intake) state.
    pub fn new(project_id: impl Into<ProjectId>, title: impl Into<String>) -> Self {
        Self {
            id: DrawingSetId::new(),
            project_id: project_id.into(),
            title: title.into(),
            status: DrawingStatus::Unknown,
            current_revision: "0".to_string(),
            sheet_count: 0,
            due_date: None,
            reviewer: None,
            ifa_date: None,
            bfa_date: None,
            bfs_date: None,
            created_date: Utc::now().date_naive(),
        }
    }

    /// Returns the workflow zone for this set's current status.
    pub fn zone(&self) -> ReviewZone {
        self.status.zone()
    }
}
