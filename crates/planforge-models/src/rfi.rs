//! RFI (Request For Information) entities.
//!
//! An RFI is a clarification request raised against the design documents. An
//! RFI that references a drawing set and is still open counts against that
//! set on the triage board.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{DrawingSetId, ProjectId, RfiId};

/// Status of an RFI.
///
/// The closed family is {Answered, Closed}; everything else, including
/// statuses this build does not know about, counts as open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RfiStatus {
    /// Drafted but not yet sent.
    Draft,
    /// Submitted and awaiting an answer.
    #[default]
    Submitted,
    /// Answered; no longer blocking.
    Answered,
    /// Closed out; no longer blocking.
    Closed,
    /// Unrecognized status.
    #[serde(other)]
    Unknown,
}

impl RfiStatus {
    /// Returns true unless the status is in the closed family.
    pub fn is_open(&self) -> bool {
        !matches!(self, RfiStatus::Answered | RfiStatus::Closed)
    }
}

/// An RFI record from the entity store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rfi {
    /// Unique identifier for the RFI.
    pub id: RfiId,

    /// ID of the project this RFI belongs to.
    pub project_id: ProjectId,

    /// Short subject line.
    pub subject: String,

    /// Current status.
    #[serde(default)]
    pub status: RfiStatus,

    /// Drawing sets this RFI references.
    #[serde(default)]
    pub linked_drawing_set_ids: Vec<DrawingSetId>,

    /// When the RFI was created.
    pub created_date: NaiveDate,
}

impl Rfi {
    /// Creates a new RFI in the Submitted state.
    pub fn new(project_id: impl Into<ProjectId>, subject: impl Into<String>) -> Self {
        Self {
            id: RfiId::new(),
            project_id: project_id.into(),
            subject: subject.into(),
            status: RfiStatus::Submitted,
            linked_drawing_set_ids: Vec::new(),
            created_date: Utc::now().date_naive(),
        }
    }

    /// Returns true unless this RFI has been answered or closed.
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Returns true if this RFI references the given drawing set.
    pub fn references(&self, set_id: &DrawingSetId) -> bool {
        self.linked_drawing_set_ids.iter().any(|id| id == set_id)
    }
}
