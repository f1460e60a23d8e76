//! Drawing set review triage engine for Planforge.
//!
//! This crate turns raw drawing set and RFI snapshots into the ranked
//! review board: each set is classified into a workflow zone, measured for
//! staleness, joined against the open RFIs that block it, and scored for
//! urgency; the portfolio roll-up comes from the same pass. The engine is a
//! pure library: no I/O, no clock reads (the caller injects `today`), no
//! shared state, so a pass can run on every data refresh and from any
//! number of render requests at once.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use planforge_models::{DrawingSetBuilder, DrawingStatus, RfiBuilder};
//! use planforge_triage::{enrich, PortfolioMetrics, TriageFilter};
//! use planforge_models::ReviewZone;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 4, 10).unwrap();
//!
//! let sets = vec![DrawingSetBuilder::new("proj-1", "Stair Stringers")
//!     .id("dwg-1")
//!     .status(DrawingStatus::Bfa)
//!     .bfa(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap())
//!     .created(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
//!     .build()];
//! let rfis = vec![RfiBuilder::new("proj-1", "Confirm weld size")
//!     .link("dwg-1")
//!     .build()];
//!
//! let board = enrich(&sets, &rfis, today);
//! assert_eq!(board[0].zone, ReviewZone::Returned);
//! assert_eq!(board[0].priority_score, 500 + 300 + 100);
//!
//! let metrics = PortfolioMetrics::compute(&board, &rfis);
//! assert_eq!(metrics.action_today, 1);
//!
//! let returned = TriageFilter::new().with_zone(ReviewZone::Returned);
//! assert_eq!(returned.apply(&board).len(), 1);
//! ```

pub mod error;
pub mod filter;
pub mod linkage;
pub mod metrics;
pub mod pipeline;
pub mod score;
pub mod snapshot;
pub mod staleness;

pub use error::{Result, TriageError};
pub use filter::TriageFilter;
pub use linkage::RfiIndex;
pub use metrics::PortfolioMetrics;
pub use pipeline::{enrich, EnrichedDrawingSet};
pub use score::{is_due_soon, is_overdue, priority_score, ScoreInput, ScoreRule, RULES};
pub use snapshot::{drawing_sets_from_json, rfis_from_json};
pub use staleness::{days_since_movement, turnaround_days};
