//! Core data models for Planforge.
//!
//! This crate provides the fundamental data types shared across the
//! Planforge system: drawing sets, RFIs, review zones, and type-safe ids.
//! The types mirror the records the remote entity store hands out; date
//! fields deserialize leniently so one bad value never sinks a record.

pub mod builders;
pub mod dates;
pub mod drawing_set;
pub mod ids;
pub mod rfi;

// Re-export main types
pub use builders::{DrawingSetBuilder, RfiBuilder};
pub use dates::{lenient_date, parse_date, DATE_FORMAT};
pub use drawing_set::{DrawingSet, DrawingStatus, ReviewZone};
pub use ids::{DrawingSetId, ProjectId, RfiId};
pub use rfi::{Rfi, RfiStatus};
