//! # roster
//!
//! An in-memory student roster and grade book, ported from a set of
//! teaching exercises: registration, grade recording, enrollment
//! checks, averages, and simple class-level reporting. Everything is
//! synchronous and process-local; the only external interface is the
//! console.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Scripted walkthrough of the roster operations
pub mod demo;
/// The registry itself: records, normalization, and every operation
pub mod registry;
/// Class-level aggregation: summaries, ranking, and the roster table
pub mod report;
/// Interactive menu loop over a roster
pub mod shell;

pub use registry::{Registry, RosterError, StudentRecord, normalize_name};
pub use report::{ClassSummary, StudentRow};
