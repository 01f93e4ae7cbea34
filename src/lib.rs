//! # gradebook
//!
//! Maintains a single student's numeric grades and derives an average, a
//! letter grade, pass/fail status, honor-roll eligibility, and a formatted
//! summary report.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// A module defining the fixed grading thresholds used throughout
pub mod constants;
/// For the student record entity and its mutation and query operations
pub mod record;
/// For letter grades and summary-report rendering
pub mod report;

pub use record::{GradeError, StudentRecord, parse_grade};
pub use report::Letter;
