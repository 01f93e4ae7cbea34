#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::ops::RangeInclusive;

/// Range of values a grade is allowed to take
pub const GRADE_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Minimum average required to pass
pub const PASS_MARK: f64 = 60.0;

/// Minimum average required for honor roll eligibility
pub const HONOR_ROLL_MARK: f64 = 90.0;

/// Lowest average that still maps to an "A"
pub const A_FLOOR: f64 = 90.0;

/// Lowest average that still maps to a "B"
pub const B_FLOOR: f64 = 80.0;

/// Lowest average that still maps to a "C"
pub const C_FLOOR: f64 = 70.0;

/// Lowest average that still maps to a "D"
pub const D_FLOOR: f64 = 60.0;
