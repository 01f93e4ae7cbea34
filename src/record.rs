#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};

use crate::{
    constants::{GRADE_RANGE, HONOR_ROLL_MARK, PASS_MARK},
    report::Letter,
};

/// An enum to represent possible errors with a student record
#[derive(thiserror::Error, Debug)]
pub enum GradeError {
    /// A rejected argument (blank identity field, non-numeric input, or a
    /// grade outside the accepted range)
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// what was wrong with the argument
        reason: String,
    },
    /// A removal index outside `[0, count)`
    #[error("Grade index {index} is out of range for {count} grade(s)")]
    IndexOutOfRange {
        /// the offending index
        index: usize,
        /// how many grades the record held
        count: usize,
    },
    /// A removal by value that matched nothing
    #[error("No grade equal to {value} in the record")]
    NotFound {
        /// the value that was searched for
        value: f64,
    },
}

/// Parses a grade from text.
///
/// This is the only boundary where text becomes a grade; parse failures are
/// reported as [`GradeError::InvalidArgument`]. Range checking is left to
/// [`StudentRecord::add_grade`].
///
/// * `input`: the text to parse, surrounding whitespace ignored
pub fn parse_grade(input: &str) -> Result<f64, GradeError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| GradeError::InvalidArgument {
            reason: format!("grade `{input}` is not numeric"),
        })
}

/// Rejects blank identity fields.
///
/// * `field`: name of the field, used in the error reason
/// * `value`: the value to check
fn ensure_not_blank(field: &str, value: &str) -> Result<(), GradeError> {
    if value.trim().is_empty() {
        return Err(GradeError::InvalidArgument {
            reason: format!("student {field} cannot be empty"),
        });
    }
    Ok(())
}

/// A struct representing one student and their ordered grades
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StudentRecord {
    /// student identifier
    id:         String,
    /// student display name
    name:       String,
    /// grades in insertion order, each within [0, 100]
    grades:     Vec<f64>,
    /// honor-roll flag, recomputed by [`StudentRecord::check_honor_roll`]
    honor_roll: bool,
}

impl StudentRecord {
    /// Creates a new record with an empty grade list.
    ///
    /// * `id`: student identifier, must not be empty or whitespace-only
    /// * `name`: display name, must not be empty or whitespace-only
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, GradeError> {
        let id = id.into();
        let name = name.into();
        ensure_not_blank("id", &id)?;
        ensure_not_blank("name", &name)?;

        Ok(Self {
            id,
            name,
            grades: Vec::new(),
            honor_roll: false,
        })
    }

    /// a getter for the student identifier
    pub fn id(&self) -> &str {
        self.id.as_ref()
    }

    /// a getter for the display name
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// a getter for the grades in insertion order
    pub fn grades(&self) -> &[f64] {
        self.grades.as_ref()
    }

    /// Returns how many grades the record holds
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    /// Returns true if the record holds no grades
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Appends a grade to the record.
    ///
    /// Fails with [`GradeError::InvalidArgument`] if the value is not finite
    /// or lies outside [0, 100].
    ///
    /// * `value`: the grade to append
    pub fn add_grade(&mut self, value: f64) -> Result<(), GradeError> {
        if !value.is_finite() {
            return Err(GradeError::InvalidArgument {
                reason: format!("grade `{value}` is not a finite number"),
            });
        }
        if !GRADE_RANGE.contains(&value) {
            return Err(GradeError::InvalidArgument {
                reason: format!(
                    "grade {value} is outside {:.0}..={:.0}",
                    GRADE_RANGE.start(),
                    GRADE_RANGE.end()
                ),
            });
        }

        self.grades.push(value);
        Ok(())
    }

    /// Returns the arithmetic mean of all grades, or 0.0 for an empty record
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }

    /// Maps the current average to a letter grade
    pub fn letter(&self) -> Letter {
        Letter::from_average(self.average())
    }

    /// Returns true if the current average meets the pass mark.
    ///
    /// Always derived from the live average, never read from a stored flag.
    pub fn is_passed(&self) -> bool {
        self.average() >= PASS_MARK
    }

    /// Recomputes and stores the honor-roll flag, returning the new value.
    ///
    /// Eligibility is `average >= 90`, deliberately aligned with the "A"
    /// letter-grade boundary.
    pub fn check_honor_roll(&mut self) -> bool {
        self.honor_roll = self.average() >= HONOR_ROLL_MARK;
        self.honor_roll
    }

    /// a getter for the stored honor-roll flag, as of its last recomputation
    pub fn honor_roll(&self) -> bool {
        self.honor_roll
    }

    /// Removes and returns the grade at a zero-based position.
    ///
    /// * `index`: position to remove, must lie in `[0, len)`
    pub fn remove_grade_by_index(&mut self, index: usize) -> Result<f64, GradeError> {
        if index >= self.grades.len() {
            return Err(GradeError::IndexOutOfRange {
                index,
                count: self.grades.len(),
            });
        }
        Ok(self.grades.remove(index))
    }

    /// Removes the first grade exactly equal to `value`.
    ///
    /// Exact floating-point equality is intentional and matches the add
    /// contract; for values that went through arithmetic, prefer
    /// [`StudentRecord::remove_grade_near`].
    ///
    /// * `value`: the grade to remove
    pub fn remove_grade_by_value(&mut self, value: f64) -> Result<(), GradeError> {
        match self.grades.iter().position(|&g| g == value) {
            Some(index) => {
                self.grades.remove(index);
                Ok(())
            }
            None => Err(GradeError::NotFound { value }),
        }
    }

    /// Removes and returns the first grade within `epsilon` of `value`.
    ///
    /// A tolerance-based alternative to [`StudentRecord::remove_grade_by_value`];
    /// the two can disagree on which element is removed when several grades
    /// fall within the tolerance.
    ///
    /// * `value`: the grade to look for
    /// * `epsilon`: maximum absolute difference that still counts as a match
    pub fn remove_grade_near(&mut self, value: f64, epsilon: f64) -> Result<f64, GradeError> {
        match self.grades.iter().position(|&g| (g - value).abs() <= epsilon) {
            Some(index) => Ok(self.grades.remove(index)),
            None => Err(GradeError::NotFound { value }),
        }
    }
}
