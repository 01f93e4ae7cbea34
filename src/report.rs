#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{
    constants::{A_FLOOR, B_FLOOR, C_FLOOR, D_FLOOR},
    record::StudentRecord,
};

/// An enum to represent the letter grade bands
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Letter {
    /// average of 90 or above
    A,
    /// average of 80 up to 90
    B,
    /// average of 70 up to 80
    C,
    /// average of 60 up to 70
    D,
    /// average below 60
    F,
}

impl Letter {
    /// Maps an average to its letter band, highest band first.
    ///
    /// Boundary averages go to the higher band (an average of exactly 90.0 is
    /// an "A").
    ///
    /// * `average`: the average to map
    pub fn from_average(average: f64) -> Self {
        if average >= A_FLOOR {
            Letter::A
        } else if average >= B_FLOOR {
            Letter::B
        } else if average >= C_FLOOR {
            Letter::C
        } else if average >= D_FLOOR {
            Letter::D
        } else {
            Letter::F
        }
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::F => "F",
        };
        write!(f, "{letter}")
    }
}

/// A struct holding one rendered row of the summary report
#[derive(Tabled, Clone, Debug)]
struct SummaryRow {
    /// * `id`: the student identifier
    #[tabled(rename = "ID")]
    id:         String,
    /// * `name`: the student display name
    #[tabled(rename = "Name")]
    name:       String,
    /// * `count`: how many grades the record holds
    #[tabled(rename = "Grades")]
    count:      String,
    /// * `average`: the average, two-decimal fixed format
    #[tabled(rename = "Average")]
    average:    String,
    /// * `letter`: the letter grade for the average
    #[tabled(rename = "Letter")]
    letter:     String,
    /// * `status`: "Passed" or "Failed"
    #[tabled(rename = "Status")]
    status:     String,
    /// * `honor_roll`: "Yes" or "No"
    #[tabled(rename = "Honor Roll")]
    honor_roll: String,
}

impl From<&StudentRecord> for SummaryRow {
    fn from(record: &StudentRecord) -> Self {
        SummaryRow {
            id:         record.id().to_string(),
            name:       record.name().to_string(),
            count:      record.len().to_string(),
            average:    format!("{:.2}", record.average()),
            letter:     record.letter().to_string(),
            status:     if record.is_passed() {
                "Passed".to_string()
            } else {
                "Failed".to_string()
            },
            honor_roll: if record.honor_roll() {
                "Yes".to_string()
            } else {
                "No".to_string()
            },
        }
    }
}

impl StudentRecord {
    /// Renders the summary report for this record.
    ///
    /// Recomputes the honor-roll flag first, then lays out identifier, name,
    /// grade count, average (two decimals), letter grade, pass/fail status,
    /// and honor-roll eligibility in that order.
    pub fn summary_report(&mut self) -> String {
        self.check_honor_roll();

        Table::new([SummaryRow::from(&*self)])
            .with(Panel::header("Student Summary"))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
            .to_string()
    }
}
