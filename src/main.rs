#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradebook
//!
//! A command line front end for the gradebook library: build a student
//! record from arguments and print its summary report, or dump it as JSON.

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use gradebook::{StudentRecord, parse_grade};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Run the canned demonstration
    Demo,
    /// Print a summary report for a record built from arguments
    Report(String, String, Vec<String>),
    /// Dump a record built from arguments as JSON
    Json(String, String, Vec<String>),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the student identifier
    fn i() -> impl Parser<String> {
        long("id").help("Student identifier").argument("ID")
    }

    /// parses the student display name
    fn n() -> impl Parser<String> {
        long("name").help("Student display name").argument("NAME")
    }

    /// parses grade values, as text so the conversion boundary can reject
    /// non-numeric input with a proper error
    fn g() -> impl Parser<Vec<String>> {
        positional("GRADE").help("Grade value in 0..=100").many()
    }

    let demo = pure(Cmd::Demo)
        .to_options()
        .command("demo")
        .help("Run the built-in demonstration record");

    let report = construct!(Cmd::Report(i(), n(), g()))
        .to_options()
        .command("report")
        .help("Print a summary report for the given student and grades");

    let json = construct!(Cmd::Json(i(), n(), g()))
        .to_options()
        .command("json")
        .help("Print the record as JSON");

    let cmd = construct!([demo, report, json]);

    cmd.to_options()
        .descr("Single-student grade records and summaries")
        .run()
}

/// Builds a record from CLI arguments, routing every grade through the
/// text-to-grade conversion boundary
fn build_record(id: &str, name: &str, grades: &[String]) -> Result<StudentRecord> {
    let mut record = StudentRecord::new(id, name)?;

    for raw in grades {
        let value = parse_grade(raw)?;
        record
            .add_grade(value)
            .with_context(|| format!("Failed to add grade `{raw}`"))?;
    }

    Ok(record)
}

/// Runs the canned demonstration: known student, known grades, one removal
/// by value, one removal by index that is reported but not fatal.
fn demo() -> Result<()> {
    let mut record = StudentRecord::new("S001", "Alice")?;
    for value in [95.0, 82.5, 77.0] {
        record.add_grade(value)?;
    }
    record.remove_grade_by_value(77.0)?;

    // out-of-range removals are report-and-continue
    if let Err(e) = record.remove_grade_by_index(10) {
        tracing::warn!("{e}");
    }

    println!("{}", record.summary_report());

    let status = if record.is_passed() {
        "Passed".green()
    } else {
        "Failed".red()
    };
    println!("{}: {status}", record.name().bold());

    Ok(())
}

fn main() -> Result<()> {
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let cmd = options();

    match cmd {
        Cmd::Demo => demo()?,
        Cmd::Report(id, name, grades) => {
            let mut record = build_record(&id, &name, &grades)?;
            println!("{}", record.summary_report());
        }
        Cmd::Json(id, name, grades) => {
            let mut record = build_record(&id, &name, &grades)?;
            record.check_honor_roll();
            println!(
                "{}",
                serde_json::to_string_pretty(&record).context("Failed to serialize record")?
            );
        }
    };

    Ok(())
}
