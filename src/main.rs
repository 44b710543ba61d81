#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # roster
//!
//! Console front-end for the in-memory student roster: a scripted demo
//! of every operation, an interactive menu shell, and a class report
//! over the demo roster.

use anyhow::{Context, Result};
use bpaf::*;
use roster::{demo, report, shell};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Replay the scripted walkthrough
    Demo,
    /// Run the interactive menu shell
    Shell,
    /// Print the class report for the demo roster
    Report(bool),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the JSON-output switch for the report command
    fn j() -> impl Parser<bool> {
        long("json")
            .help("Print the report as JSON instead of a table")
            .switch()
    }

    let demo = pure(Cmd::Demo)
        .to_options()
        .command("demo")
        .help("Replay the walkthrough roster and print every result");

    let shell = pure(Cmd::Shell)
        .to_options()
        .command("shell")
        .help("Start an interactive menu over an empty roster");

    let report = construct!(Cmd::Report(j()))
        .to_options()
        .command("report")
        .help("Print the class report for the demo roster");

    let cmd = construct!([demo, shell, report]);

    cmd.to_options()
        .descr("An in-memory student roster and grade book")
        .run()
}

/// Prints the class report for the demo roster, as a table or as JSON.
fn run_report(json: bool) -> Result<()> {
    let registry = demo::seeded_registry();
    if json {
        let snapshot = serde_json::json!({
            "roster": report::roster_rows(&registry),
            "summary": report::summarize(&registry).ok(),
            "ranking": report::ranking(&registry),
        });
        let rendered =
            serde_json::to_string_pretty(&snapshot).context("Could not serialize the report")?;
        println!("{rendered}");
        return Ok(());
    }

    println!("{}", report::roster_table(&registry));
    match report::summarize(&registry) {
        Ok(summary) => println!(
            "Class average {:.2} across {} graded students; top {} ({:.2}), bottom {} ({:.2})",
            summary.class_average(),
            summary.graded_students(),
            summary.top_student(),
            summary.highest_average(),
            summary.bottom_student(),
            summary.lowest_average(),
        ),
        Err(e) => eprintln!("{e}"),
    }
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

    match options() {
        Cmd::Demo => demo::run(),
        Cmd::Shell => shell::run()?,
        Cmd::Report(json) => run_report(json)?,
    };

    Ok(())
}
