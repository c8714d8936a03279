// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod commands;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args: Args = Args::parse();

    // RUST_LOG wins over the verbosity flags when set
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Plans a degree semester by semester and checks every move against the
/// catalog's prerequisite, offering and placement rules.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog document listing every course of the program
    #[arg(short, long, global = true, default_value = "catalog.json")]
    catalog: PathBuf,

    /// Schedule snapshot to read and update
    #[arg(short, long, global = true, default_value = "plan.json")]
    schedule: PathBuf,

    /// Rule configuration; the built-in policy applies when omitted
    #[arg(short, long, global = true)]
    policy: Option<PathBuf>,

    /// Completed coursework and earned credit hours
    #[arg(long, global = true)]
    standing: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        let files: commands::PlanFiles = commands::PlanFiles {
            catalog: self.catalog,
            schedule: self.schedule,
            policy: self.policy,
            standing: self.standing,
        };
        self.command.run(&files)
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Create an empty plan following the term rotation
    Init {
        /// Term of the first semester (Fall, Spring or Summer)
        #[arg(long, default_value = "Fall")]
        first: String,

        /// Include summer semesters in the rotation
        #[arg(long)]
        summer: bool,

        /// Number of semesters in the plan
        #[arg(long, default_value_t = 8)]
        count: usize,

        /// Place every required course into the first semester
        #[arg(long)]
        place_required: bool,
    },

    /// Move a course between semesters and record the move
    #[command(visible_alias = "mv")]
    Move {
        /// Course identifier, e.g. "CMP SCI 2250"
        course: String,

        /// Semester the course is leaving
        source: usize,

        /// Semester to move the course into
        target: usize,

        /// Credit value of the course; the catalog value when omitted
        #[arg(long)]
        credits: Option<u8>,
    },

    /// Check a course against a semester without moving it
    Check {
        /// Course identifier
        course: String,

        /// Semester to check against
        target: usize,
    },

    /// List the courses that name a course as a prerequisite
    #[command(visible_alias = "deps")]
    Dependents {
        /// Course identifier
        course: String,
    },

    /// Check every placed course where it currently sits
    Review,

    /// List required courses that are neither placed nor completed
    Unplaced,

    /// Print the recorded move history
    History,
}

impl Command {
    fn run(self, files: &commands::PlanFiles) -> Result<()> {
        match self {
            Self::Init {
                first,
                summer,
                count,
                place_required,
            } => commands::init(files, &first, summer, count, place_required),
            Self::Move {
                course,
                source,
                target,
                credits,
            } => commands::move_course(files, &course, source, target, credits),
            Self::Check { course, target } => commands::check(files, &course, target),
            Self::Dependents { course } => commands::dependents(files, &course),
            Self::Review => commands::review(files),
            Self::Unplaced => commands::unplaced(files),
            Self::History => commands::history(files),
        }
    }
}
