//! CLI argument parsing for the hos-scheduler binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hos-scheduler", about = "Hours-of-Service duty scheduler")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Schedule an explicit list of segments
    Schedule {
        /// ScheduleRequest JSON file ("-" for stdin)
        #[arg(long, short)]
        input: PathBuf,
        /// Write the result here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Plan segments from a route summary, then schedule them
    Plan {
        /// TripPlanRequest JSON file ("-" for stdin)
        #[arg(long, short)]
        input: PathBuf,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Check a produced schedule against the HOS limits
    Audit {
        /// AuditRequest JSON file ("-" for stdin)
        #[arg(long, short)]
        input: PathBuf,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
