//! HOS Scheduler - command-line front end
//!
//! Reads a JSON request, runs the scheduler, planner or audit, and writes the
//! JSON result to stdout (or `--output`). Logs go to stderr and a daily file.

mod cli;
mod config;

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use hos_scheduler::services::cycle::driver_state_from_history;
use hos_scheduler::types::{
    AuditRequest, AuditResponse, ErrorResponse, ScheduleRequest, TripPlanRequest, TripPlanResponse,
};
use hos_scheduler::{audit, parse_start_time, plan_trip_segments, schedule_with_config, ScheduleError};

use crate::cli::{Cli, Command};
use crate::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    std::fs::create_dir_all(&config.logs_dir).ok();

    // File appender for persistent logs (daily rotation)
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.logs_dir, "hos-scheduler.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // stdout carries the JSON result, so console logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,hos_scheduler=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    let run_id = Uuid::new_v4();
    info!("Run {} started", run_id);

    match run(&cli.command, &config) {
        Ok(()) => {
            info!("Run {} finished", run_id);
            Ok(())
        }
        Err(e) => match e.downcast_ref::<ScheduleError>() {
            Some(err) => {
                error!("Run {} rejected: {}", run_id, err);
                write_json(output_of(&cli.command), &ErrorResponse::from(err))?;
                drop(guard);
                std::process::exit(1);
            }
            None => {
                error!("Run {} failed: {:#}", run_id, e);
                Err(e)
            }
        },
    }
}

fn run(command: &Command, config: &Config) -> Result<()> {
    match command {
        Command::Schedule { input, output } => {
            let request: ScheduleRequest = read_json(input)?;
            let start = parse_start_time(&request.start_time)?;
            let result = schedule_with_config(&request.segments, &request.driver, start, &config.scheduler)?;
            write_json(output.as_deref(), &result)
        }
        Command::Plan { input, output } => {
            let request: TripPlanRequest = read_json(input)?;
            let start = parse_start_time(&request.start_time)?;

            let driver = if request.history.is_empty() {
                request.driver.clone()
            } else {
                driver_state_from_history(&request.driver, &request.history, start.date(), &config.scheduler)?
            };

            let segments = plan_trip_segments(&request.route, &config.trip)?;
            let schedule = schedule_with_config(&segments, &driver, start, &config.scheduler)?;
            let response = TripPlanResponse {
                segments,
                cycle_used_hours: driver.cycle_used_hours,
                schedule,
            };
            write_json(output.as_deref(), &response)
        }
        Command::Audit { input, output } => {
            let request: AuditRequest = read_json(input)?;
            let violations = audit(&request.schedule, &request.driver, &config.scheduler);
            info!(
                "Audited {} day(s): {} violation(s)",
                request.schedule.days.len(),
                violations.len()
            );
            let response = AuditResponse {
                compliant: violations.is_empty(),
                violations,
            };
            write_json(output.as_deref(), &response)
        }
    }
}

fn output_of(command: &Command) -> Option<&Path> {
    match command {
        Command::Schedule { output, .. } | Command::Plan { output, .. } | Command::Audit { output, .. } => {
            output.as_deref()
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let mut raw = String::new();
    if path == Path::new("-") {
        io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read request from stdin")?;
    } else {
        raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
    }
    let request = serde_json::from_str(&raw)
        .map_err(|e| ScheduleError::invalid(format!("malformed request in {}: {}", path.display(), e)))?;
    Ok(request)
}

fn write_json<T: Serialize>(path: Option<&Path>, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize response")?;
    match path {
        Some(path) => std::fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json).context("Failed to write response")?;
            Ok(())
        }
    }
}
