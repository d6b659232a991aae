//! Configuration management

use std::str::FromStr;

use anyhow::{self, Context, Result};
use hos_scheduler::{SchedulerConfig, TripPlanOptions};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for the daily-rotated log file
    pub logs_dir: String,

    /// HOS limits and log-shaping options
    pub scheduler: SchedulerConfig,

    /// Stationary times and fueling cadence for `plan`
    pub trip: TripPlanOptions,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let logs_dir = lookup("LOGS_DIR").unwrap_or_else(|| "logs".to_string());

        let base = match lookup("HOS_CYCLE").as_deref().map(str::trim) {
            None | Some("") | Some("70/8") => SchedulerConfig::property_carrying(),
            Some("60/7") => SchedulerConfig::short_cycle(),
            Some(other) => anyhow::bail!("HOS_CYCLE must be '70/8' or '60/7', got '{}'", other),
        };
        let scheduler = base
            .with_sleeper_berth_rests(parse_flag(&lookup, "HOS_REST_IN_SLEEPER_BERTH")?)
            .with_padding(parse_flag(&lookup, "HOS_PAD_FULL_DAYS")?);

        let defaults = TripPlanOptions::default();
        let trip = TripPlanOptions {
            pickup_hours: parse_or(&lookup, "HOS_PICKUP_HOURS", defaults.pickup_hours)?,
            dropoff_hours: parse_or(&lookup, "HOS_DROPOFF_HOURS", defaults.dropoff_hours)?,
            fuel_interval_miles: parse_or(&lookup, "HOS_FUEL_INTERVAL_MILES", defaults.fuel_interval_miles)?,
            fuel_stop_hours: parse_or(&lookup, "HOS_FUEL_STOP_HOURS", defaults.fuel_stop_hours)?,
        };

        scheduler.validate().context("Invalid HOS limits")?;
        trip.validate().context("Invalid trip planning options")?;

        Ok(Self {
            logs_dir,
            scheduler,
            trip,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value '{}'", name, value)),
        _ => Ok(default),
    }
}

fn parse_flag(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<bool> {
    match lookup(name).map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("0") | Some("false") | Some("no") => Ok(false),
        Some("1") | Some("true") | Some("yes") => Ok(true),
        Some(other) => anyhow::bail!("{} must be true or false, got '{}'", name, other),
    }
}
