//! Rolling duty-cycle accounting from a driver's daily records

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::error::ScheduleError;
use crate::services::hos::SchedulerConfig;
use crate::types::{DailyDutyRecord, DriverCycleState};

/// Hours counted against the rolling cycle as of `as_of`.
///
/// The window covers `config.cycle_days` calendar days ending on `as_of`
/// (inclusive). Records outside the window are ignored.
pub fn cycle_hours_from_history(
    records: &[DailyDutyRecord],
    as_of: NaiveDate,
    config: &SchedulerConfig,
) -> Result<f64, ScheduleError> {
    config.validate()?;
    let window_start = as_of
        .checked_sub_days(Days::new(u64::from(config.cycle_days) - 1))
        .ok_or_else(|| {
            ScheduleError::invalid(format!(
                "{}-day cycle window ending {} is out of range",
                config.cycle_days, as_of
            ))
        })?;
    let mut total = 0.0;

    for record in records {
        if !record.driving_hours.is_finite()
            || !record.on_duty_hours.is_finite()
            || record.driving_hours < 0.0
            || record.on_duty_hours < 0.0
        {
            return Err(ScheduleError::invalid(format!(
                "duty record for {} has negative or non-finite hours",
                record.date
            )));
        }
        if record.date < window_start || record.date > as_of {
            continue;
        }
        total += record.duty_hours();
    }

    debug!(
        "Cycle hours {}..={}: {:.2}h from {} record(s)",
        window_start,
        as_of,
        total,
        records.len()
    );
    Ok(total)
}

/// Driver state for a trip starting on `as_of`, derived from `records`.
pub fn driver_state_from_history(
    driver: &DriverCycleState,
    records: &[DailyDutyRecord],
    as_of: NaiveDate,
    config: &SchedulerConfig,
) -> Result<DriverCycleState, ScheduleError> {
    Ok(DriverCycleState {
        driver_id: driver.driver_id,
        cycle_used_hours: cycle_hours_from_history(records, as_of, config)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    fn record(day: u32, driving: f64, on_duty: f64) -> DailyDutyRecord {
        DailyDutyRecord {
            date: date(day),
            driving_hours: driving,
            on_duty_hours: on_duty,
            off_duty_hours: 24.0 - driving - on_duty,
        }
    }

    #[test]
    fn test_window_includes_eight_days_ending_today() {
        let records = vec![
            record(1, 10.0, 2.0),  // outside (9 days back)
            record(2, 10.0, 1.0),  // first day of window
            record(5, 8.0, 3.0),
            record(9, 4.0, 1.0),   // as-of day
            record(10, 11.0, 3.0), // future, ignored
        ];
        let hours = cycle_hours_from_history(&records, date(9), &SchedulerConfig::default()).unwrap();
        assert!((hours - 27.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_cycle_window_is_seven_days() {
        let records = vec![record(2, 10.0, 1.0), record(3, 9.0, 1.0)];
        let hours = cycle_hours_from_history(&records, date(9), &SchedulerConfig::short_cycle()).unwrap();
        assert!((hours - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_history_is_fresh_cycle() {
        let hours = cycle_hours_from_history(&[], date(9), &SchedulerConfig::default()).unwrap();
        assert_eq!(hours, 0.0);
    }

    #[test]
    fn test_negative_record_is_invalid() {
        let records = vec![record(8, -1.0, 2.0)];
        let err = cycle_hours_from_history(&records, date(9), &SchedulerConfig::default()).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput(_)));
    }

    #[test]
    fn test_zero_cycle_days_is_invalid() {
        let config = SchedulerConfig {
            cycle_days: 0,
            ..SchedulerConfig::default()
        };
        let err = cycle_hours_from_history(&[record(8, 9.0, 2.0)], date(9), &config).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput(_)));
    }

    #[test]
    fn test_oversized_cycle_window_is_invalid() {
        let config = SchedulerConfig {
            cycle_days: u32::MAX,
            ..SchedulerConfig::default()
        };
        let err = cycle_hours_from_history(&[], date(9), &config).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput(_)));
    }

    #[test]
    fn test_window_reaching_before_earliest_date_is_invalid() {
        let config = SchedulerConfig {
            cycle_days: 8,
            ..SchedulerConfig::default()
        };
        let err = cycle_hours_from_history(&[], NaiveDate::MIN, &config).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput(_)));
    }

    #[test]
    fn test_driver_state_keeps_identity() {
        let driver = DriverCycleState {
            driver_id: Some(Uuid::nil()),
            cycle_used_hours: 5.0,
        };
        let records = vec![record(8, 9.0, 2.0)];
        let state = driver_state_from_history(&driver, &records, date(9), &SchedulerConfig::default()).unwrap();
        assert_eq!(state.driver_id, Some(Uuid::nil()));
        assert!((state.cycle_used_hours - 11.0).abs() < 1e-9);
    }
}
