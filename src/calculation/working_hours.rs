//! Daily working-hours calculation.
//!
//! This module turns one day's clock-in and clock-out times into worked
//! hours and splits them into regular hours and the two overtime tiers
//! according to how the day is classified.
//!
//! ## Rules
//!
//! - A missing punch yields a zero day; it is not an error.
//! - An exit earlier than the entry means the shift crossed midnight and
//!   24 hours are added. Shifts of 24 hours or more are not supported.
//! - On a normal day, hours beyond the threshold are tier-1 overtime.
//! - On a weekly rest day or holiday, every worked hour is tier-2 overtime.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, DailyAttendanceInput, DailyWorkResult, DayType, NightBand};

use super::rounding::round_half_up;

/// Minutes in one day, added when a shift crosses midnight.
pub const MINUTES_PER_DAY: i64 = 1440;

/// A daily work result together with the audit step that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWorkCalculation {
    /// The derived hour figures.
    pub result: DailyWorkResult,
    /// The audit step recording the split.
    pub audit_step: AuditStep,
}

/// Converts a time of day to whole minutes since midnight. Seconds are ignored.
pub fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Minutes of the interval `[start, start + duration)` that fall inside the night band.
///
/// `start` lies within the first day and the interval may run into the next.
fn night_minutes(start: i64, duration: i64, band: &NightBand) -> i64 {
    let band_start = minutes_since_midnight(band.start);
    let band_length = (minutes_since_midnight(band.end) - band_start).rem_euclid(MINUTES_PER_DAY);
    if band_length == 0 || duration <= 0 {
        return 0;
    }

    let end = start + duration;
    (-1..=1)
        .map(|day| {
            let occurrence_start = day * MINUTES_PER_DAY + band_start;
            let occurrence_end = occurrence_start + band_length;
            (end.min(occurrence_end) - start.max(occurrence_start)).max(0)
        })
        .sum()
}

fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

/// Computes one day's worked hours with the default 20:00-06:00 night band.
///
/// # Examples
///
/// ## Normal day with overtime
///
/// ```
/// use payroll_engine::calculation::compute_daily_work;
/// use payroll_engine::models::{DailyAttendanceInput, DayType};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = DailyAttendanceInput::new(
///     NaiveTime::from_hms_opt(8, 0, 0),
///     NaiveTime::from_hms_opt(18, 30, 0),
///     DayType::Normal,
/// );
/// let result = compute_daily_work(&input);
///
/// assert_eq!(result.regular_hours, Decimal::from(8));
/// assert_eq!(result.normal_overtime_hours, Decimal::from_str("2.5").unwrap());
/// assert_eq!(result.rest_overtime_hours, Decimal::ZERO);
/// ```
///
/// ## Missing punch
///
/// ```
/// use payroll_engine::calculation::compute_daily_work;
/// use payroll_engine::models::{DailyAttendanceInput, DailyWorkResult, DayType};
/// use chrono::NaiveTime;
///
/// let input = DailyAttendanceInput::new(NaiveTime::from_hms_opt(8, 0, 0), None, DayType::Normal);
/// assert_eq!(compute_daily_work(&input), DailyWorkResult::zero());
/// ```
pub fn compute_daily_work(input: &DailyAttendanceInput) -> DailyWorkResult {
    calculate_daily_work(input, &NightBand::default(), 1).result
}

/// Computes one day's worked hours against an explicit night band and
/// records an audit step.
///
/// # Arguments
///
/// * `input` - The day's punches and classification
/// * `night_band` - The window whose overlap is reported as night hours
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_daily_work(
    input: &DailyAttendanceInput,
    night_band: &NightBand,
    step_number: u32,
) -> DailyWorkCalculation {
    let threshold = input.normal_daily_hours_threshold;

    let (entry, exit) = match (input.entry_time, input.exit_time) {
        (Some(entry), Some(exit)) => (entry, exit),
        _ => {
            let audit_step = AuditStep {
                step_number,
                rule_id: "daily_work".to_string(),
                rule_name: "Daily Working Hours".to_string(),
                legal_basis: "LGT (Lei 7/15)".to_string(),
                input: serde_json::json!({
                    "entry_time": input.entry_time.map(|t| t.to_string()),
                    "exit_time": input.exit_time.map(|t| t.to_string()),
                    "day_type": input.day_type,
                }),
                output: serde_json::json!({ "worked_minutes": 0 }),
                reasoning: "Missing entry or exit punch, day counts as not worked".to_string(),
            };
            return DailyWorkCalculation {
                result: DailyWorkResult::zero(),
                audit_step,
            };
        }
    };

    let entry_minutes = minutes_since_midnight(entry);
    let mut worked_minutes = minutes_since_midnight(exit) - entry_minutes;
    let crossed_midnight = worked_minutes < 0;
    if crossed_midnight {
        worked_minutes += MINUTES_PER_DAY;
    }

    let worked_hours = minutes_to_hours(worked_minutes);
    let night_hours = minutes_to_hours(night_minutes(entry_minutes, worked_minutes, night_band));

    let (regular_hours, normal_overtime_hours, rest_overtime_hours) = match input.day_type {
        DayType::Normal if worked_hours > threshold => {
            (threshold, worked_hours - threshold, Decimal::ZERO)
        }
        DayType::Normal => (worked_hours, Decimal::ZERO, Decimal::ZERO),
        DayType::WeeklyRest | DayType::Holiday => (Decimal::ZERO, Decimal::ZERO, worked_hours),
    };

    let result = DailyWorkResult {
        worked_minutes,
        worked_hours: round_half_up(worked_hours),
        regular_hours: round_half_up(regular_hours),
        normal_overtime_hours: round_half_up(normal_overtime_hours),
        rest_overtime_hours: round_half_up(rest_overtime_hours),
        night_hours: round_half_up(night_hours),
    };

    let mut reasoning = match input.day_type {
        DayType::Normal if normal_overtime_hours > Decimal::ZERO => format!(
            "{} hours worked exceeds {} hour threshold by {} hours of normal overtime",
            result.worked_hours.normalize(),
            threshold.normalize(),
            result.normal_overtime_hours.normalize()
        ),
        DayType::Normal => format!(
            "{} hours worked within {} hour threshold, no overtime",
            result.worked_hours.normalize(),
            threshold.normalize()
        ),
        day_type => format!(
            "{} day: all {} hours worked are rest/holiday overtime",
            day_type,
            result.worked_hours.normalize()
        ),
    };
    if crossed_midnight {
        reasoning.push_str(" (shift crossed midnight)");
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_work".to_string(),
        rule_name: "Daily Working Hours".to_string(),
        legal_basis: "LGT (Lei 7/15)".to_string(),
        input: serde_json::json!({
            "entry_time": entry.to_string(),
            "exit_time": exit.to_string(),
            "day_type": input.day_type,
            "threshold": threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "worked_minutes": worked_minutes,
            "worked_hours": result.worked_hours.normalize().to_string(),
            "regular_hours": result.regular_hours.normalize().to_string(),
            "normal_overtime_hours": result.normal_overtime_hours.normalize().to_string(),
            "rest_overtime_hours": result.rest_overtime_hours.normalize().to_string(),
            "night_hours": result.night_hours.normalize().to_string()
        }),
        reasoning,
    };

    DailyWorkCalculation { result, audit_step }
}
