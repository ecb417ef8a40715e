//! Period aggregation of daily work results.
//!
//! The payroll engine consumes monthly hour totals; this module folds a
//! period's daily results into those totals.

use rust_decimal::Decimal;

use crate::models::{AttendanceSummary, DailyWorkResult};

/// Sums a period's daily results.
///
/// Daily figures are already rounded to 2 dp, so the sums are exact.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{aggregate_attendance, compute_daily_work};
/// use payroll_engine::models::{DailyAttendanceInput, DayType};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let at = |h| NaiveTime::from_hms_opt(h, 0, 0);
/// let days = [
///     DailyAttendanceInput::new(at(8), at(18), DayType::Normal),
///     DailyAttendanceInput::new(at(8), at(12), DayType::WeeklyRest),
///     DailyAttendanceInput::new(None, None, DayType::Normal),
/// ];
/// let results: Vec<_> = days.iter().map(compute_daily_work).collect();
/// let summary = aggregate_attendance(&results);
///
/// assert_eq!(summary.days_recorded, 3);
/// assert_eq!(summary.days_worked, 2);
/// assert_eq!(summary.normal_overtime_hours, Decimal::from(2));
/// assert_eq!(summary.rest_overtime_hours, Decimal::from(4));
/// ```
pub fn aggregate_attendance(days: &[DailyWorkResult]) -> AttendanceSummary {
    days.iter().fold(
        AttendanceSummary {
            days_recorded: 0,
            days_worked: 0,
            worked_hours: Decimal::ZERO,
            regular_hours: Decimal::ZERO,
            normal_overtime_hours: Decimal::ZERO,
            rest_overtime_hours: Decimal::ZERO,
            night_hours: Decimal::ZERO,
        },
        |mut summary, day| {
            summary.days_recorded += 1;
            if day.worked_minutes > 0 {
                summary.days_worked += 1;
            }
            summary.worked_hours += day.worked_hours;
            summary.regular_hours += day.regular_hours;
            summary.normal_overtime_hours += day.normal_overtime_hours;
            summary.rest_overtime_hours += day.rest_overtime_hours;
            summary.night_hours += day.night_hours;
            summary
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn worked(
        minutes: i64,
        regular: &str,
        normal_ot: &str,
        rest_ot: &str,
        night: &str,
    ) -> DailyWorkResult {
        DailyWorkResult {
            worked_minutes: minutes,
            worked_hours: dec(regular) + dec(normal_ot) + dec(rest_ot),
            regular_hours: dec(regular),
            normal_overtime_hours: dec(normal_ot),
            rest_overtime_hours: dec(rest_ot),
            night_hours: dec(night),
        }
    }

    #[test]
    fn test_empty_period() {
        let summary = aggregate_attendance(&[]);

        assert_eq!(summary.days_recorded, 0);
        assert_eq!(summary.days_worked, 0);
        assert_eq!(summary.worked_hours, Decimal::ZERO);
    }

    #[test]
    fn test_sums_every_field() {
        let days = vec![
            worked(600, "8", "2", "0", "0"),
            worked(500, "8", "0.33", "0", "1.5"),
            worked(300, "0", "0", "5", "0"),
            DailyWorkResult::zero(),
        ];

        let summary = aggregate_attendance(&days);

        assert_eq!(summary.days_recorded, 4);
        assert_eq!(summary.days_worked, 3);
        assert_eq!(summary.regular_hours, dec("16"));
        assert_eq!(summary.normal_overtime_hours, dec("2.33"));
        assert_eq!(summary.rest_overtime_hours, dec("5"));
        assert_eq!(summary.night_hours, dec("1.5"));
        assert_eq!(summary.worked_hours, dec("23.33"));
    }
}
