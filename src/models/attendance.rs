//! Attendance models for the working-hours engine.
//!
//! This module defines one day's raw punch data, the day classification
//! that selects the overtime tier, and the derived per-day and per-period
//! hour figures.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default regular-hours ceiling for a normal workday.
pub const DEFAULT_DAILY_HOURS_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

fn default_daily_hours_threshold() -> Decimal {
    DEFAULT_DAILY_HOURS_THRESHOLD
}

/// Classification of a calendar day for overtime purposes.
///
/// # Example
///
/// ```
/// use payroll_engine::models::DayType;
///
/// let day_type: DayType = serde_json::from_str("\"weekly_rest\"").unwrap();
/// assert_eq!(day_type, DayType::WeeklyRest);
/// assert!(day_type.is_rest_or_holiday());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Ordinary workday: hours beyond the daily threshold are tier-1 overtime.
    Normal,
    /// The worker's weekly rest day: all worked time is tier-2 overtime.
    WeeklyRest,
    /// Public holiday: all worked time is tier-2 overtime.
    Holiday,
}

impl DayType {
    /// Returns true for days on which every worked hour is tier-2 overtime.
    pub fn is_rest_or_holiday(self) -> bool {
        matches!(self, DayType::WeeklyRest | DayType::Holiday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Normal => write!(f, "Normal"),
            DayType::WeeklyRest => write!(f, "Weekly rest"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// One calendar day's raw attendance facts.
///
/// A missing entry or exit punch is valid input and yields a zero day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendanceInput {
    /// Clock-in time of day.
    #[serde(default)]
    pub entry_time: Option<NaiveTime>,
    /// Clock-out time of day. Earlier than `entry_time` means the shift crossed midnight.
    #[serde(default)]
    pub exit_time: Option<NaiveTime>,
    /// How the day is classified.
    pub day_type: DayType,
    /// Regular-hours ceiling for a normal day.
    #[serde(default = "default_daily_hours_threshold")]
    pub normal_daily_hours_threshold: Decimal,
}

impl DailyAttendanceInput {
    /// Creates an input with the default 8-hour threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{DailyAttendanceInput, DayType};
    /// use chrono::NaiveTime;
    ///
    /// let day = DailyAttendanceInput::new(
    ///     NaiveTime::from_hms_opt(8, 0, 0),
    ///     NaiveTime::from_hms_opt(17, 0, 0),
    ///     DayType::Normal,
    /// );
    /// assert_eq!(day.normal_daily_hours_threshold, rust_decimal::Decimal::from(8));
    /// ```
    pub fn new(
        entry_time: Option<NaiveTime>,
        exit_time: Option<NaiveTime>,
        day_type: DayType,
    ) -> Self {
        Self {
            entry_time,
            exit_time,
            day_type,
            normal_daily_hours_threshold: DEFAULT_DAILY_HOURS_THRESHOLD,
        }
    }

    /// Overrides the regular-hours ceiling.
    pub fn with_threshold(mut self, threshold: Decimal) -> Self {
        self.normal_daily_hours_threshold = threshold;
        self
    }
}

/// Derived hour figures for one day. All hour fields are rounded to 2 dp.
///
/// At most one of `regular_hours` and `rest_overtime_hours` is non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWorkResult {
    /// Total worked minutes.
    pub worked_minutes: i64,
    /// Total worked hours.
    pub worked_hours: Decimal,
    /// Hours up to the threshold on a normal day.
    pub regular_hours: Decimal,
    /// Tier-1 overtime: hours beyond the threshold on a normal day.
    pub normal_overtime_hours: Decimal,
    /// Tier-2 overtime: all hours worked on a rest day or holiday.
    pub rest_overtime_hours: Decimal,
    /// Worked hours inside the night band.
    pub night_hours: Decimal,
}

impl DailyWorkResult {
    /// The result for an absence or incomplete punch.
    pub fn zero() -> Self {
        Self {
            worked_minutes: 0,
            worked_hours: Decimal::ZERO,
            regular_hours: Decimal::ZERO,
            normal_overtime_hours: Decimal::ZERO,
            rest_overtime_hours: Decimal::ZERO,
            night_hours: Decimal::ZERO,
        }
    }
}

/// Totals of a period's daily results, ready to feed a monthly payroll input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Number of daily results folded in.
    pub days_recorded: u32,
    /// Days with any worked time.
    pub days_worked: u32,
    /// Sum of worked hours.
    pub worked_hours: Decimal,
    /// Sum of regular hours.
    pub regular_hours: Decimal,
    /// Sum of tier-1 overtime hours.
    pub normal_overtime_hours: Decimal,
    /// Sum of tier-2 overtime hours.
    pub rest_overtime_hours: Decimal,
    /// Sum of night hours.
    pub night_hours: Decimal,
}

/// The night-work window, which may wrap midnight.
///
/// Identical start and end times mean no night band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightBand {
    /// Start of the band.
    pub start: NaiveTime,
    /// End of the band (exclusive).
    pub end: NaiveTime,
}

impl Default for NightBand {
    /// 20:00 to 06:00.
    fn default() -> Self {
        Self {
            start: NaiveTime::MIN + chrono::Duration::hours(20),
            end: NaiveTime::MIN + chrono::Duration::hours(6),
        }
    }
}
