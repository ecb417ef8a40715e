//! Calculation logic for the payroll engine.
//!
//! The working-hours engine turns daily punches into regular, overtime
//! and night hours. The payroll engine turns a worker-month of
//! aggregates into the hourly rate, overtime value, night premium, gross,
//! absence deduction, INSS contributions, IRT and net pay. Each rule
//! lives in its own module and returns an audit step alongside its value.

mod absence_deduction;
mod attendance_summary;
mod batch;
mod hourly_rate;
mod income_tax;
mod monthly_payroll;
mod night_premium;
mod overtime_value;
mod rounding;
mod social_security;
mod working_hours;

pub use absence_deduction::{AbsenceAdjustmentResult, apply_absence_deduction};
pub use attendance_summary::aggregate_attendance;
pub use batch::run_payroll_batch;
pub use hourly_rate::{DAYS_PER_MONTH, HourlyRateResult, WORK_DAYS_PER_WEEK, calculate_hourly_rate};
pub use income_tax::{IncomeTaxResult, calculate_income_tax};
pub use monthly_payroll::{calculate_monthly_payroll, compute_monthly_payroll};
pub use night_premium::{NightPremiumResult, calculate_night_premium};
pub use overtime_value::{
    NORMAL_OVERTIME_FIRST_BAND_CAP, OvertimeValueResult, calculate_overtime_value,
};
pub use rounding::round_half_up;
pub use social_security::{SocialSecurityResult, calculate_social_security};
pub use working_hours::{
    DailyWorkCalculation, MINUTES_PER_DAY, calculate_daily_work, compute_daily_work,
    minutes_since_midnight,
};
