//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod audit;
mod payroll;
mod payroll_run;

pub use attendance::{
    AttendanceSummary, DEFAULT_DAILY_HOURS_THRESHOLD, DailyAttendanceInput, DailyWorkResult,
    DayType, NightBand,
};
pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use payroll::{
    DEFAULT_WEEKLY_WORK_HOURS, MAX_ABSENCE_DAYS, MonthlyPayrollCalculation, MonthlyPayrollInput,
    MonthlyPayrollResult,
};
pub use payroll_run::{PayrollRun, PayrollRunTotals, RejectedWorker, WorkerMonth, WorkerPayslip};
