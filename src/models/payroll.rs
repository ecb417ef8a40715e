//! Monthly payroll input and result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{AttendanceSummary, AuditTrace};

/// Default contractual weekly working hours.
pub const DEFAULT_WEEKLY_WORK_HOURS: Decimal = Decimal::from_parts(44, 0, 0, false, 0);

/// Largest unjustified-absence count accepted for one month.
pub const MAX_ABSENCE_DAYS: u32 = 31;

fn default_weekly_work_hours() -> Decimal {
    DEFAULT_WEEKLY_WORK_HOURS
}

/// Aggregated payroll inputs for one worker-month.
///
/// # Example
///
/// ```
/// use payroll_engine::models::MonthlyPayrollInput;
/// use rust_decimal::Decimal;
///
/// let input: MonthlyPayrollInput = serde_json::from_str(r#"{ "base_salary": "70000" }"#).unwrap();
/// assert_eq!(input.base_salary, Decimal::from(70000));
/// assert_eq!(input.weekly_work_hours, Decimal::from(44));
/// assert_eq!(input.unjustified_absence_days, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPayrollInput {
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Allowances that enter the gross and the tax base.
    #[serde(default)]
    pub taxable_allowances: Decimal,
    /// Allowances paid on top of net pay, outside INSS and IRT.
    #[serde(default)]
    pub exempt_allowances: Decimal,
    /// Tier-1 overtime hours for the month.
    #[serde(default)]
    pub overtime_normal_hours: Decimal,
    /// Tier-2 overtime hours for the month.
    #[serde(default)]
    pub overtime_rest_hours: Decimal,
    /// Hours worked inside the night band.
    #[serde(default)]
    pub night_hours: Decimal,
    /// Days of unjustified absence.
    #[serde(default)]
    pub unjustified_absence_days: u32,
    /// Contractual weekly hours; drives the hourly-rate divisor.
    #[serde(default = "default_weekly_work_hours")]
    pub weekly_work_hours: Decimal,
}

impl MonthlyPayrollInput {
    /// Creates an input carrying only a base salary; every other field takes its default.
    pub fn with_base_salary(base_salary: Decimal) -> Self {
        Self {
            base_salary,
            taxable_allowances: Decimal::ZERO,
            exempt_allowances: Decimal::ZERO,
            overtime_normal_hours: Decimal::ZERO,
            overtime_rest_hours: Decimal::ZERO,
            night_hours: Decimal::ZERO,
            unjustified_absence_days: 0,
            weekly_work_hours: DEFAULT_WEEKLY_WORK_HOURS,
        }
    }

    /// Replaces the overtime and night-hour aggregates with a period's attendance totals.
    pub fn with_attendance(mut self, summary: &AttendanceSummary) -> Self {
        self.overtime_normal_hours = summary.normal_overtime_hours;
        self.overtime_rest_hours = summary.rest_overtime_hours;
        self.night_hours = summary.night_hours;
        self
    }

    /// Checks the engine's preconditions.
    ///
    /// Rejects the first violation found. Values are never clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::error::EngineError;
    /// use payroll_engine::models::MonthlyPayrollInput;
    /// use rust_decimal::Decimal;
    ///
    /// let input = MonthlyPayrollInput::with_base_salary(Decimal::from(-1));
    /// match input.validate() {
    ///     Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "base_salary"),
    ///     other => panic!("unexpected: {:?}", other),
    /// }
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        let non_negative = [
            ("base_salary", self.base_salary),
            ("taxable_allowances", self.taxable_allowances),
            ("exempt_allowances", self.exempt_allowances),
            ("overtime_normal_hours", self.overtime_normal_hours),
            ("overtime_rest_hours", self.overtime_rest_hours),
            ("night_hours", self.night_hours),
        ];

        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        if self.weekly_work_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "weekly_work_hours".to_string(),
                message: format!("must be greater than zero, got {}", self.weekly_work_hours),
            });
        }

        if self.unjustified_absence_days > MAX_ABSENCE_DAYS {
            return Err(EngineError::InvalidInput {
                field: "unjustified_absence_days".to_string(),
                message: format!(
                    "must not exceed {} days, got {}",
                    MAX_ABSENCE_DAYS, self.unjustified_absence_days
                ),
            });
        }

        Ok(())
    }
}

/// The computed payroll figures for one worker-month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPayrollResult {
    /// Hourly rate at full precision.
    pub hourly_rate: Decimal,
    /// Overtime value across all tiers.
    pub overtime_value: Decimal,
    /// Night-work premium.
    pub night_premium: Decimal,
    /// Gross income before absences.
    pub gross_income: Decimal,
    /// Deduction for unjustified absences.
    pub absence_deduction: Decimal,
    /// Gross after absences, floored at zero; the INSS base.
    pub social_security_base: Decimal,
    /// INSS withheld from the worker (3 %).
    pub social_security_employee: Decimal,
    /// INSS paid by the employer (8 %). Informational; never deducted from net pay.
    pub social_security_employer: Decimal,
    /// IRT base: INSS base minus the worker's INSS.
    pub income_tax_base: Decimal,
    /// IRT liability.
    pub income_tax: Decimal,
    /// Net pay.
    pub net_pay: Decimal,
}

/// A monthly payroll result together with the audit trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPayrollCalculation {
    /// The computed figures.
    pub result: MonthlyPayrollResult,
    /// Every step and warning of the calculation.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn assert_invalid(input: &MonthlyPayrollInput, expected_field: &str) {
        match input.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("Expected InvalidInput for {}, got {:?}", expected_field, other),
        }
    }

    #[test]
    fn test_deserialize_full_input() {
        let json = r#"{
            "base_salary": "250000",
            "taxable_allowances": "20000",
            "exempt_allowances": "15000",
            "overtime_normal_hours": "12.5",
            "overtime_rest_hours": "8",
            "night_hours": "4",
            "unjustified_absence_days": 2,
            "weekly_work_hours": "40"
        }"#;

        let input: MonthlyPayrollInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.base_salary, dec("250000"));
        assert_eq!(input.overtime_normal_hours, dec("12.5"));
        assert_eq!(input.unjustified_absence_days, 2);
        assert_eq!(input.weekly_work_hours, dec("40"));
    }

    #[test]
    fn test_valid_input_passes() {
        let input = MonthlyPayrollInput::with_base_salary(dec("70000"));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_zero_salary_is_valid() {
        let input = MonthlyPayrollInput::with_base_salary(Decimal::ZERO);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_negative_salary_rejected() {
        let input = MonthlyPayrollInput::with_base_salary(dec("-100"));
        assert_invalid(&input, "base_salary");
    }

    #[test]
    fn test_negative_allowance_rejected() {
        let mut input = MonthlyPayrollInput::with_base_salary(dec("100000"));
        input.exempt_allowances = dec("-0.01");
        assert_invalid(&input, "exempt_allowances");
    }

    #[test]
    fn test_negative_overtime_rejected() {
        let mut input = MonthlyPayrollInput::with_base_salary(dec("100000"));
        input.overtime_rest_hours = dec("-2");
        assert_invalid(&input, "overtime_rest_hours");
    }

    #[test]
    fn test_zero_weekly_hours_rejected() {
        let mut input = MonthlyPayrollInput::with_base_salary(dec("100000"));
        input.weekly_work_hours = Decimal::ZERO;
        assert_invalid(&input, "weekly_work_hours");
    }

    #[test]
    fn test_absence_days_beyond_month_rejected() {
        let mut input = MonthlyPayrollInput::with_base_salary(dec("100000"));
        input.unjustified_absence_days = 32;
        assert_invalid(&input, "unjustified_absence_days");

        input.unjustified_absence_days = 31;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_with_attendance_copies_hour_totals() {
        let summary = AttendanceSummary {
            days_recorded: 22,
            days_worked: 21,
            worked_hours: dec("190"),
            regular_hours: dec("168"),
            normal_overtime_hours: dec("14"),
            rest_overtime_hours: dec("8"),
            night_hours: dec("3.5"),
        };

        let input = MonthlyPayrollInput::with_base_salary(dec("200000")).with_attendance(&summary);
        assert_eq!(input.overtime_normal_hours, dec("14"));
        assert_eq!(input.overtime_rest_hours, dec("8"));
        assert_eq!(input.night_hours, dec("3.5"));
        assert_eq!(input.base_salary, dec("200000"));
    }
}
