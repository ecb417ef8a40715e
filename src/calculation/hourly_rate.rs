//! Hourly rate derivation.
//!
//! The monthly salary is spread over a 6-day official week converted to a
//! 30-day month: `salary / ((weekly_hours / 6) * 30)`. The divisor is
//! evaluated in exactly that order; at 28-digit precision a 44-hour week
//! still yields exactly 220.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// Official working days per week used by the divisor.
pub const WORK_DAYS_PER_WEEK: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Days per month used by the divisor.
pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// The result of an hourly rate derivation.
#[derive(Debug, Clone)]
pub struct HourlyRateResult {
    /// The hourly rate at full precision.
    pub rate: Decimal,
    /// The monthly hours divisor.
    pub monthly_hours: Decimal,
    /// The audit step recording the derivation.
    pub audit_step: AuditStep,
}

/// Derives the hourly rate from the monthly base salary.
///
/// Fails when the weekly hours produce a zero divisor.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_rate;
/// use rust_decimal::Decimal;
///
/// let result = calculate_hourly_rate(Decimal::from(176000), Decimal::from(44), 1).unwrap();
/// assert_eq!(result.rate, Decimal::from(800));
/// ```
pub fn calculate_hourly_rate(
    base_salary: Decimal,
    weekly_work_hours: Decimal,
    step_number: u32,
) -> EngineResult<HourlyRateResult> {
    let monthly_hours = (weekly_work_hours / WORK_DAYS_PER_WEEK) * DAYS_PER_MONTH;

    let rate = base_salary
        .checked_div(monthly_hours)
        .ok_or_else(|| EngineError::InvalidInput {
            field: "weekly_work_hours".to_string(),
            message: format!(
                "yields a monthly hours divisor of {}, cannot derive an hourly rate",
                monthly_hours.normalize()
            ),
        })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "hourly_rate".to_string(),
        rule_name: "Hourly Rate".to_string(),
        legal_basis: "LGT (Lei 7/15)".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "weekly_work_hours": weekly_work_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "monthly_hours": monthly_hours.round_dp(6).normalize().to_string(),
            "hourly_rate": rate.round_dp(6).normalize().to_string()
        }),
        reasoning: format!(
            "{} / (({} / 6) × 30) = {} per hour",
            base_salary.normalize(),
            weekly_work_hours.normalize(),
            rate.round_dp(6).normalize()
        ),
    };

    Ok(HourlyRateResult {
        rate,
        monthly_hours,
        audit_step,
    })
}
