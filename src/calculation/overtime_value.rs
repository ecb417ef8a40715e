//! Monthly overtime valuation.
//!
//! ## Rate Structure
//!
//! **Normal-day (tier-1) overtime is paid in two bands:**
//! - First 30 hours of the month: 150% of the hourly rate
//! - Beyond 30 hours: 175% of the hourly rate
//!
//! **Rest-day and holiday (tier-2) overtime** is paid at 200% with no cap.
//!
//! The 30-hour cap is fixed by statute and is not part of the configurable policy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::OvertimeMultipliers;
use crate::models::AuditStep;

use super::rounding::round_half_up;

/// Monthly tier-1 hours paid at the first-band multiplier.
pub const NORMAL_OVERTIME_FIRST_BAND_CAP: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// The valuation of one month's overtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeValueResult {
    /// Tier-1 hours paid at the first-band multiplier.
    pub first_band_hours: Decimal,
    /// Tier-1 hours paid at the second-band multiplier.
    pub second_band_hours: Decimal,
    /// Tier-2 hours.
    pub rest_hours: Decimal,
    /// Value of the first band, unrounded.
    pub first_band_amount: Decimal,
    /// Value of the second band, unrounded.
    pub second_band_amount: Decimal,
    /// Value of tier-2 hours, unrounded.
    pub rest_amount: Decimal,
    /// Sum of the three components, rounded to 2 dp.
    pub total: Decimal,
    /// The audit step recording the valuation.
    pub audit_step: AuditStep,
}

/// Values a month's overtime hours.
///
/// # Arguments
///
/// * `normal_hours` - Tier-1 overtime hours for the month
/// * `rest_hours` - Tier-2 overtime hours for the month
/// * `hourly_rate` - The full-precision hourly rate
/// * `multipliers` - The overtime multipliers in force
/// * `step_number` - The step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_value;
/// use payroll_engine::config::PayrollPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::statutory();
/// let result = calculate_overtime_value(
///     Decimal::from(10),
///     Decimal::ZERO,
///     Decimal::from(800),
///     &policy.overtime,
///     1,
/// );
/// assert_eq!(result.total, Decimal::from(12000));
/// ```
pub fn calculate_overtime_value(
    normal_hours: Decimal,
    rest_hours: Decimal,
    hourly_rate: Decimal,
    multipliers: &OvertimeMultipliers,
    step_number: u32,
) -> OvertimeValueResult {
    let first_band_hours = normal_hours.min(NORMAL_OVERTIME_FIRST_BAND_CAP);
    let second_band_hours = (normal_hours - NORMAL_OVERTIME_FIRST_BAND_CAP).max(Decimal::ZERO);

    let first_band_amount = first_band_hours * hourly_rate * multipliers.first_tier;
    let second_band_amount = second_band_hours * hourly_rate * multipliers.second_tier;
    let rest_amount = rest_hours * hourly_rate * multipliers.rest_day;

    let total = round_half_up(first_band_amount + second_band_amount + rest_amount);

    let reasoning = if total.is_zero() {
        "No overtime hours in the month".to_string()
    } else {
        format!(
            "{} h × {}× + {} h × {}× + {} h rest/holiday × {}× at hourly rate {} = {}",
            first_band_hours.normalize(),
            multipliers.first_tier.normalize(),
            second_band_hours.normalize(),
            multipliers.second_tier.normalize(),
            rest_hours.normalize(),
            multipliers.rest_day.normalize(),
            hourly_rate.round_dp(6).normalize(),
            total.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_value".to_string(),
        rule_name: "Overtime Value".to_string(),
        legal_basis: multipliers.legal_basis.clone(),
        input: serde_json::json!({
            "normal_overtime_hours": normal_hours.normalize().to_string(),
            "rest_overtime_hours": rest_hours.normalize().to_string(),
            "hourly_rate": hourly_rate.round_dp(6).normalize().to_string(),
            "first_band_cap": NORMAL_OVERTIME_FIRST_BAND_CAP.to_string()
        }),
        output: serde_json::json!({
            "first_band_hours": first_band_hours.normalize().to_string(),
            "second_band_hours": second_band_hours.normalize().to_string(),
            "first_band_amount": round_half_up(first_band_amount).normalize().to_string(),
            "second_band_amount": round_half_up(second_band_amount).normalize().to_string(),
            "rest_amount": round_half_up(rest_amount).normalize().to_string(),
            "total": total.normalize().to_string()
        }),
        reasoning,
    };

    OvertimeValueResult {
        first_band_hours,
        second_band_hours,
        rest_hours,
        first_band_amount,
        second_band_amount,
        rest_amount,
        total,
        audit_step,
    }
}
