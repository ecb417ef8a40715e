//! Unjustified-absence deduction.
//!
//! Each unjustified absence costs one thirtieth of the base salary. The
//! adjusted gross is floored at zero and rounded; it becomes the INSS base.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::hourly_rate::DAYS_PER_MONTH;
use super::rounding::round_half_up;

/// The result of applying absences to the gross.
#[derive(Debug, Clone)]
pub struct AbsenceAdjustmentResult {
    /// The deduction at full precision.
    pub deduction: Decimal,
    /// The deduction as reported on the payslip, rounded to 2 dp.
    ///
    /// Without the floor this is exactly `round(gross) - adjusted_gross`, so the
    /// reported figures reconcile to the cent. When the floor applies it is the
    /// rounded statutory deduction and exceeds the gross.
    pub applied_deduction: Decimal,
    /// Gross after the deduction, floored at zero and rounded to 2 dp.
    pub adjusted_gross: Decimal,
    /// True when the deduction exceeded the gross and the floor applied.
    pub floored: bool,
    /// The audit step recording the adjustment.
    pub audit_step: AuditStep,
}

/// Applies the unjustified-absence deduction to the unrounded gross.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::apply_absence_deduction;
/// use rust_decimal::Decimal;
///
/// let result = apply_absence_deduction(Decimal::from(90000), Decimal::from(90000), 2, 1);
/// assert_eq!(result.deduction, Decimal::from(6000));
/// assert_eq!(result.adjusted_gross, Decimal::from(84000));
/// ```
pub fn apply_absence_deduction(
    gross_income: Decimal,
    base_salary: Decimal,
    absence_days: u32,
    step_number: u32,
) -> AbsenceAdjustmentResult {
    let deduction = (base_salary / DAYS_PER_MONTH) * Decimal::from(absence_days);
    let remaining = gross_income - deduction;
    let floored = remaining < Decimal::ZERO;
    let adjusted_gross = round_half_up(remaining.max(Decimal::ZERO));
    let applied_deduction = if floored {
        round_half_up(deduction)
    } else {
        round_half_up(gross_income) - adjusted_gross
    };

    let reasoning = if absence_days == 0 {
        format!(
            "No unjustified absences, base is the gross {}",
            adjusted_gross.normalize()
        )
    } else if floored {
        format!(
            "{} absence days × ({} / 30) = {} exceeds gross {}, base floored at 0",
            absence_days,
            base_salary.normalize(),
            applied_deduction.normalize(),
            round_half_up(gross_income).normalize()
        )
    } else {
        format!(
            "{} absence days × ({} / 30) = {} deducted, base {}",
            absence_days,
            base_salary.normalize(),
            applied_deduction.normalize(),
            adjusted_gross.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "absence_deduction".to_string(),
        rule_name: "Unjustified Absence Deduction".to_string(),
        legal_basis: "LGT (Lei 7/15)".to_string(),
        input: serde_json::json!({
            "gross_income": round_half_up(gross_income).normalize().to_string(),
            "base_salary": base_salary.normalize().to_string(),
            "absence_days": absence_days
        }),
        output: serde_json::json!({
            "deduction": applied_deduction.normalize().to_string(),
            "adjusted_gross": adjusted_gross.normalize().to_string(),
            "floored": floored
        }),
        reasoning,
    };

    AbsenceAdjustmentResult {
        deduction,
        applied_deduction,
        adjusted_gross,
        floored,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_no_absences_rounds_gross() {
        let result = apply_absence_deduction(dec("70477.2727"), dec("70000"), 0, 1);

        assert_eq!(result.deduction, Decimal::ZERO);
        assert_eq!(result.applied_deduction, Decimal::ZERO);
        assert_eq!(result.adjusted_gross, dec("70477.27"));
        assert!(!result.floored);
    }

    #[test]
    fn test_one_thirtieth_per_day() {
        let result = apply_absence_deduction(dec("150000"), dec("150000"), 3, 1);

        assert_eq!(result.deduction, dec("15000"));
        assert_eq!(result.adjusted_gross, dec("135000"));
    }

    #[test]
    fn test_deduction_rounded_only_through_adjusted_gross() {
        // 100000 / 30 = 3333.333...
        let result = apply_absence_deduction(dec("100000"), dec("100000"), 1, 1);

        assert_eq!(result.adjusted_gross, dec("96666.67"));
    }

    #[test]
    fn test_applied_deduction_reconciles_with_rounded_gross() {
        // 100000.05 / 30 = 3333.335, which alone would round to 3333.34
        let result = apply_absence_deduction(dec("100000.05"), dec("100000.05"), 1, 1);

        assert_eq!(result.adjusted_gross, dec("96666.72"));
        assert_eq!(result.applied_deduction, dec("3333.33"));
        assert_eq!(
            round_half_up(dec("100000.05")) - result.applied_deduction,
            result.adjusted_gross
        );
    }

    #[test]
    fn test_applied_deduction_when_floored_is_statutory_amount() {
        let result = apply_absence_deduction(dec("60000"), dec("60000"), 31, 1);

        assert!(result.floored);
        assert_eq!(result.applied_deduction, dec("62000"));
    }

    #[test]
    fn test_deduction_uses_base_not_gross() {
        let result = apply_absence_deduction(dec("130000"), dec("90000"), 1, 1);

        assert_eq!(result.adjusted_gross, dec("127000"));
    }

    #[test]
    fn test_floor_at_zero() {
        let result = apply_absence_deduction(dec("60000"), dec("60000"), 31, 1);

        assert_eq!(result.adjusted_gross, Decimal::ZERO);
        assert!(result.floored);
        assert!(result.audit_step.reasoning.contains("floored"));
        assert_eq!(result.audit_step.output["floored"], true);
    }

    #[test]
    fn test_thirty_days_exactly_zero_without_floor() {
        let result = apply_absence_deduction(dec("60000"), dec("60000"), 30, 1);

        assert_eq!(result.adjusted_gross, Decimal::ZERO);
        assert!(!result.floored);
    }
}
