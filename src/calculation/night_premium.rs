//! Night-work premium.

use rust_decimal::Decimal;

use crate::config::NightWorkConfig;
use crate::models::AuditStep;

use super::rounding::round_half_up;

/// The result of a night premium calculation.
#[derive(Debug, Clone)]
pub struct NightPremiumResult {
    /// The premium at full precision; this is what enters the gross.
    pub amount: Decimal,
    /// The audit step recording the calculation, if any night hours were worked.
    pub audit_step: Option<AuditStep>,
}

/// Calculates the premium for hours worked inside the night band:
/// `night_hours × hourly_rate × premium_rate`.
///
/// No audit step is produced when no night hours were worked.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_night_premium;
/// use payroll_engine::config::PayrollPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::statutory();
/// let hours = Decimal::from(10);
/// let result = calculate_night_premium(hours, Decimal::from(800), &policy.night_work, 1);
/// assert_eq!(result.amount, Decimal::from(1600));
/// ```
pub fn calculate_night_premium(
    night_hours: Decimal,
    hourly_rate: Decimal,
    night_work: &NightWorkConfig,
    step_number: u32,
) -> NightPremiumResult {
    if night_hours <= Decimal::ZERO {
        return NightPremiumResult {
            amount: Decimal::ZERO,
            audit_step: None,
        };
    }

    let amount = night_hours * hourly_rate * night_work.premium_rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_premium".to_string(),
        rule_name: "Night Work Premium".to_string(),
        legal_basis: night_work.legal_basis.clone(),
        input: serde_json::json!({
            "night_hours": night_hours.normalize().to_string(),
            "hourly_rate": hourly_rate.round_dp(6).normalize().to_string(),
            "premium_rate": night_work.premium_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": round_half_up(amount).normalize().to_string()
        }),
        reasoning: format!(
            "{} night hours × {} × {} = {}",
            night_hours.normalize(),
            hourly_rate.round_dp(6).normalize(),
            night_work.premium_rate.normalize(),
            round_half_up(amount).normalize()
        ),
    };

    NightPremiumResult {
        amount,
        audit_step: Some(audit_step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayrollPolicy;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_twenty_percent_of_hourly_rate() {
        let policy = PayrollPolicy::statutory();
        let result = calculate_night_premium(dec("12.5"), dec("800"), &policy.night_work, 3);

        assert_eq!(result.amount, dec("2000"));
        let step = result.audit_step.unwrap();
        assert_eq!(step.step_number, 3);
        assert_eq!(step.rule_id, "night_premium");
        assert_eq!(step.output["amount"].as_str().unwrap(), "2000");
    }

    #[test]
    fn test_amount_keeps_full_precision() {
        let policy = PayrollPolicy::statutory();
        let rate = dec("70000") / dec("220");
        let result = calculate_night_premium(dec("1"), rate, &policy.night_work, 1);

        // 318.1818... × 0.2 = 63.6363...
        assert!(result.amount.scale() > 2);
        assert_eq!(round_half_up(result.amount), dec("63.64"));
    }

    #[test]
    fn test_no_night_hours_no_step() {
        let policy = PayrollPolicy::statutory();
        let result = calculate_night_premium(Decimal::ZERO, dec("800"), &policy.night_work, 1);

        assert_eq!(result.amount, Decimal::ZERO);
        assert!(result.audit_step.is_none());
    }
}
