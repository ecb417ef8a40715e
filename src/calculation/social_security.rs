//! INSS social-security contributions.
//!
//! Both shares are computed independently from the same base. The
//! employer share is reported but never reduces the worker's pay.

use rust_decimal::Decimal;

use crate::config::SocialSecurityRates;
use crate::models::AuditStep;

use super::rounding::round_half_up;

/// The result of the INSS calculation.
#[derive(Debug, Clone)]
pub struct SocialSecurityResult {
    /// Share withheld from the worker, rounded to 2 dp.
    pub employee: Decimal,
    /// Share paid by the employer, rounded to 2 dp.
    pub employer: Decimal,
    /// The audit step recording the calculation.
    pub audit_step: AuditStep,
}

/// Calculates both INSS shares on the adjusted gross.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_social_security;
/// use payroll_engine::config::PayrollPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::statutory();
/// let result = calculate_social_security(Decimal::from(70000), &policy.social_security, 1);
/// assert_eq!(result.employee, Decimal::from(2100));
/// assert_eq!(result.employer, Decimal::from(5600));
/// ```
pub fn calculate_social_security(
    base: Decimal,
    rates: &SocialSecurityRates,
    step_number: u32,
) -> SocialSecurityResult {
    let employee = round_half_up(base * rates.employee_rate);
    let employer = round_half_up(base * rates.employer_rate);

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_security".to_string(),
        rule_name: "INSS Contributions".to_string(),
        legal_basis: rates.legal_basis.clone(),
        input: serde_json::json!({
            "base": base.normalize().to_string(),
            "employee_rate": rates.employee_rate.normalize().to_string(),
            "employer_rate": rates.employer_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "employee": employee.normalize().to_string(),
            "employer": employer.normalize().to_string()
        }),
        reasoning: format!(
            "INSS on {}: worker {}% = {}, employer {}% = {} (employer share not deducted)",
            base.normalize(),
            (rates.employee_rate * Decimal::ONE_HUNDRED).normalize(),
            employee.normalize(),
            (rates.employer_rate * Decimal::ONE_HUNDRED).normalize(),
            employer.normalize()
        ),
    };

    SocialSecurityResult {
        employee,
        employer,
        audit_step,
    }
}
