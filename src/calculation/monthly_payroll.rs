//! Monthly payroll orchestration.
//!
//! Chains the per-rule calculations for one worker-month and collects the
//! audit trail. Intermediate values stay at full precision until a step
//! explicitly rounds them.

use tracing::debug;

use crate::config::PayrollPolicy;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, MonthlyPayrollCalculation, MonthlyPayrollInput,
    MonthlyPayrollResult,
};

use super::absence_deduction::apply_absence_deduction;
use super::hourly_rate::calculate_hourly_rate;
use super::income_tax::calculate_income_tax;
use super::night_premium::calculate_night_premium;
use super::overtime_value::calculate_overtime_value;
use super::rounding::round_half_up;
use super::social_security::calculate_social_security;

/// Computes one worker-month under the statutory policy.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_monthly_payroll;
/// use payroll_engine::models::MonthlyPayrollInput;
/// use rust_decimal::Decimal;
///
/// let input = MonthlyPayrollInput::with_base_salary(Decimal::from(500000));
/// let result = compute_monthly_payroll(&input).unwrap();
///
/// assert_eq!(result.social_security_employee, Decimal::from(15000));
/// assert_eq!(result.income_tax_base, Decimal::from(485000));
/// assert_eq!(result.income_tax, Decimal::from(84400));
/// assert_eq!(result.net_pay, Decimal::from(400600));
/// ```
pub fn compute_monthly_payroll(input: &MonthlyPayrollInput) -> EngineResult<MonthlyPayrollResult> {
    calculate_monthly_payroll(input, &PayrollPolicy::statutory(), 1).map(|calc| calc.result)
}

/// Computes one worker-month under `policy`, recording every step.
///
/// Audit steps are numbered from `start_step`. Fails without computing
/// anything when the input does not validate.
pub fn calculate_monthly_payroll(
    input: &MonthlyPayrollInput,
    policy: &PayrollPolicy,
    start_step: u32,
) -> EngineResult<MonthlyPayrollCalculation> {
    input.validate()?;

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number = start_step;

    let hourly = calculate_hourly_rate(input.base_salary, input.weekly_work_hours, step_number)?;
    let hourly_rate = hourly.rate;
    steps.push(hourly.audit_step);
    step_number += 1;

    let overtime = calculate_overtime_value(
        input.overtime_normal_hours,
        input.overtime_rest_hours,
        hourly_rate,
        &policy.overtime,
        step_number,
    );
    steps.push(overtime.audit_step);
    step_number += 1;

    let night = calculate_night_premium(
        input.night_hours,
        hourly_rate,
        &policy.night_work,
        step_number,
    );
    if let Some(step) = night.audit_step {
        steps.push(step);
        step_number += 1;
    }

    let gross_income =
        input.base_salary + input.taxable_allowances + overtime.total + night.amount;
    steps.push(AuditStep {
        step_number,
        rule_id: "gross_income".to_string(),
        rule_name: "Gross Income".to_string(),
        legal_basis: "LGT (Lei 7/15)".to_string(),
        input: serde_json::json!({
            "base_salary": input.base_salary.normalize().to_string(),
            "taxable_allowances": input.taxable_allowances.normalize().to_string(),
            "overtime_value": overtime.total.normalize().to_string(),
            "night_premium": round_half_up(night.amount).normalize().to_string()
        }),
        output: serde_json::json!({
            "gross_income": round_half_up(gross_income).normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} + {} + {} = {}",
            input.base_salary.normalize(),
            input.taxable_allowances.normalize(),
            overtime.total.normalize(),
            round_half_up(night.amount).normalize(),
            round_half_up(gross_income).normalize()
        ),
    });
    step_number += 1;

    let absence = apply_absence_deduction(
        gross_income,
        input.base_salary,
        input.unjustified_absence_days,
        step_number,
    );
    if absence.floored {
        warnings.push(AuditWarning {
            code: "ADJUSTED_GROSS_FLOORED".to_string(),
            message: format!(
                "Deduction for {} unjustified absence days exceeds the gross; \
                 social-security base set to 0",
                input.unjustified_absence_days
            ),
            severity: "medium".to_string(),
        });
    }
    let social_security_base = absence.adjusted_gross;
    steps.push(absence.audit_step);
    step_number += 1;

    let inss =
        calculate_social_security(social_security_base, &policy.social_security, step_number);
    steps.push(inss.audit_step);
    step_number += 1;

    let income_tax_base = round_half_up(social_security_base - inss.employee);
    let irt = calculate_income_tax(
        income_tax_base,
        &policy.tax_table,
        &policy.income_tax_legal_basis,
        step_number,
    );
    steps.push(irt.audit_step);
    step_number += 1;

    let net_pay = round_half_up(income_tax_base - irt.tax + input.exempt_allowances);
    steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        legal_basis: policy.income_tax_legal_basis.clone(),
        input: serde_json::json!({
            "income_tax_base": income_tax_base.normalize().to_string(),
            "income_tax": irt.tax.normalize().to_string(),
            "exempt_allowances": input.exempt_allowances.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_pay": net_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{} - {} + {} exempt allowances = {}",
            income_tax_base.normalize(),
            irt.tax.normalize(),
            input.exempt_allowances.normalize(),
            net_pay.normalize()
        ),
    });

    let result = MonthlyPayrollResult {
        hourly_rate,
        overtime_value: overtime.total,
        night_premium: round_half_up(night.amount),
        gross_income: round_half_up(gross_income),
        absence_deduction: absence.applied_deduction,
        social_security_base,
        social_security_employee: inss.employee,
        social_security_employer: inss.employer,
        income_tax_base,
        income_tax: irt.tax,
        net_pay,
    };

    debug!(
        gross_income = %result.gross_income,
        social_security_base = %result.social_security_base,
        income_tax = %result.income_tax,
        net_pay = %result.net_pay,
        bracket = ?irt.bracket_index,
        "Monthly payroll computed"
    );

    Ok(MonthlyPayrollCalculation {
        result,
        audit_trace: AuditTrace { steps, warnings },
    })
}
