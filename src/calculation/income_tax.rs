//! Progressive IRT income-tax calculation.
//!
//! Bases at or below the exempt threshold owe nothing. Above it, the first
//! bracket whose upper bound is at or above the base applies:
//! `fixed_amount + (base - excess_over) * rate`, rounded to 2 dp. A base
//! exactly on an upper bound belongs to that bracket, not the next.

use rust_decimal::Decimal;

use crate::config::TaxTable;
use crate::models::AuditStep;

use super::rounding::round_half_up;

/// The result of an income-tax calculation.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// The tax liability, rounded to 2 dp.
    pub tax: Decimal,
    /// Index of the bracket applied, or `None` when the base is exempt.
    pub bracket_index: Option<usize>,
    /// The audit step recording the calculation.
    pub audit_step: AuditStep,
}

/// Calculates the IRT owed on a taxable base.
///
/// # Examples
///
/// ## Exempt base
///
/// ```
/// use payroll_engine::calculation::calculate_income_tax;
/// use payroll_engine::config::TaxTable;
/// use rust_decimal::Decimal;
///
/// let result = calculate_income_tax(Decimal::from(145500), &TaxTable::statutory(), "IRT", 1);
/// assert_eq!(result.tax, Decimal::ZERO);
/// assert!(result.bracket_index.is_none());
/// ```
///
/// ## Taxed base
///
/// ```
/// use payroll_engine::calculation::calculate_income_tax;
/// use payroll_engine::config::TaxTable;
/// use rust_decimal::Decimal;
///
/// // 49 250 + (485 000 - 300 000) × 19 %
/// let result = calculate_income_tax(Decimal::from(485000), &TaxTable::statutory(), "IRT", 1);
/// assert_eq!(result.tax, Decimal::from(84400));
/// ```
pub fn calculate_income_tax(
    base: Decimal,
    table: &TaxTable,
    legal_basis: &str,
    step_number: u32,
) -> IncomeTaxResult {
    let exempt_threshold = table.exempt_threshold();

    if base <= exempt_threshold {
        let audit_step = AuditStep {
            step_number,
            rule_id: "income_tax".to_string(),
            rule_name: "IRT Income Tax".to_string(),
            legal_basis: legal_basis.to_string(),
            input: serde_json::json!({
                "taxable_base": base.normalize().to_string(),
                "exempt_threshold": exempt_threshold.normalize().to_string()
            }),
            output: serde_json::json!({
                "tax": "0",
                "bracket": null
            }),
            reasoning: format!(
                "Taxable base {} is within the {} exemption, no IRT due",
                base.normalize(),
                exempt_threshold.normalize()
            ),
        };
        return IncomeTaxResult {
            tax: Decimal::ZERO,
            bracket_index: None,
            audit_step,
        };
    }

    let (index, bracket) = table.bracket_for(base);
    let tax = round_half_up(bracket.fixed_amount + (base - bracket.excess_over) * bracket.rate);

    let upper_bound = bracket
        .upper_bound
        .map(|bound| bound.normalize().to_string())
        .unwrap_or_else(|| "unbounded".to_string());

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "IRT Income Tax".to_string(),
        legal_basis: legal_basis.to_string(),
        input: serde_json::json!({
            "taxable_base": base.normalize().to_string(),
            "exempt_threshold": exempt_threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "tax": tax.normalize().to_string(),
            "bracket": index,
            "upper_bound": upper_bound,
            "fixed_amount": bracket.fixed_amount.normalize().to_string(),
            "rate": bracket.rate.normalize().to_string(),
            "excess_over": bracket.excess_over.normalize().to_string()
        }),
        reasoning: format!(
            "Bracket {} (up to {}): {} + ({} - {}) × {}% = {}",
            index,
            upper_bound,
            bracket.fixed_amount.normalize(),
            base.normalize(),
            bracket.excess_over.normalize(),
            (bracket.rate * Decimal::ONE_HUNDRED).normalize(),
            tax.normalize()
        ),
    };

    IncomeTaxResult {
        tax,
        bracket_index: Some(index),
        audit_step,
    }
}
