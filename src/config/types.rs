//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed policy structures, the
//! statutory defaults, and the shapes deserialized from YAML policy files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::NightBand;

/// Metadata about the jurisdiction a policy directory describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionMetadata {
    /// ISO country code (e.g., "AO").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Version label of the policy set.
    pub version: String,
    /// Where the rules come from.
    pub source: String,
}

/// One row of a progressive income-tax table.
///
/// Tax for a base inside this bracket is
/// `fixed_amount + (base - excess_over) * rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound; `None` for the open-ended top bracket.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Fixed parcel owed by every base in this bracket.
    pub fixed_amount: Decimal,
    /// Marginal rate applied to the excess.
    pub rate: Decimal,
    /// Amount the marginal rate is applied above.
    pub excess_over: Decimal,
}

const fn bracket(upper: Option<u32>, fixed: u32, rate_permille: u32, excess: u32) -> TaxBracket {
    TaxBracket {
        upper_bound: match upper {
            Some(bound) => Some(Decimal::from_parts(bound, 0, 0, false, 0)),
            None => None,
        },
        fixed_amount: Decimal::from_parts(fixed, 0, 0, false, 0),
        rate: Decimal::from_parts(rate_permille, 0, 0, false, 3),
        excess_over: Decimal::from_parts(excess, 0, 0, false, 0),
    }
}

/// The IRT Grupo A table. The fixed parcels are statutory and are not
/// the cumulative tax of the previous bracket.
pub const STATUTORY_IRT_BRACKETS: [TaxBracket; 11] = [
    bracket(Some(150_000), 0, 0, 0),
    bracket(Some(200_000), 12_500, 160, 150_000),
    bracket(Some(300_000), 31_250, 180, 200_000),
    bracket(Some(500_000), 49_250, 190, 300_000),
    bracket(Some(1_000_000), 87_250, 200, 500_000),
    bracket(Some(1_500_000), 187_250, 210, 1_000_000),
    bracket(Some(2_000_000), 292_250, 220, 1_500_000),
    bracket(Some(2_500_000), 402_250, 230, 2_000_000),
    bracket(Some(5_000_000), 517_250, 240, 2_500_000),
    bracket(Some(10_000_000), 1_117_250, 245, 5_000_000),
    bracket(None, 2_342_250, 250, 10_000_000),
];

/// A validated, ordered income-tax bracket table.
///
/// The first bracket is the exempt band (zero fixed amount, zero rate);
/// only the last bracket is open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxTable {
    brackets: Vec<TaxBracket>,
}

impl TaxTable {
    /// Builds a table after checking its structure.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::{TaxTable, STATUTORY_IRT_BRACKETS};
    ///
    /// let table = TaxTable::new(STATUTORY_IRT_BRACKETS.to_vec()).unwrap();
    /// assert_eq!(table.brackets().len(), 11);
    /// ```
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        let invalid = |message: String| EngineError::InvalidTaxTable { message };

        let first = brackets
            .first()
            .ok_or_else(|| invalid("table has no brackets".to_string()))?;
        if first.upper_bound.is_none() {
            return Err(invalid("exempt band must have an upper bound".to_string()));
        }
        if !first.rate.is_zero() || !first.fixed_amount.is_zero() {
            return Err(invalid(
                "first bracket must be an exempt band with zero rate and fixed amount".to_string(),
            ));
        }

        let last_index = brackets.len() - 1;
        let mut previous_bound: Option<Decimal> = None;
        for (index, b) in brackets.iter().enumerate() {
            if b.rate < Decimal::ZERO || b.rate > Decimal::ONE {
                return Err(invalid(format!("bracket {} has rate {} outside 0..=1", index, b.rate)));
            }
            if b.fixed_amount < Decimal::ZERO || b.excess_over < Decimal::ZERO {
                return Err(invalid(format!("bracket {} has a negative amount", index)));
            }
            match (b.upper_bound, index == last_index) {
                (None, true) => {}
                (None, false) => {
                    return Err(invalid(format!(
                        "only the last bracket may be open-ended, bracket {} is",
                        index
                    )));
                }
                (Some(_), true) => {
                    return Err(invalid("last bracket must be open-ended".to_string()));
                }
                (Some(bound), false) => {
                    if previous_bound.is_some_and(|prev| bound <= prev) {
                        return Err(invalid(format!(
                            "upper bounds must be ascending, bracket {} bound {} is not",
                            index, bound
                        )));
                    }
                    previous_bound = Some(bound);
                }
            }
        }

        Ok(Self { brackets })
    }

    /// The statutory IRT Grupo A table.
    pub fn statutory() -> Self {
        Self {
            brackets: STATUTORY_IRT_BRACKETS.to_vec(),
        }
    }

    /// All brackets, lowest first.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Bases at or below this amount owe no tax.
    pub fn exempt_threshold(&self) -> Decimal {
        self.brackets
            .first()
            .and_then(|b| b.upper_bound)
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the index and bracket of the first bracket whose upper bound is at or above `base`.
    pub fn bracket_for(&self, base: Decimal) -> (usize, &TaxBracket) {
        let last_index = self.brackets.len() - 1;
        self.brackets
            .iter()
            .enumerate()
            .find(|(_, b)| b.upper_bound.is_none_or(|bound| base <= bound))
            .unwrap_or((last_index, &self.brackets[last_index]))
    }
}

impl Default for TaxTable {
    fn default() -> Self {
        Self::statutory()
    }
}

/// INSS contribution rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityRates {
    /// Regulation the rates come from.
    pub legal_basis: String,
    /// Share withheld from the worker.
    pub employee_rate: Decimal,
    /// Share paid by the employer.
    pub employer_rate: Decimal,
}

/// Overtime pay multipliers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeMultipliers {
    /// Statute the multipliers come from.
    pub legal_basis: String,
    /// Tier-1 hours up to the monthly cap.
    pub first_tier: Decimal,
    /// Tier-1 hours beyond the monthly cap.
    pub second_tier: Decimal,
    /// Tier-2 (rest day and holiday) hours.
    pub rest_day: Decimal,
}

/// Night-work band and premium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightWorkConfig {
    /// Statute the premium comes from.
    pub legal_basis: String,
    /// The night band.
    #[serde(flatten)]
    pub band: NightBand,
    /// Premium as a fraction of the hourly rate.
    pub premium_rate: Decimal,
}

/// The policy.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// INSS rates.
    pub social_security: SocialSecurityRates,
    /// Overtime multipliers.
    pub overtime: OvertimeMultipliers,
    /// Night-work band and premium.
    pub night_work: NightWorkConfig,
}

/// An effective-dated income-tax table file.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxConfig {
    /// The date from which this table applies.
    pub effective_date: NaiveDate,
    /// Statute the table comes from.
    pub legal_basis: String,
    /// Brackets, lowest first.
    pub brackets: Vec<TaxBracket>,
}

/// Every rate and table a monthly payroll calculation needs.
///
/// [`PayrollPolicy::statutory`] carries the rules in force; a policy can
/// also be loaded from YAML with [`ConfigLoader`](super::ConfigLoader).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollPolicy {
    /// INSS rates.
    pub social_security: SocialSecurityRates,
    /// Overtime multipliers.
    pub overtime: OvertimeMultipliers,
    /// Night-work band and premium.
    pub night_work: NightWorkConfig,
    /// Statute the tax table comes from.
    pub income_tax_legal_basis: String,
    /// The IRT table.
    pub tax_table: TaxTable,
}

impl PayrollPolicy {
    /// The statutory Angolan policy: INSS 3 % / 8 %, overtime 1.5 / 1.75 / 2.0,
    /// 20 % night premium on 20:00-06:00, IRT Grupo A table.
    pub fn statutory() -> Self {
        Self {
            social_security: SocialSecurityRates {
                legal_basis: "Decreto Presidencial 227/18".to_string(),
                employee_rate: Decimal::from_parts(3, 0, 0, false, 2),
                employer_rate: Decimal::from_parts(8, 0, 0, false, 2),
            },
            overtime: OvertimeMultipliers {
                legal_basis: "LGT (Lei 7/15)".to_string(),
                first_tier: Decimal::from_parts(15, 0, 0, false, 1),
                second_tier: Decimal::from_parts(175, 0, 0, false, 2),
                rest_day: Decimal::from_parts(2, 0, 0, false, 0),
            },
            night_work: NightWorkConfig {
                legal_basis: "LGT (Lei 7/15)".to_string(),
                band: NightBand::default(),
                premium_rate: Decimal::from_parts(20, 0, 0, false, 2),
            },
            income_tax_legal_basis: "Código do IRT, Grupo A".to_string(),
            tax_table: TaxTable::statutory(),
        }
    }
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self::statutory()
    }
}

/// The complete policy configuration loaded from a YAML directory.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    jurisdiction: JurisdictionMetadata,
    policy: PolicyFile,
    /// Tax tables by effective date (sorted oldest first).
    tax_tables: Vec<(IncomeTaxConfig, TaxTable)>,
}

impl PolicyConfig {
    /// Creates a PolicyConfig from its component parts, validating every tax table.
    pub fn new(
        jurisdiction: JurisdictionMetadata,
        policy: PolicyFile,
        tax_tables: Vec<IncomeTaxConfig>,
    ) -> EngineResult<Self> {
        let mut validated = tax_tables
            .into_iter()
            .map(|config| {
                let table = TaxTable::new(config.brackets.clone())?;
                Ok((config, table))
            })
            .collect::<EngineResult<Vec<_>>>()?;
        validated.sort_by(|a, b| a.0.effective_date.cmp(&b.0.effective_date));

        Ok(Self {
            jurisdiction,
            policy,
            tax_tables: validated,
        })
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.jurisdiction
    }

    /// Returns the rate policy.
    pub fn policy(&self) -> &PolicyFile {
        &self.policy
    }

    /// Returns every tax table with its source configuration, oldest first.
    pub fn tax_tables(&self) -> &[(IncomeTaxConfig, TaxTable)] {
        &self.tax_tables
    }
}
