//! Batch payroll run models.
//!
//! A [`PayrollRun`] wraps the per-worker results of one batch with the
//! metadata a ledger posting needs. The per-worker figures are pure
//! values; only the run wrapper carries an id and a timestamp.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MonthlyPayrollInput, MonthlyPayrollResult};

/// One worker's monthly input in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerMonth {
    /// Caller-side identifier of the worker.
    pub worker_id: String,
    /// The worker's aggregated inputs.
    pub input: MonthlyPayrollInput,
}

/// A computed payslip for one worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerPayslip {
    /// Caller-side identifier of the worker.
    pub worker_id: String,
    /// The computed figures.
    pub result: MonthlyPayrollResult,
}

/// A worker whose input failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedWorker {
    /// Caller-side identifier of the worker.
    pub worker_id: String,
    /// Why the input was rejected.
    pub reason: String,
}

/// Sums over every accepted worker of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRunTotals {
    /// Total gross income.
    pub gross_income: Decimal,
    /// Total INSS withheld from workers.
    pub social_security_employee: Decimal,
    /// Total INSS owed by the employer.
    pub social_security_employer: Decimal,
    /// Total IRT withheld.
    pub income_tax: Decimal,
    /// Total net pay.
    pub net_pay: Decimal,
}

impl PayrollRunTotals {
    /// Adds one payslip's figures to the totals.
    pub fn add(&mut self, result: &MonthlyPayrollResult) {
        self.gross_income += result.gross_income;
        self.social_security_employee += result.social_security_employee;
        self.social_security_employer += result.social_security_employer;
        self.income_tax += result.income_tax;
        self.net_pay += result.net_pay;
    }
}

/// The outcome of a batch payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// Payslips for accepted workers, in input order.
    pub payslips: Vec<WorkerPayslip>,
    /// Workers whose inputs were rejected, in input order.
    pub rejected: Vec<RejectedWorker>,
    /// Totals over the accepted workers.
    pub totals: PayrollRunTotals,
    /// Wall-clock duration of the run in microseconds.
    pub duration_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result(gross: &str, net: &str) -> MonthlyPayrollResult {
        MonthlyPayrollResult {
            hourly_rate: dec("800"),
            overtime_value: Decimal::ZERO,
            night_premium: Decimal::ZERO,
            gross_income: dec(gross),
            absence_deduction: Decimal::ZERO,
            social_security_base: dec(gross),
            social_security_employee: dec("100"),
            social_security_employer: dec("200"),
            income_tax_base: dec(gross),
            income_tax: dec("50"),
            net_pay: dec(net),
        }
    }

    #[test]
    fn test_totals_accumulate() {
        let mut totals = PayrollRunTotals::default();
        totals.add(&sample_result("1000", "850"));
        totals.add(&sample_result("2000", "1850"));

        assert_eq!(totals.gross_income, dec("3000"));
        assert_eq!(totals.social_security_employee, dec("200"));
        assert_eq!(totals.social_security_employer, dec("400"));
        assert_eq!(totals.income_tax, dec("100"));
        assert_eq!(totals.net_pay, dec("2700"));
    }

    #[test]
    fn test_worker_month_deserialization() {
        let json = r#"{
            "worker_id": "w-001",
            "input": { "base_salary": "176000", "overtime_normal_hours": "10" }
        }"#;

        let worker: WorkerMonth = serde_json::from_str(json).unwrap();
        assert_eq!(worker.worker_id, "w-001");
        assert_eq!(worker.input.overtime_normal_hours, dec("10"));
    }
}
