//! Batch payroll runs.
//!
//! Workers are computed independently on rayon's pool. A worker whose
//! input fails validation is reported as rejected; it never aborts the
//! rest of the run. Output order follows input order.

use std::time::Instant;

use chrono::Utc;
use rayon::prelude::*;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::PayrollPolicy;
use crate::models::{PayrollRun, PayrollRunTotals, RejectedWorker, WorkerMonth, WorkerPayslip};

use super::monthly_payroll::calculate_monthly_payroll;

/// Computes payroll for every worker in `workers` under `policy`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::run_payroll_batch;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::{MonthlyPayrollInput, WorkerMonth};
/// use rust_decimal::Decimal;
///
/// let workers = vec![
///     WorkerMonth {
///         worker_id: "w-1".to_string(),
///         input: MonthlyPayrollInput::with_base_salary(Decimal::from(70000)),
///     },
///     WorkerMonth {
///         worker_id: "w-2".to_string(),
///         input: MonthlyPayrollInput::with_base_salary(Decimal::from(-5)),
///     },
/// ];
///
/// let run = run_payroll_batch(workers, &PayrollPolicy::statutory());
/// assert_eq!(run.payslips.len(), 1);
/// assert_eq!(run.rejected[0].worker_id, "w-2");
/// assert_eq!(run.totals.net_pay, Decimal::from(67900));
/// ```
pub fn run_payroll_batch(workers: Vec<WorkerMonth>, policy: &PayrollPolicy) -> PayrollRun {
    let run_id = Uuid::new_v4();
    let start_time = Instant::now();
    let worker_count = workers.len();

    info!(run_id = %run_id, workers = worker_count, "Starting payroll run");

    let outcomes: Vec<Result<WorkerPayslip, RejectedWorker>> = workers
        .into_par_iter()
        .map(|worker| {
            match calculate_monthly_payroll(&worker.input, policy, 1) {
                Ok(calc) => Ok(WorkerPayslip {
                    worker_id: worker.worker_id,
                    result: calc.result,
                }),
                Err(err) => {
                    warn!(
                        run_id = %run_id,
                        worker_id = %worker.worker_id,
                        error = %err,
                        "Worker rejected"
                    );
                    Err(RejectedWorker {
                        worker_id: worker.worker_id,
                        reason: err.to_string(),
                    })
                }
            }
        })
        .collect();

    let mut payslips = Vec::with_capacity(worker_count);
    let mut rejected = Vec::new();
    let mut totals = PayrollRunTotals::default();

    for outcome in outcomes {
        match outcome {
            Ok(payslip) => {
                totals.add(&payslip.result);
                payslips.push(payslip);
            }
            Err(rejection) => rejected.push(rejection),
        }
    }

    let duration_us = u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX);

    info!(
        run_id = %run_id,
        accepted = payslips.len(),
        rejected = rejected.len(),
        gross_income = %totals.gross_income,
        net_pay = %totals.net_pay,
        duration_us = duration_us,
        "Payroll run completed"
    );

    PayrollRun {
        run_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        payslips,
        rejected,
        totals,
        duration_us,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_monthly_payroll;
    use crate::models::MonthlyPayrollInput;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn worker(id: &str, base: &str) -> WorkerMonth {
        WorkerMonth {
            worker_id: id.to_string(),
            input: MonthlyPayrollInput::with_base_salary(dec(base)),
        }
    }

    #[test]
    fn test_empty_run() {
        let run = run_payroll_batch(Vec::new(), &PayrollPolicy::statutory());

        assert!(run.payslips.is_empty());
        assert!(run.rejected.is_empty());
        assert_eq!(run.totals, PayrollRunTotals::default());
        assert_eq!(run.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_preserves_input_order() {
        let workers: Vec<WorkerMonth> = (0..200)
            .map(|i| worker(&format!("w-{:03}", i), &format!("{}", 60000 + i * 1000)))
            .collect();

        let run = run_payroll_batch(workers, &PayrollPolicy::statutory());

        assert_eq!(run.payslips.len(), 200);
        for (i, payslip) in run.payslips.iter().enumerate() {
            assert_eq!(payslip.worker_id, format!("w-{:03}", i));
        }
    }

    #[test]
    fn test_results_match_single_calculation() {
        let workers = vec![worker("a", "70000"), worker("b", "150000"), worker("c", "500000")];
        let expected: Vec<_> = workers
            .iter()
            .map(|w| compute_monthly_payroll(&w.input).unwrap())
            .collect();

        let run = run_payroll_batch(workers, &PayrollPolicy::statutory());

        let actual: Vec<_> = run.payslips.iter().map(|p| p.result.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_totals_over_accepted_workers() {
        let workers = vec![worker("a", "70000"), worker("b", "-1"), worker("c", "500000")];

        let run = run_payroll_batch(workers, &PayrollPolicy::statutory());

        assert_eq!(run.totals.gross_income, dec("570000"));
        assert_eq!(run.totals.social_security_employee, dec("17100"));
        assert_eq!(run.totals.social_security_employer, dec("45600"));
        assert_eq!(run.totals.income_tax, dec("84400"));
        assert_eq!(run.totals.net_pay, dec("468500"));
    }

    #[test]
    fn test_rejected_worker_carries_reason() {
        let mut bad = worker("bad", "100000");
        bad.input.unjustified_absence_days = 40;

        let workers = vec![bad, worker("good", "100000")];
        let run = run_payroll_batch(workers, &PayrollPolicy::statutory());

        assert_eq!(run.payslips.len(), 1);
        assert_eq!(run.payslips[0].worker_id, "good");
        assert_eq!(run.rejected.len(), 1);
        assert_eq!(run.rejected[0].worker_id, "bad");
        assert!(run.rejected[0].reason.contains("unjustified_absence_days"));
    }

    #[test]
    fn test_run_ids_are_unique() {
        let policy = PayrollPolicy::statutory();
        let first = run_payroll_batch(vec![worker("a", "70000")], &policy);
        let second = run_payroll_batch(vec![worker("a", "70000")], &policy);

        assert_ne!(first.run_id, second.run_id);
        assert_eq!(first.payslips, second.payslips);
    }
}
