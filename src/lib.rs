//! Payroll and labour-tax engine for Angola
//!
//! This crate turns daily attendance into regular, overtime and night
//! hours, and turns a worker-month of aggregates into gross pay, INSS
//! social-security contributions, IRT income tax and net pay, with an
//! audit trail for every rule applied.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
