//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! policies from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{
    IncomeTaxConfig, JurisdictionMetadata, PayrollPolicy, PolicyConfig, PolicyFile, TaxTable,
};

/// Loads and provides access to a payroll policy directory.
///
/// # Directory Structure
///
/// ```text
/// config/ao/
/// ├── jurisdiction.yaml      # Jurisdiction metadata
/// ├── policy.yaml            # INSS rates, overtime multipliers, night work
/// └── income_tax/
///     └── 2020-09-01.yaml    # IRT table effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/ao").unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
/// let policy = loader.policy_for(date).unwrap();
/// println!("INSS employee rate: {}", policy.social_security.employee_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails if a required file is missing, contains invalid YAML, or
    /// describes a structurally invalid tax table.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let jurisdiction =
            Self::load_yaml::<JurisdictionMetadata>(&path.join("jurisdiction.yaml"))?;
        let policy = Self::load_yaml::<PolicyFile>(&path.join("policy.yaml"))?;
        let tax_tables = Self::load_tax_tables(&path.join("income_tax"))?;
        let table_count = tax_tables.len();

        let config = PolicyConfig::new(jurisdiction, policy, tax_tables)?;

        info!(
            path = %path.display(),
            jurisdiction = %config.jurisdiction().code,
            version = %config.jurisdiction().version,
            tax_tables = table_count,
            "Loaded payroll policy"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all tax table files from the income_tax directory.
    fn load_tax_tables(dir: &Path) -> EngineResult<Vec<IncomeTaxConfig>> {
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<IncomeTaxConfig>(&path)?;
                debug!(
                    path = %path.display(),
                    effective_date = %table.effective_date,
                    brackets = table.brackets.len(),
                    "Loaded income tax table"
                );
                tables.push(table);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no tax table files found)", dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// Gets the tax table in force on a given date: the most recent one
    /// effective on or before it.
    pub fn tax_table_for(&self, date: NaiveDate) -> EngineResult<(&IncomeTaxConfig, &TaxTable)> {
        self.config
            .tax_tables()
            .iter()
            .rfind(|(config, _)| config.effective_date <= date)
            .map(|(config, table)| (config, table))
            .ok_or(EngineError::TaxTableNotFound { date })
    }

    /// Assembles the full payroll policy in force on a given date.
    pub fn policy_for(&self, date: NaiveDate) -> EngineResult<PayrollPolicy> {
        let (tax_config, tax_table) = self.tax_table_for(date)?;
        let policy = self.config.policy();

        Ok(PayrollPolicy {
            social_security: policy.social_security.clone(),
            overtime: policy.overtime.clone(),
            night_work: policy.night_work.clone(),
            income_tax_legal_basis: tax_config.legal_basis.clone(),
            tax_table: tax_table.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/ao"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.jurisdiction().code, "AO");
        assert_eq!(loader.jurisdiction().name, "Angola");
    }

    #[test]
    fn test_loaded_policy_matches_statutory() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();

        let policy = loader.policy_for(date).unwrap();
        assert_eq!(policy, PayrollPolicy::statutory());
    }

    #[test]
    fn test_social_security_rates_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rates = &loader.config().policy().social_security;

        assert_eq!(rates.employee_rate, dec("0.03"));
        assert_eq!(rates.employer_rate, dec("0.08"));
    }

    #[test]
    fn test_tax_table_for_date() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();

        let (config, table) = loader.tax_table_for(date).unwrap();
        assert_eq!(
            config.effective_date,
            NaiveDate::from_ymd_opt(2020, 9, 1).unwrap()
        );
        assert_eq!(table.exempt_threshold(), dec("150000"));
    }

    #[test]
    fn test_tax_table_not_found_before_effective_date() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let date = NaiveDate::from_ymd_opt(2019, 12, 31).unwrap();

        match loader.tax_table_for(date) {
            Err(EngineError::TaxTableNotFound { date: d }) => assert_eq!(d, date),
            other => panic!("Expected TaxTableNotFound error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("jurisdiction.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
