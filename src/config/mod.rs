//! Configuration loading and management for the payroll engine.
//!
//! The statutory rules are built in ([`PayrollPolicy::statutory`]). This
//! module can also load a policy from YAML files, with income-tax tables
//! selected by effective date.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/ao").unwrap();
//! println!("Loaded policy: {}", loader.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    IncomeTaxConfig, JurisdictionMetadata, NightWorkConfig, OvertimeMultipliers, PayrollPolicy,
    PolicyConfig, PolicyFile, STATUTORY_IRT_BRACKETS, SocialSecurityRates, TaxBracket, TaxTable,
};
