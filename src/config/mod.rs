//! Configuration loading for the finance engine.
//!
//! This module loads document calculation defaults and payroll eligibility
//! rules from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use finance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Minimum wage: {}", config.payroll().minimum_wage);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineSettings, InvoicingSettings, PayrollSettings};
