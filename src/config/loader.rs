//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! settings from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::CalculationConfig;

use super::types::{EngineSettings, InvoicingSettings, PayrollSettings};

/// Loads and provides access to engine settings.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── invoicing.yaml  # Document calculation defaults
/// └── payroll.yaml    # Minimum wage and transport aid rules
/// ```
///
/// # Example
///
/// ```no_run
/// use finance_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let config = loader.calculation_config();
/// let eligible = loader.payroll().transport_aid_applies(Decimal::from(1_300_000));
/// # Ok::<(), finance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: EngineSettings,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if either file is missing
    /// - `ConfigParseError` if a file contains invalid YAML or lacks a
    ///   required field
    /// - `InvalidConfig` if a value is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let invoicing = Self::load_yaml::<InvoicingSettings>(&path.join("invoicing.yaml"))?;
        let payroll = Self::load_yaml::<PayrollSettings>(&path.join("payroll.yaml"))?;

        Self::validate(&invoicing, &payroll)?;

        Ok(Self {
            settings: EngineSettings::new(invoicing, payroll),
        })
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

    fn validate(invoicing: &InvoicingSettings, payroll: &PayrollSettings) -> EngineResult<()> {
        if invoicing.retention_percent < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "retention_percent".to_string(),
                message: format!("must not be negative, got {}", invoicing.retention_percent),
            });
        }
        if payroll.minimum_wage <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "minimum_wage".to_string(),
                message: format!("must be positive, got {}", payroll.minimum_wage),
            });
        }
        if payroll.transport_aid_max_minimum_wages < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "transport_aid_max_minimum_wages".to_string(),
                message: format!(
                    "must not be negative, got {}",
                    payroll.transport_aid_max_minimum_wages
                ),
            });
        }
        Ok(())
    }

    /// Returns the underlying settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the document calculation defaults.
    pub fn invoicing(&self) -> &InvoicingSettings {
        self.settings.invoicing()
    }

    /// Returns the payroll rules.
    pub fn payroll(&self) -> &PayrollSettings {
        self.settings.payroll()
    }

    /// Returns the default config for line calculations.
    pub fn calculation_config(&self) -> CalculationConfig {
        self.settings.invoicing().calculation_config()
    }
}
