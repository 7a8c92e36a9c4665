//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeProfile;

use super::types::{CurrencyFormat, EmployeesConfig, EngineSettings};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml     # Local UTC offset and currency format
/// └── employees.yaml  # Seed employee profiles
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Currency: {}", loader.currency().code);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: EngineSettings,
    offset: FixedOffset,
    employees: Vec<EmployeeProfile>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML, or
    /// if `utc_offset_minutes` is outside ±24 hours.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine_path = path.join("engine.yaml");
        let settings = Self::load_yaml::<EngineSettings>(&engine_path)?;

        let employees_path = path.join("employees.yaml");
        let employees = Self::load_yaml::<EmployeesConfig>(&employees_path)?.employees;

        let offset = Self::parse_offset(settings.utc_offset_minutes).ok_or_else(|| {
            EngineError::ConfigParseError {
                path: engine_path.display().to_string(),
                message: format!(
                    "utc_offset_minutes out of range: {}",
                    settings.utc_offset_minutes
                ),
            }
        })?;

        Ok(Self {
            settings,
            offset,
            employees,
        })
    }

    /// Builds a loader from already-parsed settings.
    ///
    /// Falls back to UTC if the offset is out of range.
    pub fn from_settings(settings: EngineSettings, employees: Vec<EmployeeProfile>) -> Self {
        let offset = Self::parse_offset(settings.utc_offset_minutes).unwrap_or_else(|| Utc.fix());
        Self {
            settings,
            offset,
            employees,
        }
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

    fn parse_offset(minutes: i32) -> Option<FixedOffset> {
        FixedOffset::east_opt(minutes.checked_mul(60)?)
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the currency formatting rules.
    pub fn currency(&self) -> &CurrencyFormat {
        &self.settings.currency
    }

    /// Returns the offset of the local calendar.
    pub fn utc_offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns the seed employee profiles.
    pub fn employees(&self) -> &[EmployeeProfile] {
        &self.employees
    }

    /// Converts an instant to the local calendar date.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::ConfigLoader;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// // 20:00 UTC is already the next day at UTC+7.
    /// let now = Utc.with_ymd_and_hms(2026, 10, 15, 20, 0, 0).unwrap();
    /// println!("{}", loader.local_date(now));
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }
}
