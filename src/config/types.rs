//! Configuration types for the attendance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::EmployeeProfile;

/// Currency formatting rules.
///
/// Amounts are rendered as `<symbol><integer groups><decimal separator><fraction>`,
/// with a leading `-` for negative amounts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyFormat {
    /// ISO 4217 code (e.g., "IDR").
    pub code: String,
    /// Symbol placed before the amount (e.g., "Rp").
    pub symbol: String,
    /// Separator between the integer and fractional parts.
    pub decimal_separator: String,
    /// Separator between groups of three integer digits.
    pub grouping_separator: String,
    /// Number of fractional digits to render.
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_precision() -> u32 {
    2
}

/// Engine settings from engine.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Offset from UTC, in minutes, of the local calendar used for "today"
    /// and for displaying clock times.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    /// Currency formatting rules for salary amounts.
    pub currency: CurrencyFormat,
}

/// Employee seed file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// Profiles to seed the in-memory profile provider with.
    #[serde(default)]
    pub employees: Vec<EmployeeProfile>,
}
