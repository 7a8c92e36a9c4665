//! Employee profile model.
//!
//! This module defines the [`EmployeeProfile`] struct. Only `base_salary` is
//! consumed by the payroll calculation; the remaining fields are carried for
//! the employee overview.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee profile as returned by the profile provider.
///
/// # Examples
///
/// ```
/// use attendance_engine::models::EmployeeProfile;
/// use rust_decimal::Decimal;
///
/// let profile = EmployeeProfile {
///     id: "emp_001".to_string(),
///     email: "sari@example.com".to_string(),
///     name: "Sari".to_string(),
///     department: "Finance".to_string(),
///     position: "Accountant".to_string(),
///     base_salary: Decimal::new(3_000_000, 0),
///     is_admin: false,
///     is_active: true,
/// };
/// assert_eq!(profile.display_name(), "Sari");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier for the employee.
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Full name; may be empty.
    #[serde(default)]
    pub name: String,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: String,
    /// Job position.
    #[serde(default)]
    pub position: String,
    /// Monthly base salary before proration.
    pub base_salary: Decimal,
    /// Whether the employee has administrative rights.
    #[serde(default)]
    pub is_admin: bool,
    /// Whether the account is active.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl EmployeeProfile {
    /// Returns the name to display, falling back to the local part of the email.
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            return &self.name;
        }
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile() -> EmployeeProfile {
        EmployeeProfile {
            id: "emp_001".to_string(),
            email: "budi.santoso@example.com".to_string(),
            name: String::new(),
            department: "Operations".to_string(),
            position: "Supervisor".to_string(),
            base_salary: Decimal::new(4_500_000, 0),
            is_admin: false,
            is_active: true,
        }
    }

    #[test]
    fn test_deserialize_profile_with_defaults() {
        let json = r#"{
            "id": "emp_002",
            "email": "dewi@example.com",
            "base_salary": "3000000"
        }"#;

        let profile: EmployeeProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "emp_002");
        assert_eq!(profile.base_salary, Decimal::new(3_000_000, 0));
        assert!(profile.name.is_empty());
        assert!(!profile.is_admin);
        assert!(profile.is_active);
    }

    #[test]
    fn test_display_name_falls_back_to_email_local_part() {
        let profile = create_test_profile();
        assert_eq!(profile.display_name(), "budi.santoso");
    }

    #[test]
    fn test_display_name_prefers_name() {
        let mut profile = create_test_profile();
        profile.name = "Budi Santoso".to_string();
        assert_eq!(profile.display_name(), "Budi Santoso");
    }

    #[test]
    fn test_base_salary_serializes_as_string() {
        let profile = create_test_profile();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"base_salary\":\"4500000\""));
    }
}
