//! Tenant model
//!
//! Represents a resident of the property. Tenants carry a stable external
//! reference used by rent and income records, distinct from the generated
//! storage id.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TenantId;

fn default_hb() -> bool {
    true
}

/// A resident tracked by the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    /// Unique identifier
    pub id: TenantId,

    /// Stable external reference (e.g. "T1"), the key rents and incomes use
    pub reference: String,

    /// Full name
    pub name: String,

    /// Date of birth
    pub dob: NaiveDate,

    /// Gender, free text
    #[serde(default)]
    pub gender: String,

    /// Room reference, free text with no integrity check against rooms
    #[serde(default)]
    pub room: String,

    /// Whether the tenant receives housing benefit
    #[serde(default = "default_hb")]
    pub hb: bool,

    /// Free-text notes, e.g. changes made to the housing benefit claim
    #[serde(default)]
    pub notes: String,

    /// Creation time, epoch seconds
    pub creation: i64,

    /// Last modification time, epoch seconds. Captured at construction and
    /// not refreshed by updates.
    pub modification: i64,
}

impl Tenant {
    /// Create a new tenant with the housing benefit flag on
    pub fn new(
        reference: impl Into<String>,
        name: impl Into<String>,
        dob: NaiveDate,
        gender: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        let now = Utc::now().timestamp();
        Self {
            id: TenantId::new(),
            reference: reference.into(),
            name: name.into(),
            dob,
            gender: gender.into(),
            room: room.into(),
            hb: true,
            notes: String::new(),
            creation: now,
            modification: now,
        }
    }

    /// Validate the tenant
    pub fn validate(&self) -> Result<(), TenantValidationError> {
        if self.reference.trim().is_empty() {
            return Err(TenantValidationError::EmptyReference);
        }

        if self.name.trim().is_empty() {
            return Err(TenantValidationError::EmptyName);
        }

        Ok(())
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.reference)
    }
}

/// Validation errors for tenants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantValidationError {
    EmptyReference,
    EmptyName,
}

impl fmt::Display for TenantValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyReference => write!(f, "Tenant reference cannot be empty"),
            Self::EmptyName => write!(f, "Tenant name cannot be empty"),
        }
    }
}

impl std::error::Error for TenantValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_tenant() -> Tenant {
        Tenant::new(
            "T1",
            "John Doe",
            NaiveDate::from_ymd_opt(1980, 4, 3).unwrap(),
            "male",
            "R1",
        )
    }

    #[test]
    fn test_new_tenant_defaults() {
        let tenant = test_tenant();
        assert_eq!(tenant.reference, "T1");
        assert!(tenant.hb);
        assert!(tenant.notes.is_empty());
        assert_eq!(tenant.creation, tenant.modification);
        assert!(tenant.creation > 0);
    }

    #[test]
    fn test_validation() {
        let mut tenant = test_tenant();
        assert!(tenant.validate().is_ok());

        tenant.reference = "  ".to_string();
        assert_eq!(
            tenant.validate(),
            Err(TenantValidationError::EmptyReference)
        );

        tenant.reference = "T1".to_string();
        tenant.name = String::new();
        assert_eq!(tenant.validate(), Err(TenantValidationError::EmptyName));
    }

    #[test]
    fn test_hb_defaults_on_when_absent_from_json() {
        let tenant = test_tenant();
        let mut value = serde_json::to_value(&tenant).unwrap();
        value.as_object_mut().unwrap().remove("hb");
        let back: Tenant = serde_json::from_value(value).unwrap();
        assert!(back.hb);
    }

    #[test]
    fn test_display() {
        let tenant = test_tenant();
        assert_eq!(format!("{}", tenant), "John Doe (T1)");
    }

    #[test]
    fn test_serialization() {
        let tenant = test_tenant();
        let json = serde_json::to_string(&tenant).unwrap();
        let deserialized: Tenant = serde_json::from_str(&json).unwrap();
        assert_eq!(tenant.id, deserialized.id);
        assert_eq!(tenant.reference, deserialized.reference);
        assert_eq!(tenant.dob, deserialized.dob);
    }
}
