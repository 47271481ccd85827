//! Rent model
//!
//! One record per billing week per tenant: the rent due plus the service,
//! utility, meal and extra charges for that week.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RentId;

/// A weekly rent charge against a tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rent {
    /// Unique identifier
    pub id: RentId,

    /// Reference of the tenant this charge belongs to
    pub tenant_ref: String,

    /// Start of the billing week. Named for the Monday the week commences,
    /// though no weekday is enforced on the stored value.
    pub week_commence: NaiveDate,

    /// Core rent due for the week
    #[serde(default)]
    pub rent_due: f64,

    /// Housing services charge
    #[serde(default)]
    pub services: f64,

    /// Utilities charge
    #[serde(default)]
    pub utilities: f64,

    /// Meals charge
    #[serde(default)]
    pub meals: f64,

    /// Anything not covered by the other charges
    #[serde(default)]
    pub extra: f64,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}

impl Rent {
    /// Create a new rent record with all charges zeroed
    pub fn new(tenant_ref: impl Into<String>, week_commence: NaiveDate) -> Self {
        Self {
            id: RentId::new(),
            tenant_ref: tenant_ref.into(),
            week_commence,
            rent_due: 0.0,
            services: 0.0,
            utilities: 0.0,
            meals: 0.0,
            extra: 0.0,
            notes: String::new(),
        }
    }

    /// Create a new rent record with all charges set
    #[allow(clippy::too_many_arguments)]
    pub fn with_charges(
        tenant_ref: impl Into<String>,
        week_commence: NaiveDate,
        rent_due: f64,
        services: f64,
        utilities: f64,
        meals: f64,
        extra: f64,
    ) -> Self {
        let mut rent = Self::new(tenant_ref, week_commence);
        rent.rent_due = rent_due;
        rent.services = services;
        rent.utilities = utilities;
        rent.meals = meals;
        rent.extra = extra;
        rent
    }

    /// Sum of all five charge fields
    pub fn total(&self) -> f64 {
        self.rent_due + self.services + self.utilities + self.meals + self.extra
    }
}

impl fmt::Display for Rent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2}",
            self.week_commence.format("%Y-%m-%d"),
            self.tenant_ref,
            self.total()
        )
    }
}
