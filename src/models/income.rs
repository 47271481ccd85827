//! Income model and category enumeration
//!
//! Income records credit money against a tenant. Housing benefit and
//! standing orders cover a span of weeks (`from_date`/`to_date`); one-off
//! credits such as refunds or donations carry only an arrival date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::IncomeId;

/// The closed set of income categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeCategory {
    /// Regular payment set up by the tenant
    #[serde(rename = "Standing Order")]
    StandingOrder,
    /// Council housing benefit, usually paid in multi-week lumps
    #[serde(rename = "Housing Benefit")]
    HousingBenefit,
    /// Refunded charge
    Refund,
    /// One-off donation
    Donation,
    /// Grant or fund income
    Funding,
    /// Bank interest
    Interest,
}

impl IncomeCategory {
    /// Get all categories in declaration order
    pub fn all() -> &'static [Self] {
        &[
            Self::StandingOrder,
            Self::HousingBenefit,
            Self::Refund,
            Self::Donation,
            Self::Funding,
            Self::Interest,
        ]
    }

    /// The display name, matching the stored string form
    pub fn name(&self) -> &'static str {
        match self {
            Self::StandingOrder => "Standing Order",
            Self::HousingBenefit => "Housing Benefit",
            Self::Refund => "Refund",
            Self::Donation => "Donation",
            Self::Funding => "Funding",
            Self::Interest => "Interest",
        }
    }

    /// Whether this category carries a `from_date`/`to_date` span
    pub fn requires_date_span(&self) -> bool {
        matches!(self, Self::HousingBenefit | Self::StandingOrder)
    }

    /// Parse a category from string
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "standingorder" => Some(Self::StandingOrder),
            "housingbenefit" | "hb" => Some(Self::HousingBenefit),
            "refund" => Some(Self::Refund),
            "donation" => Some(Self::Donation),
            "funding" => Some(Self::Funding),
            "interest" => Some(Self::Interest),
            _ => None,
        }
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An income record credited against a tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    /// Unique identifier
    pub id: IncomeId,

    /// Reference of the tenant this income is for
    pub tenant_ref: String,

    /// Free-text description (usually the bank statement line)
    #[serde(default)]
    pub description: String,

    /// Amount received
    #[serde(default)]
    pub amount: f64,

    /// Income category
    pub category: IncomeCategory,

    /// Date the income arrived, matching the bank statement
    pub arrived_date: NaiveDate,

    /// Start of the span this income covers (span categories only)
    pub from_date: Option<NaiveDate>,

    /// End of the span this income covers (span categories only)
    pub to_date: Option<NaiveDate>,
}

impl Income {
    /// Create a new income record with no date span
    pub fn new(
        tenant_ref: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        category: IncomeCategory,
        arrived_date: NaiveDate,
    ) -> Self {
        Self {
            id: IncomeId::new(),
            tenant_ref: tenant_ref.into(),
            description: description.into(),
            amount,
            category,
            arrived_date,
            from_date: None,
            to_date: None,
        }
    }

    /// Create a new income record covering a date span
    pub fn with_span(
        tenant_ref: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        category: IncomeCategory,
        arrived_date: NaiveDate,
        from_date: NaiveDate,
        to_date: NaiveDate,
    ) -> Self {
        let mut income = Self::new(tenant_ref, description, amount, category, arrived_date);
        income.from_date = Some(from_date);
        income.to_date = Some(to_date);
        income
    }

    /// Whether both span dates are set
    pub fn has_span(&self) -> bool {
        self.from_date.is_some() && self.to_date.is_some()
    }

    /// Drop the date span when the category does not carry one
    pub fn reconcile_dates(&mut self) {
        if !self.category.requires_date_span() {
            self.from_date = None;
            self.to_date = None;
        }
    }

    /// Validate the income record
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if let (Some(from), Some(to)) = (self.from_date, self.to_date) {
            if from > to {
                return Err(IncomeValidationError::SpanOutOfOrder { from, to });
            }
        }

        if self.category.requires_date_span() && !self.has_span() {
            return Err(IncomeValidationError::MissingSpan(self.category));
        }

        Ok(())
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2}",
            self.arrived_date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Validation errors for income records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    SpanOutOfOrder { from: NaiveDate, to: NaiveDate },
    MissingSpan(IncomeCategory),
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpanOutOfOrder { from, to } => {
                write!(f, "Income from_date {} is after to_date {}", from, to)
            }
            Self::MissingSpan(category) => {
                write!(f, "{} income requires both from_date and to_date", category)
            }
        }
    }
}

impl std::error::Error for IncomeValidationError {}
