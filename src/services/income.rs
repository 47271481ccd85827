//! Income service
//!
//! Provides business logic for income records credited against tenants.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::money::format_amount;
use crate::models::{Income, IncomeCategory, IncomeId};
use crate::storage::Storage;

/// Service for income record management
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new income record
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &self,
        tenant_ref: &str,
        description: &str,
        amount: f64,
        category: IncomeCategory,
        arrived_date: NaiveDate,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
    ) -> LedgerResult<Income> {
        let mut income = match (from_date, to_date) {
            (Some(from), Some(to)) => Income::with_span(
                tenant_ref.trim(),
                description.trim(),
                amount,
                category,
                arrived_date,
                from,
                to,
            ),
            _ => Income::new(
                tenant_ref.trim(),
                description.trim(),
                amount,
                category,
                arrived_date,
            ),
        };
        income.reconcile_dates();

        // Validate
        income
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        // Save to storage
        self.storage.incomes.upsert(income.clone())?;
        self.storage.incomes.save()?;

        // Audit log
        self.storage.log_create(
            EntityType::Income,
            income.id.to_string(),
            Some(format!("{} {}", income.category, income.arrived_date)),
            &income,
        )?;

        Ok(income)
    }

    /// Get an income record by ID
    pub fn get(&self, id: IncomeId) -> LedgerResult<Option<Income>> {
        self.storage.incomes.get(id)
    }

    /// Find an income record by full ID or by the short form shown in lists
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Income>> {
        if let Ok(id) = identifier.parse::<IncomeId>() {
            return self.storage.incomes.get(id);
        }

        // Fall back to prefix matching against the short display form
        let needle = identifier.strip_prefix("inc-").unwrap_or(identifier);
        if needle.is_empty() {
            return Ok(None);
        }

        let mut matches = self
            .storage
            .incomes
            .get_all()?
            .into_iter()
            .filter(|i| i.id.as_uuid().to_string().starts_with(needle));

        match (matches.next(), matches.next()) {
            (Some(income), None) => Ok(Some(income)),
            (Some(_), Some(_)) => Err(LedgerError::Validation(format!(
                "Income id '{}' matches more than one record, use the full id",
                identifier
            ))),
            _ => Ok(None),
        }
    }

    /// Get all income records
    pub fn list(&self) -> LedgerResult<Vec<Income>> {
        self.storage.incomes.get_all()
    }

    /// Get all income records for a tenant, in stored order
    pub fn list_by_tenant(&self, tenant_ref: &str) -> LedgerResult<Vec<Income>> {
        self.storage.incomes.get_by_tenant(tenant_ref)
    }

    /// Update an income record
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &self,
        id: IncomeId,
        description: Option<&str>,
        amount: Option<f64>,
        category: Option<IncomeCategory>,
        arrived_date: Option<NaiveDate>,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
    ) -> LedgerResult<Income> {
        let mut income = self
            .storage
            .incomes
            .get(id)?
            .ok_or_else(|| LedgerError::income_not_found(id.to_string()))?;

        let before = income.clone();

        if let Some(new_description) = description {
            income.description = new_description.trim().to_string();
        }
        if let Some(new_amount) = amount {
            income.amount = new_amount;
        }
        if let Some(new_category) = category {
            income.category = new_category;
        }
        if let Some(new_arrived) = arrived_date {
            income.arrived_date = new_arrived;
        }
        if let Some(new_from) = from_date {
            income.from_date = Some(new_from);
        }
        if let Some(new_to) = to_date {
            income.to_date = Some(new_to);
        }
        income.reconcile_dates();

        // Validate
        income
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        // Save
        self.storage.incomes.upsert(income.clone())?;
        self.storage.incomes.save()?;

        // Audit log
        let mut changes = Vec::new();
        if before.amount != income.amount {
            changes.push(format!(
                "amount: {} -> {}",
                format_amount(before.amount),
                format_amount(income.amount)
            ));
        }
        if before.category != income.category {
            changes.push(format!("category: {} -> {}", before.category, income.category));
        }
        if before.arrived_date != income.arrived_date {
            changes.push(format!(
                "arrived_date: {} -> {}",
                before.arrived_date, income.arrived_date
            ));
        }
        if before.from_date != income.from_date || before.to_date != income.to_date {
            changes.push("span changed".to_string());
        }
        if before.description != income.description {
            changes.push("description changed".to_string());
        }
        let diff = if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        };

        self.storage.log_update(
            EntityType::Income,
            income.id.to_string(),
            Some(format!("{} {}", income.category, income.arrived_date)),
            &before,
            &income,
            diff,
        )?;

        Ok(income)
    }

    /// Delete an income record
    pub fn delete(&self, id: IncomeId) -> LedgerResult<Income> {
        let income = self
            .storage
            .incomes
            .get(id)?
            .ok_or_else(|| LedgerError::income_not_found(id.to_string()))?;

        self.storage.incomes.delete(id)?;
        self.storage.incomes.save()?;

        // Audit log
        self.storage.log_delete(
            EntityType::Income,
            id.to_string(),
            Some(format!("{} {}", income.category, income.arrived_date)),
            &income,
        )?;

        Ok(income)
    }
}
