//! Income repository for JSON storage
//!
//! Manages loading and saving income records to incomes.json, indexed by the
//! tenant they were received for.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{Income, IncomeId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable income data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct IncomeData {
    pub incomes: Vec<Income>,
}

/// Repository for income persistence with a tenant index
pub struct IncomeRepository {
    path: PathBuf,
    data: RwLock<HashMap<IncomeId, Income>>,
    /// Insertion order of records
    order: RwLock<Vec<IncomeId>>,
    /// Index: tenant reference -> income ids, in insertion order
    by_tenant: RwLock<HashMap<String, Vec<IncomeId>>>,
}

impl IncomeRepository {
    /// Create a new income repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            order: RwLock::new(Vec::new()),
            by_tenant: RwLock::new(HashMap::new()),
        }
    }

    /// Load incomes from disk and build the tenant index
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: IncomeData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut order = self
            .order
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_tenant = self
            .by_tenant
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        order.clear();
        by_tenant.clear();

        for income in file_data.incomes {
            let id = income.id;
            by_tenant
                .entry(income.tenant_ref.clone())
                .or_default()
                .push(id);
            order.push(id);
            data.insert(id, income);
        }

        Ok(())
    }

    /// Save incomes to disk in insertion order
    pub fn save(&self) -> Result<(), LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let order = self
            .order
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let incomes: Vec<_> = order.iter().filter_map(|id| data.get(id).cloned()).collect();

        let file_data = IncomeData { incomes };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an income record by ID
    pub fn get(&self, id: IncomeId) -> Result<Option<Income>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all income records in insertion order
    pub fn get_all(&self) -> Result<Vec<Income>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let order = self
            .order
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(order.iter().filter_map(|id| data.get(id).cloned()).collect())
    }

    /// Get income records for a tenant, in insertion order
    pub fn get_by_tenant(&self, tenant_ref: &str) -> Result<Vec<Income>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_tenant = self
            .by_tenant
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_tenant.get(tenant_ref).map(|v| v.as_slice()).unwrap_or(&[]);
        Ok(ids.iter().filter_map(|id| data.get(id).cloned()).collect())
    }

    /// Insert or update an income record
    pub fn upsert(&self, income: Income) -> Result<(), LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut order = self
            .order
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_tenant = self
            .by_tenant
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        // Re-index if the record moved to a different tenant
        if let Some(old) = data.get(&income.id) {
            if old.tenant_ref != income.tenant_ref {
                if let Some(ids) = by_tenant.get_mut(&old.tenant_ref) {
                    ids.retain(|&iid| iid != income.id);
                }
                by_tenant
                    .entry(income.tenant_ref.clone())
                    .or_default()
                    .push(income.id);
            }
        } else {
            order.push(income.id);
            by_tenant
                .entry(income.tenant_ref.clone())
                .or_default()
                .push(income.id);
        }

        data.insert(income.id, income);
        Ok(())
    }

    /// Delete an income record
    pub fn delete(&self, id: IncomeId) -> Result<bool, LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut order = self
            .order
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_tenant = self
            .by_tenant
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(income) = data.remove(&id) {
            if let Some(ids) = by_tenant.get_mut(&income.tenant_ref) {
                ids.retain(|&iid| iid != id);
            }
            order.retain(|&iid| iid != id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count income records
    pub fn count(&self) -> Result<usize, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
