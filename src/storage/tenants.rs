//! Tenant repository for JSON storage
//!
//! Manages loading and saving tenants to tenants.json. Records keep their
//! insertion order, which is the order queries return them in.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{Tenant, TenantId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable tenant data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TenantData {
    pub tenants: Vec<Tenant>,
}

/// Repository for tenant persistence with a reference index
pub struct TenantRepository {
    path: PathBuf,
    data: RwLock<HashMap<TenantId, Tenant>>,
    /// Insertion order of records
    order: RwLock<Vec<TenantId>>,
    /// Index: external reference -> tenant id
    by_reference: RwLock<HashMap<String, TenantId>>,
}

impl TenantRepository {
    /// Create a new tenant repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            order: RwLock::new(Vec::new()),
            by_reference: RwLock::new(HashMap::new()),
        }
    }

    /// Load tenants from disk and build the reference index
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: TenantData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut order = self
            .order
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_reference = self
            .by_reference
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        order.clear();
        by_reference.clear();

        for tenant in file_data.tenants {
            let id = tenant.id;
            by_reference.insert(tenant.reference.clone(), id);
            order.push(id);
            data.insert(id, tenant);
        }

        Ok(())
    }

    /// Save tenants to disk in insertion order
    pub fn save(&self) -> Result<(), LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let order = self
            .order
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let tenants: Vec<_> = order.iter().filter_map(|id| data.get(id).cloned()).collect();

        let file_data = TenantData { tenants };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a tenant by ID
    pub fn get(&self, id: TenantId) -> Result<Option<Tenant>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get a tenant by external reference
    pub fn get_by_reference(&self, reference: &str) -> Result<Option<Tenant>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_reference = self
            .by_reference
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(by_reference
            .get(reference)
            .and_then(|id| data.get(id))
            .cloned())
    }

    /// Get all tenants in insertion order
    pub fn get_all(&self) -> Result<Vec<Tenant>, LedgerError> {
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

    /// Insert or update a tenant
    pub fn upsert(&self, tenant: Tenant) -> Result<(), LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut order = self
            .order
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_reference = self
            .by_reference
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        // Drop the old reference key if it changed
        if let Some(old) = data.get(&tenant.id) {
            if old.reference != tenant.reference {
                by_reference.remove(&old.reference);
            }
        } else {
            order.push(tenant.id);
        }

        by_reference.insert(tenant.reference.clone(), tenant.id);
        data.insert(tenant.id, tenant);
        Ok(())
    }

    /// Delete a tenant
    pub fn delete(&self, id: TenantId) -> Result<bool, LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut order = self
            .order
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_reference = self
            .by_reference
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(tenant) = data.remove(&id) {
            by_reference.remove(&tenant.reference);
            order.retain(|&tid| tid != id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count tenants
    pub fn count(&self) -> Result<usize, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
