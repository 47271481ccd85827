//! Rent repository for JSON storage
//!
//! Manages loading and saving rent records to rents.json. Records keep their
//! insertion order so the weekly sequence a tenant was billed in survives
//! round trips, which the rent payment report depends on.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{Rent, RentId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable rent data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct RentData {
    pub rents: Vec<Rent>,
}

/// Repository for rent persistence with a tenant index
pub struct RentRepository {
    path: PathBuf,
    data: RwLock<HashMap<RentId, Rent>>,
    /// Insertion order of records
    order: RwLock<Vec<RentId>>,
    /// Index: tenant reference -> rent ids, in insertion order
    by_tenant: RwLock<HashMap<String, Vec<RentId>>>,
}

impl RentRepository {
    /// Create a new rent repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            order: RwLock::new(Vec::new()),
            by_tenant: RwLock::new(HashMap::new()),
        }
    }

    /// Load rents from disk and build the tenant index
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: RentData = read_json(&self.path)?;

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

        for rent in file_data.rents {
            let id = rent.id;
            by_tenant.entry(rent.tenant_ref.clone()).or_default().push(id);
            order.push(id);
            data.insert(id, rent);
        }

        Ok(())
    }

    /// Save rents to disk in insertion order
    pub fn save(&self) -> Result<(), LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let order = self
            .order
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let rents: Vec<_> = order.iter().filter_map(|id| data.get(id).cloned()).collect();

        let file_data = RentData { rents };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a rent record by ID
    pub fn get(&self, id: RentId) -> Result<Option<Rent>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all rent records in insertion order
    pub fn get_all(&self) -> Result<Vec<Rent>, LedgerError> {
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

    /// Get rent records for a tenant, in insertion order
    pub fn get_by_tenant(&self, tenant_ref: &str) -> Result<Vec<Rent>, LedgerError> {
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

    /// Insert or update a rent record
    pub fn upsert(&self, rent: Rent) -> Result<(), LedgerError> {
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
        if let Some(old) = data.get(&rent.id) {
            if old.tenant_ref != rent.tenant_ref {
                if let Some(ids) = by_tenant.get_mut(&old.tenant_ref) {
                    ids.retain(|&rid| rid != rent.id);
                }
                by_tenant.entry(rent.tenant_ref.clone()).or_default().push(rent.id);
            }
        } else {
            order.push(rent.id);
            by_tenant.entry(rent.tenant_ref.clone()).or_default().push(rent.id);
        }

        data.insert(rent.id, rent);
        Ok(())
    }

    /// Delete a rent record
    pub fn delete(&self, id: RentId) -> Result<bool, LedgerError> {
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

        if let Some(rent) = data.remove(&id) {
            if let Some(ids) = by_tenant.get_mut(&rent.tenant_ref) {
                ids.retain(|&rid| rid != id);
            }
            order.retain(|&rid| rid != id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count rent records
    pub fn count(&self) -> Result<usize, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, RentRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rents.json");
        let repo = RentRepository::new(path);
        (temp_dir, repo)
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let rent = Rent::with_charges("T1", d(2025, 2, 3), 120.0, 15.0, 10.0, 25.0, 0.0);
        let id = rent.id;

        repo.upsert(rent).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.rent_due, 120.0);
    }

    #[test]
    fn test_get_by_tenant_preserves_insertion_order() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Rent::new("T1", d(2025, 2, 3))).unwrap();
        repo.upsert(Rent::new("T2", d(2025, 2, 3))).unwrap();
        repo.upsert(Rent::new("T1", d(2025, 2, 10))).unwrap();
        repo.upsert(Rent::new("T1", d(2025, 1, 27))).unwrap();

        let rents = repo.get_by_tenant("T1").unwrap();
        assert_eq!(rents.len(), 3);
        let weeks: Vec<_> = rents.iter().map(|r| r.week_commence).collect();
        assert_eq!(weeks, vec![d(2025, 2, 3), d(2025, 2, 10), d(2025, 1, 27)]);

        assert!(repo.get_by_tenant("T9").unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let rent = Rent::with_charges("T1", d(2025, 2, 3), 120.0, 15.0, 10.0, 25.0, 0.0);
        let id = rent.id;

        repo.upsert(rent).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("rents.json");
        let repo2 = RentRepository::new(path);
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.week_commence, d(2025, 2, 3));
    }

    #[test]
    fn test_update_moves_tenant_index() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut rent = Rent::new("T1", d(2025, 2, 3));
        repo.upsert(rent.clone()).unwrap();

        rent.tenant_ref = "T2".to_string();
        repo.upsert(rent).unwrap();

        assert!(repo.get_by_tenant("T1").unwrap().is_empty());
        assert_eq!(repo.get_by_tenant("T2").unwrap().len(), 1);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let rent = Rent::new("T1", d(2025, 2, 3));
        let id = rent.id;

        repo.upsert(rent).unwrap();
        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.get_by_tenant("T1").unwrap().is_empty());
    }
}
