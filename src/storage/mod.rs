//! Storage layer for RentLedger
//!
//! Provides JSON file storage with atomic writes and automatic
//! directory creation.

pub mod file_io;
pub mod incomes;
pub mod init;
pub mod rents;
pub mod rooms;
pub mod tenants;

pub use file_io::{read_json, write_json_atomic};
pub use incomes::IncomeRepository;
pub use init::{initialize_storage, needs_initialization};
pub use rents::RentRepository;
pub use rooms::RoomRepository;
pub use tenants::TenantRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: LedgerPaths,
    pub tenants: TenantRepository,
    pub rooms: RoomRepository,
    pub rents: RentRepository,
    pub incomes: IncomeRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            tenants: TenantRepository::new(paths.tenants_file()),
            rooms: RoomRepository::new(paths.rooms_file()),
            rents: RentRepository::new(paths.rents_file()),
            incomes: IncomeRepository::new(paths.incomes_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), LedgerError> {
        self.tenants.load()?;
        self.rooms.load()?;
        self.rents.load()?;
        self.incomes.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), LedgerError> {
        self.tenants.save()?;
        self.rooms.save()?;
        self.rents.save()?;
        self.incomes.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (has any data)
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> LedgerResult<()> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> LedgerResult<()> {
        let entry = AuditEntry::update(entity_type, entity_id, entity_name, before, after, diff_summary);
        self.audit.log(&entry)
    }

    /// Record a delete operation in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> LedgerResult<()> {
        let entry = AuditEntry::delete(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tenant;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_save_all_and_load_all() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let tenant = Tenant::new(
            "T001",
            "Alice Smith",
            NaiveDate::from_ymd_opt(1990, 5, 12).unwrap(),
            "female",
            "R1",
        );
        let id = tenant.id;

        {
            let storage = Storage::new(paths.clone()).unwrap();
            storage.tenants.upsert(tenant).unwrap();
            storage.save_all().unwrap();
        }

        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert!(reloaded.tenants.get(id).unwrap().is_some());
    }

    #[test]
    fn test_log_create_appends_to_audit_log() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let tenant = Tenant::new(
            "T001",
            "Alice Smith",
            NaiveDate::from_ymd_opt(1990, 5, 12).unwrap(),
            "female",
            "R1",
        );

        storage
            .log_create(
                EntityType::Tenant,
                tenant.id.to_string(),
                Some(tenant.name.clone()),
                &tenant,
            )
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_name, Some("Alice Smith".to_string()));
    }
}
