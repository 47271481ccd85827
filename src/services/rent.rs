//! Rent service
//!
//! Provides business logic for weekly rent charge records.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::money::format_amount;
use crate::models::{Rent, RentId};
use crate::storage::Storage;

/// Service for rent charge management
pub struct RentService<'a> {
    storage: &'a Storage,
}

impl<'a> RentService<'a> {
    /// Create a new rent service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new rent charge record
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &self,
        tenant_ref: &str,
        week_commence: NaiveDate,
        rent_due: f64,
        services: f64,
        utilities: f64,
        meals: f64,
        extra: f64,
        notes: Option<&str>,
    ) -> LedgerResult<Rent> {
        let mut rent = Rent::with_charges(
            tenant_ref.trim(),
            week_commence,
            rent_due,
            services,
            utilities,
            meals,
            extra,
        );
        if let Some(notes) = notes {
            rent.notes = notes.to_string();
        }

        // Save to storage
        self.storage.rents.upsert(rent.clone())?;
        self.storage.rents.save()?;

        // Audit log
        self.storage.log_create(
            EntityType::Rent,
            rent.id.to_string(),
            Some(format!("{} week of {}", rent.tenant_ref, rent.week_commence)),
            &rent,
        )?;

        Ok(rent)
    }

    /// Get a rent record by ID
    pub fn get(&self, id: RentId) -> LedgerResult<Option<Rent>> {
        self.storage.rents.get(id)
    }

    /// Find a rent record by full ID or by the short form shown in lists
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Rent>> {
        if let Ok(id) = identifier.parse::<RentId>() {
            return self.storage.rents.get(id);
        }

        // Fall back to prefix matching against the short display form
        let needle = identifier.strip_prefix("rent-").unwrap_or(identifier);
        if needle.is_empty() {
            return Ok(None);
        }

        let mut matches = self
            .storage
            .rents
            .get_all()?
            .into_iter()
            .filter(|r| r.id.as_uuid().to_string().starts_with(needle));

        match (matches.next(), matches.next()) {
            (Some(rent), None) => Ok(Some(rent)),
            (Some(_), Some(_)) => Err(LedgerError::Validation(format!(
                "Rent id '{}' matches more than one record, use the full id",
                identifier
            ))),
            _ => Ok(None),
        }
    }

    /// Get all rent records
    pub fn list(&self) -> LedgerResult<Vec<Rent>> {
        self.storage.rents.get_all()
    }

    /// Get all rent records for a tenant, in stored order
    pub fn list_by_tenant(&self, tenant_ref: &str) -> LedgerResult<Vec<Rent>> {
        self.storage.rents.get_by_tenant(tenant_ref)
    }

    /// Update a rent record
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &self,
        id: RentId,
        week_commence: Option<NaiveDate>,
        rent_due: Option<f64>,
        services: Option<f64>,
        utilities: Option<f64>,
        meals: Option<f64>,
        extra: Option<f64>,
        notes: Option<&str>,
    ) -> LedgerResult<Rent> {
        let mut rent = self
            .storage
            .rents
            .get(id)?
            .ok_or_else(|| LedgerError::rent_not_found(id.to_string()))?;

        let before = rent.clone();

        if let Some(new_week) = week_commence {
            rent.week_commence = new_week;
        }
        if let Some(amount) = rent_due {
            rent.rent_due = amount;
        }
        if let Some(amount) = services {
            rent.services = amount;
        }
        if let Some(amount) = utilities {
            rent.utilities = amount;
        }
        if let Some(amount) = meals {
            rent.meals = amount;
        }
        if let Some(amount) = extra {
            rent.extra = amount;
        }
        if let Some(new_notes) = notes {
            rent.notes = new_notes.to_string();
        }

        // Save
        self.storage.rents.upsert(rent.clone())?;
        self.storage.rents.save()?;

        // Audit log
        let mut changes = Vec::new();
        if before.week_commence != rent.week_commence {
            changes.push(format!(
                "week_commence: {} -> {}",
                before.week_commence, rent.week_commence
            ));
        }
        if before.total() != rent.total() {
            changes.push(format!(
                "total: {} -> {}",
                format_amount(before.total()),
                format_amount(rent.total())
            ));
        }
        if before.notes != rent.notes {
            changes.push("notes changed".to_string());
        }
        let diff = if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        };

        self.storage.log_update(
            EntityType::Rent,
            rent.id.to_string(),
            Some(format!("{} week of {}", rent.tenant_ref, rent.week_commence)),
            &before,
            &rent,
            diff,
        )?;

        Ok(rent)
    }

    /// Delete a rent record
    pub fn delete(&self, id: RentId) -> LedgerResult<Rent> {
        let rent = self
            .storage
            .rents
            .get(id)?
            .ok_or_else(|| LedgerError::rent_not_found(id.to_string()))?;

        self.storage.rents.delete(id)?;
        self.storage.rents.save()?;

        // Audit log
        self.storage.log_delete(
            EntityType::Rent,
            id.to_string(),
            Some(format!("{} week of {}", rent.tenant_ref, rent.week_commence)),
            &rent,
        )?;

        Ok(rent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn week(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_rent() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RentService::new(&storage);

        let rent = service
            .create("T001", week(2025, 2, 3), 100.0, 10.0, 5.0, 20.0, 0.0, None)
            .unwrap();

        assert_eq!(rent.tenant_ref, "T001");
        assert_eq!(rent.week_commence, week(2025, 2, 3));
        assert_eq!(rent.total(), 135.0);
    }

    #[test]
    fn test_list_by_tenant_in_stored_order() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RentService::new(&storage);

        service
            .create("T001", week(2025, 2, 10), 100.0, 0.0, 0.0, 0.0, 0.0, None)
            .unwrap();
        service
            .create("T001", week(2025, 2, 3), 100.0, 0.0, 0.0, 0.0, 0.0, None)
            .unwrap();
        service
            .create("T002", week(2025, 2, 3), 80.0, 0.0, 0.0, 0.0, 0.0, None)
            .unwrap();

        let rents = service.list_by_tenant("T001").unwrap();
        assert_eq!(rents.len(), 2);
        assert_eq!(rents[0].week_commence, week(2025, 2, 10));
        assert_eq!(rents[1].week_commence, week(2025, 2, 3));
    }

    #[test]
    fn test_update_rent() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RentService::new(&storage);

        let rent = service
            .create("T001", week(2025, 2, 3), 100.0, 0.0, 0.0, 0.0, 0.0, None)
            .unwrap();

        let updated = service
            .update(
                rent.id,
                None,
                Some(120.0),
                None,
                None,
                None,
                None,
                Some("rate increase"),
            )
            .unwrap();

        assert_eq!(updated.rent_due, 120.0);
        assert_eq!(updated.notes, "rate increase");
        assert_eq!(updated.week_commence, week(2025, 2, 3));
    }

    #[test]
    fn test_update_unknown_rent() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RentService::new(&storage);

        let result = service.update(RentId::new(), None, Some(1.0), None, None, None, None, None);
        assert!(matches!(result, Err(LedgerError::NotFound { .. })));
    }

    #[test]
    fn test_delete_rent() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RentService::new(&storage);

        let rent = service
            .create("T001", week(2025, 2, 3), 100.0, 0.0, 0.0, 0.0, 0.0, None)
            .unwrap();

        let deleted = service.delete(rent.id).unwrap();
        assert_eq!(deleted.id, rent.id);
        assert!(service.get(rent.id).unwrap().is_none());
    }

    #[test]
    fn test_find_accepts_short_and_full_ids() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RentService::new(&storage);

        let rent = service
            .create("T001", week(2025, 2, 3), 100.0, 0.0, 0.0, 0.0, 0.0, None)
            .unwrap();

        // The short form printed in list output
        let short = rent.id.to_string();
        assert_eq!(service.find(&short).unwrap().unwrap().id, rent.id);

        // The full UUID
        let full = rent.id.as_uuid().to_string();
        assert_eq!(service.find(&full).unwrap().unwrap().id, rent.id);

        assert!(service.find("rent-ffffffff").unwrap().is_none());
    }
}
