//! Tenant service
//!
//! Provides business logic for tenant management including CRUD
//! operations and reference lookups.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Tenant, TenantId};
use crate::storage::Storage;

/// Service for tenant management
pub struct TenantService<'a> {
    storage: &'a Storage,
}

impl<'a> TenantService<'a> {
    /// Create a new tenant service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new tenant
    pub fn create(
        &self,
        reference: &str,
        name: &str,
        dob: NaiveDate,
        gender: &str,
        room: &str,
    ) -> LedgerResult<Tenant> {
        let reference = reference.trim();

        // Check for duplicate reference
        if self.storage.tenants.get_by_reference(reference)?.is_some() {
            return Err(LedgerError::duplicate_tenant(reference));
        }

        let tenant = Tenant::new(reference, name.trim(), dob, gender, room);

        // Validate
        tenant
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        // Save to storage
        self.storage.tenants.upsert(tenant.clone())?;
        self.storage.tenants.save()?;

        // Audit log
        self.storage.log_create(
            EntityType::Tenant,
            tenant.id.to_string(),
            Some(tenant.name.clone()),
            &tenant,
        )?;

        Ok(tenant)
    }

    /// Get a tenant by ID
    pub fn get(&self, id: TenantId) -> LedgerResult<Option<Tenant>> {
        self.storage.tenants.get(id)
    }

    /// Get a tenant by reference
    pub fn get_by_reference(&self, reference: &str) -> LedgerResult<Option<Tenant>> {
        self.storage.tenants.get_by_reference(reference)
    }

    /// Find a tenant by reference or ID string
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Tenant>> {
        // Try by reference first
        if let Some(tenant) = self.storage.tenants.get_by_reference(identifier)? {
            return Ok(Some(tenant));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<TenantId>() {
            return self.storage.tenants.get(id);
        }

        Ok(None)
    }

    /// Get all tenants
    pub fn list(&self) -> LedgerResult<Vec<Tenant>> {
        self.storage.tenants.get_all()
    }

    /// Update a tenant
    ///
    /// The modification timestamp is deliberately left as captured at
    /// construction.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &self,
        id: TenantId,
        name: Option<&str>,
        dob: Option<NaiveDate>,
        gender: Option<&str>,
        room: Option<&str>,
        hb: Option<bool>,
        notes: Option<&str>,
    ) -> LedgerResult<Tenant> {
        let mut tenant = self
            .storage
            .tenants
            .get(id)?
            .ok_or_else(|| LedgerError::tenant_not_found(id.to_string()))?;

        let before = tenant.clone();

        if let Some(new_name) = name {
            tenant.name = new_name.trim().to_string();
        }
        if let Some(new_dob) = dob {
            tenant.dob = new_dob;
        }
        if let Some(new_gender) = gender {
            tenant.gender = new_gender.to_string();
        }
        if let Some(new_room) = room {
            tenant.room = new_room.to_string();
        }
        if let Some(new_hb) = hb {
            tenant.hb = new_hb;
        }
        if let Some(new_notes) = notes {
            tenant.notes = new_notes.to_string();
        }

        // Validate
        tenant
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        // Save
        self.storage.tenants.upsert(tenant.clone())?;
        self.storage.tenants.save()?;

        // Audit log
        let mut changes = Vec::new();
        if before.name != tenant.name {
            changes.push(format!("name: {} -> {}", before.name, tenant.name));
        }
        if before.dob != tenant.dob {
            changes.push(format!("dob: {} -> {}", before.dob, tenant.dob));
        }
        if before.gender != tenant.gender {
            changes.push(format!("gender: {} -> {}", before.gender, tenant.gender));
        }
        if before.room != tenant.room {
            changes.push(format!("room: {} -> {}", before.room, tenant.room));
        }
        if before.hb != tenant.hb {
            changes.push(format!("hb: {} -> {}", before.hb, tenant.hb));
        }
        if before.notes != tenant.notes {
            changes.push("notes changed".to_string());
        }
        let diff = if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        };

        self.storage.log_update(
            EntityType::Tenant,
            tenant.id.to_string(),
            Some(tenant.name.clone()),
            &before,
            &tenant,
            diff,
        )?;

        Ok(tenant)
    }

    /// Delete a tenant
    pub fn delete(&self, id: TenantId) -> LedgerResult<Tenant> {
        let tenant = self
            .storage
            .tenants
            .get(id)?
            .ok_or_else(|| LedgerError::tenant_not_found(id.to_string()))?;

        self.storage.tenants.delete(id)?;
        self.storage.tenants.save()?;

        // Audit log
        self.storage.log_delete(
            EntityType::Tenant,
            id.to_string(),
            Some(tenant.name.clone()),
            &tenant,
        )?;

        Ok(tenant)
    }
}
