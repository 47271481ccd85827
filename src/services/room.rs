//! Room service
//!
//! Provides business logic for room management.

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Room, RoomId};
use crate::storage::Storage;

/// Service for room management
pub struct RoomService<'a> {
    storage: &'a Storage,
}

impl<'a> RoomService<'a> {
    /// Create a new room service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new room
    pub fn create(
        &self,
        reference: &str,
        name: &str,
        description: Option<&str>,
        area: Option<&str>,
    ) -> LedgerResult<Room> {
        let reference = reference.trim();

        // Check for duplicate reference
        if self.storage.rooms.get_by_reference(reference)?.is_some() {
            return Err(LedgerError::Duplicate {
                entity_type: "Room",
                identifier: reference.to_string(),
            });
        }

        let mut room = Room::new(reference, name.trim());
        if let Some(description) = description {
            room.description = description.to_string();
        }
        if let Some(area) = area {
            room.area = area.to_string();
        }

        // Validate
        room.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        // Save to storage
        self.storage.rooms.upsert(room.clone())?;
        self.storage.rooms.save()?;

        // Audit log
        self.storage.log_create(
            EntityType::Room,
            room.id.to_string(),
            Some(room.name.clone()),
            &room,
        )?;

        Ok(room)
    }

    /// Get a room by ID
    pub fn get(&self, id: RoomId) -> LedgerResult<Option<Room>> {
        self.storage.rooms.get(id)
    }

    /// Find a room by reference or ID string
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Room>> {
        // Try by reference first
        if let Some(room) = self.storage.rooms.get_by_reference(identifier)? {
            return Ok(Some(room));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<RoomId>() {
            return self.storage.rooms.get(id);
        }

        Ok(None)
    }

    /// Get all rooms
    pub fn list(&self) -> LedgerResult<Vec<Room>> {
        self.storage.rooms.get_all()
    }

    /// Update a room
    pub fn update(
        &self,
        id: RoomId,
        name: Option<&str>,
        description: Option<&str>,
        area: Option<&str>,
    ) -> LedgerResult<Room> {
        let mut room = self
            .storage
            .rooms
            .get(id)?
            .ok_or_else(|| LedgerError::room_not_found(id.to_string()))?;

        let before = room.clone();

        if let Some(new_name) = name {
            room.name = new_name.trim().to_string();
        }
        if let Some(new_description) = description {
            room.description = new_description.to_string();
        }
        if let Some(new_area) = area {
            room.area = new_area.to_string();
        }

        // Validate
        room.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        // Save
        self.storage.rooms.upsert(room.clone())?;
        self.storage.rooms.save()?;

        // Audit log
        let mut changes = Vec::new();
        if before.name != room.name {
            changes.push(format!("name: {} -> {}", before.name, room.name));
        }
        if before.description != room.description {
            changes.push("description changed".to_string());
        }
        if before.area != room.area {
            changes.push(format!("area: {} -> {}", before.area, room.area));
        }
        let diff = if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        };

        self.storage.log_update(
            EntityType::Room,
            room.id.to_string(),
            Some(room.name.clone()),
            &before,
            &room,
            diff,
        )?;

        Ok(room)
    }

    /// Delete a room
    pub fn delete(&self, id: RoomId) -> LedgerResult<Room> {
        let room = self
            .storage
            .rooms
            .get(id)?
            .ok_or_else(|| LedgerError::room_not_found(id.to_string()))?;

        self.storage.rooms.delete(id)?;
        self.storage.rooms.save()?;

        // Audit log
        self.storage.log_delete(
            EntityType::Room,
            id.to_string(),
            Some(room.name.clone()),
            &room,
        )?;

        Ok(room)
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

    #[test]
    fn test_create_room() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RoomService::new(&storage);

        let room = service
            .create("R1", "Front Bedroom", Some("Double room"), Some("First floor"))
            .unwrap();

        assert_eq!(room.reference, "R1");
        assert_eq!(room.name, "Front Bedroom");
        assert_eq!(room.description, "Double room");
        assert_eq!(room.area, "First floor");
    }

    #[test]
    fn test_create_duplicate_reference() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RoomService::new(&storage);

        service.create("R1", "Front Bedroom", None, None).unwrap();

        let result = service.create("R1", "Another Room", None, None);
        assert!(matches!(result, Err(LedgerError::Duplicate { .. })));
    }

    #[test]
    fn test_find_room() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RoomService::new(&storage);

        let created = service.create("R1", "Front Bedroom", None, None).unwrap();

        let found = service.find("R1").unwrap().unwrap();
        assert_eq!(found.id, created.id);

        let found = service
            .find(&created.id.as_uuid().to_string())
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);
    }

    #[test]
    fn test_update_room() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RoomService::new(&storage);

        let room = service.create("R1", "Front Bedroom", None, None).unwrap();

        let updated = service
            .update(room.id, Some("Back Bedroom"), None, Some("Ground floor"))
            .unwrap();

        assert_eq!(updated.name, "Back Bedroom");
        assert_eq!(updated.area, "Ground floor");
    }

    #[test]
    fn test_delete_room() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RoomService::new(&storage);

        let room = service.create("R1", "Front Bedroom", None, None).unwrap();

        service.delete(room.id).unwrap();
        assert!(service.get(room.id).unwrap().is_none());

        let result = service.delete(room.id);
        assert!(matches!(result, Err(LedgerError::NotFound { .. })));
    }
}
