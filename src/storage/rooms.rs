//! Room repository for JSON storage
//!
//! Manages loading and saving rooms to rooms.json.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{Room, RoomId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable room data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct RoomData {
    pub rooms: Vec<Room>,
}

/// Repository for room persistence with a reference index
pub struct RoomRepository {
    path: PathBuf,
    data: RwLock<HashMap<RoomId, Room>>,
    /// Insertion order of records
    order: RwLock<Vec<RoomId>>,
    /// Index: external reference -> room id
    by_reference: RwLock<HashMap<String, RoomId>>,
}

impl RoomRepository {
    /// Create a new room repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            order: RwLock::new(Vec::new()),
            by_reference: RwLock::new(HashMap::new()),
        }
    }

    /// Load rooms from disk and build the reference index
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: RoomData = read_json(&self.path)?;

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

        for room in file_data.rooms {
            let id = room.id;
            by_reference.insert(room.reference.clone(), id);
            order.push(id);
            data.insert(id, room);
        }

        Ok(())
    }

    /// Save rooms to disk in insertion order
    pub fn save(&self) -> Result<(), LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let order = self
            .order
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let rooms: Vec<_> = order.iter().filter_map(|id| data.get(id).cloned()).collect();

        let file_data = RoomData { rooms };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a room by ID
    pub fn get(&self, id: RoomId) -> Result<Option<Room>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get a room by external reference
    pub fn get_by_reference(&self, reference: &str) -> Result<Option<Room>, LedgerError> {
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

    /// Get all rooms in insertion order
    pub fn get_all(&self) -> Result<Vec<Room>, LedgerError> {
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

    /// Insert or update a room
    pub fn upsert(&self, room: Room) -> Result<(), LedgerError> {
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
        if let Some(old) = data.get(&room.id) {
            if old.reference != room.reference {
                by_reference.remove(&old.reference);
            }
        } else {
            order.push(room.id);
        }

        by_reference.insert(room.reference.clone(), room.id);
        data.insert(room.id, room);
        Ok(())
    }

    /// Delete a room
    pub fn delete(&self, id: RoomId) -> Result<bool, LedgerError> {
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

        if let Some(room) = data.remove(&id) {
            by_reference.remove(&room.reference);
            order.retain(|&rid| rid != id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count rooms
    pub fn count(&self) -> Result<usize, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
