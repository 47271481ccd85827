//! Room model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RoomId;

/// A room in the property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier
    pub id: RoomId,

    /// Stable external reference (e.g. "R1")
    pub reference: String,

    /// Room name
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Floor area, free text (e.g. "12 sqm")
    #[serde(default)]
    pub area: String,
}

impl Room {
    /// Create a new room
    pub fn new(reference: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RoomId::new(),
            reference: reference.into(),
            name: name.into(),
            description: String::new(),
            area: String::new(),
        }
    }

    /// Validate the room
    pub fn validate(&self) -> Result<(), RoomValidationError> {
        if self.reference.trim().is_empty() {
            return Err(RoomValidationError::EmptyReference);
        }

        if self.name.trim().is_empty() {
            return Err(RoomValidationError::EmptyName);
        }

        Ok(())
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.reference)
    }
}

/// Validation errors for rooms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomValidationError {
    EmptyReference,
    EmptyName,
}

impl fmt::Display for RoomValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyReference => write!(f, "Room reference cannot be empty"),
            Self::EmptyName => write!(f, "Room name cannot be empty"),
        }
    }
}

impl std::error::Error for RoomValidationError {}
