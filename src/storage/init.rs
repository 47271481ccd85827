//! Storage initialization
//!
//! Handles first-run setup and empty data file creation

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

use super::file_io::write_json_atomic;
use super::incomes::IncomeData;
use super::rents::RentData;
use super::rooms::RoomData;
use super::tenants::TenantData;

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and empty data files so that every
/// later load sees well-formed JSON.
pub fn initialize_storage(paths: &LedgerPaths) -> Result<(), LedgerError> {
    // Ensure all directories exist
    paths.ensure_directories()?;

    if !paths.tenants_file().exists() {
        write_json_atomic(&paths.tenants_file(), &TenantData::default())?;
    }
    if !paths.rooms_file().exists() {
        write_json_atomic(&paths.rooms_file(), &RoomData::default())?;
    }
    if !paths.rents_file().exists() {
        write_json_atomic(&paths.rents_file(), &RentData::default())?;
    }
    if !paths.incomes_file().exists() {
        write_json_atomic(&paths.incomes_file(), &IncomeData::default())?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &LedgerPaths) -> bool {
    !paths.settings_file().exists()
}
