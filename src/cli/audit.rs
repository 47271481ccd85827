//! Audit log CLI commands

use crate::error::LedgerResult;
use crate::storage::Storage;

/// Print the most recent audit log entries
pub fn handle_audit_command(storage: &Storage, limit: usize) -> LedgerResult<()> {
    let logger = storage.audit();

    if !logger.exists() {
        println!("No audit log found.");
        return Ok(());
    }

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    let total = logger.entry_count()?;
    println!();
    println!("Showing {} of {} entries", entries.len(), total);

    Ok(())
}
