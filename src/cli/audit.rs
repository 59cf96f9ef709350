//! Audit log CLI command

use crate::error::BurnRateResult;
use crate::storage::Storage;

/// Print the most recent audit entries
pub fn handle_audit_command(storage: &Storage, limit: usize) -> BurnRateResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
