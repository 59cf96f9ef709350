//! Audit log for burnrate
//!
//! Every category and expense mutation is appended to `audit.log` as one JSON
//! object per line, with the affected value before and after the change.
//!
//! ```rust,ignore
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(EntityType::Expense, "Housing/Rent", &item))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
