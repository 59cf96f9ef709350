//! Audit entry data structures
//!
//! An entry names the changed category or expense and carries its JSON value
//! before and after the change.

use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of change recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Upper-case label used in the log listing
    pub fn label(self) -> &'static str {
        match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What was changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Category,
    Expense,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityType::Category => "Category",
            EntityType::Expense => "Expense",
        })
    }
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// UTC time of the change
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// "Housing" for a category, "Housing/Rent" for an expense
    pub entity_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// Short description of what changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    fn record(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: Option<Value>,
        after: Option<Value>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            before,
            after,
            summary: None,
        }
    }

    /// A category or expense was added
    pub fn create<T: Serialize>(entity_type: EntityType, entity_id: impl Into<String>, entity: &T) -> Self {
        Self::record(Operation::Create, entity_type, entity_id, None, to_value(entity))
    }

    /// An expense amount was changed
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> Self {
        let mut entry = Self::record(
            Operation::Update,
            entity_type,
            entity_id,
            to_value(before),
            to_value(after),
        );
        entry.summary = summary;
        entry
    }

    /// A category or expense was removed
    pub fn delete<T: Serialize>(entity_type: EntityType, entity_id: impl Into<String>, entity: &T) -> Self {
        Self::record(Operation::Delete, entity_type, entity_id, to_value(entity), None)
    }

    /// One-line listing in local time, with the change summary underneath
    pub fn format_human_readable(&self) -> String {
        let when = self.timestamp.with_timezone(&Local);
        let line = format!(
            "[{}] {} {} {}",
            when.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        match &self.summary {
            Some(summary) => format!("{}\n  {}", line, summary),
            None => line,
        }
    }
}

fn to_value<T: Serialize>(entity: &T) -> Option<Value> {
    serde_json::to_value(entity).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseItem;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.label(), "DELETE");
        assert_eq!(EntityType::Expense.to_string(), "Expense");
    }

    #[test]
    fn test_serialized_shape() {
        let entry = AuditEntry::create(EntityType::Category, "Housing", &serde_json::json!({}));
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["operation"], "create");
        assert_eq!(value["entity_type"], "category");
        assert!(value.get("before").is_none());
        assert!(value.get("summary").is_none());
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(EntityType::Expense, "Housing/Rent", &ExpenseItem::new(9000.0));

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Expense);
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["amount"], 9000.0);
    }

    #[test]
    fn test_update_entry() {
        let entry = AuditEntry::update(
            EntityType::Expense,
            "Housing/Rent",
            &ExpenseItem::new(9000.0),
            &ExpenseItem::new(9500.0),
            Some("amount: 9000 -> 9500".to_string()),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert_eq!(entry.summary.as_deref(), Some("amount: 9000 -> 9500"));
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(EntityType::Category, "Housing", &serde_json::json!({}));

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(
            EntityType::Expense,
            "Housing/Rent",
            &ExpenseItem::new(1.0),
            &ExpenseItem::new(2.0),
            Some("amount: 1 -> 2".to_string()),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE"));
        assert!(formatted.contains("Expense"));
        assert!(formatted.contains("Housing/Rent"));
        assert!(formatted.contains("amount: 1 -> 2"));
    }
}
