//! Expense service
//!
//! Category and expense mutations. Each one is validated by the store,
//! written to disk as a full document rewrite, then recorded in the audit log.
//! An audit failure after a successful save is reported as [`BurnRateError::Audit`]
//! so callers can tell that the change itself was kept.

use crate::audit::EntityType;
use crate::error::{BurnRateError, BurnRateResult};
use crate::models::{Category, ExpenseItem, ExpenseStore, NAME_SEPARATOR};
use crate::storage::Storage;

/// Summary row for a category listing
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub name: String,
    pub expense_count: usize,
    pub monthly_total: f64,
}

/// Service for category and expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// A consistent copy of the whole store
    pub fn store(&self) -> BurnRateResult<ExpenseStore> {
        self.storage.expenses.snapshot()
    }

    /// Every category with its expense count and monthly total
    pub fn list_categories(&self) -> BurnRateResult<Vec<CategorySummary>> {
        let store = self.store()?;
        Ok(store
            .categories()
            .map(|(name, category)| CategorySummary {
                name: name.clone(),
                expense_count: category.len(),
                monthly_total: category.total(),
            })
            .collect())
    }

    /// Create an empty category
    pub fn add_category(&self, name: &str) -> BurnRateResult<String> {
        let name = name.trim().to_string();
        self.storage
            .expenses
            .update(|store| store.add_category(&name))?;

        audited(
            self.storage
                .log_create(EntityType::Category, name.clone(), &Category::new()),
        )?;

        Ok(name)
    }

    /// Delete a category and every expense in it
    pub fn delete_category(&self, name: &str) -> BurnRateResult<Category> {
        let removed = self
            .storage
            .expenses
            .update(|store| store.remove_category(name))?;

        audited(self.storage.log_delete(EntityType::Category, name, &removed))?;

        Ok(removed)
    }

    /// Add a monthly expense to an existing category
    pub fn add_expense(&self, category: &str, name: &str, amount: f64) -> BurnRateResult<ExpenseItem> {
        let name = name.trim();
        self.storage
            .expenses
            .update(|store| store.add_expense(category, name, amount))?;

        let item = ExpenseItem::new(amount);
        audited(
            self.storage
                .log_create(EntityType::Expense, expense_id(category, name), &item),
        )?;

        Ok(item)
    }

    /// Change the monthly amount of an existing expense
    pub fn update_expense(&self, category: &str, name: &str, amount: f64) -> BurnRateResult<ExpenseItem> {
        let previous = self
            .storage
            .expenses
            .update(|store| store.set_expense_amount(category, name, amount))?;

        let before = ExpenseItem::new(previous);
        let after = ExpenseItem::new(amount);
        if before != after {
            audited(self.storage.log_update(
                EntityType::Expense,
                expense_id(category, name),
                &before,
                &after,
                Some(format!("amount: {} -> {}", previous, amount)),
            ))?;
        }

        Ok(after)
    }

    /// Remove an expense from its category
    pub fn delete_expense(&self, category: &str, name: &str) -> BurnRateResult<ExpenseItem> {
        let removed = self
            .storage
            .expenses
            .update(|store| store.remove_expense(category, name))?;

        audited(
            self.storage
                .log_delete(EntityType::Expense, expense_id(category, name), &removed),
        )?;

        Ok(removed)
    }

    /// Expenses of one category, in name order
    pub fn list_expenses(&self, category: &str) -> BurnRateResult<Vec<(String, ExpenseItem)>> {
        let store = self.store()?;
        let category_data = store
            .category(category)
            .ok_or_else(|| BurnRateError::category_not_found(category))?;

        Ok(category_data
            .iter()
            .map(|(name, item)| (name.clone(), *item))
            .collect())
    }
}

/// The document is already saved when this runs
fn audited(result: BurnRateResult<()>) -> BurnRateResult<()> {
    result.map_err(|e| BurnRateError::Audit(e.to_string()))
}

fn expense_id(category: &str, name: &str) -> String {
    format!("{}{}{}", category, NAME_SEPARATOR, name)
}
