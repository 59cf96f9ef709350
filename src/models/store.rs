//! The expense store: every category and its monthly expenses
//!
//! This is the in-memory form of the persisted document. Mutations validate
//! before touching the maps, so a rejected call never leaves the store
//! half-changed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::expense::{validate_amount, validate_name, Category, ExpenseItem, ExpenseValidationError};
use crate::error::{BurnRateError, BurnRateResult};

/// All categories keyed by their (case-sensitive) name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseStore {
    #[serde(default)]
    categories: BTreeMap<String, Category>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over categories in name order
    pub fn categories(&self) -> impl Iterator<Item = (&String, &Category)> {
        self.categories.iter()
    }

    /// Look up a category by exact name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Look up a single expense
    pub fn expense(&self, category: &str, name: &str) -> Option<&ExpenseItem> {
        self.categories.get(category).and_then(|c| c.get(name))
    }

    /// Number of categories
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of expenses across all categories
    pub fn expense_count(&self) -> usize {
        self.categories.values().map(Category::len).sum()
    }

    /// Whether the store holds no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Sum over categories of sum over expenses of amount
    pub fn total_monthly(&self) -> f64 {
        self.categories.values().map(Category::total).sum()
    }

    /// Monthly total of one category, zero when it does not exist
    pub fn category_total(&self, name: &str) -> f64 {
        self.categories.get(name).map(Category::total).unwrap_or(0.0)
    }

    /// Add an empty category
    pub fn add_category(&mut self, name: &str) -> BurnRateResult<()> {
        let name = name.trim();
        validate_name(name).map_err(|e| BurnRateError::Validation(format!("Category: {}", e)))?;

        if self.categories.contains_key(name) {
            return Err(BurnRateError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        self.categories.insert(name.to_string(), Category::new());
        Ok(())
    }

    /// Remove a category together with all of its expenses
    pub fn remove_category(&mut self, name: &str) -> BurnRateResult<Category> {
        self.categories
            .remove(name)
            .ok_or_else(|| BurnRateError::category_not_found(name))
    }

    /// Add a new expense to an existing category
    pub fn add_expense(&mut self, category: &str, name: &str, amount: f64) -> BurnRateResult<()> {
        let name = name.trim();
        validate_name(name).map_err(|e| BurnRateError::Validation(format!("Expense: {}", e)))?;
        validate_amount(amount).map_err(|_| BurnRateError::InvalidAmount(amount))?;

        let target = self
            .categories
            .get_mut(category)
            .ok_or_else(|| BurnRateError::category_not_found(category))?;

        if target.contains(name) {
            return Err(BurnRateError::Duplicate {
                entity_type: "Expense",
                identifier: format!("{}/{}", category, name),
            });
        }

        target.insert(name.to_string(), ExpenseItem::new(amount));
        Ok(())
    }

    /// Change the amount of an existing expense, returning the previous amount
    pub fn set_expense_amount(
        &mut self,
        category: &str,
        name: &str,
        amount: f64,
    ) -> BurnRateResult<f64> {
        validate_amount(amount).map_err(|_| BurnRateError::InvalidAmount(amount))?;

        let item = self
            .categories
            .get_mut(category)
            .ok_or_else(|| BurnRateError::category_not_found(category))?
            .get_mut(name)
            .ok_or_else(|| BurnRateError::expense_not_found(category, name))?;

        let previous = item.amount;
        item.amount = amount;
        Ok(previous)
    }

    /// Remove one expense from a category
    pub fn remove_expense(&mut self, category: &str, name: &str) -> BurnRateResult<ExpenseItem> {
        self.categories
            .get_mut(category)
            .ok_or_else(|| BurnRateError::category_not_found(category))?
            .remove(name)
            .ok_or_else(|| BurnRateError::expense_not_found(category, name))
    }

    /// Check every invariant; used on documents read from disk
    pub fn validate(&self) -> BurnRateResult<()> {
        for (category_name, category) in &self.categories {
            validate_name(category_name).map_err(|e| describe(category_name, None, e))?;

            for (expense_name, item) in category.iter() {
                validate_name(expense_name)
                    .map_err(|e| describe(category_name, Some(expense_name), e))?;
                item.validate()
                    .map_err(|e| describe(category_name, Some(expense_name), e))?;
            }
        }
        Ok(())
    }
}

fn describe(category: &str, expense: Option<&str>, err: ExpenseValidationError) -> BurnRateError {
    match expense {
        Some(expense) => BurnRateError::Validation(format!("{}/{}: {}", category, expense, err)),
        None => BurnRateError::Validation(format!("category '{}': {}", category, err)),
    }
}
