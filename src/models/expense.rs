//! Expense line items and the categories that group them
//!
//! Every amount is a fixed monthly cost. Categories are plain name-keyed maps
//! so the persisted document reads `{ "<expense>": { "amount": 12.5 } }`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single fixed monthly expense
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    /// Monthly amount; zero marks a paused expense
    pub amount: f64,
}

impl ExpenseItem {
    /// Create a new expense item
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    /// Validate the amount
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_amount(self.amount)
    }

    /// Amount as it contributes to a rate: anything invalid counts as zero
    pub fn effective_amount(&self) -> f64 {
        if self.amount.is_finite() && self.amount > 0.0 {
            self.amount
        } else {
            0.0
        }
    }
}

/// A named group of expenses (e.g. "Housing" holding "Rent" and "Heating")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category {
    expenses: BTreeMap<String, ExpenseItem>,
}

impl Category {
    /// Create an empty category
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an expense by exact name
    pub fn get(&self, name: &str) -> Option<&ExpenseItem> {
        self.expenses.get(name)
    }

    /// Check whether an expense with this exact name exists
    pub fn contains(&self, name: &str) -> bool {
        self.expenses.contains_key(name)
    }

    /// Iterate over expenses in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ExpenseItem)> {
        self.expenses.iter()
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the category holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of all monthly amounts in this category
    pub fn total(&self) -> f64 {
        self.expenses.values().map(ExpenseItem::effective_amount).sum()
    }

    pub(crate) fn insert(&mut self, name: String, item: ExpenseItem) -> Option<ExpenseItem> {
        self.expenses.insert(name, item)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut ExpenseItem> {
        self.expenses.get_mut(name)
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<ExpenseItem> {
        self.expenses.remove(name)
    }
}

impl FromIterator<(String, ExpenseItem)> for Category {
    fn from_iter<I: IntoIterator<Item = (String, ExpenseItem)>>(iter: I) -> Self {
        Self {
            expenses: iter.into_iter().collect(),
        }
    }
}

/// Validation errors for names and amounts
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyName,
    ReservedCharacter(char),
    NegativeAmount(f64),
    NonFiniteAmount,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::ReservedCharacter(c) => write!(f, "Name cannot contain '{}'", c),
            Self::NegativeAmount(amount) => write!(f, "Amount cannot be negative: {}", amount),
            Self::NonFiniteAmount => write!(f, "Amount must be a finite number"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// Check that a monthly amount is finite and not negative
pub fn validate_amount(amount: f64) -> Result<(), ExpenseValidationError> {
    if !amount.is_finite() {
        return Err(ExpenseValidationError::NonFiniteAmount);
    }
    if amount < 0.0 {
        return Err(ExpenseValidationError::NegativeAmount(amount));
    }
    Ok(())
}

/// Joins a category and expense name in audit ids ("Housing/Rent")
pub const NAME_SEPARATOR: char = '/';

/// Check that a category or expense name is usable
pub fn validate_name(name: &str) -> Result<(), ExpenseValidationError> {
    if name.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyName);
    }
    if name.contains(NAME_SEPARATOR) {
        return Err(ExpenseValidationError::ReservedCharacter(NAME_SEPARATOR));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_total() {
        let category: Category = [
            ("Rent".to_string(), ExpenseItem::new(9000.0)),
            ("Heating".to_string(), ExpenseItem::new(750.5)),
        ]
        .into_iter()
        .collect();

        assert_eq!(category.len(), 2);
        assert!((category.total() - 9750.5).abs() < 1e-9);
    }

    #[test]
    fn test_effective_amount_ignores_invalid() {
        assert_eq!(ExpenseItem::new(-10.0).effective_amount(), 0.0);
        assert_eq!(ExpenseItem::new(f64::NAN).effective_amount(), 0.0);
        assert_eq!(ExpenseItem::new(0.0).effective_amount(), 0.0);
        assert_eq!(ExpenseItem::new(12.5).effective_amount(), 12.5);
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0.0).is_ok());
        assert!(validate_amount(99.99).is_ok());
        assert_eq!(
            validate_amount(-1.0),
            Err(ExpenseValidationError::NegativeAmount(-1.0))
        );
        assert_eq!(
            validate_amount(f64::INFINITY),
            Err(ExpenseValidationError::NonFiniteAmount)
        );
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Rent").is_ok());
        assert_eq!(validate_name("   "), Err(ExpenseValidationError::EmptyName));
        assert_eq!(
            validate_name("Bills/Rent"),
            Err(ExpenseValidationError::ReservedCharacter('/'))
        );
    }

    #[test]
    fn test_category_serializes_as_map() {
        let category: Category = [("Rent".to_string(), ExpenseItem::new(12000.0))]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, r#"{"Rent":{"amount":12000.0}}"#);
    }
}
