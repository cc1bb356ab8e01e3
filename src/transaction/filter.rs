//! Narrowing a transaction list down to what the user asked to see.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, category::Category, transaction::Transaction};

/// Restricts transactions by the direction money moved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    /// Any direction.
    #[default]
    All,
    /// Only transactions with a positive amount.
    Income,
    /// Only transactions with a negative amount.
    Expense,
}

impl FromStr for TypeFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Income),
            "expense" => Ok(TypeFilter::Expense),
            other => Err(Error::InvalidTypeFilter(other.to_owned())),
        }
    }
}

/// Restricts transactions to a single category, or lets all through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Any category.
    #[default]
    All,
    /// Exactly this category.
    Only(Category),
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// The criteria the user has selected for the transaction list.
///
/// Criteria are combined with a logical AND. A criterion left at its default
/// (empty search text, `All`, no date bound) does not narrow the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive text that must appear in the description.
    pub search_text: String,
    /// Whether to show income, expenses or both.
    pub type_filter: TypeFilter,
    /// The category to show.
    pub category_filter: CategoryFilter,
    /// The earliest date to include.
    pub date_from: Option<Date>,
    /// The latest date to include.
    pub date_to: Option<Date>,
}

impl FilterCriteria {
    /// Set the search text.
    pub fn search(mut self, text: &str) -> Self {
        self.search_text = text.to_owned();
        self
    }

    /// Set the type filter.
    pub fn type_filter(mut self, type_filter: TypeFilter) -> Self {
        self.type_filter = type_filter;
        self
    }

    /// Set the category filter.
    pub fn category(mut self, category_filter: CategoryFilter) -> Self {
        self.category_filter = category_filter;
        self
    }

    /// Set the inclusive lower date bound.
    pub fn from(mut self, date: Option<Date>) -> Self {
        self.date_from = date;
        self
    }

    /// Set the inclusive upper date bound.
    pub fn to(mut self, date: Option<Date>) -> Self {
        self.date_to = date;
        self
    }

    /// Whether these criteria let every transaction through.
    pub fn is_noop(&self) -> bool {
        self.search_text.is_empty()
            && self.type_filter == TypeFilter::All
            && self.category_filter == CategoryFilter::All
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// Check a single transaction against every active criterion.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.matches_search(&self.search_text.to_lowercase(), transaction)
            && self.matches_rest(transaction)
    }

    fn matches_search(&self, needle: &str, transaction: &Transaction) -> bool {
        needle.is_empty() || transaction.description.to_lowercase().contains(needle)
    }

    fn matches_rest(&self, transaction: &Transaction) -> bool {
        let type_ok = match self.type_filter {
            TypeFilter::All => true,
            TypeFilter::Income => transaction.is_income(),
            TypeFilter::Expense => transaction.is_expense(),
        };

        let category_ok = match self.category_filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => transaction.category == category,
        };

        let from_ok = self.date_from.is_none_or(|from| transaction.date >= from);
        let to_ok = self.date_to.is_none_or(|to| transaction.date <= to);

        type_ok && category_ok && from_ok && to_ok
    }
}

/// Select the transactions matching `criteria`, keeping their relative order.
pub fn filter_transactions(
    transactions: &[Transaction],
    criteria: &FilterCriteria,
) -> Vec<Transaction> {
    if criteria.is_noop() {
        return transactions.to_vec();
    }

    // Lowercase the needle once rather than for every transaction.
    let needle = criteria.search_text.to_lowercase();

    transactions
        .iter()
        .filter(|transaction| {
            criteria.matches_search(&needle, transaction) && criteria.matches_rest(transaction)
        })
        .cloned()
        .collect()
}
