//! The closed set of categories a transaction can belong to.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A category for grouping transactions (e.g., 'Food', 'Salary').
///
/// Categories apply to both income and expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Health,
    Education,
    Salary,
    Other,
}

impl Category {
    /// Every category, in the order they are offered to the user.
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Bills,
        Category::Entertainment,
        Category::Health,
        Category::Education,
        Category::Salary,
        Category::Other,
    ];

    /// The display name of the category.
    pub fn name(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Salary => "Salary",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parse a category from its name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidCategory] if `s` does not name a category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::InvalidCategory(name.to_owned()))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
