//! The ingredient catalog.
//!
//! Names resolve case-insensitively through [`FromStr`]:
//!
//! ```
//! use pancake_kitchen::model::Ingredient;
//!
//! let ingredient: Ingredient = "Dark Chocolate".parse().unwrap();
//! assert_eq!(ingredient, Ingredient::DarkChocolate);
//! assert!("maple syrup".parse::<Ingredient>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// An ingredient that can go into a pancake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ingredient {
    DarkChocolate,
    WhippedCream,
    MilkChocolate,
    Hazelnuts,
}

impl Ingredient {
    /// Every ingredient on the menu, in catalog order.
    pub const ALL: [Ingredient; 4] = [
        Ingredient::DarkChocolate,
        Ingredient::WhippedCream,
        Ingredient::MilkChocolate,
        Ingredient::Hazelnuts,
    ];

    /// Human-readable name, as used in item descriptions.
    pub fn display_name(&self) -> &'static str {
        match self {
            Ingredient::DarkChocolate => "dark chocolate",
            Ingredient::WhippedCream => "whipped cream",
            Ingredient::MilkChocolate => "milk chocolate",
            Ingredient::Hazelnuts => "hazelnuts",
        }
    }
}

impl Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Raised when a name matches nothing in the catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IngredientError {
    #[error("No ingredient with name {0}")]
    Unknown(String),
}

impl FromStr for Ingredient {
    type Err = IngredientError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ingredient::ALL
            .into_iter()
            .find(|i| i.display_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| IngredientError::Unknown(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!("HAZELNUTS".parse::<Ingredient>(), Ok(Ingredient::Hazelnuts));
        assert_eq!("whipped Cream".parse::<Ingredient>(), Ok(Ingredient::WhippedCream));
    }

    #[test]
    fn test_every_display_name_resolves_to_itself() {
        for ingredient in Ingredient::ALL {
            assert_eq!(ingredient.display_name().parse::<Ingredient>(), Ok(ingredient));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "dark_chocolate".parse::<Ingredient>(),
            Err(IngredientError::Unknown("dark_chocolate".to_string()))
        );
    }
}
