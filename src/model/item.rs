//! Pancakes and the builder that assembles them.
//!
//! An [`Item`] is identified by an [`ItemId`] assigned when its [`ItemBuilder`]
//! begins; two items with the same ingredients are still different items.

use crate::model::Ingredient;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

const DESCRIPTION_PREFIX: &str = "Delicious pancake with ";

/// Type-safe identifier for Items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

fn describe(ingredients: &[Ingredient]) -> String {
    let names: Vec<&str> = ingredients.iter().map(Ingredient::display_name).collect();
    format!("{DESCRIPTION_PREFIX}{}!", names.join(", "))
}

/// A finished pancake. Immutable once built.
///
/// Equality and hashing look at the identity only.
#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    ingredients: Vec<Ingredient>,
}

impl Item {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// e.g. `"Delicious pancake with milk chocolate, hazelnuts!"`
    pub fn description(&self) -> String {
        describe(&self.ingredients)
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Collects ingredients for one pancake before it is committed to an order.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    id: ItemId,
    ingredients: Vec<Ingredient>,
}

impl ItemBuilder {
    /// Starts an empty pancake with a fresh identity.
    pub fn begin() -> Self {
        Self {
            id: ItemId::new(),
            ingredients: Vec::new(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> &mut Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn description(&self) -> String {
        describe(&self.ingredients)
    }

    /// Freezes the current ingredient list into an [`Item`] carrying this builder's identity.
    pub fn build(&self) -> Item {
        Item {
            id: self.id,
            ingredients: self.ingredients.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_joins_display_names() {
        let mut builder = ItemBuilder::begin();
        builder
            .add_ingredient(Ingredient::MilkChocolate)
            .add_ingredient(Ingredient::Hazelnuts);
        assert_eq!(
            builder.description(),
            "Delicious pancake with milk chocolate, hazelnuts!"
        );
        assert_eq!(builder.build().description(), builder.description());
    }

    #[test]
    fn test_description_without_ingredients() {
        assert_eq!(ItemBuilder::begin().description(), "Delicious pancake with !");
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let mut builder = ItemBuilder::begin();
        builder
            .add_ingredient(Ingredient::Hazelnuts)
            .add_ingredient(Ingredient::WhippedCream)
            .add_ingredient(Ingredient::Hazelnuts);
        assert_eq!(
            builder.build().ingredients(),
            &[Ingredient::Hazelnuts, Ingredient::WhippedCream, Ingredient::Hazelnuts]
        );
    }

    #[test]
    fn test_identity_not_content_decides_equality() {
        let mut first = ItemBuilder::begin();
        first.add_ingredient(Ingredient::DarkChocolate);
        let mut second = ItemBuilder::begin();
        second.add_ingredient(Ingredient::DarkChocolate);

        assert_ne!(first.build(), second.build());
        assert_eq!(first.build(), first.build());
        assert_eq!(first.build().id(), first.id());
    }
}
