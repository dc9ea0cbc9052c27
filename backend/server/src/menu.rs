//! # Menu
//!
//! Records served by the catalog.
//!
//! ## Schema
//! - id (**int**): assigned by the catalog, never by the client
//! - name (**string**), description (**string**), price (**float**)
//! - category (**enum**): appetizer, entree, dessert or beverage
//! - ingredients (**list of strings**)
//! - available (**bool**): true unless the client says otherwise
use std::str::FromStr;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Appetizer,
    Entree,
    Dessert,
    Beverage,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Appetizer,
        Category::Entree,
        Category::Dessert,
        Category::Beverage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appetizer => "appetizer",
            Category::Entree => "entree",
            Category::Dessert => "dessert",
            Category::Beverage => "beverage",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(())
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub available: bool,
}

/// A validated candidate record, as sent on create or update.
///
/// `available` stays `None` when the client left it out, so an update can
/// keep whatever the stored item already had.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub available: Option<bool>,
}

impl MenuDraft {
    pub fn into_item(self, id: u64) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            ingredients: self.ingredients,
            available: self.available.unwrap_or(true),
        }
    }

    pub fn apply_to(self, item: &mut MenuItem) {
        item.name = self.name;
        item.description = self.description;
        item.price = self.price;
        item.category = self.category;
        item.ingredients = self.ingredients;

        if let Some(available) = self.available {
            item.available = available;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(available: Option<bool>) -> MenuDraft {
        MenuDraft {
            name: "Taco".to_string(),
            description: "Crispy corn taco with beef".to_string(),
            price: 4.5,
            category: Category::Entree,
            ingredients: vec!["beef".to_string(), "corn tortilla".to_string()],
            available,
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("dessert".parse(), Ok(Category::Dessert));
        assert_eq!("soup".parse::<Category>(), Err(()));
        assert_eq!("Entree".parse::<Category>(), Err(()));
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Beverage).unwrap();
        assert_eq!(json, "\"beverage\"");
    }

    #[test]
    fn test_into_item_defaults_available() {
        assert!(draft(None).into_item(7).available);
        assert!(!draft(Some(false)).into_item(7).available);
    }

    #[test]
    fn test_apply_to_keeps_id_and_available() {
        let mut item = draft(Some(false)).into_item(2);
        let mut changed = draft(None);
        changed.name = "Burrito".to_string();

        changed.apply_to(&mut item);

        assert_eq!(item.id, 2);
        assert_eq!(item.name, "Burrito");
        assert!(!item.available);
    }
}
