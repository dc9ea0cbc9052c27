//! # Catalog
//!
//! In-memory menu. Nothing here outlives the process.
//!
//! ## Ordering
//! - Items are kept in insertion order
//! - Deleting removes exactly one item, the rest keep their ids
//!
//! ## Ids
//! - New id is the largest id currently stored plus one, or 1 when empty
//! - Taken from a scan over every item, never from the last position
use crate::{
    error::AppError,
    menu::{Category, MenuDraft, MenuItem},
};

#[derive(Debug, Default, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            items: seed_items(),
        }
    }

    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Result<&MenuItem, AppError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(AppError::NotFound)
    }

    pub fn create(&mut self, draft: MenuDraft) -> MenuItem {
        let item = draft.into_item(self.next_id());
        self.items.push(item.clone());

        item
    }

    pub fn update(&mut self, id: u64, draft: MenuDraft) -> Result<MenuItem, AppError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(AppError::NotFound)?;

        draft.apply_to(item);

        Ok(item.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<MenuItem, AppError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(AppError::NotFound)?;

        Ok(self.items.remove(index))
    }

    fn next_id(&self) -> u64 {
        self.items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(1, |max| max + 1)
    }
}

fn seed_item(
    id: u64,
    name: &str,
    description: &str,
    price: f64,
    category: Category,
    ingredients: &[&str],
    available: bool,
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        available,
    }
}

fn seed_items() -> Vec<MenuItem> {
    vec![
        seed_item(
            1,
            "Classic Burger",
            "Beef patty with lettuce, tomato, and cheese on a sesame seed bun",
            12.99,
            Category::Entree,
            &["beef", "lettuce", "tomato", "cheese", "bun"],
            true,
        ),
        seed_item(
            2,
            "Chicken Caesar Salad",
            "Grilled chicken breast over romaine lettuce with parmesan and croutons",
            11.50,
            Category::Entree,
            &[
                "chicken",
                "romaine lettuce",
                "parmesan cheese",
                "croutons",
                "caesar dressing",
            ],
            true,
        ),
        seed_item(
            3,
            "Mozzarella Sticks",
            "Crispy breaded mozzarella served with marinara sauce",
            8.99,
            Category::Appetizer,
            &["mozzarella cheese", "breadcrumbs", "marinara sauce"],
            true,
        ),
        seed_item(
            4,
            "Chocolate Lava Cake",
            "Warm chocolate cake with molten center, served with vanilla ice cream",
            7.99,
            Category::Dessert,
            &["chocolate", "flour", "eggs", "butter", "vanilla ice cream"],
            true,
        ),
        seed_item(
            5,
            "Fresh Lemonade",
            "House-made lemonade with fresh lemons and mint",
            3.99,
            Category::Beverage,
            &["lemons", "sugar", "water", "mint"],
            true,
        ),
        seed_item(
            6,
            "Fish and Chips",
            "Beer-battered cod with seasoned fries and coleslaw",
            14.99,
            Category::Entree,
            &["cod", "beer batter", "potatoes", "coleslaw", "tartar sauce"],
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn draft(name: &str) -> MenuDraft {
        MenuDraft {
            name: name.to_string(),
            description: "Crispy corn taco with beef".to_string(),
            price: 4.5,
            category: Category::Entree,
            ingredients: vec!["beef".to_string()],
            available: None,
        }
    }

    fn ids(catalog: &Catalog) -> Vec<u64> {
        catalog.list().iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_seed() {
        let catalog = Catalog::seeded();

        assert_eq!(ids(&catalog), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(catalog.get(2).unwrap().name, "Chicken Caesar Salad");
        assert!(!catalog.get(6).unwrap().available);
    }

    #[test]
    fn test_create_appends_with_next_id() {
        let mut catalog = Catalog::seeded();
        let item = catalog.create(draft("Taco"));

        assert_eq!(item.id, 7);
        assert!(item.available);
        assert_eq!(catalog.list().last(), Some(&item));
        assert_eq!(catalog.get(7).unwrap(), &item);
    }

    #[test]
    fn test_create_on_empty() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.create(draft("Taco")).id, 1);
    }

    #[test]
    fn test_create_after_emptied() {
        let mut catalog = Catalog::seeded();
        for id in 1..=6 {
            catalog.delete(id).unwrap();
        }
        assert!(catalog.is_empty());

        assert_eq!(catalog.create(draft("Taco")).id, 1);
    }

    #[test]
    fn test_ids_stay_unique_after_deletes() {
        let mut catalog = Catalog::seeded();
        catalog.delete(6).unwrap();
        catalog.delete(3).unwrap();

        let first = catalog.create(draft("Taco"));
        let second = catalog.create(draft("Nachos"));
        catalog.delete(first.id).unwrap();
        let third = catalog.create(draft("Churro"));

        assert!(second.id > first.id);
        assert!(third.id > second.id);

        let unique: HashSet<u64> = ids(&catalog).into_iter().collect();
        assert_eq!(unique.len(), catalog.len());
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let mut catalog = Catalog::seeded();
        let updated = catalog.update(2, draft("Cobb Salad")).unwrap();

        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "Cobb Salad");
        assert!(updated.available);
        assert_eq!(ids(&catalog), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_update_available() {
        let mut catalog = Catalog::seeded();

        let kept = catalog.update(6, draft("Fish Tacos")).unwrap();
        assert!(!kept.available);

        let mut change = draft("Fish Tacos");
        change.available = Some(true);
        assert!(catalog.update(6, change).unwrap().available);
    }

    #[test]
    fn test_update_missing() {
        let mut catalog = Catalog::seeded();
        assert!(matches!(
            catalog.update(99, draft("Taco")),
            Err(AppError::NotFound)
        ));
    }

    #[test]
    fn test_delete() {
        let mut catalog = Catalog::seeded();
        let deleted = catalog.delete(1).unwrap();

        assert_eq!(deleted.name, "Classic Burger");
        assert_eq!(catalog.len(), 5);
        assert!(matches!(catalog.get(1), Err(AppError::NotFound)));
        assert_eq!(ids(&catalog), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_delete_missing() {
        let mut catalog = Catalog::seeded();

        assert!(matches!(catalog.delete(99), Err(AppError::NotFound)));
        assert_eq!(catalog.len(), 6);
    }
}
