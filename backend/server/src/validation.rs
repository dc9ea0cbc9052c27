//! # Validation
//!
//! Checks a raw JSON body against the menu item schema.
//!
//! Every rule runs, so the client gets one violation per broken field in
//! declaration order instead of fixing them one request at a time.
//!
//! | Field | Rule |
//! |---|---|
//! | name | string, at least 3 characters |
//! | description | string, at least 10 characters |
//! | price | number greater than 0 |
//! | category | appetizer, entree, dessert or beverage |
//! | ingredients | array of strings, at least 1 item |
//! | available | optional, boolean when present |
use serde::Serialize;
use serde_json::{Map, Value};

use crate::menu::{Category, MenuDraft};

pub const NAME_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MIN_CHARS: usize = 10;

pub const NAME_MSG: &str = "Name must be at least 3 characters";
pub const DESCRIPTION_MSG: &str = "Description must be at least 10 characters";
pub const PRICE_MSG: &str = "Price must be a number greater than 0";
pub const CATEGORY_MSG: &str = "Category must be one of appetizer, entree, dessert, beverage";
pub const INGREDIENTS_MSG: &str = "Ingredients must be an array with at least 1 item";
pub const AVAILABLE_MSG: &str = "Available must be boolean";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: &'static str,
    pub path: &'static str,
    pub location: &'static str,
}

impl Violation {
    fn field(path: &'static str, value: Option<&Value>, msg: &'static str) -> Self {
        Self {
            kind: "field",
            value: value.cloned(),
            msg,
            path,
            location: "body",
        }
    }
}

pub fn validate(body: &Value) -> Result<MenuDraft, Vec<Violation>> {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);
    let mut violations = Vec::new();

    let name = check(fields, "name", NAME_MSG, &mut violations, |value| {
        text(value, NAME_MIN_CHARS)
    });
    let description = check(fields, "description", DESCRIPTION_MSG, &mut violations, |value| {
        text(value, DESCRIPTION_MIN_CHARS)
    });
    let price = check(fields, "price", PRICE_MSG, &mut violations, |value| {
        value.and_then(Value::as_f64).filter(|price| *price > 0.0)
    });
    let category = check(fields, "category", CATEGORY_MSG, &mut violations, |value| {
        value
            .and_then(Value::as_str)
            .and_then(|category| category.parse::<Category>().ok())
    });
    let ingredients = check(fields, "ingredients", INGREDIENTS_MSG, &mut violations, ingredient_list);
    let available = check(fields, "available", AVAILABLE_MSG, &mut violations, |value| {
        match value {
            None => Some(None),
            Some(value) => value.as_bool().map(Some),
        }
    });

    match (name, description, price, category, ingredients, available) {
        (
            Some(name),
            Some(description),
            Some(price),
            Some(category),
            Some(ingredients),
            Some(available),
        ) => Ok(MenuDraft {
            name,
            description,
            price,
            category,
            ingredients,
            available,
        }),
        _ => Err(violations),
    }
}

fn check<T>(
    fields: &Map<String, Value>,
    path: &'static str,
    msg: &'static str,
    violations: &mut Vec<Violation>,
    rule: impl FnOnce(Option<&Value>) -> Option<T>,
) -> Option<T> {
    let value = fields.get(path);
    let checked = rule(value);

    if checked.is_none() {
        violations.push(Violation::field(path, value, msg));
    }

    checked
}

fn text(value: Option<&Value>, min_chars: usize) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| s.chars().count() >= min_chars)
        .map(str::to_owned)
}

fn ingredient_list(value: Option<&Value>) -> Option<Vec<String>> {
    value
        .and_then(Value::as_array)
        .filter(|list| !list.is_empty())?
        .iter()
        .map(|ingredient| ingredient.as_str().map(str::to_owned))
        .collect()
}
