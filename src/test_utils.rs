//! Shared test utilities for `PantryBuddy`.
//!
//! Provides helpers for setting up in-memory test databases, creating test
//! entities with sensible defaults, and building in-memory list item views
//! for the pure engine tests that never touch a database.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{item::ListItemView, shopping_list},
    entities::{self, food, recipe, recipe_ingredient, serving, shopping_list_item},
    errors::Result,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test shopping list owned by the given user.
pub async fn create_test_list(
    db: &DatabaseConnection,
    user_id: &str,
    name: &str,
) -> Result<entities::shopping_list::Model> {
    shopping_list::create_list(db, user_id, name).await
}

/// Sets up a complete test environment with one list for `test_user`.
/// Returns (db, list) for common test scenarios.
pub async fn setup_with_list() -> Result<(DatabaseConnection, entities::shopping_list::Model)> {
    let db = setup_test_db().await?;
    let list = create_test_list(&db, "test_user", "Groceries").await?;
    Ok((db, list))
}

/// Creates a catalog food with the given provider ids and aisle data.
pub async fn create_test_food(
    db: &DatabaseConnection,
    name: &str,
    fatsecret_id: Option<&str>,
    nutritionix_id: Option<&str>,
    aisle: Option<&str>,
    food_type: Option<&str>,
) -> Result<entities::food::Model> {
    food::ActiveModel {
        name: Set(name.to_string()),
        fatsecret_id: Set(fatsecret_id.map(ToString::to_string)),
        nutritionix_id: Set(nutritionix_id.map(ToString::to_string)),
        aisle: Set(aisle.map(ToString::to_string)),
        food_type: Set(food_type.map(ToString::to_string)),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a FatSecret-style serving (with a measurement description) for a
/// food.
pub async fn create_fatsecret_serving(
    db: &DatabaseConnection,
    food_id: i64,
    measurement: &str,
) -> Result<entities::serving::Model> {
    serving::ActiveModel {
        food_id: Set(food_id),
        measurement_description: Set(Some(measurement.to_string())),
        serving_description: Set(Some(format!("1 {measurement}"))),
        number_of_units: Set(Some(1.0)),
        fatsecret_serving_id: Set(Some(format!("fs-serving-{food_id}"))),
        nutritionix_serving_id: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a test recipe with the given base serving count.
pub async fn create_test_recipe(
    db: &DatabaseConnection,
    user_id: &str,
    name: &str,
    number_of_servings: f64,
) -> Result<entities::recipe::Model> {
    recipe::ActiveModel {
        user_id: Set(user_id.to_string()),
        name: Set(name.to_string()),
        number_of_servings: Set(number_of_servings),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates one ingredient line on a recipe.
pub async fn create_test_ingredient(
    db: &DatabaseConnection,
    recipe_id: i64,
    food_id: i64,
    serving_id: Option<i64>,
    number_of_servings: Option<f64>,
    position: i32,
) -> Result<entities::recipe_ingredient::Model> {
    recipe_ingredient::ActiveModel {
        recipe_id: Set(recipe_id),
        food_id: Set(food_id),
        serving_id: Set(serving_id),
        number_of_servings: Set(number_of_servings),
        position: Set(position),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

fn bare_item(id: i64) -> shopping_list_item::Model {
    shopping_list_item::Model {
        id,
        shopping_list_id: 1,
        user_id: "test_user".to_string(),
        name: None,
        food_id: None,
        serving_id: None,
        recipe_id: None,
        number_of_servings: Some(1.0),
        is_checked: false,
        notes: None,
        created_at: chrono::Utc::now(),
    }
}

/// Builds an in-memory view of a custom (or bare) item with no joined food.
#[must_use]
pub fn plain_item_view(id: i64, name: Option<&str>, notes: Option<&str>) -> ListItemView {
    let mut item = bare_item(id);
    item.name = name.map(ToString::to_string);
    item.notes = notes.map(ToString::to_string);
    ListItemView {
        item,
        food: None,
        serving: None,
        recipe: None,
    }
}

/// Builds an in-memory view of a FatSecret-identified food item. The recipe
/// id, when given, is set on the raw row only (no recipe join).
#[must_use]
pub fn fatsecret_item_view(
    id: i64,
    food_ext_id: &str,
    measurement: &str,
    notes: Option<&str>,
    recipe_id: Option<i64>,
) -> ListItemView {
    let mut item = bare_item(id);
    item.food_id = Some(10_000 + id);
    item.serving_id = Some(20_000 + id);
    item.recipe_id = recipe_id;
    item.notes = notes.map(ToString::to_string);

    ListItemView {
        item,
        food: Some(food::Model {
            id: 10_000 + id,
            name: format!("Food {food_ext_id}"),
            fatsecret_id: Some(food_ext_id.to_string()),
            nutritionix_id: None,
            aisle: None,
            food_type: None,
        }),
        serving: Some(serving::Model {
            id: 20_000 + id,
            food_id: 10_000 + id,
            measurement_description: Some(measurement.to_string()),
            serving_description: Some(format!("1 {measurement}")),
            number_of_units: Some(1.0),
            fatsecret_serving_id: Some(format!("fs-serving-{id}")),
            nutritionix_serving_id: None,
        }),
        recipe: None,
    }
}

/// Builds an in-memory view of a recipe-expanded item, with the recipe join
/// present and created at the given epoch-millisecond timestamp.
#[must_use]
pub fn recipe_item_view(
    id: i64,
    food_ext_id: &str,
    recipe_id: i64,
    recipe_name: &str,
    created_millis: i64,
) -> ListItemView {
    let mut view = fatsecret_item_view(id, food_ext_id, "cup", None, Some(recipe_id));
    view.recipe = Some(recipe::Model {
        id: recipe_id,
        user_id: "test_user".to_string(),
        name: recipe_name.to_string(),
        number_of_servings: 4.0,
        created_at: chrono::DateTime::from_timestamp_millis(created_millis).unwrap(),
    });
    view
}

/// Builds an in-memory view of a catalog food item with the given aisle.
#[must_use]
pub fn aisle_item_view(id: i64, food_ext_id: &str, aisle: Option<&str>) -> ListItemView {
    let mut view = fatsecret_item_view(id, food_ext_id, "unit", None, None);
    view.food.as_mut().unwrap().aisle = aisle.map(ToString::to_string);
    view
}
