//! Database configuration module for `PantryBuddy`.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Tables
//! are generated from the entity definitions via
//! `Schema::create_table_from_entity`, so the database schema always matches
//! the Rust struct definitions without hand-written SQL.

use crate::entities::{Food, Recipe, RecipeIngredient, Serving, ShoppingList, ShoppingListItem};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the environment or returns the default
/// `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/pantry_buddy.sqlite".to_string())
}

/// Establishes a connection to the database selected by `DATABASE_URL`,
/// falling back to a local `SQLite` file.
///
/// # Errors
/// Returns an error if the connection cannot be established.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates all necessary database tables from the entity definitions.
///
/// # Errors
/// Returns an error if any table creation statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let food_table = schema.create_table_from_entity(Food);
    let serving_table = schema.create_table_from_entity(Serving);
    let recipe_table = schema.create_table_from_entity(Recipe);
    let recipe_ingredient_table = schema.create_table_from_entity(RecipeIngredient);
    let shopping_list_table = schema.create_table_from_entity(ShoppingList);
    let shopping_list_item_table = schema.create_table_from_entity(ShoppingListItem);

    db.execute(builder.build(&food_table)).await?;
    db.execute(builder.build(&serving_table)).await?;
    db.execute(builder.build(&recipe_table)).await?;
    db.execute(builder.build(&recipe_ingredient_table)).await?;
    db.execute(builder.build(&shopping_list_table)).await?;
    db.execute(builder.build(&shopping_list_item_table)).await?;

    Ok(())
}
