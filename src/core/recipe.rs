//! Recipe reads - The shopping engine's read-only view of recipes.
//!
//! Recipe creation and editing belong to the recipe screens; the shopping
//! engine only loads a recipe's base serving count and its ordered
//! ingredients to scale them onto a list.

use crate::{
    entities::{Recipe, RecipeIngredient, recipe, recipe_ingredient},
    errors::{Error, Result},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

/// Finds a recipe by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_recipe_by_id(
    db: &DatabaseConnection,
    recipe_id: i64,
) -> Result<Option<recipe::Model>> {
    Recipe::find_by_id(recipe_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Loads a recipe together with its ingredients in recipe order.
///
/// # Errors
/// Returns `RecipeNotFound` if the recipe does not exist, or a database
/// error.
pub async fn get_recipe_with_ingredients(
    db: &DatabaseConnection,
    recipe_id: i64,
) -> Result<(recipe::Model, Vec<recipe_ingredient::Model>)> {
    let recipe = get_recipe_by_id(db, recipe_id)
        .await?
        .ok_or(Error::RecipeNotFound { id: recipe_id })?;

    let ingredients = RecipeIngredient::find()
        .filter(recipe_ingredient::Column::RecipeId.eq(recipe_id))
        .order_by_asc(recipe_ingredient::Column::Position)
        .all(db)
        .await?;

    Ok((recipe, ingredients))
}
