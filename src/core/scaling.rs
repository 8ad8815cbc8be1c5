//! Recipe scaling - Turns selected recipe ingredients into shopping list rows.
//!
//! Quantities are scaled linearly from the recipe's base serving count to the
//! serving count requested for this addition. No rounding happens here;
//! converting to display units (via the serving's `number_of_units`) is the
//! display layer's concern. Re-adding a recipe always creates new rows; the
//! consolidation engine merges them at display time, scoped per recipe.

use crate::{
    core::{recipe::get_recipe_with_ingredients, shopping_list::get_list_by_id},
    entities::{recipe, recipe_ingredient, shopping_list_item},
    errors::{Error, Result},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tracing::{info, instrument};

/// Scales the included ingredients of a recipe and materializes them as new
/// (unsaved) shopping list rows.
///
/// Each included ingredient's quantity becomes
/// `quantity * number_of_servings / base`, where `base` is the recipe's
/// serving count. A missing or non-positive base is treated as 1 so a
/// degenerate recipe scales rather than dividing by zero. Ingredients with no
/// quantity stay unspecified instead of becoming zero.
#[must_use]
pub fn scale_recipe_into_items(
    recipe: &recipe::Model,
    ingredients: &[recipe_ingredient::Model],
    number_of_servings: f64,
    included_ingredient_ids: &[i64],
    shopping_list_id: i64,
    user_id: &str,
) -> Vec<shopping_list_item::ActiveModel> {
    let base = if recipe.number_of_servings.is_finite() && recipe.number_of_servings > 0.0 {
        recipe.number_of_servings
    } else {
        1.0
    };
    let now = chrono::Utc::now();

    ingredients
        .iter()
        .filter(|ingredient| included_ingredient_ids.contains(&ingredient.id))
        .map(|ingredient| shopping_list_item::ActiveModel {
            shopping_list_id: Set(shopping_list_id),
            user_id: Set(user_id.to_string()),
            name: Set(None),
            food_id: Set(Some(ingredient.food_id)),
            serving_id: Set(ingredient.serving_id),
            recipe_id: Set(Some(recipe.id)),
            number_of_servings: Set(ingredient
                .number_of_servings
                .map(|quantity| quantity * number_of_servings / base)),
            is_checked: Set(false),
            notes: Set(None),
            created_at: Set(now),
            ..Default::default()
        })
        .collect()
}

/// Adds a recipe's selected ingredients to a shopping list at the requested
/// serving count.
///
/// Loads the recipe and its ingredients, scales the included ones, and
/// inserts one new raw row per ingredient. Rows from earlier additions of the
/// same recipe are left untouched; they merge with the new ones only in the
/// consolidated display view.
///
/// # Errors
/// Returns an error if:
/// - `number_of_servings` is not finite or not positive
/// - The list or the recipe does not exist
/// - A database insert fails
#[instrument(skip(db))]
pub async fn add_recipe_to_list(
    db: &DatabaseConnection,
    shopping_list_id: i64,
    user_id: &str,
    recipe_id: i64,
    number_of_servings: f64,
    included_ingredient_ids: &[i64],
) -> Result<Vec<shopping_list_item::Model>> {
    if !number_of_servings.is_finite() || number_of_servings <= 0.0 {
        return Err(Error::InvalidServings {
            value: number_of_servings,
        });
    }

    let list = get_list_by_id(db, shopping_list_id)
        .await?
        .ok_or(Error::ListNotFound {
            id: shopping_list_id,
        })?;

    let (recipe, ingredients) = get_recipe_with_ingredients(db, recipe_id).await?;

    let rows = scale_recipe_into_items(
        &recipe,
        &ingredients,
        number_of_servings,
        included_ingredient_ids,
        list.id,
        user_id,
    );

    let mut inserted = Vec::with_capacity(rows.len());
    for row in rows {
        inserted.push(row.insert(db).await?);
    }

    info!(
        recipe_id,
        list_id = shopping_list_id,
        items = inserted.len(),
        "Added recipe ingredients to list"
    );

    Ok(inserted)
}
