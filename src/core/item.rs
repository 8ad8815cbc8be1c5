//! Shopping list item operations - Store-facing reads and writes for raw rows.
//!
//! The read side produces point-in-time snapshots of a list's rows joined
//! with their food/serving/recipe summaries, and the grouped display view
//! built from them. The write side covers manual item entry, edits, deletes,
//! and the bulk clears. Consolidated entries and groups are recomputed on
//! every read; there is no incremental update path.

use crate::{
    core::{
        checklist::ItemOutcome,
        consolidate::{ConsolidatedItem, consolidate},
        grouping::{Group, GroupingMode, group_items},
        shopping_list::get_list_by_id,
    },
    entities::{
        Food, Recipe, Serving, ShoppingListItem, food, recipe, serving, shopping_list_item,
    },
    errors::{Error, Result},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

/// One raw list row joined with its food, serving, and recipe summaries.
/// This is the consolidation engine's input shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItemView {
    /// The persisted row, exactly as stored
    pub item: shopping_list_item::Model,
    /// Joined catalog food, None for custom items
    pub food: Option<food::Model>,
    /// Joined serving
    pub serving: Option<serving::Model>,
    /// Joined originating recipe
    pub recipe: Option<recipe::Model>,
}

/// Reads a point-in-time snapshot of a list's rows with their joins, in
/// creation order.
///
/// Related foods, servings, and recipes are fetched in one batched query each
/// and stitched in memory, so the snapshot is four queries regardless of list
/// size.
///
/// # Errors
/// Returns `ListNotFound` if the list does not exist, or a database error.
#[instrument(skip(db))]
pub async fn get_list_view(db: &DatabaseConnection, list_id: i64) -> Result<Vec<ListItemView>> {
    get_list_by_id(db, list_id)
        .await?
        .ok_or(Error::ListNotFound { id: list_id })?;

    let items = ShoppingListItem::find()
        .filter(shopping_list_item::Column::ShoppingListId.eq(list_id))
        .order_by_asc(shopping_list_item::Column::CreatedAt)
        .order_by_asc(shopping_list_item::Column::Id)
        .all(db)
        .await?;

    let food_ids: Vec<i64> = items.iter().filter_map(|i| i.food_id).collect();
    let serving_ids: Vec<i64> = items.iter().filter_map(|i| i.serving_id).collect();
    let recipe_ids: Vec<i64> = items.iter().filter_map(|i| i.recipe_id).collect();

    let foods: HashMap<i64, food::Model> = Food::find()
        .filter(food::Column::Id.is_in(food_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|f| (f.id, f))
        .collect();
    let servings: HashMap<i64, serving::Model> = Serving::find()
        .filter(serving::Column::Id.is_in(serving_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();
    let recipes: HashMap<i64, recipe::Model> = Recipe::find()
        .filter(recipe::Column::Id.is_in(recipe_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();

    debug!(
        list_id,
        items = items.len(),
        "Loaded list snapshot with joins"
    );

    Ok(items
        .into_iter()
        .map(|item| {
            let food = item.food_id.and_then(|id| foods.get(&id).cloned());
            let serving = item.serving_id.and_then(|id| servings.get(&id).cloned());
            let recipe = item.recipe_id.and_then(|id| recipes.get(&id).cloned());
            ListItemView {
                item,
                food,
                serving,
                recipe,
            }
        })
        .collect())
}

/// Reads a list and returns its consolidated, grouped display view.
///
/// Recipe mode consolidates scoped-by-recipe so every line stays attributable
/// to its originating recipe; aisle mode consolidates across recipes.
///
/// # Errors
/// Returns `ListNotFound` if the list does not exist, or a database error.
pub async fn get_grouped_items(
    db: &DatabaseConnection,
    list_id: i64,
    mode: GroupingMode,
) -> Result<Vec<Group>> {
    let views = get_list_view(db, list_id).await?;
    let scope_by_recipe = mode == GroupingMode::ByRecipe;
    let consolidated: Vec<ConsolidatedItem> = consolidate(views, scope_by_recipe);
    Ok(group_items(consolidated, mode))
}

/// Adds a free-text custom item to a list.
///
/// # Errors
/// Returns an error if the name is empty or whitespace-only, the list does
/// not exist, or the insert fails.
pub async fn add_custom_item(
    db: &DatabaseConnection,
    list_id: i64,
    user_id: &str,
    name: String,
    notes: Option<String>,
) -> Result<shopping_list_item::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Item name cannot be empty".to_string(),
        });
    }

    get_list_by_id(db, list_id)
        .await?
        .ok_or(Error::ListNotFound { id: list_id })?;

    let item = shopping_list_item::ActiveModel {
        shopping_list_id: Set(list_id),
        user_id: Set(user_id.to_string()),
        name: Set(Some(name.trim().to_string())),
        food_id: Set(None),
        serving_id: Set(None),
        recipe_id: Set(None),
        number_of_servings: Set(None),
        is_checked: Set(false),
        notes: Set(notes),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    item.insert(db).await.map_err(Into::into)
}

/// Adds a catalog-linked item to a list.
///
/// # Errors
/// Returns an error if the quantity is negative or not finite, the list does
/// not exist, or the insert fails.
pub async fn add_food_item(
    db: &DatabaseConnection,
    list_id: i64,
    user_id: &str,
    food_id: i64,
    serving_id: Option<i64>,
    number_of_servings: Option<f64>,
    notes: Option<String>,
) -> Result<shopping_list_item::Model> {
    if let Some(quantity) = number_of_servings {
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(Error::InvalidServings { value: quantity });
        }
    }

    get_list_by_id(db, list_id)
        .await?
        .ok_or(Error::ListNotFound { id: list_id })?;

    let item = shopping_list_item::ActiveModel {
        shopping_list_id: Set(list_id),
        user_id: Set(user_id.to_string()),
        name: Set(None),
        food_id: Set(Some(food_id)),
        serving_id: Set(serving_id),
        recipe_id: Set(None),
        number_of_servings: Set(number_of_servings),
        is_checked: Set(false),
        notes: Set(notes),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    item.insert(db).await.map_err(Into::into)
}

/// Renames an item.
///
/// # Errors
/// Returns an error if the name is empty, the item does not exist, or the
/// update fails.
pub async fn update_item_name(
    db: &DatabaseConnection,
    item_id: i64,
    name: String,
) -> Result<shopping_list_item::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Item name cannot be empty".to_string(),
        });
    }

    let item = ShoppingListItem::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?;

    let mut active: shopping_list_item::ActiveModel = item.into();
    active.name = Set(Some(name.trim().to_string()));
    active.update(db).await.map_err(Into::into)
}

/// Replaces an item's note. Note changes alter the item's consolidation
/// identity, so the next read may merge it differently.
///
/// # Errors
/// Returns an error if the item does not exist or the update fails.
pub async fn update_item_notes(
    db: &DatabaseConnection,
    item_id: i64,
    notes: Option<String>,
) -> Result<shopping_list_item::Model> {
    let item = ShoppingListItem::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?;

    let mut active: shopping_list_item::ActiveModel = item.into();
    active.notes = Set(notes);
    active.update(db).await.map_err(Into::into)
}

/// Deletes a single item.
///
/// # Errors
/// Returns `ItemNotFound` if no row matched, or a database error.
pub async fn delete_item(db: &DatabaseConnection, item_id: i64) -> Result<()> {
    let result = ShoppingListItem::delete_by_id(item_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ItemNotFound { id: item_id });
    }
    Ok(())
}

/// Deletes every checked item on a list, one independent DELETE per row.
///
/// Like checked-state propagation this is a fan-out with no rollback:
/// failures are reported per id and the caller should re-read the list.
///
/// # Errors
/// Returns an error only if the initial read of checked ids fails; per-row
/// delete failures are reported in the outcome vector.
#[instrument(skip(db))]
pub async fn clear_checked_items(
    db: &DatabaseConnection,
    list_id: i64,
) -> Result<Vec<ItemOutcome>> {
    get_list_by_id(db, list_id)
        .await?
        .ok_or(Error::ListNotFound { id: list_id })?;

    let checked = ShoppingListItem::find()
        .filter(shopping_list_item::Column::ShoppingListId.eq(list_id))
        .filter(shopping_list_item::Column::IsChecked.eq(true))
        .all(db)
        .await?;

    let handles: Vec<(i64, tokio::task::JoinHandle<Result<()>>)> = checked
        .iter()
        .map(|item| {
            let db = db.clone();
            let item_id = item.id;
            (
                item_id,
                tokio::spawn(async move { delete_item(&db, item_id).await }),
            )
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for (item_id, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(join_err) => Err(Error::Join {
                message: join_err.to_string(),
            }),
        };
        if let Err(err) = &result {
            warn!(item_id, %err, "Clearing checked item failed");
        }
        outcomes.push(ItemOutcome { item_id, result });
    }

    Ok(outcomes)
}

/// Deletes every item on a list with a single filtered DELETE, returning the
/// number of rows removed.
///
/// # Errors
/// Returns `ListNotFound` if the list does not exist, or a database error.
#[instrument(skip(db))]
pub async fn clear_all_items(db: &DatabaseConnection, list_id: i64) -> Result<u64> {
    get_list_by_id(db, list_id)
        .await?
        .ok_or(Error::ListNotFound { id: list_id })?;

    let result = ShoppingListItem::delete_many()
        .filter(shopping_list_item::Column::ShoppingListId.eq(list_id))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}
