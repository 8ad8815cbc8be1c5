//! Shopping list operations - List lifecycle and the single-default invariant.
//!
//! Every user has at most one default list, which is where quick-add flows
//! put new items. The invariant is maintained here: a user's first list
//! becomes the default automatically, switching defaults clears the old one,
//! and the default list can only be deleted when the caller names a
//! replacement.

use crate::{
    entities::{ShoppingList, ShoppingListItem, shopping_list, shopping_list_item},
    errors::{Error, Result},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};
use tracing::{info, instrument};

/// Creates a new shopping list. The user's first list becomes their default.
///
/// # Errors
/// Returns an error if the name is empty or whitespace-only, or the insert
/// fails.
pub async fn create_list(
    db: &DatabaseConnection,
    user_id: &str,
    name: &str,
) -> Result<shopping_list::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "List name cannot be empty".to_string(),
        });
    }

    let has_lists = ShoppingList::find()
        .filter(shopping_list::Column::UserId.eq(user_id))
        .one(db)
        .await?
        .is_some();

    let list = shopping_list::ActiveModel {
        user_id: Set(user_id.to_string()),
        name: Set(name.trim().to_string()),
        is_default: Set(!has_lists),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    list.insert(db).await.map_err(Into::into)
}

/// Retrieves all of a user's lists, default first, then alphabetically.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_lists_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<shopping_list::Model>> {
    ShoppingList::find()
        .filter(shopping_list::Column::UserId.eq(user_id))
        .order_by_desc(shopping_list::Column::IsDefault)
        .order_by_asc(shopping_list::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a list by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_list_by_id(
    db: &DatabaseConnection,
    list_id: i64,
) -> Result<Option<shopping_list::Model>> {
    ShoppingList::find_by_id(list_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a user's default list, if they have one.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_default_list(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Option<shopping_list::Model>> {
    ShoppingList::find()
        .filter(shopping_list::Column::UserId.eq(user_id))
        .filter(shopping_list::Column::IsDefault.eq(true))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Makes the given list the user's default, clearing any previous default.
///
/// # Errors
/// Returns `ListNotFound` if the list does not exist or belongs to another
/// user, or a database error.
#[instrument(skip(db))]
pub async fn set_default_list(
    db: &DatabaseConnection,
    user_id: &str,
    list_id: i64,
) -> Result<shopping_list::Model> {
    let list = ShoppingList::find_by_id(list_id)
        .one(db)
        .await?
        .filter(|list| list.user_id == user_id)
        .ok_or(Error::ListNotFound { id: list_id })?;

    ShoppingList::update_many()
        .col_expr(shopping_list::Column::IsDefault, Expr::value(false))
        .filter(shopping_list::Column::UserId.eq(user_id))
        .filter(shopping_list::Column::IsDefault.eq(true))
        .exec(db)
        .await?;

    let mut active: shopping_list::ActiveModel = list.into();
    active.is_default = Set(true);
    active.update(db).await.map_err(Into::into)
}

/// Renames a list.
///
/// # Errors
/// Returns an error if the name is empty, the list does not exist, or the
/// update fails.
pub async fn rename_list(
    db: &DatabaseConnection,
    list_id: i64,
    name: &str,
) -> Result<shopping_list::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "List name cannot be empty".to_string(),
        });
    }

    let list = ShoppingList::find_by_id(list_id)
        .one(db)
        .await?
        .ok_or(Error::ListNotFound { id: list_id })?;

    let mut active: shopping_list::ActiveModel = list.into();
    active.name = Set(name.trim().to_string());
    active.update(db).await.map_err(Into::into)
}

/// Deletes a list and all of its items.
///
/// Deleting the user's default list requires a `replacement_default`, which
/// is promoted before the delete. Passing no replacement for a default list
/// is a recoverable precondition failure: nothing is deleted and no new
/// default is chosen automatically.
///
/// # Errors
/// Returns an error if:
/// - The list does not exist
/// - The list is the default and no valid replacement was named
/// - A database operation fails
#[instrument(skip(db))]
pub async fn delete_list(
    db: &DatabaseConnection,
    list_id: i64,
    replacement_default: Option<i64>,
) -> Result<()> {
    let list = ShoppingList::find_by_id(list_id)
        .one(db)
        .await?
        .ok_or(Error::ListNotFound { id: list_id })?;

    if list.is_default {
        let replacement_id = replacement_default
            .filter(|&id| id != list_id)
            .ok_or(Error::DefaultListRequired { list_id })?;
        set_default_list(db, &list.user_id, replacement_id).await?;
    }

    ShoppingListItem::delete_many()
        .filter(shopping_list_item::Column::ShoppingListId.eq(list_id))
        .exec(db)
        .await?;
    ShoppingList::delete_by_id(list_id).exec(db).await?;

    info!(list_id, "Deleted shopping list");
    Ok(())
}
