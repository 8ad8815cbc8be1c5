//! Checklist propagation - Fans a checked-state toggle out to raw rows.
//!
//! A consolidated display entry can stand for several raw rows, and ticking
//! it must tick every one of them. The updates are independent statements
//! with no cross-call transaction: some can succeed while others fail, and
//! nothing is rolled back. Outcomes are reported per row id so callers can
//! retry just the failures, and callers must re-read the list afterwards to
//! get a consistent view.

use crate::{
    core::consolidate::ConsolidatedItem,
    entities::{ShoppingListItem, shopping_list_item},
    errors::{Error, Result},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, sea_query::Expr};
use tracing::{instrument, warn};

/// Outcome of one fanned-out per-row operation
#[derive(Debug)]
pub struct ItemOutcome {
    /// ID of the raw row the operation targeted
    pub item_id: i64,
    /// Whether the operation succeeded for this row
    pub result: Result<()>,
}

impl ItemOutcome {
    /// Whether this row's operation succeeded
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Sets `is_checked` on every given raw row, one independent update per id.
///
/// All updates are issued concurrently and awaited; outcomes come back in the
/// same order as `item_ids`. Partial failure is expected and surfaced, not
/// compensated: until the caller re-reads, the consolidated view may show a
/// mix of checked and unchecked members.
#[instrument(skip(db))]
pub async fn set_checked_state(
    db: &DatabaseConnection,
    item_ids: &[i64],
    is_checked: bool,
) -> Vec<ItemOutcome> {
    let handles: Vec<(i64, tokio::task::JoinHandle<Result<()>>)> = item_ids
        .iter()
        .map(|&item_id| {
            let db = db.clone();
            (
                item_id,
                tokio::spawn(async move { set_item_checked(&db, item_id, is_checked).await }),
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
            warn!(item_id, %err, "Checked-state update failed");
        }
        outcomes.push(ItemOutcome { item_id, result });
    }

    outcomes
}

/// Applies a checked-state toggle to every raw row underlying one
/// consolidated display entry.
pub async fn toggle_consolidated(
    db: &DatabaseConnection,
    item: &ConsolidatedItem,
    is_checked: bool,
) -> Vec<ItemOutcome> {
    set_checked_state(db, &item.consolidated_ids, is_checked).await
}

/// Single-row UPDATE setting only `is_checked`. Matching zero rows is
/// reported as `ItemNotFound` so a concurrently deleted row doesn't pass as
/// success.
async fn set_item_checked(
    db: &DatabaseConnection,
    item_id: i64,
    is_checked: bool,
) -> Result<()> {
    let result = ShoppingListItem::update_many()
        .col_expr(shopping_list_item::Column::IsChecked, Expr::value(is_checked))
        .filter(shopping_list_item::Column::Id.eq(item_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::ItemNotFound { id: item_id });
    }

    Ok(())
}
