//! Shopping list entity - Represents a user's named shopping list.
//!
//! Each user can own several lists but at most one of them is the default,
//! which is where quick-add flows place new items.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shopping list database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shopping_lists")]
pub struct Model {
    /// Unique identifier for the list
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who owns this list
    pub user_id: String,
    /// Human-readable name of the list (e.g., "Weekly groceries")
    pub name: String,
    /// Whether this is the user's default list (at most one per user)
    pub is_default: bool,
    /// When the list was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `ShoppingList` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One list has many items
    #[sea_orm(has_many = "super::shopping_list_item::Entity")]
    Items,
}

impl Related<super::shopping_list_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
