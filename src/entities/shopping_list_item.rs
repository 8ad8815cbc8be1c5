//! Shopping list item entity - One raw row on a shopping list.
//!
//! Items come from three sources: direct user entry (custom items carry only
//! a `name`), catalog foods (carry a `food_id` and usually a `serving_id`),
//! and recipe-ingredient expansion (additionally carry the originating
//! `recipe_id`). Exactly one of `name`/`food_id` is expected to be set.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shopping list item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shopping_list_items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the list this item belongs to
    pub shopping_list_id: i64,
    /// ID of the user who created the item
    pub user_id: String,
    /// Free-text name for custom items, None for catalog-linked items
    pub name: Option<String>,
    /// Linked catalog food, None for custom items
    pub food_id: Option<i64>,
    /// Linked serving of the food, used to express the purchase unit
    pub serving_id: Option<i64>,
    /// Recipe the item was expanded from, None for manual entries
    pub recipe_id: Option<i64>,
    /// Quantity multiplier against the serving; None means "unspecified"
    pub number_of_servings: Option<f64>,
    /// Whether the item has been ticked off
    pub is_checked: bool,
    /// Free-text note (e.g., "organic only")
    pub notes: Option<String>,
    /// When the item was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `ShoppingListItem` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each item belongs to one shopping list
    #[sea_orm(
        belongs_to = "super::shopping_list::Entity",
        from = "Column::ShoppingListId",
        to = "super::shopping_list::Column::Id"
    )]
    ShoppingList,
    /// Optional link to a catalog food
    #[sea_orm(
        belongs_to = "super::food::Entity",
        from = "Column::FoodId",
        to = "super::food::Column::Id"
    )]
    Food,
    /// Optional link to the serving the quantity is expressed in
    #[sea_orm(
        belongs_to = "super::serving::Entity",
        from = "Column::ServingId",
        to = "super::serving::Column::Id"
    )]
    Serving,
    /// Optional link to the originating recipe
    #[sea_orm(
        belongs_to = "super::recipe::Entity",
        from = "Column::RecipeId",
        to = "super::recipe::Column::Id"
    )]
    Recipe,
}

impl Related<super::shopping_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShoppingList.def()
    }
}

impl Related<super::food::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Food.def()
    }
}

impl Related<super::serving::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Serving.def()
    }
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
