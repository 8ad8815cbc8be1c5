//! Recipe entity - A user recipe with a base serving count.
//!
//! The shopping engine only ever reads recipes; creation and editing live in
//! the recipe screens. `number_of_servings` is the base the scaling math
//! divides by when ingredients are added to a list at a different count.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recipe database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    /// Unique identifier for the recipe
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who owns the recipe
    pub user_id: String,
    /// Display name of the recipe (e.g., "Chili")
    pub name: String,
    /// Base serving count the ingredient quantities are written for
    pub number_of_servings: f64,
    /// When the recipe was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Recipe and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One recipe has many ingredients
    #[sea_orm(has_many = "super::recipe_ingredient::Entity")]
    Ingredients,
    /// One recipe can have expanded items on many lists
    #[sea_orm(has_many = "super::shopping_list_item::Entity")]
    ShoppingListItems,
}

impl Related<super::recipe_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredients.def()
    }
}

impl Related<super::shopping_list_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShoppingListItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
