//! Food entity - A catalog food the nutrition providers know about.
//!
//! A food carries at most one external identifier scheme: either a FatSecret
//! id or a Nutritionix id, never both in practice. The `aisle` column may
//! hold several semicolon-separated aisle names; the first one wins for
//! display grouping.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Food database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "foods")]
pub struct Model {
    /// Unique identifier for the food
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the food (e.g., "Ground Beef")
    pub name: String,
    /// FatSecret food identifier, None if the food came from Nutritionix
    pub fatsecret_id: Option<String>,
    /// Nutritionix food identifier, None if the food came from FatSecret
    pub nutritionix_id: Option<String>,
    /// Store aisle name(s), semicolon-separated (e.g., "Meat;Frozen")
    pub aisle: Option<String>,
    /// Catalog classification: `"Brand"` or `"Generic"`
    pub food_type: Option<String>,
}

/// Defines relationships between Food and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One food has many servings
    #[sea_orm(has_many = "super::serving::Entity")]
    Servings,
    /// One food appears on many shopping list items
    #[sea_orm(has_many = "super::shopping_list_item::Entity")]
    ShoppingListItems,
    /// One food appears in many recipe ingredients
    #[sea_orm(has_many = "super::recipe_ingredient::Entity")]
    RecipeIngredients,
}

impl Related<super::serving::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Servings.def()
    }
}

impl Related<super::shopping_list_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShoppingListItems.def()
    }
}

impl Related<super::recipe_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeIngredients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
