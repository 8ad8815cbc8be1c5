//! Serving entity - A purchasable unit of a food.
//!
//! Servings mirror the nutrition providers' serving records: FatSecret
//! servings carry a `measurement_description` ("cup"), Nutritionix servings
//! carry their own serving id. `number_of_units` converts one serving into
//! display units and is the display layer's rounding hook.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Serving database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "servings")]
pub struct Model {
    /// Unique identifier for the serving
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Food this serving belongs to
    pub food_id: i64,
    /// Unit of measure (e.g., "cup"), present on FatSecret servings
    pub measurement_description: Option<String>,
    /// Full serving description (e.g., "1 cup")
    pub serving_description: Option<String>,
    /// Scale factor from one serving to one display unit
    pub number_of_units: Option<f64>,
    /// FatSecret serving identifier
    pub fatsecret_serving_id: Option<String>,
    /// Nutritionix serving identifier
    pub nutritionix_serving_id: Option<String>,
}

/// Defines relationships between Serving and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each serving belongs to one food
    #[sea_orm(
        belongs_to = "super::food::Entity",
        from = "Column::FoodId",
        to = "super::food::Column::Id"
    )]
    Food,
    /// One serving is referenced by many shopping list items
    #[sea_orm(has_many = "super::shopping_list_item::Entity")]
    ShoppingListItems,
}

impl Related<super::food::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Food.def()
    }
}

impl Related<super::shopping_list_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShoppingListItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
