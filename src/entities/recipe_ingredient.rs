//! Recipe ingredient entity - One ingredient line of a recipe.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recipe ingredient database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipe_ingredients")]
pub struct Model {
    /// Unique identifier for the ingredient line
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Recipe this ingredient belongs to
    pub recipe_id: i64,
    /// Catalog food the ingredient refers to
    pub food_id: i64,
    /// Serving the quantity is expressed in
    pub serving_id: Option<i64>,
    /// Quantity at the recipe's base serving count; None means "unspecified"
    pub number_of_servings: Option<f64>,
    /// Position of the ingredient within the recipe
    pub position: i32,
}

/// Defines relationships between `RecipeIngredient` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each ingredient belongs to one recipe
    #[sea_orm(
        belongs_to = "super::recipe::Entity",
        from = "Column::RecipeId",
        to = "super::recipe::Column::Id"
    )]
    Recipe,
    /// Each ingredient refers to one food
    #[sea_orm(
        belongs_to = "super::food::Entity",
        from = "Column::FoodId",
        to = "super::food::Column::Id"
    )]
    Food,
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl Related<super::food::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Food.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
