//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod food;
pub mod recipe;
pub mod recipe_ingredient;
pub mod serving;
pub mod shopping_list;
pub mod shopping_list_item;

// Re-export specific types to avoid conflicts
pub use food::{Column as FoodColumn, Entity as Food, Model as FoodModel};
pub use recipe::{Column as RecipeColumn, Entity as Recipe, Model as RecipeModel};
pub use recipe_ingredient::{
    Column as RecipeIngredientColumn, Entity as RecipeIngredient, Model as RecipeIngredientModel,
};
pub use serving::{Column as ServingColumn, Entity as Serving, Model as ServingModel};
pub use shopping_list::{
    Column as ShoppingListColumn, Entity as ShoppingList, Model as ShoppingListModel,
};
pub use shopping_list_item::{
    Column as ShoppingListItemColumn, Entity as ShoppingListItem, Model as ShoppingListItemModel,
};
