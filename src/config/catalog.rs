//! Food catalog seeding from config.toml
//!
//! The app ships a starter catalog of common foods (aisles, classifications,
//! optionally a default serving) so fresh installs have something to search
//! before the nutrition providers are consulted. Seeding is idempotent:
//! foods already present by name are skipped.

use crate::{
    entities::{Food, food, serving},
    errors::{Error, Result},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Starter catalog foods to seed
    pub foods: Vec<FoodSeed>,
}

/// Configuration for a single catalog food
#[derive(Debug, Deserialize, Clone)]
pub struct FoodSeed {
    /// Display name of the food
    pub name: String,
    /// Store aisle name(s), semicolon-separated
    pub aisle: Option<String>,
    /// Catalog classification: "Brand" or "Generic"
    pub food_type: Option<String>,
    /// FatSecret food identifier
    pub fatsecret_id: Option<String>,
    /// Nutritionix food identifier
    pub nutritionix_id: Option<String>,
    /// Optional default serving for the food
    pub serving: Option<ServingSeed>,
}

/// Configuration for a seeded food's default serving
#[derive(Debug, Deserialize, Clone)]
pub struct ServingSeed {
    /// Unit of measure (e.g., "cup")
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

/// Loads catalog configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads catalog configuration from the default location (./config.toml)
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

/// Seeds the food catalog from configuration, skipping foods already present
/// by name. Returns the number of foods inserted.
///
/// # Errors
/// Returns an error if a database query or insert fails.
pub async fn seed_food_catalog(db: &DatabaseConnection, config: &Config) -> Result<u64> {
    let mut inserted = 0_u64;

    for seed in &config.foods {
        let existing = Food::find()
            .filter(food::Column::Name.eq(&seed.name))
            .one(db)
            .await?;
        if existing.is_some() {
            debug!(name = %seed.name, "Catalog food already present, skipping");
            continue;
        }

        let food = food::ActiveModel {
            name: Set(seed.name.clone()),
            fatsecret_id: Set(seed.fatsecret_id.clone()),
            nutritionix_id: Set(seed.nutritionix_id.clone()),
            aisle: Set(seed.aisle.clone()),
            food_type: Set(seed.food_type.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        if let Some(serving_seed) = &seed.serving {
            serving::ActiveModel {
                food_id: Set(food.id),
                measurement_description: Set(serving_seed.measurement_description.clone()),
                serving_description: Set(serving_seed.serving_description.clone()),
                number_of_units: Set(serving_seed.number_of_units),
                fatsecret_serving_id: Set(serving_seed.fatsecret_serving_id.clone()),
                nutritionix_serving_id: Set(serving_seed.nutritionix_serving_id.clone()),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        inserted += 1;
    }

    info!(inserted, "Food catalog seeding complete");
    Ok(inserted)
}
