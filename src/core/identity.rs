//! Consolidation identity - Decides which raw items represent the same purchase.
//!
//! Two nutrition providers with disjoint identifier schemes are in use, so a
//! merge is only meaningful when both rows match on the same provider's
//! identifiers. Notes participate in the key: a note like "organic only"
//! distinguishes otherwise-identical purchases.

use crate::core::item::ListItemView;

/// Computes the consolidation key for a raw list item, or `None` when the
/// item cannot be merged with anything.
///
/// Key rules, in priority order:
/// 1. No linked food: unkeyable. Custom items never consolidate, including
///    with other custom items carrying identical text.
/// 2. Food has a FatSecret id and the serving has a `measurement_description`:
///    `fatsecret:<food-id>:<measurement>:notes:<notes-or-empty>`.
/// 3. Food has a Nutritionix id and the serving has a Nutritionix serving id:
///    `nutritionix:<food-id>:<serving-id>:notes:<notes-or-empty>`.
/// 4. Anything else: unkeyable.
///
/// With `scope_by_recipe`, the key is prefixed with
/// `recipe:<recipe-id-or-none>:` so the same food pulled in by two different
/// recipes never merges and each line stays attributable to its recipe.
#[must_use]
pub fn consolidation_key(view: &ListItemView, scope_by_recipe: bool) -> Option<String> {
    let food = view.food.as_ref()?;
    let notes = view.item.notes.as_deref().unwrap_or("");

    let fatsecret_measurement = view
        .serving
        .as_ref()
        .and_then(|s| s.measurement_description.as_deref());
    let nutritionix_serving = view
        .serving
        .as_ref()
        .and_then(|s| s.nutritionix_serving_id.as_deref());

    let base = match (food.fatsecret_id.as_deref(), fatsecret_measurement) {
        (Some(food_ext), Some(measurement)) => {
            format!("fatsecret:{food_ext}:{measurement}:notes:{notes}")
        }
        _ => match (food.nutritionix_id.as_deref(), nutritionix_serving) {
            (Some(food_ext), Some(serving_ext)) => {
                format!("nutritionix:{food_ext}:{serving_ext}:notes:{notes}")
            }
            _ => return None,
        },
    };

    if scope_by_recipe {
        let scope = view
            .item
            .recipe_id
            .map_or_else(|| "none".to_string(), |id| id.to_string());
        Some(format!("recipe:{scope}:{base}"))
    } else {
        Some(base)
    }
}
