//! Aisle resolution - Maps a catalog food to a display aisle name.

use crate::entities::food;

/// Aisle assigned to branded foods with no catalog aisle of their own
pub const PACKAGED_FOODS_AISLE: &str = "Packaged Foods";

/// Fallback aisle; always sorts last in aisle-mode grouping
pub const OTHER_AISLE: &str = "Other";

/// Resolves the display aisle for a food.
///
/// The catalog may record several semicolon-separated aisles per food; the
/// first non-blank one wins. Branded foods without an aisle go to
/// "Packaged Foods", everything else (including custom items with no food at
/// all) to "Other".
#[must_use]
pub fn resolve_aisle(food: Option<&food::Model>) -> String {
    let Some(food) = food else {
        return OTHER_AISLE.to_string();
    };

    if let Some(aisle) = food.aisle.as_deref() {
        if let Some(first) = aisle.split(';').map(str::trim).find(|token| !token.is_empty()) {
            return first.to_string();
        }
    }

    if food.food_type.as_deref() == Some("Brand") {
        PACKAGED_FOODS_AISLE.to_string()
    } else {
        OTHER_AISLE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_with(aisle: Option<&str>, food_type: Option<&str>) -> food::Model {
        food::Model {
            id: 1,
            name: "Test Food".to_string(),
            fatsecret_id: None,
            nutritionix_id: None,
            aisle: aisle.map(ToString::to_string),
            food_type: food_type.map(ToString::to_string),
        }
    }

    #[test]
    fn test_first_aisle_token_wins() {
        let food = food_with(Some("Meat;Frozen"), None);
        assert_eq!(resolve_aisle(Some(&food)), "Meat");
    }

    #[test]
    fn test_tokens_are_trimmed_and_blanks_skipped() {
        let food = food_with(Some(" ; ;  Dairy ;Frozen"), None);
        assert_eq!(resolve_aisle(Some(&food)), "Dairy");
    }

    #[test]
    fn test_all_blank_aisle_falls_through_to_food_type() {
        let food = food_with(Some(" ; "), Some("Brand"));
        assert_eq!(resolve_aisle(Some(&food)), PACKAGED_FOODS_AISLE);
    }

    #[test]
    fn test_brand_without_aisle_is_packaged_foods() {
        let food = food_with(None, Some("Brand"));
        assert_eq!(resolve_aisle(Some(&food)), PACKAGED_FOODS_AISLE);
    }

    #[test]
    fn test_generic_without_aisle_is_other() {
        let food = food_with(None, Some("Generic"));
        assert_eq!(resolve_aisle(Some(&food)), OTHER_AISLE);
    }

    #[test]
    fn test_no_food_is_other() {
        assert_eq!(resolve_aisle(None), OTHER_AISLE);
    }
}
