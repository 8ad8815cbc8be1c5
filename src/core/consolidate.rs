//! Consolidation engine - Merges raw list rows into display aggregates.
//!
//! A flat list accumulates duplicate rows: the same food added manually and
//! by a recipe, or by the same recipe twice at different serving counts.
//! Consolidation folds rows sharing a consolidation key into one entry,
//! summing quantities and collecting the underlying row ids so checked-state
//! toggles can be propagated back to every member.

use crate::{
    core::{identity::consolidation_key, item::ListItemView},
    entities::{food, recipe, serving, shopping_list_item},
};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// A derived, display-only aggregate of one or more raw items believed to
/// represent the same purchase. Never persisted; recomputed on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidatedItem {
    /// Representative raw row (the first one merged into this entry)
    pub item: shopping_list_item::Model,
    /// Joined food of the representative row, if any
    pub food: Option<food::Model>,
    /// Joined serving of the representative row, if any
    pub serving: Option<serving::Model>,
    /// Joined recipe of the representative row, if any
    pub recipe: Option<recipe::Model>,
    /// IDs of every raw row merged into this entry, in arrival order.
    /// Never empty: an unmergeable row becomes a singleton entry.
    pub consolidated_ids: Vec<i64>,
    /// Sum of the members' quantities, unset quantities counting as zero.
    /// `0.0` can therefore mean "unspecified"; callers must not hide such rows.
    pub number_of_servings: f64,
}

/// Folds raw list rows into consolidated entries, preserving first-seen-key
/// order.
///
/// Each keyable row merges into the entry for its consolidation key; each
/// unkeyable row becomes a singleton entry. Every input row id ends up in
/// exactly one entry's `consolidated_ids`. The fold is pure and idempotent
/// for a given input sequence.
#[must_use]
pub fn consolidate(views: Vec<ListItemView>, scope_by_recipe: bool) -> Vec<ConsolidatedItem> {
    let mut entries: Vec<ConsolidatedItem> = Vec::with_capacity(views.len());
    // Insertion order lives in `entries`; the map only locates the slot.
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(views.len());

    for view in views {
        // Singleton keys use the row's own id, which cannot collide with the
        // provider-prefixed keys.
        let key = consolidation_key(&view, scope_by_recipe)
            .unwrap_or_else(|| format!("item:{}", view.item.id));

        match slots.entry(key) {
            Entry::Occupied(slot) => {
                let entry = &mut entries[*slot.get()];
                entry.number_of_servings += view.item.number_of_servings.unwrap_or(0.0);
                entry.consolidated_ids.push(view.item.id);
            }
            Entry::Vacant(slot) => {
                slot.insert(entries.len());
                let quantity = view.item.number_of_servings.unwrap_or(0.0);
                let consolidated_ids = vec![view.item.id];
                entries.push(ConsolidatedItem {
                    item: view.item,
                    food: view.food,
                    serving: view.serving,
                    recipe: view.recipe,
                    consolidated_ids,
                    number_of_servings: quantity,
                });
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{fatsecret_item_view, plain_item_view};
    use std::collections::BTreeSet;

    fn with_servings(mut view: ListItemView, servings: Option<f64>) -> ListItemView {
        view.item.number_of_servings = servings;
        view
    }

    #[test]
    fn test_matching_items_merge_and_sum() {
        let views = vec![
            with_servings(
                fatsecret_item_view(1, "fs-100", "cup", None, None),
                Some(1.5),
            ),
            with_servings(
                fatsecret_item_view(2, "fs-100", "cup", None, None),
                Some(0.5),
            ),
        ];

        let consolidated = consolidate(views, false);
        assert_eq!(consolidated.len(), 1);
        assert_eq!(consolidated[0].consolidated_ids, vec![1, 2]);
        assert_eq!(consolidated[0].number_of_servings, 2.0);
        // Representative is the first row merged
        assert_eq!(consolidated[0].item.id, 1);
    }

    #[test]
    fn test_differing_notes_do_not_merge() {
        let views = vec![
            fatsecret_item_view(1, "fs-100", "cup", Some("organic only"), None),
            fatsecret_item_view(2, "fs-100", "cup", None, None),
        ];

        let consolidated = consolidate(views, false);
        assert_eq!(consolidated.len(), 2);
    }

    #[test]
    fn test_custom_items_stay_singletons() {
        // Identical text on both rows; custom items still never merge
        let views = vec![
            plain_item_view(1, Some("napkins"), None),
            plain_item_view(2, Some("napkins"), None),
        ];

        let consolidated = consolidate(views, false);
        assert_eq!(consolidated.len(), 2);
        assert_eq!(consolidated[0].consolidated_ids, vec![1]);
        assert_eq!(consolidated[1].consolidated_ids, vec![2]);
    }

    #[test]
    fn test_recipe_scope_prevents_cross_recipe_merge() {
        let views = vec![
            fatsecret_item_view(1, "fs-100", "cup", None, Some(10)),
            fatsecret_item_view(2, "fs-100", "cup", None, Some(20)),
        ];

        let scoped = consolidate(views.clone(), true);
        assert_eq!(scoped.len(), 2);

        let unscoped = consolidate(views, false);
        assert_eq!(unscoped.len(), 1);
        assert_eq!(unscoped[0].consolidated_ids, vec![1, 2]);
    }

    #[test]
    fn test_every_input_id_appears_exactly_once() {
        let views = vec![
            fatsecret_item_view(1, "fs-100", "cup", None, None),
            plain_item_view(2, Some("napkins"), None),
            fatsecret_item_view(3, "fs-100", "cup", None, None),
            fatsecret_item_view(4, "fs-200", "tbsp", None, None),
            plain_item_view(5, None, None),
        ];

        let consolidated = consolidate(views, false);
        let mut seen = BTreeSet::new();
        for entry in &consolidated {
            assert!(!entry.consolidated_ids.is_empty());
            for id in &entry.consolidated_ids {
                assert!(seen.insert(*id), "id {id} appeared twice");
            }
        }
        assert_eq!(seen, BTreeSet::from([1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_consolidation_is_idempotent() {
        let views: Vec<ListItemView> = vec![
            fatsecret_item_view(1, "fs-100", "cup", None, None),
            fatsecret_item_view(2, "fs-100", "cup", None, None),
            plain_item_view(3, Some("napkins"), None),
        ];

        let first = consolidate(views.clone(), false);
        let second = consolidate(views, false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unset_quantity_sums_as_zero_but_still_merges() {
        let views = vec![
            with_servings(fatsecret_item_view(1, "fs-100", "cup", None, None), None),
            with_servings(
                fatsecret_item_view(2, "fs-100", "cup", None, None),
                Some(2.0),
            ),
        ];

        let consolidated = consolidate(views, false);
        assert_eq!(consolidated.len(), 1);
        assert_eq!(consolidated[0].number_of_servings, 2.0);

        // All members unspecified: the row survives with a 0.0 sum
        let views = vec![with_servings(
            fatsecret_item_view(3, "fs-100", "cup", None, None),
            None,
        )];
        let consolidated = consolidate(views, false);
        assert_eq!(consolidated.len(), 1);
        assert_eq!(consolidated[0].number_of_servings, 0.0);
    }

    #[test]
    fn test_first_seen_key_order_is_preserved() {
        let views = vec![
            fatsecret_item_view(1, "fs-300", "oz", None, None),
            fatsecret_item_view(2, "fs-100", "cup", None, None),
            fatsecret_item_view(3, "fs-300", "oz", None, None),
        ];

        let consolidated = consolidate(views, false);
        assert_eq!(consolidated.len(), 2);
        assert_eq!(consolidated[0].consolidated_ids, vec![1, 3]);
        assert_eq!(consolidated[1].consolidated_ids, vec![2]);
    }
}
