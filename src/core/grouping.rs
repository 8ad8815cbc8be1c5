//! Grouping engine - Partitions consolidated items into named display groups.
//!
//! Two modes: "by recipe" for the cook-through view (one group per
//! originating recipe, manual catalog items under "Other", free-text items
//! under "Custom Items") and "by aisle" for the walk-the-store view. Group
//! ordering is deterministic in both modes; member order within a group is
//! arrival order from consolidation, untouched.

use crate::core::{
    aisle::{OTHER_AISLE, resolve_aisle},
    consolidate::ConsolidatedItem,
};
use std::collections::HashMap;

/// How a list should be partitioned for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingMode {
    /// One group per originating recipe, plus "Other" and "Custom Items"
    ByRecipe,
    /// One group per resolved aisle name
    ByAisle,
}

/// Partition key of a display group.
///
/// The reserved buckets are enum cases rather than magic strings so the
/// "always sort last" rules are matched structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// Items expanded from one recipe
    Recipe(i64),
    /// Items in one store aisle (aisle mode only)
    Aisle(String),
    /// Catalog-linked items with no originating recipe (recipe mode only)
    Other,
    /// Free-text custom items (recipe mode only)
    Custom,
}

/// A named bucket of consolidated items for display
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Partition key
    pub key: GroupKey,
    /// Display label
    pub name: String,
    /// Members, in arrival order from consolidation
    pub items: Vec<ConsolidatedItem>,
}

/// Display label of the recipe-mode bucket for manual catalog items
pub const OTHER_GROUP_NAME: &str = "Other";

/// Display label of the recipe-mode bucket for free-text items
pub const CUSTOM_GROUP_NAME: &str = "Custom Items";

/// Partitions consolidated items into ordered display groups.
///
/// Recipe mode: recipe groups come first, ordered by the recipe's creation
/// time (then id), followed by "Other" and finally "Custom Items". A recipe
/// group is labelled with the recipe's name when the join is present.
///
/// Aisle mode: one group per resolved aisle, ascending alphabetically, with
/// the "Other" aisle pinned last.
#[must_use]
pub fn group_items(items: Vec<ConsolidatedItem>, mode: GroupingMode) -> Vec<Group> {
    match mode {
        GroupingMode::ByRecipe => group_by_recipe(items),
        GroupingMode::ByAisle => group_by_aisle(items),
    }
}

fn group_by_recipe(items: Vec<ConsolidatedItem>) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut slots: HashMap<GroupKey, usize> = HashMap::new();

    for item in items {
        let (key, name) = if let Some(recipe_id) = item.item.recipe_id {
            let name = item
                .recipe
                .as_ref()
                .map_or_else(|| format!("Recipe {recipe_id}"), |r| r.name.clone());
            (GroupKey::Recipe(recipe_id), name)
        } else if item.item.food_id.is_some() {
            (GroupKey::Other, OTHER_GROUP_NAME.to_string())
        } else {
            (GroupKey::Custom, CUSTOM_GROUP_NAME.to_string())
        };

        let slot = *slots.entry(key.clone()).or_insert_with(|| {
            groups.push(Group {
                key,
                name,
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].items.push(item);
    }

    // Recipe groups by creation time then id; "Other" second-to-last,
    // "Custom Items" always last.
    groups.sort_by_key(|group| match &group.key {
        GroupKey::Recipe(recipe_id) => {
            let created = group
                .items
                .first()
                .and_then(|item| item.recipe.as_ref())
                .map_or(i64::MIN, |recipe| recipe.created_at.timestamp_millis());
            (0_u8, created, *recipe_id)
        }
        GroupKey::Other => (1, 0, 0),
        GroupKey::Custom | GroupKey::Aisle(_) => (2, 0, 0),
    });

    groups
}

fn group_by_aisle(items: Vec<ConsolidatedItem>) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut slots: HashMap<GroupKey, usize> = HashMap::new();

    for item in items {
        let aisle = resolve_aisle(item.food.as_ref());
        let key = GroupKey::Aisle(aisle.clone());

        let slot = *slots.entry(key.clone()).or_insert_with(|| {
            groups.push(Group {
                key,
                name: aisle,
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].items.push(item);
    }

    groups.sort_by_key(|group| (group.name == OTHER_AISLE, group.name.clone()));

    groups
}
