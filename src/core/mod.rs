//! Core business logic - Framework-agnostic shopping list engine.
//!
//! The pure pieces (identity, consolidation, aisle resolution, grouping,
//! scaling math) are total functions over in-memory data; the async pieces
//! talk to the store and validate input at the boundary.

/// Aisle resolution for catalog foods
pub mod aisle;
/// Checked-state propagation across consolidated rows
pub mod checklist;
/// Merging duplicate raw rows into consolidated display entries
pub mod consolidate;
/// Grouping consolidated entries for display, by recipe or by aisle
pub mod grouping;
/// Consolidation key derivation
pub mod identity;
/// Item reads/writes and bulk clears
pub mod item;
/// Read-only recipe access
pub mod recipe;
/// Recipe-to-list ingredient scaling
pub mod scaling;
/// List lifecycle and the single-default invariant
pub mod shopping_list;
