//! Unified error types and result handling.
//!
//! All fallible operations in the crate return [`Result`]. Pure engine
//! functions (consolidation, grouping, aisle resolution, scaling math) are
//! total and never construct these errors; validation happens in the async
//! store-facing operations before anything is written.

use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration problem (bad config file, invalid user input)
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Database error bubbled up from SeaORM
    #[error("Database error: {source}")]
    Database {
        /// Underlying SeaORM error
        #[from]
        source: sea_orm::DbErr,
    },

    /// Shopping list lookup failed
    #[error("Shopping list {id} not found")]
    ListNotFound {
        /// ID of the missing list
        id: i64,
    },

    /// Shopping list item lookup or update matched no row
    #[error("Shopping list item {id} not found")]
    ItemNotFound {
        /// ID of the missing item
        id: i64,
    },

    /// Recipe lookup failed
    #[error("Recipe {id} not found")]
    RecipeNotFound {
        /// ID of the missing recipe
        id: i64,
    },

    /// A serving count was negative, zero where disallowed, or not finite
    #[error("Invalid serving count: {value}")]
    InvalidServings {
        /// The rejected value
        value: f64,
    },

    /// Deleting a default list without naming a replacement default
    #[error("List {list_id} is the default list; a replacement default is required")]
    DefaultListRequired {
        /// ID of the default list the caller tried to delete
        list_id: i64,
    },

    /// A fanned-out task failed to run to completion
    #[error("Background task failed: {message}")]
    Join {
        /// Description of the join failure
        message: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
