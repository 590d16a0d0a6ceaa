//! # Error Types
//!
//! Domain-specific error types for gourmet-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  gourmet-core errors (this file)                            │
//! │  ├── CoreError        - Domain operation failures           │
//! │  └── ValidationError  - Construction/input violations       │
//! │                                                             │
//! │  gourmet-store errors (separate crate)                      │
//! │  └── StoreError       - Snapshot persistence failures       │
//! │                                                             │
//! │  Flow: ValidationError → CoreError → web layer response     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is fatal: every error leaves the system in a state the
//! caller can retry from. `CoreError::OutOfStock` in particular guarantees
//! the stock ledger was restored to its exact pre-call levels.

use std::collections::BTreeMap;

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These surface to the immediate caller; the web layer translates them
/// into user-facing responses.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A construction or mutation rule was violated.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Checkout or a stock probe found insufficient inventory.
    ///
    /// `shortages` holds the names of the distinct items whose stock went
    /// negative, in first-occurrence order. The ledger has already been
    /// restored to its pre-call levels when this is returned.
    #[error("Out of stock: {}", .shortages.join(", "))]
    OutOfStock { shortages: Vec<String> },

    /// One or more keys in a bulk stock update were rejected.
    ///
    /// This is a mixed partial-success report: `errors` maps each rejected
    /// key to its message, while `applied` maps each key that WAS updated
    /// to a confirmation message. Valid keys stay applied even though the
    /// call as a whole errors.
    #[error("{} stock level update(s) rejected", .errors.len())]
    StockUpdate {
        errors: BTreeMap<String, String>,
        applied: BTreeMap<String, String>,
    },

    /// Name lookup against the menu failed.
    #[error("No menu item named '{name}'")]
    UnknownItem { name: String },

    /// An order id that is not the digits of an integer.
    #[error("Order id must be a string of an integer, got '{id}'")]
    InvalidOrderId { id: String },

    /// A well-formed order id with no order behind it.
    #[error("Order not found: {id}")]
    OrderNotFound { id: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Construction and input validation errors.
///
/// Raised synchronously at the point of violation; the object under
/// construction never comes to exist in an invalid state.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A burger was given fewer than two bun slots.
    #[error("You must have at least two buns.")]
    AtLeastTwoBuns,

    /// A burger's bun slots reference more than one bun type.
    #[error("Cannot mix bun types.")]
    MixedBunTypes,

    /// More buns than the patty count supports.
    #[error("You can have at most one more bun than patties.")]
    BunsExceedPatties,

    /// More than the maximum number of patties in a composite.
    #[error("You can't have more than 10 patties.")]
    TooManyPatties,

    /// Attempt to assign a negative stock level directly.
    #[error("Can't have negative stock.")]
    NegativeStock,

    /// A status string outside the four legal lifecycle values.
    #[error("Status must be one of 'selection', 'being prepared', 'ready', or 'collected'.")]
    UnknownStatus { value: String },

    /// A catalog item constructed with a negative price.
    #[error("'{name}' cannot have a negative price")]
    NegativePrice { name: String },

    /// A catalog item constructed with a zero per-serving quantity.
    #[error("'{name}' must consume a positive quantity per serving")]
    ZeroServing { name: String },

    /// A catalog item name that is already taken.
    #[error("Menu already has an item named '{name}'")]
    DuplicateItem { name: String },

    /// A stock level that does not parse as an integer.
    #[error("Please enter an integer.")]
    StockNotInteger,

    /// A stock level below zero.
    #[error("Please enter a stock level greater than 0.")]
    StockBelowZero,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
