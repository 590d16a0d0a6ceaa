//! # gourmet-core: Pure Business Logic for the Gourmet Ordering System
//!
//! This crate is the **heart** of the Gourmet burger system. It contains
//! all business logic as pure data structures with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Web front end (excluded)                   │
//! │      menu pages ──► order forms ──► staff stock panel       │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │
//! ┌──────────────────────────────▼──────────────────────────────┐
//! │               ★ gourmet-core (THIS CRATE) ★                 │
//! │                                                             │
//! │   ┌─────────┐  ┌────────┐  ┌───────────┐  ┌────────────┐    │
//! │   │ catalog │  │ ledger │  │ composite │  │ checkout   │    │
//! │   │ + money │  │        │  │ + order   │  │ + registry │    │
//! │   └─────────┘  └────────┘  └───────────┘  └────────────┘    │
//! │                                                             │
//! │        NO I/O • NO NETWORK • OWNED AGGREGATE                │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │
//! ┌──────────────────────────────▼──────────────────────────────┐
//! │            gourmet-store (snapshot persistence)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Integer-cents money type (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation helpers
//! - [`ledger`] - The shared stock ledger (keyed quantity store)
//! - [`catalog`] - Menu items and the item arena
//! - [`composite`] - Burgers and wraps with construction invariants
//! - [`order`] - Orders and the lifecycle status
//! - [`checkout`] - The decrement-validate-rollback protocol
//! - [`registry`] - Sequential order ids and storage
//! - [`system`] - The context object tying it all together
//!
//! ## Design Principles
//!
//! 1. **Owned aggregate**: items are arena indexes, quantities live in the
//!    ledger — no shared mutable cells anywhere
//! 2. **No I/O**: persistence and request handling live in other crates
//! 3. **Integer money**: all monetary values are cents (i64)
//! 4. **Explicit errors**: typed variants, never strings or panics
//! 5. **Single-threaded core**: checkout must be treated as a critical
//!    section by any concurrent caller (see [`checkout`])

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod checkout;
pub mod composite;
pub mod error;
pub mod ledger;
pub mod money;
pub mod order;
pub mod registry;
pub mod system;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gourmet_core::GourmetSystem` instead of
// `use gourmet_core::system::GourmetSystem`.

pub use catalog::{Catalog, CatalogItem, ItemId};
pub use composite::{Burger, Wrap};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{StockEntry, StockLedger};
pub use money::Money;
pub use order::{Order, OrderStatus};
pub use registry::OrderRegistry;
pub use system::GourmetSystem;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum bun slots in a burger.
pub const MIN_BUNS: usize = 2;

/// Maximum patties in any composite item.
///
/// ## Business Reason
/// The kitchen's press can stack ten patties before the result stops
/// holding together; both burgers and wraps share the cap.
pub const MAX_PATTIES: usize = 10;

/// The ingredient names that count toward [`MAX_PATTIES`].
pub const PATTY_ITEMS: [&str; 3] = ["Chicken Patty", "Vegetarian Patty", "Beef Patty"];
