//! # Stock Ledger
//!
//! The shared keyed store of quantity-on-hand.
//!
//! ## Aliasing Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog items            Stock ledger                      │
//! │                                                             │
//! │  "Large Fries"  ──┐                                         │
//! │  "Medium Fries" ──┼─────► "Fries"   { quantity, "grams" }   │
//! │  "Small Fries"  ──┘                                         │
//! │                                                             │
//! │  "Sesame bun"   ────────► "Sesame bun" { quantity, "pcs" }  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//! Several catalog items may consume from the same stock key (size
//! variants). Items hold the *key*, never the counter cell, so the ledger
//! is the single owner of every quantity.
//!
//! ## Invariant
//! A completed mutation never leaves a quantity negative. During the
//! checkout protocol's provisional decrement a quantity may go transiently
//! negative; the checkout engine is obligated to roll it back before
//! returning (see [`crate::checkout`]).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::ValidationResult;

// =============================================================================
// Stock Entry
// =============================================================================

/// One tracked stock slot: how much is on hand, and in what unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    /// Quantity on hand, in `unit`s.
    pub quantity: i64,
    /// Unit label ("grams", "mL", "pcs", ...). Fixed by the first
    /// registrant of the key.
    pub unit: String,
}

// =============================================================================
// Stock Ledger
// =============================================================================

/// Mapping from stock key to quantity-on-hand.
///
/// Entries are created lazily the first time a catalog item referencing the
/// key is constructed, and never removed. `BTreeMap` keeps iteration and
/// snapshot output deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockLedger {
    entries: BTreeMap<String, StockEntry>,
}

impl StockLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        StockLedger {
            entries: BTreeMap::new(),
        }
    }

    /// Registers a stock key with zero quantity if it is not yet present.
    ///
    /// The first registrant for a shared key wins on the unit label; later
    /// registrations of the same key are no-ops.
    pub fn register(&mut self, key: &str, unit: &str) {
        self.entries
            .entry(key.to_string())
            .or_insert_with(|| StockEntry {
                quantity: 0,
                unit: unit.to_string(),
            });
    }

    /// Whether a key has been registered.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Current quantity for a key. A key that was never registered reads
    /// as zero.
    pub fn quantity(&self, key: &str) -> i64 {
        self.entries.get(key).map_or(0, |entry| entry.quantity)
    }

    /// Unit label for a key, if registered.
    pub fn unit(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.unit.as_str())
    }

    /// Assigns an absolute quantity to a key.
    ///
    /// Fails on negative amounts. Unregistered keys are ignored, matching
    /// the boundary contract that unknown keys in a stock update are
    /// skipped rather than created.
    pub fn set_quantity(&mut self, key: &str, amount: i64) -> ValidationResult<()> {
        if amount < 0 {
            return Err(ValidationError::NegativeStock);
        }

        if let Some(entry) = self.entries.get_mut(key) {
            entry.quantity = amount;
        }

        Ok(())
    }

    /// Adds a signed delta to a key's quantity, with no bound check.
    ///
    /// This is the raw primitive under the checkout protocol: callers are
    /// responsible for validating the aggregate result and rolling back
    /// (see [`crate::checkout`]). Unregistered keys are ignored.
    pub fn apply(&mut self, key: &str, delta: i64) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.quantity += delta;
        }
    }

    /// Read view of every entry, in key order.
    pub fn levels(&self) -> &BTreeMap<String, StockEntry> {
        &self.entries
    }

    /// Iterates over the registered keys, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
