//! # Menu Catalog
//!
//! The immutable menu: every orderable unit, from a bun to a large juice,
//! is a [`CatalogItem`] held in an arena and addressed by [`ItemId`].
//!
//! ## Identity Model
//! Composites and orders hold `ItemId`s — plain indexes into the catalog —
//! rather than references or clones. Together with the ledger holding the
//! quantities (see [`crate::ledger`]), this keeps the whole system an owned
//! aggregate with no shared mutable cells:
//!
//! ```text
//! Burger { bun: ItemId, ingredients: Vec<ItemId> }
//!                │
//!                ▼
//! Catalog[ItemId] ──► CatalogItem { price, serving, stock_key }
//!                                                       │
//!                                                       ▼
//!                                      StockLedger["Sesame bun"]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::ledger::StockLedger;
use crate::money::Money;
use crate::validation::{self, ValidationResult};
use crate::PATTY_ITEMS;

// =============================================================================
// Item Id
// =============================================================================

/// Index of a [`CatalogItem`] in its catalog's arena.
///
/// An `ItemId` is only meaningful for the catalog that issued it. Identity
/// comparisons (deduplication during checkout) compare these indexes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ItemId(usize);

// =============================================================================
// Catalog Item
// =============================================================================

/// An immutable menu entry.
///
/// Price and per-serving consumption are fixed at construction. The item
/// does not hold its own stock count; it holds the `stock_key` under which
/// the shared ledger tracks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique display name ("Large Fries").
    name: String,
    /// Price per serving.
    price: Money,
    /// How much of the stock key one serving consumes (175 grams, 1 pc).
    serving: u32,
    /// Unit label for the serving quantity.
    unit: String,
    /// Ledger key this item consumes from. Defaults to the item name;
    /// size variants share a key ("Fries").
    stock_key: String,
}

impl CatalogItem {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price per serving.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Stock consumed per serving, in this item's unit.
    pub fn serving(&self) -> u32 {
        self.serving
    }

    /// Unit label ("grams", "mL", "pcs", ...).
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// The ledger key this item draws stock from.
    pub fn stock_key(&self) -> &str {
        &self.stock_key
    }

    /// Whether this item counts toward a composite's patty limit.
    pub fn is_patty(&self) -> bool {
        PATTY_ITEMS.contains(&self.name.as_str())
    }

    /// Current stock level for this item's key.
    pub fn stock(&self, ledger: &StockLedger) -> i64 {
        ledger.quantity(&self.stock_key)
    }

    /// Assigns an absolute stock level for this item's key.
    ///
    /// Fails with a validation error on negative amounts.
    pub fn set_stock(&self, ledger: &mut StockLedger, amount: i64) -> ValidationResult<()> {
        ledger.set_quantity(&self.stock_key, amount)
    }

    /// Adds a signed delta to this item's stock key, with no bound check.
    ///
    /// Callers are responsible for validating the aggregate result through
    /// the checkout protocol.
    pub fn apply(&self, ledger: &mut StockLedger, delta: i64) {
        ledger.apply(&self.stock_key, delta);
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Arena of menu items with a name index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    by_name: BTreeMap<String, ItemId>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            items: Vec::new(),
            by_name: BTreeMap::new(),
        }
    }

    /// Adds a menu item, registering its stock key in the ledger.
    ///
    /// ## Rules
    /// - `price` must be non-negative
    /// - `serving` must be positive
    /// - `name` must be unique in this catalog
    /// - `stock_key` defaults to `name`; the first item to register a
    ///   shared key fixes its unit label
    pub fn add(
        &mut self,
        ledger: &mut StockLedger,
        name: &str,
        price: Money,
        serving: u32,
        unit: &str,
        stock_key: Option<&str>,
    ) -> CoreResult<ItemId> {
        validation::validate_item_price(name, price)?;
        validation::validate_serving_quantity(name, serving)?;

        if self.by_name.contains_key(name) {
            return Err(ValidationError::DuplicateItem {
                name: name.to_string(),
            }
            .into());
        }

        let stock_key = stock_key.unwrap_or(name);
        ledger.register(stock_key, unit);

        let id = ItemId(self.items.len());
        self.items.push(CatalogItem {
            name: name.to_string(),
            price,
            serving,
            unit: unit.to_string(),
            stock_key: stock_key.to_string(),
        });
        self.by_name.insert(name.to_string(), id);

        Ok(id)
    }

    /// Borrows an item by id.
    ///
    /// Ids are only issued by [`Catalog::add`], so an id is always in
    /// range for the catalog that produced it.
    pub fn get(&self, id: ItemId) -> &CatalogItem {
        &self.items[id.0]
    }

    /// Finds an item id by display name.
    pub fn lookup(&self, name: &str) -> Option<ItemId> {
        self.by_name.get(name).copied()
    }

    /// Iterates over every item in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &CatalogItem)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (ItemId(index), item))
    }

    /// Number of menu items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
