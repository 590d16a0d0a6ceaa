//! # Orders
//!
//! An order aggregates composite items, sides, and drinks, and owns a
//! lifecycle status.
//!
//! ## Lifecycle
//! ```text
//! selection ──checkout──► being prepared ──► ready ──► collected
//! ```
//! Checkout is the only transition the core drives itself (see
//! [`crate::checkout`]). Every later move is administrative — staff may set
//! any of the four legal statuses in any direction. Membership is the only
//! constraint, and it is enforced at the string boundary by
//! [`OrderStatus::from_str`]; the typed setter cannot produce an illegal
//! value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ItemId};
use crate::composite::{Burger, Wrap};
use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Order Status
// =============================================================================

/// The lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Customer is still composing the order.
    Selection,
    /// Checkout committed the stock; the kitchen has it.
    BeingPrepared,
    /// Ready for the customer to pick up.
    Ready,
    /// Handed over.
    Collected,
}

impl OrderStatus {
    /// The boundary-facing name, as shown to staff and customers.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Selection => "selection",
            OrderStatus::BeingPrepared => "being prepared",
            OrderStatus::Ready => "ready",
            OrderStatus::Collected => "collected",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Selection
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "selection" => Ok(OrderStatus::Selection),
            "being prepared" => Ok(OrderStatus::BeingPrepared),
            "ready" => Ok(OrderStatus::Ready),
            "collected" => Ok(OrderStatus::Collected),
            other => Err(ValidationError::UnknownStatus {
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order: burgers, wraps, sides, drinks, and a status.
///
/// Collections are replaced wholesale by the `set_*` methods — the web
/// layer re-submits the full selection on every edit rather than patching
/// it incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: String,
    burgers: Vec<Burger>,
    wraps: Vec<Wrap>,
    sides: Vec<ItemId>,
    drinks: Vec<ItemId>,
    status: OrderStatus,
}

impl Order {
    /// Creates an empty order in `selection`. Ids are issued by the
    /// order registry.
    pub(crate) fn new(id: String) -> Self {
        Order {
            id,
            burgers: Vec::new(),
            wraps: Vec::new(),
            sides: Vec::new(),
            drinks: Vec::new(),
            status: OrderStatus::Selection,
        }
    }

    /// The registry-issued id, a stringified integer.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current lifecycle status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Sets the lifecycle status. Any of the four legal values may follow
    /// any other (administrative override).
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Replaces the burgers wholesale.
    pub fn set_burgers(&mut self, burgers: Vec<Burger>) {
        self.burgers = burgers;
    }

    /// Replaces the wraps wholesale.
    pub fn set_wraps(&mut self, wraps: Vec<Wrap>) {
        self.wraps = wraps;
    }

    /// Replaces the sides wholesale.
    pub fn set_sides(&mut self, sides: Vec<ItemId>) {
        self.sides = sides;
    }

    /// Replaces the drinks wholesale.
    pub fn set_drinks(&mut self, drinks: Vec<ItemId>) {
        self.drinks = drinks;
    }

    /// The burgers in this order.
    pub fn burgers(&self) -> &[Burger] {
        &self.burgers
    }

    /// The wraps in this order.
    pub fn wraps(&self) -> &[Wrap] {
        &self.wraps
    }

    /// The sides in this order.
    pub fn sides(&self) -> &[ItemId] {
        &self.sides
    }

    /// The drinks in this order.
    pub fn drinks(&self) -> &[ItemId] {
        &self.drinks
    }

    /// Flattens the order into one sequence of item occurrences: per
    /// burger, `bun_count` copies of its bun then its ingredients; per
    /// wrap, its ingredients; then sides; then drinks.
    ///
    /// This flattened list is the unit of stock accounting — checkout
    /// decrements the ledger once per occurrence.
    pub fn list_all(&self) -> Vec<ItemId> {
        let mut items = Vec::new();
        for burger in &self.burgers {
            items.extend(burger.items());
        }
        for wrap in &self.wraps {
            items.extend(wrap.items());
        }
        items.extend_from_slice(&self.sides);
        items.extend_from_slice(&self.drinks);
        items
    }

    /// Total price: burger, wrap, side, and drink prices summed (composite
    /// prices already account for bun multiplicity).
    pub fn price(&self, catalog: &Catalog) -> Money {
        let burgers: Money = self.burgers.iter().map(|b| b.price(catalog)).sum();
        let wraps: Money = self.wraps.iter().map(|w| w.price(catalog)).sum();
        let sides: Money = self.sides.iter().map(|&id| catalog.get(id).price()).sum();
        let drinks: Money = self.drinks.iter().map(|&id| catalog.get(id).price()).sum();
        burgers + wraps + sides + drinks
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
