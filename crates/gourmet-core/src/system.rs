//! # Gourmet System
//!
//! The context object handed to every caller: catalog + stock ledger +
//! order registry + standard presets behind one handle.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      GourmetSystem                          │
//! │                                                             │
//! │   ┌──────────┐  ┌─────────────┐  ┌───────────────┐          │
//! │   │ Catalog  │  │ StockLedger │  │ OrderRegistry │          │
//! │   │ 41 items │  │ 28 keys     │  │ "0", "1", ... │          │
//! │   └──────────┘  └─────────────┘  └───────────────┘          │
//! │                                                             │
//! │   standard burger / standard wrap presets                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no global: request handlers receive a `&mut GourmetSystem`
//! constructed once at process start (and persisted wholesale as a single
//! snapshot by the store crate).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ItemId};
use crate::checkout;
use crate::composite::{Burger, Wrap};
use crate::error::{CoreError, CoreResult};
use crate::ledger::{StockEntry, StockLedger};
use crate::money::Money;
use crate::order::Order;
use crate::registry::OrderRegistry;
use crate::validation;

// =============================================================================
// Default Menu
// =============================================================================
// (name, price in cents, quantity per serving, unit, shared stock key)

type MenuEntry = (&'static str, i64, u32, &'static str, Option<&'static str>);

const DRINKS: &[MenuEntry] = &[
    ("Large Orange Juice", 700, 650, "mL", Some("Orange Juice")),
    ("Medium Orange Juice", 550, 450, "mL", Some("Orange Juice")),
    ("Small Orange Juice", 400, 250, "mL", Some("Orange Juice")),
    ("Large Apple Juice", 700, 650, "mL", Some("Apple Juice")),
    ("Medium Apple Juice", 550, 450, "mL", Some("Apple Juice")),
    ("Small Apple Juice", 400, 250, "mL", Some("Apple Juice")),
    ("Large Cranberry Juice", 700, 650, "mL", Some("Cranberry Juice")),
    ("Medium Cranberry Juice", 550, 450, "mL", Some("Cranberry Juice")),
    ("Small Cranberry Juice", 400, 250, "mL", Some("Cranberry Juice")),
    ("Large Pomegranate Juice", 700, 650, "mL", Some("Pomegranate Juice")),
    ("Medium Pomegranate Juice", 550, 450, "mL", Some("Pomegranate Juice")),
    ("Small Pomegranate Juice", 400, 250, "mL", Some("Pomegranate Juice")),
    ("600ml Coke", 450, 1, "bottles", None),
    ("350ml Coke", 300, 1, "cans", None),
    ("600ml Sprite", 450, 1, "bottles", None),
    ("350ml Sprite", 300, 1, "cans", None),
    ("600ml Lift", 450, 1, "bottles", None),
    ("350ml Lift", 300, 1, "cans", None),
];

const SIDES: &[MenuEntry] = &[
    ("Large Fries", 300, 175, "grams", Some("Fries")),
    ("Medium Fries", 300, 125, "grams", Some("Fries")),
    ("Small Fries", 300, 75, "grams", Some("Fries")),
    ("20-Pack Nuggets", 500, 20, "pcs", Some("Nuggets")),
    ("10-Pack Nuggets", 300, 10, "pcs", Some("Nuggets")),
    ("6-Pack Nuggets", 200, 6, "pcs", Some("Nuggets")),
    ("3-Pack Nuggets", 100, 3, "pcs", Some("Nuggets")),
    ("Large Chocolate Sundae", 300, 1, "servings", None),
    ("Medium Chocolate Sundae", 200, 1, "servings", None),
    ("Small Chocolate Sundae", 100, 1, "servings", None),
    ("Large Strawberry Sundae", 300, 1, "servings", None),
    ("Medium Strawberry Sundae", 200, 1, "servings", None),
    ("Small Strawberry Sundae", 100, 1, "servings", None),
];

const BUNS: &[MenuEntry] = &[
    ("Sesame bun", 50, 1, "pcs", None),
    ("Muffin bun", 50, 1, "pcs", None),
];

const INGREDIENTS: &[MenuEntry] = &[
    ("Chicken Patty", 200, 1, "servings", None),
    ("Vegetarian Patty", 200, 1, "servings", None),
    ("Beef Patty", 200, 1, "servings", None),
    ("Tomato", 100, 1, "portions", None),
    ("Lettuce", 100, 1, "portions", None),
    ("Cheddar Cheese", 100, 1, "portions", None),
    ("Swiss Cheese", 100, 1, "portions", None),
    ("Tomato Sauce", 100, 1, "portions", None),
];

/// Confirmation message recorded per applied key in a bulk stock update.
const STOCK_UPDATED_MSG: &str = "Stock level updated successfully";

fn register_section(
    catalog: &mut Catalog,
    ledger: &mut StockLedger,
    entries: &[MenuEntry],
) -> Vec<ItemId> {
    entries
        .iter()
        .map(|&(name, price_cents, serving, unit, stock_key)| {
            catalog
                .add(
                    ledger,
                    name,
                    Money::from_cents(price_cents),
                    serving,
                    unit,
                    stock_key,
                )
                .expect("default menu entries are statically valid")
        })
        .collect()
}

// =============================================================================
// Menu Sections
// =============================================================================

/// The menu grouped the way customers browse it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Menu {
    sides: Vec<ItemId>,
    drinks: Vec<ItemId>,
    ingredients: Vec<ItemId>,
    buns: Vec<ItemId>,
}

// =============================================================================
// Gourmet System
// =============================================================================

/// The whole ordering system as one owned aggregate.
///
/// Serializable wholesale: the store crate snapshots and restores this
/// struct as a unit, with no partial-load granularity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GourmetSystem {
    ledger: StockLedger,
    catalog: Catalog,
    menu: Menu,
    registry: OrderRegistry,
    standard_burger: Burger,
    standard_wrap: Wrap,
}

impl GourmetSystem {
    /// Builds the default system: full menu registered (all stock at
    /// zero), empty registry, and the two standard presets.
    pub fn new() -> Self {
        let mut ledger = StockLedger::new();
        let mut catalog = Catalog::new();

        let menu = Menu {
            sides: register_section(&mut catalog, &mut ledger, SIDES),
            drinks: register_section(&mut catalog, &mut ledger, DRINKS),
            ingredients: register_section(&mut catalog, &mut ledger, INGREDIENTS),
            buns: register_section(&mut catalog, &mut ledger, BUNS),
        };

        let item = |name: &str| {
            catalog
                .lookup(name)
                .expect("default menu item is registered")
        };

        let standard_burger = Burger::new(
            &catalog,
            vec![item("Beef Patty"), item("Cheddar Cheese"), item("Tomato Sauce")],
            &[item("Sesame bun"); 2],
        )
        .expect("standard burger is statically valid");

        let standard_wrap = Wrap::new(
            &catalog,
            vec![item("Chicken Patty"), item("Tomato"), item("Lettuce")],
        )
        .expect("standard wrap is statically valid");

        GourmetSystem {
            ledger,
            catalog,
            menu,
            registry: OrderRegistry::new(),
            standard_burger,
            standard_wrap,
        }
    }

    // -------------------------------------------------------------------------
    // Menu access
    // -------------------------------------------------------------------------

    /// The menu catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Looks up a menu item by name, erroring for the boundary layer on
    /// unknown names.
    pub fn item(&self, name: &str) -> CoreResult<ItemId> {
        self.catalog
            .lookup(name)
            .ok_or_else(|| CoreError::UnknownItem {
                name: name.to_string(),
            })
    }

    /// Side items, in menu order.
    pub fn sides(&self) -> &[ItemId] {
        &self.menu.sides
    }

    /// Drink items, in menu order.
    pub fn drinks(&self) -> &[ItemId] {
        &self.menu.drinks
    }

    /// Burger/wrap fillings, in menu order.
    pub fn ingredients(&self) -> &[ItemId] {
        &self.menu.ingredients
    }

    /// Bun types, in menu order.
    pub fn buns(&self) -> &[ItemId] {
        &self.menu.buns
    }

    /// The fixed standard burger preset.
    pub fn standard_burger(&self) -> &Burger {
        &self.standard_burger
    }

    /// The fixed standard wrap preset.
    pub fn standard_wrap(&self) -> &Wrap {
        &self.standard_wrap
    }

    // -------------------------------------------------------------------------
    // Composite construction
    // -------------------------------------------------------------------------

    /// Builds a burger against the system catalog.
    pub fn create_burger(&self, ingredients: Vec<ItemId>, buns: &[ItemId]) -> CoreResult<Burger> {
        Burger::new(&self.catalog, ingredients, buns)
    }

    /// Builds a wrap against the system catalog.
    pub fn create_wrap(&self, ingredients: Vec<ItemId>) -> CoreResult<Wrap> {
        Wrap::new(&self.catalog, ingredients)
    }

    // -------------------------------------------------------------------------
    // Stock
    // -------------------------------------------------------------------------

    /// Read view of the ledger, in key order.
    pub fn stock_levels(&self) -> &BTreeMap<String, StockEntry> {
        self.ledger.levels()
    }

    /// The stock ledger.
    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    /// Bulk stock upsert from raw boundary strings.
    ///
    /// Per key: unknown keys are skipped; values that fail to parse as a
    /// non-negative integer collect an error message; values equal to the
    /// current level are left alone silently; changed valid values are
    /// applied immediately and collect a confirmation message.
    ///
    /// Valid keys stay applied even when sibling keys fail — this is a
    /// partial-success bulk operation, NOT atomic like checkout. If any
    /// key failed, the error carries both the rejection map and the map of
    /// keys that were applied anyway.
    pub fn update_stock_levels(
        &mut self,
        updates: &BTreeMap<String, String>,
    ) -> CoreResult<BTreeMap<String, String>> {
        let mut errors = BTreeMap::new();
        let mut applied = BTreeMap::new();

        for (key, value) in updates {
            if !self.ledger.contains(key) {
                continue;
            }

            match validation::parse_stock_level(value) {
                Err(err) => {
                    errors.insert(key.clone(), err.to_string());
                }
                Ok(level) if level != self.ledger.quantity(key) => {
                    self.ledger
                        .set_quantity(key, level)
                        .expect("parsed stock levels are non-negative");
                    applied.insert(key.clone(), STOCK_UPDATED_MSG.to_string());
                }
                Ok(_) => {}
            }
        }

        if errors.is_empty() {
            Ok(applied)
        } else {
            Err(CoreError::StockUpdate { errors, applied })
        }
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// Creates a new empty order and returns its id.
    pub fn create_new_order(&mut self) -> String {
        self.registry.create_new_order()
    }

    /// Looks up an order by id.
    pub fn get_order(&self, id: &str) -> CoreResult<&Order> {
        self.registry.get_order(id)
    }

    /// Looks up an order mutably by id.
    pub fn get_order_mut(&mut self, id: &str) -> CoreResult<&mut Order> {
        self.registry.get_order_mut(id)
    }

    /// Whether an order exists under this id.
    pub fn id_exists(&self, id: &str) -> bool {
        self.registry.id_exists(id)
    }

    /// Iterates over every order in creation order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.registry.orders()
    }

    /// Total price of an order against the system catalog.
    pub fn order_price(&self, id: &str) -> CoreResult<Money> {
        Ok(self.registry.get_order(id)?.price(&self.catalog))
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// Checks out an order by id: atomically commits its stock
    /// consumption and moves it to `being prepared`, or rolls the ledger
    /// back exactly and reports the shortages (see [`crate::checkout`]).
    pub fn checkout(&mut self, id: &str) -> CoreResult<()> {
        let order = self.registry.get_order_mut(id)?;
        checkout::checkout(&self.catalog, &mut self.ledger, order)
    }

    /// Probes whether an item list is currently affordable without
    /// net-mutating the ledger.
    pub fn check_item_list(&mut self, items: &[ItemId]) -> CoreResult<()> {
        checkout::check_item_list(&self.catalog, &mut self.ledger, items)
    }
}

impl Default for GourmetSystem {
    fn default() -> Self {
        GourmetSystem::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
