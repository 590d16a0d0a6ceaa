//! # Checkout Engine
//!
//! The atomic decrement-validate-rollback protocol against the stock
//! ledger.
//!
//! ## Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  checkout(order)                                            │
//! │                                                             │
//! │  1. flatten order.list_all()                                │
//! │  2. decrement EVERY occurrence (duplicates included)        │
//! │  3. scan the deduplicated item set for negative stock       │
//! │  4. shortages?  ──yes──► re-increment every occurrence,     │
//! │       │                  fail with the shortage names       │
//! │       no                                                    │
//! │       ▼                                                     │
//! │  5. commit; order.status = being prepared                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decrementing first and rolling back on failure (rather than checking
//! then decrementing) is what makes shared stock keys work: three fries
//! sizes that individually look affordable can jointly overdraw the one
//! "Fries" key, and that shortage only exists once all decrements are
//! applied. Rollback re-applies the same per-serving deltas with the sign
//! flipped, so a failed call restores the ledger bit-for-bit.
//!
//! ## Concurrency
//! There is no locking here. The protocol is only correct if nothing else
//! mutates the ledger between the bulk decrement and the rollback-or-commit
//! — callers serving concurrent users must wrap each entry point in a
//! single exclusive region around the ledger.

use std::collections::HashSet;

use crate::catalog::{Catalog, ItemId};
use crate::error::{CoreError, CoreResult};
use crate::ledger::StockLedger;
use crate::order::{Order, OrderStatus};

/// When the provisional decrement is undone.
enum Revert {
    /// Undo unconditionally — the read-only probe.
    Always,
    /// Undo only if a shortage was found — real checkout.
    OnShortage,
}

/// Applies one serving of every occurrence to the ledger with the given
/// sign. `sign = -1` reserves, `sign = 1` is its exact inverse.
fn apply_all(catalog: &Catalog, ledger: &mut StockLedger, items: &[ItemId], sign: i64) {
    for &id in items {
        let item = catalog.get(id);
        item.apply(ledger, sign * i64::from(item.serving()));
    }
}

/// Deduplicates by item identity, preserving first-occurrence order.
fn distinct_items(items: &[ItemId]) -> Vec<ItemId> {
    let mut seen = HashSet::new();
    items.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Names of the distinct items whose stock is currently negative, in
/// first-occurrence order.
fn shortage_names(catalog: &Catalog, ledger: &StockLedger, distinct: &[ItemId]) -> Vec<String> {
    distinct
        .iter()
        .map(|&id| catalog.get(id))
        .filter(|item| item.stock(ledger) < 0)
        .map(|item| item.name().to_string())
        .collect()
}

/// The one reusable primitive under both entry points: provisionally
/// decrement every occurrence, scan the deduplicated set for shortages,
/// then revert per the policy.
fn reserve(
    catalog: &Catalog,
    ledger: &mut StockLedger,
    items: &[ItemId],
    revert: Revert,
) -> CoreResult<()> {
    apply_all(catalog, ledger, items, -1);

    let shortages = shortage_names(catalog, ledger, &distinct_items(items));

    if !shortages.is_empty() || matches!(revert, Revert::Always) {
        apply_all(catalog, ledger, items, 1);
    }

    if shortages.is_empty() {
        Ok(())
    } else {
        Err(CoreError::OutOfStock { shortages })
    }
}

/// Read-only shortage probe.
///
/// Decrements stock for every occurrence in `items`, records which
/// distinct items went negative, then restores everything. The net ledger
/// effect is always zero; the only output is the diagnostic error.
pub fn check_item_list(
    catalog: &Catalog,
    ledger: &mut StockLedger,
    items: &[ItemId],
) -> CoreResult<()> {
    reserve(catalog, ledger, items, Revert::Always)
}

/// The authoritative state transition for an order.
///
/// On success the ledger decrement stands and the order moves to
/// `being prepared`. On shortage the ledger is restored to its exact
/// pre-call state, the order stays in `selection`, and the error lists the
/// deduplicated shortage names — all-or-nothing either way.
pub fn checkout(catalog: &Catalog, ledger: &mut StockLedger, order: &mut Order) -> CoreResult<()> {
    reserve(catalog, ledger, &order.list_all(), Revert::OnShortage)?;
    order.set_status(OrderStatus::BeingPrepared);
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::Burger;
    use crate::money::Money;

    /// Two fries sizes sharing one key, a bun, and a patty.
    fn fixture() -> (Catalog, StockLedger) {
        let mut ledger = StockLedger::new();
        let mut catalog = Catalog::new();
        catalog
            .add(
                &mut ledger,
                "Large Fries",
                Money::from_cents(300),
                175,
                "grams",
                Some("Fries"),
            )
            .unwrap();
        catalog
            .add(
                &mut ledger,
                "Small Fries",
                Money::from_cents(300),
                75,
                "grams",
                Some("Fries"),
            )
            .unwrap();
        catalog
            .add(&mut ledger, "Sesame bun", Money::from_cents(50), 1, "pcs", None)
            .unwrap();
        catalog
            .add(&mut ledger, "Beef Patty", Money::from_cents(200), 1, "servings", None)
            .unwrap();
        (catalog, ledger)
    }

    fn order_with_burger(catalog: &Catalog) -> Order {
        let bun = catalog.lookup("Sesame bun").unwrap();
        let beef = catalog.lookup("Beef Patty").unwrap();
        let burger = Burger::new(catalog, vec![beef], &[bun, bun]).unwrap();
        let mut order = Order::new("0".to_string());
        order.set_burgers(vec![burger]);
        order
    }

    #[test]
    fn test_checkout_commits_and_transitions() {
        let (catalog, mut ledger) = fixture();
        ledger.set_quantity("Sesame bun", 10).unwrap();
        ledger.set_quantity("Beef Patty", 10).unwrap();

        let mut order = order_with_burger(&catalog);
        checkout(&catalog, &mut ledger, &mut order).unwrap();

        assert_eq!(order.status(), OrderStatus::BeingPrepared);
        assert_eq!(ledger.quantity("Sesame bun"), 8);
        assert_eq!(ledger.quantity("Beef Patty"), 9);
    }

    #[test]
    fn test_checkout_on_empty_ledger_restores_exactly() {
        let (catalog, mut ledger) = fixture();

        let mut order = order_with_burger(&catalog);
        let err = checkout(&catalog, &mut ledger, &mut order).unwrap_err();

        match err {
            CoreError::OutOfStock { shortages } => {
                assert_eq!(shortages, vec!["Sesame bun", "Beef Patty"]);
            }
            other => panic!("expected OutOfStock, got {other:?}"),
        }

        // All-or-nothing: nothing committed, status untouched.
        assert_eq!(order.status(), OrderStatus::Selection);
        assert_eq!(ledger.quantity("Sesame bun"), 0);
        assert_eq!(ledger.quantity("Beef Patty"), 0);
    }

    #[test]
    fn test_partial_shortage_rolls_back_every_key() {
        let (catalog, mut ledger) = fixture();
        ledger.set_quantity("Sesame bun", 10).unwrap();
        // patty stays at 0: burger fails on the patty only

        let mut order = order_with_burger(&catalog);
        let err = checkout(&catalog, &mut ledger, &mut order).unwrap_err();

        match err {
            CoreError::OutOfStock { shortages } => {
                assert_eq!(shortages, vec!["Beef Patty"]);
            }
            other => panic!("expected OutOfStock, got {other:?}"),
        }

        // The bun decrement must have been undone too.
        assert_eq!(ledger.quantity("Sesame bun"), 10);
        assert_eq!(ledger.quantity("Beef Patty"), 0);
        assert_eq!(order.status(), OrderStatus::Selection);
    }

    #[test]
    fn test_shared_key_shortage_is_aggregate() {
        let (catalog, mut ledger) = fixture();
        // Enough for either size alone, not for both together.
        ledger.set_quantity("Fries", 200).unwrap();

        let large = catalog.lookup("Large Fries").unwrap();
        let small = catalog.lookup("Small Fries").unwrap();

        // Each size alone is affordable.
        check_item_list(&catalog, &mut ledger, &[large]).unwrap();
        check_item_list(&catalog, &mut ledger, &[small]).unwrap();

        // Together they overdraw the shared key; both variants report,
        // since both read the same negative counter.
        let err = check_item_list(&catalog, &mut ledger, &[large, small]).unwrap_err();
        match err {
            CoreError::OutOfStock { shortages } => {
                assert_eq!(shortages, vec!["Large Fries", "Small Fries"]);
            }
            other => panic!("expected OutOfStock, got {other:?}"),
        }
        assert_eq!(ledger.quantity("Fries"), 200);
    }

    #[test]
    fn test_probe_is_a_net_noop_and_idempotent() {
        let (catalog, mut ledger) = fixture();
        ledger.set_quantity("Fries", 175).unwrap();

        let large = catalog.lookup("Large Fries").unwrap();

        for _ in 0..3 {
            check_item_list(&catalog, &mut ledger, &[large]).unwrap();
            assert_eq!(ledger.quantity("Fries"), 175);
        }

        for _ in 0..3 {
            assert!(check_item_list(&catalog, &mut ledger, &[large, large]).is_err());
            assert_eq!(ledger.quantity("Fries"), 175);
        }
    }

    #[test]
    fn test_duplicates_decrement_per_occurrence() {
        let (catalog, mut ledger) = fixture();
        ledger.set_quantity("Sesame bun", 6).unwrap();
        ledger.set_quantity("Beef Patty", 10).unwrap();

        let bun = catalog.lookup("Sesame bun").unwrap();
        let beef = catalog.lookup("Beef Patty").unwrap();
        let burger = Burger::new(&catalog, vec![beef, beef], &[bun, bun, bun]).unwrap();

        let mut order = Order::new("0".to_string());
        order.set_burgers(vec![burger.clone(), burger]);
        checkout(&catalog, &mut ledger, &mut order).unwrap();

        assert_eq!(ledger.quantity("Sesame bun"), 0);
        assert_eq!(ledger.quantity("Beef Patty"), 6);
    }

    #[test]
    fn test_shortage_names_deduplicate_in_first_occurrence_order() {
        let (catalog, mut ledger) = fixture();

        let bun = catalog.lookup("Sesame bun").unwrap();
        let beef = catalog.lookup("Beef Patty").unwrap();

        let err = check_item_list(&catalog, &mut ledger, &[beef, bun, beef, bun]).unwrap_err();
        match err {
            CoreError::OutOfStock { shortages } => {
                assert_eq!(shortages, vec!["Beef Patty", "Sesame bun"]);
            }
            other => panic!("expected OutOfStock, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_order_checks_out_trivially() {
        let (catalog, mut ledger) = fixture();
        let mut order = Order::new("0".to_string());

        checkout(&catalog, &mut ledger, &mut order).unwrap();
        assert_eq!(order.status(), OrderStatus::BeingPrepared);
    }
}
