//! # Order Registry
//!
//! Issues sequential order ids and stores orders for later lookup.
//!
//! Ids are handed to customers as strings ("your order number is 12"), so
//! the boundary contract is string-in/string-out; internally the registry
//! keys orders by the integer so iteration follows creation order. The
//! counter only ever moves forward — ids are never reused or gap-filled,
//! even if earlier orders are discarded.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::order::Order;

/// Registry of every order ever created, keyed by issued id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderRegistry {
    orders: BTreeMap<u64, Order>,
    next_id: u64,
}

impl OrderRegistry {
    /// Creates an empty registry. The first issued id is "0".
    pub fn new() -> Self {
        OrderRegistry {
            orders: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Creates a new empty order, stores it, and returns its id.
    pub fn create_new_order(&mut self) -> String {
        let id = self.next_id.to_string();
        self.orders.insert(self.next_id, Order::new(id.clone()));
        self.next_id += 1;
        id
    }

    /// Parses an id from the boundary.
    ///
    /// A string that is not the digits of an integer is a format error; a
    /// negative but integer-shaped id is merely an order that cannot
    /// exist, which lookup reports as not-found.
    fn parse_id(id: &str) -> CoreResult<Option<u64>> {
        let parsed: i64 = id.parse().map_err(|_| CoreError::InvalidOrderId {
            id: id.to_string(),
        })?;
        Ok(u64::try_from(parsed).ok())
    }

    /// Looks up an order by its issued id.
    pub fn get_order(&self, id: &str) -> CoreResult<&Order> {
        Self::parse_id(id)?
            .and_then(|key| self.orders.get(&key))
            .ok_or_else(|| CoreError::OrderNotFound { id: id.to_string() })
    }

    /// Looks up an order mutably by its issued id.
    pub fn get_order_mut(&mut self, id: &str) -> CoreResult<&mut Order> {
        Self::parse_id(id)?
            .and_then(|key| self.orders.get_mut(&key))
            .ok_or_else(|| CoreError::OrderNotFound { id: id.to_string() })
    }

    /// Whether an order exists under this id. Malformed and missing ids
    /// both answer `false` instead of erroring.
    pub fn id_exists(&self, id: &str) -> bool {
        matches!(Self::parse_id(id), Ok(Some(key)) if self.orders.contains_key(&key))
    }

    /// Iterates over every order in id (creation) order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no order has been created yet.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_issue_sequentially_from_zero() {
        let mut registry = OrderRegistry::new();

        assert_eq!(registry.create_new_order(), "0");
        assert_eq!(registry.create_new_order(), "1");
        assert_eq!(registry.create_new_order(), "2");

        assert_eq!(registry.len(), 3);
        let ids: Vec<&str> = registry.orders().map(|order| order.id()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_lookup_by_issued_id() {
        let mut registry = OrderRegistry::new();
        let id = registry.create_new_order();

        let order = registry.get_order(&id).unwrap();
        assert_eq!(order.id(), "0");

        registry.get_order_mut(&id).unwrap();
    }

    #[test]
    fn test_malformed_ids_are_format_errors() {
        let registry = OrderRegistry::new();

        for bad in ["1.1", "a", "", "seven"] {
            assert!(matches!(
                registry.get_order(bad),
                Err(CoreError::InvalidOrderId { .. })
            ));
        }
    }

    #[test]
    fn test_absent_ids_are_not_found() {
        let mut registry = OrderRegistry::new();

        assert!(matches!(
            registry.get_order("1"),
            Err(CoreError::OrderNotFound { .. })
        ));

        registry.create_new_order();
        assert!(registry.get_order("0").is_ok());

        // Integer-shaped but impossible: not-found, not malformed.
        assert!(matches!(
            registry.get_order("-1"),
            Err(CoreError::OrderNotFound { .. })
        ));
    }

    #[test]
    fn test_id_exists_never_errors() {
        let mut registry = OrderRegistry::new();

        assert!(!registry.id_exists("0"));
        registry.create_new_order();
        assert!(registry.id_exists("0"));

        assert!(!registry.id_exists("a"));
        assert!(!registry.id_exists("1.1"));
        assert!(!registry.id_exists("-1"));
        assert!(!registry.id_exists("99"));
    }
}
