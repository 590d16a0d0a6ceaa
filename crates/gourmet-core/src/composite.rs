//! # Composite Items
//!
//! Burgers and wraps: validated bundles of catalog items sold as one unit.
//!
//! ## Construction Invariants
//! ```text
//! Burger                                  Wrap
//! ──────                                  ────
//! 1. at least two buns                    1. at most 10 patties
//! 2. one bun type only
//! 3. at most one more bun than patties
//! 4. at most 10 patties
//! ```
//! Rules are checked in that order; the first violation aborts construction
//! with a validation error and no object exists. A patty is any ingredient
//! named in [`crate::PATTY_ITEMS`].

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ItemId};
use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::{MAX_PATTIES, MIN_BUNS};

/// Counts the ingredients that are patties.
fn count_patties(catalog: &Catalog, ingredients: &[ItemId]) -> usize {
    ingredients
        .iter()
        .filter(|&&id| catalog.get(id).is_patty())
        .count()
}

// =============================================================================
// Burger
// =============================================================================

/// A burger: one bun type stacked `bun_count` high around an ordered
/// ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Burger {
    bun: ItemId,
    bun_count: usize,
    ingredients: Vec<ItemId>,
    patty_count: usize,
}

impl Burger {
    /// Builds a burger from an ingredient sequence and a bun sequence.
    ///
    /// Every bun slot must reference the same catalog item; the bun count
    /// is the length of `buns`.
    pub fn new(catalog: &Catalog, ingredients: Vec<ItemId>, buns: &[ItemId]) -> CoreResult<Self> {
        if buns.len() < MIN_BUNS {
            return Err(ValidationError::AtLeastTwoBuns.into());
        }

        let bun = buns[0];
        if buns.iter().any(|&slot| slot != bun) {
            return Err(ValidationError::MixedBunTypes.into());
        }

        let patty_count = count_patties(catalog, &ingredients);

        if buns.len() > patty_count + 1 {
            return Err(ValidationError::BunsExceedPatties.into());
        }
        if patty_count > MAX_PATTIES {
            return Err(ValidationError::TooManyPatties.into());
        }

        Ok(Burger {
            bun,
            bun_count: buns.len(),
            ingredients,
            patty_count,
        })
    }

    /// The single bun type used in every bun slot.
    pub fn bun(&self) -> ItemId {
        self.bun
    }

    /// How many bun units this burger consumes.
    pub fn bun_count(&self) -> usize {
        self.bun_count
    }

    /// The ordered ingredient list (duplicates allowed).
    pub fn ingredients(&self) -> &[ItemId] {
        &self.ingredients
    }

    /// Derived count of patty ingredients.
    pub fn patty_count(&self) -> usize {
        self.patty_count
    }

    /// Flattens into every unit consumed: `bun_count` copies of the bun,
    /// then the ingredients. This list is the unit of stock accounting.
    pub fn items(&self) -> Vec<ItemId> {
        let mut items = Vec::with_capacity(self.bun_count + self.ingredients.len());
        items.extend(std::iter::repeat(self.bun).take(self.bun_count));
        items.extend_from_slice(&self.ingredients);
        items
    }

    /// Sum of unit prices over [`Burger::items`] — a 3-bun burger pays for
    /// 3 bun units.
    pub fn price(&self, catalog: &Catalog) -> Money {
        self.items()
            .into_iter()
            .map(|id| catalog.get(id).price())
            .sum()
    }
}

// =============================================================================
// Wrap
// =============================================================================

/// A wrap: an ordered ingredient list with no bun concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrap {
    ingredients: Vec<ItemId>,
    patty_count: usize,
}

impl Wrap {
    /// Builds a wrap from an ingredient sequence.
    pub fn new(catalog: &Catalog, ingredients: Vec<ItemId>) -> CoreResult<Self> {
        let patty_count = count_patties(catalog, &ingredients);

        if patty_count > MAX_PATTIES {
            return Err(ValidationError::TooManyPatties.into());
        }

        Ok(Wrap {
            ingredients,
            patty_count,
        })
    }

    /// The ordered ingredient list (duplicates allowed).
    pub fn ingredients(&self) -> &[ItemId] {
        &self.ingredients
    }

    /// Derived count of patty ingredients.
    pub fn patty_count(&self) -> usize {
        self.patty_count
    }

    /// Flattens into every unit consumed: for a wrap, the ingredients.
    pub fn items(&self) -> Vec<ItemId> {
        self.ingredients.clone()
    }

    /// Sum of unit prices over [`Wrap::items`].
    pub fn price(&self, catalog: &Catalog) -> Money {
        self.ingredients
            .iter()
            .map(|&id| catalog.get(id).price())
            .sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::StockLedger;

    /// Buns and fillings at the standard menu prices.
    fn fixture() -> (Catalog, StockLedger) {
        let mut ledger = StockLedger::new();
        let mut catalog = Catalog::new();

        for name in ["Sesame bun", "Muffin bun"] {
            catalog
                .add(&mut ledger, name, Money::from_cents(50), 1, "pcs", None)
                .unwrap();
        }
        for name in ["Chicken Patty", "Vegetarian Patty", "Beef Patty"] {
            catalog
                .add(&mut ledger, name, Money::from_cents(200), 1, "servings", None)
                .unwrap();
        }
        for name in [
            "Tomato",
            "Lettuce",
            "Cheddar Cheese",
            "Swiss Cheese",
            "Tomato Sauce",
        ] {
            catalog
                .add(&mut ledger, name, Money::from_cents(100), 1, "portions", None)
                .unwrap();
        }

        (catalog, ledger)
    }

    fn ids(catalog: &Catalog, names: &[&str]) -> Vec<ItemId> {
        names
            .iter()
            .map(|name| catalog.lookup(name).unwrap())
            .collect()
    }

    fn all_fillings(catalog: &Catalog) -> Vec<ItemId> {
        ids(
            catalog,
            &[
                "Chicken Patty",
                "Vegetarian Patty",
                "Beef Patty",
                "Tomato",
                "Lettuce",
                "Cheddar Cheese",
                "Swiss Cheese",
                "Tomato Sauce",
            ],
        )
    }

    #[test]
    fn test_burger_constructor() {
        let (catalog, _) = fixture();
        let sesame = catalog.lookup("Sesame bun").unwrap();

        let burger = Burger::new(&catalog, all_fillings(&catalog), &[sesame; 2]).unwrap();

        assert_eq!(burger.bun(), sesame);
        assert_eq!(burger.bun_count(), 2);
        assert_eq!(burger.patty_count(), 3);
        // 3 patties + 5 fillings + 2 buns = $6 + $5 + $1
        assert_eq!(burger.price(&catalog).cents(), 1200);
        assert_eq!(burger.items().len(), 10);
    }

    #[test]
    fn test_three_buns_pay_for_three_bun_units() {
        let (catalog, _) = fixture();
        let sesame = catalog.lookup("Sesame bun").unwrap();

        let burger = Burger::new(&catalog, all_fillings(&catalog), &[sesame; 3]).unwrap();
        assert_eq!(burger.bun_count(), 3);
        assert_eq!(burger.price(&catalog).cents(), 1250);
    }

    #[test]
    fn test_standard_burger_price() {
        let (catalog, _) = fixture();
        let sesame = catalog.lookup("Sesame bun").unwrap();
        let fillings = ids(&catalog, &["Beef Patty", "Cheddar Cheese", "Tomato Sauce"]);

        let burger = Burger::new(&catalog, fillings, &[sesame; 2]).unwrap();
        // 2 + 1 + 1 + 0.5 + 0.5
        assert_eq!(burger.price(&catalog).cents(), 500);
    }

    #[test]
    fn test_too_few_buns() {
        let (catalog, _) = fixture();
        let sesame = catalog.lookup("Sesame bun").unwrap();

        let result = Burger::new(&catalog, Vec::new(), &[sesame]);
        assert!(matches!(
            result,
            Err(crate::error::CoreError::Validation(
                ValidationError::AtLeastTwoBuns
            ))
        ));
    }

    #[test]
    fn test_mixed_bun_types() {
        let (catalog, _) = fixture();
        let sesame = catalog.lookup("Sesame bun").unwrap();
        let muffin = catalog.lookup("Muffin bun").unwrap();

        let result = Burger::new(&catalog, all_fillings(&catalog), &[sesame, muffin]);
        assert!(matches!(
            result,
            Err(crate::error::CoreError::Validation(
                ValidationError::MixedBunTypes
            ))
        ));
    }

    #[test]
    fn test_too_many_buns_for_patties() {
        let (catalog, _) = fixture();
        let sesame = catalog.lookup("Sesame bun").unwrap();
        let one_patty = ids(&catalog, &["Beef Patty"]);

        // One patty supports at most two buns.
        let result = Burger::new(&catalog, one_patty, &[sesame; 3]);
        assert!(matches!(
            result,
            Err(crate::error::CoreError::Validation(
                ValidationError::BunsExceedPatties
            ))
        ));
    }

    #[test]
    fn test_too_many_patties_in_burger() {
        let (catalog, _) = fixture();
        let sesame = catalog.lookup("Sesame bun").unwrap();
        let beef = catalog.lookup("Beef Patty").unwrap();

        let result = Burger::new(&catalog, vec![beef; 11], &[sesame; 2]);
        assert!(matches!(
            result,
            Err(crate::error::CoreError::Validation(
                ValidationError::TooManyPatties
            ))
        ));

        // Ten is the limit, not an error.
        assert!(Burger::new(&catalog, vec![beef; 10], &[sesame; 2]).is_ok());
    }

    #[test]
    fn test_validation_order_reports_bun_rule_first() {
        let (catalog, _) = fixture();
        let sesame = catalog.lookup("Sesame bun").unwrap();
        let beef = catalog.lookup("Beef Patty").unwrap();

        // 11 patties AND only one bun: the bun-count rule fires first.
        let result = Burger::new(&catalog, vec![beef; 11], &[sesame]);
        assert!(matches!(
            result,
            Err(crate::error::CoreError::Validation(
                ValidationError::AtLeastTwoBuns
            ))
        ));
    }

    #[test]
    fn test_wrap_constructor() {
        let (catalog, _) = fixture();

        let wrap = Wrap::new(&catalog, all_fillings(&catalog)).unwrap();
        assert_eq!(wrap.patty_count(), 3);
        // 3 patties + 5 fillings = $6 + $5
        assert_eq!(wrap.price(&catalog).cents(), 1100);
        assert_eq!(wrap.items().len(), 8);
    }

    #[test]
    fn test_too_many_patties_in_wrap() {
        let (catalog, _) = fixture();
        let beef = catalog.lookup("Beef Patty").unwrap();

        let result = Wrap::new(&catalog, vec![beef; 11]);
        assert!(matches!(
            result,
            Err(crate::error::CoreError::Validation(
                ValidationError::TooManyPatties
            ))
        ));

        assert!(Wrap::new(&catalog, vec![beef; 10]).is_ok());
    }

    #[test]
    fn test_empty_wrap_is_legal() {
        let (catalog, _) = fixture();
        let wrap = Wrap::new(&catalog, Vec::new()).unwrap();
        assert!(wrap.price(&catalog).is_zero());
    }
}
