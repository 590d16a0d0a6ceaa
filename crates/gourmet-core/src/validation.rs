//! # Validation Module
//!
//! Input validation helpers for gourmet-core.
//!
//! The web layer hands the core raw strings (stock levels typed into a
//! form) and the catalog hands it raw numbers at construction; everything
//! funnels through these checks before it can touch domain state.

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Stock Level Parsing
// =============================================================================

/// Parses a raw stock-level string from the boundary into a quantity.
///
/// ## Rules
/// - Must parse as an integer (surrounding whitespace is tolerated)
/// - Must not be negative
///
/// ## Example
/// ```rust
/// use gourmet_core::validation::parse_stock_level;
///
/// assert_eq!(parse_stock_level("40").unwrap(), 40);
/// assert_eq!(parse_stock_level(" 0 ").unwrap(), 0);
/// assert!(parse_stock_level("4.5").is_err());
/// assert!(parse_stock_level("-3").is_err());
/// ```
pub fn parse_stock_level(value: &str) -> ValidationResult<i64> {
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|_| ValidationError::StockNotInteger)?;

    if parsed < 0 {
        return Err(ValidationError::StockBelowZero);
    }

    Ok(parsed)
}

// =============================================================================
// Catalog Item Validators
// =============================================================================

/// Validates a menu item price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free condiments)
pub fn validate_item_price(name: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::NegativePrice {
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Validates a per-serving consumption quantity.
///
/// ## Rules
/// - Must be positive; an item that consumes nothing per serving would
///   make its stock key untrackable
pub fn validate_serving_quantity(name: &str, serving: u32) -> ValidationResult<()> {
    if serving == 0 {
        return Err(ValidationError::ZeroServing {
            name: name.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stock_level() {
        assert_eq!(parse_stock_level("0").unwrap(), 0);
        assert_eq!(parse_stock_level("100000").unwrap(), 100000);
        assert_eq!(parse_stock_level("  7 ").unwrap(), 7);

        assert!(matches!(
            parse_stock_level("seven"),
            Err(ValidationError::StockNotInteger)
        ));
        assert!(matches!(
            parse_stock_level("4.5"),
            Err(ValidationError::StockNotInteger)
        ));
        assert!(matches!(
            parse_stock_level(""),
            Err(ValidationError::StockNotInteger)
        ));
        assert!(matches!(
            parse_stock_level("-1"),
            Err(ValidationError::StockBelowZero)
        ));
    }

    #[test]
    fn test_validate_item_price() {
        assert!(validate_item_price("Tomato", Money::from_cents(100)).is_ok());
        assert!(validate_item_price("Water", Money::zero()).is_ok());
        assert!(validate_item_price("Oops", Money::from_cents(-50)).is_err());
    }

    #[test]
    fn test_validate_serving_quantity() {
        assert!(validate_serving_quantity("Large Fries", 175).is_ok());
        assert!(validate_serving_quantity("Nothing", 0).is_err());
    }
}
