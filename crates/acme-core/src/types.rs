//! # Domain Types
//!
//! Value types shared by the catalog, offers and basket.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐                         │
//! │  │    Product      │   │   PriceBreakdown     │                         │
//! │  │  ─────────────  │   │  ──────────────────  │                         │
//! │  │  code (unique)  │   │  subtotal            │                         │
//! │  │  name           │   │  discount            │                         │
//! │  │  price (Money)  │   │  delivery, total     │                         │
//! │  └─────────────────┘   └──────────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{validate_amount, validate_product_code, validate_product_name};

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Fields are private: a product is validated once in [`Product::new`] and
/// never changes afterwards. Baskets keep their own clones as snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    code: String,
    name: String,
    price: Money,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Rules
    /// - `code`: non-empty, at most 50 characters, letters/digits/`-`/`_`
    /// - `name`: non-empty, at most 200 characters
    /// - `price`: zero or more (free items are allowed)
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::{Money, Product};
    ///
    /// let widget = Product::new("R01", "Red Widget", Money::from_cents(3295)).unwrap();
    /// assert_eq!(widget.code(), "R01");
    ///
    /// assert!(Product::new("", "Nameless", Money::zero()).is_err());
    /// ```
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Money) -> CoreResult<Self> {
        let code = code.into().trim().to_string();
        let name = name.into().trim().to_string();

        validate_product_code(&code)?;
        validate_product_name(&name)?;
        validate_amount("price", price)?;

        Ok(Product { code, name, price })
    }

    /// Business identifier, unique within a catalog.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// Every intermediate figure of one pricing pass over a basket.
///
/// Values are exact. Round only when displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    /// Number of units in the basket.
    pub item_count: usize,
    /// Sum of item prices before offers.
    pub subtotal: Money,
    /// Sum of all offer discounts.
    pub discount: Money,
    /// `max(subtotal - discount, 0)`; the amount delivery is priced on.
    pub discounted_subtotal: Money,
    /// Delivery charge for the discounted subtotal.
    pub delivery: Money,
    /// `discounted_subtotal + delivery`.
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    #[test]
    fn test_product_new_trims_fields() {
        let product = Product::new(" G01 ", " Green Widget ", Money::from_cents(2495)).unwrap();
        assert_eq!(product.code(), "G01");
        assert_eq!(product.name(), "Green Widget");
        assert_eq!(product.price(), Money::from_cents(2495));
    }

    #[test]
    fn test_product_allows_free_items() {
        assert!(Product::new("FREE", "Sticker", Money::zero()).is_ok());
    }

    #[test]
    fn test_product_rejects_negative_price() {
        let err = Product::new("R01", "Red Widget", Money::from_cents(-1)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBeNonNegative { .. })
        ));
    }

    #[test]
    fn test_product_rejects_price_above_cap() {
        let price = Money::from_cents(crate::validation::MAX_AMOUNT_CENTS + 1);
        let err = Product::new("R01", "Red Widget", price).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_product_rejects_bad_code_and_name() {
        assert!(Product::new("has space", "Widget", Money::zero()).is_err());
        assert!(Product::new("W1", "   ", Money::zero()).is_err());
    }

    #[test]
    fn test_breakdown_serializes_amounts() {
        let breakdown = PriceBreakdown {
            item_count: 2,
            subtotal: Money::from_cents(3290),
            discount: Money::zero(),
            discounted_subtotal: Money::from_cents(3290),
            delivery: Money::from_cents(495),
            total: Money::from_cents(3785),
        };
        let json = serde_json::to_value(breakdown).unwrap();
        assert_eq!(json["item_count"], 2);
        assert_eq!(json["total"], "37.85");
    }
}
