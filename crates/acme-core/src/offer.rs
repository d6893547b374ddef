//! # Offers
//!
//! Discount rules applied to a basket's items.
//!
//! ## Offer Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items: [R01, B01, R01, R01]                                            │
//! │      │                                                                  │
//! │      ├──► BuyOneGetSecondHalfPrice(R01) ──► 1 pair × $16.475            │
//! │      ├──► (other offers) ─────────────────► ...                         │
//! │      ▼                                                                  │
//! │  discount = Σ offer.discount(items)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Offers hold no basket state. They are asked for a discount on every
//! pricing pass, so the same offer instance is shared by all baskets.

use std::fmt;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Offer Trait
// =============================================================================

/// A discount rule.
///
/// Implementations must be pure: the discount depends only on `items`.
/// The trait is object-safe so rule sets can be assembled at runtime.
pub trait Offer: fmt::Debug + Send + Sync {
    /// Short human-readable description, used in logs.
    fn name(&self) -> String;

    /// Discount this offer grants on `items`. Never negative.
    fn discount(&self, items: &[Product]) -> Money;
}

// =============================================================================
// Buy One, Get the Second Half Price
// =============================================================================

/// Every second unit of one product is half price.
///
/// ## Counting, Not Position
/// ```text
/// units of product   pairs   discount
/// ────────────────   ─────   ──────────────
///        1             0     $0
///        2             1     price / 2
///        3             1     price / 2
///        4             2     price
/// ```
///
/// Only the number of matching units matters. Their position in the basket
/// and the other items around them make no difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyOneGetSecondHalfPrice {
    product_code: String,
}

impl BuyOneGetSecondHalfPrice {
    /// Creates the offer for one product code.
    pub fn new(product_code: impl Into<String>) -> Self {
        BuyOneGetSecondHalfPrice {
            product_code: product_code.into(),
        }
    }

    /// The product this offer applies to.
    pub fn product_code(&self) -> &str {
        &self.product_code
    }
}

impl Offer for BuyOneGetSecondHalfPrice {
    fn name(&self) -> String {
        format!("buy one {} get the second half price", self.product_code)
    }

    fn discount(&self, items: &[Product]) -> Money {
        let mut matching = items.iter().filter(|p| p.code() == self.product_code);

        // All units of a code come from one catalog entry, so the first
        // match carries the price for every pair.
        let Some(first) = matching.next() else {
            return Money::zero();
        };
        let count = 1 + matching.count() as i64;
        let pairs = count / 2;

        first.price().halve().multiply_quantity(pairs)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn red() -> Product {
        Product::new("R01", "Red Widget", Money::from_cents(3295)).unwrap()
    }

    fn blue() -> Product {
        Product::new("B01", "Blue Widget", Money::from_cents(795)).unwrap()
    }

    fn reds(n: usize) -> Vec<Product> {
        vec![red(); n]
    }

    #[test]
    fn test_discount_by_unit_count() {
        let offer = BuyOneGetSecondHalfPrice::new("R01");

        assert_eq!(offer.discount(&reds(0)), Money::zero());
        assert_eq!(offer.discount(&reds(1)), Money::zero());
        assert_eq!(offer.discount(&reds(2)).amount(), dec!(16.475));
        assert_eq!(offer.discount(&reds(3)).amount(), dec!(16.475));
        assert_eq!(offer.discount(&reds(4)).amount(), dec!(32.95));
        assert_eq!(offer.discount(&reds(5)).amount(), dec!(32.95));
    }

    #[test]
    fn test_discount_ignores_other_products() {
        let offer = BuyOneGetSecondHalfPrice::new("R01");
        let items = vec![blue(), blue(), blue(), blue()];
        assert_eq!(offer.discount(&items), Money::zero());
    }

    #[test]
    fn test_discount_is_position_independent() {
        let offer = BuyOneGetSecondHalfPrice::new("R01");

        let grouped = vec![red(), red(), blue(), blue()];
        let interleaved = vec![red(), blue(), blue(), red()];
        let reversed: Vec<Product> = grouped.iter().rev().cloned().collect();

        let expected = offer.discount(&grouped);
        assert_eq!(offer.discount(&interleaved), expected);
        assert_eq!(offer.discount(&reversed), expected);
        assert_eq!(expected.amount(), dec!(16.475));
    }

    #[test]
    fn test_unknown_code_is_noop() {
        let offer = BuyOneGetSecondHalfPrice::new("Z99");
        assert_eq!(offer.discount(&reds(4)), Money::zero());
    }

    #[test]
    fn test_usable_as_trait_object() {
        let offers: Vec<Box<dyn Offer>> = vec![
            Box::new(BuyOneGetSecondHalfPrice::new("R01")),
            Box::new(BuyOneGetSecondHalfPrice::new("B01")),
        ];
        let items = vec![red(), red(), blue(), blue()];

        let total: Money = offers.iter().map(|o| o.discount(&items)).sum();
        assert_eq!(total.amount(), dec!(20.45));
        assert!(offers[0].name().contains("R01"));
    }
}
