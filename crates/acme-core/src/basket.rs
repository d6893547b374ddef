//! # Basket
//!
//! A checkout's list of items, priced against shared [`PricingRules`].
//!
//! ## Basket Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Basket Operations                                    │
//! │                                                                         │
//! │  add("R01") ──► catalog.find("R01") ──► items.push(product snapshot)   │
//! │                       │                                                 │
//! │                       └── unknown code ──► ProductNotFound, no change  │
//! │                                                                         │
//! │  total() ──► subtotal      = Σ item.price                              │
//! │              discount      = Σ offer.discount(items)                   │
//! │              discounted    = max(subtotal − discount, 0)               │
//! │              delivery      = delivery_rule.cost_for(discounted)        │
//! │              total         = discounted + delivery                     │
//! │                                                                         │
//! │  NOTE: nothing is cached. Every call reprices the current items.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sharing
//! Catalog, offers and delivery rule are held through `Arc` and are never
//! mutated, so any number of baskets (on any threads) can price against the
//! same rules. Each basket owns only its item list.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::delivery::DeliveryRule;
use crate::error::CoreResult;
use crate::money::Money;
use crate::offer::Offer;
use crate::types::{PriceBreakdown, Product};

/// Offers shared by every basket of a pricing configuration.
pub type SharedOffers = Arc<[Box<dyn Offer>]>;

// =============================================================================
// Pricing Rules
// =============================================================================

/// The immutable configuration every basket prices against.
///
/// Cloning is cheap: only reference counts change.
#[derive(Debug, Clone)]
pub struct PricingRules {
    catalog: Arc<Catalog>,
    delivery_rule: Arc<dyn DeliveryRule>,
    offers: SharedOffers,
}

impl PricingRules {
    pub fn new(
        catalog: Arc<Catalog>,
        delivery_rule: Arc<dyn DeliveryRule>,
        offers: impl Into<SharedOffers>,
    ) -> Self {
        PricingRules {
            catalog,
            delivery_rule,
            offers: offers.into(),
        }
    }

    /// Opens an empty basket sharing these rules.
    pub fn basket(&self) -> Basket {
        Basket::new(
            Arc::clone(&self.catalog),
            Arc::clone(&self.delivery_rule),
            Arc::clone(&self.offers),
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn offers(&self) -> &[Box<dyn Offer>] {
        &self.offers
    }

    pub fn delivery_rule(&self) -> &dyn DeliveryRule {
        &*self.delivery_rule
    }
}

// =============================================================================
// Basket
// =============================================================================

/// Items awaiting a total.
///
/// ## Invariants
/// - Every item was resolved through the catalog
/// - Items keep insertion order
/// - A failed [`Basket::add`] leaves the items untouched
#[derive(Debug, Clone)]
pub struct Basket {
    catalog: Arc<Catalog>,
    delivery_rule: Arc<dyn DeliveryRule>,
    offers: SharedOffers,
    items: Vec<Product>,
}

impl Basket {
    /// Creates an empty basket.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use acme_core::{
    ///     Basket, BuyOneGetSecondHalfPrice, Catalog, DeliveryTier, Money, Offer, Product,
    ///     TieredDeliveryRule,
    /// };
    ///
    /// let catalog = Catalog::new(vec![
    ///     Product::new("R01", "Red Widget", Money::from_cents(3295)).unwrap(),
    /// ])
    /// .unwrap();
    /// let delivery = TieredDeliveryRule::new(vec![
    ///     DeliveryTier::new(Money::zero(), Money::from_cents(495)),
    /// ])
    /// .unwrap();
    /// let offers: Vec<Box<dyn Offer>> = vec![Box::new(BuyOneGetSecondHalfPrice::new("R01"))];
    ///
    /// let mut basket = Basket::new(Arc::new(catalog), Arc::new(delivery), offers);
    /// basket.add("R01").unwrap();
    /// basket.add("R01").unwrap();
    ///
    /// // $65.90 − $16.475 + $4.95
    /// assert_eq!(basket.total().unwrap().to_string(), "$54.38");
    /// ```
    pub fn new(
        catalog: Arc<Catalog>,
        delivery_rule: Arc<dyn DeliveryRule>,
        offers: impl Into<SharedOffers>,
    ) -> Self {
        Basket {
            catalog,
            delivery_rule,
            offers: offers.into(),
            items: Vec::new(),
        }
    }

    /// Adds one unit of the product with `code`.
    ///
    /// Returns the product that was added. Fails with
    /// [`CoreError::ProductNotFound`](crate::CoreError::ProductNotFound)
    /// if the catalog does not know the code.
    pub fn add(&mut self, code: &str) -> CoreResult<&Product> {
        let product = self.catalog.find(code)?.clone();
        debug!(code, price = %product.price(), "Adding product to basket");

        self.items.push(product);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of units in the basket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of item prices, before offers.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(Product::price).sum()
    }

    /// Sum of every offer's discount on the current items.
    pub fn discount(&self) -> Money {
        self.offers
            .iter()
            .map(|offer| offer.discount(&self.items))
            .sum()
    }

    /// Prices the basket and returns every intermediate figure.
    pub fn breakdown(&self) -> CoreResult<PriceBreakdown> {
        let subtotal = self.subtotal();
        let discount = self.discount();
        let discounted_subtotal = (subtotal - discount).clamp_non_negative();
        let delivery = self.delivery_rule.cost_for(discounted_subtotal)?;
        let total = discounted_subtotal + delivery;

        debug!(
            items = self.items.len(),
            %subtotal,
            %discount,
            %delivery,
            %total,
            "Priced basket"
        );

        Ok(PriceBreakdown {
            item_count: self.items.len(),
            subtotal,
            discount,
            discounted_subtotal,
            delivery,
            total,
        })
    }

    /// Final price: discounted subtotal plus delivery.
    ///
    /// Exact (unrounded). Idempotent: repeated calls without adds return the
    /// same value.
    pub fn total(&self) -> CoreResult<Money> {
        Ok(self.breakdown()?.total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::{DeliveryTier, TieredDeliveryRule};
    use crate::error::CoreError;
    use crate::offer::BuyOneGetSecondHalfPrice;
    use rust_decimal_macros::dec;

    fn rules() -> PricingRules {
        let catalog = Catalog::new(vec![
            Product::new("R01", "Red Widget", Money::from_cents(3295)).unwrap(),
            Product::new("G01", "Green Widget", Money::from_cents(2495)).unwrap(),
            Product::new("B01", "Blue Widget", Money::from_cents(795)).unwrap(),
        ])
        .unwrap();
        let delivery = TieredDeliveryRule::new(vec![
            DeliveryTier::new(Money::zero(), Money::from_cents(495)),
            DeliveryTier::new(Money::from_cents(5000), Money::from_cents(295)),
            DeliveryTier::new(Money::from_cents(9000), Money::zero()),
        ])
        .unwrap();
        let offers: Vec<Box<dyn Offer>> = vec![Box::new(BuyOneGetSecondHalfPrice::new("R01"))];

        PricingRules::new(Arc::new(catalog), Arc::new(delivery), offers)
    }

    /// Offer that gives away more than any basket is worth.
    #[derive(Debug)]
    struct Giveaway;

    impl Offer for Giveaway {
        fn name(&self) -> String {
            "giveaway".to_string()
        }

        fn discount(&self, _items: &[Product]) -> Money {
            Money::from_cents(1_000_000)
        }
    }

    #[test]
    fn test_add_appends_snapshot() {
        let mut basket = rules().basket();

        let added = basket.add("G01").unwrap();
        assert_eq!(added.name(), "Green Widget");

        basket.add("B01").unwrap();
        let codes: Vec<&str> = basket.items().iter().map(Product::code).collect();
        assert_eq!(codes, ["G01", "B01"]);
        assert_eq!(basket.len(), 2);
    }

    #[test]
    fn test_add_unknown_code_leaves_items_unchanged() {
        let mut basket = rules().basket();
        basket.add("R01").unwrap();

        let err = basket.add("X99").unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(code) if code == "X99"));
        assert_eq!(basket.len(), 1);
    }

    #[test]
    fn test_empty_basket_pays_base_delivery() {
        let basket = rules().basket();
        assert!(basket.is_empty());
        assert_eq!(basket.total().unwrap(), Money::from_cents(495));
    }

    #[test]
    fn test_breakdown_figures() {
        let mut basket = rules().basket();
        basket.add("R01").unwrap();
        basket.add("R01").unwrap();

        let breakdown = basket.breakdown().unwrap();
        assert_eq!(breakdown.item_count, 2);
        assert_eq!(breakdown.subtotal.amount(), dec!(65.90));
        assert_eq!(breakdown.discount.amount(), dec!(16.475));
        assert_eq!(breakdown.discounted_subtotal.amount(), dec!(49.425));
        assert_eq!(breakdown.delivery, Money::from_cents(495));
        assert_eq!(breakdown.total.amount(), dec!(54.375));
    }

    #[test]
    fn test_total_is_idempotent() {
        let mut basket = rules().basket();
        basket.add("R01").unwrap();
        basket.add("G01").unwrap();

        let first = basket.total().unwrap();
        assert_eq!(basket.total().unwrap(), first);
        assert_eq!(basket.total().unwrap(), first);
    }

    #[test]
    fn test_total_reflects_later_adds() {
        let mut basket = rules().basket();
        basket.add("B01").unwrap();
        let before = basket.total().unwrap();

        basket.add("G01").unwrap();
        assert_ne!(basket.total().unwrap(), before);
        assert_eq!(basket.total().unwrap().amount(), dec!(37.85));
    }

    #[test]
    fn test_discount_cannot_push_below_zero() {
        let catalog = Catalog::new(vec![
            Product::new("B01", "Blue Widget", Money::from_cents(795)).unwrap(),
        ])
        .unwrap();
        let delivery = Arc::new(
            TieredDeliveryRule::new(vec![DeliveryTier::new(Money::zero(), Money::from_cents(495))])
                .unwrap(),
        );
        let offers: Vec<Box<dyn Offer>> = vec![Box::new(Giveaway)];

        let mut basket = Basket::new(Arc::new(catalog), delivery, offers);
        basket.add("B01").unwrap();

        let breakdown = basket.breakdown().unwrap();
        assert_eq!(breakdown.discounted_subtotal, Money::zero());
        assert_eq!(breakdown.total, Money::from_cents(495));
    }

    #[test]
    fn test_baskets_share_rules_not_items() {
        let rules = rules();
        let mut first = rules.basket();
        let second = rules.basket();

        first.add("R01").unwrap();
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert_eq!(rules.catalog().len(), 3);
        assert_eq!(rules.offers().len(), 1);
    }

    #[test]
    fn test_rules_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingRules>();
        assert_send_sync::<Basket>();
    }
}
