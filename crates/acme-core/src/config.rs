//! # Pricing Configuration
//!
//! Serde model of a store's catalog, offers and delivery tiers, and the
//! builder that turns it into shared [`PricingRules`].
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  JSON text ──► PricingConfig::from_json ──┐                             │
//! │                                           ├──► build() ──► PricingRules │
//! │  PricingConfig::acme_widgets() ───────────┘        │                    │
//! │                                                    ├── validate products│
//! │                                                    ├── unique codes     │
//! │                                                    ├── offer codes exist│
//! │                                                    └── base tier present│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## JSON Shape
//! ```json
//! {
//!   "products": [{ "code": "R01", "name": "Red Widget", "price": 32.95 }],
//!   "delivery": { "tiers": [{ "threshold": 0, "cost": 4.95 }] },
//!   "offers": [{ "type": "buy_one_get_second_half_price", "product_code": "R01" }]
//! }
//! ```
//!
//! Reading the text from disk is the caller's job; this module does no I/O.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::basket::PricingRules;
use crate::catalog::Catalog;
use crate::delivery::{DeliveryTier, TieredDeliveryRule};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::offer::{BuyOneGetSecondHalfPrice, Offer};
use crate::types::Product;

/// Complete pricing setup for one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    pub products: Vec<ProductConfig>,
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub offers: Vec<OfferConfig>,
}

/// Catalog entry as written in config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductConfig {
    pub code: String,
    pub name: String,
    pub price: Money,
}

/// Delivery tiers, in any order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeliveryConfig {
    pub tiers: Vec<DeliveryTier>,
}

/// Supported offer kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OfferConfig {
    /// Every second unit of `product_code` is half price.
    BuyOneGetSecondHalfPrice { product_code: String },
}

impl OfferConfig {
    /// Product the offer targets.
    pub fn product_code(&self) -> &str {
        match self {
            OfferConfig::BuyOneGetSecondHalfPrice { product_code } => product_code,
        }
    }

    fn to_offer(&self) -> Box<dyn Offer> {
        match self {
            OfferConfig::BuyOneGetSecondHalfPrice { product_code } => {
                Box::new(BuyOneGetSecondHalfPrice::new(product_code.clone()))
            }
        }
    }
}

impl PricingConfig {
    /// Parses a config from JSON text.
    ///
    /// Only the shape is checked here; [`PricingConfig::build`] validates
    /// the values.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The Acme Widget Co price list.
    ///
    /// | Code | Product      | Price  |
    /// |------|--------------|--------|
    /// | R01  | Red Widget   | $32.95 |
    /// | G01  | Green Widget | $24.95 |
    /// | B01  | Blue Widget  | $7.95  |
    ///
    /// Delivery: under $50 → $4.95, under $90 → $2.95, otherwise free.
    /// Offer: buy one red widget, get the second half price.
    pub fn acme_widgets() -> Self {
        let product = |code: &str, name: &str, cents: i64| ProductConfig {
            code: code.to_string(),
            name: name.to_string(),
            price: Money::from_cents(cents),
        };
        let tier = |threshold: i64, cost: i64| {
            DeliveryTier::new(Money::from_cents(threshold), Money::from_cents(cost))
        };

        PricingConfig {
            products: vec![
                product("R01", "Red Widget", 3295),
                product("G01", "Green Widget", 2495),
                product("B01", "Blue Widget", 795),
            ],
            delivery: DeliveryConfig {
                tiers: vec![tier(0, 495), tier(5000, 295), tier(9000, 0)],
            },
            offers: vec![OfferConfig::BuyOneGetSecondHalfPrice {
                product_code: "R01".to_string(),
            }],
        }
    }

    /// Validates the config and builds shared pricing rules.
    ///
    /// ## Errors
    /// - [`CoreError::Validation`] for a bad product or tier value
    /// - [`CoreError::DuplicateCode`] for a repeated product code
    /// - [`CoreError::UnknownOfferProduct`] for an offer on a missing product
    /// - [`CoreError::MissingBaseTier`] when no tier starts at zero
    pub fn build(&self) -> CoreResult<PricingRules> {
        let products = self
            .products
            .iter()
            .map(|p| Product::new(p.code.as_str(), p.name.as_str(), p.price))
            .collect::<CoreResult<Vec<_>>>()?;
        let catalog = Catalog::new(products)?;

        let offers = self
            .offers
            .iter()
            .map(|offer| {
                if catalog.contains(offer.product_code()) {
                    Ok(offer.to_offer())
                } else {
                    Err(CoreError::UnknownOfferProduct(offer.product_code().to_string()))
                }
            })
            .collect::<CoreResult<Vec<_>>>()?;

        let delivery = TieredDeliveryRule::new(self.delivery.tiers.iter().copied())?;

        info!(
            products = catalog.len(),
            offers = offers.len(),
            tiers = delivery.tiers().len(),
            "Pricing rules built"
        );

        Ok(PricingRules::new(Arc::new(catalog), Arc::new(delivery), offers))
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig::acme_widgets()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
