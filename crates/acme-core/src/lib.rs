//! # acme-core: Pure Pricing Logic for Acme Basket
//!
//! This crate prices shopping baskets: catalog lookup, offer discounts,
//! and tiered delivery charges. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Acme Basket Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (`basket`)                          │   │
//! │  │    demo ──► total ──► catalog         reads config files        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ acme-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌──────────┐          │   │
//! │  │   │ catalog │  │  offer  │  │delivery │  │  basket  │          │   │
//! │  │   │ Product │  │ ½-price │  │  tiers  │  │  total   │          │   │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └──────────┘          │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌────────────┐                     │   │
//! │  │   │  money  │  │ config  │  │ validation │                     │   │
//! │  │   └─────────┘  └─────────┘  └────────────┘                     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FLOATS • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Decimal Money type, rounded only for display
//! - [`types`] - Product and PriceBreakdown
//! - [`catalog`] - Product lookup by code
//! - [`offer`] - Discount rules
//! - [`delivery`] - Delivery charge rules
//! - [`basket`] - Basket and shared PricingRules
//! - [`config`] - Serde pricing configuration
//! - [`validation`] - Field validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use acme_core::PricingConfig;
//!
//! let rules = PricingConfig::acme_widgets().build().unwrap();
//!
//! let mut basket = rules.basket();
//! basket.add("R01").unwrap();
//! basket.add("G01").unwrap();
//!
//! // $57.90 lands in the $50 tier: $2.95 delivery
//! assert_eq!(basket.total().unwrap().to_string(), "$60.85");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod catalog;
pub mod config;
pub mod delivery;
pub mod error;
pub mod money;
pub mod offer;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::{Basket, PricingRules, SharedOffers};
pub use catalog::Catalog;
pub use config::{DeliveryConfig, OfferConfig, PricingConfig, ProductConfig};
pub use delivery::{DeliveryRule, DeliveryTier, TieredDeliveryRule};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use offer::{BuyOneGetSecondHalfPrice, Offer};
pub use types::{PriceBreakdown, Product};
