//! # Delivery Rules
//!
//! Map a (discounted) basket subtotal to a delivery charge.
//!
//! ## Tiered Delivery
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal:  $0 ─────────── $50 ─────────── $90 ───────────► ∞           │
//! │             │   $4.95       │    $2.95      │    FREE                   │
//! │             └── tier 0 ─────┴── tier 50 ────┴── tier 90                 │
//! │                                                                         │
//! │  Lower bounds are inclusive: exactly $50.00 pays $2.95.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::validate_amount;

// =============================================================================
// Delivery Rule Trait
// =============================================================================

/// Computes the delivery charge for an amount.
pub trait DeliveryRule: fmt::Debug + Send + Sync {
    /// Delivery charge for `amount`.
    ///
    /// Fails with [`CoreError::NoMatchingTier`] when the rule has no charge
    /// defined for the amount.
    fn cost_for(&self, amount: Money) -> CoreResult<Money>;
}

// =============================================================================
// Delivery Tier
// =============================================================================

/// One step of a tiered rule: from `threshold` upwards, charge `cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryTier {
    pub threshold: Money,
    pub cost: Money,
}

impl DeliveryTier {
    pub fn new(threshold: Money, cost: Money) -> Self {
        DeliveryTier { threshold, cost }
    }
}

// =============================================================================
// Tiered Delivery Rule
// =============================================================================

/// Step-function delivery pricing.
///
/// ## Invariants
/// - Tiers are sorted by threshold, ascending
/// - Thresholds are unique
/// - The first tier starts at zero, so every non-negative amount has a tier
/// - Thresholds and costs are non-negative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieredDeliveryRule {
    tiers: Vec<DeliveryTier>,
}

impl TieredDeliveryRule {
    /// Builds a rule from tiers in any order.
    ///
    /// ## Errors
    /// - [`ValidationError::Required`] for an empty tier list
    /// - [`ValidationError::MustBeNonNegative`] for a negative threshold or cost
    /// - [`ValidationError::Duplicate`] when two tiers share a threshold
    /// - [`CoreError::MissingBaseTier`] when no tier starts at zero
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::{DeliveryRule, DeliveryTier, Money, TieredDeliveryRule};
    ///
    /// let rule = TieredDeliveryRule::new(vec![
    ///     DeliveryTier::new(Money::from_cents(9000), Money::zero()),
    ///     DeliveryTier::new(Money::zero(), Money::from_cents(495)),
    ///     DeliveryTier::new(Money::from_cents(5000), Money::from_cents(295)),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(rule.cost_for(Money::from_cents(4999)).unwrap(), Money::from_cents(495));
    /// assert_eq!(rule.cost_for(Money::from_cents(5000)).unwrap(), Money::from_cents(295));
    /// ```
    pub fn new(tiers: impl IntoIterator<Item = DeliveryTier>) -> CoreResult<Self> {
        let mut tiers: Vec<DeliveryTier> = tiers.into_iter().collect();

        if tiers.is_empty() {
            return Err(ValidationError::Required {
                field: "delivery tiers".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::with_capacity(tiers.len());
        for tier in &tiers {
            validate_amount("delivery threshold", tier.threshold)?;
            validate_amount("delivery cost", tier.cost)?;

            if !seen.insert(tier.threshold) {
                return Err(ValidationError::Duplicate {
                    field: "delivery threshold".to_string(),
                    value: tier.threshold.to_string(),
                }
                .into());
            }
        }

        tiers.sort_by_key(|tier| tier.threshold);

        if !tiers[0].threshold.is_zero() {
            return Err(CoreError::MissingBaseTier);
        }

        Ok(TieredDeliveryRule { tiers })
    }

    /// Tiers in ascending threshold order.
    pub fn tiers(&self) -> &[DeliveryTier] {
        &self.tiers
    }
}

impl DeliveryRule for TieredDeliveryRule {
    fn cost_for(&self, amount: Money) -> CoreResult<Money> {
        self.tiers
            .iter()
            .rev()
            .find(|tier| tier.threshold <= amount)
            .map(|tier| tier.cost)
            .ok_or(CoreError::NoMatchingTier { amount })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
