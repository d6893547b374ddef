//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    98.275 is stored as 98.27499999...  → "%.2f" prints 98.27  ❌        │
//! │                                                                         │
//! │  THE WHOLE-CENT PROBLEM                                                 │
//! │                                                                         │
//! │  Half price on $32.95 is $16.475. Rounding that to cents before the    │
//! │  delivery tier is chosen can move a basket across a threshold.         │
//! │                                                                         │
//! │  OUR SOLUTION: Exact Decimal                                            │
//! │    All arithmetic is exact (rust_decimal, base 10).                    │
//! │    Rounding to 2 places happens ONLY for display.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use acme_core::money::Money;
//!
//! let price = Money::from_cents(3295); // $32.95
//!
//! let half = price.halve();            // $16.475, kept exactly
//! let total = price + half;            // $49.425
//!
//! assert_eq!(total.to_string(), "$49.43");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places shown when money is displayed.
pub const DISPLAY_DECIMALS: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in a single, implicit currency.
///
/// ## Design Decisions
/// - **Decimal (signed)**: negative values allowed for intermediate results
///   (subtotal minus a discount before clamping)
/// - **Single field tuple struct**: zero-cost abstraction over `Decimal`
/// - **Transparent serde**: serializes as the bare decimal
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Product.price ──► Basket.subtotal ──► − Offer.discount                 │
/// │                                               │                         │
/// │                                               ▼                         │
/// │                        discounted subtotal ──► DeliveryRule.cost_for    │
/// │                                               │                         │
/// │                                               ▼                         │
/// │                                         Basket.total ──► "$54.38"       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from a decimal amount.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let price = Money::from_decimal(Decimal::new(795, 2)); // $7.95
    /// assert_eq!(price, Money::from_cents(795));
    /// ```
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from whole cents.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// let price = Money::from_cents(3295); // $32.95
    /// assert_eq!(price.to_string(), "$32.95");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the exact, unrounded amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(795); // $7.95
    /// assert_eq!(unit_price.multiply_quantity(2), Money::from_cents(1590));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Returns exactly half of the value, without rounding.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let half = Money::from_cents(3295).halve();
    /// assert_eq!(half.amount(), Decimal::new(16475, 3)); // $16.475
    /// ```
    #[inline]
    pub fn halve(&self) -> Self {
        Money(self.0 / Decimal::TWO)
    }

    /// Clamps negative values to zero.
    ///
    /// A discount larger than the subtotal never produces a negative basket.
    #[inline]
    pub fn clamp_non_negative(self) -> Self {
        self.max(Money::zero())
    }

    /// Rounds to whole cents, half away from zero.
    ///
    /// ```text
    /// 54.375 → 54.38
    /// 98.275 → 98.28
    /// 37.85  → 37.85
    /// ```
    ///
    /// Only display code should call this. Pricing math stays exact.
    pub fn round_to_cents(&self) -> Self {
        Money(
            self.0
                .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display rounds to cents and shows a leading dollar sign.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_cents().0;
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };

        let mut magnitude = rounded.abs();
        magnitude.rescale(DISPLAY_DECIMALS);

        write!(f, "{}${}", sign, magnitude)
    }
}

/// Parses a plain decimal string such as `"32.95"`.
impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Money)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
