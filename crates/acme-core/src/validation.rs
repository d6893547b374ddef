//! # Validation Module
//!
//! Field-level checks run while pricing configuration is constructed.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  └── Shape and types of the pricing config                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Product codes, names, prices                                      │
//! │  └── Delivery tier thresholds and costs                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Aggregate constructors                                       │
//! │  ├── Catalog: unique codes                                             │
//! │  └── TieredDeliveryRule: base tier present, thresholds unique          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Once a value passes these checks it is immutable, so pricing code never
//! re-validates.

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product code.
pub const MAX_CODE_LEN: usize = 50;

/// Longest accepted product name.
pub const MAX_NAME_LEN: usize = 200;

/// Largest accepted price, tier threshold or tier cost, in cents
/// ($1,000,000,000,000.00).
///
/// Basket sums stay far below `Decimal::MAX` under this cap, so pricing
/// arithmetic cannot overflow.
pub const MAX_AMOUNT_CENTS: i64 = 100_000_000_000_000;

const CODE_FIELD: &str = "code";
const NAME_FIELD: &str = "name";

// =============================================================================
// String Validators
// =============================================================================

/// Trims `value` and checks it is present and at most `max` characters.
fn validate_text<'a>(field: &str, value: &'a str, max: usize) -> ValidationResult<&'a str> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value)
}

/// Validates a product code.
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_CODE_LEN`] characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use acme_core::validation::validate_product_code;
///
/// assert!(validate_product_code("R01").is_ok());
/// assert!(validate_product_code("").is_err());
/// assert!(validate_product_code("R 01").is_err());
/// ```
pub fn validate_product_code(code: &str) -> ValidationResult<()> {
    let code = validate_text(CODE_FIELD, code, MAX_CODE_LEN)?;

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: CODE_FIELD.to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name: present and at most [`MAX_NAME_LEN`]
/// characters.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_text(NAME_FIELD, name, MAX_NAME_LEN).map(|_| ())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a monetary amount from configuration.
///
/// Used for product prices, tier thresholds and tier costs.
///
/// ## Rules
/// - Zero or more
/// - At most [`MAX_AMOUNT_CENTS`]
///
/// ## Example
/// ```rust
/// use acme_core::money::Money;
/// use acme_core::validation::validate_amount;
///
/// assert!(validate_amount("price", Money::from_cents(795)).is_ok());
/// assert!(validate_amount("price", Money::zero()).is_ok());
/// assert!(validate_amount("price", Money::from_cents(-1)).is_err());
/// ```
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    let max = Money::from_cents(MAX_AMOUNT_CENTS);
    if amount > max {
        return Err(ValidationError::TooLarge {
            field: field.to_string(),
            max,
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
    fn test_validate_product_code() {
        assert!(validate_product_code("R01").is_ok());
        assert!(validate_product_code("WIDGET-RED_2").is_ok());

        assert!(validate_product_code("").is_err());
        assert!(validate_product_code("   ").is_err());
        assert!(validate_product_code("R/01").is_err());
        assert!(validate_product_code(&"A".repeat(MAX_CODE_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Red Widget").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_product_name_trims_and_counts_chars() {
        assert!(validate_product_name("  Red Widget  ").is_ok());
        assert!(validate_product_name("   ").is_err());
        // Multi-byte characters count once each.
        assert!(validate_product_name(&"é".repeat(MAX_NAME_LEN)).is_ok());

        let err = validate_product_name(&"A".repeat(MAX_NAME_LEN + 1)).unwrap_err();
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("cost", Money::zero()).is_ok());
        assert!(validate_amount("cost", Money::from_cents(495)).is_ok());
        assert!(validate_amount("cost", Money::from_cents(MAX_AMOUNT_CENTS)).is_ok());

        let err = validate_amount("cost", Money::from_cents(-495)).unwrap_err();
        assert_eq!(err.to_string(), "cost must not be negative");
    }

    #[test]
    fn test_validate_amount_rejects_huge_values() {
        let err = validate_amount("price", Money::from_cents(MAX_AMOUNT_CENTS + 1)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLarge { .. }));
        assert_eq!(err.to_string(), "price must be at most $1000000000000.00");

        let near_decimal_max: Money = "79228162514264337593543950335".parse().unwrap();
        assert!(validate_amount("price", near_decimal_max).is_err());
    }
}
