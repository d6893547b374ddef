//! # Error Types
//!
//! Domain-specific error types for acme-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  acme-core errors (this file)                                          │
//! │  ├── CoreError        - Pricing / configuration failures               │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── CliError         - Config file I/O, output encoding               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr + exit code 1   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product code, amount, etc.)
//! 3. Errors are enum variants, never String
//! 4. A failed operation leaves no partial state behind

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product code is not in the catalog.
    ///
    /// ## When This Occurs
    /// - `Basket::add` with a code the catalog does not know
    /// - `Catalog::find` with an unknown code
    ///
    /// Adding an unknown code is a caller or configuration bug, so it is
    /// propagated immediately and never recovered inside the core.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog products share a code.
    #[error("Duplicate product code in catalog: {0}")]
    DuplicateCode(String),

    /// A tiered delivery rule has no tier starting at zero.
    ///
    /// ## Why Construction Time?
    /// ```text
    /// tiers: [50 → 2.95, 90 → 0.00]
    ///              │
    ///              ▼
    /// subtotal $12.00 has no tier ──► would fail at checkout
    ///              │
    ///              ▼
    /// rejected up front as MissingBaseTier
    /// ```
    #[error("Delivery tiers must include a tier with threshold 0")]
    MissingBaseTier,

    /// No delivery tier covers the amount (only possible for negatives).
    #[error("No delivery tier matches amount {amount}")]
    NoMatchingTier { amount: Money },

    /// A configured offer points at a product code the catalog lacks.
    #[error("Offer refers to unknown product: {0}")]
    UnknownOfferProduct(String),

    /// Pricing configuration could not be parsed.
    #[error("Invalid pricing config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while constructing products and delivery tiers, before any
/// pricing logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., whitespace in a product code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Monetary value must be zero or more.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Monetary value exceeds the configured ceiling.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: Money },

    /// Duplicate value (e.g., two tiers with the same threshold).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("X99".to_string());
        assert_eq!(err.to_string(), "Product not found: X99");

        let err = CoreError::NoMatchingTier {
            amount: Money::from_cents(-100),
        };
        assert_eq!(err.to_string(), "No delivery tier matches amount -$1.00");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "code".to_string(),
        };
        assert_eq!(err.to_string(), "code is required");

        let err = ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "code".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_json_error_converts_to_invalid_config() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::InvalidConfig(_)));
    }
}
