//! # Catalog
//!
//! The authoritative mapping from product code to [`Product`].
//!
//! A catalog is built once, wrapped in an `Arc`, and read by every basket.
//! There is no way to mutate it after construction.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;

/// Immutable product lookup keyed by code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Products in the order they were supplied.
    products: Vec<Product>,
    /// code → index into `products`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate codes.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::{Catalog, CoreError, Money, Product};
    ///
    /// let red = Product::new("R01", "Red Widget", Money::from_cents(3295)).unwrap();
    /// let catalog = Catalog::new(vec![red.clone()]).unwrap();
    /// assert_eq!(catalog.find("R01").unwrap().name(), "Red Widget");
    ///
    /// let err = Catalog::new(vec![red.clone(), red]).unwrap_err();
    /// assert!(matches!(err, CoreError::DuplicateCode(code) if code == "R01"));
    /// ```
    pub fn new(products: impl IntoIterator<Item = Product>) -> CoreResult<Self> {
        let products: Vec<Product> = products.into_iter().collect();
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            if index.insert(product.code().to_string(), position).is_some() {
                return Err(CoreError::DuplicateCode(product.code().to_string()));
            }
        }

        Ok(Catalog { products, index })
    }

    /// Looks up a product by code.
    ///
    /// Fails with [`CoreError::ProductNotFound`] when the code is absent.
    pub fn find(&self, code: &str) -> CoreResult<&Product> {
        match self.index.get(code) {
            Some(&position) => Ok(&self.products[position]),
            None => {
                warn!(code, "Product code not in catalog");
                Err(CoreError::ProductNotFound(code.to_string()))
            }
        }
    }

    /// Checks whether a code is present.
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn widgets() -> Vec<Product> {
        vec![
            Product::new("R01", "Red Widget", Money::from_cents(3295)).unwrap(),
            Product::new("G01", "Green Widget", Money::from_cents(2495)).unwrap(),
            Product::new("B01", "Blue Widget", Money::from_cents(795)).unwrap(),
        ]
    }

    #[test]
    fn test_find_returns_exact_product() {
        let catalog = Catalog::new(widgets()).unwrap();

        for product in widgets() {
            let found = catalog.find(product.code()).unwrap();
            assert_eq!(found, &product);
        }
    }

    #[test]
    fn test_find_missing_code() {
        let catalog = Catalog::new(widgets()).unwrap();

        let err = catalog.find("X99").unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(code) if code == "X99"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = Catalog::new(widgets()).unwrap();
        assert!(catalog.find("r01").is_err());
    }

    #[test]
    fn test_duplicate_codes_rejected() {
        let mut products = widgets();
        products.push(Product::new("G01", "Other Green", Money::from_cents(100)).unwrap());

        let err = Catalog::new(products).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateCode(code) if code == "G01"));
    }

    #[test]
    fn test_products_keep_insertion_order() {
        let catalog = Catalog::new(widgets()).unwrap();
        let codes: Vec<&str> = catalog.products().iter().map(Product::code).collect();
        assert_eq!(codes, ["R01", "G01", "B01"]);
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("B01"));
        assert!(!catalog.contains("Z01"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.find("R01").is_err());
    }
}
