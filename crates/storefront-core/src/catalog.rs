//! # Catalog
//!
//! The ordered product list and the three read-only search predicates.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Search                                       │
//! │                                                                         │
//! │  search_by_price(min, max)    min ≤ price ≤ max                        │
//! │  search_by_category(c)        category == c (ignoring case)            │
//! │  search_by_rating(r)          rating ≥ r                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Linear scan in catalog order ──► Vec<Rc<Product>> (maybe empty)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Results share the catalog's `Rc<Product>` entries; nothing is copied.
//! An empty result is a normal outcome, not an error.

use std::rc::Rc;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::{validate_category, validate_price, validate_product_name};

// =============================================================================
// Search Capability
// =============================================================================

/// Read-only product queries.
///
/// `Catalog` answers these with a linear scan; an indexed backend could
/// implement the same trait.
pub trait ProductSearch {
    /// Every product with `min ≤ price ≤ max`, in catalog order.
    ///
    /// `min > max` yields an empty result.
    fn search_by_price(&self, min: Money, max: Money) -> Vec<Rc<Product>>;

    /// Every product whose category equals `category`, ignoring case.
    fn search_by_category(&self, category: &str) -> Vec<Rc<Product>>;

    /// Every product with `rating ≥ min_rating`.
    fn search_by_rating(&self, min_rating: f64) -> Vec<Rc<Product>>;
}

// =============================================================================
// Catalog
// =============================================================================

/// Append-only list of products. A product is identified by its position.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Rc<Product>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a product, returning its position.
    ///
    /// ## Rules
    /// - name: non-blank, at most 200 characters
    /// - category: non-blank
    /// - price: non-negative
    pub fn add_product(&mut self, product: Product) -> CoreResult<usize> {
        validate_product_name(&product.name)?;
        validate_category(&product.category)?;
        validate_price(product.price)?;

        let index = self.products.len();
        debug!(index, name = %product.name, price = %product.price, "product added");
        self.products.push(Rc::new(product));
        Ok(index)
    }

    pub fn get(&self, index: usize) -> Option<&Rc<Product>> {
        self.products.get(index)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<Product>> {
        self.products.iter()
    }

    /// Resolves catalog positions into shared product handles.
    ///
    /// Repeated positions are kept, so `[1, 1]` selects product 1 twice.
    ///
    /// ## Errors
    /// - `InvalidSelection` if `indices` is empty or any index is out of range
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Catalog, Money, Product};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add_product(Product::new("Mug", Money::from_cents(500), "", "Kitchen", 4.0)).unwrap();
    ///
    /// assert_eq!(catalog.select(&[0, 0]).unwrap().len(), 2);
    /// assert!(catalog.select(&[1]).is_err());
    /// assert!(catalog.select(&[]).is_err());
    /// ```
    pub fn select(&self, indices: &[usize]) -> CoreResult<Vec<Rc<Product>>> {
        if indices.is_empty() {
            return Err(CoreError::InvalidSelection {
                reason: "no products selected".to_string(),
            });
        }

        indices
            .iter()
            .map(|&index| {
                self.products
                    .get(index)
                    .cloned()
                    .ok_or_else(|| CoreError::InvalidSelection {
                        reason: format!(
                            "index {} is out of range (catalog has {} products)",
                            index,
                            self.products.len()
                        ),
                    })
            })
            .collect()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Rc<Product>>
    where
        F: Fn(&Product) -> bool,
    {
        self.products
            .iter()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }
}

impl ProductSearch for Catalog {
    fn search_by_price(&self, min: Money, max: Money) -> Vec<Rc<Product>> {
        let found = self.filter(|p| min <= p.price && p.price <= max);
        debug!(%min, %max, matches = found.len(), "search by price");
        found
    }

    fn search_by_category(&self, category: &str) -> Vec<Rc<Product>> {
        let found = self.filter(|p| p.in_category(category));
        debug!(category, matches = found.len(), "search by category");
        found
    }

    fn search_by_rating(&self, min_rating: f64) -> Vec<Rc<Product>> {
        let found = self.filter(|p| p.rating >= min_rating);
        debug!(min_rating, matches = found.len(), "search by rating");
        found
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
