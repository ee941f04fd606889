//! # Store
//!
//! The one context object a caller constructs and passes around: a catalog
//! plus an account registry. There are no globals; two `Store`s never see
//! each other's data.
//!
//! ```text
//! ┌──────────────────────── Store ────────────────────────┐
//! │  catalog: Catalog            accounts: AccountRegistry │
//! │     │  (read-only search)        │  (lookup, history)  │
//! │     └──────── select(indices) ──►create_order ◄────────┘
//! └────────────────────────────────────────────────────────┘
//! ```

use std::rc::Rc;

use crate::accounts::AccountRegistry;
use crate::catalog::{Catalog, ProductSearch};
use crate::error::CoreResult;
use crate::money::Money;
use crate::orders::{self, OrderReceipt};
use crate::types::{Product, User, UserId};

#[derive(Debug, Clone, Default)]
pub struct Store {
    catalog: Catalog,
    accounts: AccountRegistry,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn accounts(&self) -> &AccountRegistry {
        &self.accounts
    }

    /// Appends a product to the catalog and returns its position.
    pub fn add_product(&mut self, product: Product) -> CoreResult<usize> {
        self.catalog.add_product(product)
    }

    /// Registers a user and returns the handle used for ordering.
    pub fn add_user(&mut self, user: User) -> CoreResult<UserId> {
        self.accounts.add_user(user)
    }

    pub fn find_user(&self, login: &str, password: &str) -> Option<&User> {
        self.accounts.find_user(login, password)
    }

    pub fn authenticate(&self, login: &str, password: &str) -> CoreResult<&User> {
        self.accounts.authenticate(login, password)
    }

    /// Records an order for `user_id`. See [`orders::create_order`].
    pub fn create_order(
        &mut self,
        user_id: &UserId,
        products: Vec<Rc<Product>>,
        quantity: i64,
    ) -> CoreResult<OrderReceipt> {
        orders::create_order(&mut self.accounts, user_id, products, quantity)
    }

    /// Resolves catalog positions and records the order in one step.
    pub fn order_by_indices(
        &mut self,
        user_id: &UserId,
        indices: &[usize],
        quantity: i64,
    ) -> CoreResult<OrderReceipt> {
        let products = self.catalog.select(indices)?;
        self.create_order(user_id, products, quantity)
    }
}

impl ProductSearch for Store {
    fn search_by_price(&self, min: Money, max: Money) -> Vec<Rc<Product>> {
        self.catalog.search_by_price(min, max)
    }

    fn search_by_category(&self, category: &str) -> Vec<Rc<Product>> {
        self.catalog.search_by_category(category)
    }

    fn search_by_rating(&self, min_rating: f64) -> Vec<Rc<Product>> {
        self.catalog.search_by_rating(min_rating)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn store_with_admin() -> (Store, UserId) {
        let mut store = Store::new();
        store
            .add_product(Product::new("Laptop", Money::from_major_minor(1500, 0), "", "Electronics", 4.5))
            .unwrap();
        store
            .add_product(Product::new("Headphones", Money::from_major_minor(100, 0), "", "Electronics", 4.7))
            .unwrap();
        let admin = store.add_user(User::new("admin", "admin")).unwrap();
        (store, admin)
    }

    #[test]
    fn test_order_by_indices_records_history() {
        let (mut store, admin) = store_with_admin();

        let receipt = store.order_by_indices(&admin, &[0, 1, 1], 2).unwrap();

        // (1500 + 100 + 100) × 2
        assert_eq!(receipt.total, Money::from_major_minor(3400, 0));
        let user = store.find_user("admin", "admin").unwrap();
        assert_eq!(user.purchase_history().len(), 1);
        assert_eq!(user.purchase_history()[0].products.len(), 3);
    }

    #[test]
    fn test_order_by_indices_rejects_bad_index() {
        let (mut store, admin) = store_with_admin();
        let result = store.order_by_indices(&admin, &[7], 1);
        assert!(matches!(result, Err(CoreError::InvalidSelection { .. })));
        assert!(store.find_user("admin", "admin").unwrap().purchase_history().is_empty());
    }

    #[test]
    fn test_orders_share_catalog_products() {
        let (mut store, admin) = store_with_admin();
        store.order_by_indices(&admin, &[1], 1).unwrap();

        let order = &store.find_user("admin", "admin").unwrap().purchase_history()[0];
        assert!(Rc::ptr_eq(&order.products[0], store.catalog().get(1).unwrap()));
    }

    #[test]
    fn test_stores_are_independent() {
        let (mut first, admin) = store_with_admin();
        let (second, _) = store_with_admin();

        first.order_by_indices(&admin, &[0], 1).unwrap();

        assert!(second.accounts().iter().all(|u| u.purchase_history().is_empty()));
    }

    #[test]
    fn test_store_search_delegates_to_catalog() {
        let (store, _) = store_with_admin();
        assert_eq!(store.search_by_category("ELECTRONICS").len(), 2);
        assert_eq!(store.search_by_rating(4.6).len(), 1);
        assert_eq!(
            store
                .search_by_price(Money::zero(), Money::from_major_minor(100, 0))
                .len(),
            1
        );
    }
}
