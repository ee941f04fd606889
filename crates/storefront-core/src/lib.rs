//! # storefront-core: Pure Business Logic for the Storefront Demo
//!
//! This crate holds the in-memory catalog, the account registry and the
//! order assembler. Everything here is a plain function of its inputs; the
//! console shell in `storefront-cli` owns all I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-cli (console shell)                  │   │
//! │  │    Login ──► Search menu ──► Render ──► Pick indices/quantity   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain method calls                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ storefront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │ accounts  │  │  orders   │  │   store   │  │   │
//! │  │   │  filters  │  │  lookup   │  │ assembler │  │  context  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │validation │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO THREADS • NO GLOBALS                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, User, Order, OrderStatus)
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Product list and the three search predicates
//! - [`accounts`] - User registry and credential lookup
//! - [`orders`] - Order assembly and receipts
//! - [`store`] - The context object tying catalog and accounts together
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Money, Product, ProductSearch, Store, User};
//!
//! let mut store = Store::new();
//! store
//!     .add_product(Product::new("Laptop", Money::from_major_minor(1500, 0), "", "Electronics", 4.5))
//!     .unwrap();
//! store
//!     .add_product(Product::new("Headphones", Money::from_major_minor(100, 0), "", "Electronics", 4.7))
//!     .unwrap();
//! let admin = store.add_user(User::new("admin", "admin")).unwrap();
//!
//! let cheap = store.search_by_price(Money::zero(), Money::from_major_minor(200, 0));
//! assert_eq!(cheap.len(), 1);
//!
//! let selection = store.catalog().select(&[0, 1]).unwrap();
//! let receipt = store.create_order(&admin, selection, 3).unwrap();
//! assert_eq!(receipt.total, Money::from_major_minor(4800, 0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod accounts;
pub mod catalog;
pub mod error;
pub mod money;
pub mod orders;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use accounts::AccountRegistry;
pub use catalog::{Catalog, ProductSearch};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use orders::OrderReceipt;
pub use store::Store;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length of a login.
pub const MAX_LOGIN_LEN: usize = 100;
