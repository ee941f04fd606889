//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  id (UserId)    │   │  id (UUID)      │       │
//! │  │  price (Money)  │   │  login          │   │  products (Rc)  │       │
//! │  │  description    │   │  password       │   │  quantity       │       │
//! │  │  category       │   │  history ───────┼──►│  status         │       │
//! │  │  rating         │   └─────────────────┘   │  created_at     │       │
//! │  └────────▲────────┘                         └────────┬────────┘       │
//! │           └───────────── shared Rc<Product> ──────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products have no identity beyond their position in the catalog. Orders
//! hold `Rc` handles into the catalog rather than copies, so an order's total
//! is always computed from the live catalog entries.

use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name.
    pub name: String,

    /// Unit price. Non-negative once the product is in a catalog.
    pub price: Money,

    /// Free-form description.
    pub description: String,

    /// Category label, matched case-insensitively.
    pub category: String,

    /// Customer rating, nominally 0.0 to 5.0 (not enforced).
    pub rating: f64,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
            category: category.into(),
            rating,
        }
    }

    /// Case-insensitive exact category comparison.
    ///
    /// Characters are folded one at a time, so the result does not depend
    /// on where a letter sits in the word (final sigma and the like).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Product};
    ///
    /// let p = Product::new("Laptop", Money::zero(), "", "Electronics", 4.5);
    /// assert!(p.in_category("ELECTRONICS"));
    /// assert!(!p.in_category("Electronic"));
    /// ```
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
            || self
                .category
                .chars()
                .flat_map(char::to_uppercase)
                .eq(category.chars().flat_map(char::to_uppercase))
    }
}

// =============================================================================
// User
// =============================================================================

/// Opaque handle the registry uses to tell users apart.
///
/// Two users with identical credentials still have different handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        UserId(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A registered shopper.
///
/// The password is stored and compared in plain text.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    login: String,
    password: String,
    purchase_history: Vec<Order>,
}

impl User {
    /// Creates a user with an empty purchase history and a fresh handle.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            login: login.into(),
            password: password.into(),
            purchase_history: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[inline]
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Exact, case-sensitive match on both login and password.
    pub fn credentials_match(&self, login: &str, password: &str) -> bool {
        self.login == login && self.password == password
    }

    /// Orders placed by this user, oldest first.
    #[inline]
    pub fn purchase_history(&self) -> &[Order] {
        &self.purchase_history
    }

    /// Appends to the history. There is no way to remove an order.
    pub(crate) fn record_order(&mut self, order: Order) -> &Order {
        self.purchase_history.push(order);
        &self.purchase_history[self.purchase_history.len() - 1]
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order.
///
/// Orders are created `InProgress` and nothing in this system moves them on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
}

impl OrderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "In Progress",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Order
// =============================================================================

/// A purchase recorded in a user's history.
///
/// `products` may hold the same catalog entry more than once; each
/// occurrence counts toward the total.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub products: Vec<Rc<Product>>,
    pub quantity: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(products: Vec<Rc<Product>>, quantity: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            products,
            quantity,
            status: OrderStatus::InProgress,
            created_at: Utc::now(),
        }
    }

    /// Sum of the selected products' prices, before quantity.
    pub fn subtotal(&self) -> Option<Money> {
        Money::checked_sum(self.products.iter().map(|p| p.price))
    }

    /// `(Σ product prices) × quantity`, or `None` if it does not fit.
    ///
    /// The quantity scales the whole selection, not each line.
    pub fn checked_total(&self) -> Option<Money> {
        self.subtotal()?.checked_mul(self.quantity)
    }

    /// Total price of the order.
    ///
    /// Orders whose total overflows are rejected at creation, so the
    /// fallback to zero is unreachable for recorded orders.
    pub fn total_price(&self) -> Money {
        self.checked_total().unwrap_or_default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
