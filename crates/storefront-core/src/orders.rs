//! # Order Assembly
//!
//! Validates a candidate selection and commits it to one user's history.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    create_order(user, products, qty)                    │
//! │                                                                         │
//! │  user registered?         no ──► UnknownUser        (nothing changes)   │
//! │       │ yes                                                             │
//! │  products non-empty?      no ──► InvalidSelection   (nothing changes)   │
//! │       │ yes                                                             │
//! │  qty > 0?                 no ──► InvalidQuantity    (nothing changes)   │
//! │       │ yes                                                             │
//! │  (Σ price) × qty fits?    no ──► TotalOverflow      (nothing changes)   │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  Order { status: In Progress } appended to user.purchase_history       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderReceipt returned for display                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::accounts::AccountRegistry;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Order, OrderStatus, Product, UserId};
use crate::validation::validate_quantity;

/// Summary of a freshly created order, handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub product_count: usize,
    pub quantity: i64,
    pub subtotal: Money,
    pub total: Money,
    pub created_at: DateTime<Utc>,
}

/// Creates an order for a registered user and appends it to their history.
///
/// `products` are shared catalog handles, usually from
/// [`Catalog::select`](crate::Catalog::select). Repeats are allowed and each
/// one counts toward the total.
///
/// ## Errors
/// Checked in this order, and none of them mutates anything:
/// - `UnknownUser` if `user_id` is not in `accounts`
/// - `InvalidSelection` if `products` is empty
/// - `InvalidQuantity` if `quantity <= 0`
/// - `TotalOverflow` if the total does not fit in `Money`
pub fn create_order(
    accounts: &mut AccountRegistry,
    user_id: &UserId,
    products: Vec<Rc<Product>>,
    quantity: i64,
) -> CoreResult<OrderReceipt> {
    if !accounts.contains(user_id) {
        warn!(user_id = %user_id, "order rejected: unknown user");
        return Err(CoreError::UnknownUser(user_id.to_string()));
    }

    if products.is_empty() {
        warn!(user_id = %user_id, "order rejected: empty selection");
        return Err(CoreError::InvalidSelection {
            reason: "no products selected".to_string(),
        });
    }

    if validate_quantity(quantity).is_err() {
        warn!(user_id = %user_id, quantity, "order rejected: invalid quantity");
        return Err(CoreError::InvalidQuantity {
            requested: quantity,
        });
    }

    let order = Order::new(products, quantity);
    let (subtotal, total) = match (order.subtotal(), order.checked_total()) {
        (Some(subtotal), Some(total)) => (subtotal, total),
        _ => {
            warn!(user_id = %user_id, quantity, "order rejected: total overflows");
            return Err(CoreError::TotalOverflow);
        }
    };

    let recorded = accounts.record_order(user_id, order)?;
    let receipt = OrderReceipt {
        order_id: recorded.id,
        user_id: *user_id,
        status: recorded.status,
        product_count: recorded.products.len(),
        quantity: recorded.quantity,
        subtotal,
        total,
        created_at: recorded.created_at,
    };

    info!(
        order_id = %receipt.order_id,
        user_id = %user_id,
        products = receipt.product_count,
        quantity,
        total = %receipt.total,
        "order created"
    );

    Ok(receipt)
}

// =============================================================================
// Unit Tests
// =============================================================================
