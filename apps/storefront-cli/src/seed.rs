//! # Demo Data
//!
//! Populates a fresh [`Store`] with the demo catalog and the configured
//! admin account.
//!
//! ## Demo Catalog
//! | # | Name         | Price    | Category        | Rating |
//! |---|--------------|----------|-----------------|--------|
//! | 0 | Laptop       | $1500.00 | Electronics     | 4.5    |
//! | 1 | Headphones   | $100.00  | Electronics     | 4.7    |
//! | 2 | Smartphone   | $800.00  | Electronics     | 4.6    |
//! | 3 | Coffee Maker | $120.00  | Home Appliances | 4.3    |

use storefront_core::{Money, Product, Store, User};
use tracing::info;

use crate::config::ShellConfig;
use crate::error::ShellResult;

/// (name, dollars, description, category, rating)
const DEMO_PRODUCTS: &[(&str, i64, &str, &str, f64)] = &[
    ("Laptop", 1500, "High performance laptop", "Electronics", 4.5),
    ("Headphones", 100, "Noise-cancelling headphones", "Electronics", 4.7),
    ("Smartphone", 800, "Latest model smartphone", "Electronics", 4.6),
    ("Coffee Maker", 120, "Automatic coffee maker", "Home Appliances", 4.3),
];

/// The demo products, in catalog order.
pub fn demo_products() -> Vec<Product> {
    DEMO_PRODUCTS
        .iter()
        .map(|&(name, dollars, description, category, rating)| {
            Product::new(
                name,
                Money::from_major_minor(dollars, 0),
                description,
                category,
                rating,
            )
        })
        .collect()
}

/// Builds the store the shell runs against.
///
/// With `seed_demo` off the store starts empty, so every login fails.
pub fn build_store(config: &ShellConfig) -> ShellResult<Store> {
    let mut store = Store::new();

    if !config.seed_demo {
        info!("demo data disabled, starting with an empty store");
        return Ok(store);
    }

    for product in demo_products() {
        store.add_product(product)?;
    }
    store.add_user(User::new(
        config.admin_login.clone(),
        config.admin_password.clone(),
    ))?;

    info!(
        products = store.catalog().len(),
        users = store.accounts().len(),
        "demo data loaded"
    );
    Ok(store)
}
