//! Text rendering for product listings and receipts.

use std::io::Write;
use std::rc::Rc;

use storefront_core::{OrderReceipt, Product};

use crate::config::ReceiptFormat;
use crate::error::ShellResult;

/// One product per line, numbered from 0, or "No products found.".
pub fn write_products<W: Write>(out: &mut W, products: &[Rc<Product>]) -> ShellResult<()> {
    if products.is_empty() {
        writeln!(out, "No products found.")?;
        return Ok(());
    }

    writeln!(out, "Products found:")?;
    for (i, product) in products.iter().enumerate() {
        writeln!(out, "{}", product_line(i, product))?;
    }
    Ok(())
}

pub fn product_line(index: usize, product: &Product) -> String {
    format!(
        "{}. {} - {} (Category: {}, Rating: {})",
        index, product.name, product.price, product.category, product.rating
    )
}

pub fn write_receipt<W: Write>(
    out: &mut W,
    receipt: &OrderReceipt,
    format: ReceiptFormat,
) -> ShellResult<()> {
    writeln!(out, "Order created successfully.")?;
    match format {
        ReceiptFormat::Text => writeln!(
            out,
            "Order details: Total Price = {}, Status = {}",
            receipt.total, receipt.status
        )?,
        ReceiptFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(receipt)?)?,
    }
    Ok(())
}
