//! # Interactive Session
//!
//! Drives one shopper through login, one search and an optional order.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  login + password ──► authenticate ──✗──► "Invalid login or password." │
//! │        │ ✓                                                              │
//! │        ▼                                                                │
//! │  search menu (1 price / 2 category / 3 rating) ──► product listing     │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  "create an order?" ──no──► done                                        │
//! │        │ yes                                                            │
//! │        ▼                                                                │
//! │  full catalog ──► indices ──► quantity ──► Store::create_order         │
//! │                                                 │                       │
//! │                                   receipt or rejection message          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generic over the input and output streams so tests can script a session
//! with in-memory buffers. End of input at any prompt ends the session.

use std::io::{BufRead, Write};

use storefront_core::{CoreError, OrderReceipt, ProductSearch, Store, UserId};
use tracing::{debug, info};

use crate::config::ShellConfig;
use crate::error::ShellResult;
use crate::input::{is_yes, parse_price, parse_quantity, parse_rating, parse_selection};
use crate::render::{write_products, write_receipt};

/// How a session ended. Every variant is a clean exit.
#[derive(Debug)]
pub enum SessionOutcome {
    /// Credentials did not match any account.
    AuthenticationFailed,
    /// Logged in, searched, declined to order.
    Browsed,
    /// None of the typed indices pointed at a product.
    NothingSelected,
    /// Quantity was unparsable or not positive.
    InvalidQuantity,
    /// The core accepted the order.
    OrderPlaced(OrderReceipt),
    /// The core rejected the order.
    OrderRejected(CoreError),
    /// Input ran out before the session finished.
    EndOfInput,
}

pub struct Session<'a, R, W> {
    store: &'a mut Store,
    config: &'a ShellConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a mut Store, config: &'a ShellConfig, input: R, output: W) -> Self {
        Self {
            store,
            config,
            input,
            output,
        }
    }

    pub fn run(mut self) -> ShellResult<SessionOutcome> {
        writeln!(self.output, "Welcome to {}!", self.config.store_name)?;

        let Some(login) = self.prompt("Enter your login:")? else {
            return Ok(SessionOutcome::EndOfInput);
        };
        let Some(password) = self.prompt("Enter your password:")? else {
            return Ok(SessionOutcome::EndOfInput);
        };

        let user_id = match self.store.authenticate(&login, &password) {
            Ok(user) => user.id(),
            Err(_) => {
                writeln!(self.output, "Invalid login or password.")?;
                return Ok(SessionOutcome::AuthenticationFailed);
            }
        };
        writeln!(self.output, "Login successful!")?;
        info!(login = %login, "shopper logged in");

        if !self.search()? {
            return Ok(SessionOutcome::EndOfInput);
        }

        let Some(answer) = self.prompt("Do you want to create an order? (yes/no)")? else {
            return Ok(SessionOutcome::EndOfInput);
        };
        if !is_yes(&answer) {
            return Ok(SessionOutcome::Browsed);
        }

        self.order(&user_id)
    }

    /// Runs the search menu once. Returns `false` if input ran out.
    fn search(&mut self) -> ShellResult<bool> {
        writeln!(self.output, "Search for products:")?;
        writeln!(self.output, "1. Search by price range")?;
        writeln!(self.output, "2. Search by category")?;
        writeln!(self.output, "3. Search by rating")?;
        let Some(choice) = self.prompt("Enter your choice:")? else {
            return Ok(false);
        };
        debug!(choice = choice.as_str(), "search menu choice");

        match choice.trim() {
            "1" => {
                let Some(min) = self.prompt("Enter minimum price:")? else {
                    return Ok(false);
                };
                let min = match parse_price(&min) {
                    Ok(min) => min,
                    Err(e) => {
                        writeln!(self.output, "Invalid price: {}", e)?;
                        return Ok(true);
                    }
                };
                let Some(max) = self.prompt("Enter maximum price:")? else {
                    return Ok(false);
                };
                let max = match parse_price(&max) {
                    Ok(max) => max,
                    Err(e) => {
                        writeln!(self.output, "Invalid price: {}", e)?;
                        return Ok(true);
                    }
                };
                let found = self.store.search_by_price(min, max);
                write_products(&mut self.output, &found)?;
            }
            "2" => {
                let Some(category) = self.prompt("Enter category:")? else {
                    return Ok(false);
                };
                let found = self.store.search_by_category(&category);
                write_products(&mut self.output, &found)?;
            }
            "3" => {
                let Some(rating) = self.prompt("Enter minimum rating:")? else {
                    return Ok(false);
                };
                match parse_rating(&rating) {
                    Ok(rating) => {
                        let found = self.store.search_by_rating(rating);
                        write_products(&mut self.output, &found)?;
                    }
                    Err(e) => writeln!(self.output, "Invalid rating: {}", e)?,
                }
            }
            _ => writeln!(self.output, "Invalid choice.")?,
        }

        Ok(true)
    }

    fn order(&mut self, user_id: &UserId) -> ShellResult<SessionOutcome> {
        let everything: Vec<_> = self.store.catalog().iter().cloned().collect();
        write_products(&mut self.output, &everything)?;

        let Some(raw_indices) = self.prompt("Enter product indices (comma-separated):")? else {
            return Ok(SessionOutcome::EndOfInput);
        };
        let indices = parse_selection(&raw_indices, self.store.catalog().len());
        if indices.is_empty() {
            writeln!(self.output, "Invalid product indices. No products selected.")?;
            return Ok(SessionOutcome::NothingSelected);
        }

        let Some(raw_quantity) = self.prompt("Enter quantity:")? else {
            return Ok(SessionOutcome::EndOfInput);
        };
        let quantity = match parse_quantity(&raw_quantity) {
            Ok(quantity) => quantity,
            Err(_) => {
                writeln!(self.output, "Invalid quantity.")?;
                return Ok(SessionOutcome::InvalidQuantity);
            }
        };

        match self.store.order_by_indices(user_id, &indices, quantity) {
            Ok(receipt) => {
                write_receipt(&mut self.output, &receipt, self.config.receipt_format)?;
                Ok(SessionOutcome::OrderPlaced(receipt))
            }
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                Ok(SessionOutcome::OrderRejected(e))
            }
        }
    }

    /// Prints `message` and reads one line without its line ending.
    /// `None` means end of input.
    fn prompt(&mut self, message: &str) -> ShellResult<Option<String>> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::seed::build_store;

    fn run_script(script: &str) -> (SessionOutcome, String, Store) {
        let config = ShellConfig::default();
        let mut store = build_store(&config).unwrap();
        let mut output = Vec::new();
        let outcome = Session::new(&mut store, &config, Cursor::new(script), &mut output)
            .run()
            .unwrap();
        (outcome, String::from_utf8(output).unwrap(), store)
    }

    #[test]
    fn test_prompt_strips_crlf() {
        let (outcome, _, _) = run_script("admin\r\nadmin\r\n4\r\nno\r\n");
        assert!(matches!(outcome, SessionOutcome::Browsed));
    }

    #[test]
    fn test_invalid_menu_choice_still_offers_order() {
        let (outcome, out, _) = run_script("admin\nadmin\n9\nno\n");
        assert!(out.contains("Invalid choice."));
        assert!(out.contains("Do you want to create an order? (yes/no)"));
        assert!(matches!(outcome, SessionOutcome::Browsed));
    }

    #[test]
    fn test_bad_price_skips_search() {
        let (_, out, _) = run_script("admin\nadmin\n1\nabc\nno\n");
        assert!(out.contains("Invalid price: amount has invalid format"));
        assert!(!out.contains("Products found:"));
    }

    #[test]
    fn test_end_of_input_mid_session() {
        let (outcome, _, _) = run_script("admin\n");
        assert!(matches!(outcome, SessionOutcome::EndOfInput));
    }
}
