//! # Shell Configuration
//!
//! Settings read once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use std::str::FromStr;

use crate::error::{ShellError, ShellResult};

pub const ENV_STORE_NAME: &str = "STOREFRONT_STORE_NAME";
pub const ENV_SEED_DEMO: &str = "STOREFRONT_SEED_DEMO";
pub const ENV_ADMIN_LOGIN: &str = "STOREFRONT_ADMIN_LOGIN";
pub const ENV_ADMIN_PASSWORD: &str = "STOREFRONT_ADMIN_PASSWORD";
pub const ENV_RECEIPT_FORMAT: &str = "STOREFRONT_RECEIPT_FORMAT";

/// Console shell configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    /// Shown in the welcome banner.
    pub store_name: String,

    /// Load the demo catalog and account at startup.
    pub seed_demo: bool,

    /// Demo account login.
    pub admin_login: String,

    /// Demo account password (plain text).
    pub admin_password: String,

    /// How the order receipt is printed.
    pub receipt_format: ReceiptFormat,
}

/// Receipt output style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReceiptFormat {
    /// `Order details: Total Price = $450.00, Status = In Progress`
    #[default]
    Text,

    /// The receipt as pretty-printed JSON.
    Json,
}

impl FromStr for ReceiptFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReceiptFormat::Text),
            "json" => Ok(ReceiptFormat::Json),
            other => Err(format!("expected text or json, got '{}'", other)),
        }
    }
}

impl Default for ShellConfig {
    /// Defaults match the bundled demo: one `admin`/`admin` account and
    /// plain-text receipts.
    fn default() -> Self {
        ShellConfig {
            store_name: "Storefront Demo Store".to_string(),
            seed_demo: true,
            admin_login: "admin".to_string(),
            admin_password: "admin".to_string(),
            receipt_format: ReceiptFormat::Text,
        }
    }
}

impl ShellConfig {
    /// Creates a config from process environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: banner text
    /// - `STOREFRONT_SEED_DEMO`: `true`/`false` (also `1`/`0`, `yes`/`no`)
    /// - `STOREFRONT_ADMIN_LOGIN`, `STOREFRONT_ADMIN_PASSWORD`: demo account
    /// - `STOREFRONT_RECEIPT_FORMAT`: `text` or `json`
    pub fn from_env() -> ShellResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> ShellResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShellConfig::default();

        if let Some(store_name) = lookup(ENV_STORE_NAME) {
            config.store_name = store_name;
        }

        if let Some(raw) = lookup(ENV_SEED_DEMO) {
            config.seed_demo = parse_flag(&raw)
                .ok_or_else(|| ShellError::config(ENV_SEED_DEMO, "expected true or false"))?;
        }

        if let Some(login) = lookup(ENV_ADMIN_LOGIN) {
            config.admin_login = login;
        }

        if let Some(password) = lookup(ENV_ADMIN_PASSWORD) {
            config.admin_password = password;
        }

        if let Some(raw) = lookup(ENV_RECEIPT_FORMAT) {
            config.receipt_format = raw
                .parse()
                .map_err(|reason: String| ShellError::config(ENV_RECEIPT_FORMAT, reason))?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ShellConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert!(config.seed_demo);
        assert_eq!(config.admin_login, "admin");
    }

    #[test]
    fn test_env_overrides() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            (ENV_STORE_NAME, "Corner Shop"),
            (ENV_SEED_DEMO, "no"),
            (ENV_ADMIN_LOGIN, "root"),
            (ENV_ADMIN_PASSWORD, "hunter2"),
            (ENV_RECEIPT_FORMAT, "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Corner Shop");
        assert!(!config.seed_demo);
        assert_eq!(config.admin_login, "root");
        assert_eq!(config.admin_password, "hunter2");
        assert_eq!(config.receipt_format, ReceiptFormat::Json);
    }

    #[test]
    fn test_receipt_format_parses_from_text() {
        assert_eq!(" Text ".parse::<ReceiptFormat>(), Ok(ReceiptFormat::Text));
        assert_eq!("json".parse::<ReceiptFormat>(), Ok(ReceiptFormat::Json));
        assert!("yaml".parse::<ReceiptFormat>().is_err());
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let err = ShellConfig::from_lookup(lookup_from(&[(ENV_SEED_DEMO, "maybe")])).unwrap_err();
        assert!(matches!(err, ShellError::Config { ref key, .. } if key == ENV_SEED_DEMO));

        let err = ShellConfig::from_lookup(lookup_from(&[(ENV_RECEIPT_FORMAT, "xml")])).unwrap_err();
        assert!(matches!(err, ShellError::Config { ref key, .. } if key == ENV_RECEIPT_FORMAT));
    }
}
