//! # Storefront Console Shell
//!
//! Thin console front end over `storefront-core`. It owns stdin/stdout,
//! configuration and logging; all catalog and ordering rules live in the
//! core crate.
//!
//! ## Module Organization
//! ```text
//! storefront_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── STOREFRONT_* environment settings
//! ├── seed.rs         ◄─── Demo catalog and admin account
//! ├── session.rs      ◄─── Login → search → order dialogue
//! ├── input.rs        ◄─── Parsing of typed values
//! ├── render.rs       ◄─── Product listings and receipts
//! └── error.rs        ◄─── ShellError
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod seed;
pub mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{ReceiptFormat, ShellConfig};
pub use error::{ShellError, ShellResult};
pub use session::{Session, SessionOutcome};

/// Runs one interactive session on the process's stdin and stdout.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr)
/// 2. Read `STOREFRONT_*` configuration
/// 3. Build the store (demo data unless disabled)
/// 4. Run the session to completion
///
/// Every session outcome, including a failed login, returns `Ok`.
pub fn run() -> ShellResult<()> {
    init_tracing();

    let config = ShellConfig::from_env()?;
    info!(store_name = %config.store_name, seed_demo = config.seed_demo, "starting storefront");

    let mut store = seed::build_store(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = Session::new(&mut store, &config, stdin.lock(), stdout.lock()).run()?;

    info!(?outcome, "session finished");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - searches, lookups and registrations
/// - `RUST_LOG=storefront_core=info` - created orders
/// - Default: WARN (rejections and failed logins), written to stderr
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
