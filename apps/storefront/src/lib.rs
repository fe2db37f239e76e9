//! # Gebeta Storefront Library
//!
//! Terminal storefront for the Gebeta food-ordering app.
//! This is the main entry point that configures and runs a session.
//!
//! ## Module Organization
//! ```text
//! gebeta_storefront/
//! ├── lib.rs          ◄─── You are here (logging & session loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Read-only catalog wrapper
//! │   ├── session.rs  ◄─── The session's order store
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Browse/search commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── navigation.rs ◄─ View changes
//! │   └── checkout.rs ◄─── Checkout and payment
//! ├── payment.rs      ◄─── Mock wallet gateway
//! ├── shell.rs        ◄─── Line parser and renderer
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │   CatalogState   │ │   SessionState   │ │    ConfigState       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Restaurants   │ │  • Order store   │ │  • Store name        │   │
//! │  │  • Categories    │ │  • Last order    │ │  • Payment delay     │   │
//! │  │                  │ │                  │ │  • Customer          │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  Each command only takes the state it needs.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod payment;
pub mod shell;
pub mod state;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use shell::{Reply, Shell, ShellCommand};
use state::{CatalogState, ConfigState, SessionState};

/// Runs one storefront session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ─── tracing-subscriber, RUST_LOG or default      │
/// │  2. Load Configuration ─── GEBETA_* env vars over defaults              │
/// │  3. Build State ────────── demo catalog, fresh session (home view)      │
/// │  4. Read Lines ─────────── parse, execute, print until quit or EOF      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ConfigState::from_env()?;
    info!(store = %config.store_name, delay_ms = config.payment_delay_ms, "Starting storefront session");

    let shell = Shell::new(CatalogState::demo(), SessionState::new(), config);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(format!("{}\n{}", shell.banner(), shell.prompt()).as_bytes())
        .await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            stdout.write_all(shell.prompt().as_bytes()).await?;
            stdout.flush().await?;
            continue;
        }

        let output = match line.parse::<ShellCommand>() {
            Ok(command) => {
                if matches!(command, ShellCommand::Pay(_)) {
                    stdout.write_all(b"Processing payment...\n").await?;
                    stdout.flush().await?;
                }

                match shell.execute(command).await {
                    Ok(Reply::Text(text)) => text,
                    Ok(Reply::Quit) => break,
                    Err(err) => {
                        warn!(code = ?err.code, "{}", err.message);
                        err.to_string()
                    }
                }
            }
            Err(err) => err.to_string(),
        };

        stdout
            .write_all(format!("{}\n{}", output, shell.prompt()).as_bytes())
            .await?;
        stdout.flush().await?;
    }

    info!("Storefront session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with shell output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=gebeta=trace` - Show trace for gebeta crates only
/// - Default: INFO, DEBUG for gebeta crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,gebeta=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
