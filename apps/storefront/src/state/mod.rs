//! # State Module
//!
//! Manages application state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Separation of Concerns**: Each state type has a single responsibility
//! 2. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 3. **Easier Testing**: Tests build only the states a command touches
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ CatalogState │  │ SessionState │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<        │  │  Arc<Mutex<  │  │  store_name      │              │
//! │  │   Catalog>   │  │   Session    │  │  payment delay   │              │
//! │  │              │  │  >>          │  │  customer        │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  • CatalogState: read-only after startup                               │
//! │  • SessionState: the one order store, single writer                    │
//! │  • ConfigState: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod session;

pub use catalog::CatalogState;
pub use config::{ConfigError, ConfigState};
pub use session::{Session, SessionState};
