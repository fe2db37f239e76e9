//! # Commands Module
//!
//! Everything the shell can ask the session to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── catalog.rs     ◄─── Restaurants, categories, search, menu
//! ├── cart.rs        ◄─── Cart manipulation
//! ├── navigation.rs  ◄─── View changes (open, checkout, back, home)
//! ├── checkout.rs    ◄─── Checkout summary and payment
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Shell                                                                  │
//! │  ─────                                                                  │
//! │  > add m2                                                               │
//! │         │                                                               │
//! │         │ ShellCommand::from_str                                        │
//! │         ▼                                                               │
//! │  Command function                                                       │
//! │  ────────────────                                                       │
//! │  fn add_to_cart(                                                        │
//! │      catalog: &CatalogState,  ◄── Only the state it needs              │
//! │      session: &SessionState,                                            │
//! │      item_id: &str,           ◄── Parsed argument                      │
//! │  ) -> Result<AddToCartResponse, ApiError>                               │
//! │         │                                                               │
//! │         │ (text render, or JSON via serde)                              │
//! │         ▼                                                               │
//! │  Shell prints: "Added Doro Wat to cart"                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Response types derive `Serialize` with camelCase keys so a web front end
//! could consume the same payloads.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod navigation;
