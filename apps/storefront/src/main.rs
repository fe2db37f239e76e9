//! # Gebeta Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Gebeta Storefront                                │
//! │                                                                         │
//! │  terminal ──► shell.rs ──► commands/ ──► gebeta-core OrderStore         │
//! │                                 │                                       │
//! │                                 └──► payment.rs (mock wallet delay)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The actual setup is in lib.rs so tests can drive the same code.

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    gebeta_storefront::run().await
}
