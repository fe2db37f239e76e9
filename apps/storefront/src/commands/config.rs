//! # Config Commands
//!
//! Read-only access to the storefront configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current storefront configuration.
///
/// ## When Used
/// - Session banner (store name)
/// - Checkout view (customer and delivery address)
/// - `config` shell command
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
