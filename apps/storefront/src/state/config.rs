//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`GEBETA_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use gebeta_core::Money;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue { var: String, value: String },
}

/// Storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Name shown in the banner and on confirmations.
    pub store_name: String,

    /// Prefix printed before amounts.
    pub currency_symbol: String,

    /// How long the mock wallet "processes" a payment.
    pub payment_delay_ms: u64,

    /// Signed-in demo customer.
    pub customer_name: String,
    pub customer_email: String,

    /// Where orders are "delivered".
    pub delivery_address: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Gebeta Eats"
    /// - Currency: ETB
    /// - Payment delay: 2 seconds
    /// - Customer: "Habesha Foodie"
    fn default() -> Self {
        ConfigState {
            store_name: "Gebeta Eats".to_string(),
            currency_symbol: "ETB".to_string(),
            payment_delay_ms: 2000,
            customer_name: "Habesha Foodie".to_string(),
            customer_email: "user@example.com".to_string(),
            delivery_address: "Bole, Addis Ababa".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `GEBETA_STORE_NAME`: Override store name
    /// - `GEBETA_CURRENCY_SYMBOL`: Override currency prefix
    /// - `GEBETA_PAYMENT_DELAY_MS`: Mock payment delay in milliseconds
    /// - `GEBETA_CUSTOMER_NAME`, `GEBETA_CUSTOMER_EMAIL`: Demo customer
    /// - `GEBETA_DELIVERY_ADDRESS`: Delivery address shown at checkout
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`ConfigState::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("GEBETA_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("GEBETA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(delay) = lookup("GEBETA_PAYMENT_DELAY_MS") {
            config.payment_delay_ms =
                delay
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        var: "GEBETA_PAYMENT_DELAY_MS".to_string(),
                        value: delay.clone(),
                    })?;
        }

        if let Some(name) = lookup("GEBETA_CUSTOMER_NAME") {
            config.customer_name = name;
        }

        if let Some(email) = lookup("GEBETA_CUSTOMER_EMAIL") {
            config.customer_email = email;
        }

        if let Some(address) = lookup("GEBETA_DELIVERY_ADDRESS") {
            config.delivery_address = address;
        }

        Ok(config)
    }

    /// Mock payment delay as a `Duration`.
    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    /// Formats an amount with the configured currency prefix.
    ///
    /// ## Example
    /// ```rust
    /// use gebeta_core::Money;
    /// use gebeta_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_money(Money::from_minor(123450)), "ETB 1234.50");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ConfigState::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.store_name, "Gebeta Eats");
        assert_eq!(config.payment_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("GEBETA_STORE_NAME", "Addis Bites"),
            ("GEBETA_PAYMENT_DELAY_MS", " 0 "),
            ("GEBETA_CURRENCY_SYMBOL", "Br"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Addis Bites");
        assert_eq!(config.payment_delay_ms, 0);
        assert_eq!(config.format_money(Money::from_minor(5000)), "Br 50.00");
    }

    #[test]
    fn test_invalid_delay_is_rejected() {
        let err = ConfigState::from_lookup(lookup_from(&[("GEBETA_PAYMENT_DELAY_MS", "soon")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for GEBETA_PAYMENT_DELAY_MS: 'soon'"
        );
    }

    #[test]
    fn test_format_money() {
        let config = ConfigState::default();
        assert_eq!(config.format_money(Money::from_minor(120000)), "ETB 1200.00");
        assert_eq!(config.format_money(Money::from_minor(5)), "ETB 0.05");
        assert_eq!(config.format_money(Money::from_minor(-550)), "-ETB 5.50");

        let total = Money::from_minor(75000);
        assert_eq!(config.format_money(total), total.to_string());
    }
}
