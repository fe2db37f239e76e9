//! # Mock Payment Gateway
//!
//! Stands in for the mobile-wallet integrations on the checkout view.
//!
//! ## Payment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  pay telebirr                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MockPaymentGateway::pay(Telebirr, grand_total)                         │
//! │       │  amount > 0?  ── no ──► PaymentError::InvalidAmount             │
//! │       ▼                                                                 │
//! │  "Processing..."  (tokio::time::sleep(delay))                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PaymentReceipt { reference, method, amount }                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.payment_completed()   ← the store only reacts to the signal     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The wait happens here, never inside the order store.

use std::time::Duration;

use gebeta_core::{Money, PaymentMethod};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Why the mock wallet refused a charge.
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Invalid payment amount: {0}")]
    InvalidAmount(Money),
}

/// What the wallet hands back after a successful charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Wallet-side transaction reference.
    pub reference: Uuid,
    pub method: PaymentMethod,
    pub amount: Money,
}

/// A wallet that always succeeds after a fixed delay.
#[derive(Debug, Clone)]
pub struct MockPaymentGateway {
    delay: Duration,
}

impl MockPaymentGateway {
    pub fn new(delay: Duration) -> Self {
        MockPaymentGateway { delay }
    }

    /// The configured processing delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Charges `amount` to `method`.
    ///
    /// ## Returns
    /// - `Ok(PaymentReceipt)` once the delay has elapsed
    /// - `Err(PaymentError::InvalidAmount)` right away for amounts ≤ 0
    pub async fn pay(
        &self,
        method: PaymentMethod,
        amount: Money,
    ) -> Result<PaymentReceipt, PaymentError> {
        if !amount.is_positive() {
            return Err(PaymentError::InvalidAmount(amount));
        }

        debug!(method = %method, amount = %amount, delay_ms = self.delay.as_millis() as u64, "Processing mock payment");
        tokio::time::sleep(self.delay).await;

        Ok(PaymentReceipt {
            reference: Uuid::new_v4(),
            method,
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_pay_waits_for_delay() {
        let gateway = MockPaymentGateway::new(Duration::from_secs(2));
        let started = Instant::now();

        let receipt = gateway
            .pay(PaymentMethod::CbeBirr, Money::from_minor(120000))
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_secs(2));
        assert_eq!(receipt.method, PaymentMethod::CbeBirr);
        assert_eq!(receipt.amount.minor(), 120000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejects_non_positive_amount_without_waiting() {
        let gateway = MockPaymentGateway::new(Duration::from_secs(2));
        let started = Instant::now();

        let err = gateway
            .pay(PaymentMethod::Telebirr, Money::zero())
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentError::InvalidAmount(_)));
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_receipts_get_distinct_references() {
        let gateway = MockPaymentGateway::new(Duration::ZERO);
        let a = gateway.pay(PaymentMethod::Telebirr, Money::from_minor(1)).await.unwrap();
        let b = gateway.pay(PaymentMethod::Telebirr, Money::from_minor(1)).await.unwrap();
        assert_ne!(a.reference, b.reference);
    }
}
