//! # Checkout Commands

use chrono::Utc;
use gebeta_core::{Action, OrderConfirmation, PaymentMethod, View};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::commands::cart::CartResponse;
use crate::error::{ApiError, ErrorCode};
use crate::payment::MockPaymentGateway;
use crate::state::{ConfigState, SessionState};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub customer_name: String,
    pub customer_email: String,
    pub delivery_address: String,
    pub restaurant: Option<String>,
    pub cart: CartResponse,
    pub methods: Vec<PaymentMethod>,
}

/// Order review shown on the checkout view.
pub fn get_checkout_summary(
    config: &ConfigState,
    session: &SessionState,
) -> Result<CheckoutSummary, ApiError> {
    debug!("get_checkout_summary command");

    session.with_store(|store| {
        if store.view() != View::Checkout {
            return Err(ApiError::new(
                ErrorCode::InvalidTransition,
                format!("Not at checkout (on the {} view)", store.view()),
            ));
        }

        Ok(CheckoutSummary {
            customer_name: config.customer_name.clone(),
            customer_email: config.customer_email.clone(),
            delivery_address: config.delivery_address.clone(),
            restaurant: store.active_restaurant().map(|r| r.name.clone()),
            cart: CartResponse::from(store),
            methods: PaymentMethod::ALL.to_vec(),
        })
    })
}

/// Pays the grand total with `method` and moves the session to success.
///
/// ## Flow
/// 1. Confirm the session is at checkout and snapshot the cart with its grand total
/// 2. Charge that total through the gateway (awaits the delay)
/// 3. Build the `OrderConfirmation` from the snapshot
/// 4. Dispatch `PaymentCompleted`
///
/// The cart is left intact; it is cleared when the customer returns home.
pub async fn pay(
    gateway: &MockPaymentGateway,
    session: &SessionState,
    method: PaymentMethod,
) -> Result<OrderConfirmation, ApiError> {
    debug!(method = %method, "pay command");

    let (amount, lines) = session.with_store(|store| {
        store.check_transition(&Action::PaymentCompleted)?;
        Ok::<_, ApiError>((store.compute_totals().grand_total, store.lines().to_vec()))
    })?;

    let receipt = gateway.pay(method, amount).await?;

    let confirmation = session.with_session_mut(|session| {
        // The lock was released while the wallet was processing.
        session.store.check_transition(&Action::PaymentCompleted)?;

        let confirmation = OrderConfirmation {
            order_id: Uuid::new_v4(),
            method: receipt.method,
            amount: receipt.amount,
            lines,
            placed_at: Utc::now(),
        };

        session.store.payment_completed();
        session.last_order = Some(confirmation.clone());

        Ok::<_, ApiError>(confirmation)
    })?;

    info!(
        order_id = %confirmation.order_id,
        reference = %receipt.reference,
        method = %method,
        amount = %confirmation.amount,
        "Order placed"
    );

    Ok(confirmation)
}

/// The confirmation of the last paid order, if any.
pub fn get_last_order(session: &SessionState) -> Option<OrderConfirmation> {
    debug!("get_last_order command");
    session.with_session(|s| s.last_order.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::commands::navigation::{begin_checkout, go_home, open_restaurant};
    use crate::state::CatalogState;
    use std::time::Duration;

    fn at_checkout() -> (CatalogState, SessionState) {
        let catalog = CatalogState::demo();
        let session = SessionState::new();
        open_restaurant(&catalog, &session, "res1").unwrap();
        add_to_cart(&catalog, &session, "m2").unwrap();
        add_to_cart(&catalog, &session, "m2").unwrap();
        begin_checkout(&session).unwrap();
        (catalog, session)
    }

    #[test]
    fn test_summary_only_at_checkout() {
        let config = ConfigState::default();
        let session = SessionState::new();
        let err = get_checkout_summary(&config, &session).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTransition);

        let (_, session) = at_checkout();
        let summary = get_checkout_summary(&config, &session).unwrap();
        assert_eq!(summary.restaurant.as_deref(), Some("Habesha Delight"));
        assert_eq!(summary.cart.totals.grand_total.minor(), 75000);
        assert_eq!(summary.methods.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pay_moves_to_success_and_keeps_cart() {
        let (_, session) = at_checkout();
        let gateway = MockPaymentGateway::new(Duration::from_millis(2000));

        let confirmation = pay(&gateway, &session, PaymentMethod::AwashBirr).await.unwrap();

        assert_eq!(confirmation.amount.minor(), 75000);
        assert_eq!(confirmation.total_quantity(), 2);
        assert_eq!(session.with_store(|s| s.view()), View::Success);
        assert_eq!(session.with_store(|s| s.cart().total_quantity()), 2);
        assert_eq!(get_last_order(&session), Some(confirmation.clone()));

        go_home(&session).unwrap();
        assert!(session.with_store(|s| s.cart().is_empty()));
        // The confirmation survives the cleared cart.
        assert_eq!(get_last_order(&session).unwrap().lines.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pay_refused_outside_checkout() {
        let session = SessionState::new();
        let gateway = MockPaymentGateway::new(Duration::ZERO);

        let err = pay(&gateway, &session, PaymentMethod::Telebirr).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTransition);
        assert!(get_last_order(&session).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirmation_lists_what_was_charged() {
        let (catalog, session) = at_checkout();
        let gateway = MockPaymentGateway::new(Duration::from_millis(2000));

        let late_add = async {
            tokio::time::sleep(Duration::from_millis(1000)).await;
            add_to_cart(&catalog, &session, "m1").unwrap();
        };
        let (confirmation, ()) =
            tokio::join!(pay(&gateway, &session, PaymentMethod::CbeBirr), late_add);
        let confirmation = confirmation.unwrap();

        assert_eq!(confirmation.amount.minor(), 75000);
        assert_eq!(confirmation.lines.len(), 1);
        let charged_lines: i64 = confirmation.lines.iter().map(|l| l.line_total().minor()).sum();
        assert_eq!(charged_lines + 5000, confirmation.amount.minor());
    }
}
