//! Checkout coordinator.

use crate::error::{CheckoutError, Result};
use crate::notification::NotificationService;
use crate::order::Order;
use crate::payment::PaymentProcessor;

/// Coordinates checkout of an order.
///
/// Holds no business logic of its own: payment is delegated to `P` and the
/// confirmation to `N`. Both are supplied by the caller.
pub struct OrderService<P, N>
where
    P: PaymentProcessor,
    N: NotificationService,
{
    payment: P,
    notification: N,
}

impl<P, N> OrderService<P, N>
where
    P: PaymentProcessor,
    N: NotificationService,
{
    /// Creates a new order service.
    pub fn new(payment: P, notification: N) -> Self {
        Self {
            payment,
            notification,
        }
    }

    pub fn payment(&self) -> &P {
        &self.payment
    }

    /// Pays for an open order and sends the confirmation.
    ///
    /// On success the order is `Paid` and exactly one notification was sent.
    /// On a declined payment the order stays `Open` and nothing is sent.
    #[tracing::instrument(
        skip(self, order),
        fields(order_id = %order.id(), payment = self.payment.name())
    )]
    pub fn checkout(&self, order: &mut Order) -> Result<()> {
        metrics::counter!("checkout_attempts_total").increment(1);
        tracing::info!("Checkout: {}", order.customer_name());

        if !order.status().can_pay() {
            return Err(CheckoutError::InvalidStateTransition {
                current: order.status(),
                action: "checkout",
            });
        }

        if !self.payment.pay(order) {
            metrics::counter!("checkout_declined_total").increment(1);
            tracing::warn!("payment declined");
            return Err(CheckoutError::PaymentDeclined {
                order_id: order.id(),
            });
        }

        order.mark_paid()?;
        self.notification.send(order);

        metrics::counter!("checkout_paid_total").increment(1);
        tracing::debug!(status = %order.status(), "checkout completed");
        Ok(())
    }
}
