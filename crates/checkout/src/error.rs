//! Checkout error types.

use common::OrderId;
use thiserror::Error;

use crate::order::OrderStatus;

/// Errors that can occur during checkout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The payment strategy refused the charge.
    #[error("Payment declined for order {order_id}")]
    PaymentDeclined { order_id: OrderId },

    /// The order is not in a state that allows the requested action.
    #[error("Invalid state transition: cannot {action} from {current} state")]
    InvalidStateTransition {
        current: OrderStatus,
        action: &'static str,
    },

    /// A payment method label did not match any known strategy.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),
}

/// Convenience type alias for checkout results.
pub type Result<T> = std::result::Result<T, CheckoutError>;
