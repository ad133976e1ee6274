//! The order record and its value types.

mod state;
mod value_objects;

pub use state::OrderStatus;
pub use value_objects::Money;

use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, Result};

/// A customer order awaiting checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    total_price: Money,
    status: OrderStatus,
}

impl Order {
    /// Creates a new open order.
    pub fn new(customer_name: impl Into<String>, total_price: Money) -> Self {
        Self {
            id: OrderId::new(),
            customer_name: customer_name.into(),
            total_price,
            status: OrderStatus::Open,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn total_price(&self) -> Money {
        self.total_price
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Moves the order from `Open` to `Paid`.
    pub fn mark_paid(&mut self) -> Result<()> {
        if !self.status.can_pay() {
            return Err(CheckoutError::InvalidStateTransition {
                current: self.status,
                action: "pay",
            });
        }
        self.status = OrderStatus::Paid;
        Ok(())
    }

    /// Sets the status without checking the transition.
    pub(crate) fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}
