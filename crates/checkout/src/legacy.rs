//! The checkout flow before refactoring.
//!
//! Kept for comparison with [`crate::OrderService`]. Payment selection,
//! payment and notification all live in one method and the set of payment
//! methods is closed.

use crate::order::{Order, OrderStatus};

/// Monolithic checkout handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderManager;

impl OrderManager {
    pub fn new() -> Self {
        Self
    }

    /// Checks out `order` with a payment method given by label.
    ///
    /// Returns `false` for an unrecognized label, leaving the order untouched.
    /// Any recognized label marks the order paid, even if it already was.
    pub fn process_checkout(&self, order: &mut Order, payment_method: &str) -> bool {
        tracing::info!("Memulai checkout untuk {}...", order.customer_name());

        if payment_method == "credit_card" {
            tracing::info!("Processing Credit Card...");
        } else if payment_method == "bank_transfer" {
            tracing::info!("Processing Bank Transfer...");
        } else {
            tracing::warn!(payment_method, "Metode tidak valid.");
            return false;
        }

        tracing::info!("Mengirim notifikasi ke {}...", order.customer_name());
        order.set_status(OrderStatus::Paid);
        true
    }
}
