//! Notification senders.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use common::OrderId;

use crate::order::Order;

/// Sends the payment confirmation for an order.
pub trait NotificationService {
    fn send(&self, order: &Order);
}

impl<N: NotificationService + ?Sized> NotificationService for Box<N> {
    fn send(&self, order: &Order) {
        (**self).send(order)
    }
}

impl<N: NotificationService + ?Sized> NotificationService for &N {
    fn send(&self, order: &Order) {
        (**self).send(order)
    }
}

fn confirmation_message(order: &Order) -> String {
    format!("🔔 Notifikasi terkirim ke {}", order.customer_name())
}

/// Writes the confirmation to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotificationService;

impl NotificationService for LogNotificationService {
    fn send(&self, order: &Order) {
        tracing::info!(order_id = %order.id(), "{}", confirmation_message(order));
    }
}

/// A notification captured by [`InMemoryNotificationService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub order_id: OrderId,
    pub recipient: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// In-memory notifier for testing.
///
/// Clones share the same outbox, so a test can keep a handle while the
/// coordinator owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationService {
    outbox: Rc<RefCell<Vec<Notification>>>,
}

impl InMemoryNotificationService {
    /// Creates an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of notifications sent so far.
    pub fn sent_count(&self) -> usize {
        self.outbox.borrow().len()
    }

    /// Returns a copy of every notification sent so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.outbox.borrow().clone()
    }
}

impl NotificationService for InMemoryNotificationService {
    fn send(&self, order: &Order) {
        self.outbox.borrow_mut().push(Notification {
            order_id: order.id(),
            recipient: order.customer_name().to_string(),
            message: confirmation_message(order),
            sent_at: Utc::now(),
        });
    }
}
