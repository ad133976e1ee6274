//! Order checkout, before and after the refactoring.
//!
//! [`legacy::OrderManager`] handles payment selection, payment and
//! notification in one method. [`OrderService`] only coordinates: it is
//! handed a [`PaymentProcessor`] and a [`NotificationService`] and drives
//! the single `open -> paid` transition of an [`Order`].
//!
//! New payment methods are added by implementing [`PaymentProcessor`];
//! `OrderService` does not change.

pub mod error;
pub mod legacy;
pub mod notification;
pub mod order;
pub mod payment;
pub mod service;

pub use error::{CheckoutError, Result};
pub use legacy::OrderManager;
pub use notification::{
    InMemoryNotificationService, LogNotificationService, Notification, NotificationService,
};
pub use order::{Money, Order, OrderStatus};
pub use payment::{BankTransferPayment, CreditCardPayment, PaymentMethod, PaymentProcessor};
pub use service::OrderService;
