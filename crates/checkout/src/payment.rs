//! Payment strategies.

use std::str::FromStr;

use crate::error::CheckoutError;
use crate::order::Order;

/// A way of paying for an order.
///
/// Implementations describe the simulated action in the log and report
/// whether the charge went through. The coordinator only sees this trait, so
/// adding a new method does not touch [`crate::OrderService`].
pub trait PaymentProcessor {
    /// Short name used in log fields.
    fn name(&self) -> &'static str;

    /// Charges the order. Returns `true` if the payment succeeded.
    fn pay(&self, order: &Order) -> bool;
}

impl<P: PaymentProcessor + ?Sized> PaymentProcessor for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn pay(&self, order: &Order) -> bool {
        (**self).pay(order)
    }
}

impl<P: PaymentProcessor + ?Sized> PaymentProcessor for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn pay(&self, order: &Order) -> bool {
        (**self).pay(order)
    }
}

/// Simulated credit card charge. Always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardPayment;

impl PaymentProcessor for CreditCardPayment {
    fn name(&self) -> &'static str {
        "credit_card"
    }

    fn pay(&self, order: &Order) -> bool {
        tracing::info!(
            order_id = %order.id(),
            amount = %order.total_price(),
            "Pembayaran menggunakan Kartu Kredit..."
        );
        true
    }
}

/// Simulated bank transfer. Always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct BankTransferPayment;

impl PaymentProcessor for BankTransferPayment {
    fn name(&self) -> &'static str {
        "bank_transfer"
    }

    fn pay(&self, order: &Order) -> bool {
        tracing::info!(
            order_id = %order.id(),
            amount = %order.total_price(),
            "Pembayaran melalui Bank Transfer..."
        );
        true
    }
}

/// Payment method labels understood by the demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }

    /// Returns the strategy implementing this method.
    pub fn processor(&self) -> Box<dyn PaymentProcessor> {
        match self {
            PaymentMethod::CreditCard => Box::new(CreditCardPayment),
            PaymentMethod::BankTransfer => Box::new(BankTransferPayment),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            other => Err(CheckoutError::UnknownPaymentMethod(other.to_string())),
        }
    }
}
