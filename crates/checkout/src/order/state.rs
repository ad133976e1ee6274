//! Order status.

use serde::{Deserialize, Serialize};

/// The status of an order.
///
/// ```text
/// Open ──► Paid
/// ```
///
/// The transition is one-directional; a paid order is never reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order is waiting for payment.
    #[default]
    Open,

    /// Payment succeeded (terminal state).
    Paid,
}

impl OrderStatus {
    /// Returns true if the order can be paid in this status.
    pub fn can_pay(&self) -> bool {
        matches!(self, OrderStatus::Open)
    }

    /// Returns the status label as printed by the demos.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::Paid => "paid",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_open() {
        assert_eq!(OrderStatus::default(), OrderStatus::Open);
    }

    #[test]
    fn test_only_open_can_pay() {
        assert!(OrderStatus::Open.can_pay());
        assert!(!OrderStatus::Paid.can_pay());
    }

    #[test]
    fn test_display() {
        assert_eq!(OrderStatus::Open.to_string(), "open");
        assert_eq!(OrderStatus::Paid.to_string(), "paid");
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Paid).unwrap();
        assert_eq!(json, "\"paid\"");
        let back: OrderStatus = serde_json::from_str("\"open\"").unwrap();
        assert_eq!(back, OrderStatus::Open);
    }
}
